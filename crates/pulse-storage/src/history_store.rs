//! JSON 파일 기반 이력 저장소.
//!
//! 전체 목록을 단일 JSON 배열로 직렬화해 파일에 덮어쓴다. 부분
//! 업데이트는 없다 — 추가/삭제마다 전체를 다시 쓴다. 손상된 파일은
//! 빈 목록으로 취급하고 경고만 남긴다.

use async_trait::async_trait;
use chrono::Utc;
use pulse_core::error::CoreError;
use pulse_core::models::analysis::AnalysisResult;
use pulse_core::models::history::HistoryEntry;
use pulse_core::models::platform::PlatformId;
use pulse_core::ports::history_store::HistoryStore;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// 표시용 날짜 포맷
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

struct Inner {
    /// 최신 우선 목록
    entries: Vec<HistoryEntry>,
    /// 마지막으로 발급한 id (단조 증가 보장용)
    last_id: i64,
}

/// JSON 파일 이력 저장소 — `HistoryStore` 포트 구현
pub struct JsonHistoryStore {
    path: PathBuf,
    inner: RwLock<Inner>,
}

impl JsonHistoryStore {
    /// 파일에서 이력 로드 후 저장소 생성
    ///
    /// 파일이 없으면 빈 목록으로 시작한다. 읽기/파싱 실패도 빈
    /// 목록으로 복구한다 — 이력 손상이 앱 시작을 막아서는 안 된다.
    pub async fn open(path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CoreError::Persistence(format!(
                    "이력 디렉토리 생성 실패: {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("이력 파일 손상, 빈 목록으로 시작: {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("이력 파일 읽기 실패, 빈 목록으로 시작: {}: {}", path.display(), e);
                Vec::new()
            }
        };

        info!("이력 로드 완료: {}건 ({})", entries.len(), path.display());

        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Ok(Self {
            path,
            inner: RwLock::new(Inner { entries, last_id }),
        })
    }

    /// 이력 파일 경로
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// 전체 목록을 파일에 덮어쓰기
    async fn persist(&self, entries: &[HistoryEntry]) -> Result<(), CoreError> {
        let json = serde_json::to_string(entries)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            CoreError::Persistence(format!("이력 파일 쓰기 실패: {}: {}", self.path.display(), e))
        })?;
        debug!("이력 저장: {}건", entries.len());
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for JsonHistoryStore {
    async fn entries(&self) -> Vec<HistoryEntry> {
        self.inner.read().await.entries.clone()
    }

    async fn append(
        &self,
        result: AnalysisResult,
        file_name: &str,
        platform: PlatformId,
    ) -> Result<HistoryEntry, CoreError> {
        let now = Utc::now();
        let snapshot;
        let entry;
        {
            let mut inner = self.inner.write().await;
            // 같은 밀리초에 연속 저장해도 id가 겹치지 않도록 보정
            let id = now.timestamp_millis().max(inner.last_id + 1);
            inner.last_id = id;

            entry = HistoryEntry {
                id,
                created_at: now,
                date: chrono::Local::now().format(DATE_FORMAT).to_string(),
                file_name: file_name.to_string(),
                platform,
                data: result,
            };
            inner.entries.insert(0, entry.clone());
            snapshot = inner.entries.clone();
        }

        // 영속화 실패는 메모리 목록에 영향을 주지 않는다
        self.persist(&snapshot).await?;
        Ok(entry)
    }

    async fn remove(&self, id: i64) -> Result<(), CoreError> {
        let snapshot = {
            let mut inner = self.inner.write().await;
            let before = inner.entries.len();
            inner.entries.retain(|e| e.id != id);
            if inner.entries.len() == before {
                debug!("삭제 대상 없음: id={id}");
                return Ok(());
            }
            inner.entries.clone()
        };

        self.persist(&snapshot).await
    }

    async fn restore(&self, id: i64) -> Option<HistoryEntry> {
        self.inner
            .read()
            .await
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }
}
