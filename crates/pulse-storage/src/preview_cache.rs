//! 미리보기 캐시.
//!
//! 선택된 미디어의 사본을 캐시 디렉토리에 만들고 `PreviewHandle`로
//! 수명을 묶는다. 핸들이 드롭되면 사본이 삭제되므로, 선택이 교체될
//! 때마다 이전 미리보기가 자동으로 정리된다.

use chrono::Utc;
use pulse_core::error::CoreError;
use pulse_core::models::media::PreviewHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, warn};

/// 같은 밀리초 내 연속 stage의 파일 이름 충돌 방지용 카운터
static STAGE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// 미리보기 캐시 디렉토리
pub struct PreviewCache {
    dir: PathBuf,
}

impl PreviewCache {
    /// 캐시 디렉토리 생성 (없으면 만든다)
    pub async fn new(dir: PathBuf) -> Result<Self, CoreError> {
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            CoreError::Persistence(format!(
                "미리보기 캐시 디렉토리 생성 실패: {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    /// 캐시 디렉토리 경로
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 원본 파일을 캐시에 복사하고 핸들 반환
    ///
    /// 파일 이름은 `{millis}-{seq}.{ext}` 형태로 고유하게 만든다.
    pub async fn stage(&self, source: &Path) -> Result<PreviewHandle, CoreError> {
        let seq = STAGE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let name = format!("{}-{seq}.{ext}", Utc::now().timestamp_millis());
        let target = self.dir.join(name);

        tokio::fs::copy(source, &target).await.map_err(|e| {
            CoreError::Persistence(format!(
                "미리보기 복사 실패: {} → {}: {}",
                source.display(),
                target.display(),
                e
            ))
        })?;

        debug!("미리보기 생성: {}", target.display());
        Ok(PreviewHandle::new(target))
    }

    /// 이전 실행이 남긴 고아 파일 일괄 삭제
    ///
    /// 비정상 종료 시 드롭이 실행되지 않아 캐시 파일이 남을 수 있다.
    /// 앱 시작 시 한 번 호출한다.
    pub async fn sweep(&self) -> Result<usize, CoreError> {
        let mut removed = 0usize;
        let mut dir = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            CoreError::Persistence(format!(
                "미리보기 캐시 읽기 실패: {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        while let Some(item) = dir.next_entry().await.map_err(|e| {
            CoreError::Persistence(format!("미리보기 캐시 순회 실패: {}", e))
        })? {
            let path = item.path();
            if path.is_file() {
                match tokio::fs::remove_file(&path).await {
                    Ok(()) => removed += 1,
                    Err(e) => warn!("고아 미리보기 삭제 실패: {}: {e}", path.display()),
                }
            }
        }

        if removed > 0 {
            debug!("고아 미리보기 {removed}개 정리");
        }
        Ok(removed)
    }
}
