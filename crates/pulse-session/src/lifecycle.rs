//! 업로드/분석 세션 컨트롤러.
//!
//! 파일 선택 → 업로드(진행률) → 분석 대기 → 결과/실패 → 이력 저장까지의
//! 흐름을 구동한다. 상태 전이 자체는 [`pulse_core::models::lifecycle::apply`]
//! 순수 함수에 위임하고, 여기서는 어댑터 호출과 이벤트 공급만 담당한다.
//!
//! 파일 이름과 플랫폼은 요청 시작 시점에 캡처된다. 응답 대기 중 탭을
//! 바꿔도 이력에는 요청 당시 값이 저장된다.

use pulse_core::error::CoreError;
use pulse_core::models::analysis::AnalysisResult;
use pulse_core::models::history::HistoryEntry;
use pulse_core::models::lifecycle::{apply, LifecycleEvent, LifecycleState};
use pulse_core::models::media::MediaSelection;
use pulse_core::models::platform::PlatformId;
use pulse_core::ports::analysis_client::{AnalysisClient, AnalysisRequest};
use pulse_core::ports::history_store::HistoryStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// 진행률 채널 버퍼 (전송 스트림에 배압을 거는 크기)
const PROGRESS_BUFFER: usize = 32;

/// 진행 중인 분석 요청 핸들
///
/// 요청 시작 시점의 파일 이름/플랫폼을 고정해 둔다.
struct AnalysisHandle {
    progress_rx: mpsc::Receiver<u8>,
    join: JoinHandle<Result<AnalysisResult, CoreError>>,
    file_name: String,
    platform: PlatformId,
}

impl AnalysisHandle {
    /// 진행 중 요청 중단 — 새 파일 선택이 이전 요청을 대체할 때 사용
    fn cancel(self) {
        self.join.abort();
    }
}

/// 분석 세션 컨트롤러
pub struct AnalysisLifecycle {
    client: Arc<dyn AnalysisClient>,
    history: Arc<dyn HistoryStore>,
    state: LifecycleState,
    selection: Option<MediaSelection>,
    platform: PlatformId,
    result: Option<AnalysisResult>,
    inflight: Option<AnalysisHandle>,
}

impl AnalysisLifecycle {
    /// 새 세션 생성 — 기본 활성 플랫폼은 小红书
    pub fn new(client: Arc<dyn AnalysisClient>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            client,
            history,
            state: LifecycleState::NoFile,
            selection: None,
            platform: PlatformId::Xiaohongshu,
            result: None,
            inflight: None,
        }
    }

    /// 현재 수명주기 상태
    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// 현재 활성 플랫폼
    pub fn platform(&self) -> PlatformId {
        self.platform
    }

    /// 현재 선택된 미디어
    pub fn selection(&self) -> Option<&MediaSelection> {
        self.selection.as_ref()
    }

    /// 마지막 분석 결과
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// 새 파일 선택
    ///
    /// 진행 중인 요청이 있으면 중단한다. 이전 선택은 통째로 교체되며,
    /// 이전 미리보기 핸들이 드롭되면서 캐시 파일이 삭제된다. 이전
    /// 결과/실패 메시지도 함께 정리된다.
    ///
    /// 활성 플랫폼이 허용하지 않는 미디어 종류면 선택을 거부하고
    /// 기존 상태를 유지한다.
    pub fn select_file(&mut self, selection: MediaSelection) -> Result<(), CoreError> {
        if let Some(kind) = selection.kind {
            let descriptor = self.platform.descriptor();
            if !descriptor.accepts(kind) {
                return Err(CoreError::UnsupportedMedia(format!(
                    "{}은(는) {} 업로드를 허용하지 않습니다: {}",
                    descriptor.name,
                    kind.as_str(),
                    selection.file_name
                )));
            }
        }

        if let Some(handle) = self.inflight.take() {
            warn!("새 파일 선택으로 진행 중 요청 중단: {}", handle.file_name);
            handle.cancel();
        }

        info!("파일 선택: {}", selection.file_name);
        self.selection = Some(selection);
        self.result = None;
        self.state = apply(&self.state, &LifecycleEvent::Selected);
        Ok(())
    }

    /// 활성 플랫폼 전환
    ///
    /// 선택/결과/상태는 유지된다 — 탭 전환은 같은 결과를 다른
    /// 플랫폼 관점으로 다시 보는 동작이다.
    pub fn set_platform(&mut self, platform: PlatformId) {
        debug!("플랫폼 전환: {} → {}", self.platform, platform);
        self.platform = platform;
    }

    /// 분석 시작
    ///
    /// `FileSelected` 상태에서만 유효하다. 진행 중이거나 파일이 없으면
    /// 방어적 no-op. 이력에서 복원된 선택은 원본 바이너리가 없으므로
    /// 시작할 수 없다.
    pub fn start_analysis(&mut self) -> Result<(), CoreError> {
        if self.state != LifecycleState::FileSelected {
            warn!("분석 시작 무시: 현재 상태 {:?}", self.state);
            return Ok(());
        }

        let selection = self
            .selection
            .as_ref()
            .ok_or_else(|| CoreError::Internal("선택된 파일 없음".to_string()))?;

        let path = selection.source_path.clone().ok_or_else(|| {
            CoreError::UnsupportedMedia(format!(
                "이력에서 복원된 항목은 재분석할 수 없습니다: {}",
                selection.file_name
            ))
        })?;

        let request = AnalysisRequest {
            path,
            file_name: selection.file_name.clone(),
            mime: selection.mime(),
        };
        let file_name = request.file_name.clone();
        let platform = self.platform;

        let (tx, progress_rx) = mpsc::channel(PROGRESS_BUFFER);
        let client = Arc::clone(&self.client);
        let join = tokio::spawn(async move { client.analyze(request, tx).await });

        info!("분석 시작: {} ({})", file_name, platform);
        self.inflight = Some(AnalysisHandle {
            progress_rx,
            join,
            file_name,
            platform,
        });
        self.state = apply(&self.state, &LifecycleEvent::StartRequested);
        Ok(())
    }

    /// 진행 중 요청을 끝까지 구동
    ///
    /// 진행률 채널을 소비하며 상태를 갱신하고, 응답이 오면 결과를
    /// 반영한다. 성공 시 이력에 저장하는데, 저장 실패는 비치명적이다 —
    /// 경고만 남기고 결과는 정상 표시한다.
    pub async fn run_to_completion(&mut self) -> Result<&LifecycleState, CoreError> {
        let mut handle = match self.inflight.take() {
            Some(handle) => handle,
            None => {
                warn!("구동할 진행 중 요청 없음");
                return Ok(&self.state);
            }
        };

        // 채널이 닫힐 때까지 진행률 소비 (전송 완료 시 송신측 드롭)
        while let Some(p) = handle.progress_rx.recv().await {
            self.state = apply(&self.state, &LifecycleEvent::Progress(p));
            if p >= 100 {
                self.state = apply(&self.state, &LifecycleEvent::UploadFinished);
            }
        }

        match handle.join.await {
            Ok(Ok(result)) => {
                // 업로드 진행률이 100에 못 미친 채 응답이 먼저 온 경우 보정
                if matches!(self.state, LifecycleState::Uploading(_)) {
                    self.state = apply(&self.state, &LifecycleEvent::UploadFinished);
                }
                self.state = apply(&self.state, &LifecycleEvent::Succeeded);
                info!("분석 완료: {} ({})", handle.file_name, handle.platform);

                if let Err(e) = self
                    .history
                    .append(result.clone(), &handle.file_name, handle.platform)
                    .await
                {
                    warn!("이력 저장 실패 (결과 표시는 계속): {e}");
                }
                self.result = Some(result);
            }
            Ok(Err(e)) => {
                let msg = failure_message(&e);
                warn!("분석 실패: {} — {msg}", handle.file_name);
                self.state = apply(&self.state, &LifecycleEvent::Failed(msg));
            }
            Err(join_err) => {
                let msg = if join_err.is_cancelled() {
                    CoreError::Canceled.to_string()
                } else {
                    format!("분석 작업 비정상 종료: {join_err}")
                };
                self.state = apply(&self.state, &LifecycleEvent::Failed(msg));
            }
        }

        Ok(&self.state)
    }

    /// 이력 항목 재표시 — 네트워크 호출 없음
    pub async fn restore(&mut self, id: i64) -> Result<(), CoreError> {
        let entry = self.history.restore(id).await.ok_or(CoreError::NotFound {
            resource_type: "HistoryEntry".to_string(),
            id: id.to_string(),
        })?;

        if let Some(handle) = self.inflight.take() {
            warn!("이력 복원으로 진행 중 요청 중단: {}", handle.file_name);
            handle.cancel();
        }

        info!("이력 복원: {} ({})", entry.file_name, entry.platform);
        self.selection = Some(MediaSelection::restored(&entry.file_name));
        self.platform = entry.platform;
        self.result = Some(entry.data);
        self.state = apply(&self.state, &LifecycleEvent::Restored);
        Ok(())
    }

    /// 이력 목록 스냅샷 (최신 우선)
    pub async fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history.entries().await
    }

    /// 이력 항목 삭제 — 없는 id는 no-op
    pub async fn delete_history(&self, id: i64) -> Result<(), CoreError> {
        self.history.remove(id).await
    }
}

/// 실패 상태에 담을 사용자 표시 메시지
///
/// 서비스가 보낸 에러 페이로드는 메시지를 그대로 노출한다.
fn failure_message(error: &CoreError) -> String {
    match error {
        CoreError::Service(msg) => msg.clone(),
        other => other.to_string(),
    }
}
