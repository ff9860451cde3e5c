//! 세션 전체 흐름 통합 테스트 — 실제 JSON 이력 저장소 사용.

use async_trait::async_trait;
use pulse_core::error::CoreError;
use pulse_core::models::analysis::AnalysisResult;
use pulse_core::models::lifecycle::LifecycleState;
use pulse_core::models::media::MediaSelection;
use pulse_core::models::platform::PlatformId;
use pulse_core::ports::analysis_client::{AnalysisClient, AnalysisRequest};
use pulse_core::ports::history_store::HistoryStore;
use pulse_session::{project, AnalysisLifecycle, StrategyPanel};
use pulse_storage::JsonHistoryStore;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// 고정 JSON 페이로드를 재생하는 모의 분석 클라이언트
struct CannedClient {
    outcome: Mutex<Option<Result<AnalysisResult, CoreError>>>,
}

impl CannedClient {
    fn from_json(payload: &str) -> Self {
        let result: AnalysisResult = serde_json::from_str(payload).unwrap();
        Self {
            outcome: Mutex::new(Some(Ok(result))),
        }
    }

    fn failing(error: CoreError) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(error))),
        }
    }
}

#[async_trait]
impl AnalysisClient for CannedClient {
    async fn analyze(
        &self,
        _request: AnalysisRequest,
        progress: mpsc::Sender<u8>,
    ) -> Result<AnalysisResult, CoreError> {
        for p in [30, 70, 100] {
            let _ = progress.send(p).await;
        }
        drop(progress);
        self.outcome.lock().unwrap().take().unwrap()
    }
}

async fn open_store(dir: &tempfile::TempDir) -> Arc<JsonHistoryStore> {
    Arc::new(
        JsonHistoryStore::open(dir.path().join("history.json"))
            .await
            .unwrap(),
    )
}

#[tokio::test]
async fn analyze_image_then_reopen_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    let client = Arc::new(CannedClient::from_json(
        r##"{
            "visual_analysis": {"tags": ["萌宠"], "emotion": "治愈", "summary": "一只橘猫"},
            "xiaohongshu": {
                "titles": ["橘猫日常A", "橘猫日常B"],
                "content": "今天也被猫咪治愈了",
                "hashtags": ["#萌宠", "#橘猫"],
                "seo_keywords": ["猫", "治愈"],
                "timing_radar": {"best_time": "21:00", "reason": "睡前种草时刻"}
            }
        }"##,
    ));

    let mut session = AnalysisLifecycle::new(client, store);
    session
        .select_file(MediaSelection::from_path(Path::new("/tmp/cat.jpg")).unwrap())
        .unwrap();
    session.start_analysis().unwrap();
    session.run_to_completion().await.unwrap();

    assert_eq!(*session.state(), LifecycleState::ResultReady);

    // 활성 플랫폼(小红书) 관점으로 투영
    let StrategyPanel::Ready(view) = project(session.result(), session.platform()) else {
        panic!("Ready 기대");
    };
    assert_eq!(view.copywriting[0].label, "备选 A");
    assert_eq!(view.hashtags, vec!["#萌宠", "#橘猫"]);
    assert_eq!(view.timing.unwrap().best_time, "21:00");
    assert_eq!(view.visual.unwrap().emotion.as_deref(), Some("治愈"));

    // 다른 플랫폼 탭은 데이터 없음으로 강등
    assert_eq!(
        project(session.result(), PlatformId::Douyin),
        StrategyPanel::NoPlatformData
    );

    // 프로세스 재시작을 흉내 — 파일에서 다시 로드
    let reopened = open_store(&dir).await;
    let entries = reopened.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name, "cat.jpg");
    assert_eq!(entries[0].platform, PlatformId::Xiaohongshu);
    assert!(entries[0].data.has_strategy(PlatformId::Xiaohongshu));
}

#[tokio::test]
async fn service_rejection_leaves_history_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    let client = Arc::new(CannedClient::failing(CoreError::Service(
        "file too large".to_string(),
    )));

    let mut session = AnalysisLifecycle::new(client, store.clone());
    session
        .select_file(MediaSelection::from_path(Path::new("/tmp/huge.mp4")).unwrap())
        .unwrap();
    session.start_analysis().unwrap();
    session.run_to_completion().await.unwrap();

    // 서비스 에러 메시지가 그대로 표시된다
    assert_eq!(
        *session.state(),
        LifecycleState::Failed("file too large".to_string())
    );
    assert!(store.entries().await.is_empty());

    // 새 파일 선택이 실패 상태를 정리한다
    session
        .select_file(MediaSelection::from_path(Path::new("/tmp/small.jpg")).unwrap())
        .unwrap();
    assert_eq!(*session.state(), LifecycleState::FileSelected);
}

#[tokio::test]
async fn restore_and_delete_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    let client = Arc::new(CannedClient::from_json(
        r#"{"wechat": {"title": "晚霞下的猫", "social_trigger": "转发给爱猫的朋友"}}"#,
    ));

    let mut session = AnalysisLifecycle::new(client, store.clone());
    session.set_platform(PlatformId::Wechat);
    session
        .select_file(MediaSelection::from_path(Path::new("/tmp/sunset.mp4")).unwrap())
        .unwrap();
    session.start_analysis().unwrap();
    session.run_to_completion().await.unwrap();

    let entry_id = store.entries().await[0].id;

    // 복원 — 네트워크 호출 없이 결과 재표시
    session.restore(entry_id).await.unwrap();
    assert_eq!(*session.state(), LifecycleState::FileSelected);
    assert_eq!(session.platform(), PlatformId::Wechat);
    let StrategyPanel::Ready(view) = project(session.result(), session.platform()) else {
        panic!("Ready 기대");
    };
    assert_eq!(
        view.social_trigger.as_deref(),
        Some("转发给爱猫的朋友")
    );
    // 복원된 선택은 미리보기가 없다
    assert!(!session.selection().unwrap().has_preview());

    // 삭제 후 재로드에도 반영
    session.delete_history(entry_id).await.unwrap();
    let reopened = open_store(&dir).await;
    assert!(reopened.entries().await.is_empty());
}
