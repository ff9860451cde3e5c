//! 업로드/분석 수명주기 상태 기계.
//!
//! 상태는 항상 정확히 하나이며, 전이는 순수 함수 [`apply`]로 기술된다.
//! 컨트롤러(`pulse-session`)는 전송 계층 이벤트를 이 전이 테이블에 공급한다.

/// 수명주기 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    /// 파일 미선택
    NoFile,
    /// 파일 선택됨, 결과 없음
    FileSelected,
    /// 업로드 중 (진행률 0..=100)
    Uploading(u8),
    /// 업로드 완료, 서버 처리 대기
    ///
    /// "업로드 완료"와 "결과 준비"를 혼동하지 않기 위한 별도 상태.
    Analyzing,
    /// 결과 표시 가능
    ResultReady,
    /// 실패 — 사용자에게 표시할 메시지 포함
    Failed(String),
}

impl LifecycleState {
    /// 분석 요청이 진행 중인 상태인지
    pub fn is_in_flight(&self) -> bool {
        matches!(self, LifecycleState::Uploading(_) | LifecycleState::Analyzing)
    }

    /// 현재 업로드 진행률 (업로드 중이 아니면 None)
    pub fn progress(&self) -> Option<u8> {
        match self {
            LifecycleState::Uploading(p) => Some(*p),
            _ => None,
        }
    }
}

/// 수명주기 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// 새 파일 선택 (이전 미리보기/결과/에러는 컨트롤러가 정리)
    Selected,
    /// 분석 시작 요청
    StartRequested,
    /// 전송 계층 진행률 틱 (round(sent/total*100))
    Progress(u8),
    /// 요청 본문 전송 완료 (응답은 아직)
    UploadFinished,
    /// 정상 응답 수신
    Succeeded,
    /// 전송 실패 / 비 2xx / 명시적 에러 페이로드
    Failed(String),
    /// 이력 항목 복원 (네트워크 호출 없이 재표시)
    Restored,
}

/// 상태 전이 — 정의되지 않은 (상태, 이벤트) 조합은 상태를 바꾸지 않는다
///
/// 진행률은 단조 비감소로 클램프된다. `StartRequested`는 `FileSelected`
/// 에서만 유효하며, 요청 진행 중에 다시 도달하면 방어적 no-op이다.
pub fn apply(state: &LifecycleState, event: &LifecycleEvent) -> LifecycleState {
    match (state, event) {
        (_, LifecycleEvent::Selected) => LifecycleState::FileSelected,
        (_, LifecycleEvent::Restored) => LifecycleState::FileSelected,

        (LifecycleState::FileSelected, LifecycleEvent::StartRequested) => {
            LifecycleState::Uploading(0)
        }

        (LifecycleState::Uploading(current), LifecycleEvent::Progress(p)) => {
            LifecycleState::Uploading((*p).min(100).max(*current))
        }
        (LifecycleState::Uploading(_), LifecycleEvent::UploadFinished) => LifecycleState::Analyzing,

        (LifecycleState::Analyzing, LifecycleEvent::Succeeded) => LifecycleState::ResultReady,

        (LifecycleState::Uploading(_), LifecycleEvent::Failed(msg))
        | (LifecycleState::Analyzing, LifecycleEvent::Failed(msg)) => {
            LifecycleState::Failed(msg.clone())
        }

        // 정의 밖 조합: 상태 유지
        (other, _) => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions() {
        let mut state = LifecycleState::NoFile;
        state = apply(&state, &LifecycleEvent::Selected);
        assert_eq!(state, LifecycleState::FileSelected);

        state = apply(&state, &LifecycleEvent::StartRequested);
        assert_eq!(state, LifecycleState::Uploading(0));

        state = apply(&state, &LifecycleEvent::Progress(40));
        state = apply(&state, &LifecycleEvent::Progress(100));
        assert_eq!(state, LifecycleState::Uploading(100));

        state = apply(&state, &LifecycleEvent::UploadFinished);
        assert_eq!(state, LifecycleState::Analyzing);

        state = apply(&state, &LifecycleEvent::Succeeded);
        assert_eq!(state, LifecycleState::ResultReady);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut state = LifecycleState::Uploading(60);
        state = apply(&state, &LifecycleEvent::Progress(45)); // 역행 틱 무시
        assert_eq!(state, LifecycleState::Uploading(60));

        state = apply(&state, &LifecycleEvent::Progress(200)); // 상한 클램프
        assert_eq!(state, LifecycleState::Uploading(100));
    }

    #[test]
    fn start_is_guarded() {
        // NoFile에서는 시작 불가
        let state = apply(&LifecycleState::NoFile, &LifecycleEvent::StartRequested);
        assert_eq!(state, LifecycleState::NoFile);

        // 진행 중 재시작은 방어적 no-op
        let state = apply(&LifecycleState::Analyzing, &LifecycleEvent::StartRequested);
        assert_eq!(state, LifecycleState::Analyzing);
    }

    #[test]
    fn reselect_while_selected_reenters() {
        let state = apply(&LifecycleState::FileSelected, &LifecycleEvent::Selected);
        assert_eq!(state, LifecycleState::FileSelected);
    }

    #[test]
    fn failure_from_uploading_and_analyzing() {
        let msg = "file too large".to_string();
        let state = apply(
            &LifecycleState::Uploading(30),
            &LifecycleEvent::Failed(msg.clone()),
        );
        assert_eq!(state, LifecycleState::Failed(msg.clone()));

        let state = apply(&LifecycleState::Analyzing, &LifecycleEvent::Failed(msg.clone()));
        assert_eq!(state, LifecycleState::Failed(msg));
    }

    #[test]
    fn selection_clears_failure() {
        let state = apply(
            &LifecycleState::Failed("이전 실패".to_string()),
            &LifecycleEvent::Selected,
        );
        assert_eq!(state, LifecycleState::FileSelected);
    }

    #[test]
    fn restore_from_any_state() {
        for state in [
            LifecycleState::NoFile,
            LifecycleState::ResultReady,
            LifecycleState::Failed("x".to_string()),
        ] {
            assert_eq!(
                apply(&state, &LifecycleEvent::Restored),
                LifecycleState::FileSelected
            );
        }
    }
}
