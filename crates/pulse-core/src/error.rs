//! Traffic Pulse 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 자체 에러를 `CoreError`로 매핑해서 전파한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 전송, 분석 서비스, 저장소, 설정 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 네트워크/전송 실패 (연결 불가, 타임아웃, 비 2xx 응답)
    #[error("전송 에러: {0}")]
    Transport(String),

    /// 분석 서비스가 명시적 에러 페이로드를 반환함
    ///
    /// HTTP 상태 코드와 무관하게 `error` 필드가 있으면 이 에러로 매핑된다.
    #[error("분석 서비스 에러: {0}")]
    Service(String),

    /// 응답이 기대한 최상위 구조로 해석되지 않음
    #[error("응답 형식 오류: {0}")]
    MalformedResponse(String),

    /// 로컬 저장소 읽기/쓰기 실패 (비치명적 — 세션 내 메모리 이력은 유지)
    #[error("저장소 에러: {0}")]
    Persistence(String),

    /// 플랫폼이 허용하지 않는 미디어 형식
    #[error("지원하지 않는 미디어 형식: {0}")]
    UnsupportedMedia(String),

    /// 리소스를 찾을 수 없음
    #[error("{resource_type} 미발견: {id}")]
    NotFound {
        /// 리소스 종류 (예: "HistoryEntry")
        resource_type: String,
        /// 리소스 식별자
        id: String,
    },

    /// 진행 중인 분석 요청이 취소됨
    #[error("분석 요청 취소됨")]
    Canceled,

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}
