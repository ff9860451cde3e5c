//! # pulse-network
//!
//! 분석 서비스 HTTP 어댑터.
//! 선택된 미디어 파일을 multipart로 업로드하며 청크 단위 진행률을
//! 채널로 보고하고, 응답을 [`pulse_core::models::analysis::AnalysisResult`]
//! 로 해석한다. 자동 재시도는 하지 않는다.

pub mod analysis_client;
pub mod progress;
