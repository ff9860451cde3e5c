//! # pulse-session
//!
//! 업로드/분석 세션 계층.
//! [`lifecycle::AnalysisLifecycle`]이 파일 선택부터 결과 저장까지의
//! 상태 기계를 구동하고, [`presenter`]가 분석 결과를 플랫폼별 전략
//! 패널로 투영한다. 전송/저장 어댑터는 포트 트레이트로 주입받는다.

pub mod lifecycle;
pub mod presenter;

pub use lifecycle::AnalysisLifecycle;
pub use presenter::{project, StrategyPanel};
