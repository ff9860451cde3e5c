//! 도메인 데이터 모델.

pub mod analysis;
pub mod history;
pub mod lifecycle;
pub mod media;
pub mod platform;
