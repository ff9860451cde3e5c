//! Hexagonal Architecture 포트 인터페이스.

pub mod analysis_client;
pub mod history_store;
