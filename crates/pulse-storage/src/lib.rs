//! # pulse-storage
//!
//! 로컬 영속화 어댑터.
//! 분석 이력을 JSON 파일 하나에 전체 덮어쓰기 방식으로 저장하고,
//! 선택된 미디어의 미리보기 사본을 캐시 디렉토리에 관리한다.

pub mod history_store;
pub mod preview_cache;

pub use history_store::JsonHistoryStore;
pub use preview_cache::PreviewCache;
