//! 분석 이력 저장소 포트.
//!
//! 구현: `pulse-storage` crate (JSON 파일 전체 덮어쓰기)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::analysis::AnalysisResult;
use crate::models::history::HistoryEntry;
use crate::models::platform::PlatformId;

/// 영속 이력 저장소
///
/// 표시 순서는 삽입 기준 최신 우선이며, 변경(추가/삭제)마다 전체
/// 목록을 저장 매체에 덮어쓴다. 쓰기 실패는 비치명적이다 — 메모리
/// 목록은 세션 동안 계속 사용 가능하고, 호출자는 경고로 표면화한다.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 현재 목록 스냅샷 (최신 우선)
    async fn entries(&self) -> Vec<HistoryEntry>;

    /// 새 항목 추가 (목록 맨 앞) 후 전체 목록을 영속화
    ///
    /// 영속화가 실패해도 항목은 메모리 목록에 남는다. 이때
    /// `CoreError::Persistence`를 반환하므로 호출자가 경고를 남긴다.
    async fn append(
        &self,
        result: AnalysisResult,
        file_name: &str,
        platform: PlatformId,
    ) -> Result<HistoryEntry, CoreError>;

    /// id로 항목 삭제 후 전체 목록을 영속화
    ///
    /// 없는 id는 에러가 아니라 no-op이다.
    async fn remove(&self, id: i64) -> Result<(), CoreError>;

    /// id로 저장된 항목 조회 (재표시용, 네트워크 호출 없음)
    async fn restore(&self, id: i64) -> Option<HistoryEntry>;
}
