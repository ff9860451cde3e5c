//! 분석 이력 항목 모델.
//!
//! 성공한 분석마다 정확히 한 번 생성되고, 이후 변경되지 않는다.
//! 삭제는 사용자의 명시적 동작으로만 일어난다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::platform::PlatformId;

/// 이력 항목
///
/// `id`는 밀리초 타임스탬프 기반이며 저장소 내에서 엄격히 증가한다.
/// `date`는 목록 표시용으로 저장 시점에 고정된 문자열이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 고유 id (밀리초 타임스탬프 기반, 단조 증가)
    pub id: i64,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 표시용 날짜 문자열 (저장 시점에 고정)
    pub date: String,
    /// 업로드 당시 파일 이름
    pub file_name: String,
    /// 저장 시점에 활성화되어 있던 플랫폼
    pub platform: PlatformId,
    /// 분석 결과 전체 페이로드
    pub data: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serde_roundtrip() {
        let entry = HistoryEntry {
            id: 1_756_400_000_123,
            created_at: Utc::now(),
            date: "2026-08-29 10:30:00".to_string(),
            file_name: "cat.jpg".to_string(),
            platform: PlatformId::Xiaohongshu,
            data: AnalysisResult::default(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert!(json.contains("\"xiaohongshu\""));
    }
}
