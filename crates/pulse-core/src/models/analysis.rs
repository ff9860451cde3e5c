//! 분석 결과 모델.
//!
//! 원격 분석 서비스가 반환하는 반정형 페이로드.
//! 필드 대부분이 선택적이며, 읽는 쪽에서 존재 여부를 확인한다 —
//! 특정 필드가 항상 있다고 가정하지 않는다.

use serde::{Deserialize, Serialize};

use crate::models::platform::PlatformId;

/// 분석 서비스 응답 전체
///
/// 플랫폼 id를 키로 하는 전략 + 플랫폼 공통 시각 진단.
/// 특정 플랫폼 키가 없는 응답은 실패가 아니다 — 뷰가
/// "해당 플랫폼 데이터 없음"으로 강등 표시한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// AI 시각 진단 (전 플랫폼 공유)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_analysis: Option<VisualAnalysis>,
    /// 抖音 전략
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub douyin: Option<PlatformStrategy>,
    /// 小红书 전략
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xiaohongshu: Option<PlatformStrategy>,
    /// 视频号 전략
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wechat: Option<PlatformStrategy>,
}

impl AnalysisResult {
    /// 플랫폼 id로 전략 조회
    pub fn strategy(&self, id: PlatformId) -> Option<&PlatformStrategy> {
        match id {
            PlatformId::Douyin => self.douyin.as_ref(),
            PlatformId::Xiaohongshu => self.xiaohongshu.as_ref(),
            PlatformId::Wechat => self.wechat.as_ref(),
        }
    }

    /// 해당 플랫폼 데이터 존재 여부
    pub fn has_strategy(&self, id: PlatformId) -> bool {
        self.strategy(id).is_some()
    }
}

/// AI 시각 진단 보고
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualAnalysis {
    /// 시각 태그
    #[serde(default)]
    pub tags: Vec<String>,
    /// 정서 기조 라벨
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// 화면 내용 요약
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// 하이라이트 순간 목록
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// 플랫폼별 전략 페이로드 — 모든 필드 선택적
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStrategy {
    /// 주 제목
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 후보 제목 목록
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<String>>,
    /// 본문 텍스트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// 해시태그 목록
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    /// 검색 SEO 키워드 (小红书)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<Vec<String>>,
    /// 공유 유도 문구 (视频号)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_trigger: Option<String>,
    /// 커버 디자인 제안 (小红书)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_design: Option<CoverDesign>,
    /// 게시 시각 추천
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_radar: Option<TimingRadar>,
    /// 운영 전술 키트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ops_kit: Option<OpsKit>,
}

/// 커버 디자인 제안
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverDesign {
    /// 커버 텍스트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 레이아웃 제안
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// 시각 요소 제안
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_elements: Option<String>,
}

/// 게시 시각 추천
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingRadar {
    /// 추천 게시 시각 (예: "20:00")
    #[serde(default)]
    pub best_time: String,
    /// 추천 사유
    #[serde(default)]
    pub reason: String,
}

/// 운영 전술 키트
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpsKit {
    /// 핵심 확산 로직
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_logic: Option<String>,
    /// 태그 전략 해설
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_strategy: Option<String>,
    /// DOU+ 투입 제안 (抖音)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dou_plus: Option<String>,
    /// 가열/프로모션 제안 (小红书·视频号)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
    /// 콜드 스타트 행동 플랜 (视频号)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_plan: Option<String>,
    /// 댓글 선점 스크립트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_script: Option<Vec<String>>,
}

/// 서비스 명시적 에러 페이로드
///
/// HTTP 상태 코드와 무관하게 `{"error": "..."}` 형태면 실패로 처리한다.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// 사용자에게 표시할 에러 메시지
    pub error: String,
}
