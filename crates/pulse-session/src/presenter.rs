//! 전략 패널 프레젠터.
//!
//! 반정형 [`AnalysisResult`]를 활성 플랫폼 관점의 표시 모델로
//! 투영한다. 없는 필드는 섹션 단위로 강등한다 — 일부 필드가
//! 빠졌다고 패널 전체가 실패하지 않는다.

use pulse_core::models::analysis::{AnalysisResult, CoverDesign, TimingRadar, VisualAnalysis};
use pulse_core::models::platform::PlatformId;

/// 전략 패널 표시 상태
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyPanel {
    /// 표시할 결과 없음
    Empty,
    /// 결과는 있으나 해당 플랫폼 키가 없음
    NoPlatformData,
    /// 표시 가능한 전략
    Ready(StrategyView),
}

/// 플랫폼 전략 표시 모델
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyView {
    /// 제목 카피 (라벨 + 텍스트)
    pub copywriting: Vec<CopyItem>,
    /// 본문 텍스트
    pub content: Option<String>,
    /// 해시태그
    pub hashtags: Vec<String>,
    /// 검색 SEO 키워드
    pub seo_keywords: Vec<String>,
    /// 공유 유도 문구
    pub social_trigger: Option<String>,
    /// 커버 디자인 제안 (小红书 전용 섹션)
    pub cover: Option<CoverDesign>,
    /// 게시 시각 추천
    pub timing: Option<TimingRadar>,
    /// 운영 전술
    pub ops: Option<OpsView>,
    /// AI 시각 진단 (플랫폼 공통)
    pub visual: Option<VisualAnalysis>,
}

/// 라벨이 붙은 카피 한 줄
#[derive(Debug, Clone, PartialEq)]
pub struct CopyItem {
    /// 표시 라벨 (예: "备选 A", "主标题")
    pub label: String,
    /// 카피 텍스트
    pub text: String,
}

/// 운영 전술 표시 모델
///
/// 프로모션 제안은 플랫폼마다 페이로드 필드가 다르다 — 여기서
/// 하나의 문자열로 정규화한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpsView {
    /// 핵심 확산 로직
    pub core_logic: Option<String>,
    /// 태그 전략 해설
    pub tags_strategy: Option<String>,
    /// 프로모션 제안 (플랫폼별 필드에서 정규화)
    pub promotion: Option<String>,
    /// 댓글 선점 스크립트
    pub comment_script: Vec<String>,
}

/// 결과 → 전략 패널 투영
pub fn project(result: Option<&AnalysisResult>, platform: PlatformId) -> StrategyPanel {
    let result = match result {
        Some(result) => result,
        None => return StrategyPanel::Empty,
    };

    let strategy = match result.strategy(platform) {
        Some(strategy) => strategy,
        None => return StrategyPanel::NoPlatformData,
    };

    let mut copywriting = Vec::new();
    match &strategy.titles {
        Some(titles) if !titles.is_empty() => {
            for (i, title) in titles.iter().enumerate() {
                copywriting.push(CopyItem {
                    label: candidate_label(i),
                    text: title.clone(),
                });
            }
        }
        _ => {
            if let Some(title) = &strategy.title {
                copywriting.push(CopyItem {
                    label: "主标题".to_string(),
                    text: title.clone(),
                });
            }
        }
    }

    let ops = strategy.ops_kit.as_ref().map(|kit| OpsView {
        core_logic: kit.core_logic.clone(),
        tags_strategy: kit.tags_strategy.clone(),
        promotion: resolve_promotion(platform, kit),
        comment_script: kit.comment_script.clone().unwrap_or_default(),
    });

    StrategyPanel::Ready(StrategyView {
        copywriting,
        content: strategy.content.clone(),
        hashtags: strategy.hashtags.clone().unwrap_or_default(),
        seo_keywords: strategy.seo_keywords.clone().unwrap_or_default(),
        social_trigger: strategy.social_trigger.clone(),
        cover: if platform == PlatformId::Xiaohongshu {
            strategy.cover_design.clone()
        } else {
            None
        },
        timing: strategy.timing_radar.clone(),
        ops,
        visual: result.visual_analysis.clone(),
    })
}

/// 후보 제목 라벨 — A..Z 이후는 일련번호로 이어간다
fn candidate_label(index: usize) -> String {
    if index < 26 {
        format!("备选 {}", (b'A' + index as u8) as char)
    } else {
        format!("备选 {}", index + 1)
    }
}

/// 플랫폼별 프로모션 필드 정규화
///
/// 抖音은 DOU+, 小红书는 薯条, 视频号는 콜드 스타트 플랜과 가열
/// 제안을 함께 쓴다.
fn resolve_promotion(
    platform: PlatformId,
    kit: &pulse_core::models::analysis::OpsKit,
) -> Option<String> {
    match platform {
        PlatformId::Douyin => kit.dou_plus.clone(),
        PlatformId::Xiaohongshu => kit.promotion.clone(),
        PlatformId::Wechat => match (&kit.action_plan, &kit.promotion) {
            (Some(plan), Some(promo)) => Some(format!("{plan}；{promo}")),
            (Some(plan), None) => Some(plan.clone()),
            (None, Some(promo)) => Some(promo.clone()),
            (None, None) => None,
        },
    }
}
