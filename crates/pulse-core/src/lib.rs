//! # pulse-core
//!
//! Traffic Pulse 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::analysis::AnalysisResult;
    use crate::models::platform::PlatformId;

    #[test]
    fn analysis_result_serde_roundtrip() {
        let json = r#"{
            "visual_analysis": {"tags": ["cute", "cat"], "emotion": "温馨", "summary": "고양이 일상"},
            "xiaohongshu": {"title": "喵星人日记", "timing_radar": {"best_time": "20:00", "reason": "晚高峰"}}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.strategy(PlatformId::Xiaohongshu).is_some());
        assert!(result.strategy(PlatformId::Douyin).is_none());

        let visual = result.visual_analysis.as_ref().unwrap();
        assert_eq!(visual.tags, vec!["cute", "cat"]);
        assert_eq!(visual.emotion.as_deref(), Some("温馨"));

        let back = serde_json::to_string(&result).unwrap();
        let reparsed: AnalysisResult = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, result);
    }

    #[test]
    fn platform_ids_are_stable() {
        assert_eq!(PlatformId::Douyin.as_str(), "douyin");
        assert_eq!(PlatformId::Xiaohongshu.as_str(), "xiaohongshu");
        assert_eq!(PlatformId::Wechat.as_str(), "wechat");
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.server.analyze_path, "/analyze");
        assert_eq!(config.server.timeout_secs, 300);
        assert_eq!(config.storage.history_file, "history.json");
    }
}
