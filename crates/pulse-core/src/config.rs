//! 애플리케이션 설정 구조체.
//!
//! 분석 서비스 URL, 로컬 저장소 경로 등 런타임 설정을 정의한다.
//! [`crate::config_manager::ConfigManager`]가 JSON 파일로 로드/저장한다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 분석 서비스 연결 설정
    pub server: ServerConfig,
    /// 로컬 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 분석 서비스 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 서비스 기본 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 분석 엔드포인트 경로
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,
    /// 요청 타임아웃 (초) — 대용량 비디오 업로드를 고려해 넉넉하게
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// 타임아웃을 Duration으로 변환
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analyze_path: default_analyze_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// 로컬 저장소 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 데이터 디렉토리 재정의 (None이면 플랫폼 기본 경로)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// 이력 파일 이름
    #[serde(default = "default_history_file")]
    pub history_file: String,
    /// 미리보기 캐시 디렉토리 이름
    #[serde(default = "default_preview_dir")]
    pub preview_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_file: default_history_file(),
            preview_dir: default_preview_dir(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_analyze_path() -> String {
    "/analyze".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_history_file() -> String {
    "history.json".to_string()
}

fn default_preview_dir() -> String {
    "previews".to_string()
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}
