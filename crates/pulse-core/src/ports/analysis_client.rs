//! 분석 서비스 클라이언트 포트.
//!
//! 구현: `pulse-network` crate (reqwest, multipart 스트리밍)

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::error::CoreError;
use crate::models::analysis::AnalysisResult;

/// 분석 요청 — 요청 시점에 캡처된 파일 정보
///
/// 파일 이름과 플랫폼은 요청 시점 값으로 고정된다. 응답 대기 중
/// 사용자가 탭을 바꿔도 저장에는 영향이 없어야 한다.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// 업로드할 파일 경로
    pub path: PathBuf,
    /// 원본 파일 이름 (multipart file_name)
    pub file_name: String,
    /// MIME 문자열 (판별 불가 시 None → application/octet-stream)
    pub mime: Option<String>,
}

/// 원격 분석 서비스 클라이언트
///
/// 업로드 진행률(0..=100, 단조 비감소)을 `progress` 채널로 보고하고,
/// 성공 또는 실패 결과를 정확히 한 번 반환한다. 자동 재시도는 하지
/// 않는다 — 실패는 사용자가 재시도한다.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// 파일을 업로드하고 분석 결과를 수신
    async fn analyze(
        &self,
        request: AnalysisRequest,
        progress: mpsc::Sender<u8>,
    ) -> Result<AnalysisResult, CoreError>;
}
