//! 분석 서비스 HTTP 클라이언트.
//!
//! `AnalysisClient` 포트 구현. 파일을 multipart `file` 필드로
//! `POST {base_url}{analyze_path}`에 업로드한다.
//!
//! 응답 판정 순서:
//! 1. 본문이 `{"error": "..."}` 형태 → HTTP 상태와 무관하게 서비스 에러
//! 2. 비 2xx → 전송 에러
//! 3. `AnalysisResult`로 해석 불가 → 응답 형식 오류
//! 4. 그 외 → 성공

use async_trait::async_trait;
use pulse_core::error::CoreError;
use pulse_core::models::analysis::{AnalysisResult, ErrorResponse};
use pulse_core::ports::analysis_client::{AnalysisClient, AnalysisRequest};
use reqwest::multipart;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::progress::progress_stream;

/// 기본 분석 엔드포인트 경로
const DEFAULT_ANALYZE_PATH: &str = "/analyze";

/// HTTP 분석 클라이언트 — `AnalysisClient` 포트 구현
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
    analyze_path: String,
}

impl HttpAnalysisClient {
    /// 새 HTTP 분석 클라이언트 생성
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Transport(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            analyze_path: DEFAULT_ANALYZE_PATH.to_string(),
        })
    }

    /// 분석 엔드포인트 경로 설정
    pub fn with_analyze_path(mut self, path: &str) -> Self {
        self.analyze_path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.analyze_path)
    }

    /// 응답 본문 판정 — 에러 페이로드가 HTTP 상태 코드보다 우선
    fn interpret_response(status: reqwest::StatusCode, text: &str) -> Result<AnalysisResult, CoreError> {
        if let Ok(err) = serde_json::from_str::<ErrorResponse>(text) {
            return Err(CoreError::Service(err.error));
        }

        if !status.is_success() {
            return Err(CoreError::Transport(format!(
                "분석 요청 거부 ({status}): {text}"
            )));
        }

        serde_json::from_str::<AnalysisResult>(text)
            .map_err(|e| CoreError::MalformedResponse(format!("분석 응답 해석 실패: {e}")))
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(
        &self,
        request: AnalysisRequest,
        progress: mpsc::Sender<u8>,
    ) -> Result<AnalysisResult, CoreError> {
        let request_id = Uuid::new_v4();
        debug!(
            "분석 요청 시작 [{request_id}]: {} → {}",
            request.file_name,
            self.endpoint()
        );

        let data = tokio::fs::read(&request.path).await?;
        let total = data.len() as u64;

        let body = reqwest::Body::wrap_stream(progress_stream(data, progress));
        let mut part =
            multipart::Part::stream_with_length(body, total).file_name(request.file_name.clone());
        if let Some(mime) = &request.mime {
            part = part
                .mime_str(mime)
                .map_err(|e| CoreError::Internal(format!("MIME 문자열 오류: {mime}: {e}")))?;
        }
        let form = multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("분석 요청 전송 실패: {e}")))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            warn!("응답 본문 읽기 실패 [{request_id}]: {e}");
            CoreError::Transport(format!("응답 본문 읽기 실패: {e}"))
        })?;

        let result = Self::interpret_response(status, &text)?;
        debug!("분석 응답 수신 [{request_id}]: {total}bytes 업로드 완료");
        Ok(result)
    }
}
