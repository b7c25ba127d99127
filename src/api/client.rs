//! HTTP transport for the answer service.
//!
//! One endpoint: `POST {base_url}/api/ask` with `{"question": ...}`,
//! answered by `{"answer": ...}`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::service::{AnswerService, ServiceError};
use super::types::{AskRequest, AskResponse};

pub const ASK_PATH: &str = "/api/ask";

/// Answer service reached over HTTP.
pub struct HttpAnswerService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnswerService {
    /// Builds a client for the service at `base_url`.
    ///
    /// `timeout` bounds each request end to end; `None` waits forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), ASK_PATH);
        reqwest::Url::parse(&endpoint)
            .map_err(|e| ServiceError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Config(e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        info!(
            "POST {} (question_len={})",
            self.endpoint,
            question.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        debug!("Answer service response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Answer service error: {} - {}", status, message);
            return Err(ServiceError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let parsed: AskResponse =
            serde_json::from_str(&body).map_err(|e| ServiceError::Parse(e.to_string()))?;

        debug!("Answer received (len={})", parsed.answer.len());
        Ok(parsed.answer)
    }
}
