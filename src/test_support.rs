//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{AnswerService, ServiceError};
use crate::core::state::App;

/// Always answers with the same text.
pub struct FixedService {
    answer: String,
}

impl FixedService {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
        }
    }
}

#[async_trait]
impl AnswerService for FixedService {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn ask(&self, _question: &str) -> Result<String, ServiceError> {
        Ok(self.answer.clone())
    }
}

/// Answers every question with the question itself.
pub struct EchoService;

#[async_trait]
impl AnswerService for EchoService {
    fn name(&self) -> &str {
        "echo"
    }

    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        Ok(question.to_string())
    }
}

/// Fails every request with a server error.
pub struct FailingService;

#[async_trait]
impl AnswerService for FailingService {
    fn name(&self) -> &str {
        "failing"
    }

    async fn ask(&self, _question: &str) -> Result<String, ServiceError> {
        Err(ServiceError::Api {
            status: 500,
            message: "internal error".to_string(),
        })
    }
}

/// Never settles.
pub struct HangingService;

#[async_trait]
impl AnswerService for HangingService {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn ask(&self, _question: &str) -> Result<String, ServiceError> {
        std::future::pending().await
    }
}

pub fn app_with(service: impl AnswerService + 'static) -> App {
    App::new(Arc::new(service))
}

/// Creates a test App backed by an `EchoService`.
pub fn test_app() -> App {
    app_with(EchoService)
}
