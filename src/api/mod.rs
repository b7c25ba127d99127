//! # Answer Service
//!
//! The boundary between the page and whatever answers questions.
//! The rest of the app only sees the [`AnswerService`] trait; the HTTP
//! transport lives in [`client`] and its wire types in [`types`].

pub mod client;
pub mod service;
pub mod types;

pub use client::HttpAnswerService;
pub use service::{AnswerService, ServiceError};
pub use types::{AskRequest, AskResponse};
