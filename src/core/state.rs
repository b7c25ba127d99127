//! # Application State
//!
//! Everything the page shows, in one struct.
//!
//! ```text
//! App
//! ├── service: Arc<dyn AnswerService>  // where questions go
//! ├── answer: Option<String>           // last successful answer
//! ├── is_loading: bool                 // waiting for the service
//! ├── error: Option<String>            // user-facing error message
//! ├── latest_request: u64              // id of the newest submission
//! ├── status_message: String           // header status text
//! ├── title: String                    // header title
//! └── footer: String                   // footer text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::AnswerService;
use crate::core::config::ResolvedConfig;

pub const DEFAULT_TITLE: &str = "askpage";
pub const DEFAULT_FOOTER: &str = "Answers come from a remote service and may be wrong.";

pub struct App {
    pub service: Arc<dyn AnswerService>,
    pub answer: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Id handed to the most recent submission. Results tagged with an
    /// older id are dropped. Zero means nothing has been submitted.
    pub latest_request: u64,
    pub status_message: String,
    pub title: String,
    pub footer: String,
}

impl App {
    pub fn new(service: Arc<dyn AnswerService>) -> Self {
        Self {
            service,
            answer: None,
            is_loading: false,
            error: None,
            latest_request: 0,
            status_message: String::from("Ready"),
            title: DEFAULT_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }

    pub fn from_config(service: Arc<dyn AnswerService>, config: &ResolvedConfig) -> Self {
        Self {
            title: config.title.clone(),
            footer: config.footer.clone(),
            ..Self::new(service)
        }
    }
}
