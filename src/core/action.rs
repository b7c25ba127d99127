//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User presses Enter? That's `Action::Submit(question)`.
//! The service answers? That's `Action::AnswerReceived { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Overlapping submissions
//!
//! Submitting while a request is in flight is allowed. Every submission
//! gets a fresh request id; only the result carrying the newest id is
//! applied, so the page always reflects the last question asked.

use log::{debug, info, warn};

use crate::core::state::App;

/// The only error text the user ever sees.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching answer";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A question arrived from the input field.
    Submit(String),
    /// The service answered the request with this id.
    AnswerReceived { request_id: u64, answer: String },
    /// The request with this id failed. `detail` is for the log only.
    AnswerFailed { request_id: u64, detail: String },
    Quit,
}

/// I/O the caller has to carry out after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Ask the service `question` and feed the result back tagged with `request_id`.
    SpawnRequest { request_id: u64, question: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(question) => {
            if question.is_empty() {
                warn!("Ignoring empty submission");
                return Effect::None;
            }
            app.latest_request += 1;
            app.is_loading = true;
            app.error = None;
            app.status_message = String::from("Asking...");
            info!(
                "Submitted question (request_id={}, len={})",
                app.latest_request,
                question.len()
            );
            Effect::SpawnRequest {
                request_id: app.latest_request,
                question,
            }
        }
        Action::AnswerReceived { request_id, answer } => {
            if request_id != app.latest_request {
                debug!(
                    "Dropping stale answer (request_id={}, latest={})",
                    request_id, app.latest_request
                );
                return Effect::None;
            }
            app.answer = Some(answer);
            app.is_loading = false;
            app.status_message = String::from("Answered");
            Effect::None
        }
        Action::AnswerFailed { request_id, detail } => {
            if request_id != app.latest_request {
                debug!(
                    "Dropping stale failure (request_id={}, latest={}): {}",
                    request_id, app.latest_request, detail
                );
                return Effect::None;
            }
            warn!("Answer request {} failed: {}", request_id, detail);
            // The previous answer is left in place.
            app.error = Some(FETCH_ERROR_MESSAGE.to_string());
            app.is_loading = false;
            app.status_message = String::from("Request failed");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
