//! One-shot mode: ask a single question without opening the TUI.
//!
//! Drives the same [`PageController`] as the terminal page and prints the
//! outcome instead of drawing it.

use std::io::Write;

use crate::core::controller::PageController;
use crate::core::view::{ANSWER_LABEL, LOADING_TEXT};

/// Asks `question` and writes the outcome. Returns `true` when the service
/// answered, `false` on an empty question or a failed request.
///
/// `out` receives the labeled answer, `err` the loading and error lines.
/// An empty answer still prints its label, so success never means silence.
pub async fn run(
    controller: &mut PageController,
    question: String,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<bool> {
    if question.is_empty() {
        writeln!(err, "Error: no question provided")?;
        return Ok(false);
    }

    writeln!(err, "{LOADING_TEXT}")?;
    controller.handle_submit(question).await;

    let app = controller.app();
    if let Some(error) = &app.error {
        writeln!(err, "{error}")?;
        return Ok(false);
    }
    let answer = app.answer.as_deref().unwrap_or_default();
    writeln!(out, "{ANSWER_LABEL} {answer}")?;
    Ok(true)
}
