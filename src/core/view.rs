//! # Page View
//!
//! A borrowed, render-ready snapshot of [`App`]. Adapters draw from this
//! instead of reading `App` directly, so what the page shows is decided in
//! one place and can be asserted on without a terminal.
//!
//! The three status blocks are independent: each appears when its field is
//! set, in the order loading, error, answer.

use crate::core::state::App;

pub const HEADING: &str = "Ask a Question";
pub const LOADING_TEXT: &str = "Loading...";
pub const ANSWER_LABEL: &str = "Answer:";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub heading: &'static str,
    pub loading: bool,
    pub error: Option<&'a str>,
    /// `None` for both "never answered" and an empty answer string.
    pub answer: Option<&'a str>,
    pub footer: &'a str,
}

impl<'a> PageView<'a> {
    pub fn of(app: &'a App) -> Self {
        Self {
            title: &app.title,
            heading: HEADING,
            loading: app.is_loading,
            error: app.error.as_deref(),
            answer: app.answer.as_deref().filter(|a| !a.is_empty()),
            footer: &app.footer,
        }
    }

    /// The status blocks as plain text, one entry per visible block.
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.loading {
            lines.push(LOADING_TEXT.to_string());
        }
        if let Some(error) = self.error {
            lines.push(error.to_string());
        }
        if let Some(answer) = self.answer {
            lines.push(format!("{ANSWER_LABEL} {answer}"));
        }
        lines
    }
}

impl App {
    pub fn view(&self) -> PageView<'_> {
        PageView::of(self)
    }
}
