//! # Header Component
//!
//! One-line title bar: `"{title} | {status}"`, or just the title when the
//! status is empty. Purely presentational.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct Header {
    pub title: String,
    pub status_message: String,
}

impl Header {
    fn format_title(&self) -> String {
        if self.status_message.is_empty() {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, self.status_message)
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.format_title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
