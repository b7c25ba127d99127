use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub const KEY_HINTS: &str = "Enter: ask  ↑/↓: scroll  Esc: quit";

/// Bottom bar: key hints, then the configured footer text.
pub struct Footer {
    pub text: String,
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(KEY_HINTS, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(self.text.as_str(), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(line, area);
    }
}
