//! # StatusPanel Component
//!
//! Renders the three independent status blocks of a [`PageView`]:
//! loading (with spinner), error (red), answer (labeled). Long answers
//! scroll; the offset lives in `StatusPanelState` so it survives redraws.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::view::{ANSWER_LABEL, LOADING_TEXT, PageView};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const EMPTY_HINT: &str = "Type a question above and press Enter.";

/// Scroll position for the panel.
#[derive(Debug, Default)]
pub struct StatusPanelState {
    pub scroll: u16,
    /// Largest useful offset, from the last render
    max_scroll: u16,
}

impl StatusPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32);
        self.scroll = next as u16;
    }
}

impl EventHandler for StatusPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-10),
            TuiEvent::ScrollPageDown => self.scroll_by(10),
            _ => return None,
        }
        Some(())
    }
}

pub struct StatusPanel<'a> {
    pub view: &'a PageView<'a>,
    pub spinner_frame: usize,
    pub state: &'a mut StatusPanelState,
}

fn status_text<'a>(view: &PageView<'a>, spinner_frame: usize) -> Text<'a> {
    let mut lines: Vec<Line<'a>> = Vec::new();

    if view.loading {
        let spinner = SPINNER[spinner_frame % SPINNER.len()];
        lines.push(Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, Style::default().fg(Color::Yellow)),
        ]));
    }

    if let Some(error) = view.error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    }

    if let Some(answer) = view.answer {
        let mut answer_lines = answer.lines();
        let first = answer_lines.next().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(ANSWER_LABEL, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::raw(first),
        ]));
        lines.extend(answer_lines.map(Line::raw));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }

    Text::from(lines)
}

impl Component for StatusPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().add_modifier(Modifier::DIM));

        let paragraph = Paragraph::new(status_text(self.view, self.spinner_frame))
            .block(block)
            .wrap(Wrap { trim: false });

        // line_count includes the block borders, as does area.height
        let total = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
        self.state.max_scroll = total.saturating_sub(area.height);
        self.state.scroll = self.state.scroll.min(self.state.max_scroll);

        frame.render_widget(paragraph.scroll((self.state.scroll, 0)), area);
    }
}
