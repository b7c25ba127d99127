//! # QuestionInput Component
//!
//! Single-line form holding the question being typed.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement)
//! - Handle submission (Enter): emit the exact text, then clear
//! - Refuse to submit an empty field
//!
//! The buffer is internal state; the parent only ever sees `InputEvent`s.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Ask a question";

/// Border columns on each side of the text.
const BORDER_OFFSET: u16 = 1;

/// High-level events emitted by the QuestionInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed on a non-empty field)
    Submit(String),
    /// Text or cursor changed
    ContentChanged,
}

pub struct QuestionInput {
    /// Text buffer (Internal State)
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl Default for QuestionInput {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor, saturating at `u16::MAX`.
    fn cursor_col(&self) -> u16 {
        u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX)
    }

    /// Horizontal scroll that keeps the cursor inside `inner_width` columns.
    fn scroll_offset(&self, inner_width: u16) -> u16 {
        let cursor_col = self.cursor_col();
        // Leave room for the cursor cell itself
        cursor_col.saturating_sub(inner_width.saturating_sub(1))
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl Component for QuestionInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2 * BORDER_OFFSET);
        let offset = self.scroll_offset(inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Question");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(Style::default().fg(Color::Green))
                .scroll((0, offset))
        };

        frame.render_widget(paragraph.block(block), area);

        let cursor_col = self.cursor_col() - offset;
        frame.set_cursor_position((
            area.x.saturating_add(BORDER_OFFSET).saturating_add(cursor_col),
            area.y + BORDER_OFFSET,
        ));
    }
}

impl EventHandler for QuestionInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                // Required field: nothing fires while empty
                if self.buffer.is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}
