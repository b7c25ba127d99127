use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    Submit,

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    let ready = match event::poll(timeout) {
        Ok(ready) => ready,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    };
    if !ready {
        return None;
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Only act on presses; releases arrive when keyboard enhancement is on
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
            match (ctrl, key_event.code) {
                (true, KeyCode::Char('c' | 'C')) => Some(TuiEvent::ForceQuit),
                (true, KeyCode::Char('a')) => Some(TuiEvent::CursorHome),
                (true, KeyCode::Char('e')) => Some(TuiEvent::CursorEnd),
                // Unbound Ctrl chords never insert text
                (true, KeyCode::Char(_)) => None,
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        // Single-line field: newlines in pasted text become spaces
        Event::Paste(data) => Some(TuiEvent::Paste(data.replace(['\r', '\n'], " "))),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_enter_submits() {
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Enter)),
            Some(TuiEvent::Submit)
        );
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('c'))),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_plain_char_is_input() {
        assert_eq!(
            translate(key(KeyModifiers::SHIFT, KeyCode::Char('Q'))),
            Some(TuiEvent::InputChar('Q'))
        );
    }

    #[test]
    fn test_paste_flattens_newlines() {
        assert_eq!(
            translate(Event::Paste("line one\nline two".to_string())),
            Some(TuiEvent::Paste("line one line two".to_string()))
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_ctrl_shift_c_force_quits() {
        assert_eq!(
            translate(key(
                KeyModifiers::CONTROL | KeyModifiers::SHIFT,
                KeyCode::Char('C')
            )),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_unbound_ctrl_chord_is_dropped() {
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('u'))), None);
        assert_eq!(
            translate(key(KeyModifiers::CONTROL | KeyModifiers::ALT, KeyCode::Char('x'))),
            None
        );
    }
}
