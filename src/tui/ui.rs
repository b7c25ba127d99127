use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Footer, Header, StatusPanel};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Draws the page: header, heading, question input, status blocks, footer.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Length(3), Min(0), Length(1)]);
    let [header_area, heading_area, input_area, status_area, footer_area] =
        layout.areas(frame.area());

    let view = app.view();

    Header {
        title: view.title.to_string(),
        status_message: app.status_message.clone(),
    }
    .render(frame, header_area);

    frame.render_widget(
        Line::from(Span::styled(
            view.heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        heading_area,
    );

    tui.question_input.render(frame, input_area);

    StatusPanel {
        view: &view,
        spinner_frame,
        state: &mut tui.status_panel,
    }
    .render(frame, status_area);

    Footer {
        text: view.footer.to_string(),
    }
    .render(frame, footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_idle() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains(&app.title));
        assert!(text.contains("Ask a Question"));
        assert!(text.contains("Ask a question"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn test_answer_flow_on_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        update(&mut app, Action::Submit("What is 2+2?".to_string()));
        assert!(screen(&app, &mut tui).contains("Loading..."));

        let request_id = app.latest_request;
        update(
            &mut app,
            Action::AnswerReceived {
                request_id,
                answer: "4".to_string(),
            },
        );
        let text = screen(&app, &mut tui);
        assert!(text.contains("Answer: 4"));
        assert!(!text.contains("Loading..."));
        assert!(!text.contains("Error fetching answer"));
    }

    #[test]
    fn test_error_flow_on_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        update(&mut app, Action::Submit("bad".to_string()));
        assert!(screen(&app, &mut tui).contains("Loading..."));

        let request_id = app.latest_request;
        update(
            &mut app,
            Action::AnswerFailed {
                request_id,
                detail: "HTTP 500".to_string(),
            },
        );
        let text = screen(&app, &mut tui);
        assert!(text.contains("Error fetching answer"));
        assert!(!text.contains("HTTP 500"));
        assert!(!text.contains("Loading..."));
    }
}
