//! # Page Controller
//!
//! Runs a whole submit → await → settle cycle against the reducer without
//! any UI attached. The one-shot CLI uses it directly; the TUI uses the
//! same [`fetch_answer`] from a spawned task so both paths settle state
//! identically.

use log::warn;

use crate::api::AnswerService;
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::core::view::PageView;

/// Asks the service and turns the outcome into the action that settles it.
///
/// Never fails: service errors become `Action::AnswerFailed`, which always
/// clears the loading flag when applied.
pub async fn fetch_answer(service: &dyn AnswerService, request_id: u64, question: &str) -> Action {
    match service.ask(question).await {
        Ok(answer) => Action::AnswerReceived { request_id, answer },
        Err(e) => {
            warn!("{} service failed for request {}: {}", service.name(), request_id, e);
            Action::AnswerFailed {
                request_id,
                detail: e.to_string(),
            }
        }
    }
}

pub struct PageController {
    app: App,
}

impl PageController {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn view(&self) -> PageView<'_> {
        self.app.view()
    }

    /// Submits `question` and waits for the service to settle it.
    ///
    /// Empty questions are ignored and leave the state untouched.
    pub async fn handle_submit(&mut self, question: String) {
        let effect = update(&mut self.app, Action::Submit(question));
        if let Effect::SpawnRequest { request_id, question } = effect {
            let service = self.app.service.clone();
            let settled = fetch_answer(service.as_ref(), request_id, &question).await;
            update(&mut self.app, settled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::FETCH_ERROR_MESSAGE;
    use crate::test_support::{
        EchoService, FailingService, FixedService, HangingService, app_with,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio_test::{assert_pending, task};

    #[tokio::test]
    async fn test_success_stores_answer() {
        let mut controller = PageController::new(app_with(FixedService::new("4")));
        controller.handle_submit("What is 2+2?".to_string()).await;

        let app = controller.app();
        assert!(!app.is_loading);
        assert_eq!(app.answer.as_deref(), Some("4"));
        assert!(app.error.is_none());
        assert_eq!(controller.view().status_lines(), vec!["Answer: 4"]);
    }

    #[tokio::test]
    async fn test_failure_shows_fixed_error() {
        let mut controller = PageController::new(app_with(FailingService));
        controller.handle_submit("bad".to_string()).await;

        let app = controller.app();
        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(app.answer.is_none());
        assert_eq!(
            controller.view().status_lines(),
            vec!["Error fetching answer"]
        );
    }

    #[tokio::test]
    async fn test_same_question_twice_gives_same_answer() {
        let mut controller = PageController::new(app_with(EchoService));

        controller.handle_submit("hello".to_string()).await;
        let first = controller.app().answer.clone();
        controller.handle_submit("hello".to_string()).await;
        let second = controller.app().answer.clone();

        assert_eq!(first.as_deref(), Some("hello"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let mut controller = PageController::new(app_with(FailingService));
        controller.handle_submit("bad".to_string()).await;
        assert!(controller.app().error.is_some());

        controller.app.service = Arc::new(FixedService::new("ok"));
        controller.handle_submit("good".to_string()).await;

        assert!(controller.app().error.is_none());
        assert_eq!(controller.app().answer.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_empty_question_does_nothing() {
        let mut controller = PageController::new(app_with(FixedService::new("4")));
        controller.handle_submit(String::new()).await;

        let app = controller.app();
        assert!(!app.is_loading);
        assert!(app.answer.is_none());
        assert_eq!(app.latest_request, 0);
    }

    #[test]
    fn test_reducer_stays_loading_while_fetch_is_pending() {
        let mut app = app_with(HangingService);
        let Effect::SpawnRequest { request_id, question } =
            update(&mut app, Action::Submit("anyone there?".to_string()))
        else {
            panic!("Expected SpawnRequest");
        };

        let service = app.service.clone();
        let mut pending = task::spawn(async move {
            fetch_answer(service.as_ref(), request_id, &question).await
        });

        assert_pending!(pending.poll());
        assert!(app.is_loading);
        assert!(app.error.is_none());
    }

    #[tokio::test]
    async fn test_handle_submit_stays_loading_while_service_hangs() {
        let mut controller = PageController::new(app_with(HangingService));

        let timed_out = tokio::time::timeout(
            Duration::from_millis(50),
            controller.handle_submit("anyone there?".to_string()),
        )
        .await
        .is_err();

        assert!(timed_out, "hanging service must not settle");
        let app = controller.app();
        assert!(app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(controller.view().status_lines(), vec!["Loading..."]);
    }

    #[tokio::test]
    async fn test_fetch_answer_maps_error_to_failure_action() {
        let action = fetch_answer(&FailingService, 7, "bad").await;
        assert!(matches!(action, Action::AnswerFailed { request_id: 7, .. }));
    }
}
