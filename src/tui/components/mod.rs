//! # TUI Components
//!
//! UI pieces of the page, top to bottom.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: title bar with the current status
//! - `Footer`: key hints and footer text
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `QuestionInput`: single-line question field, emits `Submit`
//! - `StatusPanel`: loading / error / answer blocks, scrollable
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App`. Each file holds the component's state, events,
//! rendering and tests.

mod footer;
mod header;
pub mod question_input;
pub mod status_panel;

pub use footer::Footer;
pub use header::Header;
pub use question_input::{InputEvent, QuestionInput};
pub use status_panel::{StatusPanel, StatusPanelState};
