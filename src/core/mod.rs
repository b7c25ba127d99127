//! # Core Application Logic
//!
//! The Page Controller lives here. It knows nothing about any specific UI
//! technology and does no I/O of its own.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (page state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • PageView (snapshot)  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  One-shot  │      │   Tests    │
//!     │  Adapter   │      │    CLI     │      │ (headless) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all page state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: `PageView`, the render-ready snapshot of `App`
//! - [`controller`]: Runs one submit/await/settle cycle without a UI
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod state;
pub mod view;

pub use action::{Action, Effect, FETCH_ERROR_MESSAGE, update};
pub use controller::{PageController, fetch_answer};
pub use state::App;
pub use view::PageView;
