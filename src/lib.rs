//! askpage library exports for the binary and tests

pub mod api;
pub mod core;
pub mod oneshot;
pub mod tui;

#[cfg(test)]
pub mod test_support;
