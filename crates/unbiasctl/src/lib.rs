//! unbiasctl - terminal client for the UnBias analysis and rewriting services
//!
//! The library half exists so integration tests can drive the view state,
//! the request runner and the one-shot commands without a terminal.

pub mod commands;
pub mod errors;
pub mod logging;
pub mod output;
pub mod spinner;
pub mod text_input;
pub mod tui;
pub mod tui_state;

// Version is embedded at build time
pub const VERSION: &str = env!("UNBIAS_VERSION");
