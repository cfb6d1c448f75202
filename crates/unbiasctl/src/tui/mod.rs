//! TUI Module - Modular organization
//!
//! - event_loop: Main entry point and event handling
//! - input: Key bindings and paste handling
//! - runner: Off-loop request execution
//! - render: UI drawing functions
//! - layout: Grid computation
//! - theme: Palette and styles
//! - utils: Wrapping, chips and the help overlay

mod event_loop;
pub mod input;
pub mod layout;
pub mod render;
pub mod runner;
mod theme;
mod utils;

// Re-export main entry point
pub use event_loop::run;

pub use runner::TuiMessage;
