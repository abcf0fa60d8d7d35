//! Interactive TUI interface
//!
//! A person plays random corpus words; the trained agent is on hand for hints.

mod app;
mod rendering;

pub use app::{App, Hint, Message, MessageStyle, Statistics, run_tui};
