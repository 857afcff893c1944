//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, RevealedHint, Statistics, run_tui};
