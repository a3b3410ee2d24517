//! Lingo Library
//!
//! Dispatches named text-analysis commands to a cloud natural language
//! service and renders the results as labelled text lines. Also carries a
//! small text-to-speech helper.

pub mod config;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod language;
pub mod render;
pub mod storage;
pub mod tts;

pub use dispatch::{Command, Dispatcher};
pub use error::{LingoError, LingoResult};
