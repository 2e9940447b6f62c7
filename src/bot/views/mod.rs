//! View layer for bot UI components
//!
//! Contains keyboards, messages, and callback formats for Telegram UI.

/// Search dialogue keyboards, texts and callback formats
pub mod search;

pub use search::*;
