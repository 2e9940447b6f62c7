#![deny(missing_docs)]
//! Movie Info Bot library.
//!
//! Telegram front-end for searching The Movie Database and rendering movie cards.

/// Telegram bot logic: dialogue, handlers, keyboards.
pub mod bot;
/// Configuration management.
pub mod config;
/// Log setup with secret redaction.
pub mod logging;
/// Movie caption rendering.
pub mod render;
/// Dispatcher wiring and long polling entrypoint.
pub mod runner;
/// TMDB API client.
pub mod tmdb;
