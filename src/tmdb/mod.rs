//! TMDB API client
//!
//! Issues the two requests the bot needs (search by title, detail by id)
//! against the TMDB v3 API and parses the JSON responses.

mod client;
mod types;

pub use client::TmdbClient;
pub use types::{Company, Genre, MovieDetail, SearchPage, SearchResult};

use thiserror::Error;

/// Errors that can occur while talking to TMDB
#[derive(Debug, Error)]
pub enum TmdbError {
    /// Non-success HTTP status returned by the API
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error text returned by the server, truncated
        message: String,
    },
    /// Error during network communication
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Response body is not the expected JSON
    #[error("JSON error: {0}")]
    JsonError(String),
}
