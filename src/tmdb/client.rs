use super::{MovieDetail, SearchPage, SearchResult, TmdbError};
use crate::config::Settings;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Longest server error text kept in `TmdbError::ApiError`
const MAX_ERROR_TEXT: usize = 500;

/// Thin client over the two TMDB endpoints used by the bot
#[derive(Clone)]
pub struct TmdbClient {
    http: HttpClient,
    api_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    /// Creates a client from application settings.
    ///
    /// The underlying HTTP client uses `tmdb_http_timeout_secs` so a stalled
    /// request cannot block a chat forever.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let timeout = Duration::from_secs(settings.tmdb_http_timeout_secs);
        let http = match HttpClient::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!(
                    "Failed to build TMDB HTTP client with a {timeout:?} timeout, \
                     requests will not time out: {e}"
                );
                HttpClient::new()
            }
        };

        Self {
            http,
            api_url: settings.tmdb_api_url.trim_end_matches('/').to_string(),
            api_key: settings.tmdb_api_key.clone(),
            language: settings.tmdb_language.clone(),
        }
    }

    /// Searches movies by title and returns the first page of hits.
    ///
    /// # Errors
    ///
    /// Returns `TmdbError` on network failure, non-success status or unexpected JSON.
    #[instrument(skip(self))]
    pub async fn search_movies(&self, query: &str) -> Result<Vec<SearchResult>, TmdbError> {
        let url = format!("{}/search/movie", self.api_url);
        let page: SearchPage = self.get_json(&url, &[("query", query)]).await?;
        debug!(hits = page.results.len(), "TMDB search completed");
        Ok(page.results)
    }

    /// Fetches full metadata of a single movie.
    ///
    /// # Errors
    ///
    /// Returns `TmdbError` on network failure, non-success status or unexpected JSON.
    #[instrument(skip(self))]
    pub async fn movie_details(&self, movie_id: u64) -> Result<MovieDetail, TmdbError> {
        let url = format!("{}/movie/{movie_id}", self.api_url);
        self.get_json(&url, &[("language", self.language.as_str())])
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        let response = self
            .http
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| TmdbError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TmdbError::ApiError {
                status: status.as_u16(),
                message: truncate_chars(&error_text, MAX_ERROR_TEXT),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TmdbError::NetworkError(e.without_url().to_string()))?;

        serde_json::from_str(&body).map_err(|e| TmdbError::JsonError(e.to_string()))
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}... (truncated)", &text[..idx]),
        None => text.to_string(),
    }
}
