// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use movie_info_bot::config::{
    Settings, DEFAULT_MAX_RESULTS, DEFAULT_TMDB_IMAGE_URL, DEFAULT_TMDB_LANGUAGE,
};
use teloxide::Bot;

pub const TEST_API_KEY: &str = "test-api-key";

pub const TEST_BOT_TOKEN: &str = "123456789:test_bot_token";

/// Bot API reply for any method returning a `Message`.
pub const SENT_MESSAGE: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 2,
        "date": 1706529600,
        "chat": {"id": 123, "type": "private", "first_name": "Test"},
        "from": {"id": 987654321, "is_bot": true, "first_name": "MovieBot", "username": "moviebot"},
        "text": "card"
    }
}"#;

/// Bot API reply for methods returning `True`.
pub const OK_TRUE: &str = r#"{"ok": true, "result": true}"#;

/// Settings pointing the TMDB client at a local mock server.
pub fn settings_for(api_url: &str) -> Settings {
    Settings {
        telegram_token: "dummy".to_string(),
        tmdb_api_key: TEST_API_KEY.to_string(),
        tmdb_api_url: api_url.to_string(),
        tmdb_image_url: DEFAULT_TMDB_IMAGE_URL.to_string(),
        tmdb_language: DEFAULT_TMDB_LANGUAGE.to_string(),
        tmdb_http_timeout_secs: 5,
        max_results: DEFAULT_MAX_RESULTS,
    }
}

/// Bot talking to a mocked Bot API server.
pub fn bot_for(server: &ServerGuard) -> Bot {
    let url = reqwest::Url::parse(&server.url()).expect("mock server url");
    Bot::new(TEST_BOT_TOKEN).set_api_url(url)
}

// Bot API method names are case-insensitive; match either spelling.
pub fn method_path(method: &str) -> Matcher {
    Matcher::Regex(format!("(?i)/bot[^/]+/{method}$"))
}

pub fn mock_method(server: &mut ServerGuard, method: &str, status: usize, body: &str) -> Mock {
    server
        .mock("POST", method_path(method))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
}
