//! Search dialogue UI components
//!
//! Contains keyboards, text messages, and callback formats for the movie search.

use crate::tmdb::SearchResult;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

// ─────────────────────────────────────────────────────────────────────────────
// Button and callback constants
// ─────────────────────────────────────────────────────────────────────────────

/// Start menu button showing usage help
pub const HOW_TO_BUTTON: &str = "🤭How to?";
/// Start menu button entering the search dialogue
pub const SEARCH_BUTTON: &str = "🔍Search";
/// Start menu button for popular movies (not handled)
pub const POPULAR_BUTTON: &str = "🔥Popular";
/// Start menu button for trending movies (not handled)
pub const TRENDING_BUTTON: &str = "📈Trending";
/// Start menu button for genres (not handled)
pub const GENRES_BUTTON: &str = "🧞‍♂️Genres";
/// Text that restarts the dialogue while results are shown
pub const DONE_TEXT: &str = "Done";

/// Prefix of the callback data attached to search result buttons
pub const MOVIE_CALLBACK_PREFIX: &str = "movie-id-";

/// Builds the callback data for a search result button.
#[must_use]
pub fn movie_callback_data(movie_id: u64) -> String {
    format!("{MOVIE_CALLBACK_PREFIX}{movie_id}")
}

/// Extracts the movie id from a search result callback.
///
/// # Examples
///
/// ```
/// use movie_info_bot::bot::views::parse_movie_callback;
/// assert_eq!(parse_movie_callback("movie-id-550"), Some(550));
/// assert_eq!(parse_movie_callback("something-else"), None);
/// ```
#[must_use]
pub fn parse_movie_callback(data: &str) -> Option<u64> {
    data.strip_prefix(MOVIE_CALLBACK_PREFIX)?.parse().ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait definition
// ─────────────────────────────────────────────────────────────────────────────

/// Texts shown during the search dialogue
pub trait SearchView {
    /// Greeting for `/start`; `mention` is already valid HTML
    fn welcome_message(mention: &str) -> String;

    /// Usage help for `/help` and the how-to button
    fn help_message() -> &'static str;

    /// Prompt asking for a movie title
    fn ask_for_title() -> &'static str;

    /// Header above the result buttons
    fn search_results_header() -> &'static str;

    /// Reply when the search found nothing
    fn nothing_found(query: &str) -> String;

    /// Reply when a TMDB request failed
    fn error_message() -> &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// Default implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Default English implementation of `SearchView`
pub struct DefaultSearchView;

impl SearchView for DefaultSearchView {
    fn welcome_message(mention: &str) -> String {
        format!(
            "Hi {mention}!\n\
             I am a movie info bot. I will do my best to search for anything related to a movie from my database.\n\
             Now try me by using the keyboard given."
        )
    }

    fn help_message() -> &'static str {
        "🎬 <b>How to use me</b>\n\n\
         1. Tap <b>🔍Search</b>.\n\
         2. Send me the name of a movie.\n\
         3. Pick the right one from the list.\n\n\
         I will reply with the poster, budget, revenue, genres and a short overview.\n\n\
         /start - show the menu\n\
         /help - show this message"
    }

    fn ask_for_title() -> &'static str {
        "Send me the name of the movie you want to find information about 😊:"
    }

    fn search_results_header() -> &'static str {
        "Search Results:"
    }

    fn nothing_found(query: &str) -> String {
        format!(
            "🤷 Nothing found for <b>{}</b>. Try another title:",
            html_escape::encode_text(query)
        )
    }

    fn error_message() -> &'static str {
        "❌ Something went wrong while talking to the movie database. Please try again later."
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboards
// ─────────────────────────────────────────────────────────────────────────────

/// Get the start menu keyboard
///
/// # Examples
///
/// ```
/// use movie_info_bot::bot::views::start_menu_keyboard;
/// let keyboard = start_menu_keyboard();
/// assert_eq!(keyboard.keyboard.len(), 2);
/// ```
#[must_use]
pub fn start_menu_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(HOW_TO_BUTTON),
            KeyboardButton::new(SEARCH_BUTTON),
            KeyboardButton::new(POPULAR_BUTTON),
        ],
        vec![
            KeyboardButton::new(TRENDING_BUTTON),
            KeyboardButton::new(GENRES_BUTTON),
        ],
    ])
    .resize_keyboard()
}

/// Get the inline keyboard listing search results, one per row.
///
/// At most `limit` results are turned into buttons, in the given order.
#[must_use]
pub fn search_results_keyboard(results: &[SearchResult], limit: usize) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(results.iter().take(limit).map(|result| {
        let label = if result.title.trim().is_empty() {
            format!("#{}", result.id)
        } else {
            result.title.clone()
        };
        vec![InlineKeyboardButton::callback(
            label,
            movie_callback_data(result.id),
        )]
    }))
}
