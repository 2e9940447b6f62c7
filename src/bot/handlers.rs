use crate::bot::messaging::send_movie_card;
use crate::bot::state::State;
use crate::bot::views::{
    parse_movie_callback, search_results_keyboard, start_menu_keyboard, DefaultSearchView,
    SearchView,
};
use crate::config::Settings;
use crate::render::movie_caption;
use crate::tmdb::TmdbClient;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{KeyboardRemove, ParseMode},
    utils::command::BotCommands,
};
use tracing::{debug, error, info, warn};

/// Dialogue handle injected into every message and callback handler
pub type MovieDialogue = Dialogue<State, InMemStorage<State>>;

// Helper function to get user name from Message
fn get_user_name(msg: &Message) -> String {
    if let Some(ref user) = msg.from {
        if let Some(ref username) = user.username {
            return username.clone();
        }
        if !user.first_name.is_empty() {
            return user.first_name.clone();
        }
    }
    "Unknown".to_string()
}

/// Safe extraction of user ID from a message.
/// Returns 0 if the user information is missing.
pub fn get_user_id_safe(msg: &Message) -> i64 {
    msg.from.as_ref().map_or(0, |u| u.id.0.cast_signed())
}

/// True for text messages that are not commands
#[must_use]
pub fn is_plain_text(msg: &Message) -> bool {
    msg.text().is_some_and(|text| !text.starts_with('/'))
}

/// Supported commands for the bot
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Show the greeting and the start menu
    #[command(description = "Start the bot.")]
    Start,
    /// Show usage help
    #[command(description = "Show how to use the bot.")]
    Help,
}

/// Start handler
///
/// # Errors
///
/// Returns an error if the dialogue cannot be reset or the greeting cannot be sent.
pub async fn start(bot: Bot, msg: Message, dialogue: MovieDialogue) -> Result<()> {
    let user_id = get_user_id_safe(&msg);
    let user_name = get_user_name(&msg);

    info!("User {user_id} ({user_name}) initiated /start command.");

    dialogue
        .update(State::Idle)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;

    let mention = msg.from.as_ref().map_or_else(
        || "there".to_string(),
        |user| {
            format!(
                "<a href=\"tg://user?id={}\">{}</a>",
                user.id,
                html_escape::encode_text(&user.full_name())
            )
        },
    );

    bot.send_message(msg.chat.id, DefaultSearchView::welcome_message(&mention))
        .parse_mode(ParseMode::Html)
        .reply_markup(start_menu_keyboard())
        .await?;

    Ok(())
}

/// Help handler, also used for the how-to button
///
/// # Errors
///
/// Returns an error if the message cannot be sent.
pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, DefaultSearchView::help_message())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Enters the search dialogue: asks for a title and hides the reply keyboard.
///
/// # Errors
///
/// Returns an error if the prompt cannot be sent or the dialogue cannot be updated.
pub async fn ask_for_title(bot: Bot, msg: Message, dialogue: MovieDialogue) -> Result<()> {
    debug!("User {} entered search.", get_user_id_safe(&msg));

    bot.send_message(msg.chat.id, DefaultSearchView::ask_for_title())
        .reply_markup(KeyboardRemove::new())
        .await?;

    dialogue
        .update(State::AwaitingQuery)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;

    Ok(())
}

/// Runs a TMDB search for the received title and offers the hits as buttons.
///
/// The dialogue moves on only when at least one result was shown; otherwise
/// the user can simply send another title.
///
/// # Errors
///
/// Returns an error if a Telegram call fails or the dialogue cannot be updated.
pub async fn search(
    bot: Bot,
    msg: Message,
    dialogue: MovieDialogue,
    tmdb: Arc<TmdbClient>,
    settings: Arc<Settings>,
) -> Result<()> {
    let Some(query) = msg.text().map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(());
    };
    let user_id = get_user_id_safe(&msg);

    info!("User {user_id} searching for {query:?}");

    let results = match tmdb.search_movies(query).await {
        Ok(results) => results,
        Err(e) => {
            error!("Search for {query:?} failed for user {user_id}: {e}");
            bot.send_message(msg.chat.id, DefaultSearchView::error_message())
                .await?;
            return Ok(());
        }
    };

    if results.is_empty() {
        bot.send_message(msg.chat.id, DefaultSearchView::nothing_found(query))
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    }

    info!(
        "Offering {} of {} results to user {user_id}",
        results.len().min(settings.max_results),
        results.len()
    );

    bot.send_message(msg.chat.id, DefaultSearchView::search_results_header())
        .reply_markup(search_results_keyboard(&results, settings.max_results))
        .await?;

    dialogue
        .update(State::AwaitingSelection)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;

    Ok(())
}

/// Handles a tap on a search result: removes the list, fetches the movie and
/// sends its card. The dialogue ends here whatever the outcome.
///
/// # Errors
///
/// Returns an error if the callback has no message, the dialogue cannot be
/// reset, or the card cannot be delivered even as text.
pub async fn select_movie(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MovieDialogue,
    tmdb: Arc<TmdbClient>,
    settings: Arc<Settings>,
) -> Result<()> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!("Failed to answer callback {} from user {}: {e}", q.id, q.from.id);
    }

    let Some(data) = q.data.as_deref() else {
        debug!("Ignoring callback without data from user {}", q.from.id);
        return Ok(());
    };

    let Some(movie_id) = parse_movie_callback(data) else {
        debug!("Ignoring unknown callback data {data:?}");
        return Ok(());
    };

    let user_id = q.from.id.0.cast_signed();
    let message = q
        .message
        .as_ref()
        .ok_or_else(|| anyhow!("Callback message missing chat id"))?;
    let chat_id = message.chat().id;

    if let Err(e) = bot.delete_message(chat_id, message.id()).await {
        warn!("Failed to delete search results in chat {chat_id}: {e}");
    }

    dialogue
        .update(State::Idle)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;

    info!("User {user_id} selected movie {movie_id}");

    let movie = match tmdb.movie_details(movie_id).await {
        Ok(movie) => movie,
        Err(e) => {
            error!("Fetching movie {movie_id} failed for user {user_id}: {e}");
            bot.send_message(chat_id, DefaultSearchView::error_message())
                .await?;
            return Ok(());
        }
    };

    let caption = movie_caption(&movie);
    let poster_url = movie
        .poster_path
        .as_deref()
        .map(|path| settings.poster_url(path));

    let delivery = send_movie_card(&bot, chat_id, poster_url.as_deref(), &caption).await?;
    debug!("Movie {movie_id} delivered to chat {chat_id} as {delivery:?}");

    Ok(())
}

/// Answers callbacks that arrive outside of a selection so the client stops
/// showing a spinner. Nothing else happens.
///
/// # Errors
///
/// Returns an error if the callback cannot be answered.
pub async fn ignore_callback(bot: Bot, q: CallbackQuery) -> Result<()> {
    debug!(
        "Ignoring stale callback {:?} from user {}",
        q.data, q.from.id
    );
    bot.answer_callback_query(q.id.clone()).await?;
    Ok(())
}
