//! Dispatcher wiring and long polling entrypoint.

use crate::bot;
use crate::bot::handlers::{is_plain_text, Command, MovieDialogue};
use crate::bot::state::State;
use crate::bot::views::{DONE_TEXT, HOW_TO_BUTTON, SEARCH_BUTTON};
use crate::config::Settings;
use crate::tmdb::TmdbClient;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{error, info};

/// Run the bot until Ctrl-C.
pub async fn run_bot(settings: Arc<Settings>) {
    let tmdb = Arc::new(TmdbClient::new(&settings));
    info!("TMDB client initialized.");

    let bot = Bot::new(settings.telegram_token.clone());
    let bot_state = init_bot_state();
    let handler = setup_handler();

    info!("Bot is running...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![tmdb, settings, bot_state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

fn init_bot_state() -> Arc<InMemStorage<State>> {
    InMemStorage::<State>::new()
}

/// Build the update handler tree.
///
/// Commands and the menu buttons work in every state; free text and
/// callbacks are routed by the current dialogue state.
#[must_use]
pub fn setup_handler() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(
            Update::filter_callback_query()
                .enter_dialogue::<CallbackQuery, InMemStorage<State>, State>()
                .branch(dptree::case![State::AwaitingSelection].endpoint(handle_selection))
                .branch(dptree::endpoint(handle_stale_callback)),
        )
        .branch(
            Update::filter_message()
                .enter_dialogue::<Message, InMemStorage<State>, State>()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_command),
                )
                .branch(
                    dptree::filter(|msg: Message| msg.text() == Some(SEARCH_BUTTON))
                        .endpoint(handle_search_entry),
                )
                .branch(
                    dptree::filter(|msg: Message| msg.text() == Some(HOW_TO_BUTTON))
                        .endpoint(handle_how_to),
                )
                .branch(
                    dptree::case![State::AwaitingQuery]
                        .filter(|msg: Message| is_plain_text(&msg))
                        .endpoint(handle_query),
                )
                .branch(
                    // Restart while results are on screen
                    dptree::case![State::AwaitingSelection]
                        .filter(|msg: Message| msg.text() == Some(DONE_TEXT))
                        .endpoint(handle_search_entry),
                ),
        )
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: MovieDialogue,
) -> Result<(), teloxide::RequestError> {
    let res = match cmd {
        Command::Start => bot::handlers::start(bot, msg, dialogue).await,
        Command::Help => bot::handlers::help(bot, msg).await,
    };
    if let Err(e) = res {
        error!("Command error: {}", e);
    }
    respond(())
}

async fn handle_how_to(bot: Bot, msg: Message) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::help(bot, msg).await {
        error!("How-to handler error: {}", e);
    }
    respond(())
}

async fn handle_search_entry(
    bot: Bot,
    msg: Message,
    dialogue: MovieDialogue,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::ask_for_title(bot, msg, dialogue).await {
        error!("Search entry handler error: {}", e);
    }
    respond(())
}

async fn handle_query(
    bot: Bot,
    msg: Message,
    dialogue: MovieDialogue,
    tmdb: Arc<TmdbClient>,
    settings: Arc<Settings>,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::search(bot, msg, dialogue, tmdb, settings).await {
        error!("Search handler error: {}", e);
    }
    respond(())
}

async fn handle_selection(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MovieDialogue,
    tmdb: Arc<TmdbClient>,
    settings: Arc<Settings>,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::select_movie(bot, q, dialogue, tmdb, settings).await {
        error!("Selection handler error: {}", e);
    }
    respond(())
}

async fn handle_stale_callback(bot: Bot, q: CallbackQuery) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::ignore_callback(bot, q).await {
        error!("Callback handler error: {}", e);
    }
    respond(())
}
