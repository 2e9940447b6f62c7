//! Movie card delivery.
//!
//! A card is the poster with the rendered caption. Telegram rejects photos
//! for many reasons (caption over 1024 characters, unreachable image URL),
//! so any failure degrades to a plain HTML text message.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile, ParseMode};
use tracing::{debug, warn};

/// How a movie card ended up being delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDelivery {
    /// Poster with caption
    Photo,
    /// Caption only, as a text message
    Text,
}

/// Sends the caption with the poster, falling back to a text message.
///
/// # Errors
///
/// Returns an error only if the text fallback fails as well.
pub async fn send_movie_card(
    bot: &Bot,
    chat_id: ChatId,
    poster_url: Option<&str>,
    caption: &str,
) -> Result<CardDelivery> {
    if let Some(url) = poster_url {
        match reqwest::Url::parse(url) {
            Ok(url) => {
                match bot
                    .send_photo(chat_id, InputFile::url(url))
                    .caption(caption)
                    .parse_mode(ParseMode::Html)
                    .await
                {
                    Ok(_) => return Ok(CardDelivery::Photo),
                    Err(e) => warn!("Failed to send poster to chat {chat_id}, sending text: {e}"),
                }
            }
            Err(e) => warn!("Invalid poster URL {url}: {e}"),
        }
    } else {
        debug!("No poster for chat {chat_id}, sending text");
    }

    bot.send_message(chat_id, caption)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(CardDelivery::Text)
}
