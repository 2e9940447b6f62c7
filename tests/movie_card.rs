//! Card delivery against a mocked Bot API server.

mod common;

use common::{bot_for, mock_method, SENT_MESSAGE};
use movie_info_bot::bot::messaging::{send_movie_card, CardDelivery};
use teloxide::types::ChatId;

#[tokio::test]
async fn poster_is_sent_as_photo() {
    let mut server = mockito::Server::new_async().await;
    let photo = mock_method(&mut server, "sendPhoto", 200, SENT_MESSAGE)
        .create_async()
        .await;
    let text = mock_method(&mut server, "sendMessage", 200, SENT_MESSAGE)
        .expect(0)
        .create_async()
        .await;

    let delivery = send_movie_card(
        &bot_for(&server),
        ChatId(123),
        Some("https://image.tmdb.org/t/p/w500/poster.jpg"),
        "<b>Fight Club</b>",
    )
    .await
    .expect("delivery");

    assert_eq!(delivery, CardDelivery::Photo);
    photo.assert_async().await;
    text.assert_async().await;
}

#[tokio::test]
async fn rejected_photo_falls_back_to_text() {
    let mut server = mockito::Server::new_async().await;
    let photo = mock_method(
        &mut server,
        "sendPhoto",
        400,
        r#"{"ok": false, "error_code": 400, "description": "Bad Request: message caption is too long"}"#,
    )
    .create_async()
    .await;
    let text = mock_method(&mut server, "sendMessage", 200, SENT_MESSAGE)
        .create_async()
        .await;

    let delivery = send_movie_card(
        &bot_for(&server),
        ChatId(123),
        Some("https://image.tmdb.org/t/p/w500/poster.jpg"),
        "<b>Fight Club</b>",
    )
    .await
    .expect("delivery");

    assert_eq!(delivery, CardDelivery::Text);
    photo.assert_async().await;
    text.assert_async().await;
}

#[tokio::test]
async fn missing_poster_goes_straight_to_text() {
    let mut server = mockito::Server::new_async().await;
    let photo = mock_method(&mut server, "sendPhoto", 200, SENT_MESSAGE)
        .expect(0)
        .create_async()
        .await;
    let text = mock_method(&mut server, "sendMessage", 200, SENT_MESSAGE)
        .create_async()
        .await;

    let delivery = send_movie_card(&bot_for(&server), ChatId(123), None, "<b>Untitled</b>")
        .await
        .expect("delivery");

    assert_eq!(delivery, CardDelivery::Text);
    photo.assert_async().await;
    text.assert_async().await;
}

#[tokio::test]
async fn failing_fallback_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let error = r#"{"ok": false, "error_code": 403, "description": "Forbidden: bot was blocked by the user"}"#;
    let _photo = mock_method(&mut server, "sendPhoto", 403, error)
        .create_async()
        .await;
    let _text = mock_method(&mut server, "sendMessage", 403, error)
        .create_async()
        .await;

    let result = send_movie_card(
        &bot_for(&server),
        ChatId(123),
        Some("https://image.tmdb.org/t/p/w500/poster.jpg"),
        "<b>Fight Club</b>",
    )
    .await;

    assert!(result.is_err());
}
