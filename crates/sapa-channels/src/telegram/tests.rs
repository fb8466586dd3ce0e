//! Tests for the Telegram channel module.

use super::polling::{fetch_updates, next_offset, poll_query, take_batch, to_incoming};
use super::send::{commands_payload, BOT_COMMANDS};
use super::types::*;
use super::TelegramChannel;
use sapa_core::config::TelegramConfig;
use sapa_core::traits::Channel;
use std::time::Duration;

fn update(json: &str) -> TgUpdate {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_text_message_is_forwarded() {
    let u = update(
        r#"{
        "update_id": 1001,
        "message": {
            "message_id": 5,
            "from": {"id": 42, "is_bot": false, "first_name": "Budi", "last_name": "Santoso", "username": "budis"},
            "chat": {"id": 42, "type": "private"},
            "date": 1749254400,
            "text": "cuaca hari ini"
        }
    }"#,
    );
    let msg = to_incoming(u).expect("text message should be forwarded");
    assert_eq!(msg.update_id, 1001);
    assert_eq!(msg.chat_id, 42);
    assert_eq!(msg.sender.id, 42);
    assert_eq!(msg.sender.display_name(), "Budi Santoso");
    assert_eq!(msg.text, "cuaca hari ini");
    assert_eq!(msg.timestamp.timestamp(), 1749254400);
}

#[test]
fn test_non_text_message_is_dropped() {
    let u = update(
        r#"{
        "update_id": 1002,
        "message": {
            "message_id": 6,
            "from": {"id": 42, "first_name": "Budi"},
            "chat": {"id": 42, "type": "private"},
            "date": 1749254400
        }
    }"#,
    );
    assert!(to_incoming(u).is_none());
}

#[test]
fn test_message_without_sender_is_dropped() {
    let u = update(
        r#"{
        "update_id": 1003,
        "message": {"message_id": 7, "chat": {"id": -100, "type": "channel"}, "text": "hello"}
    }"#,
    );
    assert!(to_incoming(u).is_none());
}

#[test]
fn test_bot_sender_is_dropped() {
    let u = update(
        r#"{
        "update_id": 1004,
        "message": {
            "message_id": 8,
            "from": {"id": 99, "is_bot": true, "first_name": "OtherBot"},
            "chat": {"id": 42, "type": "private"},
            "text": "/start"
        }
    }"#,
    );
    assert!(to_incoming(u).is_none());
}

#[test]
fn test_update_without_message_is_dropped() {
    assert!(to_incoming(update(r#"{"update_id": 1005}"#)).is_none());
}

#[test]
fn test_group_chat_keeps_chat_id() {
    let u = update(
        r#"{
        "update_id": 1006,
        "message": {
            "message_id": 9,
            "from": {"id": 42, "first_name": "Budi"},
            "chat": {"id": -100123, "type": "group"},
            "text": "/weather@sapa_bot"
        }
    }"#,
    );
    let msg = to_incoming(u).unwrap();
    assert_eq!(msg.chat_id, -100123);
    assert_eq!(msg.sender.id, 42);
}

#[test]
fn test_response_error_into_result() {
    let resp: TgResponse<Vec<TgUpdate>> = serde_json::from_str(
        r#"{"ok": false, "error_code": 409, "description": "Conflict: terminated by other getUpdates request"}"#,
    )
    .unwrap();
    let err = resp.into_result("getUpdates").unwrap_err();
    assert!(err.to_string().contains("Conflict"));
}

#[test]
fn test_get_me_response_parsing() {
    let resp: TgResponse<TgUser> = serde_json::from_str(
        r#"{"ok": true, "result": {"id": 1, "is_bot": true, "first_name": "Sapa", "username": "sapa_bot"}}"#,
    )
    .unwrap();
    let user = resp.into_result("getMe").unwrap();
    assert!(user.is_bot);
    assert_eq!(user.username.as_deref(), Some("sapa_bot"));
}

#[test]
fn test_commands_payload_lists_all_commands() {
    let payload = commands_payload();
    let commands = payload["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 9);
    assert_eq!(commands.len(), BOT_COMMANDS.len());
    let names: Vec<&str> = commands
        .iter()
        .map(|c| c["command"].as_str().unwrap())
        .collect();
    for expected in [
        "start",
        "help",
        "clear",
        "ai",
        "ai_off",
        "weather",
        "workout",
        "reminder",
        "stop_reminder",
    ] {
        assert!(names.contains(&expected), "missing command {expected}");
    }
}

#[test]
fn test_channel_name() {
    let channel = TelegramChannel::new(TelegramConfig {
        bot_token: "123:abc".into(),
        ..Default::default()
    });
    assert_eq!(channel.name(), "telegram");
}

fn batch(ids: &[i64]) -> Vec<TgUpdate> {
    ids.iter()
        .map(|id| update(&format!(r#"{{"update_id": {id}}}"#)))
        .collect()
}

#[test]
fn test_next_offset_is_one_past_cursor() {
    assert_eq!(next_offset(None), None);
    assert_eq!(next_offset(Some(1006)), Some(1007));
}

#[test]
fn test_poll_query_includes_offset_only_when_known() {
    let first = poll_query(None, 30);
    assert!(first.contains(&("timeout", "30".to_string())));
    assert!(!first.iter().any(|(k, _)| *k == "offset"));

    let later = poll_query(Some(1007), 30);
    assert!(later.contains(&("offset", "1007".to_string())));
}

#[test]
fn test_cursor_advances_past_dropped_updates() {
    // None of these carry a text message, so all are filtered later.
    let (cursor, fresh) = take_batch(Some(10), batch(&[11, 12, 13]));
    assert_eq!(cursor, Some(13));
    assert_eq!(fresh.len(), 3);
    assert!(fresh.into_iter().all(|u| to_incoming(u).is_none()));
}

#[test]
fn test_empty_batch_keeps_cursor() {
    assert_eq!(take_batch(Some(42), Vec::new()).0, Some(42));
    assert_eq!(take_batch(None, Vec::new()).0, None);
}

#[test]
fn test_seen_updates_are_not_reprocessed() {
    let (cursor, fresh) = take_batch(Some(20), batch(&[19, 20, 21]));
    assert_eq!(cursor, Some(21));
    let ids: Vec<i64> = fresh.iter().map(|u| u.update_id).collect();
    assert_eq!(ids, vec![21]);

    // A stale batch never moves the cursor backwards.
    let (cursor, fresh) = take_batch(Some(21), batch(&[5]));
    assert_eq!(cursor, Some(21));
    assert!(fresh.is_empty());
}

/// Base URL of a local port with nothing listening.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_fetch_updates_reports_transport_failure() {
    let client = reqwest::Client::new();
    let err = fetch_updates(&client, &closed_port_url(), None, 0)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("getUpdates failed"), "{err}");
}

#[tokio::test]
async fn test_poll_loop_retries_after_failure_until_stopped() {
    let mut channel = TelegramChannel::new(TelegramConfig {
        bot_token: "123:abc".into(),
        poll_timeout_secs: 0,
        retry_delay_secs: 1,
    });
    channel.base_url = closed_port_url();

    let mut rx = channel.start().await.unwrap();

    // Still polling after the first failure: the sender is alive.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(matches!(
        rx.try_recv(),
        Err(tokio::sync::mpsc::error::TryRecvError::Empty)
    ));
    assert_eq!(*channel.last_update_id.lock().await, None);

    // After stop the loop exits once the back-off elapses.
    channel.stop().await.unwrap();
    let closed = tokio::time::timeout(Duration::from_secs(10), rx.recv())
        .await
        .expect("poll loop should exit after stop");
    assert!(closed.is_none());
}
