use super::*;
use sapa_core::context::Role;

fn test_store() -> Store {
    Store::new(Language::English)
}

#[tokio::test]
async fn test_get_session_absent() {
    let store = test_store();
    assert!(store.get_session(1).await.is_none());
}

#[tokio::test]
async fn test_ensure_session_creates_defaults() {
    let store = Store::new(Language::Indonesian);
    let session = store.ensure_session(7).await;
    assert!(!session.ai_mode);
    assert_eq!(session.language, Language::Indonesian);
    assert_eq!(store.get_session(7).await, Some(session));
}

#[tokio::test]
async fn test_update_session_merges_fields() {
    let store = test_store();
    store.set_ai_mode(1, true).await;
    let session = store
        .update_session(
            1,
            SessionUpdate {
                language: Some(Language::Indonesian),
                ..Default::default()
            },
        )
        .await;
    assert!(session.ai_mode, "ai_mode must survive a language-only update");
    assert_eq!(session.language, Language::Indonesian);
}

#[tokio::test]
async fn test_touch_preserves_ai_mode_and_detects_language() {
    let store = test_store();
    store.set_ai_mode(1, true).await;
    let session = store.touch(1, "saya mau tanya cuaca hari ini").await;
    assert!(session.ai_mode);
    assert_eq!(session.language, Language::Indonesian);
}

#[tokio::test]
async fn test_touch_tie_keeps_existing_language() {
    let store = test_store();
    store.touch(1, "apa kabar, saya baik").await;
    let session = store.touch(1, "👍").await;
    assert_eq!(session.language, Language::Indonesian);
}

#[tokio::test]
async fn test_touch_tie_new_session_gets_default() {
    let store = Store::new(Language::Indonesian);
    let session = store.touch(9, "/ai").await;
    assert_eq!(session.language, Language::Indonesian);
    assert!(!session.ai_mode);
}

#[tokio::test]
async fn test_touch_updates_last_activity() {
    let store = test_store();
    let first = store.touch(1, "hi").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = store.touch(1, "hi").await;
    assert!(second.last_activity > first.last_activity);
}

#[tokio::test]
async fn test_history_bounded_to_most_recent() {
    let store = test_store();
    for i in 0..25 {
        store.append_turn(1, ChatTurn::user(format!("msg {i}"))).await;
    }
    let history = store.history(1).await;
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].content, "msg 5");
    assert_eq!(history[19].content, "msg 24");
    for pair in history.windows(2) {
        let a: usize = pair[0].content[4..].parse().unwrap();
        let b: usize = pair[1].content[4..].parse().unwrap();
        assert_eq!(b, a + 1, "order must be preserved");
    }
}

#[tokio::test]
async fn test_append_returns_length() {
    let store = test_store();
    assert_eq!(store.append_turn(1, ChatTurn::user("a")).await, 1);
    assert_eq!(store.append_turn(1, ChatTurn::assistant("b")).await, 2);
    let history = store.history(1).await;
    assert_eq!(history[1].role, Role::Assistant);
}

#[tokio::test]
async fn test_history_is_per_user() {
    let store = test_store();
    store.append_turn(1, ChatTurn::user("one")).await;
    store.append_turn(2, ChatTurn::user("two")).await;
    assert_eq!(store.history(1).await.len(), 1);
    assert_eq!(store.history(2).await[0].content, "two");
    assert!(store.history(3).await.is_empty());
}

#[tokio::test]
async fn test_clear_after_full_buffer() {
    let store = test_store();
    for i in 0..20 {
        store.append_turn(1, ChatTurn::user(format!("{i}"))).await;
    }
    assert!(store.clear_history(1).await);
    assert!(store.history(1).await.is_empty());
    assert!(!store.clear_history(1).await);
}

#[tokio::test]
async fn test_clones_share_state() {
    let store = test_store();
    let other = store.clone();
    other.set_ai_mode(5, true).await;
    assert!(store.get_session(5).await.map(|s| s.ai_mode).unwrap_or(false));
}
