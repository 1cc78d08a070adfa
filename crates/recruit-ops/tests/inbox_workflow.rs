use std::sync::{Arc, Mutex};

use chrono::{FixedOffset, TimeZone};
use recruit_ops::workflows::inbox::{
    candidate_channel_id, format_relative_time, map_channels_to_inbox_rows, ChatBackend,
    ChatConfig, ChatError, ChatSession, ChatTokenProvider, ChatUser, InboxRow, RawChannel,
};
use serde_json::json;

#[test]
fn observed_inbox_maps_to_two_sorted_rows() {
    let channels: Vec<RawChannel> = serde_json::from_value(json!([
        {
            "id": "candidate-1",
            "data": { "name": "Avery Stone" },
            "state": { "messages": [{ "text": "Morning", "created_at": "2026-02-23T10:00:00.000Z" }] },
            "unread_count": 0,
        },
        {
            "id": "candidate-2",
            "state": { "messages": [
                { "text": "Earlier", "created_at": "2026-02-24T09:00:00.000Z" },
                { "created_at": "2026-02-24T10:00:00.000Z" },
            ] },
            "unread_count": 2,
        },
        { "id": "candidate-3", "state": { "messages": [] } },
        {
            "id": "team-support",
            "state": { "messages": [{ "text": "internal", "created_at": "2026-02-25T10:00:00.000Z" }] },
        },
    ]))
    .expect("channels parse");

    let rows = map_channels_to_inbox_rows(&channels);
    assert_eq!(
        rows,
        vec![
            InboxRow {
                candidate_user_id: "2".to_string(),
                channel_id: "candidate-2".to_string(),
                channel_name: "candidate-2".to_string(),
                last_message_preview: "Attachment or system message".to_string(),
                last_message_at: "2026-02-24T10:00:00.000Z".to_string(),
                unread_count: 2,
            },
            InboxRow {
                candidate_user_id: "1".to_string(),
                channel_id: "candidate-1".to_string(),
                channel_name: "Avery Stone".to_string(),
                last_message_preview: "Morning".to_string(),
                last_message_at: "2026-02-23T10:00:00.000Z".to_string(),
                unread_count: 0,
            },
        ]
    );
}

#[test]
fn relative_labels_follow_the_viewer_calendar() {
    let eastern = FixedOffset::west_opt(5 * 3600).expect("valid offset");
    let now = eastern
        .with_ymd_and_hms(2026, 2, 24, 12, 0, 0)
        .single()
        .expect("valid instant");

    assert_eq!(format_relative_time("2026-02-24T14:05:00Z", &now), "9:05 AM");
    assert_eq!(format_relative_time("2026-02-23T18:00:00Z", &now), "Yesterday");
    assert_eq!(format_relative_time("2026-02-03T18:00:00Z", &now), "Feb 3");
    assert_eq!(format_relative_time("garbage", &now), "");
}

#[derive(Default)]
struct FakeChat {
    log: Mutex<Vec<String>>,
}

impl ChatBackend for FakeChat {
    fn connect_user(&self, _api_key: &str, user: &ChatUser, token: &str) -> Result<(), ChatError> {
        self.log
            .lock()
            .expect("log mutex")
            .push(format!("connect {} {}", user.id, token));
        Ok(())
    }

    fn disconnect_user(&self, user: &ChatUser) -> Result<(), ChatError> {
        self.log
            .lock()
            .expect("log mutex")
            .push(format!("disconnect {}", user.id));
        Ok(())
    }
}

struct StaticTokens;

impl ChatTokenProvider for StaticTokens {
    fn token_for(&self, user: &ChatUser) -> Result<String, ChatError> {
        Ok(format!("token-{}", user.id))
    }
}

#[test]
fn chat_session_switches_users_explicitly() {
    let backend = Arc::new(FakeChat::default());
    let session = ChatSession::new(
        backend.clone(),
        Arc::new(StaticTokens),
        ChatConfig {
            api_key: "key".to_string(),
        },
    );
    let staff = ChatUser {
        id: "staff-1".to_string(),
        name: Some("Recruiter".to_string()),
    };
    let candidate = ChatUser {
        id: "cand-9".to_string(),
        name: None,
    };

    session.ensure_connected(&staff).expect("connects");
    session.ensure_connected(&staff).expect("already connected");
    session.connect(&candidate).expect("switches");
    session.disconnect().expect("disconnects");
    session.disconnect().expect("idempotent");

    assert!(session.current_user().is_none());
    assert_eq!(
        backend.log.lock().expect("log mutex").clone(),
        vec![
            "connect staff-1 token-staff-1",
            "disconnect staff-1",
            "connect cand-9 token-cand-9",
            "disconnect cand-9",
        ]
    );
    assert_eq!(candidate_channel_id("cand-9"), "candidate-cand-9");
}
