use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Channel ids for one-to-one candidate conversations start with this prefix.
pub const CANDIDATE_CHANNEL_PREFIX: &str = "candidate-";

static ABSENT: Value = Value::Null;

/// Read access to a channel object handed over by the chat SDK.
///
/// Every accessor returns the raw, untrusted value; the mapper narrows each one.
pub trait ChatChannel {
    fn id(&self) -> &Value;

    /// The channel's custom `data` object (`name`, `last_message_at`, ...).
    fn data(&self) -> &Value;

    /// `state.messages`, oldest first.
    fn messages(&self) -> &Value;

    fn last_message_at(&self) -> &Value;

    /// Unread messages for the connected user; `None` when the SDK offers no count.
    fn count_unread(&self) -> Option<f64>;
}

/// Serde view of a channel as the SDK serializes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawChannel {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub state: Value,
    #[serde(default)]
    pub last_message_at: Value,
    #[serde(default, alias = "unreadCount")]
    pub unread_count: Value,
}

impl ChatChannel for RawChannel {
    fn id(&self) -> &Value {
        &self.id
    }

    fn data(&self) -> &Value {
        &self.data
    }

    fn messages(&self) -> &Value {
        self.state.get("messages").unwrap_or(&ABSENT)
    }

    fn last_message_at(&self) -> &Value {
        &self.last_message_at
    }

    fn count_unread(&self) -> Option<f64> {
        self.unread_count.as_f64()
    }
}

/// Builds the channel id used for a candidate's conversation with staff.
pub fn candidate_channel_id(candidate_user_id: &str) -> String {
    format!("{CANDIDATE_CHANNEL_PREFIX}{}", candidate_user_id.trim())
}

/// Candidate user id encoded in a channel id, if the id follows the naming convention.
pub fn candidate_user_id_from_channel(channel_id: &str) -> Option<&str> {
    channel_id
        .strip_prefix(CANDIDATE_CHANNEL_PREFIX)
        .map(str::trim)
        .filter(|user_id| !user_id.is_empty())
}
