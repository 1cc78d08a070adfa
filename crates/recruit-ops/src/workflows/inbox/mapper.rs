use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::channel::{candidate_user_id_from_channel, ChatChannel};
use super::time::{parse_timestamp, to_iso_string};

pub const ATTACHMENT_PREVIEW: &str = "Attachment or system message";

/// One candidate conversation as listed in the staff inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxRow {
    pub candidate_user_id: String,
    pub channel_id: String,
    pub channel_name: String,
    pub last_message_preview: String,
    pub last_message_at: String,
    pub unread_count: u32,
}

/// Projects candidate channels into inbox rows, most recent conversation first.
///
/// Channels that are not candidate conversations, have no messages, or carry no
/// parseable timestamp are left out.
pub fn map_channels_to_inbox_rows<C: ChatChannel>(channels: &[C]) -> Vec<InboxRow> {
    let mut rows: Vec<InboxRow> = channels.iter().filter_map(map_channel).collect();
    rows.sort_by(|left, right| right.last_message_at.cmp(&left.last_message_at));
    rows
}

/// Row for a single channel, or `None` when the channel does not belong in the inbox.
pub fn map_channel<C: ChatChannel>(channel: &C) -> Option<InboxRow> {
    let Some(channel_id) = channel.id().as_str() else {
        tracing::debug!("skipping channel without a string id");
        return None;
    };
    let Some(candidate_user_id) = candidate_user_id_from_channel(channel_id) else {
        tracing::debug!(channel_id, "skipping non-candidate channel");
        return None;
    };

    let Some(last_message) = channel
        .messages()
        .as_array()
        .and_then(|messages| messages.last())
    else {
        tracing::debug!(channel_id, "skipping channel without messages");
        return None;
    };

    let data = channel.data();
    let Some(last_message_at) = [
        last_message.get("created_at"),
        Some(channel.last_message_at()),
        data.get("last_message_at"),
    ]
    .into_iter()
    .flatten()
    .find_map(parse_timestamp) else {
        tracing::debug!(channel_id, "skipping channel without a parseable timestamp");
        return None;
    };

    let last_message_preview = last_message
        .get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(ATTACHMENT_PREVIEW)
        .to_string();

    let channel_name = data
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(channel_id)
        .to_string();

    Some(InboxRow {
        candidate_user_id: candidate_user_id.to_string(),
        channel_id: channel_id.to_string(),
        channel_name,
        last_message_preview,
        last_message_at: to_iso_string(&last_message_at),
        unread_count: coerce_unread(channel.count_unread()),
    })
}

/// Floors the SDK count; negative, NaN, infinite or missing counts read as zero.
pub(crate) fn coerce_unread(count: Option<f64>) -> u32 {
    match count {
        Some(value) if value.is_finite() && value > 0.0 => {
            let floored = value.floor();
            if floored >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                floored as u32
            }
        }
        _ => 0,
    }
}
