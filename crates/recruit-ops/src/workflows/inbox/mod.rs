//! Staff messaging inbox built on the hosted chat backend.

pub mod channel;
mod mapper;
pub mod router;
pub mod session;
mod time;

pub use channel::{
    candidate_channel_id, candidate_user_id_from_channel, ChatChannel, RawChannel,
    CANDIDATE_CHANNEL_PREFIX,
};
pub use mapper::{map_channel, map_channels_to_inbox_rows, InboxRow, ATTACHMENT_PREVIEW};
pub use router::inbox_router;
pub use session::{
    ChatBackend, ChatConfig, ChatError, ChatSession, ChatSessionError, ChatTokenProvider, ChatUser,
};
pub use time::{
    format_relative_time, format_relative_time_local, parse_timestamp, parse_timestamp_str,
    to_iso_string,
};
