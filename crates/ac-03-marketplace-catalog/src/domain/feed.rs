//! Social feed, notifications and direct-message inbox.

use serde::{Deserialize, Serialize};
use shared_types::{ConversationId, ListingId, MessageId, NotificationId, PostId, Timestamp, UserId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
    pub timestamp: Timestamp,
    pub likes: u32,
    pub bookmarks: u32,
    pub liked: bool,
    pub bookmarked: bool,
    pub attached_listing: Option<ListingId>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mentions: Vec<String>,
}

impl SocialPost {
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().trim_start_matches('#');
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Circle,
    Social,
    Payout,
    System,
    Vault,
    Request,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub timestamp: Timestamp,
    pub read: bool,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub participant_id: UserId,
    pub participant_username: String,
    pub participant_avatar: String,
    pub last_message: String,
    pub last_message_time: Timestamp,
    pub unread_count: u32,
    pub is_online: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub sender_username: String,
    pub sender_avatar: String,
    pub content: String,
    pub timestamp: Timestamp,
    pub read: bool,
}
