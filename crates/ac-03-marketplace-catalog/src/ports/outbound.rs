//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::{ConversationId, DomainResult};

use crate::domain::{Conversation, DirectMessage, Listing, Notification, SocialPost};

/// Backing store for catalog content.
///
/// Loaded once from the mock dataset; the query API never writes to it.
pub trait CatalogRepository: Send + Sync {
    fn insert_listing(&self, listing: Listing) -> DomainResult<()>;

    /// All listings in load order.
    fn listings(&self) -> Vec<Listing>;

    fn insert_post(&self, post: SocialPost) -> DomainResult<()>;

    fn posts(&self) -> Vec<SocialPost>;

    fn insert_notification(&self, notification: Notification) -> DomainResult<()>;

    fn notifications(&self) -> Vec<Notification>;

    /// Store a conversation together with its message thread.
    fn insert_conversation(
        &self,
        conversation: Conversation,
        messages: Vec<DirectMessage>,
    ) -> DomainResult<()>;

    fn conversations(&self) -> Vec<Conversation>;

    /// Messages of one conversation; empty when it is unknown.
    fn messages(&self, conversation_id: &ConversationId) -> Vec<DirectMessage>;
}
