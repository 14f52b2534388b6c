//! Driving Ports (API - Inbound)
//!
//! Pure queries. Nothing here fails: unknown ids yield `None` or an empty list.

use shared_types::{ConversationId, ListingId, UserId};

use crate::domain::{
    Conversation, DirectMessage, Listing, ListingCategory, ListingFunding, Notification,
    SocialPost,
};

/// Primary Marketplace Catalog API.
pub trait MarketplaceCatalogApi: Send + Sync {
    /// Every opportunity card.
    fn get_opportunities(&self) -> Vec<Listing>;

    fn list_by_category(&self, category: ListingCategory) -> Vec<Listing>;

    fn list_by_owner(&self, owner_id: &UserId) -> Vec<Listing>;

    fn list_by_tag(&self, tag: &str) -> Vec<Listing>;

    fn get_by_id(&self, id: &ListingId) -> Option<Listing>;

    /// Case-insensitive substring match over title and description.
    fn search(&self, query: &str) -> Vec<Listing>;

    /// `None` for unknown or non-cause listings.
    fn funding_progress(&self, id: &ListingId) -> Option<ListingFunding>;

    fn get_posts(&self) -> Vec<SocialPost>;

    fn get_posts_by_tag(&self, tag: &str) -> Vec<SocialPost>;

    fn get_posts_by_user(&self, user_id: &UserId) -> Vec<SocialPost>;

    fn get_notifications(&self) -> Vec<Notification>;

    fn get_unread_count(&self) -> usize;

    fn get_conversations(&self) -> Vec<Conversation>;

    fn get_messages(&self, conversation_id: &ConversationId) -> Vec<DirectMessage>;

    /// Sum of unread counts across conversations.
    fn get_total_unread(&self) -> u32;
}
