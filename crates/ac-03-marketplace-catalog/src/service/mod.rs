//! # Marketplace Catalog Service
//!
//! Read-only query surface over a [`CatalogRepository`].


use serde::{Deserialize, Serialize};
use shared_types::{ConversationId, DomainResult, ListingId, UserId};

use crate::domain::{
    Conversation, DirectMessage, Listing, ListingCategory, ListingFunding, Notification,
    SocialPost,
};
use crate::ports::inbound::MarketplaceCatalogApi;
use crate::ports::outbound::CatalogRepository;

/// Marketplace Catalog configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Upper bound on search hits returned to the presentation layer.
    pub max_search_results: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_search_results: 50,
        }
    }
}

pub struct MarketplaceCatalogService<R: CatalogRepository> {
    repository: R,
    config: CatalogConfig,
}

impl<R: CatalogRepository> MarketplaceCatalogService<R> {
    pub fn new(repository: R, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Validate and load a listing (mock dataset loading).
    pub fn import_listing(&self, listing: Listing) -> DomainResult<()> {
        listing.validate().inspect_err(|err| {
            tracing::warn!("[ac-03] Listing {} rejected: {}", listing.id, err)
        })?;
        tracing::debug!("[ac-03] Importing listing {} ({:?})", listing.id, listing.category);
        self.repository.insert_listing(listing)
    }

    pub fn import_post(&self, post: SocialPost) -> DomainResult<()> {
        self.repository.insert_post(post)
    }

    pub fn import_notification(&self, notification: Notification) -> DomainResult<()> {
        self.repository.insert_notification(notification)
    }

    pub fn import_conversation(
        &self,
        conversation: Conversation,
        messages: Vec<DirectMessage>,
    ) -> DomainResult<()> {
        self.repository.insert_conversation(conversation, messages)
    }

    fn listings_where(&self, predicate: impl Fn(&Listing) -> bool) -> Vec<Listing> {
        self.repository
            .listings()
            .into_iter()
            .filter(|l| predicate(l))
            .collect()
    }
}

impl<R: CatalogRepository> MarketplaceCatalogApi for MarketplaceCatalogService<R> {
    fn get_opportunities(&self) -> Vec<Listing> {
        self.repository.listings()
    }

    fn list_by_category(&self, category: ListingCategory) -> Vec<Listing> {
        self.listings_where(|l| l.category == category)
    }

    fn list_by_owner(&self, owner_id: &UserId) -> Vec<Listing> {
        self.listings_where(|l| l.owned_by(owner_id))
    }

    fn list_by_tag(&self, tag: &str) -> Vec<Listing> {
        self.listings_where(|l| l.has_tag(tag))
    }

    fn get_by_id(&self, id: &ListingId) -> Option<Listing> {
        self.repository.listings().into_iter().find(|l| &l.id == id)
    }

    fn search(&self, query: &str) -> Vec<Listing> {
        let mut hits = self.listings_where(|l| l.matches(query));
        if hits.len() > self.config.max_search_results {
            tracing::debug!(
                "[ac-03] Search '{}' truncated from {} hits",
                query,
                hits.len()
            );
            hits.truncate(self.config.max_search_results);
        }
        hits
    }

    fn funding_progress(&self, id: &ListingId) -> Option<ListingFunding> {
        self.get_by_id(id).and_then(|l| l.funding())
    }

    fn get_posts(&self) -> Vec<SocialPost> {
        self.repository.posts()
    }

    fn get_posts_by_tag(&self, tag: &str) -> Vec<SocialPost> {
        self.repository
            .posts()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }

    fn get_posts_by_user(&self, user_id: &UserId) -> Vec<SocialPost> {
        self.repository
            .posts()
            .into_iter()
            .filter(|p| &p.user_id == user_id)
            .collect()
    }

    fn get_notifications(&self) -> Vec<Notification> {
        self.repository.notifications()
    }

    fn get_unread_count(&self) -> usize {
        self.repository
            .notifications()
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    fn get_conversations(&self) -> Vec<Conversation> {
        self.repository.conversations()
    }

    fn get_messages(&self, conversation_id: &ConversationId) -> Vec<DirectMessage> {
        self.repository.messages(conversation_id)
    }

    fn get_total_unread(&self) -> u32 {
        self.repository
            .conversations()
            .iter()
            .map(|c| c.unread_count)
            .sum()
    }
}
