use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::{ConversationId, DomainError, DomainResult, EntityKind};

use crate::domain::{Conversation, DirectMessage, Listing, Notification, SocialPost};
use crate::ports::outbound::CatalogRepository;

#[derive(Default)]
struct Inner {
    listings: Vec<Listing>,
    posts: Vec<SocialPost>,
    notifications: Vec<Notification>,
    conversations: Vec<Conversation>,
    threads: HashMap<ConversationId, Vec<DirectMessage>>,
}

/// In-memory catalog content, kept in load order.
#[derive(Default)]
pub struct InMemoryCatalog {
    inner: RwLock<Inner>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate(kind: &str, id: impl std::fmt::Display) -> DomainError {
    DomainError::precondition(format!("{} {} already exists", kind, id))
}

impl CatalogRepository for InMemoryCatalog {
    fn insert_listing(&self, listing: Listing) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if inner.listings.iter().any(|l| l.id == listing.id) {
            return Err(duplicate("listing", &listing.id));
        }
        inner.listings.push(listing);
        Ok(())
    }

    fn listings(&self) -> Vec<Listing> {
        self.inner.read().listings.clone()
    }

    fn insert_post(&self, post: SocialPost) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if inner.posts.iter().any(|p| p.id == post.id) {
            return Err(duplicate("post", &post.id));
        }
        inner.posts.push(post);
        Ok(())
    }

    fn posts(&self) -> Vec<SocialPost> {
        self.inner.read().posts.clone()
    }

    fn insert_notification(&self, notification: Notification) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if inner.notifications.iter().any(|n| n.id == notification.id) {
            return Err(duplicate("notification", &notification.id));
        }
        inner.notifications.push(notification);
        Ok(())
    }

    fn notifications(&self) -> Vec<Notification> {
        self.inner.read().notifications.clone()
    }

    fn insert_conversation(
        &self,
        conversation: Conversation,
        messages: Vec<DirectMessage>,
    ) -> DomainResult<()> {
        if let Some(stray) = messages
            .iter()
            .find(|m| m.conversation_id != conversation.id)
        {
            return Err(DomainError::not_found(
                EntityKind::Conversation,
                &stray.conversation_id,
            ));
        }
        let mut inner = self.inner.write();
        if inner.threads.contains_key(&conversation.id) {
            return Err(duplicate("conversation", &conversation.id));
        }
        inner.threads.insert(conversation.id.clone(), messages);
        inner.conversations.push(conversation);
        Ok(())
    }

    fn conversations(&self) -> Vec<Conversation> {
        self.inner.read().conversations.clone()
    }

    fn messages(&self, conversation_id: &ConversationId) -> Vec<DirectMessage> {
        self.inner
            .read()
            .threads
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }
}
