//! # Error Types
//!
//! The failure taxonomy every domain command returns. Domain operations never
//! panic across the presentation boundary; they return [`DomainResult`].

use std::fmt;

use thiserror::Error;

use crate::entities::Amount;
use crate::ids::UserId;

/// Kind of entity an id failed to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Circle,
    JoinRequest,
    Member,
    Vault,
    VaultFamily,
    Milestone,
    Contributor,
    Listing,
    Conversation,
    CartLine,
    LearnModule,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Circle => "Circle",
            EntityKind::JoinRequest => "Join request",
            EntityKind::Member => "Member",
            EntityKind::Vault => "Vault",
            EntityKind::VaultFamily => "Vault family",
            EntityKind::Milestone => "Milestone",
            EntityKind::Contributor => "Contributor",
            EntityKind::Listing => "Listing",
            EntityKind::Conversation => "Conversation",
            EntityKind::CartLine => "Cart line",
            EntityKind::LearnModule => "Learn module",
        };
        f.write_str(name)
    }
}

/// Domain command failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Entity id did not resolve.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// Seat limit reached.
    #[error("Circle is full: all {capacity} seats are taken")]
    CircleFull { capacity: usize },

    /// Contribution already posted for the current month.
    #[error("Member {member} already paid for month {month}")]
    AlreadyPaid { member: UserId, month: u8 },

    /// Contributor already cast a ballot this round.
    #[error("{contributor} has already voted this round")]
    DuplicateVote { contributor: UserId },

    /// Non-positive or mismatched monetary input.
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount { amount: Amount, reason: String },

    /// Command issued in a state that does not allow it.
    #[error("Precondition failed: {reason}")]
    PreconditionFailed { reason: String },
}

impl DomainError {
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_amount(amount: Amount, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            amount,
            reason: reason.into(),
        }
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionFailed {
            reason: reason.into(),
        }
    }

    /// Short stable code for the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "not_found",
            DomainError::CircleFull { .. } => "circle_full",
            DomainError::AlreadyPaid { .. } => "already_paid",
            DomainError::DuplicateVote { .. } => "duplicate_vote",
            DomainError::InvalidAmount { .. } => "invalid_amount",
            DomainError::PreconditionFailed { .. } => "precondition_failed",
        }
    }
}

/// Result type for domain commands.
pub type DomainResult<T> = Result<T, DomainError>;
