//! Storefront listings and opportunity cards.
//!
//! A listing carries either a price or a funding goal, never both:
//!
//! | Category | Pricing |
//! |----------|---------|
//! | `business`, `service` | `Fixed` (or `Unpriced` for contact-only offers) |
//! | `cause` | `Funding` |
//! | `external` | `Unpriced`, with an external url |

use serde::{Deserialize, Serialize};
use shared_types::{capped_ratio, Amount, DomainError, DomainResult, ListingId, UserId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingCategory {
    Business,
    Service,
    Cause,
    External,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Service,
    Product,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingBacker {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    pub amount: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Pricing {
    Fixed {
        price: Amount,
    },
    Funding {
        goal: Amount,
        raised: Amount,
        #[serde(default)]
        backers: Vec<FundingBacker>,
    },
    Unpriced,
}

/// Bookable slot of a service listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub date: String,
    pub time: String,
    pub available: bool,
}

/// Selectable product dimension ("Size": S, M, L).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingOwner {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
}

/// Funding state of a cause listing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingFunding {
    pub raised: Amount,
    pub goal: Amount,
    pub ratio: f64,
    pub backers: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub category: ListingCategory,
    pub kind: Option<ListingKind>,
    pub pricing: Pricing,
    pub image: String,
    pub external_url: Option<String>,
    pub tags: Vec<String>,
    pub owner: Option<ListingOwner>,
    pub support_count: u32,
    pub contact_enabled: bool,
    pub organizer_note: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub available_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub inventory: Option<u32>,
    pub delivery_info: Option<String>,
}

impl Listing {
    /// Check the category/pricing pairing.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::precondition(format!(
                "listing {} has no title",
                self.id
            )));
        }
        match (&self.category, &self.pricing) {
            (ListingCategory::Cause, Pricing::Funding { goal, .. }) => {
                if *goal == 0 {
                    return Err(DomainError::invalid_amount(*goal, "funding goal must be positive"));
                }
            }
            (ListingCategory::Cause, _) => {
                return Err(DomainError::precondition(
                    "cause listings are funded, not priced",
                ))
            }
            (_, Pricing::Funding { .. }) => {
                return Err(DomainError::precondition(format!(
                    "{:?} listings cannot carry a funding goal",
                    self.category
                )))
            }
            (ListingCategory::External, Pricing::Fixed { .. }) => {
                return Err(DomainError::precondition("external listings are not priced"))
            }
            (ListingCategory::External, Pricing::Unpriced) if self.external_url.is_none() => {
                return Err(DomainError::precondition("external listings need a url"))
            }
            _ => {}
        }
        Ok(())
    }

    pub fn price(&self) -> Option<Amount> {
        match self.pricing {
            Pricing::Fixed { price } => Some(price),
            _ => None,
        }
    }

    pub fn funding(&self) -> Option<ListingFunding> {
        match &self.pricing {
            Pricing::Funding {
                goal,
                raised,
                backers,
            } => Some(ListingFunding {
                raised: *raised,
                goal: *goal,
                ratio: capped_ratio(*raised, *goal),
                backers: backers.len(),
            }),
            _ => None,
        }
    }

    pub fn owned_by(&self, user_id: &UserId) -> bool {
        self.owner.as_ref().is_some_and(|o| &o.id == user_id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag.trim()))
    }

    /// Case-insensitive substring match over title and description.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    pub fn variant(&self, name: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn open_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.available_slots.iter().filter(|s| s.available)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn listing(id: &str, category: ListingCategory, pricing: Pricing) -> Listing {
        Listing {
            id: ListingId::from(id),
            title: format!("Listing {}", id),
            description: "Handmade in the neighbourhood".to_string(),
            category,
            kind: None,
            pricing,
            image: String::new(),
            external_url: None,
            tags: vec!["local".to_string()],
            owner: None,
            support_count: 0,
            contact_enabled: true,
            organizer_note: None,
            duration: None,
            available_slots: Vec::new(),
            variants: Vec::new(),
            inventory: None,
            delivery_info: None,
        }
    }

    pub fn priced(id: &str, price: Amount) -> Listing {
        listing(id, ListingCategory::Business, Pricing::Fixed { price })
    }

    pub fn cause(id: &str, goal: Amount, raised: Amount) -> Listing {
        listing(
            id,
            ListingCategory::Cause,
            Pricing::Funding {
                goal,
                raised,
                backers: Vec::new(),
            },
        )
    }
}
