//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::{CircleId, DomainResult};

use crate::domain::Circle;

/// Circle storage.
///
/// Production: none yet (the client holds everything in memory).
/// Testing and runtime: `InMemoryCircleRepository`.
pub trait CircleRepository: Send + Sync {
    /// Store a new circle. Fails if the id is taken.
    fn insert(&self, circle: Circle) -> DomainResult<()>;

    /// Snapshot of a circle.
    fn get(&self, id: &CircleId) -> Option<Circle>;

    /// Snapshots of all circles in insertion order.
    fn list(&self) -> Vec<Circle>;

    /// Apply `f` to a circle atomically.
    ///
    /// ## Atomicity Guarantee
    ///
    /// `f` runs against a working copy while the store is locked. The copy
    /// replaces the stored circle only if `f` returns `Ok`; on `Err` the stored
    /// circle is untouched.
    fn update<T, F>(&self, id: &CircleId, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Circle) -> DomainResult<T>;
}
