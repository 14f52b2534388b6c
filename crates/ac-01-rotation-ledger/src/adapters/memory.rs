use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::{CircleId, DomainError, DomainResult, EntityKind};

use crate::domain::Circle;
use crate::ports::outbound::CircleRepository;

#[derive(Default)]
struct Inner {
    circles: HashMap<CircleId, Circle>,
    order: Vec<CircleId>,
}

/// In-memory circle store.
///
/// A single write lock serialises every mutation, which keeps the seat and
/// payment invariants intact if several sessions share the store.
#[derive(Default)]
pub struct InMemoryCircleRepository {
    inner: RwLock<Inner>,
}

impl InMemoryCircleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CircleRepository for InMemoryCircleRepository {
    fn insert(&self, circle: Circle) -> DomainResult<()> {
        let mut inner = self.inner.write();
        if inner.circles.contains_key(&circle.id) {
            return Err(DomainError::precondition(format!(
                "circle {} already exists",
                circle.id
            )));
        }
        inner.order.push(circle.id.clone());
        inner.circles.insert(circle.id.clone(), circle);
        Ok(())
    }

    fn get(&self, id: &CircleId) -> Option<Circle> {
        self.inner.read().circles.get(id).cloned()
    }

    fn list(&self) -> Vec<Circle> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.circles.get(id).cloned())
            .collect()
    }

    fn update<T, F>(&self, id: &CircleId, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Circle) -> DomainResult<T>,
    {
        let mut inner = self.inner.write();
        let stored = inner
            .circles
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Circle, id))?;
        let mut working = stored.clone();
        let result = f(&mut working)?;
        *stored = working;
        Ok(result)
    }
}
