use crate::error::StoreError;
use shared::models::{Card, Identified, List};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Insertion-ordered records looked up by id.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> Collection<T> {
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Panics if `index` is out of bounds, like `Vec::remove`.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }
}

impl<T: Clone> Collection<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

#[derive(Debug, Default)]
pub struct Collections {
    pub cards: Collection<Card>,
    pub lists: Collection<List>,
}

/// Process-local backing store. Both collections sit behind one lock so a
/// card removal and the matching list cleanup are observed together.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.collections.read().map_err(|_| StoreError::Poisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.collections.write().map_err(|_| StoreError::Poisoned)
    }
}
