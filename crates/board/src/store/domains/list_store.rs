use crate::error::{AddListError, StoreError};
use crate::store::core::MemoryStore;
use shared::models::List;
use std::sync::Arc;

pub struct ListStore {
    store: Arc<MemoryStore>,
}

impl ListStore {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn get_lists(&self) -> Result<Vec<List>, StoreError> {
        Ok(self.store.read()?.lists.to_vec())
    }

    pub fn get_list(&self, id: &str) -> Result<Option<List>, StoreError> {
        Ok(self.store.read()?.lists.find(id).cloned())
    }

    /// Stores the list if every referenced card exists. The check and the
    /// insert happen under the same write lock, so a concurrent card
    /// deletion cannot leave a dangling reference behind.
    pub fn add_list(&self, list: List) -> Result<(), AddListError> {
        let mut collections = self.store.write()?;
        let unknown: Vec<String> = list
            .card_ids
            .iter()
            .filter(|id| !collections.cards.contains(id))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(AddListError::UnknownCards(unknown));
        }

        collections.lists.append(list);
        Ok(())
    }

    pub fn delete_list(&self, id: &str) -> Result<Option<List>, StoreError> {
        let mut collections = self.store.write()?;
        Ok(collections
            .lists
            .position(id)
            .map(|index| collections.lists.remove_at(index)))
    }
}
