use crate::error::StoreError;
use crate::store::core::MemoryStore;
use log::debug;
use shared::models::Card;
use std::sync::Arc;

pub struct CardStore {
    store: Arc<MemoryStore>,
}

impl CardStore {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn get_cards(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.store.read()?.cards.to_vec())
    }

    pub fn get_card(&self, id: &str) -> Result<Option<Card>, StoreError> {
        Ok(self.store.read()?.cards.find(id).cloned())
    }

    pub fn add_card(&self, card: Card) -> Result<(), StoreError> {
        self.store.write()?.cards.append(card);
        Ok(())
    }

    /// Removes the card and every reference to it from the lists. Returns
    /// `None` without touching anything when the id is unknown.
    pub fn delete_card(&self, id: &str) -> Result<Option<Card>, StoreError> {
        let mut collections = self.store.write()?;
        let Some(index) = collections.cards.position(id) else {
            return Ok(None);
        };

        for list in collections.lists.iter_mut() {
            list.remove_card(id);
        }
        let card = collections.cards.remove_at(index);
        debug!("Removed card {id} and its list references");
        Ok(Some(card))
    }
}
