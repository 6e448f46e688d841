use crate::error::AddListError;
use crate::store::core::MemoryStore;
use crate::store::domains::card_store::CardStore;
use crate::store::domains::list_store::ListStore;
use shared::models::{Card, List};
use std::sync::Arc;

pub struct StoreContext {
    pub card_store: Arc<CardStore>,
    pub list_store: Arc<ListStore>,
}

impl StoreContext {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            card_store: Arc::new(CardStore::new(store.clone())),
            list_store: Arc::new(ListStore::new(store.clone())),
        }
    }

    /// Inserts one card and a list referencing it, for trying the API by hand.
    pub fn seed_demo(&self) -> Result<(Card, List), AddListError> {
        let card = Card::new("Task One", "This is card one");
        self.card_store.add_card(card.clone())?;

        let list = List::new("List One", vec![card.id.clone()]);
        self.list_store.add_list(list.clone())?;
        Ok((card, list))
    }
}
