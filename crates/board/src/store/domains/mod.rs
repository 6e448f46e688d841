pub(crate) mod card_store;
pub(crate) mod list_store;
