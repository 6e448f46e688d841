pub mod card;
pub mod list;

use thiserror::Error;

pub use card::{Card, CardRequest, NewCard};
pub use list::{CreatedList, List, ListRequest, NewList};

/// Records addressed by a generated string id.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}
