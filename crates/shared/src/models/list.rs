use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Identified, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub header: String,
    pub card_ids: Vec<String>,
}

impl List {
    pub fn new(header: impl Into<String>, card_ids: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            header: header.into(),
            card_ids,
        }
    }

    /// Drops every reference to `card_id`, keeping the order of the rest.
    pub fn remove_card(&mut self, card_id: &str) {
        self.card_ids.retain(|id| id != card_id);
    }
}

impl Identified for List {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<NewList> for List {
    fn from(new_list: NewList) -> Self {
        List::new(new_list.header, new_list.card_ids)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub card_ids: Option<Vec<String>>,
}

/// A list request with a header present. Card references are checked
/// against the store separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub header: String,
    pub card_ids: Vec<String>,
}

impl ListRequest {
    pub fn validate(self) -> Result<NewList, ValidationError> {
        let header = match self.header {
            Some(header) if !header.is_empty() => header,
            _ => return Err(ValidationError::MissingField("header")),
        };
        Ok(NewList {
            header,
            card_ids: self.card_ids.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedList {
    pub id: String,
}
