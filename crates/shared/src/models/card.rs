use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Identified, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Card {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Identified for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<NewCard> for Card {
    fn from(new_card: NewCard) -> Self {
        Card::new(new_card.title, new_card.content)
    }
}

/// Body of `POST /card` as sent by the client. Both fields are optional at
/// the wire level so a missing field is reported as a validation error
/// rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct CardRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A card request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub title: String,
    pub content: String,
}

impl CardRequest {
    pub fn validate(self) -> Result<NewCard, ValidationError> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(ValidationError::MissingField("title")),
        };
        let content = match self.content {
            Some(content) if !content.is_empty() => content,
            _ => return Err(ValidationError::MissingField("content")),
        };
        Ok(NewCard { title, content })
    }
}
