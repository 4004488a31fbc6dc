use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::card::{Card, CardId};
use crate::error::{Result, TableroError};

/// Unique identifier for a list (e.g. `list-9f86d081-884c-4d63-a1b3-2c8e94f1d5b7`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(String);

impl ListId {
    const PREFIX: &'static str = "list";

    /// Generates a fresh identifier, unique for the lifetime of a board
    pub fn generate() -> Self {
        Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ListId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ListId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A named column of cards; card order is display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub const TITLE_MAX_CHARS: usize = 50;

    /// Builds an empty list with a fresh id
    pub(crate) fn create(title: &str) -> Result<Self> {
        Ok(Self {
            id: ListId::generate(),
            title: validate_list_title(title)?,
            cards: Vec::new(),
        })
    }

    /// Finds a card in this list by id
    pub fn find_card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == card_id)
    }

    pub(crate) fn card_position(&self, card_id: &CardId) -> Result<usize> {
        self.cards
            .iter()
            .position(|card| &card.id == card_id)
            .ok_or_else(|| TableroError::CardNotFound(card_id.to_string()))
    }
}

pub(crate) fn validate_list_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TableroError::EmptyField {
            field: "list title",
        });
    }
    if title.chars().count() > List::TITLE_MAX_CHARS {
        return Err(TableroError::FieldTooLong {
            field: "list title",
            max: List::TITLE_MAX_CHARS,
        });
    }
    Ok(title.to_string())
}
