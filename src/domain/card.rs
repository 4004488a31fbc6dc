use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{Result, TableroError};

/// Unique identifier for a card (e.g. `card-67e55044-10b1-426f-9247-bb680e5fe0c8`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    const PREFIX: &'static str = "card";

    /// Generates a fresh identifier, unique for the lifetime of a board
    pub fn generate() -> Self {
        Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Imported documents may carry foreign id schemes, so ids stay opaque
// strings rather than enforcing the generated format.
impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A unit of work on the board, owned by exactly one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Card {
    pub const TITLE_MAX_CHARS: usize = 100;
    pub const DESCRIPTION_MAX_CHARS: usize = 500;

    /// Builds a card from a draft, generating a fresh id
    pub(crate) fn create(draft: &CardDraft) -> Result<Self> {
        let title = validate_card_title(&draft.title)?;
        let description =
            validate_card_description(draft.description.as_deref().unwrap_or_default())?;

        Ok(Self {
            id: CardId::generate(),
            title,
            description,
        })
    }

    /// Returns a copy with the patch's provided fields merged in;
    /// id stays untouched
    pub(crate) fn patched(&self, patch: &CardPatch) -> Result<Self> {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = validate_card_title(title)?;
        }
        if let Some(description) = &patch.description {
            next.description = validate_card_description(description)?;
        }
        Ok(next)
    }
}

/// Input for creating a card
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    pub title: String,
    pub description: Option<String>,
}

impl CardDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for an existing card; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CardPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn validate_card_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TableroError::EmptyField {
            field: "card title",
        });
    }
    if title.chars().count() > Card::TITLE_MAX_CHARS {
        return Err(TableroError::FieldTooLong {
            field: "card title",
            max: Card::TITLE_MAX_CHARS,
        });
    }
    Ok(title.to_string())
}

fn validate_card_description(raw: &str) -> Result<String> {
    if raw.chars().count() > Card::DESCRIPTION_MAX_CHARS {
        return Err(TableroError::FieldTooLong {
            field: "card description",
            max: Card::DESCRIPTION_MAX_CHARS,
        });
    }
    Ok(raw.to_string())
}
