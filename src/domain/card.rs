use crate::domain::column::ColumnId;
use crate::error::{Result, TavleError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a card, stable across the card's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = TavleError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            Err(TavleError::InvalidCardId(s.to_string()))
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column: ColumnId,
    /// Zero-based rank within the owning column, contiguous per column
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Title given to newly added cards
    pub const DEFAULT_TITLE: &'static str = "New card";

    /// Creates a card at the given rank within `column`
    pub fn new(id: CardId, title: String, column: ColumnId, order: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            column,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the title verbatim; trimming is the edit flow's concern
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
