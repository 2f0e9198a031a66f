use crate::error::{Result, TavleError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier for one of the fixed board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// Every column, in board order
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// Returns the stable identifier token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = TavleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(TavleError::UnknownColumn(s.to_string())),
        }
    }
}

/// Display configuration for a single board column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub accent: String,
}

impl Column {
    pub fn new(id: ColumnId, title: String, accent: String) -> Self {
        Self { id, title, accent }
    }
}

/// Board configuration
///
/// Columns are static configuration, created once and never changed at
/// runtime; only their titles and accent colors vary between boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: Vec<Column>,
}

impl BoardConfig {
    /// Checks the column set is usable: every column present exactly once
    pub fn validate(&self) -> Result<()> {
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.id == column.id) {
                return Err(TavleError::ConfigError(format!(
                    "duplicate column: {}",
                    column.id
                )));
            }
        }
        for id in ColumnId::ALL {
            if self.column(id).is_none() {
                return Err(TavleError::ConfigError(format!("missing column: {}", id)));
            }
        }
        Ok(())
    }

    /// Gets the configuration for a column
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                Column::new(ColumnId::Todo, "Todo".to_string(), "#1e88e5".to_string()),
                Column::new(
                    ColumnId::InProgress,
                    "In Progress".to_string(),
                    "#fb8c00".to_string(),
                ),
                Column::new(ColumnId::Done, "Done".to_string(), "#43a047".to_string()),
            ],
        }
    }
}
