use crate::domain::{board::Board, card::CardId};

/// Result of leaving the editing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The trimmed buffer replaces the card title
    Committed(String),
    /// The edit is discarded and the displayed value reverts
    Reverted,
}

/// One in-flight inline edit of a card title.
///
/// A view in the display state holds no `TitleEdit`; an activation
/// gesture creates one seeded with the current title. Input replaces the
/// buffer, and `confirm`/`cancel` end the session with an
/// [`EditOutcome`]. Focus loss counts as confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEdit {
    original: String,
    buffer: String,
}

impl TitleEdit {
    /// Enters the editing state, seeding the buffer with the current title
    pub fn begin(current: &str) -> Self {
        Self {
            original: current.to_string(),
            buffer: current.to_string(),
        }
    }

    /// The text currently in the edit field
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// The title the edit started from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Replaces the buffer with the field's current text
    pub fn input(&mut self, value: &str) {
        self.buffer = value.to_string();
    }

    /// Ends the edit on a confirmation gesture or focus loss.
    ///
    /// The trimmed buffer is committed only when it is non-empty and
    /// differs from the original title; anything else reverts.
    pub fn confirm(self) -> EditOutcome {
        let trimmed = self.buffer.trim();
        if !trimmed.is_empty() && trimmed != self.original {
            EditOutcome::Committed(trimmed.to_string())
        } else {
            EditOutcome::Reverted
        }
    }

    /// Ends the edit on a cancellation gesture; never commits
    pub fn cancel(self) -> EditOutcome {
        EditOutcome::Reverted
    }

    /// Confirms the edit and forwards a commit to the store's rename
    pub fn commit_to(self, board: &mut Board, card: &CardId) -> EditOutcome {
        let outcome = self.confirm();
        if let EditOutcome::Committed(title) = &outcome {
            board.rename_card(card, title.clone());
        }
        outcome
    }
}
