use crate::domain::{board::Board, card::CardId, column::ColumnId};
use tracing::debug;

/// What the pointer is over when a drag completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped on another card
    Card(CardId),
    /// Dropped on a column's own surface
    Column(ColumnId),
}

/// A fully resolved move, ready to hand to [`Board::move_card`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub card: CardId,
    pub column: ColumnId,
    pub index: usize,
}

impl MoveRequest {
    /// Applies the move against the board
    pub fn apply(self, board: &mut Board) {
        board.move_card(&self.card, self.column, self.index as isize);
    }
}

/// Tracks the card being dragged, if any.
///
/// Two phases: idle and dragging. While dragging, views read the active
/// card id to render a floating duplicate under the pointer. The session
/// never mutates the board; completing a drag yields a [`MoveRequest`]
/// for the caller to apply.
#[derive(Debug, Default)]
pub struct DragSession {
    active: Option<CardId>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the dragging phase for `card`
    pub fn begin(&mut self, card: CardId) {
        debug!(card = %card, "drag started");
        self.active = Some(card);
    }

    /// The card under the pointer while dragging
    pub fn active_card(&self) -> Option<&CardId> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Abandons the drag without touching the board
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Leaves the dragging phase and resolves the drop.
    ///
    /// Returns `None` when the interaction is abandoned: no drag was in
    /// progress, nothing is under the pointer, or the card was dropped
    /// on itself.
    pub fn complete(&mut self, board: &Board, over: Option<&DropTarget>) -> Option<MoveRequest> {
        let source = self.active.take()?;
        resolve_drop(board, &source, over)
    }
}

/// Resolves a finished drag into a move request.
///
/// The destination column is the column of whichever card sits under the
/// drop point, falling back to the source card's own column when the
/// target card is no longer on the board. The destination index is the
/// target card's position within that column's sorted list, or the end of
/// the list when the drop point maps to no card. A missing target, a drop
/// onto the source itself, or a source id no longer on the board abandons
/// the interaction.
pub fn resolve_drop(
    board: &Board,
    source: &CardId,
    over: Option<&DropTarget>,
) -> Option<MoveRequest> {
    let over = over?;
    if matches!(over, DropTarget::Card(id) if id == source) {
        return None;
    }
    let source_card = board.card(source)?;

    let (column, index) = match over {
        DropTarget::Card(target) => match board.card(target) {
            Some(card) => {
                let column = card.column;
                let cards = board.cards_in(column);
                let index = cards
                    .iter()
                    .position(|c| &c.id == target)
                    .unwrap_or(cards.len());
                (column, index)
            }
            None => {
                let column = source_card.column;
                (column, board.column_count(column))
            }
        },
        DropTarget::Column(column) => (*column, board.column_count(*column)),
    };

    Some(MoveRequest {
        card: source.clone(),
        column,
        index,
    })
}
