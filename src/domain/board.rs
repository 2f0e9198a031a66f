use crate::{
    domain::{
        card::{Card, CardId},
        column::{BoardConfig, Column, ColumnId},
        sorting,
    },
    error::Result,
    id::{IdProvider, UuidIdProvider},
};
use tracing::{debug, warn};

/// Kanban board state: the fixed columns plus every card on the board.
///
/// The board is the sole writer of card data. Structural mutations rebuild
/// the card collection wholesale (partition, splice, reindex), so between
/// events every read sees a complete snapshot in which each column's ranks
/// form a contiguous 0..n-1 sequence.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    cards: Vec<Card>,
    ids: Box<dyn IdProvider>,
}

impl Board {
    /// Creates an empty board
    pub fn new(config: BoardConfig, ids: Box<dyn IdProvider>) -> Result<Self> {
        Self::with_cards(config, Vec::new(), ids)
    }

    /// Creates a board over an existing card collection.
    ///
    /// Ranks in `cards` are taken as-is; an inconsistent collection is
    /// normalized by the next mutation's reindex pass.
    pub fn with_cards(
        config: BoardConfig,
        cards: Vec<Card>,
        ids: Box<dyn IdProvider>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, cards, ids })
    }

    /// The fixed starter board every process begins from.
    ///
    /// Seed card ids are `card-1` through `card-8`; pair this with
    /// [`crate::id::SequentialIdProvider::starting_at`] at 9 or higher when
    /// deterministic ids must not collide with the seed set.
    pub fn seeded(ids: Box<dyn IdProvider>) -> Self {
        Self {
            config: BoardConfig::default(),
            cards: seed_cards(),
            ids,
        }
    }

    /// Board configuration (the fixed column set)
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Columns in board order
    pub fn columns(&self) -> &[Column] {
        &self.config.columns
    }

    /// Every card on the board, in no particular order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks up a card by id
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// One column's cards, sorted by rank
    pub fn cards_in(&self, column: ColumnId) -> Vec<&Card> {
        sorting::column_cards(&self.cards, column)
    }

    /// Number of cards in one column
    pub fn column_count(&self, column: ColumnId) -> usize {
        self.cards.iter().filter(|card| card.column == column).count()
    }

    /// Adds a new card at the end of `column` and returns its id.
    ///
    /// The card gets a fresh id from the injected provider and the default
    /// title. Always succeeds; the column set is closed.
    pub fn add_card(&mut self, column: ColumnId) -> CardId {
        let id = self.ids.next_id();
        let mut partitions = sorting::partition_cards(&self.config, &self.cards);
        if let Some((_, group)) = partitions.iter_mut().find(|(col, _)| *col == column) {
            let order = group.len() as u32;
            group.push(Card::new(
                id.clone(),
                Card::DEFAULT_TITLE.to_string(),
                column,
                order,
            ));
        }
        self.cards = sorting::reindex_partitions(partitions);
        debug!(card = %id, column = %column, "card added");
        id
    }

    /// Replaces a card's title verbatim. Unknown ids are ignored.
    ///
    /// The store does no trimming; the edit flow decides what is worth
    /// committing before calling this.
    pub fn rename_card(&mut self, id: &CardId, title: String) {
        match self.cards.iter_mut().find(|card| &card.id == id) {
            Some(card) => {
                card.set_title(title);
                debug!(card = %id, "card renamed");
            }
            None => warn!(card = %id, "rename ignored, card not on board"),
        }
    }

    /// Removes a card from the board. Unknown ids are ignored.
    ///
    /// The affected column is reindexed so the removed rank leaves no gap.
    pub fn delete_card(&mut self, id: &CardId) {
        if self.card(id).is_none() {
            warn!(card = %id, "delete ignored, card not on board");
            return;
        }
        let survivors: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| &card.id != id)
            .cloned()
            .collect();
        let partitions = sorting::partition_cards(&self.config, &survivors);
        self.cards = sorting::reindex_partitions(partitions);
        debug!(card = %id, "card deleted");
    }

    /// Moves a card to `target`, inserting at `index`. Unknown ids are
    /// ignored.
    ///
    /// The index is clamped to the target column's bounds after the card
    /// has been removed from its current position; a negative index lands
    /// at the front, an oversized one at the back. Every column is
    /// reindexed afterwards, which also repairs any pre-existing gaps or
    /// duplicate ranks.
    pub fn move_card(&mut self, id: &CardId, target: ColumnId, index: isize) {
        let mut moved = match self.card(id) {
            Some(card) => card.clone(),
            None => {
                warn!(card = %id, "move ignored, card not on board");
                return;
            }
        };
        let remaining: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| &card.id != id)
            .cloned()
            .collect();
        let mut partitions = sorting::partition_cards(&self.config, &remaining);
        if let Some((_, group)) = partitions.iter_mut().find(|(col, _)| *col == target) {
            let slot = index.clamp(0, group.len() as isize) as usize;
            moved.column = target;
            moved.touch();
            group.insert(slot, moved);
        }
        self.cards = sorting::reindex_partitions(partitions);
        debug!(card = %id, column = %target, index, "card moved");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seeded(Box::new(UuidIdProvider))
    }
}

/// The fixed seed set shown on every fresh board
fn seed_cards() -> Vec<Card> {
    let seeds = [
        ("card-1", "Create initial project plan", ColumnId::Todo, 0),
        ("card-2", "Design landing page", ColumnId::Todo, 1),
        ("card-3", "Review codebase structure", ColumnId::Todo, 2),
        ("card-4", "Implement authentication", ColumnId::InProgress, 0),
        ("card-5", "Set up database schema", ColumnId::InProgress, 1),
        ("card-6", "Fix navbar bugs", ColumnId::InProgress, 2),
        ("card-7", "Organize project repository", ColumnId::Done, 0),
        ("card-8", "Write API documentation", ColumnId::Done, 1),
    ];
    seeds
        .into_iter()
        .map(|(id, title, column, order)| {
            Card::new(CardId::new(id.to_string()), title.to_string(), column, order)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdProvider;

    fn seeded_board() -> Board {
        Board::seeded(Box::new(SequentialIdProvider::starting_at(9)))
    }

    fn empty_board() -> Board {
        Board::new(BoardConfig::default(), Box::new(SequentialIdProvider::new())).unwrap()
    }

    fn card_id(value: &str) -> CardId {
        CardId::new(value.to_string())
    }

    fn column_ids(board: &Board, column: ColumnId) -> Vec<String> {
        board
            .cards_in(column)
            .iter()
            .map(|card| card.id.as_str().to_string())
            .collect()
    }

    fn assert_contiguous(board: &Board) {
        for column in ColumnId::ALL {
            let orders: Vec<u32> = board.cards_in(column).iter().map(|c| c.order).collect();
            let expected: Vec<u32> = (0..orders.len() as u32).collect();
            assert_eq!(orders, expected, "ranks not contiguous in {}", column);
        }
    }

    #[test]
    fn test_seeded_board_layout() {
        let board = seeded_board();

        assert_eq!(board.column_count(ColumnId::Todo), 3);
        assert_eq!(board.column_count(ColumnId::InProgress), 3);
        assert_eq!(board.column_count(ColumnId::Done), 2);

        let todo = board.cards_in(ColumnId::Todo);
        assert_eq!(todo[0].title, "Create initial project plan");
        assert_eq!(todo[2].title, "Review codebase structure");
        assert_contiguous(&board);
    }

    #[test]
    fn test_default_board_is_seeded() {
        let board = Board::default();

        assert_eq!(board.cards().len(), 8);
        assert_contiguous(&board);
    }

    #[test]
    fn test_new_rejects_duplicate_columns() {
        let mut config = BoardConfig::default();
        let extra = config.columns[0].clone();
        config.columns.push(extra);

        let result = Board::new(config, Box::new(SequentialIdProvider::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_missing_columns() {
        let mut config = BoardConfig::default();
        config.columns.retain(|col| col.id != ColumnId::InProgress);

        let result = Board::new(config, Box::new(SequentialIdProvider::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_add_card_appends_at_end() {
        let mut board = seeded_board();

        let id = board.add_card(ColumnId::Todo);

        assert_eq!(board.column_count(ColumnId::Todo), 4);
        let added = board.card(&id).unwrap();
        assert_eq!(added.order, 3);
        assert_eq!(added.title, Card::DEFAULT_TITLE);
        assert_contiguous(&board);
    }

    #[test]
    fn test_add_card_uses_injected_id_provider() {
        let mut board = empty_board();

        let id = board.add_card(ColumnId::Done);

        assert_eq!(id.as_str(), "card-1");
        assert_eq!(board.add_card(ColumnId::Done).as_str(), "card-2");
    }

    #[test]
    fn test_add_card_on_empty_column() {
        let mut board = empty_board();

        let id = board.add_card(ColumnId::Todo);

        assert_eq!(board.cards().len(), 1);
        let added = board.card(&id).unwrap();
        assert_eq!(added.order, 0);
        assert_eq!(added.title, "New card");
    }

    #[test]
    fn test_add_card_leaves_other_columns_untouched() {
        let mut board = seeded_board();
        let in_progress_before = column_ids(&board, ColumnId::InProgress);
        let done_before = column_ids(&board, ColumnId::Done);

        board.add_card(ColumnId::Todo);

        assert_eq!(column_ids(&board, ColumnId::InProgress), in_progress_before);
        assert_eq!(column_ids(&board, ColumnId::Done), done_before);
    }

    #[test]
    fn test_rename_card_is_verbatim() {
        let mut board = seeded_board();

        board.rename_card(&card_id("card-1"), "  spaced out  ".to_string());

        assert_eq!(board.card(&card_id("card-1")).unwrap().title, "  spaced out  ");
    }

    #[test]
    fn test_rename_unknown_card_is_ignored() {
        let mut board = seeded_board();
        let before = board.cards().to_vec();

        board.rename_card(&card_id("card-99"), "Ghost".to_string());

        assert_eq!(board.cards(), &before[..]);
    }

    #[test]
    fn test_delete_middle_card_reindexes_column() {
        let mut board = seeded_board();

        board.delete_card(&card_id("card-2"));

        assert_eq!(
            column_ids(&board, ColumnId::Todo),
            vec!["card-1".to_string(), "card-3".to_string()]
        );
        let todo = board.cards_in(ColumnId::Todo);
        assert_eq!(todo[0].order, 0);
        assert_eq!(todo[1].order, 1);
        assert_contiguous(&board);
    }

    #[test]
    fn test_delete_unknown_card_leaves_cards_unchanged() {
        let mut board = seeded_board();
        let before = board.cards().to_vec();

        board.delete_card(&card_id("card-99"));

        assert_eq!(board.cards(), &before[..]);
    }

    #[test]
    fn test_move_card_across_columns() {
        let config = BoardConfig::default();
        let cards = vec![
            Card::new(card_id("a"), "A".to_string(), ColumnId::Todo, 0),
            Card::new(card_id("b"), "B".to_string(), ColumnId::Todo, 1),
        ];
        let mut board =
            Board::with_cards(config, cards, Box::new(SequentialIdProvider::new())).unwrap();

        board.move_card(&card_id("a"), ColumnId::Done, 0);

        assert_eq!(column_ids(&board, ColumnId::Todo), vec!["b".to_string()]);
        assert_eq!(column_ids(&board, ColumnId::Done), vec!["a".to_string()]);
        assert_eq!(board.cards_in(ColumnId::Todo)[0].order, 0);
        assert_eq!(board.cards_in(ColumnId::Done)[0].order, 0);
        assert_contiguous(&board);
    }

    #[test]
    fn test_move_card_within_column() {
        let mut board = seeded_board();

        board.move_card(&card_id("card-1"), ColumnId::Todo, 2);

        assert_eq!(
            column_ids(&board, ColumnId::Todo),
            vec![
                "card-2".to_string(),
                "card-3".to_string(),
                "card-1".to_string()
            ]
        );
        assert_contiguous(&board);
    }

    #[test]
    fn test_move_clamps_oversized_index_to_end() {
        let mut board = seeded_board();

        board.move_card(&card_id("card-1"), ColumnId::Done, 50);

        let done = column_ids(&board, ColumnId::Done);
        assert_eq!(done.last().unwrap(), "card-1");
        assert_eq!(board.column_count(ColumnId::Done), 3);
        assert_contiguous(&board);
    }

    #[test]
    fn test_move_clamps_negative_index_to_front() {
        let mut board = seeded_board();

        board.move_card(&card_id("card-8"), ColumnId::Todo, -5);

        assert_eq!(column_ids(&board, ColumnId::Todo)[0], "card-8");
        assert_contiguous(&board);
    }

    #[test]
    fn test_move_to_same_position_keeps_order() {
        let mut board = seeded_board();
        let todo_before = column_ids(&board, ColumnId::Todo);

        board.move_card(&card_id("card-1"), ColumnId::Todo, 0);

        assert_eq!(column_ids(&board, ColumnId::Todo), todo_before);
        assert_contiguous(&board);
    }

    #[test]
    fn test_move_unknown_card_is_ignored() {
        let mut board = seeded_board();
        let before = board.cards().to_vec();

        board.move_card(&card_id("card-99"), ColumnId::Done, 0);

        assert_eq!(board.cards(), &before[..]);
    }

    #[test]
    fn test_mutation_repairs_inconsistent_ranks() {
        let config = BoardConfig::default();
        let cards = vec![
            Card::new(card_id("a"), "A".to_string(), ColumnId::Todo, 0),
            Card::new(card_id("b"), "B".to_string(), ColumnId::Todo, 0),
            Card::new(card_id("c"), "C".to_string(), ColumnId::Todo, 5),
        ];
        let mut board =
            Board::with_cards(config, cards, Box::new(SequentialIdProvider::new())).unwrap();

        board.add_card(ColumnId::Done);

        assert_contiguous(&board);
    }

    #[test]
    fn test_operation_sequences_keep_ranks_contiguous() {
        let mut board = seeded_board();

        let new_id = board.add_card(ColumnId::Todo);
        assert_contiguous(&board);

        board.move_card(&new_id, ColumnId::InProgress, 1);
        assert_contiguous(&board);

        board.delete_card(&card_id("card-5"));
        assert_contiguous(&board);

        board.move_card(&card_id("card-7"), ColumnId::Todo, -3);
        assert_contiguous(&board);

        board.move_card(&card_id("card-4"), ColumnId::Done, 99);
        assert_contiguous(&board);

        board.delete_card(&new_id);
        assert_contiguous(&board);

        board.add_card(ColumnId::Done);
        assert_contiguous(&board);
    }
}
