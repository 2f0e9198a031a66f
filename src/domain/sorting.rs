use crate::domain::card::Card;
use crate::domain::column::{BoardConfig, ColumnId};

/// Sorts cards by their rank within a column, ascending.
///
/// The sort is stable, so cards that share an order value keep their
/// relative position in the input. Calling code must not rely on the
/// relative order of such duplicates; reindexing resolves them.
pub fn sort_by_order(cards: &mut [Card]) {
    cards.sort_by_key(|card| card.order);
}

/// Returns one column's cards as references, sorted by rank
pub fn column_cards<'a>(cards: &'a [Card], column: ColumnId) -> Vec<&'a Card> {
    let mut selected: Vec<&Card> = cards.iter().filter(|card| card.column == column).collect();
    selected.sort_by_key(|card| card.order);
    selected
}

/// Partitions cards by column in configuration order, each partition
/// sorted by rank
pub fn partition_cards(config: &BoardConfig, cards: &[Card]) -> Vec<(ColumnId, Vec<Card>)> {
    config
        .columns
        .iter()
        .map(|column| {
            let mut group: Vec<Card> = cards
                .iter()
                .filter(|card| card.column == column.id)
                .cloned()
                .collect();
            sort_by_order(&mut group);
            (column.id, group)
        })
        .collect()
}

/// Rewrites every partition's ranks to the contiguous sequence 0..n-1 and
/// flattens the partitions back into a single collection.
///
/// Running this after each structural change keeps every column gap-free
/// and duplicate-free regardless of the input state.
///
/// # Examples
/// ```
/// use tavle_core::domain::card::{Card, CardId};
/// use tavle_core::domain::column::{BoardConfig, ColumnId};
/// use tavle_core::domain::sorting::{partition_cards, reindex_partitions};
///
/// let config = BoardConfig::default();
/// let cards = vec![
///     Card::new(CardId::new("card-2".to_string()), "B".to_string(), ColumnId::Todo, 7),
///     Card::new(CardId::new("card-1".to_string()), "A".to_string(), ColumnId::Todo, 3),
/// ];
///
/// let cards = reindex_partitions(partition_cards(&config, &cards));
/// assert_eq!(cards[0].id.as_str(), "card-1");
/// assert_eq!(cards[0].order, 0);
/// assert_eq!(cards[1].order, 1);
/// ```
pub fn reindex_partitions(partitions: Vec<(ColumnId, Vec<Card>)>) -> Vec<Card> {
    partitions
        .into_iter()
        .flat_map(|(column, group)| {
            group.into_iter().enumerate().map(move |(index, mut card)| {
                card.column = column;
                card.order = index as u32;
                card
            })
        })
        .collect()
}
