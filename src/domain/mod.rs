pub mod board;
pub mod card;
pub mod column;
pub mod sorting;

pub use board::Board;
pub use card::{Card, CardId};
pub use column::{BoardConfig, Column, ColumnId};
pub use sorting::{column_cards, partition_cards, reindex_partitions, sort_by_order};
