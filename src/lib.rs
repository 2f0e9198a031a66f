//! # Tavle Core
//!
//! Core board state and domain models for Tavle kanban task boards.
//!
//! This crate provides the fundamental types and operations for managing
//! board columns, cards, and card ordering, plus the interaction
//! controllers behind drag-and-drop and inline editing, without any
//! dependency on specific UI frameworks or drag-and-drop libraries.

pub mod domain;
pub mod error;
pub mod id;
pub mod interaction;

// Re-export commonly used types
pub use domain::{
    board::Board,
    card::{Card, CardId},
    column::{BoardConfig, Column, ColumnId},
};
pub use error::{Result, TavleError};
pub use id::{IdProvider, SequentialIdProvider, UuidIdProvider};
pub use interaction::{
    drag::{DragSession, DropTarget, MoveRequest},
    edit::{EditOutcome, TitleEdit},
};
