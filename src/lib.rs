//! # Tablero Core
//!
//! Core board state, drag reordering, and persistence logic for Tablero
//! task boards.
//!
//! This crate provides the fundamental types and operations for managing
//! a board of lists and cards without any dependency on specific UI
//! implementations or storage backends. Mutations are pure: each takes a
//! board value and returns a new one, so the session can snapshot any
//! version for saving while edits continue.

pub mod domain;
pub mod error;
pub mod export;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::Board,
    card::{Card, CardDraft, CardId, CardPatch},
    list::{List, ListId},
    reorder::{resolve_drag, CardMove, DragEnd, DragLocation},
};
pub use error::{Result, TableroError};
pub use session::{BoardSession, SaveStatus, BOARD_STORAGE_KEY};
pub use storage::KeyValueStore;
