//! The session holding the live board document and its save status.
//!
//! Mutations are applied synchronously under the session lock; the only
//! asynchronous work is the save/load round-trip to the storage capability.
//! A save snapshots the document and its version before writing, so edits
//! made while the write is in flight are never reported as persisted: the
//! session only returns to `Clean` when the version at save start still
//! matches the version at completion.

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::board::Board;
use crate::domain::card::{CardDraft, CardId, CardPatch};
use crate::domain::list::ListId;
use crate::domain::reorder::{CardMove, DragEnd};
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Fixed storage key the board document lives under
pub const BOARD_STORAGE_KEY: &str = "tablero-board-data";

/// Persistence status of the session's document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// Every edit is reflected in durable storage
    Clean,
    /// The document has edits storage has not seen
    Dirty,
    /// A save is in flight; edits are still allowed
    Saving,
}

#[derive(Debug)]
struct SessionState {
    board: Board,
    version: u64,
    status: SaveStatus,
    last_saved: Option<DateTime<Utc>>,
}

/// Bridges the board document to a [`KeyValueStore`] and tracks whether
/// in-memory edits have reached durable storage
pub struct BoardSession<S> {
    storage: S,
    key: String,
    seed: Board,
    state: Mutex<SessionState>,
}

impl<S: KeyValueStore> BoardSession<S> {
    /// Starts a session from the document stored under `key`.
    ///
    /// An absent, unreadable, or malformed stored document falls back to
    /// the seed; the session starts `Clean` either way.
    pub async fn load(storage: S, key: impl Into<String>, seed: Board) -> Self {
        let key = key.into();
        let board = match storage.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Board>(&raw) {
                Ok(board) => {
                    debug!(key = %key, "loaded board from storage");
                    board
                }
                Err(error) => {
                    warn!(key = %key, %error, "stored board is malformed, using seed");
                    seed.clone()
                }
            },
            Ok(None) => {
                debug!(key = %key, "no stored board, using seed");
                seed.clone()
            }
            Err(error) => {
                warn!(key = %key, %error, "storage read failed, using seed");
                seed.clone()
            }
        };

        Self {
            storage,
            key,
            seed,
            state: Mutex::new(SessionState {
                board,
                version: 0,
                status: SaveStatus::Clean,
                last_saved: None,
            }),
        }
    }

    /// A snapshot of the current document
    pub async fn board(&self) -> Board {
        self.state.lock().await.board.clone()
    }

    pub async fn status(&self) -> SaveStatus {
        self.state.lock().await.status
    }

    /// When the last successful save completed
    pub async fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.state.lock().await.last_saved
    }

    async fn apply<F>(&self, mutate: F) -> Result<Board>
    where
        F: FnOnce(&Board) -> Result<Board>,
    {
        let mut state = self.state.lock().await;
        let next = mutate(&state.board)?;
        state.board = next.clone();
        state.version += 1;
        state.status = SaveStatus::Dirty;
        Ok(next)
    }

    pub async fn add_list(&self, title: &str) -> Result<Board> {
        self.apply(|board| board.add_list(title)).await
    }

    pub async fn edit_list(&self, list_id: &ListId, new_title: &str) -> Result<Board> {
        self.apply(|board| board.edit_list(list_id, new_title)).await
    }

    pub async fn delete_list(&self, list_id: &ListId) -> Result<Board> {
        self.apply(|board| board.delete_list(list_id)).await
    }

    pub async fn add_card(&self, list_id: &ListId, draft: &CardDraft) -> Result<Board> {
        self.apply(|board| board.add_card(list_id, draft)).await
    }

    pub async fn edit_card(
        &self,
        list_id: &ListId,
        card_id: &CardId,
        patch: &CardPatch,
    ) -> Result<Board> {
        self.apply(|board| board.edit_card(list_id, card_id, patch))
            .await
    }

    pub async fn delete_card(&self, list_id: &ListId, card_id: &CardId) -> Result<Board> {
        self.apply(|board| board.delete_card(list_id, card_id)).await
    }

    /// Applies a card move; a same-position move leaves the session clean
    pub async fn move_card(&self, mv: &CardMove) -> Result<Board> {
        if mv.source_list == mv.dest_list && mv.source_index == mv.dest_index {
            return Ok(self.board().await);
        }
        self.apply(|board| board.move_card(mv)).await
    }

    /// Applies a drag gesture; cancelled or same-position drops leave the
    /// document and the save status untouched
    pub async fn drag_end(&self, drag: &DragEnd) -> Result<Board> {
        match drag.card_move() {
            None => Ok(self.board().await),
            Some(mv) => self.move_card(&mv).await,
        }
    }

    /// Replaces the whole document (the import path), marking it unsaved
    pub async fn replace_board(&self, board: Board) -> Board {
        let mut state = self.state.lock().await;
        state.board = board.clone();
        state.version += 1;
        state.status = SaveStatus::Dirty;
        board
    }

    /// Persists the current document under the session key.
    ///
    /// Edits are not blocked while the write is in flight; if any land
    /// before it settles, the status stays `Dirty` because storage holds a
    /// stale snapshot. A failed write also leaves the status `Dirty` and
    /// surfaces the error so the caller can retry or alert.
    pub async fn save(&self) -> Result<()> {
        let (payload, version_at_start) = {
            let mut state = self.state.lock().await;
            let payload = serde_json::to_string(&state.board)?;
            state.status = SaveStatus::Saving;
            (payload, state.version)
        };

        let result = self.storage.set(&self.key, &payload).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(()) => {
                if state.version == version_at_start {
                    state.status = SaveStatus::Clean;
                    state.last_saved = Some(Utc::now());
                    debug!(key = %self.key, version = version_at_start, "board saved");
                } else {
                    // The document moved on while the write was in flight;
                    // storage holds the older snapshot.
                    state.status = SaveStatus::Dirty;
                    debug!(
                        key = %self.key,
                        saved_version = version_at_start,
                        current_version = state.version,
                        "board changed during save, still dirty"
                    );
                }
                Ok(())
            }
            Err(error) => {
                state.status = SaveStatus::Dirty;
                warn!(key = %self.key, %error, "save failed");
                Err(error)
            }
        }
    }

    /// Discards all unsaved edits and restores the seed document
    pub async fn reset(&self) -> Board {
        let mut state = self.state.lock().await;
        state.board = self.seed.clone();
        state.version += 1;
        state.status = SaveStatus::Clean;
        debug!(key = %self.key, "board reset to seed");
        state.board.clone()
    }
}
