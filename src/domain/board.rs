use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardDraft, CardId, CardPatch};
use crate::domain::list::{validate_list_title, List, ListId};
use crate::domain::reorder::CardMove;
use crate::error::{Result, TableroError};

/// The board document: a titled, ordered collection of lists.
///
/// Every mutation takes `&self` and returns a new `Board`; the input value
/// is never touched, on success or failure. The previous version stays
/// valid, which is what lets a save snapshot one version while the session
/// keeps editing the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lists: Vec::new(),
        }
    }

    /// The seed document for a fresh session
    pub fn starter() -> Self {
        let mut board = Self::new("Project Tasks");
        for title in ["To Do", "In Progress", "Done"] {
            board.lists.push(List {
                id: ListId::generate(),
                title: title.to_string(),
                cards: Vec::new(),
            });
        }
        board
    }

    /// Finds a list by id
    pub fn find_list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|list| &list.id == list_id)
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    fn list_position(&self, list_id: &ListId) -> Result<usize> {
        self.lists
            .iter()
            .position(|list| &list.id == list_id)
            .ok_or_else(|| TableroError::ListNotFound(list_id.to_string()))
    }

    /// Appends a new empty list with a generated id
    pub fn add_list(&self, title: &str) -> Result<Board> {
        let list = List::create(title)?;
        let mut next = self.clone();
        next.lists.push(list);
        Ok(next)
    }

    /// Replaces a list's title, leaving its cards and position untouched
    pub fn edit_list(&self, list_id: &ListId, new_title: &str) -> Result<Board> {
        let position = self.list_position(list_id)?;
        let title = validate_list_title(new_title)?;
        let mut next = self.clone();
        next.lists[position].title = title;
        Ok(next)
    }

    /// Removes a list and all of its cards
    pub fn delete_list(&self, list_id: &ListId) -> Result<Board> {
        let position = self.list_position(list_id)?;
        let mut next = self.clone();
        next.lists.remove(position);
        Ok(next)
    }

    /// Appends a new card with a generated id to the end of a list
    pub fn add_card(&self, list_id: &ListId, draft: &CardDraft) -> Result<Board> {
        let position = self.list_position(list_id)?;
        let card = Card::create(draft)?;
        let mut next = self.clone();
        next.lists[position].cards.push(card);
        Ok(next)
    }

    /// Merges the patch's provided fields into an existing card
    pub fn edit_card(
        &self,
        list_id: &ListId,
        card_id: &CardId,
        patch: &CardPatch,
    ) -> Result<Board> {
        let list_pos = self.list_position(list_id)?;
        let card_pos = self.lists[list_pos].card_position(card_id)?;
        let card = self.lists[list_pos].cards[card_pos].patched(patch)?;
        let mut next = self.clone();
        next.lists[list_pos].cards[card_pos] = card;
        Ok(next)
    }

    /// Removes a card from its list, preserving the order of the rest
    pub fn delete_card(&self, list_id: &ListId, card_id: &CardId) -> Result<Board> {
        let list_pos = self.list_position(list_id)?;
        let card_pos = self.lists[list_pos].card_position(card_id)?;
        let mut next = self.clone();
        next.lists[list_pos].cards.remove(card_pos);
        Ok(next)
    }

    /// Relocates a card between positions, possibly across lists.
    ///
    /// Indices follow the drag-and-drop contract: `dest_index` addresses the
    /// destination sequence as it exists after the card has been removed
    /// from its source, so a same-list forward move lands where the drop
    /// gesture pointed. `dest_index == len` appends.
    pub fn move_card(&self, mv: &CardMove) -> Result<Board> {
        if mv.source_list == mv.dest_list && mv.source_index == mv.dest_index {
            return Ok(self.clone());
        }

        let source_pos = self.list_position(&mv.source_list)?;
        let dest_pos = self.list_position(&mv.dest_list)?;

        let source_len = self.lists[source_pos].cards.len();
        if mv.source_index >= source_len {
            return Err(TableroError::IndexOutOfRange {
                index: mv.source_index,
                len: source_len,
            });
        }
        let dest_len = if source_pos == dest_pos {
            source_len - 1
        } else {
            self.lists[dest_pos].cards.len()
        };
        if mv.dest_index > dest_len {
            return Err(TableroError::IndexOutOfRange {
                index: mv.dest_index,
                len: dest_len,
            });
        }

        let mut next = self.clone();
        let card = next.lists[source_pos].cards.remove(mv.source_index);
        next.lists[dest_pos].cards.insert(mv.dest_index, card);
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new("Untitled Board")
    }
}
