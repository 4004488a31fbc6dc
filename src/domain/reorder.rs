//! Translation of drag-and-drop gestures into card moves.
//!
//! A drop gesture arrives as a source position plus an optional destination
//! (absent when the drag was cancelled or released outside any list). The
//! resolver collapses the no-op cases and hands everything else to
//! [`Board::move_card`], whose indices are interpreted against the
//! destination sequence after the dragged card has been removed.

use crate::domain::board::Board;
use crate::domain::list::ListId;
use crate::error::Result;

/// A position within the board: a list plus an index into its cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub list_id: ListId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(list_id: impl Into<ListId>, index: usize) -> Self {
        Self {
            list_id: list_id.into(),
            index,
        }
    }
}

/// The outcome of a drag gesture as reported by the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub source: DragLocation,
    /// Absent when the drop was cancelled or landed outside any list
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// The move this gesture asks for, or `None` when it changes nothing
    /// (no destination, or dropped back onto its own position)
    pub fn card_move(&self) -> Option<CardMove> {
        let destination = self.destination.as_ref()?;
        if *destination == self.source {
            return None;
        }
        Some(CardMove {
            source_list: self.source.list_id.clone(),
            source_index: self.source.index,
            dest_list: destination.list_id.clone(),
            dest_index: destination.index,
        })
    }
}

/// Parameters of a single card relocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMove {
    pub source_list: ListId,
    pub source_index: usize,
    pub dest_list: ListId,
    pub dest_index: usize,
}

/// Applies a drag gesture to the board.
///
/// No-op gestures return a board value-equal to the input; invalid
/// positions fail with the board untouched.
pub fn resolve_drag(board: &Board, drag: &DragEnd) -> Result<Board> {
    match drag.card_move() {
        None => Ok(board.clone()),
        Some(mv) => board.move_card(&mv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardDraft;

    fn two_list_board() -> Board {
        let board = Board::new("Test Board")
            .add_list("L1")
            .unwrap()
            .add_list("L2")
            .unwrap();
        let l1 = board.lists[0].id.clone();
        board
            .add_card(&l1, &CardDraft::new("A"))
            .unwrap()
            .add_card(&l1, &CardDraft::new("B"))
            .unwrap()
    }

    #[test]
    fn test_cancelled_drop_is_noop() {
        let board = two_list_board();
        let l1 = board.lists[0].id.clone();

        let drag = DragEnd::new(DragLocation::new(l1, 0), None);
        assert!(drag.card_move().is_none());
        assert_eq!(resolve_drag(&board, &drag).unwrap(), board);
    }

    #[test]
    fn test_drop_on_own_position_is_noop() {
        let board = two_list_board();
        let l1 = board.lists[0].id.clone();

        let drag = DragEnd::new(
            DragLocation::new(l1.clone(), 1),
            Some(DragLocation::new(l1, 1)),
        );
        assert!(drag.card_move().is_none());
        assert_eq!(resolve_drag(&board, &drag).unwrap(), board);
    }

    #[test]
    fn test_cross_list_drop_moves_the_card() {
        let board = two_list_board();
        let l1 = board.lists[0].id.clone();
        let l2 = board.lists[1].id.clone();

        let drag = DragEnd::new(
            DragLocation::new(l1, 0),
            Some(DragLocation::new(l2, 0)),
        );
        let next = resolve_drag(&board, &drag).unwrap();
        assert_eq!(next.lists[0].cards.len(), 1);
        assert_eq!(next.lists[0].cards[0].title, "B");
        assert_eq!(next.lists[1].cards[0].title, "A");
    }

    #[test]
    fn test_stale_drop_index_fails_and_board_survives() {
        let board = two_list_board();
        let l1 = board.lists[0].id.clone();
        let snapshot = board.clone();

        // The list shrank between drag start and drop
        let drag = DragEnd::new(
            DragLocation::new(l1.clone(), 5),
            Some(DragLocation::new(l1, 0)),
        );
        assert!(resolve_drag(&board, &drag).is_err());
        assert_eq!(board, snapshot);
    }
}
