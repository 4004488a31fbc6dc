use std::collections::HashMap;

use crate::domain::board::Board;
use crate::domain::card::CardId;
use crate::domain::list::ListId;

/// Which field of the board a search query matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    ListTitle,
    CardTitle,
    CardDescription,
}

/// A single search result pointing back into the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    List {
        list_id: ListId,
        title: String,
    },
    Card {
        list_id: ListId,
        card_id: CardId,
        title: String,
        matched: MatchField,
    },
}

/// Searches list titles, card titles, and card descriptions for a
/// case-insensitive substring match. A blank query matches nothing.
/// A card is reported once, preferring its title match over its description.
pub fn search_board(board: &Board, query: &str) -> Vec<SearchHit> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for list in &board.lists {
        if list.title.to_lowercase().contains(&term) {
            hits.push(SearchHit::List {
                list_id: list.id.clone(),
                title: list.title.clone(),
            });
        }

        for card in &list.cards {
            let matched = if card.title.to_lowercase().contains(&term) {
                Some(MatchField::CardTitle)
            } else if card.description.to_lowercase().contains(&term) {
                Some(MatchField::CardDescription)
            } else {
                None
            };

            if let Some(matched) = matched {
                hits.push(SearchHit::Card {
                    list_id: list.id.clone(),
                    card_id: card.id.clone(),
                    title: card.title.clone(),
                    matched,
                });
            }
        }
    }

    hits
}

/// Summary counts for the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStats {
    pub lists: usize,
    pub cards: usize,
    pub cards_per_list: HashMap<ListId, usize>,
}

pub fn board_stats(board: &Board) -> BoardStats {
    let mut cards_per_list = HashMap::new();
    let mut cards = 0;

    for list in &board.lists {
        cards += list.cards.len();
        cards_per_list.insert(list.id.clone(), list.cards.len());
    }

    BoardStats {
        lists: board.lists.len(),
        cards,
        cards_per_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardDraft;

    fn sample_board() -> Board {
        let board = Board::new("Test Board")
            .add_list("Authentication")
            .unwrap()
            .add_list("Done")
            .unwrap();
        let auth = board.lists[0].id.clone();
        let done = board.lists[1].id.clone();
        board
            .add_card(
                &auth,
                &CardDraft::new("Login form").with_description("Password reset flow"),
            )
            .unwrap()
            .add_card(&done, &CardDraft::new("Setup repo"))
            .unwrap()
    }

    #[test]
    fn test_search_matches_list_title() {
        let board = sample_board();
        let hits = search_board(&board, "authent");
        assert_eq!(hits.len(), 1);
        assert!(matches!(&hits[0], SearchHit::List { title, .. } if title == "Authentication"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let board = sample_board();
        assert_eq!(search_board(&board, "LOGIN").len(), 1);
        assert_eq!(search_board(&board, "login").len(), 1);
        assert_eq!(search_board(&board, "LoGiN").len(), 1);
    }

    #[test]
    fn test_search_prefers_title_over_description() {
        let board = sample_board();

        let hits = search_board(&board, "password");
        assert_eq!(hits.len(), 1);
        assert!(matches!(
            &hits[0],
            SearchHit::Card {
                matched: MatchField::CardDescription,
                ..
            }
        ));

        let hits = search_board(&board, "form");
        assert!(matches!(
            &hits[0],
            SearchHit::Card {
                matched: MatchField::CardTitle,
                ..
            }
        ));
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let board = sample_board();
        assert!(search_board(&board, "").is_empty());
        assert!(search_board(&board, "   ").is_empty());
    }

    #[test]
    fn test_search_no_matches() {
        let board = sample_board();
        assert!(search_board(&board, "nonexistent").is_empty());
    }

    #[test]
    fn test_board_stats_counts() {
        let board = sample_board();
        let stats = board_stats(&board);

        assert_eq!(stats.lists, 2);
        assert_eq!(stats.cards, 2);
        assert_eq!(stats.cards_per_list[&board.lists[0].id], 1);
        assert_eq!(stats.cards_per_list[&board.lists[1].id], 1);
    }
}
