//! Board document interchange: JSON export/import and a flattened CSV form.

use serde_json::Value;

use crate::domain::board::Board;
use crate::error::{Result, TableroError};

/// Serializes the board to the pretty-printed persistence format
pub fn to_json(board: &Board) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

/// Flattens the board to one CSV row per (list, card) pair.
///
/// Columns are `List,Card,Description`, each quote-wrapped with embedded
/// quotes doubled. Lists without cards contribute no rows.
pub fn to_csv(board: &Board) -> String {
    let mut csv = String::from("List,Card,Description\n");
    for list in &board.lists {
        for card in &list.cards {
            csv.push_str(&format!(
                "{},{},{}\n",
                csv_field(&list.title),
                csv_field(&card.title),
                csv_field(&card.description)
            ));
        }
    }
    csv
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Parses a board document from JSON.
///
/// The top-level value must carry a `lists` array; anything else is
/// rejected as malformed. Deeper validation is left to deserialization
/// itself (absent card descriptions default to empty).
pub fn from_json(data: &str) -> Result<Board> {
    let value: Value = serde_json::from_str(data)
        .map_err(|err| TableroError::MalformedDocument(err.to_string()))?;

    if !value.get("lists").map(Value::is_array).unwrap_or(false) {
        return Err(TableroError::MalformedDocument(
            "missing lists array".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|err| TableroError::MalformedDocument(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardDraft;

    fn sample_board() -> Board {
        let board = Board::new("Export Me").add_list("Todo").unwrap();
        let list_id = board.lists[0].id.clone();
        board
            .add_card(
                &list_id,
                &CardDraft::new("Say \"hi\"").with_description("greeting, politely"),
            )
            .unwrap()
    }

    #[test]
    fn test_json_round_trip() {
        let board = sample_board();
        let json = to_json(&board).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_csv_escapes_quotes_and_commas() {
        let board = sample_board();
        let csv = to_csv(&board);

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("List,Card,Description"));
        assert_eq!(
            lines.next(),
            Some(r#""Todo","Say ""hi""","greeting, politely""#)
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_empty_board_is_header_only() {
        let csv = to_csv(&Board::new("Empty"));
        assert_eq!(csv, "List,Card,Description\n");
    }

    #[test]
    fn test_import_rejects_missing_lists() {
        let err = from_json(r#"{"title": "No lists"}"#).unwrap_err();
        assert!(matches!(err, TableroError::MalformedDocument(_)));

        let err = from_json(r#"{"title": "Bad", "lists": "nope"}"#).unwrap_err();
        assert!(matches!(err, TableroError::MalformedDocument(_)));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let err = from_json("{not json").unwrap_err();
        assert!(matches!(err, TableroError::MalformedDocument(_)));
    }

    #[test]
    fn test_import_accepts_foreign_ids_and_missing_descriptions() {
        let board = from_json(
            r#"{
                "title": "Imported",
                "lists": [
                    {"id": "list-1", "title": "Todo", "cards": [
                        {"id": "card-1", "title": "Task"}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(board.lists[0].id.as_str(), "list-1");
        assert_eq!(board.lists[0].cards[0].description, "");
    }
}
