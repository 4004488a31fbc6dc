pub mod board;
pub mod card;
pub mod list;
pub mod reorder;
pub mod search;

pub use board::Board;
pub use card::{Card, CardDraft, CardId, CardPatch};
pub use list::{List, ListId};
pub use reorder::{resolve_drag, CardMove, DragEnd, DragLocation};
pub use search::{board_stats, search_board, BoardStats, MatchField, SearchHit};
