//! Gravity-drop connect-N: board, occupancy graphs, and the game state machine.

mod action;
mod board;
mod error;
mod game;
mod graph;
mod status;

pub use action::{Move, MoveKind, PlayerId};
pub use board::{Board, Coord, Seat};
pub use error::{HistoryError, MoveError};
pub use game::{Game, GameId};
pub use graph::{LineFamily, PlayerGraph};
pub use status::{GameState, GameStatus, MoveConfirmation, MoveStatus, QuitStatus};
