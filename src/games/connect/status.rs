//! Status vocabularies reported by the game engine.

use super::action::PlayerId;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle state of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Moves are still being accepted.
    InProgress,
    /// Won, drawn, or abandoned down to one player.
    Done,
}

/// Outcome class of a move attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveStatus {
    /// The piece was placed.
    Ok,
    /// Bad column, full column, or the game is over.
    BadRequest,
    /// The player is not (or no longer) in this game.
    WrongGame,
    /// Another player is due to move.
    WrongTurn,
}

/// Outcome of a quit attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum QuitStatus {
    /// The player never joined this game.
    InvalidGame,
    /// The player had already quit.
    QuitLeftGame,
    /// The game is already over.
    GameOver,
    /// The player left. The game may have ended as a result.
    LeftGame,
}

/// Snapshot of a game for status queries.
///
/// `players` lists only the players still active, in join order.
/// `winner` is only reported once the game is done, and is absent for a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// Active players in join order.
    pub players: Vec<PlayerId>,
    /// Lifecycle state.
    pub state: GameState,
    /// Winner, when the game is done and was not drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_done(&self) -> bool {
        self.state == GameState::Done
    }
}

/// Reference to an accepted move, in the form `<game id>/moves/<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveConfirmation {
    /// Path of the recorded move.
    #[serde(rename = "move")]
    pub move_path: String,
}

impl MoveConfirmation {
    /// Builds the confirmation for move number `index` of `game_id`.
    pub fn new(game_id: &str, index: usize) -> Self {
        Self {
            move_path: format!("{}/moves/{}", game_id, index),
        }
    }
}
