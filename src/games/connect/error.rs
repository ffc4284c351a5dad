//! Errors raised by game operations.

use super::status::MoveStatus;

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The column lies outside the board.
    #[display("Column {} is outside the board (0..{})", column, columns)]
    ColumnOutOfRange {
        /// Requested column.
        column: usize,
        /// Number of columns on the board.
        columns: usize,
    },

    /// The player is unknown to this game or has quit.
    #[display("Player {} is not playing this game", _0)]
    NotPlaying(String),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// Someone else is due to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(String),

    /// The column has no empty cell left.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Classifies the refusal into the move status vocabulary.
    pub fn status(&self) -> MoveStatus {
        match self {
            MoveError::ColumnOutOfRange { .. } | MoveError::GameOver | MoveError::ColumnFull(_) => {
                MoveStatus::BadRequest
            }
            MoveError::NotPlaying(_) => MoveStatus::WrongGame,
            MoveError::WrongTurn(_) => MoveStatus::WrongTurn,
        }
    }
}

/// Errors from move-history queries.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// No move exists at the index.
    #[display("invalid index {} (game has {} moves)", index, len)]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of recorded moves.
        len: usize,
    },

    /// The range starts past its end.
    #[display("range start {} is past the end {}", start, end)]
    RangeOutOfBounds {
        /// Requested start.
        start: usize,
        /// Exclusive end after clamping.
        end: usize,
    },
}
