//! Ledger entries for connect-N games.
//!
//! Every accepted drop and every quit is recorded as a [`Move`], in the
//! order it happened. The ledger doubles as the source of turn order.

use super::board::Coord;
use serde::{Deserialize, Serialize};

/// Identifier of a player, chosen by whoever creates the game.
pub type PlayerId = String;

/// Kind of ledger entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveKind {
    /// A piece was dropped.
    Move,
    /// A player left the game.
    Quit,
}

/// A single ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// `player` dropped a piece that came to rest at `coord`.
    Drop {
        /// The player who moved.
        player: PlayerId,
        /// Where the piece landed.
        coord: Coord,
    },
    /// `player` quit.
    Quit {
        /// The player who quit.
        player: PlayerId,
    },
}

impl Move {
    /// Returns the kind of entry.
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Drop { .. } => MoveKind::Move,
            Move::Quit { .. } => MoveKind::Quit,
        }
    }

    /// Returns the player who made this entry.
    pub fn player(&self) -> &str {
        match self {
            Move::Drop { player, .. } | Move::Quit { player } => player,
        }
    }

    /// Returns where the piece landed, for drops.
    pub fn coord(&self) -> Option<Coord> {
        match self {
            Move::Drop { coord, .. } => Some(*coord),
            Move::Quit { .. } => None,
        }
    }

    /// Returns the column played, for drops.
    pub fn column(&self) -> Option<usize> {
        self.coord().map(|c| c.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Drop { player, coord } => write!(f, "{} -> {}", player, coord),
            Move::Quit { player } => write!(f, "{} quit", player),
        }
    }
}
