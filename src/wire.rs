//! Request and response shapes exchanged with clients, and their validation.
//!
//! Field names follow the JSON API (`gameId`, `state`, `type`, ...).

use crate::config::GameConfig;
use crate::games::connect::{GameId, Move, MoveKind, PlayerId};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{instrument, warn};

pub use crate::games::connect::{GameStatus as GameStatusResponse, MoveConfirmation};

/// Request to start a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct CreateGameRequest {
    /// Players in turn order.
    pub players: Vec<PlayerId>,
    /// Board height.
    pub rows: usize,
    /// Board width.
    pub columns: usize,
}

/// Id of a freshly created game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    /// The new game's id.
    pub game_id: GameId,
}

/// Request to drop a piece.
///
/// The column is signed so that negative input reaches validation instead
/// of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Target column.
    pub column: i64,
}

/// Ids of every registered game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameList {
    /// Game ids, in no particular order.
    pub games: Vec<GameId>,
}

/// One ledger entry as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Drop or quit.
    #[serde(rename = "type")]
    pub kind: MoveKind,
    /// Who made the entry.
    pub player: PlayerId,
    /// Column played; present for every drop, absent for quits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl From<&Move> for MoveResponse {
    fn from(m: &Move) -> Self {
        Self {
            kind: m.kind(),
            player: m.player().to_string(),
            column: m.column(),
        }
    }
}

/// A run of ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesRangeResponse {
    /// Entries in ledger order.
    pub moves: Vec<MoveResponse>,
}

impl From<&[Move]> for MovesRangeResponse {
    fn from(moves: &[Move]) -> Self {
        Self {
            moves: moves.iter().map(MoveResponse::from).collect(),
        }
    }
}

/// Validated bounds for a move-history query.
///
/// `until` is inclusive; a negative value means "through the last move".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovesRangeRequest {
    /// First index to return.
    pub start: usize,
    /// Last index to return, or negative for the end.
    pub until: isize,
}

impl Default for MovesRangeRequest {
    fn default() -> Self {
        Self {
            start: 0,
            until: -1,
        }
    }
}

/// Why a request was malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{}", message)]
pub struct ValidationError {
    /// What was wrong.
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(%message, "Request failed validation");
        Self { message }
    }
}

impl MovesRangeRequest {
    /// Parses optional `start`/`until` query values.
    ///
    /// Missing values default to `0` and `-1`. A negative start, or a start
    /// past a non-negative `until`, is rejected.
    #[instrument]
    pub fn parse(start: Option<&str>, until: Option<&str>) -> Result<Self, ValidationError> {
        let start = match start {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::new("invalid start conversion"))?,
            None => 0,
        };
        let until = match until {
            Some(raw) => raw
                .trim()
                .parse::<isize>()
                .map_err(|_| ValidationError::new("invalid until conversion"))?,
            None => -1,
        };

        let start = usize::try_from(start).map_err(|_| ValidationError::new("bad range request"))?;
        if matches!(usize::try_from(until), Ok(until) if start > until) {
            return Err(ValidationError::new("bad range request"));
        }

        Ok(Self { start, until })
    }
}

/// Parses a move number from a path segment.
#[instrument]
pub fn parse_move_index(raw: &str) -> Result<usize, ValidationError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ValidationError::new("unable to parse move number"))
}

/// Converts a requested column to a board index.
#[instrument]
pub fn validate_column(request: MoveRequest) -> Result<usize, ValidationError> {
    usize::try_from(request.column).map_err(|_| ValidationError::new("column must not be negative"))
}

/// Checks a create request against the configured game policy.
#[instrument(skip(config))]
pub fn validate_create_game(
    request: &CreateGameRequest,
    config: &GameConfig,
) -> Result<(), ValidationError> {
    if request.players.len() != *config.num_players() {
        return Err(ValidationError::new(format!(
            "num players is not {}",
            config.num_players()
        )));
    }

    if request.rows != *config.rows() || request.columns != *config.columns() {
        return Err(ValidationError::new(format!(
            "expecting {} rows and {} columns, got rows {} cols {}",
            config.rows(),
            config.columns(),
            request.rows,
            request.columns
        )));
    }

    if request.players.iter().any(|p| p.trim().is_empty()) {
        return Err(ValidationError::new("player names must not be empty"));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = request.players.iter().find(|&p| !seen.insert(p)) {
        return Err(ValidationError::new(format!("duplicate player {}", dup)));
    }

    Ok(())
}
