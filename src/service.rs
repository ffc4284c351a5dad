//! Request-level operations over the game registry.
//!
//! [`GameService`] takes wire requests, validates them, runs them against
//! the right [`Game`], and classifies every failure into an [`ErrorKind`]
//! a transport can map onto its own status codes.

use crate::config::GameConfig;
use crate::games::connect::{Game, MoveStatus, QuitStatus};
use crate::id::{IdGenerator, UuidGenerator};
use crate::registry::GameRegistry;
use crate::wire::{
    CreateGameRequest, CreateGameResponse, GameList, GameStatusResponse, MoveConfirmation,
    MoveRequest, MoveResponse, MovesRangeRequest, MovesRangeResponse, ValidationError,
    parse_move_index, validate_column, validate_create_game,
};
use derive_more::{Display, Error};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Outcome class of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Unknown game, player, or move.
    NotFound,
    /// Malformed or illegal request.
    BadRequest,
    /// Legal request at the wrong moment, or an id collision.
    Conflict,
    /// The game has ended.
    Gone,
}

/// A failed request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}: {}", kind, message)]
pub struct ServiceError {
    /// Outcome class.
    pub kind: ErrorKind,
    /// Human-readable reason.
    pub message: String,
}

impl ServiceError {
    /// Creates a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorKind::BadRequest, err.message)
    }
}

/// Front door for clients: creation, play, and history queries.
pub struct GameService {
    registry: GameRegistry,
    ids: Box<dyn IdGenerator>,
    config: GameConfig,
}

impl std::fmt::Debug for GameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameService")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GameService {
    /// Creates a service that names games with `ids`.
    #[instrument(skip(ids))]
    pub fn new(config: GameConfig, ids: impl IdGenerator + 'static) -> Self {
        info!("Creating game service");
        Self {
            registry: GameRegistry::new(),
            ids: Box::new(ids),
            config,
        }
    }

    /// Creates a service that names games with random UUIDs.
    pub fn with_uuids(config: GameConfig) -> Self {
        Self::new(config, UuidGenerator)
    }

    /// Returns the game policy in force.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    fn game(&self, game_id: &str) -> Result<Arc<Game>, ServiceError> {
        self.registry
            .get(game_id)
            .ok_or_else(|| ServiceError::not_found("game not found"))
    }

    /// Validates the request and starts a new game.
    ///
    /// The win length comes from configuration, not from the request.
    #[instrument(skip(self))]
    pub fn create_game(
        &self,
        request: CreateGameRequest,
    ) -> Result<CreateGameResponse, ServiceError> {
        validate_create_game(&request, &self.config)?;

        let game = Game::new(
            self.ids.next_id(),
            request.rows,
            request.columns,
            *self.config.win_length(),
            request.players,
        );

        let game = self
            .registry
            .add(game)
            .map_err(|e| ServiceError::new(ErrorKind::Conflict, e.to_string()))?;

        info!(game_id = %game.id(), "Game created");
        Ok(CreateGameResponse {
            game_id: game.id().to_string(),
        })
    }

    /// Lists every registered game id.
    #[instrument(skip(self))]
    pub fn list_games(&self) -> GameList {
        GameList {
            games: self.registry.list(),
        }
    }

    /// Reports active players, state, and winner for a game.
    #[instrument(skip(self))]
    pub fn game_status(&self, game_id: &str) -> Result<GameStatusResponse, ServiceError> {
        Ok(self.game(game_id)?.status())
    }

    /// Drops a piece for `player`.
    ///
    /// Bad columns, full columns, moves after the game ended, and players
    /// outside the game are `BadRequest`; moving out of turn is `Conflict`.
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        game_id: &str,
        player: &str,
        request: MoveRequest,
    ) -> Result<MoveConfirmation, ServiceError> {
        let game = self.game(game_id)?;
        let column = validate_column(request)
            .map_err(|_| ServiceError::new(ErrorKind::BadRequest, MoveStatus::BadRequest.to_string()))?;

        game.make_move(player, column).map_err(|e| {
            let status = e.status();
            warn!(%status, reason = %e, "Move rejected");
            let kind = match status {
                MoveStatus::WrongTurn => ErrorKind::Conflict,
                MoveStatus::Ok | MoveStatus::BadRequest | MoveStatus::WrongGame => {
                    ErrorKind::BadRequest
                }
            };
            ServiceError::new(kind, status.to_string())
        })
    }

    /// Removes `player` from a game.
    ///
    /// Returns [`QuitStatus::LeftGame`] on success. Unknown players and
    /// repeat quits are `NotFound`; quitting a finished game is `Gone`.
    #[instrument(skip(self))]
    pub fn quit(&self, game_id: &str, player: &str) -> Result<QuitStatus, ServiceError> {
        let game = self.game(game_id)?;
        match game.quit(player) {
            QuitStatus::LeftGame => Ok(QuitStatus::LeftGame),
            status @ (QuitStatus::InvalidGame | QuitStatus::QuitLeftGame) => {
                Err(ServiceError::not_found(status.to_string()))
            }
            QuitStatus::GameOver => Err(ServiceError::new(
                ErrorKind::Gone,
                QuitStatus::GameOver.to_string(),
            )),
        }
    }

    /// Fetches one ledger entry by its number.
    #[instrument(skip(self))]
    pub fn get_move(&self, game_id: &str, index: &str) -> Result<MoveResponse, ServiceError> {
        let game = self.game(game_id)?;
        let index = parse_move_index(index)?;
        let entry = game
            .get_move(index)
            .map_err(|e| ServiceError::not_found(e.to_string()))?;
        debug!(%entry, "Fetched move");
        Ok(MoveResponse::from(&entry))
    }

    /// Fetches a range of ledger entries from optional query values.
    #[instrument(skip(self))]
    pub fn move_list(
        &self,
        game_id: &str,
        start: Option<&str>,
        until: Option<&str>,
    ) -> Result<MovesRangeResponse, ServiceError> {
        let game = self.game(game_id)?;
        let range = MovesRangeRequest::parse(start, until)?;
        let moves = game
            .get_moves(range.start, range.until)
            .map_err(|e| ServiceError::new(ErrorKind::BadRequest, e.to_string()))?;
        Ok(MovesRangeResponse::from(moves.as_slice()))
    }

    /// Renders a game's board as text.
    #[instrument(skip(self))]
    pub fn board(&self, game_id: &str) -> Result<String, ServiceError> {
        Ok(self.game(game_id)?.render())
    }
}
