//! Strictly Connect - in-memory engine for gravity-drop connect-N games
//!
//! Games are generalized over board size, player count, and the length of
//! the run needed to win.
//!
//! # Architecture
//!
//! - **Games**: board, per-player occupancy graphs, and the lock-guarded
//!   game state machine
//! - **Registry**: concurrent map from game id to game
//! - **Service**: request validation and outcome classification over the registry
//! - **Config**: game policy and logging settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use strictly_connect::{GameConfig, GameService, MoveRequest, CreateGameRequest, SequentialIds};
//!
//! # fn example() -> Result<(), strictly_connect::ServiceError> {
//! let service = GameService::new(GameConfig::default(), SequentialIds::new("game"));
//! let created = service.create_game(CreateGameRequest {
//!     players: vec!["a".to_string(), "b".to_string()],
//!     rows: 4,
//!     columns: 4,
//! })?;
//! service.make_move(&created.game_id, "a", MoveRequest { column: 1 })?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod id;
mod registry;
mod script;
mod service;
mod wire;

// Crate-level exports - Game engine
pub use games::connect::{
    Board, Coord, Game, GameId, GameState, GameStatus, HistoryError, LineFamily, Move,
    MoveConfirmation, MoveError, MoveKind, MoveStatus, PlayerGraph, PlayerId, QuitStatus, Seat,
};

// Crate-level exports - Registry and ids
pub use id::{IdGenerator, SequentialIds, UuidGenerator};
pub use registry::{GameRegistry, RegistryError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Wire shapes
pub use wire::{
    CreateGameRequest, CreateGameResponse, GameList, GameStatusResponse, MoveRequest,
    MoveResponse, MovesRangeRequest, MovesRangeResponse, ValidationError, parse_move_index,
    validate_column, validate_create_game,
};

// Crate-level exports - Service and scripting
pub use script::{ScriptError, ScriptRunner};
pub use service::{ErrorKind, GameService, ServiceError};
