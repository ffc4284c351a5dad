//! In-memory registry of running games.

use crate::games::connect::{Game, GameId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, instrument, warn};

/// Registry failures.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RegistryError {
    /// A game with this id is already registered.
    #[display("Game {} already exists", id)]
    DuplicateGame {
        /// The colliding id.
        id: GameId,
    },
}

/// Maps game ids to games.
///
/// Lookups and listings take the registry lock shared; only [`add`](Self::add)
/// takes it exclusively. Each game carries its own lock, so play in one game
/// never waits on another.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<GameId, Arc<Game>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    /// Registers a game under its own id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateGame`] if the id is taken; the
    /// existing game is left in place.
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    pub fn add(&self, game: Game) -> Result<Arc<Game>, RegistryError> {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);

        if games.contains_key(game.id()) {
            warn!("Game already exists");
            return Err(RegistryError::DuplicateGame {
                id: game.id().to_string(),
            });
        }

        let game = Arc::new(game);
        games.insert(game.id().to_string(), Arc::clone(&game));
        info!(count = games.len(), "Registered game");
        Ok(game)
    }

    /// Looks up a game by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<Arc<Game>> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        let game = games.get(id).cloned();

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        game
    }

    /// Snapshot of all registered ids, in no particular order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<GameId> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        let ids: Vec<_> = games.keys().cloned().collect();
        debug!(count = ids.len(), "Listed games");
        ids
    }

    /// Number of registered games.
    pub fn len(&self) -> usize {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no game is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
