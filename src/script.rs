//! Line-oriented command scripts driven against a [`GameService`].
//!
//! One command per line; blank lines and `#` comments are skipped. A game id
//! of `-` stands for the most recently created game.
//!
//! ```text
//! create a b
//! move - a 1
//! moves - 0 -1
//! ```

use crate::games::connect::GameId;
use crate::service::{GameService, ServiceError};
use crate::wire::{CreateGameRequest, MoveRequest};
use derive_more::{Display, Error, From};
use serde::Serialize;
use tracing::{debug, instrument};

/// Failure to run a script line.
#[derive(Debug, Display, Error, From)]
pub enum ScriptError {
    /// The line is not a known command or has the wrong arguments.
    #[display("line {}: {}", line, message)]
    #[from(skip)]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// The service refused the request.
    #[display("{}", _0)]
    Service(ServiceError),

    /// A response could not be encoded.
    #[display("JSON encode error: {}", _0)]
    Json(serde_json::Error),
}

/// Executes script lines against one service, remembering the last game created.
#[derive(Debug)]
pub struct ScriptRunner {
    service: GameService,
    last_game: Option<GameId>,
    line: usize,
}

impl ScriptRunner {
    /// Creates a runner over `service`.
    pub fn new(service: GameService) -> Self {
        Self {
            service,
            last_game: None,
            line: 0,
        }
    }

    /// Returns the service the runner drives.
    pub fn service(&self) -> &GameService {
        &self.service
    }

    fn syntax(&self, message: impl Into<String>) -> ScriptError {
        ScriptError::Syntax {
            line: self.line,
            message: message.into(),
        }
    }

    fn resolve(&self, id: &str) -> Result<String, ScriptError> {
        if id != "-" {
            return Ok(id.to_string());
        }
        self.last_game
            .clone()
            .ok_or_else(|| self.syntax("no game created yet"))
    }

    /// Runs one line, returning the response text, or `None` for blank
    /// lines and comments.
    ///
    /// Responses are JSON, except for `board` which prints the grid.
    #[instrument(skip(self), fields(line_no = self.line + 1))]
    pub fn run_line(&mut self, line: &str) -> Result<Option<String>, ScriptError> {
        self.line += 1;
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            return Ok(None);
        };
        if command.starts_with('#') {
            return Ok(None);
        }
        debug!(command, ?args, "Running command");

        let output = match (command, args) {
            ("create", players) if !players.is_empty() => {
                let request = CreateGameRequest::new(
                    players.iter().map(|p| p.to_string()).collect(),
                    *self.service.config().rows(),
                    *self.service.config().columns(),
                );
                let response = self.service.create_game(request)?;
                self.last_game = Some(response.game_id.clone());
                to_json(&response)?
            }
            ("games", []) => to_json(&self.service.list_games())?,
            ("status", [game]) => {
                let game = self.resolve(game)?;
                to_json(&self.service.game_status(&game)?)?
            }
            ("move", [game, player, column]) => {
                let game = self.resolve(game)?;
                let column = column
                    .parse::<i64>()
                    .map_err(|_| self.syntax(format!("column {} is not a number", column)))?;
                to_json(&self.service.make_move(&game, player, MoveRequest::new(column))?)?
            }
            ("quit", [game, player]) => {
                let game = self.resolve(game)?;
                to_json(&self.service.quit(&game, player)?)?
            }
            ("moves", [game, range @ ..]) if range.len() <= 2 => {
                let game = self.resolve(game)?;
                let start = range.first().copied();
                let until = range.get(1).copied();
                to_json(&self.service.move_list(&game, start, until)?)?
            }
            ("get", [game, index]) => {
                let game = self.resolve(game)?;
                to_json(&self.service.get_move(&game, index)?)?
            }
            ("board", [game]) => {
                let game = self.resolve(game)?;
                self.service.board(&game)?
            }
            _ => return Err(self.syntax(format!("unrecognized command: {}", line.trim()))),
        };

        Ok(Some(output))
    }

    /// Runs every line of `script`, collecting one result per non-blank,
    /// non-comment line. Failures do not stop the run.
    #[instrument(skip(self, script))]
    pub fn run_script(&mut self, script: &str) -> Vec<Result<String, ScriptError>> {
        script
            .lines()
            .filter_map(|line| self.run_line(line).transpose())
            .collect()
    }
}

fn to_json(value: &impl Serialize) -> Result<String, ScriptError> {
    Ok(serde_json::to_string(value)?)
}
