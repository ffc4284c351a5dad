//! Connect-N game state machine.
//!
//! A [`Game`] owns its board, move ledger, roster, and one [`PlayerGraph`]
//! per player, all behind a single read/write lock. [`Game::make_move`] and
//! [`Game::quit`] are the only mutators and take the lock exclusively;
//! every query takes it shared.
//!
//! A game starts in progress and ends exactly once, by one of:
//! - a win: a drop completes a run of `win_length` along any line family
//! - a draw: the top row fills up without a win
//! - attrition: quits leave a single active player, who wins

use super::action::{Move, PlayerId};
use super::board::{Board, Coord, Seat};
use super::error::{HistoryError, MoveError};
use super::graph::PlayerGraph;
use super::status::{GameState, GameStatus, MoveConfirmation, QuitStatus};
use derive_new::new;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier of a game.
pub type GameId = String;

/// A player in the roster.
#[derive(Debug, Clone, new)]
struct Participant {
    id: PlayerId,
    #[new(value = "true")]
    active: bool,
}

/// Everything guarded by the game lock.
#[derive(Debug)]
struct Table {
    board: Board,
    roster: Vec<Participant>,
    graphs: Vec<PlayerGraph>,
    moves: Vec<Move>,
    over: bool,
    winner: Option<Seat>,
}

impl Table {
    fn seat_of(&self, player: &str) -> Option<Seat> {
        self.roster.iter().position(|p| p.id == player)
    }

    fn active_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.roster
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(seat, _)| seat)
    }

    fn active_players(&self) -> Vec<PlayerId> {
        self.active_seats()
            .map(|seat| self.roster[seat].id.clone())
            .collect()
    }

    /// The seat due to drop next.
    ///
    /// Rotation runs over active players in join order, starting after
    /// whoever made the last drop. Quits are skipped when finding the last
    /// drop, and a mover who has since quit still anchors the rotation.
    fn next_mover(&self) -> Option<Seat> {
        let last_drop = self.moves.iter().rev().find_map(|m| match m {
            Move::Drop { player, .. } => self.seat_of(player),
            Move::Quit { .. } => None,
        });

        match last_drop {
            None => self.active_seats().next(),
            Some(last) => {
                let n = self.roster.len();
                (1..=n)
                    .map(|offset| (last + offset) % n)
                    .find(|&seat| self.roster[seat].active)
            }
        }
    }

    fn finish(&mut self, winner: Option<Seat>) {
        self.over = true;
        self.winner = winner;
    }
}

/// A single game, safe to share between threads.
#[derive(Debug)]
pub struct Game {
    id: GameId,
    rows: usize,
    columns: usize,
    win_length: usize,
    table: RwLock<Table>,
}

impl Game {
    /// Creates a game with every player active and an empty board.
    ///
    /// `players` fixes both join order and turn order. Player count and
    /// board dimensions are expected to be validated by the caller.
    #[instrument(skip(id), fields(game_id = %id))]
    pub fn new(
        id: GameId,
        rows: usize,
        columns: usize,
        win_length: usize,
        players: Vec<PlayerId>,
    ) -> Self {
        info!(players = players.len(), "Creating new game");
        let graphs = players.iter().map(|_| PlayerGraph::new()).collect();
        let roster = players
            .into_iter()
            .map(Participant::new)
            .collect();

        Self {
            id,
            rows,
            columns,
            win_length,
            table: RwLock::new(Table {
                board: Board::new(rows, columns),
                roster,
                graphs,
                moves: Vec::new(),
                over: false,
                winner: None,
            }),
        }
    }

    /// Returns the game id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of board rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of board columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Length of the run needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drops a piece for `player` into `column`.
    ///
    /// Checks run in a fixed order: column bounds, membership, game over,
    /// turn, then column capacity. Nothing is mutated unless all pass.
    /// A move that wins or fills the board still returns a confirmation;
    /// the ending is visible through [`Game::status`].
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the first failed check.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn make_move(&self, player: &str, column: usize) -> Result<MoveConfirmation, MoveError> {
        let mut table = self.write();

        if column >= self.columns {
            warn!(columns = self.columns, "Column out of range");
            return Err(MoveError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }

        let seat = table
            .seat_of(player)
            .filter(|&seat| table.roster[seat].active)
            .ok_or_else(|| {
                warn!("Player is not active in this game");
                MoveError::NotPlaying(player.to_string())
            })?;

        if table.over {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }

        if table.next_mover() != Some(seat) {
            warn!(
                expected = ?table.next_mover().map(|s| table.roster[s].id.as_str()),
                "Player tried to move out of turn"
            );
            return Err(MoveError::WrongTurn(player.to_string()));
        }

        let coord = table
            .board
            .drop_piece(column, seat)
            .ok_or(MoveError::ColumnFull(column))?;

        table.moves.push(Move::Drop {
            player: player.to_string(),
            coord,
        });
        table.graphs[seat].add(coord);
        let index = table.moves.len() - 1;

        if table.graphs[seat].find_consecutive(coord, self.win_length) {
            info!(%coord, winner = player, "Game won");
            table.finish(Some(seat));
        } else if table.board.is_full() {
            info!(%coord, "Board full, game drawn");
            table.finish(None);
        } else {
            debug!(%coord, index, "Move accepted");
        }

        Ok(MoveConfirmation::new(&self.id, index))
    }

    /// Removes `player` from the rotation.
    ///
    /// If only one active player remains afterwards, the game ends with that
    /// player as the winner. A successful quit always reports
    /// [`QuitStatus::LeftGame`], whether or not it ended the game.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn quit(&self, player: &str) -> QuitStatus {
        let mut table = self.write();

        let Some(seat) = table.seat_of(player) else {
            warn!("Unknown player tried to quit");
            return QuitStatus::InvalidGame;
        };

        if table.over {
            debug!("Quit after game over");
            return QuitStatus::GameOver;
        }

        if !table.roster[seat].active {
            debug!("Player already left");
            return QuitStatus::QuitLeftGame;
        }

        table.roster[seat].active = false;
        table.moves.push(Move::Quit {
            player: player.to_string(),
        });

        let remaining: Vec<Seat> = table.active_seats().collect();
        match remaining.as_slice() {
            [last] => {
                info!(winner = %table.roster[*last].id, "Last player standing wins");
                table.finish(Some(*last));
            }
            [] => {
                info!("No players left");
                table.finish(None);
            }
            _ => info!(remaining = remaining.len(), "Player left game"),
        }

        QuitStatus::LeftGame
    }

    /// Returns the active players, the lifecycle state, and the winner once done.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn status(&self) -> GameStatus {
        let table = self.read();
        let state = if table.over {
            GameState::Done
        } else {
            GameState::InProgress
        };
        let winner = match state {
            GameState::Done => table.winner.map(|seat| table.roster[seat].id.clone()),
            GameState::InProgress => None,
        };

        GameStatus {
            players: table.active_players(),
            state,
            winner,
        }
    }

    /// Returns the move at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] if no such move exists.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn get_move(&self, index: usize) -> Result<Move, HistoryError> {
        let table = self.read();
        table
            .moves
            .get(index)
            .cloned()
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                len: table.moves.len(),
            })
    }

    /// Returns moves `start..=until`.
    ///
    /// A negative `until`, or one past the last move, means "to the end".
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::RangeOutOfBounds`] if `start` lies beyond
    /// the end of the (clamped) range.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn get_moves(&self, start: usize, until: isize) -> Result<Vec<Move>, HistoryError> {
        let table = self.read();
        let len = table.moves.len();

        let end = match usize::try_from(until) {
            Ok(until) if until < len => until + 1,
            _ => len,
        };

        if start > end {
            warn!(start, end, "Range starts past its end");
            return Err(HistoryError::RangeOutOfBounds { start, end });
        }

        Ok(table.moves[start..end].to_vec())
    }

    /// Number of ledger entries, drops and quits alike.
    pub fn move_count(&self) -> usize {
        self.read().moves.len()
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.read().over
    }

    /// Returns the winner, if the game has one.
    pub fn winner(&self) -> Option<PlayerId> {
        let table = self.read();
        table.winner.map(|seat| table.roster[seat].id.clone())
    }

    /// Returns the full roster in join order, including players who quit.
    pub fn players(&self) -> Vec<PlayerId> {
        self.read().roster.iter().map(|p| p.id.clone()).collect()
    }

    /// Returns the owner of a cell, if any.
    pub fn cell(&self, coord: Coord) -> Option<PlayerId> {
        let table = self.read();
        table
            .board
            .get(coord)
            .map(|seat| table.roster[seat].id.clone())
    }

    /// Renders the board as text, top row first.
    pub fn render(&self) -> String {
        self.read().board.display()
    }
}
