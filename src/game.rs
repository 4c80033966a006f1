//! Session wrapper around the pure engine.
//!
//! [`Game`] owns one board and alternates turns; status is recomputed from
//! the board on every query rather than cached. [`Scoreboard`] keeps the
//! in-session win tally the surrounding application displays between resets.

use super::action::{Move, MoveError};
use super::line::WinLine;
use super::position::Position;
use super::rules::{evaluate, winning_line};
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single tic-tac-toe game in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current status, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Geometry of the winning line, if the game has been won.
    pub fn winning_line(&self) -> Option<WinLine> {
        winning_line(&self.board)
    }

    /// Plays the current player's mark at the given position.
    ///
    /// On success the turn passes to the opponent and the new status is
    /// returned. On rejection the game is unchanged.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        let mov = Move::new(self.to_move, position);
        self.board = mov.apply(&self.board)?;
        self.history.push(mov);
        self.to_move = self.to_move.opponent();

        let status = self.status();
        debug!(?status, "move accepted");
        Ok(status)
    }

    /// Plays at a raw board index (0-8).
    pub fn play_index(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(position)
    }

    /// Resets to a fresh empty board with X to move.
    ///
    /// The only way out of a terminal status.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// In-session win tally for the two players.
///
/// Scores live only as long as the session; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Records a finished game's status.
    ///
    /// Draws and in-progress statuses leave the tally untouched.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw | GameStatus::InProgress => {}
        }
    }

    /// Clears both tallies.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate_from_x() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        game.play(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.play(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_status_derived_per_query() {
        let mut game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        for pos in [
            Position::TopLeft,    // X
            Position::MiddleLeft, // O
            Position::TopCenter,  // X
            Position::Center,     // O
            Position::TopRight,   // X wins top row
        ] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.winning_line().unwrap().cells(), [0, 1, 2]);
    }

    #[test]
    fn test_rejection_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();
        assert!(game.play(Position::Center).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_scoreboard_counts_wins_only() {
        let mut scores = Scoreboard::new();
        scores.record(GameStatus::Won(Player::X));
        scores.record(GameStatus::Won(Player::X));
        scores.record(GameStatus::Won(Player::O));
        scores.record(GameStatus::Draw);
        scores.record(GameStatus::InProgress);
        assert_eq!(scores.wins(Player::X), 2);
        assert_eq!(scores.wins(Player::O), 1);

        scores.reset();
        assert_eq!(scores.wins(Player::X), 0);
        assert_eq!(scores.wins(Player::O), 0);
    }
}
