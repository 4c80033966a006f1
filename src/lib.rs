//! Pure tic-tac-toe rules engine.
//!
//! This library owns the game rules and nothing else: board representation,
//! winner/draw evaluation, winning-line geometry for rendering, and validated
//! move application with copy semantics. Rendering, theming, input, and score
//! persistence belong to whatever application shell consumes it.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`GameStatus`]
//! - **Rules**: pure [`evaluate`], [`winning_line`], [`check_winner`]
//! - **Actions**: [`Move`] and [`apply_move`] - never mutate the input board
//! - **Session**: [`Game`] turn-taking wrapper and [`Scoreboard`] tally
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center)?;
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod line;
mod position;
mod rules;
mod types;

// Core domain types
pub use types::{Board, GameStatus, Player, Square};

// Positions and win-line geometry
pub use line::{Orientation, WinLine};
pub use position::Position;

// Pure rules
pub use rules::{check_winner, evaluate, is_draw, is_full, winning_line};

// Move application
pub use action::{Move, MoveError, apply_move};

// Session layer
pub use game::{Game, Scoreboard};

/// Alias for clarity at the application boundary.
pub type Mark = Player;
