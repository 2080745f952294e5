//! Tic-tac-toe decision engine.
//!
//! Board representation, terminal-state detection, three AI tiers
//! (random, win-or-block heuristic, exhaustive minimax), and the
//! turn-taking state machine that serializes human and machine moves.
//!
//! Rendering, audio, and durable score storage are external
//! collaborators: the engine exposes read-only [`Snapshot`]s (with the
//! winning line's logical indices for the renderer) and emits win
//! events through the [`ScoreKeeper`] trait.
//!
//! # Example
//!
//! ```
//! use arcade_tictactoe::{Difficulty, GameController, Phase};
//!
//! # fn example() -> Result<(), arcade_tictactoe::GameError> {
//! let mut game = GameController::new(Difficulty::Hard);
//! let snapshot = game.apply_human_move(4)?;
//! assert_eq!(snapshot.phase, Phase::AwaitingMachine);
//! game.play_machine_turn()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod controller;
mod error;
mod rules;
mod score;
mod types;

pub use ai::{move_values, Difficulty, Minimax, RandomChoice, Strategy, TwoPly};
pub use controller::{GameController, Phase, Snapshot};
pub use error::GameError;
pub use rules::{check_winner, evaluate, is_draw, WIN_LINES};
pub use score::{ScoreKeeper, Tally};
pub use types::{Board, Outcome, Player, Square};
