//! Error types for the game engine.

use derive_more::{Display, Error};

/// Errors surfaced by board mutation and the turn-taking state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Index out of range, square occupied, or move attempted on a
    /// terminal board. Expected user-input condition; state unchanged.
    #[display("Invalid move at position {}", position)]
    InvalidMove {
        /// The rejected board index.
        position: usize,
    },

    /// Move, restart, or difficulty change attempted while the
    /// controller is not in a phase that accepts it. State unchanged.
    #[display("Not your turn")]
    NotYourTurn,

    /// A strategy was invoked with no empty squares. The controller
    /// checks terminality before dispatch, so this indicates a caller
    /// bug rather than a runtime condition.
    #[display("No moves available on a full board")]
    NoMovesAvailable,
}
