//! Turn-taking state machine for a human-versus-machine game.

use crate::ai::{Difficulty, Strategy};
use crate::error::GameError;
use crate::rules::evaluate;
use crate::score::ScoreKeeper;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Delay the original UI waited before the machine replied.
const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(400);

/// Phase of the turn-taking state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    AwaitingHuman,
    /// The human has moved; the machine's reply is pending.
    AwaitingMachine,
    /// Terminal outcome reached; only restart is accepted.
    Over(Outcome),
}

/// Read-only view of the game for the rendering collaborator.
///
/// Carries logical indices only; pixel geometry is the renderer's
/// problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The nine squares in row-major order.
    pub squares: [Square; 9],
    /// Current phase, including the outcome and winning line when over.
    pub phase: Phase,
    /// Difficulty in effect.
    pub difficulty: Difficulty,
}

/// Owns the board and sequences human and machine moves.
///
/// One controller per game; construct as many as needed. There is no
/// process-wide state.
pub struct GameController {
    board: Board,
    phase: Phase,
    difficulty: Difficulty,
    strategy: Box<dyn Strategy>,
    seed: Option<u64>,
    thinking_delay: Duration,
    score_keeper: Option<Box<dyn ScoreKeeper>>,
}

impl GameController {
    /// Creates a controller with an empty board, awaiting the human.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        info!(%difficulty, "Creating game controller");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            difficulty,
            strategy: difficulty.strategy(None),
            seed: None,
            thinking_delay: DEFAULT_THINKING_DELAY,
            score_keeper: None,
        }
    }

    /// Creates a controller whose random tiers are deterministic.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        let mut controller = Self::new(difficulty);
        controller.seed = Some(seed);
        controller.strategy = difficulty.strategy(Some(seed));
        controller
    }

    /// Creates a controller with an explicit strategy, bypassing the
    /// difficulty dispatch. Front-ends use the difficulty
    /// constructors; this seam exists for scripted opponents.
    pub fn with_strategy(difficulty: Difficulty, strategy: Box<dyn Strategy>) -> Self {
        let mut controller = Self::new(difficulty);
        controller.strategy = strategy;
        controller
    }

    /// Registers the score collaborator notified on every win.
    pub fn set_score_keeper(&mut self, keeper: Box<dyn ScoreKeeper>) {
        self.score_keeper = Some(keeper);
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the difficulty in effect.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the suggested pause before playing the machine's turn.
    ///
    /// The engine never sleeps; front-ends apply this between the
    /// human's move and [`GameController::play_machine_turn`].
    pub fn thinking_delay(&self) -> Duration {
        self.thinking_delay
    }

    /// Overrides the suggested machine-thinking pause.
    pub fn set_thinking_delay(&mut self, delay: Duration) {
        self.thinking_delay = delay;
    }

    /// Returns a read-only snapshot for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            squares: *self.board.squares(),
            phase: self.phase,
            difficulty: self.difficulty,
        }
    }

    /// Applies the human's move at the given index.
    ///
    /// Accepted only in [`Phase::AwaitingHuman`]. On success the game
    /// is either over or awaiting the machine's reply.
    ///
    /// # Errors
    ///
    /// [`GameError::NotYourTurn`] outside `AwaitingHuman`;
    /// [`GameError::InvalidMove`] for a bad index or occupied square.
    /// State is unchanged on error.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<Snapshot, GameError> {
        if self.phase != Phase::AwaitingHuman {
            warn!(index, phase = ?self.phase, "Human move rejected: not their turn");
            return Err(GameError::NotYourTurn);
        }

        self.board.place(index, Player::Human)?;
        debug!(index, "Human move placed");
        self.assert_mark_balance();

        match evaluate(&self.board) {
            Outcome::InProgress => self.phase = Phase::AwaitingMachine,
            outcome => self.finish(outcome),
        }

        Ok(self.snapshot())
    }

    /// Plays the machine's turn with the configured strategy.
    ///
    /// Accepted only in [`Phase::AwaitingMachine`]. Front-ends call
    /// this after honoring [`GameController::thinking_delay`]; the
    /// call itself is synchronous.
    ///
    /// # Errors
    ///
    /// [`GameError::NotYourTurn`] outside `AwaitingMachine`. A
    /// [`GameError::NoMovesAvailable`] escaping the strategy indicates
    /// a controller bug and is debug-asserted against.
    #[instrument(skip(self))]
    pub fn play_machine_turn(&mut self) -> Result<Snapshot, GameError> {
        if self.phase != Phase::AwaitingMachine {
            warn!(phase = ?self.phase, "Machine turn rejected: not pending");
            return Err(GameError::NotYourTurn);
        }
        debug_assert!(!self.board.is_full(), "machine turn on a full board");

        let index = self.strategy.select_move(&self.board, Player::Machine)?;
        self.board.place(index, Player::Machine)?;
        debug!(index, strategy = self.strategy.name(), "Machine move placed");
        self.assert_mark_balance();

        match evaluate(&self.board) {
            Outcome::InProgress => self.phase = Phase::AwaitingHuman,
            outcome => self.finish(outcome),
        }

        Ok(self.snapshot())
    }

    /// Clears the board and returns to [`Phase::AwaitingHuman`].
    ///
    /// Accepted in `AwaitingHuman` or `Over`; a pending machine turn
    /// must play out first. Win tallies live with the score
    /// collaborator and are untouched.
    ///
    /// # Errors
    ///
    /// [`GameError::NotYourTurn`] while the machine turn is pending.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<Snapshot, GameError> {
        if self.phase == Phase::AwaitingMachine {
            warn!("Restart rejected while machine turn pending");
            return Err(GameError::NotYourTurn);
        }

        info!("Restarting game");
        self.board = Board::new();
        self.phase = Phase::AwaitingHuman;
        Ok(self.snapshot())
    }

    /// Switches difficulty and resets the current game.
    ///
    /// Accepted in `AwaitingHuman` or `Over`; switching strategies
    /// while the machine turn is pending is rejected rather than left
    /// undefined.
    ///
    /// # Errors
    ///
    /// [`GameError::NotYourTurn`] while the machine turn is pending.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<Snapshot, GameError> {
        if self.phase == Phase::AwaitingMachine {
            warn!(%difficulty, "Difficulty change rejected while machine turn pending");
            return Err(GameError::NotYourTurn);
        }

        info!(%difficulty, "Switching difficulty");
        self.difficulty = difficulty;
        self.strategy = difficulty.strategy(self.seed);
        self.restart()
    }

    /// Records a terminal outcome and notifies the score collaborator.
    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "Game over");
        if let Outcome::Won { player, .. } = outcome {
            if let Some(keeper) = self.score_keeper.as_mut() {
                keeper.record_win(player);
            }
        }
        self.phase = Phase::Over(outcome);
    }

    /// Human marks minus machine marks must be 0 or 1 after every
    /// placement: the human moves first and turns strictly alternate.
    fn assert_mark_balance(&self) {
        debug_assert!(
            {
                let humans = self.board.count(Player::Human);
                let machines = self.board.count(Player::Machine);
                humans == machines || humans == machines + 1
            },
            "mark balance violated"
        );
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("phase", &self.phase)
            .field("difficulty", &self.difficulty)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
