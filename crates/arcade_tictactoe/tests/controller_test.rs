//! Tests for the turn-taking state machine.

use arcade_tictactoe::{
    Difficulty, GameController, GameError, Outcome, Phase, Player, Square, Strategy, Tally,
};
use std::sync::{Arc, Mutex};

/// Opponent that plays a fixed sequence of indices.
struct Scripted {
    moves: Vec<usize>,
    next: usize,
}

impl Scripted {
    fn new(moves: Vec<usize>) -> Self {
        Self { moves, next: 0 }
    }
}

impl Strategy for Scripted {
    fn select_move(
        &mut self,
        _board: &arcade_tictactoe::Board,
        _player: Player,
    ) -> Result<usize, GameError> {
        let index = self.moves[self.next];
        self.next += 1;
        Ok(index)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[test]
fn test_initial_state() {
    let game = GameController::new(Difficulty::Medium);
    assert_eq!(game.phase(), Phase::AwaitingHuman);
    assert_eq!(game.board().empty_squares().count(), 9);
}

#[test]
fn test_human_move_transitions_to_machine() {
    let mut game = GameController::new(Difficulty::Hard);
    let snapshot = game.apply_human_move(4).expect("legal move");
    assert_eq!(snapshot.phase, Phase::AwaitingMachine);
    assert_eq!(snapshot.squares[4], Square::Occupied(Player::Human));
}

#[test]
fn test_second_human_move_rejected_while_machine_pending() {
    let mut game = GameController::new(Difficulty::Hard);
    game.apply_human_move(4).expect("legal move");
    assert_eq!(game.apply_human_move(0), Err(GameError::NotYourTurn));
    // State unchanged by the rejection.
    assert_eq!(game.phase(), Phase::AwaitingMachine);
    assert!(game.board().is_empty(0));
}

#[test]
fn test_machine_turn_rejected_out_of_phase() {
    let mut game = GameController::new(Difficulty::Hard);
    assert_eq!(game.play_machine_turn(), Err(GameError::NotYourTurn));
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = GameController::new(Difficulty::Hard);
    game.apply_human_move(4).expect("legal move");
    game.play_machine_turn().expect("machine reply");

    let machine_square = game
        .board()
        .squares()
        .iter()
        .position(|s| *s == Square::Occupied(Player::Machine))
        .expect("machine played");

    assert_eq!(
        game.apply_human_move(machine_square),
        Err(GameError::InvalidMove {
            position: machine_square
        })
    );
    assert_eq!(game.phase(), Phase::AwaitingHuman);
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut game = GameController::new(Difficulty::Easy);
    assert_eq!(
        game.apply_human_move(9),
        Err(GameError::InvalidMove { position: 9 })
    );
    assert_eq!(game.phase(), Phase::AwaitingHuman);
}

#[test]
fn test_turns_alternate_with_balanced_marks() {
    let mut game = GameController::with_seed(Difficulty::Easy, 11);

    while game.phase() == Phase::AwaitingHuman {
        let index = game
            .board()
            .empty_squares()
            .next()
            .expect("empty square available");
        game.apply_human_move(index).expect("legal move");

        let humans = game.board().count(Player::Human);
        let machines = game.board().count(Player::Machine);
        assert!(humans == machines || humans == machines + 1);

        if game.phase() == Phase::AwaitingMachine {
            game.play_machine_turn().expect("machine reply");
            let humans = game.board().count(Player::Human);
            let machines = game.board().count(Player::Machine);
            assert!(humans == machines || humans == machines + 1);
        }
    }

    assert!(matches!(game.phase(), Phase::Over(_)));
}

#[test]
fn test_human_top_row_win_detected_instantly() {
    // Scripted machine never blocks the top row; the instant index 2
    // fills, the outcome is Won(Human, [0,1,2]).
    let mut game = GameController::with_strategy(
        Difficulty::Easy,
        Box::new(Scripted::new(vec![3, 4])),
    );

    game.apply_human_move(0).expect("legal move");
    game.play_machine_turn().expect("machine reply");
    game.apply_human_move(1).expect("legal move");
    game.play_machine_turn().expect("machine reply");
    let snapshot = game.apply_human_move(2).expect("legal move");

    assert_eq!(
        snapshot.phase,
        Phase::Over(Outcome::Won {
            player: Player::Human,
            line: [0, 1, 2],
        })
    );
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut game = GameController::with_strategy(
        Difficulty::Easy,
        Box::new(Scripted::new(vec![3, 4])),
    );
    for (human, expect_reply) in [(0, true), (1, true), (2, false)] {
        game.apply_human_move(human).expect("legal move");
        if expect_reply {
            game.play_machine_turn().expect("machine reply");
        }
    }

    assert_eq!(game.apply_human_move(5), Err(GameError::NotYourTurn));
    assert_eq!(game.play_machine_turn(), Err(GameError::NotYourTurn));
}

#[test]
fn test_restart_clears_board_and_keeps_tally() {
    let tally = Arc::new(Mutex::new(Tally::new()));
    let mut game = GameController::with_strategy(
        Difficulty::Easy,
        Box::new(Scripted::new(vec![3, 4])),
    );
    game.set_score_keeper(Box::new(Arc::clone(&tally)));

    for (human, expect_reply) in [(0, true), (1, true), (2, false)] {
        game.apply_human_move(human).expect("legal move");
        if expect_reply {
            game.play_machine_turn().expect("machine reply");
        }
    }

    assert_eq!(tally.lock().unwrap().wins(Player::Human), 1);

    let snapshot = game.restart().expect("restart after game over");
    assert_eq!(snapshot.phase, Phase::AwaitingHuman);
    assert!(snapshot.squares.iter().all(|s| *s == Square::Empty));
    // Restart itself never touches the tallies.
    assert_eq!(tally.lock().unwrap().wins(Player::Human), 1);
    assert_eq!(tally.lock().unwrap().wins(Player::Machine), 0);
}

#[test]
fn test_restart_rejected_while_machine_pending() {
    let mut game = GameController::new(Difficulty::Hard);
    game.apply_human_move(0).expect("legal move");
    assert_eq!(game.restart(), Err(GameError::NotYourTurn));
}

#[test]
fn test_set_difficulty_resets_game() {
    let mut game = GameController::new(Difficulty::Easy);
    game.apply_human_move(0).expect("legal move");
    game.play_machine_turn().expect("machine reply");

    let snapshot = game.set_difficulty(Difficulty::Hard).expect("switch");
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(snapshot.phase, Phase::AwaitingHuman);
    assert!(snapshot.squares.iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_set_difficulty_rejected_while_machine_pending() {
    let mut game = GameController::new(Difficulty::Easy);
    game.apply_human_move(0).expect("legal move");
    assert_eq!(
        game.set_difficulty(Difficulty::Hard),
        Err(GameError::NotYourTurn)
    );
    assert_eq!(game.difficulty(), Difficulty::Easy);
}

#[test]
fn test_machine_win_recorded() {
    // Scripted machine completes the middle row while the human
    // wanders the corners.
    let tally = Arc::new(Mutex::new(Tally::new()));
    let mut game = GameController::with_strategy(
        Difficulty::Easy,
        Box::new(Scripted::new(vec![3, 4, 5])),
    );
    game.set_score_keeper(Box::new(Arc::clone(&tally)));

    for human in [0, 2, 6] {
        game.apply_human_move(human).expect("legal move");
        game.play_machine_turn().expect("machine reply");
    }

    assert_eq!(
        game.phase(),
        Phase::Over(Outcome::Won {
            player: Player::Machine,
            line: [3, 4, 5],
        })
    );
    assert_eq!(tally.lock().unwrap().wins(Player::Machine), 1);
}

#[test]
fn test_snapshot_is_detached() {
    let mut game = GameController::new(Difficulty::Hard);
    let before = game.snapshot();
    game.apply_human_move(4).expect("legal move");
    // The earlier snapshot is an independent copy.
    assert_eq!(before.squares[4], Square::Empty);
}
