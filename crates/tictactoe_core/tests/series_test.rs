//! Tests for a full series driven through the public API.

use std::sync::mpsc;
use tictactoe_core::{
    Cell, Game, GameEvent, GameInvariants, InvariantSet, MoveError, MoveOutcome, Position,
    RoundState, Score, SeriesPhase, Sign,
};

fn play(game: &mut Game, moves: &[usize]) -> MoveOutcome {
    let mut last = None;
    for &index in moves {
        last = Some(game.play_move(index).expect("Valid move"));
    }
    last.expect("At least one move")
}

#[test]
fn test_x_wins_top_row() {
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Sign::X,
            line: [0, 1, 2]
        }
    );
    assert!(game.is_over());
    assert_eq!(game.winning_line(), Some([0, 1, 2]));
    assert_eq!(game.score().wins(Sign::X), 1);
}

#[test]
fn test_o_wins_column() {
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 1, 3, 4, 8, 7]);

    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Sign::O,
            line: [1, 4, 7]
        }
    );
    assert_eq!(game.score().wins(Sign::O), 1);
    assert_eq!(game.score().wins(Sign::X), 0);
}

#[test]
fn test_tie_after_ninth_move() {
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);

    assert_eq!(outcome, MoveOutcome::Tied);
    assert_eq!(game.state(), RoundState::Tied);
    assert_eq!(game.score().ties(), 1);
    assert!(game.board().is_full());
}

#[test]
fn test_center_move_completing_two_lines_reports_first() {
    let mut game = Game::new();
    // X: 3, 5, 0, 8 then 4 completes the middle row and the main diagonal.
    let outcome = play(&mut game, &[3, 1, 5, 2, 0, 6, 8, 7, 4]);

    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Sign::X,
            line: [3, 4, 5]
        }
    );
    assert_eq!(game.score().wins(Sign::X), 1);
    assert_eq!(game.score().ties(), 0);
}

#[test]
fn test_win_on_last_cell_is_not_a_tie() {
    let mut game = Game::new();
    // The ninth move fills the board and completes the anti-diagonal.
    let outcome = play(&mut game, &[0, 1, 4, 8, 5, 3, 2, 7, 6]);

    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Sign::X,
            line: [2, 4, 6]
        }
    );
    assert_eq!(game.score().ties(), 0);
}

#[test]
fn test_occupied_cell_never_changes_board() {
    let mut game = Game::new();
    play(&mut game, &[4, 0]);
    let before = game.snapshot();

    for index in [4, 0] {
        assert_eq!(game.play_move(index), Err(MoveError::CellOccupied(index)));
        assert_eq!(game.snapshot(), before);
    }
    assert_eq!(game.board().get(4), Some(Cell::Occupied(Sign::X)));
    assert_eq!(game.board().get(0), Some(Cell::Occupied(Sign::O)));
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut game = Game::new();

    play(&mut game, &[0, 3, 1, 4, 2]);
    game.start_next_round();
    assert_eq!(game.score().wins(Sign::X), 1);

    play(&mut game, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    game.start_next_round();

    play(&mut game, &[0, 1, 3, 4, 8, 7]);
    game.start_next_round();

    let score = game.score();
    assert_eq!(score.wins(Sign::X), 1);
    assert_eq!(score.wins(Sign::O), 1);
    assert_eq!(score.ties(), 1);
    assert_eq!(score.rounds_played(), 3);
    assert_eq!(game.round(), 1);
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_next_round_mid_round_restarts() {
    let mut game = Game::new();
    play(&mut game, &[0, 4, 8]);
    game.start_next_round();

    assert_eq!(game.round(), 1);
    assert_eq!(game.current_turn(), Sign::X);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.score(), Score::default());
}

#[test]
fn test_quit_then_restart_series() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.quit_series();

    assert_eq!(game.phase(), SeriesPhase::Idle);
    assert_eq!(game.score(), Score::default());
    assert_eq!(game.play_move(0), Err(MoveError::SeriesIdle));

    game.start_series();
    assert_eq!(game.phase(), SeriesPhase::Playing);
    assert!(game.play_move(0).is_ok());
}

#[test]
fn test_quit_event_order() {
    let (tx, rx) = mpsc::channel();
    let mut game = Game::idle();
    game.subscribe(Box::new(tx));

    game.start_series();
    game.play_move(4).unwrap();
    game.quit_series();

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::SeriesStarted,
            GameEvent::MovePlayed {
                index: 4,
                sign: Sign::X
            },
            GameEvent::ScoreChanged(Score::default()),
            GameEvent::SeriesQuit,
        ]
    );
}

#[test]
fn test_invariants_hold_through_every_move() {
    let mut game = Game::new();
    for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        if game.is_over() {
            break;
        }
        game.play_move(index).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_snapshot_serializes() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.winning_line(), Some([0, 1, 2]));
    assert!(snapshot.is_over());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["round"], 5);
    assert_eq!(json["cells"][0], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(json["cells"][8], serde_json::json!("Empty"));
    assert_eq!(json["state"]["Won"]["line"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_positions_drive_moves() {
    let mut game = Game::new();
    game.play_move(Position::Center.to_index()).unwrap();
    let open = Position::open_on(game.board());
    assert_eq!(open.len(), 8);
    assert!(!open.contains(&Position::Center));
}
