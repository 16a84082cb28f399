//! Tests for the engine lifecycle and full game scenarios.

use strictly_lines::{
    Board, Coordinate, Direction, Engine, GameConfig, Move, Outcome, Phase, Player, Rules, Square,
};

fn prepared(side: u16, win: usize) -> Engine {
    let mut engine = Engine::new();
    let first = engine.prepare(Board::new(side).unwrap(), Rules::new(win).unwrap());
    assert_eq!(first, Some(Player::A));
    engine
}

fn c(x: u16, y: u16) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn test_top_row_win_finishes_game() {
    let mut engine = prepared(3, 3);

    assert_eq!(engine.make_move(c(0, 0)), Some(Player::B));
    assert_eq!(engine.make_move(c(1, 1)), Some(Player::A));
    assert_eq!(engine.make_move(c(1, 0)), Some(Player::B));
    assert_eq!(engine.make_move(c(2, 2)), Some(Player::A));

    let report = engine.play(c(2, 0));

    assert!(*report.placed());
    let line = report.line().expect("line through the last mark");
    assert_eq!(line.direction, Direction::Left);
    assert_eq!(line.length, 3);
    assert_eq!(*report.outcome(), Some(Outcome::Winner(Player::A)));

    assert!(!engine.is_running());
    assert!(engine.current_field().is_empty());
    assert_eq!(engine.outcome(), Some(Outcome::Winner(Player::A)));
    assert_eq!(engine.history().len(), 5);
}

#[test]
fn test_win_suppresses_turn_alternation() {
    let mut engine = prepared(3, 3);
    for coord in [c(0, 0), c(1, 1), c(1, 0), c(2, 2)] {
        engine.make_move(coord);
    }

    assert_eq!(engine.make_move(c(2, 0)), None);
    assert_eq!(engine.active_player(), None);
}

#[test]
fn test_non_adjacent_marks_form_no_line() {
    let mut engine = prepared(3, 3);

    engine.make_move_as(c(0, 0), Player::A);
    let report = engine.play_as(c(2, 2), Player::A);

    assert!(*report.placed());
    assert_eq!(*report.line(), None);
    assert_eq!(*report.outcome(), None);
    assert!(engine.is_running());
}

#[test]
fn test_prepare_twice_fully_resets() {
    let mut engine = prepared(3, 3);
    engine.make_move(c(0, 0));
    engine.make_move(c(1, 1));

    let first = engine.prepare(Board::new(5).unwrap(), Rules::new(4).unwrap());

    assert_eq!(first, Some(Player::A));
    assert!(engine.current_field().is_empty());
    assert!(engine.history().is_empty());
    assert!(engine.is_running());
    assert_eq!(engine.board().side(), 5);
    assert_eq!(engine.rules().min_win_length(), 4);
}

#[test]
fn test_prepare_after_finished_game() {
    let mut engine = prepared(3, 3);
    engine.finish();
    assert_eq!(engine.phase(), Phase::Finished(Outcome::Abandoned));

    engine.prepare(Board::new(3).unwrap(), Rules::new(3).unwrap());
    assert_eq!(engine.phase(), Phase::Running);
    assert_eq!(engine.outcome(), None);
}

#[test]
fn test_full_board_is_a_draw() {
    // A B A
    // A B B
    // B A A
    let order = [
        c(0, 0),
        c(1, 0),
        c(2, 0),
        c(1, 1),
        c(0, 1),
        c(2, 1),
        c(1, 2),
        c(0, 2),
        c(2, 2),
    ];
    let mut engine = prepared(3, 3);
    let reports: Vec<_> = order.iter().map(|&coord| engine.play(coord)).collect();

    assert!(reports.iter().all(|r| *r.placed()));
    assert!(reports[..8].iter().all(|r| r.outcome().is_none()));
    assert_eq!(*reports[8].outcome(), Some(Outcome::Draw));
    assert!(!engine.is_running());
}

#[test]
fn test_only_first_detected_direction_is_measured() {
    // A diagonal of three exists after the last move, but the left
    // neighbor is found first and only that row is measured.
    let mut engine = prepared(3, 3);
    engine.make_move_as(c(0, 0), Player::A);
    engine.make_move_as(c(2, 2), Player::A);
    engine.make_move_as(c(0, 1), Player::A);

    let report = engine.play_as(c(1, 1), Player::A);

    assert_eq!(report.line().map(|l| l.direction), Some(Direction::Left));
    assert_eq!(report.line_length(), 2);
    assert!(engine.is_running());
}

#[test]
fn test_occupied_move_passes_turn_without_marking() {
    let mut engine = prepared(3, 3);
    engine.make_move(c(1, 1));

    assert_eq!(engine.make_move(c(1, 1)), Some(Player::A));
    assert_eq!(engine.board().occupant_at(c(1, 1)), Square::Occupied(Player::A));
    assert_eq!(engine.board().occupied_count(), 1);
}

#[test]
fn test_out_of_bounds_move_passes_turn() {
    let mut engine = prepared(3, 3);

    assert_eq!(engine.make_move(c(3, 3)), Some(Player::B));
    assert!(engine.current_field().is_empty());
    assert!(engine.is_running());
}

#[test]
fn test_explicit_player_does_not_change_alternation() {
    let mut engine = prepared(4, 3);

    // Active is A, but B plays; the tracked turn still advances from A.
    assert_eq!(engine.make_move_as(c(0, 0), Player::B), Some(Player::B));
    assert_eq!(engine.board().occupant_at(c(0, 0)), Square::Occupied(Player::B));
}

#[test]
fn test_moves_after_finish_are_ignored() {
    let mut engine = prepared(3, 3);
    engine.finish();

    assert_eq!(engine.make_move(c(0, 0)), None);
    assert!(engine.current_field().is_empty());
    assert!(!engine.is_running());
}

#[test]
fn test_gomoku_diagonal_win() {
    let config = GameConfig::new(15, 5);
    let mut engine = Engine::new();
    engine.prepare(config.board().unwrap(), config.rules().unwrap());

    // A builds the anti-diagonal from the middle outwards, B stays far away.
    let a_moves = [c(7, 7), c(8, 6), c(6, 8), c(9, 5), c(5, 9)];
    let b_moves = [c(0, 0), c(0, 2), c(0, 4), c(0, 6)];

    for i in 0..4 {
        assert!(engine.play(a_moves[i]).outcome().is_none());
        assert!(engine.play(b_moves[i]).outcome().is_none());
    }
    let report = engine.play(a_moves[4]);

    assert_eq!(report.line_length(), 5);
    assert_eq!(*report.outcome(), Some(Outcome::Winner(Player::A)));
}

#[test]
fn test_line_longer_than_needed_still_wins() {
    // Two runs of two joined by the last mark measure five on a win-of-three rule.
    let mut engine = prepared(5, 3);
    for coord in [c(0, 4), c(1, 4), c(3, 4), c(4, 4)] {
        engine.make_move_as(coord, Player::B);
    }
    let report = engine.play_as(c(2, 4), Player::B);

    assert_eq!(report.line_length(), 5);
    assert_eq!(*report.outcome(), Some(Outcome::Winner(Player::B)));
}

#[test]
fn test_replay_stops_at_win() {
    let moves = [
        Move::new(Player::A, c(0, 0)),
        Move::new(Player::B, c(0, 1)),
        Move::new(Player::A, c(1, 1)),
        Move::new(Player::B, c(0, 2)),
        Move::new(Player::A, c(2, 2)),
        Move::new(Player::B, c(2, 0)),
    ];

    let (engine, reports) = Engine::replay(Board::new(3).unwrap(), Rules::new(3).unwrap(), &moves);

    assert_eq!(reports.len(), 5);
    assert_eq!(engine.outcome(), Some(Outcome::Winner(Player::A)));
    assert_eq!(reports[4].line().map(|l| l.length), Some(3));
}

#[test]
fn test_move_report_serializes() {
    let mut engine = prepared(3, 3);
    let report = engine.play(c(1, 2));

    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["placed"], true);
    assert_eq!(json["attempted"]["coordinate"]["x"], 1);
    assert_eq!(json["next"], "B");
}
