//! Randomized games checked move by move.
//!
//! Every placement is followed by a full consistency check, and the game is
//! then undone one move at a time, comparing against the state recorded
//! before each move.

use fastrand::Rng;

use gochain::board::{Board, Color, Point};
use gochain::playout::{random_game, random_move, unwind};

#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    render: String,
    prisoners: (usize, usize),
    ko: Option<Point>,
    depth: usize,
}

fn snapshot(board: &Board) -> Snapshot {
    Snapshot {
        render: board.render(),
        prisoners: (board.prisoners(Color::Black), board.prisoners(Color::White)),
        ko: board.ko_point(),
        depth: board.depth(),
    }
}

/// Play up to `max_moves` random legal moves, then undo them all, checking
/// every intermediate state.
fn play_and_unwind(size: usize, seed: u64, max_moves: usize) {
    let mut board = Board::new(size);
    let mut rng = Rng::with_seed(seed);
    let mut snapshots = Vec::new();
    let mut color = Color::Black;
    let mut passes = 0;

    while passes < 2 && snapshots.len() < max_moves {
        let Some(pt) = random_move(&board, color, &mut rng) else {
            passes += 1;
            color = color.opponent();
            continue;
        };
        passes = 0;
        snapshots.push(snapshot(&board));
        board
            .place(pt, color)
            .unwrap_or_else(|e| panic!("seed {seed}: legal move {pt} rejected: {e}"));
        if let Err(e) = board.check_consistency() {
            panic!("seed {seed}, move {}: {e}\n{board}", snapshots.len());
        }
        color = color.opponent();
    }

    while let Some(expected) = snapshots.pop() {
        board.undo().unwrap();
        if let Err(e) = board.check_consistency() {
            panic!("seed {seed}, undo to depth {}: {e}\n{board}", snapshots.len());
        }
        assert_eq!(snapshot(&board), expected, "seed {seed}");
    }
    assert_eq!(board.render(), Board::new(size).render());
}

#[test]
fn test_random_games_3x3() {
    for seed in 0..40 {
        play_and_unwind(3, seed, 200);
    }
}

#[test]
fn test_random_games_5x5() {
    for seed in 0..20 {
        play_and_unwind(5, seed, 300);
    }
}

#[test]
fn test_random_games_9x9() {
    for seed in 0..5 {
        play_and_unwind(9, seed, 400);
    }
}

#[test]
fn test_rejected_moves_leave_no_trace() {
    let mut board = Board::new(5);
    let mut rng = Rng::with_seed(11);
    random_game(&mut board, &mut rng, 40);

    let before = snapshot(&board);
    for pt in 0..board.cell_count() {
        for color in [Color::Black, Color::White] {
            if board.is_legal(pt, color).is_err() {
                assert!(board.place(pt, color).is_err());
                assert_eq!(snapshot(&board), before);
            }
        }
    }
    board.check_consistency().unwrap();
}

#[test]
fn test_board_reused_after_unwind() {
    let mut board = Board::new(7);
    let mut rng = Rng::with_seed(99);
    for _ in 0..10 {
        let stats = random_game(&mut board, &mut rng, 150);
        assert_eq!(unwind(&mut board), stats.moves);
        board.check_consistency().unwrap();
    }
    assert_eq!(board.render(), Board::new(7).render());
}
