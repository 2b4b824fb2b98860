//! Random games on a [`Board`].
//!
//! A playout alternates colors and plays uniformly random legal points until
//! both sides pass, the move limit is hit or the history stack is full. It is
//! used to stress the engine (`gochain bench`) and by the randomized tests,
//! which undo the whole game afterwards and expect the empty board back.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Color, Point};

/// Summary of one random game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    /// Stones placed.
    pub moves: usize,
    /// Turns where no legal point existed.
    pub passes: usize,
    /// Stones removed by captures.
    pub captures: usize,
    /// Moves that left a ko point behind.
    pub ko_points: usize,
}

/// Pick a random legal point for `color`, or `None` if there is none.
pub fn random_move(board: &Board, color: Color, rng: &mut Rng) -> Option<Point> {
    let mut candidates: Vec<Point> = board
        .points()
        .filter(|&pt| board.is_legal(pt, color).is_ok())
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let i = rng.usize(..candidates.len());
    Some(candidates.swap_remove(i))
}

/// Play a random game starting with Black.
///
/// Stops after two consecutive passes, `max_moves` placements, or once the
/// board's history depth is exhausted.
pub fn random_game(board: &mut Board, rng: &mut Rng, max_moves: usize) -> PlayoutStats {
    let mut stats = PlayoutStats::default();
    let mut color = Color::Black;
    let mut consecutive_passes = 0;

    while consecutive_passes < 2 && stats.moves < max_moves {
        let Some(pt) = random_move(board, color, rng) else {
            stats.passes += 1;
            consecutive_passes += 1;
            color = color.opponent();
            continue;
        };

        let before = board.prisoners(color);
        if let Err(err) = board.place(pt, color) {
            debug!(pt, %err, "playout stopped");
            break;
        }
        stats.moves += 1;
        stats.captures += board.prisoners(color) - before;
        if board.ko_point().is_some() {
            stats.ko_points += 1;
        }
        consecutive_passes = 0;
        color = color.opponent();
    }

    debug!(?stats, depth = board.depth(), "random game finished");
    stats
}

/// Undo every move on the history stack. Returns the number of moves undone.
pub fn unwind(board: &mut Board) -> usize {
    let mut undone = 0;
    while board.undo().is_ok() {
        undone += 1;
    }
    undone
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_game_is_reproducible() {
        let mut a = Board::new(7);
        let mut b = Board::new(7);
        let sa = random_game(&mut a, &mut Rng::with_seed(42), 200);
        let sb = random_game(&mut b, &mut Rng::with_seed(42), 200);
        assert_eq!(sa, sb);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_random_game_respects_history_limit() {
        let mut board = Board::with_max_history(5, 10);
        let stats = random_game(&mut board, &mut Rng::with_seed(7), 1000);
        assert_eq!(stats.moves, 10);
        assert_eq!(board.depth(), 10);
    }

    #[test]
    fn test_unwind_returns_to_empty() {
        let mut board = Board::new(5);
        let empty = board.render();
        let stats = random_game(&mut board, &mut Rng::with_seed(3), 60);
        assert_eq!(unwind(&mut board), stats.moves);
        assert_eq!(board.render(), empty);
        assert_eq!(board.prisoners(Color::Black), 0);
        assert_eq!(board.prisoners(Color::White), 0);
    }

    #[test]
    fn test_random_move_none_when_board_full_of_suicide() {
        // 1x1 board: the only point has no liberties at all.
        let board = Board::new(1);
        assert_eq!(random_move(&board, Color::Black, &mut Rng::with_seed(1)), None);
    }
}
