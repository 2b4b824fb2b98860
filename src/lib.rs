//! gochain: an incremental Go board.
//!
//! This crate keeps a Go position up to date one stone at a time: chains of
//! connected stones and their liberties are maintained incrementally,
//! captures are executed as they happen, ko and suicide are enforced, and the
//! most recent moves can be undone exactly.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, history limits and render characters
//! - [`board`] - The engine: placement, legality, capture and undo
//! - [`chain`] - Member/liberty sets and the arena that owns them
//! - [`history`] - Move records and the bounded undo stack
//! - [`coord`] - Point ids to (row, column) and GTP vertices
//! - [`playout`] - Random legal games for stress runs
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use gochain::board::{Board, MoveError};
//!
//! // 3x3 board: points 5..=7, 9..=11 and 13..=15 are playable.
//! let mut board = Board::new(3);
//! board.place_black(5).unwrap();
//! board.place_white(6).unwrap();
//! board.place_black(10).unwrap();
//! board.place_white(9).unwrap(); // captures the black stone at 5
//! assert_eq!(board.render(), "####\n#.O.\n#OX.\n#...\n####\n");
//!
//! assert_eq!(board.place_white(10), Err(MoveError::PointOccupied));
//! board.undo().unwrap();
//! assert_eq!(board.render(), "####\n#XO.\n#.X.\n#...\n####\n");
//! ```

pub mod board;
pub mod chain;
pub mod constants;
pub mod coord;
pub mod gtp;
pub mod history;
pub mod playout;

pub use board::{Board, Cell, Color, MoveError, Point, UndoError};
