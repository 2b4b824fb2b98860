//! Constants for board geometry, history limits and text rendering.
//!
//! The board is a 1D array with padding, like the layout below for size 3:
//!
//! ```text
//! # # # #     00 01 02 03
//! # . . .     04 05 06 07
//! # . . .     08 09 10 11
//! # . . .     12 13 14 15
//! # # # #     16 17 18 19
//! ```
//!
//! Row 0, the last row and the leading column of every row are walls, so
//! every playable point has four valid neighbours. The row width is
//! `size + 1`; the wall column of the next row doubles as the east edge.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board.
pub const MIN_SIZE: usize = 1;

/// Largest board the GTP vertex notation can address (A..Z without I).
pub const MAX_GTP_SIZE: usize = 25;

/// Default board size used by the binary.
pub const DEFAULT_SIZE: usize = 19;

/// Row width of the padded array for a playable `size`.
#[inline]
pub const fn row_width(size: usize) -> usize {
    size + 1
}

/// Number of cells in the padded array for a playable `size`.
#[inline]
pub const fn cell_count(size: usize) -> usize {
    (size + 2) * (size + 1)
}

/// "No point" marker. Index 0 is always a wall, so it never names a playable point.
pub const NO_POINT: usize = 0;

// =============================================================================
// History
// =============================================================================

/// Default number of moves that can be undone.
pub const DEFAULT_MAX_HISTORY: usize = 600;

// =============================================================================
// Rendering
// =============================================================================

/// Black stone.
pub const CHAR_BLACK: char = 'X';

/// White stone.
pub const CHAR_WHITE: char = 'O';

/// Empty point.
pub const CHAR_EMPTY: char = '.';

/// Wall (padding).
pub const CHAR_WALL: char = '#';
