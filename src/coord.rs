//! Translation between point ids and human coordinates.
//!
//! The board itself only deals in flattened point ids. These helpers map
//! them to 1-based (row, column) pairs, where row 1 is the top interior row
//! of the padded array, and to GTP vertices such as `D4`, where row 1 is the
//! bottom of the board and the column letters skip `I`.

use thiserror::Error;

use crate::board::Point;
use crate::constants::{MAX_GTP_SIZE, row_width};

/// Column letters used by GTP (no 'I', to avoid confusion with 'J').
const COLUMNS: &[u8; MAX_GTP_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A parsed GTP vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vertex {
    Play(Point),
    Pass,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("invalid vertex {0:?}")]
    Malformed(String),
    #[error("vertex {0:?} is outside a {1}x{1} board")]
    OffBoard(String, usize),
}

/// Point id of the 1-based `row` and `col` on a board with row width `width`.
#[inline]
pub fn point(width: usize, row: usize, col: usize) -> Point {
    row * width + col
}

/// Inverse of [`point`].
#[inline]
pub fn row_col(width: usize, pt: Point) -> (usize, usize) {
    (pt / width, pt % width)
}

/// Parse a GTP vertex (e.g. "D4", "pass") for a board of `size`.
pub fn parse_vertex(s: &str, size: usize) -> Result<Vertex, CoordError> {
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Vertex::Pass);
    }

    let bytes = s.as_bytes();
    let malformed = || CoordError::Malformed(s.to_string());
    let (&letter, digits) = bytes.split_first().ok_or_else(malformed)?;
    let col = COLUMNS
        .iter()
        .position(|&c| c == letter.to_ascii_uppercase())
        .ok_or_else(malformed)?
        + 1;
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }
    let row: usize = s[1..].parse().map_err(|_| malformed())?;

    if col > size || row == 0 || row > size {
        return Err(CoordError::OffBoard(s.to_string(), size));
    }
    Ok(Vertex::Play(point(row_width(size), size - row + 1, col)))
}

/// Format a point id as a GTP vertex for a board of `size`.
pub fn vertex_string(pt: Point, size: usize) -> String {
    let (row, col) = row_col(row_width(size), pt);
    let letter = COLUMNS[col - 1] as char;
    format!("{letter}{}", size + 1 - row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_row_col() {
        assert_eq!(point(4, 1, 1), 5);
        assert_eq!(point(4, 2, 2), 10);
        assert_eq!(row_col(4, 15), (3, 3));
        assert_eq!(row_col(20, point(20, 7, 13)), (7, 13));
    }

    #[test]
    fn test_parse_corners() {
        // 3x3: A3 is the top-left interior point, C1 the bottom-right.
        assert_eq!(parse_vertex("A3", 3), Ok(Vertex::Play(5)));
        assert_eq!(parse_vertex("c1", 3), Ok(Vertex::Play(15)));
        assert_eq!(parse_vertex("PASS", 3), Ok(Vertex::Pass));
    }

    #[test]
    fn test_parse_skips_i() {
        let h5 = parse_vertex("H5", 19).unwrap();
        let j5 = parse_vertex("J5", 19).unwrap();
        match (h5, j5) {
            (Vertex::Play(h), Vertex::Play(j)) => assert_eq!(j - h, 1),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(parse_vertex("I5", 19), Err(CoordError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(parse_vertex("", 9), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("D", 9), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("D4x", 9), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("K4", 9), Err(CoordError::OffBoard(_, 9))));
        assert!(matches!(parse_vertex("D10", 9), Err(CoordError::OffBoard(_, 9))));
        assert!(matches!(parse_vertex("D0", 9), Err(CoordError::OffBoard(_, 9))));
    }

    #[test]
    fn test_vertex_roundtrip() {
        for size in [1, 9, 19, 25] {
            let width = row_width(size);
            for row in 1..=size {
                for col in 1..=size {
                    let pt = point(width, row, col);
                    let s = vertex_string(pt, size);
                    assert_eq!(parse_vertex(&s, size), Ok(Vertex::Play(pt)), "vertex {s}");
                }
            }
        }
    }
}
