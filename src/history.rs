//! Move records used to undo placements.
//!
//! A [`MoveHistory`] stores just enough to take a move back without
//! replaying the game: who played where, the ko point that was in effect
//! before the move, and which of the four directions led to a capture.

use crate::board::{Color, Point};

/// The four orthogonal directions, in the order neighbours are visited.
///
/// This order is also the bit order of [`CaptureMask`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in visiting order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The neighbour of `pt` in this direction on a board with row width `width`.
    #[inline]
    pub fn step(self, pt: Point, width: usize) -> Point {
        match self {
            Direction::North => pt - width,
            Direction::East => pt + 1,
            Direction::South => pt + width,
            Direction::West => pt - 1,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Four-bit set of directions in which a move captured a chain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureMask(u8);

impl CaptureMask {
    pub fn set(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

/// Record of one accepted move. Never modified after it is pushed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveHistory {
    pub color: Color,
    pub point: Point,
    /// Ko point before the move was played (0 if none).
    pub ko_point: Point,
    pub captures: CaptureMask,
}

impl MoveHistory {
    pub fn new(color: Color, point: Point, ko_point: Point) -> Self {
        Self {
            color,
            point,
            ko_point,
            captures: CaptureMask::default(),
        }
    }
}

/// Bounded stack of move records. The stack length is the board's depth.
#[derive(Clone, Debug)]
pub struct History {
    max: usize,
    moves: Vec<MoveHistory>,
}

impl History {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            moves: Vec::with_capacity(max),
        }
    }

    pub fn is_full(&self) -> bool {
        self.moves.len() >= self.max
    }

    /// Push a record. The caller has already checked [`History::is_full`].
    pub fn push(&mut self, record: MoveHistory) {
        debug_assert!(!self.is_full(), "history overflow");
        self.moves.push(record);
    }

    pub fn pop(&mut self) -> Option<MoveHistory> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&MoveHistory> {
        self.moves.last()
    }

    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Records from the first move to the latest.
    pub fn iter(&self) -> impl Iterator<Item = &MoveHistory> {
        self.moves.iter()
    }
}
