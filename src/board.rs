//! The incremental Go board.
//!
//! [`Board`] accepts stones one at a time and keeps three views of the
//! position consistent after every call:
//! - the cell state of every point of the padded array,
//! - which chain owns each stone (a [`ChainId`] per point),
//! - the member and liberty sets of every chain.
//!
//! Placement merges friendly chains, removes enemy chains left without
//! liberties, then refreshes the liberties of every chain around the new
//! stone. Undo pops the last [`MoveHistory`] and rebuilds the few chains the
//! move touched with a local flood fill instead of replaying the game.
//!
//! Liberties are always recomputed by rescanning a chain's members rather than
//! patched with deltas, so merges and captures in the same move cannot leave a
//! stale entry behind.

use std::fmt;
use std::mem;

use thiserror::Error;
use tracing::{debug, trace};

use crate::chain::{Chain, ChainArena, ChainId};
use crate::constants::{
    CHAR_BLACK, CHAR_EMPTY, CHAR_WALL, CHAR_WHITE, DEFAULT_MAX_HISTORY, MIN_SIZE, NO_POINT,
    cell_count, row_width,
};
use crate::history::{Direction, History, MoveHistory};

/// A point on the board, represented as an index into the padded 1D array.
pub type Point = usize;

/// Stone color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// State of one cell of the padded array.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Black,
    White,
    Empty,
    Wall,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Black => CHAR_BLACK,
            Cell::White => CHAR_WHITE,
            Cell::Empty => CHAR_EMPTY,
            Cell::Wall => CHAR_WALL,
        }
    }

    /// The stone color in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Wall => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Reasons a placement is rejected. The board is untouched in every case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: history depth limit reached")]
    DepthExceeded,
    #[error("illegal move: point not empty")]
    PointOccupied,
    #[error("illegal move: retakes ko")]
    KoViolation,
    #[error("illegal move: suicide")]
    SuicideViolation,
}

/// Reasons an undo is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("no move to undo")]
    NoHistory,
}

/// A Go board with incremental chain and liberty tracking.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    width: usize,
    states: Vec<Cell>,
    /// Chain owning each stone; `None` for empty and wall cells.
    owner: Vec<Option<ChainId>>,
    /// Representative point of each stone's chain; 0 for empty and wall cells.
    chain_reps: Vec<Point>,
    chains: ChainArena,
    /// Ko point (0 if no ko)
    ko: Point,
    /// Stones captured by each color, indexed by `Color::index`.
    prisoners: [usize; 2],
    history: History,
    /// Stones removed by the move being played.
    captured: Vec<Point>,
    /// Flood fill stack and point buffer.
    scratch: Vec<Point>,
    /// Distinct chains collected for a liberty refresh.
    touched: Vec<ChainId>,
}

impl Board {
    /// Create an empty board of `size` x `size` playable points with the
    /// default history depth.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        Self::with_max_history(size, DEFAULT_MAX_HISTORY)
    }

    /// Create an empty board that can hold at most `max_history` moves.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn with_max_history(size: usize, max_history: usize) -> Self {
        assert!(size >= MIN_SIZE, "board size must be at least {MIN_SIZE}");
        let cells = cell_count(size);
        let mut board = Board {
            size,
            width: row_width(size),
            states: vec![Cell::Wall; cells],
            owner: vec![None; cells],
            chain_reps: vec![NO_POINT; cells],
            chains: ChainArena::new(cells, size * size),
            ko: NO_POINT,
            prisoners: [0; 2],
            history: History::new(max_history),
            captured: Vec::with_capacity(size * size),
            scratch: Vec::with_capacity(size * size),
            touched: Vec::new(),
        };
        board.init_states();
        board
    }

    /// Mark the border as wall and the interior as empty.
    fn init_states(&mut self) {
        let last_row = self.size + 1;
        for (i, state) in self.states.iter_mut().enumerate() {
            let row = i / self.width;
            let col = i % self.width;
            *state = if row == 0 || row == last_row || col == 0 {
                Cell::Wall
            } else {
                Cell::Empty
            };
        }
    }

    /// Reset to the empty board, keeping the size and history limit.
    pub fn clear(&mut self) {
        self.init_states();
        self.owner.fill(None);
        self.chain_reps.fill(NO_POINT);
        self.chains.reset();
        self.ko = NO_POINT;
        self.prisoners = [0; 2];
        self.history.clear();
        debug!(size = self.size, "board cleared");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row width of the padded array (`size + 1`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells in the padded array.
    pub fn cell_count(&self) -> usize {
        self.states.len()
    }

    /// Number of moves that can currently be undone.
    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    pub fn max_history(&self) -> usize {
        self.history.max()
    }

    pub fn cell(&self, pt: Point) -> Cell {
        self.states[pt]
    }

    pub fn color_at(&self, pt: Point) -> Option<Color> {
        self.states[pt].color()
    }

    pub fn ko_point(&self) -> Option<Point> {
        (self.ko != NO_POINT).then_some(self.ko)
    }

    /// Number of stones `color` has captured.
    pub fn prisoners(&self, color: Color) -> usize {
        self.prisoners[color.index()]
    }

    /// The most recent move still on the history stack.
    pub fn last_move(&self) -> Option<(Color, Point)> {
        self.history.last().map(|h| (h.color, h.point))
    }

    /// Move records from the first move to the latest.
    pub fn moves(&self) -> impl Iterator<Item = &MoveHistory> {
        self.history.iter()
    }

    /// All playable points, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (size, width) = (self.size, self.width);
        (1..=size).flat_map(move |row| (1..=size).map(move |col| row * width + col))
    }

    /// Representative point of the chain owning the stone at `pt`.
    ///
    /// Two stones belong to the same chain exactly when their representatives
    /// are equal.
    pub fn chain_rep(&self, pt: Point) -> Option<Point> {
        self.owner[pt].map(|_| self.chain_reps[pt])
    }

    fn chain_at(&self, pt: Point) -> Option<&Chain> {
        self.owner[pt].map(|id| self.chains.get(id))
    }

    /// Number of stones in the chain at `pt` (0 if `pt` holds no stone).
    pub fn chain_size(&self, pt: Point) -> usize {
        self.chain_at(pt).map_or(0, Chain::num_points)
    }

    /// Number of liberties of the chain at `pt` (0 if `pt` holds no stone).
    pub fn liberty_count(&self, pt: Point) -> usize {
        self.chain_at(pt).map_or(0, Chain::num_liberties)
    }

    /// Stones of the chain at `pt`, sorted.
    pub fn chain_points(&self, pt: Point) -> Vec<Point> {
        let mut pts = self.chain_at(pt).map_or_else(Vec::new, |c| c.points().to_vec());
        pts.sort_unstable();
        pts
    }

    /// Liberties of the chain at `pt`, sorted.
    pub fn chain_liberties(&self, pt: Point) -> Vec<Point> {
        let mut libs = self.chain_at(pt).map_or_else(Vec::new, |c| c.liberties().to_vec());
        libs.sort_unstable();
        libs
    }

    /// Text dump of the whole padded array, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Get the 4 orthogonal neighbors (N, E, S, W) of a point.
    #[inline]
    fn neighbors(&self, pt: Point) -> [Point; 4] {
        Direction::ALL.map(|dir| dir.step(pt, self.width))
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Put a black stone on `pt`.
    pub fn place_black(&mut self, pt: Point) -> Result<(), MoveError> {
        self.place(pt, Color::Black)
    }

    /// Put a white stone on `pt`.
    pub fn place_white(&mut self, pt: Point) -> Result<(), MoveError> {
        self.place(pt, Color::White)
    }

    /// Put a stone of `color` on `pt`.
    ///
    /// All legality checks run before anything is modified, so on error the
    /// board is exactly as it was.
    ///
    /// `pt` must be an index into the padded array; wall cells are rejected as
    /// occupied.
    pub fn place(&mut self, pt: Point, color: Color) -> Result<(), MoveError> {
        if let Err(err) = self.is_legal(pt, color) {
            debug!(pt, %color, %err, "move rejected");
            return Err(err);
        }

        let own = Cell::from(color);
        let mut record = MoveHistory::new(color, pt, self.ko);
        self.captured.clear();

        let chain = self.chains.alloc();
        self.chains.get_mut(chain).add_point(pt);

        for dir in Direction::ALL {
            let n = dir.step(pt, self.width);
            let state = self.states[n];
            if state == Cell::Empty {
                self.chains.get_mut(chain).add_liberty(n);
                continue;
            }
            let Some(nbr) = self.owner[n] else {
                continue;
            };
            if state == own {
                if !self.chains.get(chain).has_point(n) {
                    let (target, source) = self.chains.pair_mut(chain, nbr);
                    target.join(source);
                    self.install(chain, color);
                }
            } else if self.chains.get(nbr).num_liberties() == 1 {
                self.capture(nbr, color);
                record.captures.set(dir);
            }
        }

        self.install(chain, color);
        self.refresh_neighbors_of_chain(chain);

        let stones = self.chains.get(chain).num_points();
        self.ko = if self.captured.len() == 1 && stones == 1 {
            self.captured[0]
        } else {
            NO_POINT
        };

        self.history.push(record);
        trace!(
            pt,
            %color,
            captured = self.captured.len(),
            depth = self.history.depth(),
            "stone placed"
        );
        Ok(())
    }

    /// Check whether `color` may play at `pt`, without changing anything.
    ///
    /// Checks run in order: history depth, occupancy, ko, suicide.
    pub fn is_legal(&self, pt: Point, color: Color) -> Result<(), MoveError> {
        if self.history.is_full() {
            return Err(MoveError::DepthExceeded);
        }
        if self.states[pt] != Cell::Empty {
            return Err(MoveError::PointOccupied);
        }
        if self.is_ko(pt, color) {
            return Err(MoveError::KoViolation);
        }
        if self.is_suicide(pt, color) {
            return Err(MoveError::SuicideViolation);
        }
        Ok(())
    }

    /// Retaking at the ko point is forbidden unless the stone joins a friendly
    /// chain that keeps two or more liberties (filling one's own ko at the end
    /// of the game).
    fn is_ko(&self, pt: Point, color: Color) -> bool {
        pt == self.ko && !self.has_adjacent_chain(pt, color, |libs| libs >= 2)
    }

    fn is_suicide(&self, pt: Point, color: Color) -> bool {
        let has_empty = self
            .neighbors(pt)
            .iter()
            .any(|&n| self.states[n] == Cell::Empty);
        !(has_empty
            || self.has_adjacent_chain(pt, color, |libs| libs >= 2)
            || self.has_adjacent_chain(pt, color.opponent(), |libs| libs == 1))
    }

    /// Is some neighbor of `pt` a `color` chain whose liberty count passes `test`?
    fn has_adjacent_chain(&self, pt: Point, color: Color, test: impl Fn(usize) -> bool) -> bool {
        let cell = Cell::from(color);
        self.neighbors(pt).iter().any(|&n| {
            self.states[n] == cell
                && self
                    .chain_at(n)
                    .is_some_and(|c| test(c.num_liberties()))
        })
    }

    /// Remove the chain `id` from the board and credit its stones to `by`.
    fn capture(&mut self, id: ChainId, by: Color) {
        let start = self.captured.len();
        self.captured.extend_from_slice(self.chains.get(id).points());
        let end = self.captured.len();

        for i in start..end {
            let pt = self.captured[i];
            self.set_empty(pt);
        }
        self.prisoners[by.index()] += end - start;

        let removed = mem::take(&mut self.captured);
        self.refresh_neighbors(&removed[start..end]);
        self.captured = removed;
    }

    // =========================================================================
    // Undo
    // =========================================================================

    /// Take back the most recent move.
    pub fn undo(&mut self) -> Result<(), UndoError> {
        let Some(record) = self.history.pop() else {
            debug!("undo rejected: no history");
            return Err(UndoError::NoHistory);
        };
        let MoveHistory {
            color,
            point: pt,
            ko_point,
            captures,
        } = record;
        let own = Cell::from(color);
        let enemy = color.opponent();

        self.set_empty(pt);

        let mut restored = 0;
        for dir in Direction::ALL {
            let n = dir.step(pt, self.width);
            let state = self.states[n];
            if state == Cell::from(enemy) {
                if let Some(id) = self.owner[n] {
                    self.chains.get_mut(id).add_liberty(pt);
                }
            } else if state == own {
                // Chains still listing `pt` were merged by this move; a chain
                // rebuilt from an earlier direction no longer does.
                if self.owner[n].is_some_and(|id| self.chains.get(id).has_point(pt)) {
                    let id = self.reconstruct(n, own, pt);
                    self.install(id, color);
                }
            }

            if captures.contains(dir) {
                let id = self.reconstruct(n, Cell::Empty, pt);
                let stones = self.chains.get(id).num_points();
                self.install(id, enemy);
                self.refresh_neighbors_of_chain(id);
                self.prisoners[color.index()] -= stones;
                restored += stones;
            }
        }

        self.ko = ko_point;
        trace!(pt, %color, restored, depth = self.history.depth(), "move undone");
        Ok(())
    }

    /// Flood fill the cells in state `cell` connected to `start`, never
    /// crossing `exclude`, into a fresh chain that no point owns yet.
    fn reconstruct(&mut self, start: Point, cell: Cell, exclude: Point) -> ChainId {
        let id = self.chains.alloc();
        let mut stack = mem::take(&mut self.scratch);
        stack.clear();

        self.chains.get_mut(id).add_point(start);
        stack.push(start);
        while let Some(pt) = stack.pop() {
            for n in self.neighbors(pt) {
                if n != exclude && self.states[n] == cell && !self.chains.get(id).has_point(n) {
                    self.chains.get_mut(id).add_point(n);
                    stack.push(n);
                }
            }
        }

        self.scratch = stack;
        id
    }

    // =========================================================================
    // Chain bookkeeping
    // =========================================================================

    /// Paint every member of `id` with `color`, point them at `id` and
    /// recompute the chain's liberties.
    fn install(&mut self, id: ChainId, color: Color) {
        let cell = Cell::from(color);
        let Some(rep) = self.chains.get(id).rep() else {
            self.chains.discard(id);
            return;
        };
        for i in 0..self.chains.get(id).num_points() {
            let pt = self.chains.get(id).points()[i];
            self.states[pt] = cell;
            self.set_owner(pt, Some(id));
            self.chain_reps[pt] = rep;
        }
        self.refresh_liberties(id);
    }

    fn set_empty(&mut self, pt: Point) {
        self.states[pt] = Cell::Empty;
        self.set_owner(pt, None);
        self.chain_reps[pt] = NO_POINT;
    }

    fn set_owner(&mut self, pt: Point, id: Option<ChainId>) {
        let old = self.owner[pt];
        if old == id {
            return;
        }
        if let Some(new) = id {
            self.chains.retain(new);
        }
        self.owner[pt] = id;
        if let Some(old) = old {
            self.chains.release(old);
        }
    }

    /// Recompute the liberties of `id` from its members' neighbours.
    fn refresh_liberties(&mut self, id: ChainId) {
        let chain = self.chains.get_mut(id);
        for i in 0..chain.num_points() {
            let pt = chain.points()[i];
            for dir in Direction::ALL {
                let n = dir.step(pt, self.width);
                if self.states[n] == Cell::Empty {
                    chain.add_liberty(n);
                } else {
                    chain.remove_liberty(n);
                }
            }
        }
    }

    fn refresh_neighbors_of_chain(&mut self, id: ChainId) {
        let mut pts = mem::take(&mut self.scratch);
        pts.clear();
        pts.extend_from_slice(self.chains.get(id).points());
        self.refresh_neighbors(&pts);
        self.scratch = pts;
    }

    /// Recompute the liberties of every distinct chain next to any of `pts`.
    fn refresh_neighbors(&mut self, pts: &[Point]) {
        let mut touched = mem::take(&mut self.touched);
        touched.clear();
        for &pt in pts {
            for n in self.neighbors(pt) {
                if let Some(id) = self.owner[n] {
                    if !touched.contains(&id) {
                        touched.push(id);
                    }
                }
            }
        }
        for &id in &touched {
            self.refresh_liberties(id);
        }
        self.touched = touched;
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Verify every bookkeeping invariant from scratch.
    ///
    /// Returns a description of the first violation found. Intended for tests
    /// and debugging; it walks the whole board.
    pub fn check_consistency(&self) -> Result<(), String> {
        if self.history.depth() > self.history.max() {
            return Err(format!(
                "depth {} exceeds limit {}",
                self.history.depth(),
                self.history.max()
            ));
        }
        if self.ko != NO_POINT && self.states[self.ko] != Cell::Empty {
            return Err(format!("ko point {} is not empty", self.ko));
        }

        let mut owners: Vec<ChainId> = Vec::new();
        for pt in 0..self.states.len() {
            let state = self.states[pt];
            let Some(color) = state.color() else {
                if self.owner[pt].is_some() {
                    return Err(format!("{state:?} cell {pt} has an owner"));
                }
                continue;
            };
            let Some(id) = self.owner[pt] else {
                return Err(format!("{color} stone {pt} has no chain"));
            };
            let chain = self.chains.get(id);
            if !chain.has_point(pt) {
                return Err(format!("chain of {pt} does not contain it"));
            }
            if chain.rep() != Some(self.chain_reps[pt]) {
                return Err(format!("representative of {pt} is stale"));
            }
            if !owners.contains(&id) {
                owners.push(id);
                self.check_chain(id, state)?;
            }
            for n in self.neighbors(pt) {
                if self.states[n] == state && self.owner[n] != Some(id) {
                    return Err(format!("adjacent {color} stones {pt} and {n} in different chains"));
                }
            }
        }

        if self.chains.live() != owners.len() {
            return Err(format!(
                "{} live chain slots but {} chains on the board",
                self.chains.live(),
                owners.len()
            ));
        }
        Ok(())
    }

    fn check_chain(&self, id: ChainId, state: Cell) -> Result<(), String> {
        let chain = self.chains.get(id);
        if self.chains.refs(id) != chain.num_points() {
            return Err(format!(
                "chain {} has {} members but {} references",
                id.index(),
                chain.num_points(),
                self.chains.refs(id)
            ));
        }
        let mut expected: Vec<Point> = Vec::new();
        for &pt in chain.points() {
            if self.states[pt] != state || self.owner[pt] != Some(id) {
                return Err(format!("member {pt} of chain {} is not owned by it", id.index()));
            }
            for n in self.neighbors(pt) {
                if self.states[n] == Cell::Empty && !expected.contains(&n) {
                    expected.push(n);
                }
            }
        }
        let actual = chain.liberties();
        if actual.len() != expected.len() || !expected.iter().all(|&n| chain.has_liberty(n)) {
            let mut actual = actual.to_vec();
            actual.sort_unstable();
            expected.sort_unstable();
            return Err(format!(
                "chain {} liberties {actual:?}, expected {expected:?}",
                id.index()
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            write!(f, "{}", state.to_char())?;
            if (i + 1) % self.width == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_layout() {
        let board = Board::new(3);
        assert_eq!(board.render(), "####\n#...\n#...\n#...\n####\n");
        assert_eq!(board.cell_count(), 20);
        assert_eq!(board.width(), 4);
        assert_eq!(board.points().collect::<Vec<_>>(), vec![5, 6, 7, 9, 10, 11, 13, 14, 15]);
        assert_eq!(board.depth(), 0);
        assert_eq!(board.ko_point(), None);
        assert_eq!(board.max_history(), DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn test_single_stone_liberties() {
        let mut board = Board::new(3);
        board.place_black(10).unwrap();
        assert_eq!(board.chain_liberties(10), vec![6, 9, 11, 14]);

        // Corner stone only sees two liberties thanks to the wall.
        board.place_white(5).unwrap();
        assert_eq!(board.chain_liberties(5), vec![6, 9]);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_neighbour_loses_liberty() {
        let mut board = Board::new(3);
        board.place_black(10).unwrap();
        board.place_white(11).unwrap();
        assert_eq!(board.chain_liberties(10), vec![6, 9, 14]);
        assert_eq!(board.chain_liberties(11), vec![7, 15]);
    }

    #[test]
    fn test_merge_links_chains() {
        let mut board = Board::new(3);
        board.place_black(5).unwrap();
        board.place_black(7).unwrap();
        board.place_black(6).unwrap();
        assert_eq!(board.chain_points(5), vec![5, 6, 7]);
        assert_eq!(board.chain_rep(5), board.chain_rep(7));
        assert_eq!(board.chain_liberties(7), vec![9, 10, 11]);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_wall_is_occupied() {
        let mut board = Board::new(3);
        assert_eq!(board.place_black(0), Err(MoveError::PointOccupied));
        assert_eq!(board.place_black(8), Err(MoveError::PointOccupied));
        assert_eq!(board.depth(), 0);
    }

    #[test]
    fn test_occupied_point_rejected() {
        let mut board = Board::new(3);
        board.place_black(5).unwrap();
        let before = board.render();
        assert_eq!(board.place_white(5), Err(MoveError::PointOccupied));
        assert_eq!(board.render(), before);
        assert_eq!(board.depth(), 1);
    }

    #[test]
    fn test_corner_suicide() {
        let mut board = Board::new(3);
        board.place_black(6).unwrap();
        board.place_black(9).unwrap();
        let before = board.render();
        assert_eq!(board.is_legal(5, Color::White), Err(MoveError::SuicideViolation));
        assert_eq!(board.place_white(5), Err(MoveError::SuicideViolation));
        assert_eq!(board.render(), before);
        // Filling one's own eye is allowed while the chain keeps liberties.
        assert_eq!(board.is_legal(5, Color::Black), Ok(()));
    }

    #[test]
    fn test_capture_updates_prisoners() {
        let mut board = Board::new(3);
        board.place_white(5).unwrap();
        board.place_black(6).unwrap();
        board.place_black(9).unwrap();
        assert_eq!(board.cell(5), Cell::Empty);
        assert_eq!(board.prisoners(Color::Black), 1);
        assert_eq!(board.prisoners(Color::White), 0);
        assert_eq!(board.chain_liberties(9), vec![5, 10, 13]);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_undo_without_history() {
        let mut board = Board::new(3);
        assert_eq!(board.undo(), Err(UndoError::NoHistory));
    }

    #[test]
    fn test_undo_restores_capture() {
        let mut board = Board::new(3);
        board.place_white(5).unwrap();
        board.place_black(6).unwrap();
        let before = board.render();
        board.place_black(9).unwrap();
        board.undo().unwrap();
        assert_eq!(board.render(), before);
        assert_eq!(board.prisoners(Color::Black), 0);
        assert_eq!(board.chain_liberties(5), vec![9]);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = Board::with_max_history(3, 10);
        board.place_white(5).unwrap();
        board.place_black(6).unwrap();
        board.place_black(9).unwrap();
        board.clear();
        assert_eq!(board.render(), Board::new(3).render());
        assert_eq!(board.depth(), 0);
        assert_eq!(board.prisoners(Color::Black), 0);
        assert_eq!(board.max_history(), 10);
        assert!(board.check_consistency().is_ok());
        board.place_black(5).unwrap();
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_last_move() {
        let mut board = Board::new(5);
        assert_eq!(board.last_move(), None);
        board.place_white(8).unwrap();
        assert_eq!(board.last_move(), Some((Color::White, 8)));
        assert_eq!(board.moves().count(), 1);
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        let _ = Board::new(0);
    }
}
