//! Chains of connected stones and the arena that owns them.
//!
//! A [`Chain`] keeps two sets, its member stones and its liberties. Each set is
//! a dense list plus a point→slot index over the whole padded board, which
//! gives O(1) membership tests, insertion and removal.
//!
//! Chains live in a [`ChainArena`]. Every board point owned by a chain holds
//! a [`ChainId`] into the arena and counts as one reference; a slot returns to
//! the free list as soon as its last point lets go of it.

use crate::board::Point;

/// Marker for "not in the set" in the point→slot indices.
const NO_SLOT: usize = usize::MAX;

/// Handle of a chain slot inside a [`ChainArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChainId(usize);

impl ChainId {
    /// Raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A set of member points and a set of liberty points.
#[derive(Clone, Debug)]
pub struct Chain {
    /// Upper bound on members and liberties (the playable area).
    capacity: usize,
    points: Vec<Point>,
    point_slots: Vec<usize>,
    liberties: Vec<Point>,
    liberty_slots: Vec<usize>,
}

impl Chain {
    /// Create an empty chain for a board with `cells` padded cells and
    /// `capacity` playable points.
    pub fn new(cells: usize, capacity: usize) -> Self {
        Self {
            capacity,
            points: Vec::with_capacity(capacity),
            point_slots: vec![NO_SLOT; cells],
            liberties: Vec::with_capacity(capacity),
            liberty_slots: vec![NO_SLOT; cells],
        }
    }

    /// Add a member. Does nothing if `pt` is already a member.
    pub fn add_point(&mut self, pt: Point) {
        if self.point_slots[pt] != NO_SLOT {
            return;
        }
        debug_assert!(self.points.len() < self.capacity, "chain exceeds board area");
        self.point_slots[pt] = self.points.len();
        self.points.push(pt);
    }

    /// Add a liberty. Does nothing if `pt` is already a liberty.
    pub fn add_liberty(&mut self, pt: Point) {
        if self.liberty_slots[pt] != NO_SLOT {
            return;
        }
        debug_assert!(self.liberties.len() < self.capacity, "chain exceeds board area");
        self.liberty_slots[pt] = self.liberties.len();
        self.liberties.push(pt);
    }

    pub fn has_point(&self, pt: Point) -> bool {
        self.point_slots[pt] != NO_SLOT
    }

    pub fn has_liberty(&self, pt: Point) -> bool {
        self.liberty_slots[pt] != NO_SLOT
    }

    /// Remove a liberty by moving the last liberty into its slot.
    /// Does nothing if `pt` is not a liberty.
    pub fn remove_liberty(&mut self, pt: Point) {
        let slot = self.liberty_slots[pt];
        if slot == NO_SLOT {
            return;
        }
        self.liberties.swap_remove(slot);
        if let Some(&moved) = self.liberties.get(slot) {
            self.liberty_slots[moved] = slot;
        }
        self.liberty_slots[pt] = NO_SLOT;
    }

    /// Copy every member of `other` into this chain.
    ///
    /// Liberties are not copied; the caller recomputes them for the merged
    /// result so no stale entry survives the merge.
    pub fn join(&mut self, other: &Chain) {
        for &pt in &other.points {
            self.add_point(pt);
        }
    }

    /// Empty both sets, keeping the allocations. O(members + liberties).
    pub fn clear(&mut self) {
        for &pt in &self.points {
            self.point_slots[pt] = NO_SLOT;
        }
        for &pt in &self.liberties {
            self.liberty_slots[pt] = NO_SLOT;
        }
        self.points.clear();
        self.liberties.clear();
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    /// Members in insertion order. The first member is the chain's representative.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn liberties(&self) -> &[Point] {
        &self.liberties
    }

    /// Representative point (first member), if the chain has any member.
    pub fn rep(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

/// Slot storage for chains, addressed by [`ChainId`].
///
/// Each slot carries a reference count equal to the number of board points
/// currently pointing at it. Slots whose count drops to zero are cleared and
/// recycled by the next [`ChainArena::alloc`].
#[derive(Clone, Debug)]
pub struct ChainArena {
    cells: usize,
    capacity: usize,
    chains: Vec<Chain>,
    refs: Vec<usize>,
    free: Vec<ChainId>,
}

impl ChainArena {
    pub fn new(cells: usize, capacity: usize) -> Self {
        Self {
            cells,
            capacity,
            chains: Vec::new(),
            refs: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Hand out an empty chain. It has no references until a point adopts it.
    pub fn alloc(&mut self) -> ChainId {
        if let Some(id) = self.free.pop() {
            return id;
        }
        self.chains.push(Chain::new(self.cells, self.capacity));
        self.refs.push(0);
        ChainId(self.chains.len() - 1)
    }

    /// Record one more point referencing `id`.
    pub fn retain(&mut self, id: ChainId) {
        self.refs[id.0] += 1;
    }

    /// Drop one point's reference to `id`, retiring the slot when none remain.
    pub fn release(&mut self, id: ChainId) {
        let refs = &mut self.refs[id.0];
        debug_assert!(*refs > 0, "releasing unreferenced chain {id:?}");
        *refs -= 1;
        if *refs == 0 {
            self.chains[id.0].clear();
            self.free.push(id);
        }
    }

    /// Retire a chain that no point ever adopted.
    pub fn discard(&mut self, id: ChainId) {
        debug_assert_eq!(self.refs[id.0], 0);
        self.chains[id.0].clear();
        self.free.push(id);
    }

    pub fn refs(&self, id: ChainId) -> usize {
        self.refs[id.0]
    }

    pub fn get(&self, id: ChainId) -> &Chain {
        &self.chains[id.0]
    }

    pub fn get_mut(&mut self, id: ChainId) -> &mut Chain {
        &mut self.chains[id.0]
    }

    /// Mutable access to `target` together with shared access to `source`.
    ///
    /// # Panics
    /// Panics if both ids name the same slot.
    pub fn pair_mut(&mut self, target: ChainId, source: ChainId) -> (&mut Chain, &Chain) {
        assert_ne!(target, source, "pair_mut needs two distinct chains");
        if target.0 < source.0 {
            let (lo, hi) = self.chains.split_at_mut(source.0);
            (&mut lo[target.0], &hi[0])
        } else {
            let (lo, hi) = self.chains.split_at_mut(target.0);
            (&mut hi[0], &lo[source.0])
        }
    }

    /// Number of slots currently referenced by at least one point.
    pub fn live(&self) -> usize {
        self.refs.iter().filter(|&&r| r > 0).count()
    }

    /// Reset every slot to the free list.
    pub fn reset(&mut self) {
        self.free.clear();
        for (i, chain) in self.chains.iter_mut().enumerate().rev() {
            chain.clear();
            self.refs[i] = 0;
            self.free.push(ChainId(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Chain {
        // size 3 board: 20 cells, 9 playable points
        Chain::new(20, 9)
    }

    #[test]
    fn test_add_point_is_idempotent() {
        let mut c = chain();
        c.add_point(5);
        c.add_point(5);
        c.add_point(6);
        assert_eq!(c.points(), &[5, 6]);
        assert!(c.has_point(5));
        assert!(!c.has_point(9));
        assert_eq!(c.rep(), Some(5));
    }

    #[test]
    fn test_remove_liberty_swaps_last() {
        let mut c = chain();
        for pt in [5, 6, 7, 9] {
            c.add_liberty(pt);
        }
        c.remove_liberty(6);
        assert_eq!(c.liberties(), &[5, 9, 7]);
        assert!(!c.has_liberty(6));
        assert!(c.has_liberty(9));

        // The moved entry must still be removable through its new slot.
        c.remove_liberty(9);
        assert_eq!(c.liberties(), &[5, 7]);

        c.remove_liberty(7);
        c.remove_liberty(5);
        assert_eq!(c.num_liberties(), 0);

        // Removing an absent liberty is a no-op.
        c.remove_liberty(11);
        assert_eq!(c.num_liberties(), 0);
    }

    #[test]
    fn test_join_copies_members_only() {
        let mut a = chain();
        a.add_point(5);
        a.add_liberty(9);
        let mut b = chain();
        b.add_point(6);
        b.add_point(7);
        b.add_liberty(11);

        a.join(&b);
        assert_eq!(a.points(), &[5, 6, 7]);
        assert_eq!(a.liberties(), &[9]);
    }

    #[test]
    fn test_clear_resets_indices() {
        let mut c = chain();
        c.add_point(5);
        c.add_liberty(6);
        c.clear();
        assert!(!c.has_point(5));
        assert!(!c.has_liberty(6));
        c.add_point(6);
        assert_eq!(c.points(), &[6]);
    }

    #[test]
    fn test_arena_recycles_released_slots() {
        let mut arena = ChainArena::new(20, 9);
        let a = arena.alloc();
        arena.get_mut(a).add_point(5);
        arena.retain(a);
        arena.retain(a);
        assert_eq!(arena.live(), 1);

        arena.release(a);
        assert_eq!(arena.refs(a), 1);
        arena.release(a);
        assert_eq!(arena.live(), 0);

        // The retired slot comes back cleared.
        let b = arena.alloc();
        assert_eq!(a, b);
        assert_eq!(arena.get(b).num_points(), 0);
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut arena = ChainArena::new(20, 9);
        let a = arena.alloc();
        let b = arena.alloc();
        arena.get_mut(b).add_point(9);

        let (target, source) = arena.pair_mut(a, b);
        target.join(source);
        assert_eq!(arena.get(a).points(), &[9]);

        arena.get_mut(a).add_point(10);
        let (target, source) = arena.pair_mut(b, a);
        target.join(source);
        assert_eq!(arena.get(b).points(), &[9, 10]);
    }
}
