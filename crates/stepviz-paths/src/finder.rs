use stepviz_core::{Error, Pos, Result};

use crate::traits::WeightedGrid;

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel index meaning "no predecessor".
pub(crate) const NO_PREV: usize = usize::MAX;

/// Search algorithm selector for [`PathFinder::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Exhaustive depth-first search; finds some path, not the shortest.
    Dfs,
    /// Breadth-first search; fewest edges, ignores weights.
    Bfs,
    /// Dijkstra; minimum total weighted cost.
    Dijkstra,
}

/// Outcome of a grid search.
///
/// `visited` is the order in which cells were expanded, for replay.
/// `path` runs from start to goal inclusive and is empty when the goal was
/// never reached; an empty path is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub visited: Vec<Pos>,
    pub path: Vec<Pos>,
    /// Final tentative distances; populated by Dijkstra only.
    pub distances: Option<DistanceMap>,
}

impl PathResult {
    /// Whether a route from start to goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Flat per-cell distance map produced by Dijkstra.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMap {
    rows: i32,
    cols: i32,
    data: Vec<i32>,
}

impl DistanceMap {
    pub(crate) fn new(rows: i32, cols: i32, data: Vec<i32>) -> Self {
        Self { rows, cols, data }
    }

    /// Distance at a cell, or [`UNREACHABLE`] if outside the grid or never
    /// reached by the search.
    pub fn at(&self, p: Pos) -> i32 {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return UNREACHABLE;
        }
        self.data[(p.row * self.cols + p.col) as usize]
    }
}

/// Total weighted cost of walking `path`, charging each step the cost of
/// entering its destination cell.
///
/// This is the single accounting convention used when comparing algorithms:
/// BFS and DFS paths are re-costed with the same rule rather than counting
/// edges.
pub fn path_cost<G: WeightedGrid>(grid: &G, path: &[Pos]) -> i32 {
    path.windows(2).map(|w| grid.cost(w[0], w[1])).sum()
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for grid searches.
///
/// Owns all internal caches (visited flags, predecessor array, distance
/// map, neighbor scratch buffer) so that repeated queries incur no
/// allocations after the first use.
pub struct PathFinder {
    rows: i32,
    cols: i32,
    width: usize,
    pub(crate) visited: Vec<bool>,
    pub(crate) prev: Vec<usize>,
    pub(crate) dist: Vec<i32>,
    pub(crate) visit_order: Vec<Pos>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pos>,
}

impl PathFinder {
    /// Create a new `PathFinder` for a `rows` x `cols` grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            rows,
            cols,
            width: cols.max(0) as usize,
            visited: vec![false; len],
            prev: vec![NO_PREV; len],
            dist: vec![UNREACHABLE; len],
            visit_order: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Run the selected algorithm from `start` to `goal`.
    pub fn solve<G: WeightedGrid>(
        &mut self,
        grid: &G,
        start: Pos,
        goal: Pos,
        algorithm: Algorithm,
    ) -> Result<PathResult> {
        log::debug!("solving {start} -> {goal} with {algorithm:?}");
        match algorithm {
            Algorithm::Dfs => self.dfs_path(grid, start, goal),
            Algorithm::Bfs => self.bfs_path(grid, start, goal),
            Algorithm::Dijkstra => self.dijkstra_path(grid, start, goal),
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Pos` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some(p.row as usize * self.width + p.col as usize)
    }

    /// Convert a flat index back to a `Pos`.
    #[inline]
    pub(crate) fn pos(&self, idx: usize) -> Pos {
        Pos::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    /// Bounds-check an endpoint, mapping failure to `InvalidIndex`.
    pub(crate) fn endpoint(&self, p: Pos) -> Result<usize> {
        self.idx(p).ok_or_else(|| Error::bad_cell(p.row, p.col))
    }

    /// Reset caches before a query.
    pub(crate) fn reset(&mut self) {
        for v in self.visited.iter_mut() {
            *v = false;
        }
        for v in self.prev.iter_mut() {
            *v = NO_PREV;
        }
        for v in self.dist.iter_mut() {
            *v = UNREACHABLE;
        }
        self.visit_order.clear();
    }

    /// Walk the predecessor chain backward from `goal_i`, then reverse.
    ///
    /// Only called once the goal has actually been expanded, so the chain
    /// is guaranteed to terminate at `start_i`.
    pub(crate) fn reconstruct(&self, start_i: usize, goal_i: usize) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut ci = goal_i;
        while ci != start_i {
            path.push(self.pos(ci));
            ci = self.prev[ci];
        }
        path.push(self.pos(start_i));
        path.reverse();
        path
    }

    /// Package the caches into an owned [`PathResult`].
    pub(crate) fn finish(
        &self,
        start_i: usize,
        goal_i: usize,
        reached: bool,
        with_distances: bool,
    ) -> PathResult {
        let path = if reached {
            self.reconstruct(start_i, goal_i)
        } else {
            Vec::new()
        };
        PathResult {
            visited: self.visit_order.clone(),
            path,
            distances: with_distances
                .then(|| DistanceMap::new(self.rows, self.cols, self.dist.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_round_trip() {
        let pf = PathFinder::new(4, 7);
        let p = Pos::new(2, 5);
        let i = pf.idx(p).unwrap();
        assert_eq!(pf.pos(i), p);
        assert_eq!(pf.idx(Pos::new(4, 0)), None);
        assert_eq!(pf.idx(Pos::new(0, 7)), None);
        assert_eq!(pf.idx(Pos::new(-1, 0)), None);
    }

    #[test]
    fn endpoint_rejects_out_of_bounds() {
        let pf = PathFinder::new(3, 3);
        let err = pf.endpoint(Pos::new(3, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex(_)));
    }

    #[test]
    fn distance_map_out_of_bounds_is_unreachable() {
        let dm = DistanceMap::new(2, 2, vec![0, 1, 2, UNREACHABLE]);
        assert_eq!(dm.at(Pos::new(0, 1)), 1);
        assert_eq!(dm.at(Pos::new(1, 1)), UNREACHABLE);
        assert_eq!(dm.at(Pos::new(5, 5)), UNREACHABLE);
    }
}
