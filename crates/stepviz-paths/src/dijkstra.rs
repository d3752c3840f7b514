use std::collections::BinaryHeap;

use stepviz_core::Pos;
use stepviz_core::Result;

use crate::PathFinder;
use crate::finder::{PathResult, UNREACHABLE};
use crate::traits::WeightedGrid;

/// Reference into the distance array, ordered by `dist` for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct FrontierRef {
    idx: usize,
    dist: i32,
}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first.
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PathFinder {
    /// Dijkstra search from `start` to `goal`.
    ///
    /// Relaxation charges `dist[current] + cost(current, neighbor)`: the
    /// cost of *entering* the neighbor cell. Cells are finalized on pop;
    /// stale heap entries are skipped. Guarantees the minimum total
    /// weighted cost path, and exposes the final distance map in the
    /// result.
    pub fn dijkstra_path<G: WeightedGrid>(
        &mut self,
        grid: &G,
        start: Pos,
        goal: Pos,
    ) -> Result<PathResult> {
        let si = self.endpoint(start)?;
        let gi = self.endpoint(goal)?;
        self.reset();

        let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();
        self.dist[si] = 0;
        open.push(FrontierRef { idx: si, dist: 0 });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.visited[ci] {
                continue; // stale entry
            }
            self.visited[ci] = true;
            let cp = self.pos(ci);
            self.visit_order.push(cp);

            if ci == gi {
                reached = true;
                break;
            }
            let current_dist = self.dist[ci];

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                let tentative = current_dist + grid.cost(cp, np);
                if self.dist[ni] == UNREACHABLE || tentative < self.dist[ni] {
                    self.dist[ni] = tentative;
                    self.prev[ni] = ci;
                    open.push(FrontierRef {
                        idx: ni,
                        dist: tentative,
                    });
                }
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(si, gi, reached, true))
    }
}
