use stepviz_core::Pos;
use stepviz_core::Result;

use crate::PathFinder;
use crate::finder::PathResult;
use crate::traits::PathGrid;

impl PathFinder {
    /// Depth-first search from `start` to `goal`.
    ///
    /// Exploration is biased toward the goal: on expansion, neighbors are
    /// sorted by Manhattan distance to the goal and pushed so the nearest
    /// ends on top of the stack. The bias is a heuristic, not a guarantee;
    /// the returned path is *some* path, not necessarily the shortest.
    ///
    /// Cells are marked visited on pop (lazy deletion), so a cell may sit
    /// on the stack more than once before its first expansion.
    pub fn dfs_path<G: PathGrid>(&mut self, grid: &G, start: Pos, goal: Pos) -> Result<PathResult> {
        let si = self.endpoint(start)?;
        let gi = self.endpoint(goal)?;
        self.reset();

        let mut stack = vec![si];
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = false;

        while let Some(ci) = stack.pop() {
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;
            let cp = self.pos(ci);
            self.visit_order.push(cp);

            if ci == gi {
                reached = true;
                break;
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);
            nbuf.retain(|&np| self.idx(np).is_some_and(|ni| !self.visited[ni]));
            nbuf.sort_by_key(|&np| np.manhattan(goal));

            // Reverse push so the goal-nearest neighbor is popped first.
            for &np in nbuf.iter().rev() {
                if let Some(ni) = self.idx(np) {
                    self.prev[ni] = ci;
                    stack.push(ni);
                }
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(si, gi, reached, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::OpenGrid;

    #[test]
    fn dfs_finds_some_path() {
        let grid = OpenGrid::new(5, 5);
        let mut pf = PathFinder::new(5, 5);
        let res = pf
            .dfs_path(&grid, Pos::new(0, 0), Pos::new(4, 4))
            .unwrap();
        assert!(res.found());
        assert_eq!(res.path.first(), Some(&Pos::new(0, 0)));
        assert_eq!(res.path.last(), Some(&Pos::new(4, 4)));
        // Consecutive path cells are 4-adjacent.
        for w in res.path.windows(2) {
            assert_eq!(w[0].manhattan(w[1]), 1);
        }
    }

    #[test]
    fn dfs_start_equals_goal() {
        let grid = OpenGrid::new(3, 3);
        let mut pf = PathFinder::new(3, 3);
        let res = pf
            .dfs_path(&grid, Pos::new(1, 1), Pos::new(1, 1))
            .unwrap();
        assert_eq!(res.path, vec![Pos::new(1, 1)]);
        assert_eq!(res.visited, vec![Pos::new(1, 1)]);
    }

    #[test]
    fn dfs_unreachable_goal_yields_empty_path() {
        let mut grid = OpenGrid::new(4, 4);
        // Wall off the goal corner completely.
        grid.walls.push(Pos::new(3, 2));
        grid.walls.push(Pos::new(2, 3));
        let mut pf = PathFinder::new(4, 4);
        let res = pf
            .dfs_path(&grid, Pos::new(0, 0), Pos::new(3, 3))
            .unwrap();
        assert!(!res.found());
        assert!(res.path.is_empty());
        // The search still explored something.
        assert!(!res.visited.is_empty());
    }

    #[test]
    fn dfs_never_visits_a_cell_twice() {
        let grid = OpenGrid::new(6, 6);
        let mut pf = PathFinder::new(6, 6);
        let res = pf
            .dfs_path(&grid, Pos::new(0, 0), Pos::new(5, 5))
            .unwrap();
        let mut seen = std::collections::HashSet::new();
        for p in &res.visited {
            assert!(seen.insert(*p), "cell {p} expanded twice");
        }
    }
}
