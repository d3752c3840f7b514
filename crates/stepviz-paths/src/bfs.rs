use std::collections::VecDeque;

use stepviz_core::Pos;
use stepviz_core::Result;

use crate::PathFinder;
use crate::finder::PathResult;
use crate::traits::PathGrid;

impl PathFinder {
    /// Breadth-first search from `start` to `goal`.
    ///
    /// Cells are marked visited at enqueue time, so no cell enters the
    /// queue twice. Guarantees the fewest-edges path in the unweighted
    /// sense; cell weights are ignored.
    pub fn bfs_path<G: PathGrid>(&mut self, grid: &G, start: Pos, goal: Pos) -> Result<PathResult> {
        let si = self.endpoint(start)?;
        let gi = self.endpoint(goal)?;
        self.reset();

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.visited[si] = true;
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = false;

        while let Some(ci) = queue.pop_front() {
            let cp = self.pos(ci);
            self.visit_order.push(cp);

            if ci == gi {
                reached = true;
                break;
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.prev[ni] = ci;
                queue.push_back(ni);
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
    fn bfs_shortest_on_open_grid() {
        let grid = OpenGrid::new(5, 5);
        let mut pf = PathFinder::new(5, 5);
        let res = pf
            .bfs_path(&grid, Pos::new(0, 0), Pos::new(4, 4))
            .unwrap();
        assert!(res.found());
        // Fewest-edges path has manhattan + 1 cells.
        assert_eq!(res.path.len(), 9);
        assert_eq!(res.path.first(), Some(&Pos::new(0, 0)));
        assert_eq!(res.path.last(), Some(&Pos::new(4, 4)));
    }

    #[test]
    fn bfs_routes_around_walls() {
        let mut grid = OpenGrid::new(3, 3);
        // Vertical wall with a gap at the bottom.
        grid.walls.push(Pos::new(0, 1));
        grid.walls.push(Pos::new(1, 1));
        let mut pf = PathFinder::new(3, 3);
        let res = pf
            .bfs_path(&grid, Pos::new(0, 0), Pos::new(0, 2))
            .unwrap();
        assert!(res.found());
        assert_eq!(res.path.len(), 7);
        assert!(res.path.contains(&Pos::new(2, 1)));
    }

    #[test]
    fn bfs_no_path_is_empty_not_error() {
        let mut grid = OpenGrid::new(3, 3);
        grid.walls.push(Pos::new(0, 1));
        grid.walls.push(Pos::new(1, 0));
        grid.walls.push(Pos::new(1, 1));
        let mut pf = PathFinder::new(3, 3);
        let res = pf
            .bfs_path(&grid, Pos::new(0, 0), Pos::new(2, 2))
            .unwrap();
        assert!(!res.found());
        assert_eq!(res.visited, vec![Pos::new(0, 0)]);
    }

    #[test]
    fn bfs_visit_order_is_by_ring() {
        let grid = OpenGrid::new(3, 3);
        let mut pf = PathFinder::new(3, 3);
        let res = pf
            .bfs_path(&grid, Pos::new(1, 1), Pos::new(2, 2))
            .unwrap();
        // Start first, then its four neighbors before any ring-2 cell.
        assert_eq!(res.visited[0], Pos::new(1, 1));
        for p in &res.visited[1..5] {
            assert_eq!(p.manhattan(Pos::new(1, 1)), 1);
        }
    }

    #[test]
    fn bfs_out_of_bounds_start_is_invalid_index() {
        let grid = OpenGrid::new(3, 3);
        let mut pf = PathFinder::new(3, 3);
        let err = pf
            .bfs_path(&grid, Pos::new(-1, 0), Pos::new(2, 2))
            .unwrap_err();
        assert!(matches!(err, stepviz_core::Error::InvalidIndex(_)));
    }
}
