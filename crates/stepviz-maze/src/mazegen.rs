//! Randomized maze generation.
//!
//! The main generator carves a spanning-tree maze with an iterative
//! randomized depth-first walk using step-2 moves, leaving wall borders
//! between parallel corridors. Two supplementary board builders produce
//! boards with no connectivity guarantee, for exercising the no-path case.

use std::collections::VecDeque;

use rand::{Rng, RngExt};
use stepviz_core::{Error, Pos, Result};

use crate::maze::{HEAVY_WEIGHT, Maze, MazeCell};

/// Probability that an open cell becomes difficult terrain in weighted mode.
const HEAVY_CHANCE: f64 = 0.25;

/// The four step-2 carving directions (up, right, down, left).
const CARVE_DIRS: [Pos; 4] = [
    Pos::new(-2, 0),
    Pos::new(0, 2),
    Pos::new(2, 0),
    Pos::new(0, -2),
];

/// Maze generator with an injected random source.
///
/// Seed the source (e.g. `StdRng::seed_from_u64`) for reproducible mazes
/// in tests.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a spanning-tree maze.
    ///
    /// Starts from all walls and carves with a randomized depth-first walk
    /// from `start`: pick a random unvisited cell two steps away, open the
    /// intermediate and destination cells, and backtrack on dead ends.
    /// The result has exactly one simple path between any two open cells.
    ///
    /// If `weighted`, each open cell independently becomes weight
    /// [`HEAVY_WEIGHT`] with probability 0.25. The end cell is the open
    /// cell with the greatest hop distance from `start` (weights ignored),
    /// so the maze is always solvable right after generation.
    pub fn generate(&mut self, rows: i32, cols: i32, start: Pos, weighted: bool) -> Result<Maze> {
        let mut maze = empty_board(rows, cols, start, MazeCell::default())?;

        // Carve.
        let mut stack = vec![start];
        if let Some(si) = maze.idx(start) {
            maze.cells[si].is_wall = false;
        }
        while let Some(&current) = stack.last() {
            let mut advanced = false;
            for dir in self.shuffled_dirs() {
                let dest = current + dir;
                let Some(di) = maze.idx(dest) else {
                    continue;
                };
                if !maze.cells[di].is_wall {
                    continue;
                }
                let mid = current + Pos::new(dir.row / 2, dir.col / 2);
                if let Some(mi) = maze.idx(mid) {
                    maze.cells[mi].is_wall = false;
                }
                maze.cells[di].is_wall = false;
                stack.push(dest);
                advanced = true;
                break;
            }
            if !advanced {
                stack.pop();
            }
        }

        if weighted {
            self.scatter_weights(&mut maze);
        }

        // The end is the open cell farthest from start by hop count.
        let end = farthest_open(&maze, start);
        finalize(&mut maze, start, end);
        log::debug!(
            "generated {rows}x{cols} maze, start {start}, end {end}, weighted {weighted}"
        );
        Ok(maze)
    }

    /// Build a mostly-open board with `wall_count` randomly placed walls.
    ///
    /// Connectivity between `start` and `end` is NOT guaranteed; solvers
    /// report an empty path when the scatter happens to seal the end off.
    pub fn open_board(
        &mut self,
        rows: i32,
        cols: i32,
        start: Pos,
        end: Pos,
        wall_count: usize,
        weighted: bool,
    ) -> Result<Maze> {
        let mut maze = empty_board(rows, cols, start, MazeCell::open())?;
        maze.idx(end)
            .ok_or_else(|| Error::bad_cell(end.row, end.col))?;

        for _ in 0..wall_count {
            let p = self.random_pos(rows, cols);
            if p == start || p == end {
                continue;
            }
            if let Some(i) = maze.idx(p) {
                maze.cells[i].is_wall = true;
            }
        }
        if weighted {
            self.scatter_weights(&mut maze);
        }
        finalize(&mut maze, start, end);
        Ok(maze)
    }

    /// Build a mostly-walled board with `open_count` randomly opened cells.
    ///
    /// The start and end cells are always opened. Connectivity is NOT
    /// guaranteed.
    pub fn sparse_board(
        &mut self,
        rows: i32,
        cols: i32,
        start: Pos,
        end: Pos,
        open_count: usize,
        weighted: bool,
    ) -> Result<Maze> {
        let mut maze = empty_board(rows, cols, start, MazeCell::default())?;
        maze.idx(end)
            .ok_or_else(|| Error::bad_cell(end.row, end.col))?;

        for _ in 0..open_count {
            let p = self.random_pos(rows, cols);
            if let Some(i) = maze.idx(p) {
                maze.cells[i].is_wall = false;
            }
        }
        for p in [start, end] {
            if let Some(i) = maze.idx(p) {
                maze.cells[i].is_wall = false;
            }
        }
        if weighted {
            self.scatter_weights(&mut maze);
        }
        finalize(&mut maze, start, end);
        Ok(maze)
    }

    /// The carving directions in random order (Fisher-Yates).
    fn shuffled_dirs(&mut self) -> [Pos; 4] {
        let mut dirs = CARVE_DIRS;
        for i in (1..dirs.len()).rev() {
            let j = self.rng.random_range(0..=i);
            dirs.swap(i, j);
        }
        dirs
    }

    fn random_pos(&mut self, rows: i32, cols: i32) -> Pos {
        Pos::new(
            self.rng.random_range(0..rows),
            self.rng.random_range(0..cols),
        )
    }

    /// Independently mark open cells as difficult terrain.
    fn scatter_weights(&mut self, maze: &mut Maze) {
        for cell in maze.cells.iter_mut() {
            if !cell.is_wall && self.rng.random::<f64>() < HEAVY_CHANCE {
                cell.weight = HEAVY_WEIGHT;
            }
        }
    }
}

/// Allocate a board filled with `fill`, validating dimensions and `start`.
fn empty_board(rows: i32, cols: i32, start: Pos, fill: MazeCell) -> Result<Maze> {
    if rows < 1 || cols < 1 {
        return Err(Error::bad_cell(rows, cols));
    }
    let maze = Maze {
        rows,
        cols,
        cells: vec![fill; (rows * cols) as usize],
        start,
        end: start,
    };
    maze.idx(start)
        .ok_or_else(|| Error::bad_cell(start.row, start.col))?;
    Ok(maze)
}

/// Mark the start and end cells and ensure neither is a wall.
fn finalize(maze: &mut Maze, start: Pos, end: Pos) {
    if let Some(i) = maze.idx(start) {
        maze.cells[i].is_wall = false;
        maze.cells[i].is_start = true;
    }
    if let Some(i) = maze.idx(end) {
        maze.cells[i].is_wall = false;
        maze.cells[i].is_end = true;
    }
    maze.start = start;
    maze.end = end;
}

/// The open cell with the greatest BFS hop distance from `from`.
///
/// Plain hop count; weights are deliberately ignored so the end is "far"
/// by step count, not by cost.
fn farthest_open(maze: &Maze, from: Pos) -> Pos {
    let len = (maze.rows * maze.cols) as usize;
    let mut seen = vec![false; len];
    let mut queue: VecDeque<(Pos, i32)> = VecDeque::new();

    let mut farthest = from;
    let mut max_dist = 0;

    if let Some(i) = maze.idx(from) {
        seen[i] = true;
        queue.push_back((from, 0));
    }

    while let Some((p, dist)) = queue.pop_front() {
        if dist > max_dist {
            max_dist = dist;
            farthest = p;
        }
        for n in p.neighbors_4() {
            let Some(ni) = maze.idx(n) else {
                continue;
            };
            if seen[ni] || maze.cells[ni].is_wall {
                continue;
            }
            seen[ni] = true;
            queue.push_back((n, dist + 1));
        }
    }

    farthest
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stepviz_paths::Algorithm;

    fn seeded(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generated_maze_is_solvable() {
        for seed in 0..5 {
            let maze = seeded(seed)
                .generate(19, 29, Pos::new(9, 14), true)
                .unwrap();
            let res = maze.solve(Algorithm::Bfs).unwrap();
            assert!(res.found(), "seed {seed}: maze should be connected");
            assert_eq!(res.path.first(), Some(&maze.start()));
            assert_eq!(res.path.last(), Some(&maze.end()));
        }
    }

    #[test]
    fn fixed_seed_gives_deterministic_shape() {
        let a = seeded(42).generate(11, 11, Pos::new(5, 5), true).unwrap();
        let b = seeded(42).generate(11, 11, Pos::new(5, 5), true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unweighted_maze_has_unit_weights_only() {
        let maze = seeded(7).generate(11, 15, Pos::new(5, 7), false).unwrap();
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                assert_eq!(maze.weight_at(Pos::new(row, col)), 1);
            }
        }
    }

    #[test]
    fn weighted_maze_uses_only_known_weights() {
        let maze = seeded(7).generate(15, 15, Pos::new(7, 7), true).unwrap();
        let mut heavy = 0;
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                let w = maze.weight_at(Pos::new(row, col));
                assert!(w == 1 || w == HEAVY_WEIGHT);
                if w == HEAVY_WEIGHT {
                    heavy += 1;
                }
            }
        }
        // 0.25 per open cell over ~100+ open cells; zero would be
        // astronomically unlikely.
        assert!(heavy > 0);
    }

    #[test]
    fn exactly_one_start_and_one_end() {
        let maze = seeded(3).generate(9, 9, Pos::new(4, 4), false).unwrap();
        let mut starts = 0;
        let mut ends = 0;
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                let c = maze.cell(Pos::new(row, col)).unwrap();
                starts += c.is_start as i32;
                ends += c.is_end as i32;
                if c.is_start || c.is_end {
                    assert!(!c.is_wall);
                }
            }
        }
        assert_eq!(starts, 1);
        assert_eq!(ends, 1);
        assert_ne!(maze.start(), maze.end());
    }

    #[test]
    fn dijkstra_cost_not_above_bfs_cost_on_weighted_maze() {
        use stepviz_paths::path_cost;
        for seed in 0..5 {
            let maze = seeded(seed)
                .generate(13, 17, Pos::new(6, 8), true)
                .unwrap();
            let d = maze.solve(Algorithm::Dijkstra).unwrap();
            let b = maze.solve(Algorithm::Bfs).unwrap();
            assert!(d.found() && b.found());
            assert!(path_cost(&maze, &d.path) <= path_cost(&maze, &b.path));
        }
    }

    #[test]
    fn out_of_bounds_start_is_rejected() {
        let err = seeded(0).generate(5, 5, Pos::new(9, 9), false).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex(_)));
    }

    #[test]
    fn open_board_scatter_respects_endpoints() {
        let start = Pos::new(2, 2);
        let end = Pos::new(0, 4);
        let maze = seeded(11)
            .open_board(5, 5, start, end, 40, true)
            .unwrap();
        assert!(maze.is_open(start));
        assert!(maze.is_open(end));
    }

    #[test]
    fn sparse_board_opens_endpoints() {
        let start = Pos::new(3, 3);
        let end = Pos::new(0, 0);
        let maze = seeded(11).sparse_board(7, 7, start, end, 10, false).unwrap();
        assert!(maze.is_open(start));
        assert!(maze.is_open(end));
        // No-path outcomes must be tolerated on sparse boards.
        let res = maze.solve(Algorithm::Dfs).unwrap();
        assert!(res.found() || res.path.is_empty());
    }
}
