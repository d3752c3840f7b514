//! The walled grid model.

use stepviz_core::{Error, Pos, Result};
use stepviz_paths::{Algorithm, PathFinder, PathGrid, PathResult, WeightedGrid};

/// Traversal weight assigned to "difficult terrain" cells.
pub const HEAVY_WEIGHT: i32 = 3;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeCell {
    pub is_wall: bool,
    /// Cost of entering this cell; always >= 1.
    pub weight: i32,
    pub is_start: bool,
    pub is_end: bool,
}

impl Default for MazeCell {
    /// A plain wall.
    fn default() -> Self {
        Self {
            is_wall: true,
            weight: 1,
            is_start: false,
            is_end: false,
        }
    }
}

impl MazeCell {
    /// An open cell of weight 1.
    pub fn open() -> Self {
        Self {
            is_wall: false,
            ..Self::default()
        }
    }
}

/// A 2D walled grid with exactly one start and one end cell.
///
/// The start and end are never walls. A freshly generated maze is
/// connected between them; manual edits may break that, and the solvers
/// report the disconnection as an empty path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) cells: Vec<MazeCell>,
    pub(crate) start: Pos,
    pub(crate) end: Pos,
}

impl Maze {
    /// Grid height in rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Grid width in columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The start cell position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The end cell position.
    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// Convert a `Pos` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Pos) -> Option<&MazeCell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.cell(p).is_some_and(|c| !c.is_wall)
    }

    /// Weight of entering `p`; 1 for out-of-bounds queries.
    #[inline]
    pub fn weight_at(&self, p: Pos) -> i32 {
        self.cell(p).map_or(1, |c| c.weight)
    }

    /// Cycle a cell through its manual-edit states.
    ///
    /// In weighted mode: open -> weighted -> wall -> open. In unweighted
    /// mode: open <-> wall. The start and end cells are left untouched.
    /// Edits may disconnect the maze; downstream solving then yields an
    /// empty path.
    pub fn toggle(&mut self, p: Pos, weighted: bool) -> Result<()> {
        let i = self.idx(p).ok_or_else(|| Error::bad_cell(p.row, p.col))?;
        let cell = &mut self.cells[i];
        if cell.is_start || cell.is_end {
            return Ok(());
        }
        if weighted {
            if cell.is_wall {
                cell.is_wall = false;
                cell.weight = 1;
            } else if cell.weight == 1 {
                cell.weight = HEAVY_WEIGHT;
            } else {
                cell.is_wall = true;
                cell.weight = 1;
            }
        } else {
            cell.is_wall = !cell.is_wall;
        }
        Ok(())
    }

    /// Solve from start to end with the given algorithm.
    ///
    /// An unreachable end produces an empty path, not an error.
    pub fn solve(&self, algorithm: Algorithm) -> Result<PathResult> {
        let mut finder = PathFinder::new(self.rows, self.cols);
        finder.solve(self, self.start, self.end, algorithm)
    }
}

impl PathGrid for Maze {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedGrid for Maze {
    fn cost(&self, _from: Pos, to: Pos) -> i32 {
        self.weight_at(to)
    }
}
