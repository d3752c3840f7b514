//! Minimal grid fixtures for the search tests.

use stepviz_core::Pos;

use crate::traits::{PathGrid, WeightedGrid};

/// A fully open grid with an optional wall list and per-cell weights.
pub(crate) struct OpenGrid {
    pub rows: i32,
    pub cols: i32,
    pub walls: Vec<Pos>,
    /// (cell, weight) overrides; everything else costs 1.
    pub weights: Vec<(Pos, i32)>,
}

impl OpenGrid {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            walls: Vec::new(),
            weights: Vec::new(),
        }
    }

    fn in_bounds(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }
}

impl PathGrid for OpenGrid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            if self.in_bounds(n) && !self.walls.contains(&n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedGrid for OpenGrid {
    fn cost(&self, _from: Pos, to: Pos) -> i32 {
        self.weights
            .iter()
            .find(|(p, _)| *p == to)
            .map_or(1, |(_, w)| *w)
    }
}
