use stepviz_core::Pos;

/// Minimal pathfinding interface providing neighbor enumeration.
///
/// Implementors decide which moves are legal; the searches here only
/// require that every yielded neighbor is itself a valid cell.
pub trait PathGrid {
    /// Append traversable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// PathGrid with weighted (positive-cost) moves.
pub trait WeightedGrid: PathGrid {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    ///
    /// The cost is charged for *entering* `to`, so implementations usually
    /// return the destination cell's traversal weight.
    fn cost(&self, from: Pos, to: Pos) -> i32;
}
