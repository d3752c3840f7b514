//! Pathfinding algorithms for 2D grids, instrumented for replay.
//!
//! This crate provides three interchangeable searches over a walled grid:
//!
//! - **DFS** exhaustive search with a goal-distance bias ([`PathFinder::dfs_path`])
//! - **BFS** fewest-edges shortest path ([`PathFinder::bfs_path`])
//! - **Dijkstra** minimum weighted-cost path ([`PathFinder::dijkstra_path`])
//!
//! Each search records the order in which cells were expanded and
//! reconstructs the final path, so a presentation layer can replay the
//! exploration step by step. All searches operate through [`PathFinder`],
//! which owns and reuses internal caches across queries.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`PathGrid`] | DFS, BFS |
//! | [`WeightedGrid`] : [`PathGrid`] | Dijkstra |

mod bfs;
mod dfs;
mod dijkstra;
mod finder;
mod traits;

#[cfg(test)]
mod tests_support;

pub use finder::{Algorithm, DistanceMap, PathFinder, PathResult, UNREACHABLE, path_cost};
pub use traits::{PathGrid, WeightedGrid};
