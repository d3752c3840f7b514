//! Walled grid maze model and randomized generator.
//!
//! [`Maze`] is a flat grid of [`MazeCell`]s with a designated start and end
//! cell. [`MazeGen`] carves spanning-tree mazes with a randomized
//! depth-first walk and picks the end as the open cell farthest from the
//! start by hop count, so a freshly generated maze is always solvable.
//! Manual edits through [`Maze::toggle`] may disconnect it again; the
//! solvers then report an empty path rather than failing.

pub mod maze;
pub mod mazegen;

pub use maze::{Maze, MazeCell};
pub use mazegen::MazeGen;
