//! Error taxonomy shared by the stepviz crates.
//!
//! Malformed input is rejected synchronously at the boundary, before any
//! trace output is produced. Algorithmic dead ends (no path, no cycle) are
//! normal outcomes carried in result types, never errors.

use thiserror::Error;

/// Result alias used across the stepviz crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Boundary errors for structure construction and mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A key that cannot participate in a total order (NaN).
    #[error("invalid key: {0} is not comparable")]
    InvalidKey(f64),

    /// A grid coordinate or list position outside the structure bounds.
    #[error("index out of bounds: {0}")]
    InvalidIndex(String),

    /// An operation that requires a non-empty structure.
    #[error("empty structure: {0}")]
    EmptyStructure(&'static str),
}

impl Error {
    /// Out-of-bounds grid coordinate.
    pub fn bad_cell(row: i32, col: i32) -> Self {
        Self::InvalidIndex(format!("cell ({row}, {col})"))
    }

    /// Out-of-bounds list position.
    pub fn bad_position(index: usize, len: usize) -> Self {
        Self::InvalidIndex(format!("position {index} of {len}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::bad_cell(3, -1);
        assert_eq!(e.to_string(), "index out of bounds: cell (3, -1)");
        let e = Error::bad_position(7, 5);
        assert_eq!(e.to_string(), "index out of bounds: position 7 of 5");
        let e = Error::EmptyStructure("chain");
        assert_eq!(e.to_string(), "empty structure: chain");
    }
}
