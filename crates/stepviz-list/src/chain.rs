//! The arena-backed chain.

use stepviz_core::{Error, Result};

/// A node in the backing arena. `next` is an index into the arena, not an
/// owning pointer, so cycles cannot dangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainNode {
    pub value: f64,
    pub next: Option<usize>,
}

/// A singly-linked chain of nodes stored in an arena.
///
/// The head is always index 0. Forward links run `i -> i + 1`; when built
/// with a cycle, the last node links back to an earlier index instead of
/// terminating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chain {
    nodes: Vec<ChainNode>,
}

impl Chain {
    /// Build a chain from values, optionally closing a cycle.
    ///
    /// With `cycle_at = Some(i)`, the last node's `next` points back to
    /// index `i`. Errors: empty input (`EmptyStructure`), out-of-range
    /// cycle index (`InvalidIndex`), NaN value (`InvalidKey`).
    pub fn build(values: &[f64], cycle_at: Option<usize>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyStructure("chain"));
        }
        for &v in values {
            if v.is_nan() {
                return Err(Error::InvalidKey(v));
            }
        }
        if let Some(i) = cycle_at {
            if i >= values.len() {
                return Err(Error::bad_position(i, values.len()));
            }
        }

        let last = values.len() - 1;
        let nodes = values
            .iter()
            .enumerate()
            .map(|(i, &value)| ChainNode {
                value,
                next: if i < last { Some(i + 1) } else { cycle_at },
            })
            .collect();
        Ok(Self { nodes })
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The chain is never empty by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The head index.
    #[inline]
    pub fn head(&self) -> usize {
        0
    }

    /// The node at `index`, if in range.
    pub fn node(&self, index: usize) -> Option<&ChainNode> {
        self.nodes.get(index)
    }

    /// Follow one link from `index`. `None` marks the end of the chain.
    #[inline]
    pub(crate) fn advance(&self, index: Option<usize>) -> Option<usize> {
        self.nodes.get(index?)?.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_chain_terminates() {
        let c = Chain::build(&[1.0, 2.0, 3.0], None).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.node(0).and_then(|n| n.next), Some(1));
        assert_eq!(c.node(2).and_then(|n| n.next), None);
    }

    #[test]
    fn cyclic_chain_links_back() {
        let c = Chain::build(&[1.0, 2.0, 3.0, 4.0, 5.0], Some(2)).unwrap();
        assert_eq!(c.node(4).and_then(|n| n.next), Some(2));
    }

    #[test]
    fn self_cycle_on_single_node() {
        let c = Chain::build(&[9.0], Some(0)).unwrap();
        assert_eq!(c.node(0).and_then(|n| n.next), Some(0));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            Chain::build(&[], None),
            Err(Error::EmptyStructure(_))
        ));
    }

    #[test]
    fn out_of_range_cycle_index_is_rejected() {
        assert!(matches!(
            Chain::build(&[1.0, 2.0], Some(2)),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn nan_value_is_rejected() {
        assert!(matches!(
            Chain::build(&[1.0, f64::NAN], None),
            Err(Error::InvalidKey(_))
        ));
    }
}
