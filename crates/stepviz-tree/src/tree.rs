//! The public tree type and its three insert policies.

use std::cmp::Ordering;
use std::collections::VecDeque;

use stepviz_core::{Error, Result, Trace};

use crate::avl;
use crate::node::TreeNode;
use crate::trace::{InsertStep, StepKind, replay_relevant};
use crate::traverse::{Order, traverse};

/// Which insert policy a [`Tree`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeMode {
    /// Heap-style positional placement; not a search structure.
    Unordered,
    /// Plain binary search tree insert; duplicates are ignored.
    Bst,
    /// Height-balanced search tree with automatic rotations.
    Avl,
}

/// A binary tree built under one of the [`TreeMode`] policies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    root: Option<Box<TreeNode>>,
    mode: TreeMode,
}

impl Tree {
    /// An empty tree with the given policy.
    pub fn new(mode: TreeMode) -> Self {
        Self { root: None, mode }
    }

    /// Build a tree by folding the keys in order.
    ///
    /// All keys are validated up front: a NaN anywhere rejects the whole
    /// build before any node is created. In `Unordered` mode the slice is
    /// laid out positionally (index 0 is the root, `2i+1`/`2i+2` its
    /// children).
    pub fn build(keys: &[f64], mode: TreeMode) -> Result<Self> {
        validate_keys(keys)?;
        let mut tree = Self::new(mode);
        if mode == TreeMode::Unordered {
            tree.root = build_positional(keys, 0);
            return Ok(tree);
        }
        for &key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    /// Build an AVL tree, recording a compact replay trace.
    ///
    /// The trace is the per-key concatenation of traced inserts, filtered
    /// to rotations, balance checks, and one settle record per key (with a
    /// deep snapshot of the settled tree), in insertion order.
    pub fn build_with_trace(keys: &[f64]) -> Result<(Self, Vec<InsertStep>)> {
        validate_keys(keys)?;
        let mut trace = Trace::new();
        let mut root: Option<Box<TreeNode>> = None;
        for &key in keys {
            root = Some(avl::insert_traced(root.take(), key, &mut trace));
            trace.push(InsertStep::new(key, StepKind::Inserted).with_snapshot(root.clone()));
        }
        let steps = trace.into_steps().into_iter().filter(replay_relevant).collect();
        Ok((
            Self {
                root,
                mode: TreeMode::Avl,
            },
            steps,
        ))
    }

    /// Insert a single key under this tree's policy.
    ///
    /// Duplicates are silently ignored in `Bst` and `Avl` modes. In
    /// `Unordered` mode the key fills the first free slot in level order.
    pub fn insert(&mut self, key: f64) -> Result<()> {
        validate_key(key)?;
        let root = self.root.take();
        self.root = Some(match self.mode {
            TreeMode::Unordered => insert_level_order(root, key),
            TreeMode::Bst => insert_bst(root, key),
            TreeMode::Avl => avl::insert(root, key),
        });
        Ok(())
    }

    /// Insert a single key, appending trace records.
    ///
    /// Only the `Avl` policy produces decision steps; the other modes
    /// record a single settle step.
    pub fn insert_with_trace(&mut self, key: f64, trace: &mut Trace<InsertStep>) -> Result<()> {
        validate_key(key)?;
        match self.mode {
            TreeMode::Avl => {
                let root = self.root.take();
                self.root = Some(avl::insert_traced(root, key, trace));
            }
            _ => self.insert(key)?,
        }
        trace.push(InsertStep::new(key, StepKind::Inserted).with_snapshot(self.root.clone()));
        Ok(())
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// This tree's insert policy.
    pub fn mode(&self) -> TreeMode {
        self.mode
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.root.as_deref().map_or(0, TreeNode::node_count)
    }

    /// Tree height; 0 when empty.
    pub fn height(&self) -> i32 {
        self.root.as_deref().map_or(0, |n| n.height)
    }

    /// Whether every node satisfies the AVL height invariant.
    pub fn is_balanced(&self) -> bool {
        self.root.as_deref().is_none_or(TreeNode::is_balanced)
    }

    /// Keys in the requested traversal order.
    pub fn traverse(&self, order: Order) -> Vec<f64> {
        traverse(self.root.as_deref(), order)
    }
}

/// Reject NaN; the algorithms assume a total order.
fn validate_key(key: f64) -> Result<()> {
    if key.is_nan() {
        return Err(Error::InvalidKey(key));
    }
    Ok(())
}

fn validate_keys(keys: &[f64]) -> Result<()> {
    for &key in keys {
        validate_key(key)?;
    }
    Ok(())
}

/// Standard BST insert; duplicate keys leave the tree unchanged.
fn insert_bst(root: Option<Box<TreeNode>>, key: f64) -> Box<TreeNode> {
    let Some(mut node) = root else {
        return Box::new(TreeNode::new(key));
    };
    match key.total_cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_bst(node.left.take(), key)),
        Ordering::Greater => node.right = Some(insert_bst(node.right.take(), key)),
        Ordering::Equal => {}
    }
    node.update_height();
    node
}

/// Heap-style positional build: node `i` has children `2i+1` and `2i+2`.
fn build_positional(keys: &[f64], index: usize) -> Option<Box<TreeNode>> {
    if index >= keys.len() {
        return None;
    }
    let mut node = Box::new(TreeNode::new(keys[index]));
    node.left = build_positional(keys, 2 * index + 1);
    node.right = build_positional(keys, 2 * index + 2);
    node.update_height();
    Some(node)
}

/// Fill the first free child slot in level order.
fn insert_level_order(root: Option<Box<TreeNode>>, key: f64) -> Box<TreeNode> {
    let Some(mut root) = root else {
        return Box::new(TreeNode::new(key));
    };
    {
        let mut queue: VecDeque<&mut TreeNode> = VecDeque::new();
        queue.push_back(&mut root);
        while let Some(node) = queue.pop_front() {
            match node.left {
                None => {
                    node.left = Some(Box::new(TreeNode::new(key)));
                    break;
                }
                Some(ref mut l) => queue.push_back(l),
            }
            match node.right {
                None => {
                    node.right = Some(Box::new(TreeNode::new(key)));
                    break;
                }
                Some(ref mut r) => queue.push_back(r),
            }
        }
    }
    refresh_heights(&mut root);
    root
}

/// Recompute every height bottom-up.
fn refresh_heights(node: &mut TreeNode) {
    if let Some(l) = node.left.as_deref_mut() {
        refresh_heights(l);
    }
    if let Some(r) = node.right.as_deref_mut() {
        refresh_heights(r);
    }
    node.update_height();
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn insert_step_round_trip() {
        let (_, steps) = Tree::build_with_trace(&[3.0, 1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&steps).unwrap();
        let back: Vec<InsertStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(steps, back);
    }
}
