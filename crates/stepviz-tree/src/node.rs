//! The tree node.

/// A binary tree node owning its children.
///
/// `height` is the subtree height with `height(leaf) == 1`; a missing
/// child counts as height 0. Cloning a node deep-copies the whole subtree,
/// which is what the trace snapshots rely on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    pub key: f64,
    pub height: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// A fresh leaf.
    pub fn new(key: f64) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recompute this node's height from its children.
    #[inline]
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left subtree height minus right subtree height.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, TreeNode::node_count)
            + self.right.as_deref().map_or(0, TreeNode::node_count)
    }

    /// Whether every node in this subtree satisfies the AVL invariant and
    /// carries a consistent height.
    pub fn is_balanced(&self) -> bool {
        let bf = self.balance_factor();
        if bf.abs() > 1 {
            return false;
        }
        if self.height != 1 + height(&self.left).max(height(&self.right)) {
            return false;
        }
        self.left.as_deref().is_none_or(TreeNode::is_balanced)
            && self.right.as_deref().is_none_or(TreeNode::is_balanced)
    }
}

/// Height of an optional subtree; 0 for `None`.
#[inline]
pub(crate) fn height(node: &Option<Box<TreeNode>>) -> i32 {
    node.as_deref().map_or(0, |n| n.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_height_one() {
        let n = TreeNode::new(5.0);
        assert_eq!(n.height, 1);
        assert_eq!(n.balance_factor(), 0);
        assert_eq!(n.node_count(), 1);
        assert!(n.is_balanced());
    }

    #[test]
    fn update_height_tracks_children() {
        let mut n = TreeNode::new(10.0);
        n.left = Some(Box::new(TreeNode::new(5.0)));
        n.update_height();
        assert_eq!(n.height, 2);
        assert_eq!(n.balance_factor(), 1);
    }

    #[test]
    fn clone_is_deep() {
        let mut n = TreeNode::new(1.0);
        n.right = Some(Box::new(TreeNode::new(2.0)));
        let mut copy = n.clone();
        if let Some(r) = copy.right.as_mut() {
            r.key = 99.0;
        }
        assert_eq!(n.right.as_ref().map(|r| r.key), Some(2.0));
    }
}
