//! Depth-first traversal orders.

use crate::node::TreeNode;

/// Traversal order for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    /// Left, self, right; sorted output on a BST/AVL tree.
    Inorder,
    /// Self, left, right.
    Preorder,
    /// Left, right, self.
    Postorder,
}

/// Collect the keys of a subtree in the given order.
///
/// Computed eagerly; an absent root yields an empty sequence, and every
/// node is visited exactly once.
pub(crate) fn traverse(root: Option<&TreeNode>, order: Order) -> Vec<f64> {
    let mut out = Vec::new();
    if let Some(node) = root {
        walk(node, order, &mut out);
    }
    out
}

fn walk(node: &TreeNode, order: Order, out: &mut Vec<f64>) {
    match order {
        Order::Inorder => {
            if let Some(l) = node.left.as_deref() {
                walk(l, order, out);
            }
            out.push(node.key);
            if let Some(r) = node.right.as_deref() {
                walk(r, order, out);
            }
        }
        Order::Preorder => {
            out.push(node.key);
            if let Some(l) = node.left.as_deref() {
                walk(l, order, out);
            }
            if let Some(r) = node.right.as_deref() {
                walk(r, order, out);
            }
        }
        Order::Postorder => {
            if let Some(l) = node.left.as_deref() {
                walk(l, order, out);
            }
            if let Some(r) = node.right.as_deref() {
                walk(r, order, out);
            }
            out.push(node.key);
        }
    }
}
