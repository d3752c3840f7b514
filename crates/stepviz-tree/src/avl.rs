//! AVL insert and rotations.
//!
//! There is a single insert implementation, the traced one; the untraced
//! entry point runs it with a throwaway trace so the two can never drift
//! apart.

use std::cmp::Ordering;

use stepviz_core::Trace;

use crate::node::TreeNode;
use crate::trace::{InsertStep, StepKind};

/// Right rotation around `y` (the LL fix). Heights are recomputed child
/// first, then parent.
pub(crate) fn rotate_right(mut y: Box<TreeNode>) -> Box<TreeNode> {
    let Some(mut x) = y.left.take() else {
        // Callers only rotate when the child exists.
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation around `x` (the RR fix); mirror of [`rotate_right`].
pub(crate) fn rotate_left(mut x: Box<TreeNode>) -> Box<TreeNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// AVL insert without trace output.
pub(crate) fn insert(root: Option<Box<TreeNode>>, key: f64) -> Box<TreeNode> {
    let mut scratch = Trace::new();
    insert_traced(root, key, &mut scratch)
}

/// AVL insert, appending one [`InsertStep`] per decision point.
///
/// Standard recursive BST descent, then height update and at most one
/// rebalancing rotation per level on the way back up. A duplicate key is
/// recorded and left in place.
pub(crate) fn insert_traced(
    root: Option<Box<TreeNode>>,
    key: f64,
    trace: &mut Trace<InsertStep>,
) -> Box<TreeNode> {
    let Some(mut node) = root else {
        return Box::new(TreeNode::new(key));
    };

    match key.total_cmp(&node.key) {
        Ordering::Less => {
            trace.push(InsertStep::new(key, StepKind::DescendLeft));
            node.left = Some(insert_traced(node.left.take(), key, trace));
        }
        Ordering::Greater => {
            trace.push(InsertStep::new(key, StepKind::DescendRight));
            node.right = Some(insert_traced(node.right.take(), key, trace));
        }
        Ordering::Equal => {
            trace.push(InsertStep::new(key, StepKind::Duplicate));
            return node;
        }
    }

    node.update_height();
    let balance = node.balance_factor();
    trace.push(InsertStep::new(key, StepKind::HeightUpdated).with_balance(balance));
    rebalance(node, key, balance, trace)
}

/// Apply at most one of the four rebalancing rules.
///
/// The rule is picked from the balance factor and the inserted key's
/// position relative to the unbalanced node's child; after one rotation
/// the invariant holds again at this level.
fn rebalance(
    mut node: Box<TreeNode>,
    key: f64,
    balance: i32,
    trace: &mut Trace<InsertStep>,
) -> Box<TreeNode> {
    if balance > 1 {
        if let Some(left_key) = node.left.as_deref().map(|n| n.key) {
            match key.total_cmp(&left_key) {
                Ordering::Less => {
                    // Left-left: single right rotation.
                    trace.push(InsertStep::new(key, StepKind::RotateRight).with_balance(balance));
                    return rotate_right(node);
                }
                Ordering::Greater => {
                    // Left-right: rotate the left child left, then this right.
                    trace
                        .push(InsertStep::new(key, StepKind::RotateLeftRight).with_balance(balance));
                    node.left = node.left.take().map(rotate_left);
                    return rotate_right(node);
                }
                Ordering::Equal => {}
            }
        }
    } else if balance < -1 {
        if let Some(right_key) = node.right.as_deref().map(|n| n.key) {
            match key.total_cmp(&right_key) {
                Ordering::Greater => {
                    // Right-right: single left rotation.
                    trace.push(InsertStep::new(key, StepKind::RotateLeft).with_balance(balance));
                    return rotate_left(node);
                }
                Ordering::Less => {
                    // Right-left: rotate the right child right, then this left.
                    trace
                        .push(InsertStep::new(key, StepKind::RotateRightLeft).with_balance(balance));
                    node.right = node.right.take().map(rotate_right);
                    return rotate_left(node);
                }
                Ordering::Equal => {}
            }
        }
    }
    node
}
