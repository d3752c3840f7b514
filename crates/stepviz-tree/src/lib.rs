//! Binary trees with step-by-step construction tracing.
//!
//! Three insert policies share one [`Tree`] type:
//!
//! - **Unordered**: positional heap-style placement, for "random shape"
//!   demos, not a search structure.
//! - **BST**: plain ordered insert, duplicates ignored.
//! - **AVL**: ordered insert with automatic height rebalancing via the
//!   four classic rotations.
//!
//! AVL construction can be traced: [`Tree::build_with_trace`] records each
//! insert's decisions as [`InsertStep`]s and returns the replay-relevant
//! ones (height updates, rotations, and one settle record per key with a
//! deep tree snapshot; raw descent steps are recorded during insertion but
//! filtered out), so a presentation layer can replay the build compactly.
//!
//! Keys are `f64` at the boundary; NaN is rejected with
//! [`stepviz_core::Error::InvalidKey`] before anything is mutated, and all
//! internal comparisons use the `f64::total_cmp` total order.

mod avl;
mod node;
mod trace;
mod traverse;
mod tree;

pub use node::TreeNode;
pub use trace::{InsertStep, StepKind};
pub use traverse::Order;
pub use tree::{Tree, TreeMode};
