//! Insert-trace records.

use crate::node::TreeNode;

/// What happened at one decision point of a traced insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    DescendLeft,
    DescendRight,
    /// The key already exists; the insert is a no-op.
    Duplicate,
    RotateLeft,
    RotateRight,
    RotateLeftRight,
    RotateRightLeft,
    /// A node's height was recomputed on the way back up.
    HeightUpdated,
    /// The key's insert finished; the snapshot holds the settled tree.
    Inserted,
}

impl StepKind {
    /// Whether this is one of the four rotation kinds.
    pub fn is_rotation(self) -> bool {
        matches!(
            self,
            Self::RotateLeft | Self::RotateRight | Self::RotateLeftRight | Self::RotateRightLeft
        )
    }
}

/// One record of an AVL insert trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertStep {
    /// The key being inserted when this step was recorded.
    pub key: f64,
    pub kind: StepKind,
    /// Balance factor at the node under inspection, when meaningful.
    pub balance: Option<i32>,
    /// Deep copy of the whole tree, recorded at settle points.
    pub snapshot: Option<Box<TreeNode>>,
}

impl InsertStep {
    pub(crate) fn new(key: f64, kind: StepKind) -> Self {
        Self {
            key,
            kind,
            balance: None,
            snapshot: None,
        }
    }

    pub(crate) fn with_balance(mut self, balance: i32) -> Self {
        self.balance = Some(balance);
        self
    }

    pub(crate) fn with_snapshot(mut self, snapshot: Option<Box<TreeNode>>) -> Self {
        self.snapshot = snapshot;
        self
    }
}

/// Filter for the compact build trace: rotations, balance checks, and one
/// settle record per key survive; raw descent steps are dropped.
pub(crate) fn replay_relevant(step: &InsertStep) -> bool {
    step.kind.is_rotation() || matches!(step.kind, StepKind::HeightUpdated | StepKind::Inserted)
}
