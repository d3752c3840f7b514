//! Tortoise-and-hare cycle detection.

use crate::chain::Chain;

/// Outcome of a detection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleResult {
    pub has_cycle: bool,
    /// Where tortoise and hare first met, if they did.
    pub meeting: Option<usize>,
    /// First node of the cycle, if there is one.
    pub cycle_start: Option<usize>,
}

impl CycleResult {
    fn acyclic() -> Self {
        Self {
            has_cycle: false,
            meeting: None,
            cycle_start: None,
        }
    }
}

/// What a single [`CycleStep`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleStepKind {
    /// The tortoise followed one link.
    TortoiseMove,
    /// The hare followed one link. A full race turn records two of these.
    HareMove,
    /// Both pointers landed on the same node.
    Meeting,
    /// One of the two pointers walking toward the cycle start after the
    /// first meeting.
    SearchStartMove,
}

/// One pointer move in a traced detection run, with both pointer
/// positions after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleStep {
    pub kind: CycleStepKind,
    pub tortoise: Option<usize>,
    pub hare: Option<usize>,
}

impl CycleStep {
    fn new(kind: CycleStepKind, tortoise: Option<usize>, hare: Option<usize>) -> Self {
        Self {
            kind,
            tortoise,
            hare,
        }
    }
}

impl Chain {
    /// Detect a cycle without recording steps.
    ///
    /// Phase one races a slow and a double-speed pointer until they meet
    /// or the hare falls off the end. Phase two resets the tortoise to the
    /// head and walks both at single speed; they converge on the first
    /// node of the cycle.
    pub fn detect(&self) -> CycleResult {
        let mut tortoise = Some(self.head());
        let mut hare = Some(self.head());

        loop {
            tortoise = self.advance(tortoise);
            hare = self.advance(self.advance(hare));
            match (tortoise, hare) {
                (Some(t), Some(h)) if t == h => break,
                (_, None) => return CycleResult::acyclic(),
                _ => {}
            }
        }
        let meeting = tortoise;

        tortoise = Some(self.head());
        while tortoise != hare {
            tortoise = self.advance(tortoise);
            hare = self.advance(hare);
        }
        CycleResult {
            has_cycle: true,
            meeting,
            cycle_start: tortoise,
        }
    }

    /// Detect a cycle, recording every individual pointer move.
    ///
    /// The hare's double advance yields two records per race turn, so a
    /// replay shows it hopping node by node. The final result always
    /// agrees with [`Chain::detect`].
    pub fn trace_detection(&self) -> (Vec<CycleStep>, CycleResult) {
        let mut steps = Vec::new();
        let mut tortoise = Some(self.head());
        let mut hare = Some(self.head());

        loop {
            tortoise = self.advance(tortoise);
            steps.push(CycleStep::new(CycleStepKind::TortoiseMove, tortoise, hare));

            hare = self.advance(hare);
            steps.push(CycleStep::new(CycleStepKind::HareMove, tortoise, hare));
            if hare.is_none() {
                return (steps, CycleResult::acyclic());
            }
            hare = self.advance(hare);
            steps.push(CycleStep::new(CycleStepKind::HareMove, tortoise, hare));

            match (tortoise, hare) {
                (Some(t), Some(h)) if t == h => break,
                (_, None) => return (steps, CycleResult::acyclic()),
                _ => {}
            }
        }
        let meeting = tortoise;
        steps.push(CycleStep::new(CycleStepKind::Meeting, tortoise, hare));

        tortoise = Some(self.head());
        steps.push(CycleStep::new(
            CycleStepKind::SearchStartMove,
            tortoise,
            hare,
        ));
        while tortoise != hare {
            tortoise = self.advance(tortoise);
            hare = self.advance(hare);
            steps.push(CycleStep::new(
                CycleStepKind::SearchStartMove,
                tortoise,
                hare,
            ));
        }
        steps.push(CycleStep::new(CycleStepKind::Meeting, tortoise, hare));

        let result = CycleResult {
            has_cycle: true,
            meeting,
            cycle_start: tortoise,
        };
        (steps, result)
    }
}
