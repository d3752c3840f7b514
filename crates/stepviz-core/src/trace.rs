//! Append-only step traces and a playback cursor.
//!
//! Every algorithm in this workspace computes its full step sequence
//! eagerly and synchronously; timed playback belongs to the caller. A
//! [`Trace`] collects the steps as the algorithm runs, and a [`Playback`]
//! walks a finished trace at whatever cadence the presentation layer
//! chooses.

/// An append-only sequence of algorithm steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    #[inline]
    pub fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    /// Number of recorded steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The recorded steps, in order.
    #[inline]
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Iterate over the recorded steps.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    /// Consume the trace, yielding the step vector.
    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> From<Vec<S>> for Trace<S> {
    fn from(steps: Vec<S>) -> Self {
        Self { steps }
    }
}

impl<S> IntoIterator for Trace<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// A cursor over a finished [`Trace`].
///
/// Holds no timers; the caller decides when to advance. Replaying the same
/// trace after [`reset`](Playback::reset) yields the same step sequence.
#[derive(Debug, Clone)]
pub struct Playback<S> {
    steps: Vec<S>,
    cursor: usize,
}

impl<S> Playback<S> {
    /// Create a playback over a finished trace.
    pub fn new(trace: Trace<S>) -> Self {
        Self {
            steps: trace.into_steps(),
            cursor: 0,
        }
    }

    /// Advance and return the next step, or `None` when exhausted.
    pub fn next_step(&mut self) -> Option<&S> {
        let step = self.steps.get(self.cursor)?;
        self.cursor += 1;
        Some(step)
    }

    /// The upcoming step without advancing.
    pub fn peek(&self) -> Option<&S> {
        self.steps.get(self.cursor)
    }

    /// Move the cursor to an absolute step index (clamped to the end).
    pub fn seek(&mut self, index: usize) {
        self.cursor = index.min(self.steps.len());
    }

    /// Rewind to the first step.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Steps not yet played.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.cursor
    }

    /// Total number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace holds no steps at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_preserves_order() {
        let mut t = Trace::new();
        t.push(1);
        t.push(2);
        t.push(3);
        assert_eq!(t.len(), 3);
        assert_eq!(t.steps(), &[1, 2, 3]);
    }

    #[test]
    fn playback_walks_and_exhausts() {
        let t = Trace::from(vec!["a", "b"]);
        let mut p = Playback::new(t);
        assert_eq!(p.remaining(), 2);
        assert_eq!(p.next_step(), Some(&"a"));
        assert_eq!(p.peek(), Some(&"b"));
        assert_eq!(p.next_step(), Some(&"b"));
        assert_eq!(p.next_step(), None);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn playback_reset_is_idempotent() {
        let t = Trace::from(vec![10, 20, 30]);
        let mut p = Playback::new(t);
        let first: Vec<i32> = std::iter::from_fn(|| p.next_step().copied()).collect();
        p.reset();
        let second: Vec<i32> = std::iter::from_fn(|| p.next_step().copied()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn playback_seek_clamps() {
        let t = Trace::from(vec![1, 2]);
        let mut p = Playback::new(t);
        p.seek(100);
        assert_eq!(p.next_step(), None);
        p.seek(1);
        assert_eq!(p.next_step(), Some(&2));
    }
}
