//! Recorded algorithm states
//!
//! A recorder run produces a [`StepSequence`]: index 0 is the state before the
//! algorithm touches anything, the last index is the fully resolved state.
//! Sequences are built append-only through a [`StepLog`] and frozen once the
//! run finishes, so a sequence handed to playback never changes under it.
//!
//! Each domain has its own step shape:
//! - [`SortStep`]: array contents plus compare/swap/sorted highlights
//! - [`GraphStep`]: cumulative discovery list plus the resolved path
//! - [`RecursionStep`]: the three pegs of the disk puzzle
//!
//! [`Step`] is the closed union over the three, used where one consumer has to
//! render any domain.

use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};
use std::ops::Index;
use std::sync::Arc;

/// Numeric value held in a sorted array
pub type Value = i64;

/// Node identifier in an adjacency list
pub type NodeId = usize;

/// One instant of a sorting run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortStep {
    pub array: Vec<Value>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub sorted: BTreeSet<usize>,
}

/// What a sort step shows, derived from which highlight lists are set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStepKind {
    Compare,
    Swap,
    Mark,
}

impl SortStep {
    pub fn kind(&self) -> SortStepKind {
        if !self.comparing.is_empty() {
            SortStepKind::Compare
        } else if !self.swapping.is_empty() {
            SortStepKind::Swap
        } else {
            SortStepKind::Mark
        }
    }

    pub fn is_sorted_index(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }
}

/// A discovery event: `node` was reached from `from` across the edge ending in `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Visit {
    pub node: NodeId,
    pub from: Option<NodeId>,
    pub to: Option<NodeId>,
}

impl Visit {
    /// The seed entry every traversal starts with
    pub fn origin(node: NodeId) -> Self {
        Visit {
            node,
            from: None,
            to: None,
        }
    }

    pub fn edge(from: NodeId, to: NodeId) -> Self {
        Visit {
            node: to,
            from: Some(from),
            to: Some(to),
        }
    }
}

/// One instant of a graph traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStep {
    pub visited: Vec<Visit>,
    pub path: Vec<Visit>,
}

impl GraphStep {
    /// Node ids along the resolved path, start first
    pub fn path_nodes(&self) -> Vec<NodeId> {
        self.path.iter().map(|v| v.node).collect()
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.iter().any(|v| v.node == node)
    }

    pub fn is_on_path(&self, node: NodeId) -> bool {
        self.path.iter().any(|v| v.node == node)
    }
}

/// One instant of the disk puzzle; each peg lists disk sizes with the front as top
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecursionStep {
    pub towers: [VecDeque<u32>; 3],
}

impl RecursionStep {
    pub fn disk_count(&self) -> usize {
        self.towers.iter().map(|t| t.len()).sum()
    }
}

/// Tagged union over every recorded step shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum Step {
    Sort(SortStep),
    Graph(GraphStep),
    Recursion(RecursionStep),
}

impl Step {
    pub fn as_sort(&self) -> Option<&SortStep> {
        match self {
            Step::Sort(step) => Some(step),
            _ => None,
        }
    }
}

impl From<SortStep> for Step {
    fn from(step: SortStep) -> Self {
        Step::Sort(step)
    }
}

impl From<GraphStep> for Step {
    fn from(step: GraphStep) -> Self {
        Step::Graph(step)
    }
}

impl From<RecursionStep> for Step {
    fn from(step: RecursionStep) -> Self {
        Step::Recursion(step)
    }
}

/// Append-only log used while a recorder runs
#[derive(Debug)]
pub struct StepLog<T> {
    steps: Vec<T>,
}

impl<T> StepLog<T> {
    /// Start a log with the pre-execution state
    pub fn new(initial: T) -> Self {
        StepLog {
            steps: vec![initial],
        }
    }

    pub fn push(&mut self, step: T) {
        self.steps.push(step);
    }

    /// Most recently recorded step
    pub fn last(&self) -> &T {
        // A log always holds its initial step
        &self.steps[self.steps.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze the log
    pub fn finish(self) -> StepSequence<T> {
        StepSequence {
            steps: self.steps.into(),
        }
    }
}

/// Immutable, replayable record of one recorder run
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepSequence<T> {
    steps: Arc<[T]>,
}

// Manual impl: cloning shares the storage and must not require `T: Clone`
impl<T> Clone for StepSequence<T> {
    fn clone(&self) -> Self {
        StepSequence {
            steps: Arc::clone(&self.steps),
        }
    }
}

impl<T> StepSequence<T> {
    pub fn get(&self, index: usize) -> Option<&T> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pre-execution state
    pub fn first(&self) -> Option<&T> {
        self.steps.first()
    }

    /// Fully resolved state
    pub fn last(&self) -> Option<&T> {
        self.steps.last()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.steps
    }
}

impl<T: Clone + Into<Step>> StepSequence<T> {
    /// Re-wrap every step in the [`Step`] union
    pub fn into_tagged(self) -> StepSequence<Step> {
        StepSequence {
            steps: self.steps.iter().cloned().map(Into::into).collect(),
        }
    }
}

impl<T> Index<usize> for StepSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.steps[index]
    }
}

impl<'a, T> IntoIterator for &'a StepSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Comparison and swap counts seen up to a point in a sort recording
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}

impl SortStats {
    pub fn tally<'a>(steps: impl IntoIterator<Item = &'a SortStep>) -> Self {
        let mut stats = SortStats::default();
        for step in steps {
            match step.kind() {
                SortStepKind::Compare => stats.comparisons += 1,
                SortStepKind::Swap => stats.swaps += 1,
                SortStepKind::Mark => {}
            }
        }
        stats
    }
}

impl StepSequence<SortStep> {
    /// Counts over steps `0..=index` (clamped to the sequence)
    pub fn stats_until(&self, index: usize) -> SortStats {
        SortStats::tally(self.steps.iter().take(index.saturating_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(array: Vec<Value>) -> SortStep {
        SortStep {
            array,
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: BTreeSet::new(),
        }
    }

    #[test]
    fn test_log_keeps_initial_step() {
        let mut log = StepLog::new(plain(vec![2, 1]));
        assert_eq!(log.len(), 1);
        log.push(plain(vec![1, 2]));
        assert_eq!(log.last().array, vec![1, 2]);

        let seq = log.finish();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.first().map(|s| s.array.clone()), Some(vec![2, 1]));
        assert_eq!(seq.last_index(), 1);
    }

    #[test]
    fn test_clone_shares_storage() {
        let seq = StepLog::new(plain(vec![1])).finish();
        let copy = seq.clone();
        assert!(std::ptr::eq(seq.as_slice(), copy.as_slice()));
    }

    #[test]
    fn test_step_kind() {
        let mut step = plain(vec![3, 1]);
        assert_eq!(step.kind(), SortStepKind::Mark);
        step.swapping = vec![0, 1];
        assert_eq!(step.kind(), SortStepKind::Swap);
        step.comparing = vec![0, 1];
        assert_eq!(step.kind(), SortStepKind::Compare);
    }

    #[test]
    fn test_into_tagged_preserves_order() {
        let mut log = StepLog::new(plain(vec![1]));
        log.push(plain(vec![2]));
        let tagged = log.finish().into_tagged();
        match &tagged[1] {
            Step::Sort(step) => assert_eq!(step.array, vec![2]),
            other => panic!("unexpected step {:?}", other),
        }
    }
}
