//! Live data structures
//!
//! Unlike the recorders, these keep no history: a view owns one instance,
//! mutates it in response to user operations, and queries the current state to
//! render it.
//!
//! - [`stack`]: LIFO stack with an explicit top index
//! - [`queue`]: FIFO queue with explicit front/rear indices
//! - [`min_heap`]: binary min-heap with a per-index layout map
//!
//! Removing from an empty structure is not an error. It yields `None`, or
//! [`Outcome::Empty`] through [`LiveStructure::operate`].

pub mod min_heap;
pub mod queue;
pub mod stack;

pub use min_heap::{HeapNode, MinHeap};
pub use queue::Queue;
pub use stack::Stack;

use serde::Serialize;

/// A user-issued operation on a live structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<T> {
    /// push / enqueue / insert
    Insert(T),
    /// pop / dequeue / extract-min
    Remove,
    /// peek / front / find-min
    Peek,
}

/// Result of an [`Operation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Inserted,
    Removed(T),
    Peeked(T),
    Empty,
}

impl<T> Outcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }
}

/// Pull-based view of a structure's current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSnapshot<T> {
    pub items: Vec<T>,
    /// Only set for heaps
    pub layout: Option<Vec<HeapNode<T>>>,
}

/// Common surface of the live structures, as used by the control layer
pub trait LiveStructure {
    type Item: Clone;

    fn operate(&mut self, operation: Operation<Self::Item>) -> Outcome<Self::Item>;

    fn query(&self) -> StructureSnapshot<Self::Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Which live structure a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Stack,
    Queue,
    MinHeap,
}

impl StructureKind {
    pub const ALL: [StructureKind; 3] = [
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::MinHeap,
    ];

    pub fn id(self) -> &'static str {
        match self {
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
            StructureKind::MinHeap => "heap",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::MinHeap => "Min Heap",
        }
    }

    /// Cost summary shown next to the structure
    pub fn complexity(self) -> &'static str {
        match self {
            StructureKind::Stack => "Push/Pop: O(1)",
            StructureKind::Queue => "Enqueue: O(1), Dequeue: O(n)",
            StructureKind::MinHeap => "Insert/Extract: O(log n)",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            StructureKind::Stack => {
                "Last in, first out: elements are pushed onto and popped off the top."
            }
            StructureKind::Queue => {
                "First in, first out: elements join at the rear and leave from the front."
            }
            StructureKind::MinHeap => {
                "Complete binary tree where every parent is no larger than its children; \
                 the root is always the minimum."
            }
        }
    }

    /// Verbs for insert / remove / peek
    pub fn verbs(self) -> [&'static str; 3] {
        match self {
            StructureKind::Stack => ["push", "pop", "peek"],
            StructureKind::Queue => ["enqueue", "dequeue", "front"],
            StructureKind::MinHeap => ["insert", "extract-min", "find-min"],
        }
    }

    pub fn next(self) -> Self {
        match self {
            StructureKind::Stack => StructureKind::Queue,
            StructureKind::Queue => StructureKind::MinHeap,
            StructureKind::MinHeap => StructureKind::Stack,
        }
    }
}
