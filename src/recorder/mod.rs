//! Step recorders
//!
//! Pure functions that run an algorithm to completion and return every
//! observable state as a [`StepSequence`](crate::step::StepSequence):
//!
//! - [`sorting`]: bubble, selection, insertion, quick, merge and heap sort
//! - [`graph`]: breadth-first, depth-first and Dijkstra over an [`AdjacencyList`]
//! - [`recursion`]: the three-peg disk puzzle
//!
//! Recording is eager and synchronous. A recorder never stops early: once
//! started, it always appends a terminal step.

pub mod graph;
pub mod recursion;
pub mod sorting;

pub use graph::{
    breadth_first_steps, depth_first_steps, dijkstra_steps, path_weight, AdjacencyList, Edge,
    GraphAlgorithm,
};
pub use recursion::{initial_towers, tower_of_hanoi_steps};
pub use sorting::{
    bubble_sort_steps, heap_sort_steps, insertion_sort_steps, merge_sort_steps, quick_sort_steps,
    selection_sort_steps, SortAlgorithm,
};

/// Static description of a selectable algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub summary: &'static str,
}

/// Description of the disk puzzle, the only recursion recorder
pub const TOWER_OF_HANOI: AlgorithmInfo = AlgorithmInfo {
    name: "Tower of Hanoi",
    time_complexity: "O(2^n)",
    space_complexity: "O(n)",
    summary: "Move every disk from the first peg to the third, one disk at a time, \
              keeping every peg ordered by size.",
};
