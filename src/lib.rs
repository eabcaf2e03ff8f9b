//! # Introduction
//!
//! algoviz records classic algorithms one observable state at a time and plays
//! the recording back at a chosen speed in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Recorder → StepSequence → PlaybackController → TUI
//! ```
//!
//! 1. [`input`]: seeded random arrays and grid graphs.
//! 2. [`recorder`]: runs a sort, graph traversal or the disk puzzle to
//!    completion and returns every intermediate state as a
//!    [`step::StepSequence`].
//! 3. [`scene`]: bundles an algorithm with its input so playback can record it
//!    lazily.
//! 4. [`playback`]: play/pause/reset state machine paced by a cancellable tick
//!    scheduler on a host-driven clock.
//! 5. [`structures`]: live stack, queue and min-heap that are mutated directly
//!    instead of recorded.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorts: bubble, selection, insertion, quick, merge, heap.
//! Graph traversals: breadth-first, depth-first, Dijkstra.
//! Recursion: Tower of Hanoi.

pub mod config;
pub mod error;
pub mod input;
pub mod playback;
pub mod recorder;
pub mod scene;
pub mod step;
pub mod structures;
pub mod ui;
