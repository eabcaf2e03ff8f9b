// Property tests for recorders, live structures and playback

use algoviz::playback::{PlaybackController, PlaybackState};
use algoviz::recorder::{tower_of_hanoi_steps, SortAlgorithm};
use algoviz::scene::HanoiScene;
use algoviz::structures::{MinHeap, Queue, Stack};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::time::Duration;

proptest! {
    /// Property: every sort ends on the ascending input with all indices sorted
    #[test]
    fn prop_sorts_end_sorted(values in prop::collection::vec(-500i64..500, 0..40)) {
        let mut expected = values.clone();
        expected.sort();
        for algo in SortAlgorithm::ALL {
            let seq = algo.record(&values);
            let last = seq.last().expect("sequence is never empty");
            prop_assert_eq!(&last.array, &expected);
            prop_assert_eq!(&last.sorted, &(0..values.len()).collect::<BTreeSet<_>>());
        }
    }

    /// Property: every puzzle state is a permutation of the disks with ordered pegs
    #[test]
    fn prop_hanoi_states_are_valid(disks in 0u32..9) {
        let seq = tower_of_hanoi_steps(disks);
        prop_assert_eq!(seq.len(), 1usize << disks);
        let all: Vec<u32> = (1..=disks).collect();
        for step in seq.iter() {
            let mut seen: Vec<u32> = step.towers.iter().flatten().copied().collect();
            seen.sort_unstable();
            prop_assert_eq!(&seen, &all);
            for peg in &step.towers {
                prop_assert!(peg.iter().zip(peg.iter().skip(1)).all(|(a, b)| a > b));
            }
        }
    }

    /// Property: pops mirror pushes
    #[test]
    fn prop_stack_is_lifo(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut stack = Stack::new();
        for &v in &values {
            stack.push(v);
        }
        let popped: Vec<i32> = std::iter::from_fn(|| stack.pop()).collect();
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(popped, reversed);
    }

    /// Property: dequeues match enqueues
    #[test]
    fn prop_queue_is_fifo(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut queue = Queue::new();
        for &v in &values {
            queue.enqueue(v);
        }
        let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
        prop_assert_eq!(drained, values);
    }

    /// Property: extractions come out non-decreasing and lose nothing
    #[test]
    fn prop_heap_extracts_in_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut heap = MinHeap::new();
        for &v in &values {
            heap.insert(v);
        }
        let drained: Vec<i32> = std::iter::from_fn(|| heap.extract_min()).collect();
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(drained, expected);
    }

    /// Property: the step index stays in range and at most one tick is pending
    #[test]
    fn prop_playback_index_bounded(ops in prop::collection::vec((0u8..7, 0u64..1000), 0..60)) {
        let mut ctl = PlaybackController::new(HanoiScene { disks: 3 });
        for (op, millis) in ops {
            match op {
                0 => ctl.play(),
                1 => ctl.pause(),
                2 => ctl.reset(),
                3 => { ctl.step_forward(); }
                4 => { ctl.step_backward(); }
                5 => { ctl.advance(Duration::from_millis(millis)); }
                _ => { ctl.seek(millis as usize); }
            }
            prop_assert!(ctl.current_index() < ctl.len().max(1));
            prop_assert_eq!(ctl.pending_tick().is_some(), ctl.state() == PlaybackState::Playing);
        }
    }
}
