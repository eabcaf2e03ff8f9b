// Integration tests for the sorting recorders

use algoviz::recorder::{
    bubble_sort_steps, heap_sort_steps, insertion_sort_steps, merge_sort_steps,
    quick_sort_steps, selection_sort_steps, SortAlgorithm,
};
use algoviz::step::{SortStats, SortStep, SortStepKind, StepSequence, Value};
use std::collections::BTreeSet;

const INPUTS: &[&[Value]] = &[
    &[5, 3, 1],
    &[1, 2, 3, 4],
    &[4, 3, 2, 1],
    &[7],
    &[2, 2, 1, 1, 3],
    &[38, 27, 43, 3, 9, 82, 10],
    &[5, 5, 5, 5],
];

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}

fn all_indices(len: usize) -> BTreeSet<usize> {
    (0..len).collect()
}

#[test]
fn test_bubble_sort_three_values() {
    let seq = bubble_sort_steps(&[5, 3, 1]);
    let last = seq.last().expect("sequence is never empty");

    assert_eq!(seq[0].array, vec![5, 3, 1]);
    assert_eq!(last.array, vec![1, 3, 5]);
    assert_eq!(last.sorted, BTreeSet::from([0, 1, 2]));

    // initial, two passes of (compare, swap)* + mark, final empty pass, terminal
    assert_eq!(seq.len(), 11);
    assert_eq!(
        seq.stats_until(seq.last_index()),
        SortStats {
            comparisons: 3,
            swaps: 3
        }
    );
}

#[test]
fn test_every_sort_ends_sorted() {
    for algo in SortAlgorithm::ALL {
        for input in INPUTS {
            let seq = algo.record(input);
            let last = seq.last().expect("sequence is never empty");
            assert_eq!(last.array, sorted_copy(input), "{} on {:?}", algo.name(), input);
            assert_eq!(last.sorted, all_indices(input.len()), "{}", algo.name());
            assert!(last.comparing.is_empty() && last.swapping.is_empty());
        }
    }
}

#[test]
fn test_first_step_is_untouched_input() {
    for algo in SortAlgorithm::ALL {
        let seq = algo.record(&[3, 1, 2]);
        assert_eq!(seq[0].array, vec![3, 1, 2]);
        assert!(seq[0].comparing.is_empty());
        assert!(seq[0].swapping.is_empty());
    }
}

#[test]
fn test_sorted_set_only_grows() {
    for algo in SortAlgorithm::ALL {
        for input in INPUTS {
            let seq = algo.record(input);
            for pair in seq.as_slice().windows(2) {
                assert!(
                    pair[0].sorted.is_subset(&pair[1].sorted),
                    "{} dropped a sorted index",
                    algo.name()
                );
            }
        }
    }
}

#[test]
fn test_every_step_is_a_permutation_of_the_input() {
    // Merge sort overwrites slots, so only exchange-based sorts keep this
    let exchange_sorts = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];
    let input = [38, 27, 43, 3, 9, 82, 10];
    let expected = sorted_copy(&input);
    for algo in exchange_sorts {
        for step in algo.record(&input).iter() {
            assert_eq!(sorted_copy(&step.array), expected, "{}", algo.name());
        }
    }
}

#[test]
fn test_compare_steps_leave_array_unchanged() {
    for algo in SortAlgorithm::ALL {
        let seq = algo.record(&[4, 1, 3, 2]);
        for pair in seq.as_slice().windows(2) {
            if pair[1].kind() == SortStepKind::Compare {
                assert_eq!(pair[0].array, pair[1].array, "{}", algo.name());
            }
        }
    }
}

#[test]
fn test_selection_skips_swap_when_minimum_in_place() {
    let seq = selection_sort_steps(&[1, 2, 3]);
    // initial, cmp, cmp, mark 0, cmp, mark 1, terminal
    assert_eq!(seq.len(), 7);
    assert_eq!(seq.stats_until(seq.last_index()).swaps, 0);
}

#[test]
fn test_insertion_marks_scan_index() {
    let seq = insertion_sort_steps(&[3, 2, 1]);
    assert_eq!(seq[0].sorted, BTreeSet::from([0]));

    let marks: Vec<&SortStep> = seq
        .iter()
        .skip(1)
        .filter(|step| step.kind() == SortStepKind::Mark)
        .collect();
    // One mark per pass plus the terminal step
    assert_eq!(marks.len(), 3);
    assert_eq!(marks[0].array, vec![2, 3, 1]);
    assert_eq!(marks[0].sorted, BTreeSet::from([0, 1]));
    assert_eq!(marks[1].array, vec![1, 2, 3]);
    assert_eq!(marks[1].sorted, BTreeSet::from([0, 1, 2]));
}

#[test]
fn test_insertion_shifts_with_adjacent_swaps() {
    let seq = insertion_sort_steps(&[3, 2, 1]);
    let swaps: Vec<Vec<usize>> = seq
        .iter()
        .filter(|step| step.kind() == SortStepKind::Swap)
        .map(|step| step.swapping.clone())
        .collect();
    assert_eq!(swaps, vec![vec![0, 1], vec![1, 2], vec![0, 1]]);
}

#[test]
fn test_quick_sort_trace() {
    use SortStepKind::{Compare, Mark, Swap};
    type Row = (SortStepKind, Vec<usize>, Vec<Value>, Vec<usize>);

    let seq = quick_sort_steps(&[3, 1, 2]);
    let trace: Vec<Row> = seq
        .iter()
        .map(|step| {
            let indices = match step.kind() {
                SortStepKind::Compare => step.comparing.clone(),
                _ => step.swapping.clone(),
            };
            let sorted: Vec<usize> = step.sorted.iter().copied().collect();
            (step.kind(), indices, step.array.clone(), sorted)
        })
        .collect();

    let expected: Vec<Row> = vec![
        (Mark, vec![], vec![3, 1, 2], vec![]),
        // Every probe is compared against the pivot slot
        (Compare, vec![0, 2], vec![3, 1, 2], vec![]),
        (Compare, vec![1, 2], vec![3, 1, 2], vec![]),
        (Swap, vec![0, 1], vec![1, 3, 2], vec![]),
        // Final pivot placement, then the pivot slot is marked
        (Swap, vec![1, 2], vec![1, 2, 3], vec![]),
        (Mark, vec![], vec![1, 2, 3], vec![1]),
        // Single-element ranges, left before right
        (Mark, vec![], vec![1, 2, 3], vec![0, 1]),
        (Mark, vec![], vec![1, 2, 3], vec![0, 1, 2]),
        (Mark, vec![], vec![1, 2, 3], vec![0, 1, 2]),
    ];
    assert_eq!(trace, expected);
}

#[test]
fn test_quick_sort_finishes_left_partition_first() {
    let seq = quick_sort_steps(&[2, 1, 4, 3]);
    let mut marked: Vec<usize> = Vec::new();
    for pair in seq.as_slice().windows(2) {
        marked.extend(pair[1].sorted.difference(&pair[0].sorted));
    }
    // Pivot 3 lands at 2, then the left range settles before slot 3
    assert_eq!(marked, vec![2, 0, 1, 3]);
}

#[test]
fn test_merge_writes_one_slot_at_a_time() {
    let seq = merge_sort_steps(&[2, 1]);
    let writes: Vec<&SortStep> = seq
        .iter()
        .filter(|step| step.kind() == SortStepKind::Swap)
        .collect();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].swapping, vec![0]);
    assert_eq!(writes[0].array, vec![1, 1]);
    assert_eq!(writes[1].swapping, vec![1]);
    assert_eq!(writes[1].array, vec![1, 2]);
}

#[test]
fn test_heap_sort_compares_parent_and_children() {
    let seq = heap_sort_steps(&[1, 5, 3]);
    let first_compare = seq
        .iter()
        .find(|step| step.kind() == SortStepKind::Compare)
        .expect("heap sort compares");
    assert_eq!(first_compare.comparing, vec![0, 1, 2]);
    assert!(seq.iter().all(|step| step.comparing.len() <= 3));
}

#[test]
fn test_stats_until_counts_prefix() {
    let seq: StepSequence<SortStep> = bubble_sort_steps(&[2, 1]);
    assert_eq!(seq.stats_until(0), SortStats::default());
    assert_eq!(
        seq.stats_until(1),
        SortStats {
            comparisons: 1,
            swaps: 0
        }
    );
    // Indices past the end are clamped
    assert_eq!(seq.stats_until(100), seq.stats_until(seq.last_index()));
}
