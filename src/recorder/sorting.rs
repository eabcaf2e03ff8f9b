//! Sorting recorders
//!
//! Every recorder follows the same emission rules:
//! - a comparison emits one step with `comparing` set to the compared indices,
//!   taken before any mutation
//! - a swap or write emits its own step afterwards, with `swapping` set and the
//!   array as it looks after the mutation
//! - `sorted` only grows within a run
//! - the last step always marks every index sorted, even when the algorithm
//!   stopped early

use super::AlgorithmInfo;
use crate::step::{SortStep, StepLog, StepSequence, Value};
use std::collections::BTreeSet;

/// Working state shared by the sort recorders
struct SortTrace {
    array: Vec<Value>,
    sorted: BTreeSet<usize>,
    log: StepLog<SortStep>,
}

impl SortTrace {
    fn new(values: &[Value]) -> Self {
        Self::with_sorted(values, BTreeSet::new())
    }

    fn with_sorted(values: &[Value], sorted: BTreeSet<usize>) -> Self {
        let initial = SortStep {
            array: values.to_vec(),
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: sorted.clone(),
        };
        SortTrace {
            array: values.to_vec(),
            sorted,
            log: StepLog::new(initial),
        }
    }

    fn emit(&mut self, comparing: Vec<usize>, swapping: Vec<usize>) {
        self.log.push(SortStep {
            array: self.array.clone(),
            comparing,
            swapping,
            sorted: self.sorted.clone(),
        });
    }

    fn compare(&mut self, indices: &[usize]) {
        self.emit(indices.to_vec(), Vec::new());
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        self.emit(Vec::new(), vec![i, j]);
    }

    fn write(&mut self, index: usize, value: Value) {
        self.array[index] = value;
        self.emit(Vec::new(), vec![index]);
    }

    fn mark_sorted(&mut self, index: usize) {
        self.sorted.insert(index);
    }

    fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// Plain step showing the current array and `sorted` set
    fn snapshot(&mut self) {
        self.emit(Vec::new(), Vec::new());
    }

    fn finish(mut self, algorithm: SortAlgorithm) -> StepSequence<SortStep> {
        self.sorted = (0..self.array.len()).collect();
        self.snapshot();
        log::debug!(
            "{} recorded {} steps over {} values",
            algorithm.name(),
            self.log.len(),
            self.array.len()
        );
        self.log.finish()
    }
}

/// Bubble sort with early exit after a pass without swaps
pub fn bubble_sort_steps(values: &[Value]) -> StepSequence<SortStep> {
    let mut trace = SortTrace::new(values);
    let n = values.len();

    for i in 0..n {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            trace.compare(&[j, j + 1]);
            if trace.array[j] > trace.array[j + 1] {
                trace.swap(j, j + 1);
                swapped = true;
            }
        }

        trace.mark_sorted(n - i - 1);
        trace.snapshot();

        if !swapped {
            break;
        }
    }

    trace.finish(SortAlgorithm::Bubble)
}

/// Selection sort; the swap step only appears when the minimum moved
pub fn selection_sort_steps(values: &[Value]) -> StepSequence<SortStep> {
    let mut trace = SortTrace::new(values);
    let n = values.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;

        for j in i + 1..n {
            trace.compare(&[min_idx, j]);
            if trace.array[j] < trace.array[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            trace.swap(i, min_idx);
        }

        trace.mark_sorted(i);
        trace.snapshot();
    }

    trace.finish(SortAlgorithm::Selection)
}

/// Insertion sort, shifting the key left one adjacent exchange at a time.
///
/// After each pass the outer scan index is marked sorted, not the slot where
/// the key came to rest. The two differ whenever the key moved.
pub fn insertion_sort_steps(values: &[Value]) -> StepSequence<SortStep> {
    let initial_sorted = if values.is_empty() {
        BTreeSet::new()
    } else {
        BTreeSet::from([0])
    };
    let mut trace = SortTrace::with_sorted(values, initial_sorted);
    let n = values.len();

    for i in 1..n {
        // `key` is the slot currently holding the element being inserted
        let mut key = i;
        while key > 0 {
            trace.compare(&[key - 1, key]);
            if trace.array[key - 1] <= trace.array[key] {
                break;
            }
            trace.swap(key - 1, key);
            key -= 1;
        }

        trace.mark_sorted(i);
        trace.snapshot();
    }

    trace.finish(SortAlgorithm::Insertion)
}

/// Quick sort with a Lomuto partition around the last element
pub fn quick_sort_steps(values: &[Value]) -> StepSequence<SortStep> {
    let mut trace = SortTrace::new(values);
    if !values.is_empty() {
        quick_sort_range(&mut trace, 0, values.len() - 1);
    }
    trace.finish(SortAlgorithm::Quick)
}

/// Sort `low..=high`; the left partition is recorded in full before the right
fn quick_sort_range(trace: &mut SortTrace, low: usize, high: usize) {
    if low < high {
        let pivot = partition(trace, low, high);
        if pivot > low {
            quick_sort_range(trace, low, pivot - 1);
        }
        if pivot < high {
            quick_sort_range(trace, pivot + 1, high);
        }
    } else if !trace.is_sorted(low) {
        trace.mark_sorted(low);
        trace.snapshot();
    }
}

fn partition(trace: &mut SortTrace, low: usize, high: usize) -> usize {
    let pivot = trace.array[high];
    let mut store = low;

    for j in low..high {
        trace.compare(&[j, high]);
        if trace.array[j] < pivot {
            trace.swap(store, j);
            store += 1;
        }
    }

    trace.swap(store, high);
    trace.mark_sorted(store);
    trace.snapshot();

    store
}

/// Top-down merge sort
pub fn merge_sort_steps(values: &[Value]) -> StepSequence<SortStep> {
    let mut trace = SortTrace::new(values);
    if !values.is_empty() {
        merge_sort_range(&mut trace, 0, values.len() - 1);
    }
    trace.finish(SortAlgorithm::Merge)
}

fn merge_sort_range(trace: &mut SortTrace, left: usize, right: usize) {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort_range(trace, left, mid);
        merge_sort_range(trace, mid + 1, right);
        merge(trace, left, mid, right);
    }
}

fn merge(trace: &mut SortTrace, left: usize, mid: usize, right: usize) {
    let left_half = trace.array[left..=mid].to_vec();
    let right_half = trace.array[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_half.len() && j < right_half.len() {
        trace.compare(&[left + i, mid + 1 + j]);

        // `<=` keeps equal keys in their original order
        let value = if left_half[i] <= right_half[j] {
            i += 1;
            left_half[i - 1]
        } else {
            j += 1;
            right_half[j - 1]
        };
        trace.write(k, value);
        k += 1;
    }

    for &value in left_half[i..].iter().chain(&right_half[j..]) {
        trace.write(k, value);
        k += 1;
    }

    for index in left..=right {
        trace.mark_sorted(index);
    }
    trace.snapshot();
}

/// Heap sort: build a max-heap, then repeatedly move the root behind the heap
pub fn heap_sort_steps(values: &[Value]) -> StepSequence<SortStep> {
    let mut trace = SortTrace::new(values);
    let n = values.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut trace, n, i);
    }

    for end in (1..n).rev() {
        trace.swap(0, end);
        trace.mark_sorted(end);
        trace.snapshot();
        sift_down(&mut trace, end, 0);
    }

    trace.finish(SortAlgorithm::Heap)
}

/// Restore the max-heap property below `i` within the first `len` slots
fn sift_down(trace: &mut SortTrace, len: usize, i: usize) {
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    let considered: Vec<usize> = [i, left, right].into_iter().filter(|&x| x < len).collect();
    trace.compare(&considered);

    let mut largest = i;
    if left < len && trace.array[left] > trace.array[largest] {
        largest = left;
    }
    if right < len && trace.array[right] > trace.array[largest] {
        largest = right;
    }

    if largest != i {
        trace.swap(i, largest);
        sift_down(trace, len, largest);
    }
}

/// Selectable sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
}

impl SortAlgorithm {
    /// The array-sort set offered by the sorting view
    pub const ARRAY_SORTS: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
    ];

    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Heap,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Heap => "heap",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algo| algo.id() == id)
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            SortAlgorithm::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                time_complexity: "O(n^2)",
                space_complexity: "O(1)",
                summary: "Repeatedly swaps adjacent out-of-order elements; \
                          the largest unsorted value bubbles to the end of each pass.",
            },
            SortAlgorithm::Selection => AlgorithmInfo {
                name: "Selection Sort",
                time_complexity: "O(n^2)",
                space_complexity: "O(1)",
                summary: "Finds the minimum of the unsorted suffix and swaps it into place.",
            },
            SortAlgorithm::Insertion => AlgorithmInfo {
                name: "Insertion Sort",
                time_complexity: "O(n^2)",
                space_complexity: "O(1)",
                summary: "Grows a sorted prefix by shifting each new element left into position.",
            },
            SortAlgorithm::Quick => AlgorithmInfo {
                name: "Quick Sort",
                time_complexity: "O(n log n) average, O(n^2) worst",
                space_complexity: "O(log n)",
                summary: "Partitions around the last element as pivot, then sorts both sides.",
            },
            SortAlgorithm::Merge => AlgorithmInfo {
                name: "Merge Sort",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
                summary: "Splits the array in halves, sorts each, and merges them back.",
            },
            SortAlgorithm::Heap => AlgorithmInfo {
                name: "Heap Sort",
                time_complexity: "O(n log n)",
                space_complexity: "O(1)",
                summary: "Builds a max-heap, then repeatedly moves the root behind the heap.",
            },
        }
    }

    /// Run the recorder for this algorithm
    pub fn record(self, values: &[Value]) -> StepSequence<SortStep> {
        match self {
            SortAlgorithm::Bubble => bubble_sort_steps(values),
            SortAlgorithm::Selection => selection_sort_steps(values),
            SortAlgorithm::Insertion => insertion_sort_steps(values),
            SortAlgorithm::Quick => quick_sort_steps(values),
            SortAlgorithm::Merge => merge_sort_steps(values),
            SortAlgorithm::Heap => heap_sort_steps(values),
        }
    }

    /// Next entry of the array-sort set, wrapping around
    pub fn next(self) -> Self {
        let sorts = Self::ARRAY_SORTS;
        match sorts.iter().position(|&algo| algo == self) {
            Some(pos) => sorts[(pos + 1) % sorts.len()],
            None => sorts[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_still_has_terminal_step() {
        for algo in SortAlgorithm::ALL {
            let seq = algo.record(&[]);
            assert_eq!(seq.len(), 2, "{}", algo.name());
            assert!(seq[1].sorted.is_empty());
        }
    }

    #[test]
    fn test_swap_step_shows_array_after_mutation() {
        let seq = bubble_sort_steps(&[2, 1]);
        // initial, compare, swap, mark, final
        assert_eq!(seq[1].comparing, vec![0, 1]);
        assert_eq!(seq[1].array, vec![2, 1]);
        assert_eq!(seq[2].swapping, vec![0, 1]);
        assert_eq!(seq[2].array, vec![1, 2]);
    }

    #[test]
    fn test_ids_round_trip() {
        for algo in SortAlgorithm::ALL {
            assert_eq!(SortAlgorithm::from_id(algo.id()), Some(algo));
        }
        assert_eq!(SortAlgorithm::from_id("bogo"), None);
    }

    #[test]
    fn test_next_cycles_array_sorts() {
        assert_eq!(SortAlgorithm::Merge.next(), SortAlgorithm::Bubble);
        assert_eq!(SortAlgorithm::Heap.next(), SortAlgorithm::Bubble);
        assert_eq!(SortAlgorithm::Bubble.next(), SortAlgorithm::Selection);
    }
}
