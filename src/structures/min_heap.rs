//! Binary min-heap stored in a flat array
//!
//! Index `i` has its parent at `(i - 1) / 2` and children at `2i + 1` and
//! `2i + 2`. [`MinHeap::heap_structure`] exposes those links for layout only.

use super::{LiveStructure, Operation, Outcome, StructureSnapshot};
use serde::Serialize;

/// Layout entry for one heap slot; absent links are `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapNode<T> {
    pub value: T,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinHeap<T> {
    heap: Vec<T>,
}

fn parent_index(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

fn right_child_index(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { heap: Vec::new() }
    }

    /// Insert and return the heap array after sifting
    pub fn insert(&mut self, element: T) -> &[T] {
        self.heap.push(element);
        self.sift_up(self.heap.len() - 1);
        &self.heap
    }

    /// Remove the minimum, or `None` when empty
    pub fn extract_min(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        min
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Heap array in slot order
    pub fn items(&self) -> &[T] {
        &self.heap
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn sift_up(&mut self, index: usize) {
        let mut current = index;
        while current > 0 {
            let parent = parent_index(current);
            if self.heap[parent] <= self.heap[current] {
                break;
            }
            self.heap.swap(current, parent);
            current = parent;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let len = self.heap.len();
        let mut current = index;
        loop {
            let left = left_child_index(current);
            let right = right_child_index(current);
            let mut smallest = current;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == current {
                break;
            }

            self.heap.swap(current, smallest);
            current = smallest;
        }
    }
}

impl<T: Clone> MinHeap<T> {
    /// Value and parent/child links of every slot
    pub fn heap_structure(&self) -> Vec<HeapNode<T>> {
        let len = self.heap.len();
        self.heap
            .iter()
            .enumerate()
            .map(|(i, value)| HeapNode {
                value: value.clone(),
                parent: (i > 0).then(|| parent_index(i)),
                left: Some(left_child_index(i)).filter(|&l| l < len),
                right: Some(right_child_index(i)).filter(|&r| r < len),
            })
            .collect()
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> LiveStructure for MinHeap<T> {
    type Item = T;

    fn operate(&mut self, operation: Operation<T>) -> Outcome<T> {
        match operation {
            Operation::Insert(value) => {
                self.insert(value);
                Outcome::Inserted
            }
            Operation::Remove => self.extract_min().map_or(Outcome::Empty, Outcome::Removed),
            Operation::Peek => self
                .peek_min()
                .cloned()
                .map_or(Outcome::Empty, Outcome::Peeked),
        }
    }

    fn query(&self) -> StructureSnapshot<T> {
        StructureSnapshot {
            items: self.heap.clone(),
            layout: Some(self.heap_structure()),
        }
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn clear(&mut self) {
        MinHeap::clear(self);
    }
}
