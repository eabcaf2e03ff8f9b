//! FIFO queue
//!
//! Elements live in a plain vector: dequeue removes slot 0 and shifts the rest
//! down, so `front_index` stays at 0 and `rear_index` follows the last element.

use super::{LiveStructure, Operation, Outcome, StructureSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: Vec<T>,
    front_index: usize,
    rear_index: Option<usize>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: Vec::new(),
            front_index: 0,
            rear_index: None,
        }
    }

    /// Append at the rear and return the current contents, front first
    pub fn enqueue(&mut self, element: T) -> &[T] {
        self.items.push(element);
        self.rear_index = Some(self.rear_index.map_or(0, |rear| rear + 1));
        &self.items
    }

    /// Remove the front element, or `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.remove(0);
        self.rear_index = self.rear_index.and_then(|rear| rear.checked_sub(1));
        Some(item)
    }

    pub fn front(&self) -> Option<&T> {
        self.items.get(self.front_index)
    }

    pub fn rear(&self) -> Option<&T> {
        self.rear_index.and_then(|rear| self.items.get(rear))
    }

    pub fn front_index(&self) -> usize {
        self.front_index
    }

    pub fn rear_index(&self) -> Option<usize> {
        self.rear_index
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Contents from front to rear
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.rear_index = None;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> LiveStructure for Queue<T> {
    type Item = T;

    fn operate(&mut self, operation: Operation<T>) -> Outcome<T> {
        match operation {
            Operation::Insert(value) => {
                self.enqueue(value);
                Outcome::Inserted
            }
            Operation::Remove => self.dequeue().map_or(Outcome::Empty, Outcome::Removed),
            Operation::Peek => self
                .front()
                .cloned()
                .map_or(Outcome::Empty, Outcome::Peeked),
        }
    }

    fn query(&self) -> StructureSnapshot<T> {
        StructureSnapshot {
            items: self.items.clone(),
            layout: None,
        }
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn clear(&mut self) {
        Queue::clear(self);
    }
}
