//! LIFO stack
//!
//! `top` mirrors the index of the last element so a view can point at it;
//! it is `None` while the stack is empty.

use super::{LiveStructure, Operation, Outcome, StructureSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
    top: Option<usize>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            items: Vec::new(),
            top: None,
        }
    }

    /// Push onto the top and return the current contents, bottom first
    pub fn push(&mut self, element: T) -> &[T] {
        self.items.push(element);
        self.top = Some(self.top.map_or(0, |top| top + 1));
        &self.items
    }

    /// Remove the top element, or `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop()?;
        self.top = self.top.and_then(|top| top.checked_sub(1));
        Some(item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.and_then(|top| self.items.get(top))
    }

    pub fn top_index(&self) -> Option<usize> {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn size(&self) -> usize {
        self.top.map_or(0, |top| top + 1)
    }

    /// Contents from bottom to top
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.top = None;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> LiveStructure for Stack<T> {
    type Item = T;

    fn operate(&mut self, operation: Operation<T>) -> Outcome<T> {
        match operation {
            Operation::Insert(value) => {
                self.push(value);
                Outcome::Inserted
            }
            Operation::Remove => self.pop().map_or(Outcome::Empty, Outcome::Removed),
            Operation::Peek => self
                .peek()
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
        Stack::clear(self);
    }
}
