// Integration tests for the live data structures

use algoviz::structures::{
    LiveStructure, MinHeap, Operation, Outcome, Queue, Stack, StructureKind,
};

#[test]
fn test_stack_pops_in_reverse_order() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.push(3), &[1, 2, 3]);

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_queue_dequeues_in_arrival_order() {
    let mut queue = Queue::new();
    for v in [4, 5, 6] {
        queue.enqueue(v);
    }
    assert_eq!(queue.front(), Some(&4));
    assert_eq!(queue.rear(), Some(&6));

    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(queue.dequeue(), Some(5));
    assert_eq!(queue.dequeue(), Some(6));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.rear_index(), None);
}

#[test]
fn test_heap_extracts_smallest_first() {
    let mut heap = MinHeap::new();
    heap.insert(5);
    heap.insert(1);
    heap.insert(3);
    assert_eq!(heap.peek_min(), Some(&1));

    assert_eq!(heap.extract_min(), Some(1));
    assert_eq!(heap.extract_min(), Some(3));
    assert_eq!(heap.extract_min(), Some(5));
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_heap_keeps_parent_below_children() {
    let mut heap = MinHeap::new();
    for v in [9, 4, 7, 1, 8, 2, 6, 3, 5] {
        heap.insert(v);
    }
    heap.extract_min();
    heap.extract_min();

    let layout = heap.heap_structure();
    for (index, node) in layout.iter().enumerate() {
        for child in [node.left, node.right].into_iter().flatten() {
            assert!(node.value <= layout[child].value);
            assert_eq!(layout[child].parent, Some(index));
        }
    }
}

#[test]
fn test_operate_reports_empty_instead_of_failing() {
    let mut structures: Vec<Box<dyn LiveStructure<Item = i32>>> = vec![
        Box::new(Stack::new()),
        Box::new(Queue::new()),
        Box::new(MinHeap::new()),
    ];
    for structure in structures.iter_mut() {
        assert!(structure.operate(Operation::Remove).is_empty());
        assert!(structure.operate(Operation::Peek).is_empty());
        assert_eq!(structure.operate(Operation::Insert(2)), Outcome::Inserted);
        assert_eq!(structure.operate(Operation::Peek), Outcome::Peeked(2));
        assert_eq!(structure.operate(Operation::Remove), Outcome::Removed(2));
        assert!(structure.is_empty());
    }
}

#[test]
fn test_clear_empties_every_structure() {
    let mut stack = Stack::new();
    let mut queue = Queue::new();
    let mut heap = MinHeap::new();
    for v in 0..5 {
        stack.operate(Operation::Insert(v));
        queue.operate(Operation::Insert(v));
        heap.operate(Operation::Insert(v));
    }

    LiveStructure::clear(&mut stack);
    LiveStructure::clear(&mut queue);
    LiveStructure::clear(&mut heap);
    assert_eq!(stack.top_index(), None);
    assert_eq!(queue.rear_index(), None);
    assert!(heap.query().items.is_empty());
}

#[test]
fn test_only_heap_snapshots_carry_layout() {
    let mut stack = Stack::new();
    let mut heap = MinHeap::new();
    stack.push(1);
    heap.insert(1);
    assert!(stack.query().layout.is_none());
    assert_eq!(heap.query().layout.map(|l| l.len()), Some(1));
}

#[test]
fn test_structure_kinds_cycle_and_parse() {
    let mut kind = StructureKind::Stack;
    for _ in 0..StructureKind::ALL.len() {
        assert_eq!(StructureKind::from_id(kind.id()), Some(kind));
        kind = kind.next();
    }
    assert_eq!(kind, StructureKind::Stack);
    assert_eq!(StructureKind::from_id("tree"), None);
}
