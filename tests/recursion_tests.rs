// Integration tests for the disk puzzle recorder

use algoviz::recorder::tower_of_hanoi_steps;
use algoviz::step::RecursionStep;
use std::collections::VecDeque;

/// Labels strictly decrease from the front of a peg
fn peg_is_ordered(peg: &VecDeque<u32>) -> bool {
    peg.iter().zip(peg.iter().skip(1)).all(|(top, below)| top > below)
}

/// Pegs whose top disk changed between two steps
fn moved(before: &RecursionStep, after: &RecursionStep) -> (usize, usize) {
    let from = (0..3)
        .find(|&p| after.towers[p].len() + 1 == before.towers[p].len())
        .expect("one peg lost a disk");
    let to = (0..3)
        .find(|&p| after.towers[p].len() == before.towers[p].len() + 1)
        .expect("one peg gained a disk");
    (from, to)
}

#[test]
fn test_three_disks_take_eight_steps() {
    let seq = tower_of_hanoi_steps(3);
    assert_eq!(seq.len(), 8);

    let first = seq.first().expect("sequence is never empty");
    assert_eq!(first.towers[0], VecDeque::from([3, 2, 1]));

    let last = seq.last().expect("sequence is never empty");
    assert!(last.towers[0].is_empty());
    assert!(last.towers[1].is_empty());
    assert_eq!(last.towers[2], VecDeque::from([3, 2, 1]));
}

#[test]
fn test_step_count_is_power_of_two() {
    for disks in 0..=8 {
        let seq = tower_of_hanoi_steps(disks);
        assert_eq!(seq.len(), 1 << disks);
    }
}

#[test]
fn test_every_step_is_a_legal_single_move() {
    let seq = tower_of_hanoi_steps(5);
    for step in seq.iter() {
        assert_eq!(step.disk_count(), 5);
        assert!(step.towers.iter().all(peg_is_ordered));
    }

    for pair in seq.as_slice().windows(2) {
        let (from, to) = moved(&pair[0], &pair[1]);
        assert_ne!(from, to);
        // The disk that left `from` is the one now on top of `to`
        assert_eq!(pair[0].towers[from].front(), pair[1].towers[to].front());
    }
}

#[test]
fn test_top_disk_moves_every_other_step() {
    let seq = tower_of_hanoi_steps(4);
    for (i, pair) in seq.as_slice().windows(2).enumerate() {
        let (from, to) = moved(&pair[0], &pair[1]);
        let disk = pair[1].towers[to].front().copied();
        assert_eq!(pair[0].towers[from].front().copied(), disk);
        assert_eq!(disk == Some(4), i % 2 == 0, "move {}", i);
    }
}
