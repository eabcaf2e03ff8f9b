//! Disk puzzle recorder
//!
//! Pegs are ordered sequences of disk sizes with the front as the top. Peg 0
//! starts as `[n, n-1, ..., 1]` front to back, and every move keeps each peg
//! strictly decreasing from front to back. One step is recorded per physical
//! move, so `n` disks yield `2^n` steps including the initial state.

use crate::step::{RecursionStep, StepLog, StepSequence};
use std::collections::VecDeque;

/// All disks stacked on peg 0
pub fn initial_towers(disks: u32) -> RecursionStep {
    RecursionStep {
        towers: [(1..=disks).rev().collect(), VecDeque::new(), VecDeque::new()],
    }
}

/// Record the full solution moving `disks` disks from peg 0 to peg 2
pub fn tower_of_hanoi_steps(disks: u32) -> StepSequence<RecursionStep> {
    let mut log = StepLog::new(initial_towers(disks));

    move_tower(disks, 0, 2, 1, &mut log);

    log::debug!(
        "tower of hanoi recorded {} steps for {} disks",
        log.len(),
        disks
    );
    log.finish()
}

fn move_tower(
    n: u32,
    source: usize,
    destination: usize,
    auxiliary: usize,
    log: &mut StepLog<RecursionStep>,
) {
    match n {
        0 => {}
        1 => move_disk(source, destination, log),
        _ => {
            move_tower(n - 1, source, auxiliary, destination, log);
            move_disk(source, destination, log);
            move_tower(n - 1, auxiliary, destination, source, log);
        }
    }
}

fn move_disk(from: usize, to: usize, log: &mut StepLog<RecursionStep>) {
    let mut next = log.last().clone();
    if let Some(disk) = next.towers[from].pop_front() {
        next.towers[to].push_front(disk);
    }
    log.push(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_disk() {
        let seq = tower_of_hanoi_steps(1);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1].towers[2], VecDeque::from([1]));
        assert!(seq[1].towers[0].is_empty());
    }

    #[test]
    fn test_zero_disks_is_initial_state_only() {
        let seq = tower_of_hanoi_steps(0);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].disk_count(), 0);
    }

    #[test]
    fn test_initial_peg_order() {
        let seq = tower_of_hanoi_steps(4);
        assert_eq!(seq[0].towers[0], VecDeque::from([4, 3, 2, 1]));
    }
}
