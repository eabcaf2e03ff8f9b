//! Single-slot tick scheduler on a host-driven timeline
//!
//! There is no background thread. The owner feeds elapsed time in through
//! [`TickScheduler::advance`], and at most one tick is ever pending:
//! scheduling a new tick supersedes the old one, so a cancelled or superseded
//! handle can never fire.

use std::time::Duration;

/// Identifies one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    handle: TickHandle,
    remaining: Duration,
}

/// A tick that came due during [`TickScheduler::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTick {
    pub handle: TickHandle,
    /// Part of the advanced time left over after the tick fired
    pub leftover: Duration,
}

#[derive(Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    pending: Option<PendingTick>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick `delay` from now, replacing any pending tick
    pub fn schedule(&mut self, delay: Duration) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        if let Some(old) = self.pending.replace(PendingTick {
            handle,
            remaining: delay,
        }) {
            log::trace!("tick {} superseded by {}", old.handle.0, handle.0);
        }
        handle
    }

    /// Drop the pending tick, returning its handle if there was one
    pub fn cancel(&mut self) -> Option<TickHandle> {
        self.pending.take().map(|tick| tick.handle)
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending.map(|tick| tick.handle)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until the pending tick is due
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.map(|tick| tick.remaining)
    }

    /// Move the timeline forward by `elapsed`.
    ///
    /// If the pending tick comes due it is removed and returned together with
    /// the unused part of `elapsed`. Callers that reschedule from the fired tick
    /// should feed the leftover back in so long frames still fire every tick in
    /// order.
    pub fn advance(&mut self, elapsed: Duration) -> Option<FiredTick> {
        let tick = self.pending.as_mut()?;
        if elapsed < tick.remaining {
            tick.remaining -= elapsed;
            return None;
        }

        let leftover = elapsed - tick.remaining;
        let handle = tick.handle;
        self.pending = None;
        Some(FiredTick { handle, leftover })
    }
}
