//! Timer-driven walk over a recorded sequence
//!
//! ```text
//!            play                tick (index < last)
//!   Idle ──────────▶ Playing ◀────────────┐
//!    ▲                 │  │ └──────────────┘
//!    │ reset     pause │  │ tick (index == last)
//!    │                 ▼  ▼
//!    └───────── Paused   Completed
//! ```
//!
//! `reset` is reachable from every state. Replacing or editing the scene
//! resets and discards the recorded sequence, so a stale recording is never
//! shown for new input.

use super::speed::SpeedLevel;
use super::timer::{TickHandle, TickScheduler};
use crate::scene::StepSource;
use crate::step::StepSequence;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Completed,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "Ready",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Completed => "Completed",
        }
    }
}

pub struct PlaybackController<S: StepSource> {
    scene: S,
    sequence: Option<StepSequence<S::Step>>,
    index: usize,
    state: PlaybackState,
    speed: SpeedLevel,
    timer: TickScheduler,
}

impl<S: StepSource> PlaybackController<S> {
    pub fn new(scene: S) -> Self {
        Self::with_speed(scene, SpeedLevel::default())
    }

    pub fn with_speed(scene: S, speed: SpeedLevel) -> Self {
        PlaybackController {
            scene,
            sequence: None,
            index: 0,
            state: PlaybackState::Idle,
            speed,
            timer: TickScheduler::new(),
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Recorded sequence, if one exists for the current scene
    pub fn sequence(&self) -> Option<&StepSequence<S::Step>> {
        self.sequence.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Step at the current index; `None` until something has been recorded
    pub fn current_step(&self) -> Option<&S::Step> {
        self.sequence.as_ref().and_then(|seq| seq.get(self.index))
    }

    /// Number of recorded steps, 0 before the first recording
    pub fn len(&self) -> usize {
        self.sequence.as_ref().map_or(0, StepSequence::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.timer.pending()
    }

    /// Record the scene if no sequence exists yet; returns the last index
    pub fn prepare(&mut self) -> usize {
        let scene = &self.scene;
        self.sequence
            .get_or_insert_with(|| scene.record())
            .last_index()
    }

    /// Start or resume playback, recording first if needed
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                log::trace!("play ignored: already playing");
                return;
            }
            PlaybackState::Completed => {
                log::trace!("play ignored: playback completed, reset first");
                return;
            }
            PlaybackState::Idle | PlaybackState::Paused => {}
        }

        let last = self.prepare();
        if self.index >= last {
            self.complete();
            return;
        }

        self.state = PlaybackState::Playing;
        let handle = self.timer.schedule(self.speed.delay());
        log::debug!(
            "playing from step {} of {} (tick {})",
            self.index,
            last,
            handle.id()
        );
    }

    /// Stop at the current step; only meaningful while playing
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.timer.cancel();
            self.state = PlaybackState::Paused;
            log::debug!("paused at step {}", self.index);
        }
    }

    /// Toggle between playing and paused
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the first step, idle; the recording is kept
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.index = 0;
        self.state = PlaybackState::Idle;
        log::debug!("reset");
    }

    /// Change speed; a pending tick is rescheduled with the new delay
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        self.speed = speed;
        if self.is_playing() {
            self.timer.schedule(speed.delay());
        }
    }

    /// Swap in a new scene, returning the old one
    pub fn replace_scene(&mut self, scene: S) -> S {
        let old = std::mem::replace(&mut self.scene, scene);
        self.invalidate();
        old
    }

    /// Edit the scene in place (algorithm, input size, source data)
    pub fn update_scene(&mut self, edit: impl FnOnce(&mut S)) {
        edit(&mut self.scene);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.reset();
        self.sequence = None;
    }

    /// Feed elapsed time into the timeline, firing every tick that comes due.
    ///
    /// Returns how many ticks fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let mut budget = elapsed;
        let mut fired = 0;
        while let Some(tick) = self.timer.advance(budget) {
            budget = tick.leftover;
            fired += 1;
            self.on_tick();
        }
        fired
    }

    fn on_tick(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let last = self.sequence.as_ref().map_or(0, StepSequence::last_index);

        self.index += 1;
        if self.index < last {
            self.timer.schedule(self.speed.delay());
        } else {
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.timer.cancel();
        self.state = PlaybackState::Completed;
        log::debug!("completed at step {}", self.index);
    }

    /// Move one step forward manually; playback pauses
    pub fn step_forward(&mut self) -> bool {
        let target = self.index + 1;
        self.seek(target)
    }

    /// Move one step back manually; playback pauses
    pub fn step_backward(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(target) => self.seek(target),
            None => false,
        }
    }

    /// Jump to the fully resolved step
    pub fn jump_to_end(&mut self) -> bool {
        let last = self.prepare();
        self.seek(last)
    }

    /// Jump to `index` (clamped), pausing playback. Returns whether the index moved.
    pub fn seek(&mut self, index: usize) -> bool {
        let last = self.prepare();
        self.timer.cancel();

        let target = index.min(last);
        let moved = target != self.index;
        self.index = target;
        self.state = if target == last {
            PlaybackState::Completed
        } else {
            PlaybackState::Paused
        };
        moved
    }

    /// Cancel pending work before the owning view goes away
    pub fn teardown(&mut self) {
        if self.timer.cancel().is_some() {
            log::debug!("cancelled pending tick on teardown");
        }
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepLog;
    use std::cell::Cell;

    /// Records `0..len` and counts how often it was asked to
    struct Counting {
        len: usize,
        recordings: Cell<usize>,
    }

    impl StepSource for Counting {
        type Step = usize;

        fn record(&self) -> StepSequence<usize> {
            self.recordings.set(self.recordings.get() + 1);
            let mut log = StepLog::new(0);
            for i in 1..self.len {
                log.push(i);
            }
            log.finish()
        }
    }

    fn counting(len: usize) -> PlaybackController<Counting> {
        PlaybackController::new(Counting {
            len,
            recordings: Cell::new(0),
        })
    }

    #[test]
    fn test_play_records_once() {
        let mut ctl = counting(4);
        assert!(ctl.sequence().is_none());
        ctl.play();
        ctl.pause();
        ctl.play();
        assert_eq!(ctl.scene().recordings.get(), 1);
    }

    #[test]
    fn test_single_step_sequence_completes_immediately() {
        let mut ctl = counting(1);
        ctl.play();
        assert_eq!(ctl.state(), PlaybackState::Completed);
        assert!(ctl.pending_tick().is_none());
    }

    #[test]
    fn test_tick_after_pause_is_stale() {
        let mut ctl = counting(4);
        ctl.play();
        ctl.pause();
        assert_eq!(ctl.advance(Duration::from_secs(10)), 0);
        assert_eq!(ctl.current_index(), 0);
    }
}
