//! Playback of recorded sequences
//!
//! - [`controller`]: the play/pause/reset state machine over a scene's recording
//! - [`timer`]: single-slot, cancellable tick scheduler on a host-driven clock
//! - [`speed`]: speed level to tick delay mapping
//!
//! Everything runs on the caller's thread. Time only moves when the host calls
//! [`PlaybackController::advance`], and ticks fire strictly one after another.

pub mod controller;
pub mod speed;
pub mod timer;

pub use controller::{PlaybackController, PlaybackState};
pub use speed::SpeedLevel;
pub use timer::{FiredTick, TickHandle, TickScheduler};
