//! Speed level to tick delay mapping

use crate::error::{Result, VizError};
use std::fmt;
use std::time::Duration;

/// Delay per tick for levels 1 through 5
const DELAYS_MS: [u64; 5] = [800, 400, 200, 100, 50];

/// Discrete playback speed, 1 (slowest) to 5 (fastest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: SpeedLevel = SpeedLevel(1);
    pub const MAX: SpeedLevel = SpeedLevel(5);

    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(SpeedLevel(level))
        } else {
            Err(VizError::InvalidSpeed(level))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Time between two playback ticks at this level
    pub fn delay(self) -> Duration {
        Duration::from_millis(DELAYS_MS[usize::from(self.0 - 1)])
    }

    pub fn faster(self) -> Self {
        SpeedLevel((self.0 + 1).min(Self::MAX.0))
    }

    pub fn slower(self) -> Self {
        SpeedLevel((self.0 - 1).max(Self::MIN.0))
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Slow",
            2 => "Medium",
            3 => "Fast",
            4 => "Very Fast",
            _ => "Super Fast",
        }
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        SpeedLevel(3)
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = VizError;

    fn try_from(level: u8) -> Result<Self> {
        SpeedLevel::new(level)
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}
