//! Focus/break interval presets.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PomoError;

/// An immutable focus/break pair offered by the selector.
///
/// Both intervals are guaranteed positive; the only way to build one is
/// through [`Preset::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPreset", into = "RawPreset")]
pub struct Preset {
    focus_minutes: u32,
    break_minutes: u32,
}

/// Unvalidated preset as it appears in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPreset {
    focus_minutes: u32,
    break_minutes: u32,
}

impl Preset {
    /// The classic 25 minute focus / 5 minute break.
    pub const CLASSIC: Self = Self {
        focus_minutes: 25,
        break_minutes: 5,
    };

    /// The long 50 minute focus / 10 minute break.
    pub const LONG: Self = Self {
        focus_minutes: 50,
        break_minutes: 10,
    };

    /// Create a preset, rejecting zero-length intervals.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidPreset` if either duration is zero.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, PomoError> {
        if focus_minutes == 0 || break_minutes == 0 {
            return Err(PomoError::InvalidPreset {
                focus_minutes,
                break_minutes,
            });
        }
        Ok(Self {
            focus_minutes,
            break_minutes,
        })
    }

    /// Focus interval in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Break interval in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Focus interval as a duration.
    #[must_use]
    pub const fn focus(&self) -> Duration {
        Duration::from_secs(self.focus_minutes as u64 * 60)
    }

    /// Break interval as a duration.
    #[must_use]
    pub const fn break_duration(&self) -> Duration {
        Duration::from_secs(self.break_minutes as u64 * 60)
    }

    /// The stock preset list.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::CLASSIC, Self::LONG]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.focus_minutes, self.break_minutes)
    }
}

impl TryFrom<RawPreset> for Preset {
    type Error = PomoError;

    fn try_from(raw: RawPreset) -> Result<Self, Self::Error> {
        Self::new(raw.focus_minutes, raw.break_minutes)
    }
}

impl From<Preset> for RawPreset {
    fn from(preset: Preset) -> Self {
        Self {
            focus_minutes: preset.focus_minutes,
            break_minutes: preset.break_minutes,
        }
    }
}
