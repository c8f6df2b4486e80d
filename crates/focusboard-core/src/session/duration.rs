//! Session length constants and the duration adjustment controls.

/// Length of a fresh focus session: twenty minutes.
pub const DEFAULT_FOCUS_SECONDS: u32 = 20 * 60;

/// Remaining time can never be adjusted below one minute.
pub const MIN_FOCUS_SECONDS: u32 = 60;

/// One press of a timer adjustment button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStep {
    AddMinute,
    SubtractMinute,
    AddFiveMinutes,
    SubtractFiveMinutes,
}

impl DurationStep {
    /// Maps signed minutes onto a button; only ±1 and ±5 exist.
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        match minutes {
            1 => Some(Self::AddMinute),
            -1 => Some(Self::SubtractMinute),
            5 => Some(Self::AddFiveMinutes),
            -5 => Some(Self::SubtractFiveMinutes),
            _ => None,
        }
    }

    /// Signed change in seconds.
    pub fn delta_seconds(self) -> i64 {
        match self {
            Self::AddMinute => 60,
            Self::SubtractMinute => -60,
            Self::AddFiveMinutes => 300,
            Self::SubtractFiveMinutes => -300,
        }
    }

    /// Applies the step to `remaining`, enforcing the one-minute floor.
    ///
    /// Returns `None` for a decrease that cannot lower the remaining time,
    /// that is when the clock is already at or below the floor.
    pub fn apply(self, remaining: u32) -> Option<u32> {
        let delta = self.delta_seconds();
        let floored = (i64::from(remaining) + delta).max(i64::from(MIN_FOCUS_SECONDS));
        if delta < 0 && floored >= i64::from(remaining) {
            return None;
        }
        Some(u32::try_from(floored).unwrap_or(u32::MAX))
    }
}
