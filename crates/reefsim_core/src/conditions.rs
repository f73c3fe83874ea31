use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAY_DURATION: u32 = 8;
pub const DEFAULT_NIGHT_DURATION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "☀️ Day",
            TimeOfDay::Night => "🌙 Night",
        }
    }
}

/// Environmental clock observed by every animal during a tick.
///
/// `current_step` cycles through `[0, day_duration + night_duration)`. The
/// tide flag is only ever changed by the step driver, never by `advance`.
///
/// Only [`Conditions::new`] builds a non-default clock, so the cycle is
/// always at least one step long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conditions {
    current_step: u32,
    day_duration: u32,
    night_duration: u32,
    high_tide: bool,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            current_step: 0,
            day_duration: DEFAULT_DAY_DURATION,
            night_duration: DEFAULT_NIGHT_DURATION,
            high_tide: false,
        }
    }
}

impl Conditions {
    /// Creates a clock at the start of the day with a low tide.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCycle`] when `day_duration` is zero; a
    /// zero-length night is allowed and yields permanent daylight.
    pub fn new(day_duration: u32, night_duration: u32) -> Result<Self> {
        if day_duration == 0 {
            return Err(SimError::InvalidCycle(
                "day_duration must be at least 1 step".to_string(),
            ));
        }
        if day_duration.checked_add(night_duration).is_none() {
            return Err(SimError::InvalidCycle(
                "day_duration + night_duration overflows".to_string(),
            ));
        }
        Ok(Self {
            current_step: 0,
            day_duration,
            night_duration,
            high_tide: false,
        })
    }

    /// Advances the clock by one step, wrapping at the end of the night.
    pub fn advance(&mut self) {
        self.current_step += 1;
        if self.current_step >= self.cycle_length() {
            self.current_step = 0;
        }
    }

    #[must_use]
    pub fn is_day(&self) -> bool {
        self.current_step < self.day_duration
    }

    #[must_use]
    pub fn is_night(&self) -> bool {
        !self.is_day()
    }

    #[must_use]
    pub fn phase(&self) -> TimeOfDay {
        if self.is_day() {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }

    #[must_use]
    pub fn is_high_tide(&self) -> bool {
        self.high_tide
    }

    pub fn set_high_tide(&mut self, high_tide: bool) {
        self.high_tide = high_tide;
    }

    #[must_use]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    #[must_use]
    pub fn cycle_length(&self) -> u32 {
        self.day_duration + self.night_duration
    }

    /// Puts the clock back at the start of the day, keeping the tide.
    pub fn reset(&mut self) {
        self.current_step = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_night_boundary() {
        let mut clock = Conditions::new(8, 2).unwrap();
        for _ in 0..8 {
            assert!(clock.is_day());
            clock.advance();
        }
        assert!(clock.is_night());
        assert_eq!(clock.phase(), TimeOfDay::Night);
        clock.advance();
        assert!(clock.is_night());
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut clock = Conditions::new(8, 2).unwrap();
        for _ in 0..10 {
            clock.advance();
        }
        assert_eq!(clock.current_step(), 0);
        assert!(clock.is_day());
    }

    #[test]
    fn test_step_stays_in_range() {
        let mut clock = Conditions::new(3, 4).unwrap();
        for _ in 0..100 {
            clock.advance();
            assert!(clock.current_step() < clock.cycle_length());
        }
    }

    #[test]
    fn test_advance_leaves_tide_alone() {
        let mut clock = Conditions::default();
        clock.set_high_tide(true);
        for _ in 0..25 {
            clock.advance();
        }
        assert!(clock.is_high_tide());
    }

    #[test]
    fn test_zero_day_rejected() {
        assert!(Conditions::new(0, 2).is_err());
        assert!(matches!(
            Conditions::new(u32::MAX, 1),
            Err(SimError::InvalidCycle(_))
        ));
    }

    #[test]
    fn test_serializes_for_reports() {
        let mut clock = Conditions::new(3, 1).unwrap();
        clock.advance();
        let json = serde_json::to_value(&clock).unwrap();
        assert_eq!(json["current_step"], 1);
        assert_eq!(json["day_duration"], 3);
        assert_eq!(json["high_tide"], false);
    }

    #[test]
    fn test_zero_night_is_permanent_day() {
        let mut clock = Conditions::new(1, 0).unwrap();
        for _ in 0..5 {
            clock.advance();
            assert!(clock.is_day());
        }
    }
}
