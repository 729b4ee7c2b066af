use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionKind {
    /// Display label for the session itself (run-state labels like
    /// "Paused" are the presentation layer's concern).
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Work => "Focus Time",
            SessionKind::ShortBreak => "Short Break",
            SessionKind::LongBreak => "Long Break",
        }
    }

    /// Wire name used by the report endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Work => "work",
            SessionKind::ShortBreak => "short_break",
            SessionKind::LongBreak => "long_break",
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, SessionKind::Work)
    }
}

/// Immutable scheduler durations, in seconds, plus the long-break interval.
///
/// Loaded once at scheduler construction and never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub work_secs: u32,
    pub short_break_secs: u32,
    pub long_break_secs: u32,
    /// Count of completed work sessions that triggers a long break
    /// instead of a short one.
    pub long_break_interval: u32,
}

impl SchedulerConfig {
    /// Create a config from durations in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if any duration or the interval is zero.
    pub fn new(
        work_secs: u32,
        short_break_secs: u32,
        long_break_secs: u32,
        long_break_interval: u32,
    ) -> Result<Self, ConfigError> {
        let positive = |key: &str, value: u32| {
            if value == 0 {
                Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be at least 1".to_string(),
                })
            } else {
                Ok(value)
            }
        };
        Ok(Self {
            work_secs: positive("work_secs", work_secs)?,
            short_break_secs: positive("short_break_secs", short_break_secs)?,
            long_break_secs: positive("long_break_secs", long_break_secs)?,
            long_break_interval: positive("long_break_interval", long_break_interval)?,
        })
    }

    /// Create a config from durations in minutes.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    ///
    /// # Errors
    ///
    /// Returns an error if any duration or the interval is zero.
    pub fn from_minutes(
        work_min: u32,
        short_break_min: u32,
        long_break_min: u32,
        long_break_interval: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(
            work_min.saturating_mul(60),
            short_break_min.saturating_mul(60),
            long_break_min.saturating_mul(60),
            long_break_interval,
        )
    }

    /// Configured duration of the given session kind, in seconds.
    pub fn duration_secs(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_secs,
            SessionKind::ShortBreak => self.short_break_secs,
            SessionKind::LongBreak => self.long_break_secs,
        }
    }

    /// Work duration in whole minutes, rounded up. The report endpoint
    /// expects minutes.
    pub fn work_minutes(&self) -> u32 {
        self.work_secs.div_ceil(60)
    }
}

impl Default for SchedulerConfig {
    /// Classic Pomodoro defaults: 25m focus, 5m short break, 15m long
    /// break, long break after every 4th focus session.
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
            long_break_interval: 4,
        }
    }
}
