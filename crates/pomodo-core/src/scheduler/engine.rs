//! Session scheduler implementation.
//!
//! The scheduler is a pure state machine. It does not own timing hardware --
//! the caller drives it with a one-tick-per-second clock and starts/stops
//! that clock in lockstep with the Running/Paused transitions it reads back.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running
//!   ^________________|  (reset from any state)
//! ```
//!
//! `RunState` is orthogonal to the current [`SessionKind`]: pausing a break
//! does not change which session is on the clock.
//!
//! ## Usage
//!
//! ```ignore
//! let mut scheduler = SessionScheduler::new(SchedulerConfig::default());
//! scheduler.start();
//! // Once per second while scheduler.run_state() == RunState::Running:
//! let events = scheduler.tick();
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::session::{SchedulerConfig, SessionKind};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

/// Core session scheduler.
///
/// Commands return the events they produced; an empty vector means the
/// command was a no-op in the current state. Invalid commands are never
/// errors -- stray `tick()` callbacks after a pause/reset race must land
/// harmlessly.
#[derive(Debug, Clone)]
pub struct SessionScheduler {
    config: SchedulerConfig,
    run_state: RunState,
    current_session: SessionKind,
    /// Remaining time in seconds for the current session.
    time_remaining: u32,
    /// Configured duration of the current session, for progress display.
    total_time: u32,
    /// Completed work sessions. Monotone; survives reset().
    completed_work_sessions: u32,
    /// 1-based position within the current long-break cycle. Survives
    /// reset(); only changes when a break is entered.
    cycle_position: u32,
}

impl SessionScheduler {
    /// Create a scheduler in `Idle` on a full-length work session.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            run_state: RunState::Idle,
            current_session: SessionKind::Work,
            time_remaining: config.work_secs,
            total_time: config.work_secs,
            completed_work_sessions: 0,
            cycle_position: 1,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn current_session(&self) -> SessionKind {
        self.current_session
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    pub fn cycle_position(&self) -> u32 {
        self.cycle_position
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// 0.0 .. 1.0 progress within the current session.
    pub fn progress(&self) -> f64 {
        if self.total_time == 0 {
            return 0.0;
        }
        1.0 - (self.time_remaining as f64 / self.total_time as f64)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Idle/Paused -> Running. No-op while already Running.
    ///
    /// The caller resumes its 1 Hz clock when this returns events.
    pub fn start(&mut self) -> Vec<Event> {
        match self.run_state {
            RunState::Idle | RunState::Paused => {
                self.run_state = RunState::Running;
                vec![self.label_changed()]
            }
            RunState::Running => Vec::new(),
        }
    }

    /// Running -> Paused. No-op otherwise.
    pub fn pause(&mut self) -> Vec<Event> {
        match self.run_state {
            RunState::Running => {
                self.run_state = RunState::Paused;
                vec![self.label_changed()]
            }
            _ => Vec::new(),
        }
    }

    /// Any state -> Idle on a full-length work session.
    ///
    /// Cumulative counters are deliberately left alone: a manual reset
    /// abandons the session on the clock, not the day's completed work.
    pub fn reset(&mut self) -> Vec<Event> {
        // Stop tick consumption first, then rewind.
        self.run_state = RunState::Idle;
        self.current_session = SessionKind::Work;
        self.total_time = self.config.work_secs;
        self.time_remaining = self.total_time;
        vec![self.label_changed()]
    }

    /// Consume one second of the running session.
    ///
    /// No-op unless Running. Driving `time_remaining` to 0 completes the
    /// session synchronously before this returns, so callers never observe
    /// an expired-but-unfinished session.
    pub fn tick(&mut self) -> Vec<Event> {
        if self.run_state != RunState::Running {
            return Vec::new();
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        let mut events = vec![Event::TickUpdated {
            time_remaining: self.time_remaining,
            total_time: self.total_time,
            at: Utc::now(),
        }];
        if self.time_remaining == 0 {
            self.complete_session(&mut events);
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete_session(&mut self, events: &mut Vec<Event>) {
        // Pausing here is what tells the driver to stop the tick source.
        self.run_state = RunState::Paused;
        let completed = self.current_session;
        events.push(Event::Notify {
            completed,
            at: Utc::now(),
        });
        if completed.is_work() {
            self.completed_work_sessions += 1;
            events.push(Event::WorkSessionCompleted {
                completed_work_sessions: self.completed_work_sessions,
                at: Utc::now(),
            });
        }
        self.move_to_next_session(events);
    }

    fn move_to_next_session(&mut self, events: &mut Vec<Event>) {
        match self.current_session {
            SessionKind::Work => {
                if self.completed_work_sessions % self.config.long_break_interval == 0 {
                    self.current_session = SessionKind::LongBreak;
                    self.cycle_position = 1;
                } else {
                    self.current_session = SessionKind::ShortBreak;
                    self.cycle_position += 1;
                }
            }
            SessionKind::ShortBreak | SessionKind::LongBreak => {
                self.current_session = SessionKind::Work;
            }
        }
        self.total_time = self.config.duration_secs(self.current_session);
        self.time_remaining = self.total_time;
        events.push(Event::SessionChanged {
            session: self.current_session,
            total_time: self.total_time,
            cycle_position: self.cycle_position,
            at: Utc::now(),
        });
        // The next session does not auto-start; the operator calls start().
    }

    fn label_changed(&self) -> Event {
        Event::SessionLabelChanged {
            run_state: self.run_state,
            session: self.current_session,
            at: Utc::now(),
        }
    }
}
