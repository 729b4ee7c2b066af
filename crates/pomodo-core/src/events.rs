use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scheduler::{RunState, SessionKind};

/// Every state change in the scheduler produces an Event.
/// The presentation layer renders them; collaborators subscribe via the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// One second of the running session elapsed.
    TickUpdated {
        time_remaining: u32,
        total_time: u32,
        at: DateTime<Utc>,
    },
    /// Run state changed via start/pause/reset; drives the textual label
    /// ("Focus Time", "Short Break", "Long Break", "Paused", "Ready").
    SessionLabelChanged {
        run_state: RunState,
        session: SessionKind,
        at: DateTime<Utc>,
    },
    /// A new session was entered. The next session never auto-starts.
    SessionChanged {
        session: SessionKind,
        total_time: u32,
        cycle_position: u32,
        at: DateTime<Utc>,
    },
    /// Exactly once per completed session, carrying the kind that finished.
    /// Collaborators map this to the audible cue and, for work sessions,
    /// the report endpoint.
    Notify {
        completed: SessionKind,
        at: DateTime<Utc>,
    },
    /// A work session completed, carrying the new cumulative count.
    WorkSessionCompleted {
        completed_work_sessions: u32,
        at: DateTime<Utc>,
    },
}
