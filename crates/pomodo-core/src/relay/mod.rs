//! The observer boundary between the scheduler and its side effects.
//!
//! The scheduler's state transition has already completed by the time the
//! relay runs, so a failing collaborator cannot corrupt core state. Failures
//! are logged and swallowed here; nothing propagates back.

mod report;

pub use report::SessionReporter;

use crate::events::Event;
use crate::scheduler::SessionKind;

/// Every completion-event subscriber implements this trait.
/// Hooks default to no-ops so a collaborator only implements what it needs.
pub trait Collaborator: Send + Sync {
    /// Unique identifier (e.g. "report"), used in log lines.
    fn name(&self) -> &str;

    /// Called once per completed session of any kind.
    fn on_notify(&self, _completed: SessionKind) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// Called when a work session completes, with the new cumulative count.
    fn on_work_session_completed(
        &self,
        _completed_work_sessions: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }
}

/// Fans completion events out to registered collaborators.
#[derive(Default)]
pub struct EventRelay {
    collaborators: Vec<Box<dyn Collaborator>>,
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, collaborator: Box<dyn Collaborator>) {
        self.collaborators.push(collaborator);
    }

    /// Deliver a command's events to every collaborator, fire-and-forget.
    pub fn dispatch(&self, events: &[Event]) {
        for event in events {
            match event {
                Event::Notify { completed, .. } => {
                    for c in &self.collaborators {
                        if let Err(e) = c.on_notify(*completed) {
                            tracing::warn!(
                                collaborator = c.name(),
                                error = %e,
                                "notify hook failed"
                            );
                        }
                    }
                }
                Event::WorkSessionCompleted {
                    completed_work_sessions,
                    ..
                } => {
                    for c in &self.collaborators {
                        if let Err(e) = c.on_work_session_completed(*completed_work_sessions) {
                            tracing::warn!(
                                collaborator = c.name(),
                                error = %e,
                                "work-session hook failed"
                            );
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct Counting {
        notifies: Arc<AtomicU32>,
        completions: Arc<AtomicU32>,
        fail: bool,
    }

    impl Collaborator for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn on_notify(&self, _completed: SessionKind) -> Result<(), Box<dyn std::error::Error>> {
            self.notifies.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("boom".into());
            }
            Ok(())
        }

        fn on_work_session_completed(
            &self,
            _n: u32,
        ) -> Result<(), Box<dyn std::error::Error>> {
            self.completions.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn completion_events() -> Vec<Event> {
        vec![
            Event::Notify {
                completed: SessionKind::Work,
                at: Utc::now(),
            },
            Event::WorkSessionCompleted {
                completed_work_sessions: 1,
                at: Utc::now(),
            },
        ]
    }

    #[test]
    fn dispatch_reaches_all_hooks() {
        let notifies = Arc::new(AtomicU32::new(0));
        let completions = Arc::new(AtomicU32::new(0));
        let mut relay = EventRelay::new();
        relay.register(Box::new(Counting {
            notifies: notifies.clone(),
            completions: completions.clone(),
            fail: false,
        }));

        relay.dispatch(&completion_events());
        assert_eq!(notifies.load(Ordering::SeqCst), 1);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failing_collaborator_does_not_stop_the_rest() {
        let notifies = Arc::new(AtomicU32::new(0));
        let completions = Arc::new(AtomicU32::new(0));
        let mut relay = EventRelay::new();
        relay.register(Box::new(Counting {
            notifies: notifies.clone(),
            completions: completions.clone(),
            fail: true,
        }));
        relay.register(Box::new(Counting {
            notifies: notifies.clone(),
            completions: completions.clone(),
            fail: false,
        }));

        relay.dispatch(&completion_events());
        // Both collaborators saw both events despite the first one failing.
        assert_eq!(notifies.load(Ordering::SeqCst), 2);
        assert_eq!(completions.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn tick_events_are_not_fanned_out() {
        let notifies = Arc::new(AtomicU32::new(0));
        let completions = Arc::new(AtomicU32::new(0));
        let mut relay = EventRelay::new();
        relay.register(Box::new(Counting {
            notifies: notifies.clone(),
            completions: completions.clone(),
            fail: false,
        }));

        relay.dispatch(&[Event::TickUpdated {
            time_remaining: 10,
            total_time: 20,
            at: Utc::now(),
        }]);
        assert_eq!(notifies.load(Ordering::SeqCst), 0);
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }
}
