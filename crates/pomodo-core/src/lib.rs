//! # Pomodo Core Library
//!
//! This library provides the core business logic for the Pomodo Pomodoro
//! timer. The heart of it is a session scheduler: a pure state machine that
//! alternates focus and break intervals and inserts a long break after a
//! configurable number of completed focus sessions.
//!
//! ## Architecture
//!
//! - **Session Scheduler**: a state machine driven by an external
//!   one-tick-per-second clock; the caller invokes `tick()` and the
//!   scheduler returns the events each command produced
//! - **Events**: every state change produces a typed [`Event`] that a
//!   presentation layer renders
//! - **Relay**: collaborators (audible cue, session reporting) subscribe at
//!   the relay boundary; their failures are logged and never reach the
//!   scheduler
//! - **Config**: TOML-based configuration with durations in minutes
//!
//! ## Key Components
//!
//! - [`SessionScheduler`]: core timer state machine
//! - [`Config`]: application configuration management
//! - [`Collaborator`]: trait for completion-event subscribers
//! - [`SessionReporter`]: HTTP reporter for completed work sessions

pub mod config;
pub mod error;
pub mod events;
pub mod relay;
pub mod scheduler;

pub use config::Config;
pub use error::{ConfigError, ReportError};
pub use events::Event;
pub use relay::{Collaborator, EventRelay, SessionReporter};
pub use scheduler::{RunState, SchedulerConfig, SessionKind, SessionScheduler};
