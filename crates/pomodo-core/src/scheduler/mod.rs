mod engine;
mod session;

pub use engine::{RunState, SessionScheduler};
pub use session::{SchedulerConfig, SessionKind};
