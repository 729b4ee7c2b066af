//! Formatting helpers for the timer display.

use pomodo_core::{RunState, SessionKind};

/// `MM:SS` countdown text.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Cumulative focus time, `H h M m` past the first hour, `M m` before it.
pub fn format_focus_total(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{} h {} m", minutes / 60, minutes % 60)
    } else {
        format!("{} m", minutes)
    }
}

/// Textual status label: the session label while running, otherwise the
/// run state.
pub fn status_label(run_state: RunState, session: SessionKind) -> &'static str {
    match run_state {
        RunState::Idle => "Ready",
        RunState::Paused => "Paused",
        RunState::Running => session.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn focus_total_switches_at_one_hour() {
        assert_eq!(format_focus_total(50), "50 m");
        assert_eq!(format_focus_total(60), "1 h 0 m");
        assert_eq!(format_focus_total(125), "2 h 5 m");
    }

    #[test]
    fn labels_follow_run_state() {
        assert_eq!(status_label(RunState::Idle, SessionKind::Work), "Ready");
        assert_eq!(status_label(RunState::Paused, SessionKind::ShortBreak), "Paused");
        assert_eq!(status_label(RunState::Running, SessionKind::Work), "Focus Time");
        assert_eq!(
            status_label(RunState::Running, SessionKind::LongBreak),
            "Long Break"
        );
    }
}
