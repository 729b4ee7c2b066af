//! Full-cycle scheduler tests: classic 25/5/15 scenarios plus property
//! tests over arbitrary configurations.

use proptest::prelude::*;

use pomodo_core::{RunState, SchedulerConfig, SessionKind, SessionScheduler};

/// Start the current session and tick it to completion.
fn run_session_to_completion(s: &mut SessionScheduler) {
    s.start();
    while s.run_state() == RunState::Running {
        s.tick();
    }
}

fn classic() -> SchedulerConfig {
    SchedulerConfig::from_minutes(25, 5, 15, 4).unwrap()
}

#[test]
fn first_work_session_ends_in_short_break() {
    let mut s = SessionScheduler::new(classic());
    s.start();
    for _ in 0..1500 {
        s.tick();
    }

    assert_eq!(s.run_state(), RunState::Paused);
    assert_eq!(s.current_session(), SessionKind::ShortBreak);
    assert_eq!(s.total_time(), 300);
    assert_eq!(s.time_remaining(), 300);
    assert_eq!(s.completed_work_sessions(), 1);
    assert_eq!(s.cycle_position(), 2);

    // The old clock may fire once more before the driver stops it.
    assert!(s.tick().is_empty());
    assert_eq!(s.time_remaining(), 300);
}

#[test]
fn fourth_work_session_ends_in_long_break() {
    let mut s = SessionScheduler::new(classic());
    for _ in 0..3 {
        run_session_to_completion(&mut s); // work
        assert_eq!(s.current_session(), SessionKind::ShortBreak);
        run_session_to_completion(&mut s); // short break
        assert_eq!(s.current_session(), SessionKind::Work);
    }

    run_session_to_completion(&mut s); // 4th work session
    assert_eq!(s.completed_work_sessions(), 4);
    assert_eq!(s.current_session(), SessionKind::LongBreak);
    assert_eq!(s.total_time(), 900);
    assert_eq!(s.cycle_position(), 1);
}

#[test]
fn reset_mid_short_break_preserves_counters() {
    let mut s = SessionScheduler::new(classic());
    run_session_to_completion(&mut s);
    s.start();
    for _ in 0..42 {
        s.tick();
    }
    assert_eq!(s.current_session(), SessionKind::ShortBreak);

    s.reset();
    assert_eq!(s.run_state(), RunState::Idle);
    assert_eq!(s.current_session(), SessionKind::Work);
    assert_eq!(s.time_remaining(), 1500);
    assert_eq!(s.total_time(), 1500);
    assert_eq!(s.completed_work_sessions(), 1);
    assert_eq!(s.cycle_position(), 2);
}

#[test]
fn repeated_start_and_pause_are_idempotent() {
    let mut s = SessionScheduler::new(classic());
    s.start();
    s.start();
    s.tick();
    let remaining = s.time_remaining();
    assert_eq!(s.run_state(), RunState::Running);

    s.pause();
    s.pause();
    assert_eq!(s.run_state(), RunState::Paused);
    assert_eq!(s.time_remaining(), remaining);
}

#[test]
fn long_break_cycle_repeats() {
    let cfg = SchedulerConfig::new(10, 4, 6, 2).unwrap();
    let mut s = SessionScheduler::new(cfg);

    // Two full long-break cycles.
    for cycle in 0..2u32 {
        run_session_to_completion(&mut s);
        assert_eq!(s.current_session(), SessionKind::ShortBreak);
        assert_eq!(s.cycle_position(), 2);
        run_session_to_completion(&mut s);

        run_session_to_completion(&mut s);
        assert_eq!(s.current_session(), SessionKind::LongBreak);
        assert_eq!(s.cycle_position(), 1);
        assert_eq!(s.completed_work_sessions(), (cycle + 1) * 2);
        run_session_to_completion(&mut s);
        assert_eq!(s.current_session(), SessionKind::Work);
    }
}

proptest! {
    /// After the i-th work completion: a long break every
    /// `long_break_interval`-th time with the position rewound to 1, a
    /// short break with an incremented position otherwise. Break
    /// completions never touch the counter.
    #[test]
    fn cycle_structure(
        n in 1u32..=6,
        work in 1u32..=20,
        short in 1u32..=10,
        long in 1u32..=10,
    ) {
        let cfg = SchedulerConfig::new(work, short, long, n).unwrap();
        let mut s = SessionScheduler::new(cfg);

        for i in 1..=(2 * n) {
            run_session_to_completion(&mut s);
            prop_assert_eq!(s.completed_work_sessions(), i);
            prop_assert_eq!(s.time_remaining(), s.total_time());
            if i % n == 0 {
                prop_assert_eq!(s.current_session(), SessionKind::LongBreak);
                prop_assert_eq!(s.cycle_position(), 1);
                prop_assert_eq!(s.total_time(), long);
            } else {
                prop_assert_eq!(s.current_session(), SessionKind::ShortBreak);
                prop_assert_eq!(s.cycle_position(), (i % n) + 1);
                prop_assert_eq!(s.total_time(), short);
            }

            run_session_to_completion(&mut s);
            prop_assert_eq!(s.current_session(), SessionKind::Work);
            prop_assert_eq!(s.completed_work_sessions(), i);
        }
    }

    /// No command sequence can break the structural invariants.
    #[test]
    fn invariants_hold_under_arbitrary_commands(
        commands in proptest::collection::vec(0u8..4, 1..300),
    ) {
        let cfg = SchedulerConfig::new(5, 3, 4, 3).unwrap();
        let mut s = SessionScheduler::new(cfg);
        let mut last_count = 0;

        for command in commands {
            match command {
                0 => { s.start(); }
                1 => { s.pause(); }
                2 => { s.reset(); }
                _ => { s.tick(); }
            }

            prop_assert!(s.time_remaining() <= s.total_time());
            prop_assert_eq!(s.total_time(), cfg.duration_secs(s.current_session()));
            prop_assert!(s.cycle_position() >= 1);
            prop_assert!(s.cycle_position() <= cfg.long_break_interval);
            prop_assert!(s.completed_work_sessions() >= last_count);
            last_count = s.completed_work_sessions();
        }
    }
}
