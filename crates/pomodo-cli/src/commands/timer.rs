use clap::Subcommand;
use std::io::Write;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use pomodo_core::{
    Config, Event, EventRelay, RunState, SchedulerConfig, SessionReporter, SessionScheduler,
};

use crate::common::{format_clock, format_focus_total, status_label};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the timer loop
    Run {
        /// Work duration in minutes (overrides config)
        #[arg(long)]
        work: Option<u32>,
        /// Short break duration in minutes (overrides config)
        #[arg(long)]
        short_break: Option<u32>,
        /// Long break duration in minutes (overrides config)
        #[arg(long)]
        long_break: Option<u32>,
        /// Completed work sessions before a long break (overrides config)
        #[arg(long)]
        interval: Option<u32>,
        /// Exit after this many completed work sessions
        #[arg(long)]
        sessions: Option<u32>,
        /// Print events as JSON lines instead of the interactive display
        #[arg(long)]
        json: bool,
    },
    /// Print the effective scheduler configuration as JSON
    Show,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run {
            work,
            short_break,
            long_break,
            interval,
            sessions,
            json,
        } => {
            let scheduler_config = SchedulerConfig::from_minutes(
                work.unwrap_or(config.timer.work_duration),
                short_break.unwrap_or(config.timer.short_break_duration),
                long_break.unwrap_or(config.timer.long_break_duration),
                interval.unwrap_or(config.timer.long_break_interval),
            )?;

            let mut relay = EventRelay::new();
            if config.report.enabled {
                match SessionReporter::new(&config.report.base_url, scheduler_config.work_minutes())
                {
                    Ok(reporter) => relay.register(Box::new(reporter)),
                    Err(e) => tracing::warn!(error = %e, "session reporting disabled"),
                }
            }

            let scheduler = SessionScheduler::new(scheduler_config);
            if json {
                run_json(scheduler, &relay, sessions)
            } else {
                run_interactive(scheduler, &relay, sessions, config.notifications.sound)
            }
        }
        TimerAction::Show => {
            let scheduler_config = config.scheduler_config()?;
            println!("{}", serde_json::to_string_pretty(&scheduler_config)?);
            Ok(())
        }
    }
}

enum Input {
    Enter,
    Eof,
}

/// Stdin reader thread; every line the operator enters becomes one Input.
fn spawn_stdin_reader() -> Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut line = String::new();
        loop {
            line.clear();
            match std::io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    let _ = tx.send(Input::Eof);
                    break;
                }
                Ok(_) => {
                    if tx.send(Input::Enter).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}

/// Interactive countdown. The loop owns the 1 Hz clock: while the scheduler
/// is Running it ticks once a second; Enter toggles pause/resume; a session
/// boundary returns to the start prompt, since the next session never
/// auto-starts.
fn run_interactive(
    mut scheduler: SessionScheduler,
    relay: &EventRelay,
    sessions: Option<u32>,
    sound: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = spawn_stdin_reader();
    let work_minutes = scheduler.config().work_minutes();

    loop {
        println!(
            "\nNext: {} ({})  [Enter starts, Enter again pauses, Ctrl-C quits]",
            scheduler.current_session().label(),
            format_clock(scheduler.time_remaining()),
        );
        match input.recv() {
            Ok(Input::Enter) => {}
            _ => return Ok(()),
        }
        let events = scheduler.start();
        render(&events, &scheduler, work_minutes, sound);
        relay.dispatch(&events);

        // One session on the clock, until it completes.
        loop {
            match input.recv_timeout(Duration::from_secs(1)) {
                Err(RecvTimeoutError::Timeout) => {
                    let events = scheduler.tick();
                    let finished = events
                        .iter()
                        .any(|e| matches!(e, Event::SessionChanged { .. }));
                    render(&events, &scheduler, work_minutes, sound);
                    relay.dispatch(&events);
                    if finished {
                        break;
                    }
                }
                Ok(Input::Enter) => {
                    let events = if scheduler.run_state() == RunState::Running {
                        println!();
                        scheduler.pause()
                    } else {
                        scheduler.start()
                    };
                    render(&events, &scheduler, work_minutes, sound);
                    relay.dispatch(&events);
                }
                Ok(Input::Eof) | Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        if let Some(limit) = sessions {
            if scheduler.completed_work_sessions() >= limit {
                return Ok(());
            }
        }
    }
}

/// Non-interactive mode: start each session immediately and print every
/// event as a JSON line.
fn run_json(
    mut scheduler: SessionScheduler,
    relay: &EventRelay,
    sessions: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let events = scheduler.start();
        print_json(&events)?;
        relay.dispatch(&events);

        while scheduler.run_state() == RunState::Running {
            thread::sleep(Duration::from_secs(1));
            let events = scheduler.tick();
            print_json(&events)?;
            relay.dispatch(&events);
        }

        if let Some(limit) = sessions {
            if scheduler.completed_work_sessions() >= limit {
                return Ok(());
            }
        }
    }
}

fn print_json(events: &[Event]) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}

fn render(events: &[Event], scheduler: &SessionScheduler, work_minutes: u32, sound: bool) {
    for event in events {
        match event {
            Event::TickUpdated {
                time_remaining,
                total_time,
                ..
            } => {
                // The 00:00 frame is immediately followed by the completion
                // lines; the scheduler has already moved on, so skip it.
                if *time_remaining > 0 {
                    print!(
                        "\r{}  {} / {}   ",
                        scheduler.current_session().label(),
                        format_clock(*time_remaining),
                        format_clock(*total_time),
                    );
                    let _ = std::io::stdout().flush();
                }
            }
            Event::SessionLabelChanged {
                run_state, session, ..
            } => {
                println!("{}", status_label(*run_state, *session));
            }
            Event::Notify { completed, .. } => {
                let bell = if sound { "\x07" } else { "" };
                println!("\nCompleted: {}{}", completed.label(), bell);
            }
            Event::WorkSessionCompleted {
                completed_work_sessions,
                ..
            } => {
                println!(
                    "Focus total: {}",
                    format_focus_total(completed_work_sessions * work_minutes),
                );
            }
            Event::SessionChanged {
                session,
                total_time,
                cycle_position,
                ..
            } => {
                println!(
                    "Next up: {} ({}), cycle position {}",
                    session.label(),
                    format_clock(*total_time),
                    cycle_position,
                );
            }
        }
    }
}
