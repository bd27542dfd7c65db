use crate::{
    db::settings::Settings,
    libs::{
        messages::Message,
        timer::{PomodoroTimer, TimerPhase},
    },
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct PomodoroArgs {
    /// Stop after this many completed work intervals (default: one full
    /// cycle up to and including the long break)
    #[arg(short, long)]
    intervals: Option<u32>,
}

/// Runs the Pomodoro countdown in the foreground.
///
/// One tick per second; the loop owns the timer, so leaving the loop (or
/// killing the process) stops all ticking. The settings handle is released
/// before the countdown starts.
pub fn cmd(args: PomodoroArgs) -> Result<()> {
    let mut timer = {
        let mut settings_db = Settings::new()?;
        PomodoroTimer::from_store(&mut settings_db)?
    };

    let target = args.intervals.unwrap_or(timer.settings().long_break_interval);
    let mut completed_work = 0u32;

    timer.start();
    msg_print!(Message::PhaseStarted(timer.phase().title(), timer.total()), true);

    while completed_work < target {
        print_countdown(timer.remaining());
        std::thread::sleep(Duration::from_secs(1));

        if let Some(done) = timer.tick() {
            println!();
            msg_success!(Message::PhaseCompleted(done.to_string()));
            if done == TimerPhase::Pomodoro {
                completed_work += 1;
                if completed_work >= target {
                    break;
                }
            }
            timer.start();
            msg_print!(Message::PhaseStarted(timer.phase().title(), timer.total()), true);
        }
    }

    Ok(())
}

fn print_countdown(remaining: u32) {
    print!("\r{:02}:{:02} ", remaining / 60, remaining % 60);
    let _ = std::io::stdout().flush();
}
