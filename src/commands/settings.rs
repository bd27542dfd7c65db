use crate::{
    db::settings::Settings,
    libs::{
        messages::Message,
        timer::{PomodoroTimer, SettingsUpdate, TimerSettings},
        view::View,
    },
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show the current timer settings
    Show,
    /// Update the timer settings
    Set {
        /// Pomodoro duration in seconds (1-3600)
        #[arg(long)]
        pomodoro: u32,
        /// Short break duration in seconds (1-3600)
        #[arg(long)]
        short_break: u32,
        /// Long break duration in seconds (1-3600)
        #[arg(long)]
        long_break: u32,
        /// Work intervals between long breaks (1-10)
        #[arg(long)]
        interval: u32,
    },
    /// Reset all settings to their defaults
    Reset,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    match args.command {
        SettingsCommand::Show => handle_show(),
        SettingsCommand::Set {
            pomodoro,
            short_break,
            long_break,
            interval,
        } => handle_set(pomodoro, short_break, long_break, interval),
        SettingsCommand::Reset => handle_reset(),
    }
}

fn handle_show() -> Result<()> {
    let mut settings_db = Settings::new()?;
    let rows = settings_db.list()?;

    msg_print!(Message::SettingsHeader, true);
    View::settings(&rows)?;
    Ok(())
}

fn handle_set(pomodoro: u32, short_break: u32, long_break: u32, interval: u32) -> Result<()> {
    let mut settings_db = Settings::new()?;
    let mut timer = PomodoroTimer::from_store(&mut settings_db)?;

    let new = TimerSettings {
        pomodoro_secs: pomodoro,
        short_break_secs: short_break,
        long_break_secs: long_break,
        long_break_interval: interval,
    };

    match timer.update_settings(&mut settings_db, new)? {
        SettingsUpdate::Applied => msg_success!(Message::SettingsUpdated),
        SettingsUpdate::Rejected(message) => msg_error!(message),
    }
    Ok(())
}

fn handle_reset() -> Result<()> {
    Settings::new()?.reset_to_defaults()?;
    msg_success!(Message::SettingsReset);
    Ok(())
}
