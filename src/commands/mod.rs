pub mod pomodoro;
pub mod profile;
pub mod settings;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Manage planner profiles")]
    Profile(profile::ProfileArgs),
    #[command(about = "Manage tasks for the selected profile")]
    Task(task::TaskArgs),
    #[command(about = "Run the Pomodoro focus timer")]
    Pomodoro(pomodoro::PomodoroArgs),
    #[command(about = "Show or change Pomodoro timer settings")]
    Settings(settings::SettingsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Profile(args) => profile::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Pomodoro(args) => pomodoro::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
        }
    }
}
