use crate::{
    db::{profiles::Profiles, tasks::Tasks},
    libs::{
        messages::Message,
        profile::Profile,
        task::{remaining_badge, today, Priority, StatusFilter, Task, TaskFilter},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task for the selected profile
    Add {
        /// Task details
        details: Option<String>,
        /// Task date as dd/mm/yyyy, today when omitted
        #[arg(short, long)]
        date: Option<String>,
        /// Optional category
        #[arg(short, long)]
        category: Option<String>,
        /// Priority: Low, Moderate or High
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// List tasks for the selected profile
    List {
        /// Task date as dd/mm/yyyy, today when omitted
        #[arg(short, long)]
        date: Option<String>,
        /// Only tasks in this category ("All" disables the filter)
        #[arg(short, long)]
        category: Option<String>,
        /// Only tasks with this priority ("All" disables the filter)
        #[arg(short, long)]
        priority: Option<String>,
        /// Completion filter: all, open or done
        #[arg(short, long, default_value = "all")]
        status: String,
        /// Print the tasks as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Mark a task as completed
    Done {
        /// Task id
        id: i64,
        /// Mark the task as not completed instead
        #[arg(long)]
        reopen: bool,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: i64,
    },
    /// List categories in use for the selected profile and date
    Categories {
        /// Task date as dd/mm/yyyy, today when omitted
        #[arg(short, long)]
        date: Option<String>,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add {
            details,
            date,
            category,
            priority,
        } => handle_add(details, date, category, priority),
        TaskCommand::List {
            date,
            category,
            priority,
            status,
            json,
        } => handle_list(date, category, priority, status, json),
        TaskCommand::Done { id, reopen } => handle_done(id, reopen),
        TaskCommand::Delete { id } => handle_delete(id),
        TaskCommand::Categories { date } => handle_categories(date),
    }
}

/// The currently selected profile, or an error telling the user to select
/// one first.
fn selected_profile() -> Result<Profile> {
    let mut profiles_db = Profiles::new()?;
    match profiles_db.get_selected()? {
        Some(profile) => Ok(profile),
        None => msg_bail_anyhow!(Message::NoProfileSelected),
    }
}

fn handle_add(details: Option<String>, date: Option<String>, category: Option<String>, priority: Option<String>) -> Result<()> {
    let profile = selected_profile()?;
    let date = date.unwrap_or_else(today);

    let details = match details {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDetails.to_string())
            .interact_text()?,
    };

    let category = match category {
        Some(text) => Some(text),
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskCategory.to_string())
                .allow_empty(true)
                .interact_text()?;
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    };

    let priority = match priority {
        Some(text) => match Priority::from_str(&text) {
            Ok(p) => p,
            Err(message) => {
                msg_error!(message);
                return Ok(());
            }
        },
        None => {
            let options = [Priority::Low, Priority::Moderate, Priority::High];
            let index = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskPriority.to_string())
                .items(&options)
                .default(0)
                .interact()?;
            options[index]
        }
    };

    let profile_id = profile.id.unwrap_or_default();
    let task = Task::new(profile_id, &date, priority, category, &details);

    if let Err(message) = task.validate() {
        msg_error!(message);
        return Ok(());
    }

    Tasks::new()?.insert(&task)?;
    msg_success!(Message::TaskAdded);
    Ok(())
}

fn handle_list(date: Option<String>, category: Option<String>, priority: Option<String>, status: String, json: bool) -> Result<()> {
    let profile = selected_profile()?;
    let date = date.unwrap_or_else(today);

    let priority = match priority.as_deref() {
        None | Some("All") | Some("all") => None,
        Some(text) => match Priority::from_str(text) {
            Ok(p) => Some(p),
            Err(message) => {
                msg_error!(message);
                return Ok(());
            }
        },
    };
    let status = match StatusFilter::from_str(&status) {
        Ok(s) => s,
        Err(message) => {
            msg_error!(message);
            return Ok(());
        }
    };

    let filter = TaskFilter::new(category, priority, status);
    let profile_id = profile.id.unwrap_or_default();
    let tasks = Tasks::new()?.fetch(profile_id, &date, &filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound(date));
        return Ok(());
    }

    msg_print!(Message::TaskListHeader(profile.username, date), true);
    View::tasks(&tasks)?;

    match remaining_badge(&tasks) {
        Some(count) => msg_info!(Message::RemainingTasks(count)),
        None => msg_success!(Message::AllTasksDone),
    }
    Ok(())
}

fn handle_done(id: i64, reopen: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let mut task = match tasks_db.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    task.is_completed = !reopen;
    if tasks_db.update(&task)? {
        if reopen {
            msg_success!(Message::TaskReopened(id));
        } else {
            msg_success!(Message::TaskCompleted(id));
        }
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    if Tasks::new()?.delete(id)? {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}

fn handle_categories(date: Option<String>) -> Result<()> {
    let profile = selected_profile()?;
    let date = date.unwrap_or_else(today);

    let profile_id = profile.id.unwrap_or_default();
    let categories = Tasks::new()?.categories(profile_id, &date)?;

    if categories.is_empty() {
        msg_info!(Message::NoTasksFound(date));
        return Ok(());
    }
    for category in categories {
        msg_print!(category);
    }
    Ok(())
}
