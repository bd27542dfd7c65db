//! Display implementation for pomoplanner application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! to the user. All user-facing strings live here, including the validation
//! messages surfaced by the profile, task, and timer-settings checks, so the
//! exact wording is defined in exactly one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // Profile messages
            Message::ProfileAdded(name) => format!("Profile '{}' created", name),
            Message::ProfileDeleted(name) => format!("Profile '{}' deleted", name),
            Message::ProfileSelected(name) => format!("Switched to profile '{}'", name),
            Message::ProfileNotFound(name) => format!("Profile '{}' not found", name),
            Message::NoProfilesFound => "No profiles found. Create one with 'pomoplanner profile add'".to_string(),
            Message::NoProfileSelected => "No profile is selected. Run 'pomoplanner profile select' first".to_string(),
            Message::ProfileListHeader => "📋 Profiles".to_string(),
            Message::UsernameRequired => "Please Enter a Username".to_string(),
            Message::UsernameTooLong => "Username Shouldn't Be Longer Than 30 Characters".to_string(),
            Message::UsernameTaken => "Username is Taken, Please Try Another".to_string(),
            Message::PasswordTooLong => "Password Shouldn't Be Longer Than 50 Characters".to_string(),
            Message::PasswordIncorrect => "Password is Incorrect".to_string(),

            // Task messages
            Message::TaskAdded => "Task created".to_string(),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskReopened(id) => format!("Task {} marked as not completed", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::NoTasksFound(date) => format!("No tasks for {}", date),
            Message::TaskListHeader(username, date) => format!("📋 Tasks for {} on {}", username, date),
            Message::RemainingTasks(count) => format!("{} task(s) remaining", count),
            Message::AllTasksDone => "All tasks completed 🎉".to_string(),
            Message::TaskDetailsRequired => "Please Enter Task Details".to_string(),
            Message::TaskDetailsTooLong => "Task Details Shouldn't Be Longer Than 250 Characters".to_string(),
            Message::TaskCategoryTooLong => "Task Category Shouldn't Be Longer Than 50 Characters".to_string(),
            Message::TaskCategoryReserved => "Task Category Cannot Be \"All\"".to_string(),
            Message::InvalidPriority(value) => format!("Unknown priority '{}', expected Low, Moderate or High", value),
            Message::InvalidStatusFilter(value) => format!("Unknown status filter '{}', expected all, open or done", value),

            // Settings messages
            Message::SettingsHeader => "⚙️ Pomodoro settings".to_string(),
            Message::SettingsUpdated => "Settings updated".to_string(),
            Message::SettingsReset => "Settings reset to defaults".to_string(),
            Message::SettingMissing(key) => format!("Setting '{}' is missing from the database", key),
            Message::SettingNotNumeric(key, value) => format!("Setting '{}' holds a non-numeric value '{}'", key, value),
            Message::TimerDurationTooShort => "Timer Duration Cannot Be Shorter Than 1 Second".to_string(),
            Message::TimerDurationTooLong => "Timer Duration Cannot Be Longer Than 3600 Seconds (60 Minutes)".to_string(),
            Message::LongBreakIntervalOutOfRange => "Long Break Interval Should Be Between 1-10".to_string(),

            // Pomodoro messages
            Message::PhaseStarted(phase, seconds) => format!("{} started ({} seconds)", phase, seconds),
            Message::PhaseCompleted(phase) => format!("{} complete", phase),
            Message::TimerPaused => "Timer paused".to_string(),
            Message::TimerSkipped => "Skipping to the end of the current interval".to_string(),

            // Migration messages
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),

            // Prompts
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptPasswordOptional => "Password (leave empty for none)".to_string(),
            Message::PromptConfirmDeleteProfile(name) => format!("Delete profile '{}' and all of its tasks?", name),
            Message::PromptTaskDetails => "Task details".to_string(),
            Message::PromptTaskCategory => "Category (optional)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
        };
        write!(f, "{}", text)
    }
}
