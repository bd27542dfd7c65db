use crate::libs::messages::{append_error, Message};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category value reserved for "no filter"; never stored on a task.
pub const CATEGORY_ALL: &str = "All";

/// Task priority, stored as TEXT in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Moderate,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Moderate => "Moderate",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Message;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" | "low" => Ok(Priority::Low),
            "Moderate" | "moderate" => Ok(Priority::Moderate),
            "High" | "high" => Ok(Priority::High),
            other => Err(Message::InvalidPriority(other.to_string())),
        }
    }
}

/// Completion filter for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    OnlyIncomplete,
    OnlyComplete,
}

impl FromStr for StatusFilter {
    type Err = Message;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::Any),
            "open" => Ok(StatusFilter::OnlyIncomplete),
            "done" => Ok(StatusFilter::OnlyComplete),
            other => Err(Message::InvalidStatusFilter(other.to_string())),
        }
    }
}

/// Filter set for `Tasks::fetch`. A category or priority of `None` means
/// "All" (predicate disabled).
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub status: StatusFilter,
}

impl TaskFilter {
    /// Builds a filter from raw CLI values, treating "All" as no filter.
    pub fn new(category: Option<String>, priority: Option<Priority>, status: StatusFilter) -> Self {
        let category = category.filter(|c| c != CATEGORY_ALL);
        Self { category, priority, status }
    }
}

/// A to-do item scoped to one profile and one date ("dd/mm/yyyy").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub profile_id: i64,
    pub date: String,
    pub priority: Priority,
    pub is_completed: bool,
    pub category: Option<String>,
    pub details: String,
}

impl Task {
    pub fn new(profile_id: i64, date: &str, priority: Priority, category: Option<String>, details: &str) -> Self {
        // Empty category input is stored as NULL.
        let category = category.filter(|c| !c.is_empty());
        Self {
            id: None,
            profile_id,
            date: date.to_string(),
            priority,
            is_completed: false,
            category,
            details: details.to_string(),
        }
    }

    /// Validates the task before insertion, collecting every violated rule.
    pub fn validate(&self) -> Result<(), String> {
        let mut errors = String::new();

        if self.details.is_empty() {
            append_error(&mut errors, Message::TaskDetailsRequired);
        }
        if self.details.chars().count() > 250 {
            append_error(&mut errors, Message::TaskDetailsTooLong);
        }
        if let Some(category) = &self.category {
            if category.chars().count() > 50 {
                append_error(&mut errors, Message::TaskCategoryTooLong);
            }
            if category == CATEGORY_ALL {
                append_error(&mut errors, Message::TaskCategoryReserved);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Today's date in the application's "dd/mm/yyyy" format.
pub fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Count of incomplete tasks for badge display; `None` when everything is
/// done. Pure function over the fetched list, recomputed on demand.
pub fn remaining_badge(tasks: &[Task]) -> Option<usize> {
    let remaining = tasks.iter().filter(|t| !t.is_completed).count();
    if remaining == 0 {
        None
    } else {
        Some(remaining)
    }
}
