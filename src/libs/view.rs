use crate::libs::profile::Profile;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn profiles(profiles: &[Profile]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "USERNAME", "PROTECTED", "SELECTED"]);
        for profile in profiles {
            table.add_row(row![
                profile.id.unwrap_or(0),
                profile.username,
                if profile.is_protected() { "yes" } else { "no" },
                if profile.is_selected { "✔" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "PRIORITY", "CATEGORY", "DETAILS"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                if task.is_completed { "✔" } else { "" },
                task.priority,
                task.category.as_deref().unwrap_or("-"),
                task.details
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn settings(rows: &[(String, String)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SETTING", "VALUE"]);
        for (description, value) in rows {
            table.add_row(row![description, value]);
        }
        table.printstd();

        Ok(())
    }
}
