#[cfg(test)]
mod tests {
    use pomoplanner::db::profiles::Profiles;
    use pomoplanner::db::tasks::Tasks;
    use pomoplanner::libs::task::{remaining_badge, Priority, StatusFilter, Task, TaskFilter};
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    struct TaskTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        profile_id: i64,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK
                .get_or_init(|| Mutex::new(()))
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            let mut profiles = Profiles::new().unwrap();
            let profile_id = profiles.add("ada", None).unwrap();

            TaskTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                profile_id,
            }
        }
    }

    const DATE: &str = "26/08/2026";

    fn task(profile_id: i64, category: Option<&str>, priority: Priority, details: &str) -> Task {
        Task::new(profile_id, DATE, priority, category.map(String::from), details)
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_and_get_roundtrip(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let new_task = task(ctx.profile_id, Some("Work"), Priority::High, "Write report");
        let id = tasks.insert(&new_task).unwrap();

        let stored = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.profile_id, new_task.profile_id);
        assert_eq!(stored.date, new_task.date);
        assert_eq!(stored.priority, new_task.priority);
        assert_eq!(stored.is_completed, new_task.is_completed);
        assert_eq!(stored.category, new_task.category);
        assert_eq!(stored.details, new_task.details);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_invalid_task_is_never_persisted(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // The command layer validates before inserting; an invalid task
        // must leave the table untouched.
        for bad in [
            task(ctx.profile_id, Some("All"), Priority::Low, "Reserved category"),
            task(ctx.profile_id, None, Priority::Low, &"d".repeat(251)),
            task(ctx.profile_id, None, Priority::Low, ""),
        ] {
            if bad.validate().is_ok() {
                tasks.insert(&bad).unwrap();
            }
        }

        let listed = tasks.fetch(ctx.profile_id, DATE, &TaskFilter::default()).unwrap();
        assert!(listed.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unfiltered_fetch_returns_all_for_profile_and_date(ctx: &mut TaskTestContext) {
        let mut profiles = Profiles::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        let other_profile = profiles.add("grace", None).unwrap();

        tasks.insert(&task(ctx.profile_id, Some("Work"), Priority::High, "a")).unwrap();
        tasks.insert(&task(ctx.profile_id, Some("Home"), Priority::Low, "b")).unwrap();
        tasks.insert(&task(ctx.profile_id, None, Priority::Moderate, "c")).unwrap();
        // Different date and different profile must not show up.
        let mut elsewhere = task(ctx.profile_id, None, Priority::Low, "d");
        elsewhere.date = "27/08/2026".to_string();
        tasks.insert(&elsewhere).unwrap();
        tasks.insert(&task(other_profile, None, Priority::Low, "e")).unwrap();

        let listed = tasks.fetch(ctx.profile_id, DATE, &TaskFilter::default()).unwrap();
        let mut details: Vec<&str> = listed.iter().map(|t| t.details.as_str()).collect();
        details.sort();
        assert_eq!(details, vec!["a", "b", "c"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_with_filters(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&task(ctx.profile_id, Some("Work"), Priority::High, "a")).unwrap();
        tasks.insert(&task(ctx.profile_id, Some("Work"), Priority::Low, "b")).unwrap();
        let mut done = task(ctx.profile_id, Some("Home"), Priority::High, "c");
        done.is_completed = true;
        tasks.insert(&done).unwrap();

        let by_category = TaskFilter::new(Some("Work".to_string()), None, StatusFilter::Any);
        assert_eq!(tasks.fetch(ctx.profile_id, DATE, &by_category).unwrap().len(), 2);

        let by_priority = TaskFilter::new(None, Some(Priority::High), StatusFilter::Any);
        assert_eq!(tasks.fetch(ctx.profile_id, DATE, &by_priority).unwrap().len(), 2);

        let open_only = TaskFilter::new(None, None, StatusFilter::OnlyIncomplete);
        assert_eq!(tasks.fetch(ctx.profile_id, DATE, &open_only).unwrap().len(), 2);

        let done_only = TaskFilter::new(None, None, StatusFilter::OnlyComplete);
        let done_tasks = tasks.fetch(ctx.profile_id, DATE, &done_only).unwrap();
        assert_eq!(done_tasks.len(), 1);
        assert_eq!(done_tasks[0].details, "c");

        let combined = TaskFilter::new(Some("Work".to_string()), Some(Priority::High), StatusFilter::OnlyIncomplete);
        let combined_tasks = tasks.fetch(ctx.profile_id, DATE, &combined).unwrap();
        assert_eq!(combined_tasks.len(), 1);
        assert_eq!(combined_tasks[0].details, "a");

        // "All" in either position disables that predicate.
        let all_categories = TaskFilter::new(Some("All".to_string()), None, StatusFilter::Any);
        assert_eq!(tasks.fetch(ctx.profile_id, DATE, &all_categories).unwrap().len(), 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_completion(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert(&task(ctx.profile_id, None, Priority::Low, "a")).unwrap();

        let mut stored = tasks.get_by_id(id).unwrap().unwrap();
        stored.is_completed = true;
        assert!(tasks.update(&stored).unwrap());
        assert!(tasks.get_by_id(id).unwrap().unwrap().is_completed);

        stored.is_completed = false;
        assert!(tasks.update(&stored).unwrap());
        assert!(!tasks.get_by_id(id).unwrap().unwrap().is_completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_task(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert(&task(ctx.profile_id, None, Priority::Low, "a")).unwrap();
        assert!(tasks.delete(id).unwrap());
        assert!(tasks.get_by_id(id).unwrap().is_none());
        assert!(!tasks.delete(id).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_distinct_categories(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&task(ctx.profile_id, Some("Work"), Priority::Low, "a")).unwrap();
        tasks.insert(&task(ctx.profile_id, Some("Work"), Priority::Low, "b")).unwrap();
        tasks.insert(&task(ctx.profile_id, Some("Home"), Priority::Low, "c")).unwrap();
        tasks.insert(&task(ctx.profile_id, None, Priority::Low, "d")).unwrap();

        let categories = tasks.categories(ctx.profile_id, DATE).unwrap();
        assert_eq!(categories, vec!["Home".to_string(), "Work".to_string()]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_remaining_badge_over_fetched_list(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&task(ctx.profile_id, None, Priority::Low, "a")).unwrap();
        let mut done = task(ctx.profile_id, None, Priority::Low, "b");
        done.is_completed = true;
        tasks.insert(&done).unwrap();

        let listed = tasks.fetch(ctx.profile_id, DATE, &TaskFilter::default()).unwrap();
        assert_eq!(remaining_badge(&listed), Some(1));
    }
}
