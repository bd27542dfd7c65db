#[derive(Debug, Clone)]
pub enum Message {
    // === PROFILE MESSAGES ===
    ProfileAdded(String),
    ProfileDeleted(String),
    ProfileSelected(String),
    ProfileNotFound(String),
    NoProfilesFound,
    NoProfileSelected,
    ProfileListHeader,
    UsernameRequired,
    UsernameTooLong,
    UsernameTaken,
    PasswordTooLong,
    PasswordIncorrect,

    // === TASK MESSAGES ===
    TaskAdded,
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskDeleted(i64),
    TaskNotFound(i64),
    NoTasksFound(String),           // date
    TaskListHeader(String, String), // username, date
    RemainingTasks(usize),
    AllTasksDone,
    TaskDetailsRequired,
    TaskDetailsTooLong,
    TaskCategoryTooLong,
    TaskCategoryReserved,
    InvalidPriority(String),
    InvalidStatusFilter(String),

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingsUpdated,
    SettingsReset,
    SettingMissing(String),
    SettingNotNumeric(String, String), // key, stored value
    TimerDurationTooShort,
    TimerDurationTooLong,
    LongBreakIntervalOutOfRange,

    // === POMODORO MESSAGES ===
    PhaseStarted(String, u32), // phase, duration in seconds
    PhaseCompleted(String),
    TimerPaused,
    TimerSkipped,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === PROMPTS ===
    PromptUsername,
    PromptPassword,
    PromptPasswordOptional,
    PromptConfirmDeleteProfile(String),
    PromptTaskDetails,
    PromptTaskCategory,
    PromptTaskPriority,
}
