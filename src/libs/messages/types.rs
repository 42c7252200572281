#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleSchedule,
    ConfigModuleUser,
    InvalidDueTime(String),

    // === PROMPTS ===
    PromptSelectModules,
    PromptHorizonYears,
    PromptMaxSlotAttempts,
    PromptDueTime,
    PromptChecklistTitle,
    PromptDepartment,
    PromptGivenBy,
    PromptEnableReminders,
    PromptRequireAttachment,
    PromptUserName,
    PromptUserRole,

    // === USER MESSAGES ===
    UserNotConfigured,

    // === INPUT MESSAGES ===
    InvalidDate(String),
    InvalidDateRange(String, String), // from, to
    InvalidOutcome(String),

    // === GENERATION MESSAGES ===
    NoChecklistExport,
    TemplateFieldMissing(String),
    NothingToSchedule(String),        // start date
    CalendarLoaded(usize, String),    // working days, last day
    CalendarUnrestricted(u32),        // horizon years
    SlotFallbacks(usize),
    OccurrencesHeader(String, String), // description, assignee
    OccurrencesPreview(usize),
    TaskIdsAssigned(usize, u64, u64), // count, first, last
    BatchWritten(usize, String),      // rows, path

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String), // date
    StateListHeader(String),
    NoTasksInState(String),
    NoVisibleTasks,
    UnclassifiableRows(usize),
    MaintenanceHeader,

    // === DELEGATION MESSAGES ===
    PendingHeader(usize),
    NoPendingTasks,
    TaskNotFound(String),
    TaskNotAssignedToUser(String, String), // task id, user
    TaskAlreadyClosed(String),
    OutcomeRecorded(String, String),       // task id, outcome
    HistoryHeader(usize),
    NoHistoryEntries,
}
