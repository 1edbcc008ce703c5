#[derive(Debug, Clone)]
pub enum Message {
    // === SYNC MESSAGES ===
    SyncWindow(String, String), // from, to
    NothingToSync,
    EntriesFound(usize, usize), // rows, days
    SyncCompleted(usize),       // submitted count
    DryRunHeader(String),       // date
    DryRunCompleted(usize),     // row count

    // === ACTIVITY MESSAGES ===
    ActivitiesHeader,
    NoActivitiesFound,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigModuleRedmine,
    ConfigModuleHamster,

    // === PROMPTS ===
    PromptRedmineHost,
    PromptRedmineKey,
    PromptHamsterDb,
    PromptDayStart,
}
