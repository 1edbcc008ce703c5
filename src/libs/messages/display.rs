//! Display implementation for application messages.
//!
//! All user-facing text lives here, so commands only deal with typed
//! `Message` values and their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SYNC MESSAGES ===
            Message::SyncWindow(from, to) if from == to => format!("Synchronizing time entries for {}", from),
            Message::SyncWindow(from, to) => format!("Synchronizing time entries from {} to {}", from, to),
            Message::NothingToSync => "There is no time entries to synchronize".to_string(),
            Message::EntriesFound(rows, days) => format!("Found {} time entries over {} day(s)", rows, days),
            Message::SyncCompleted(count) => format!("{} time entries have been submitted to Redmine", count),
            Message::DryRunHeader(date) => format!("Time entries for {}", date),
            Message::DryRunCompleted(count) => format!("Dry run: {} time entries would be submitted", count),

            // === ACTIVITY MESSAGES ===
            Message::ActivitiesHeader => "Redmine time entry activities:".to_string(),
            Message::NoActivitiesFound => "Redmine returned no time entry activities".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigModuleRedmine => "Redmine settings".to_string(),
            Message::ConfigModuleHamster => "Hamster settings".to_string(),

            // === PROMPTS ===
            Message::PromptRedmineHost => "Enter the Redmine URL".to_string(),
            Message::PromptRedmineKey => "Enter your Redmine API key".to_string(),
            Message::PromptHamsterDb => "Enter the path to the Hamster database".to_string(),
            Message::PromptDayStart => "Enter the day start offset (minutes after midnight)".to_string(),
        };
        write!(f, "{}", text)
    }
}
