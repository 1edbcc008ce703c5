use super::catalog::ActivityCatalog;
use super::tags::TagSet;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static ISSUE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// One task of one day: every Hamster fact sharing a description, summed up.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    /// Hamster activity name, expected to mention the Redmine issue as `#123`.
    pub activity: Option<String>,
    pub description: Option<String>,
    /// Total duration in hours, rounded to two decimals.
    pub hours: f64,
    pub tags: TagSet,
}

impl ActivityRow {
    /// Redmine issue number referenced by the activity name.
    pub fn issue_id(&self) -> Option<u64> {
        let pattern = ISSUE_PATTERN.get_or_init(|| Regex::new(r"#([0-9]+)").expect("issue pattern is valid"));
        let captures = pattern.captures(self.activity.as_deref()?)?;
        captures.get(1)?.as_str().parse().ok()
    }
}

/// Time entry payload as Redmine expects it inside `{"time_entry": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub issue_id: u64,
    pub activity_id: u64,
    pub spent_on: NaiveDate,
    pub hours: f64,
    pub comments: String,
}

impl TimeEntry {
    /// Maps a row to an entry; `None` when the activity has no issue number.
    pub fn from_row(row: &ActivityRow, spent_on: NaiveDate, catalog: &ActivityCatalog) -> Option<Self> {
        Some(Self {
            issue_id: row.issue_id()?,
            activity_id: catalog.resolve(&row.tags).id,
            spent_on,
            hours: row.hours,
            comments: row.description.clone().unwrap_or_default(),
        })
    }
}
