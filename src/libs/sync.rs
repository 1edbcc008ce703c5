//! The upload pipeline: Hamster rows in, Redmine time entries out.
//!
//! A run walks the query window day by day, collects the aggregated rows of
//! every day, and only then touches Redmine: the activity catalog is loaded
//! once and the entries are submitted one after another in day and query
//! order. The first failure ends the run. Entries submitted before it stay
//! in Redmine, nothing is rolled back or retried.

use super::catalog::ActivityCatalog;
use super::date_range::DateRange;
use super::entry::{ActivityRow, TimeEntry};
use super::progress::{Progress, ProgressObserver};
use super::query::Filter;
use crate::api::{IssueTracker, RedmineError};
use crate::db::db::DbError;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Connection(#[from] DbError),
    #[error("Failed to read time entries for {day}: {source}")]
    Retrieval {
        day: NaiveDate,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Activity '{activity}' does not reference a Redmine issue like #123")]
    Extraction { activity: String },
    #[error("Failed to load Redmine activities: {0}")]
    Catalog(#[source] RedmineError),
    #[error("Redmine has no time entry activities")]
    EmptyCatalog,
    #[error("Failed to submit time entry for issue #{issue_id}: {source}")]
    Submission {
        issue_id: u64,
        #[source]
        source: RedmineError,
    },
}

/// Local store of tracked time, queried one logical day at a time.
pub trait FactSource {
    /// Aggregated rows for the 24 hours starting at `day`, in start time order.
    fn day_rows(&mut self, day: NaiveDateTime, filter: &Filter) -> rusqlite::Result<Vec<ActivityRow>>;
}

/// Rows of one logical day. Only built for days that have rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBatch {
    pub day: NaiveDateTime,
    pub rows: Vec<ActivityRow>,
}

impl DayBatch {
    /// Calendar date the entries are booked on.
    pub fn spent_on(&self) -> NaiveDate {
        self.day.date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The window holds no rows; Redmine was not contacted.
    NothingToSync,
    Completed { submitted: usize },
}

/// Queries every day of `range`, keeping the days that have rows.
///
/// A failing day aborts the collection and discards what was gathered.
pub fn collect<S: FactSource>(source: &mut S, range: &DateRange, filter: &Filter) -> Result<Vec<DayBatch>, SyncError> {
    let mut batches = Vec::new();
    for day in range {
        let rows = source.day_rows(day, filter).map_err(|source| SyncError::Retrieval {
            day: day.date(),
            source,
        })?;
        debug!(day = %day.date(), rows = rows.len(), "collected day");
        if !rows.is_empty() {
            batches.push(DayBatch { day, rows });
        }
    }
    Ok(batches)
}

/// Loads the activity catalog from the tracker.
pub fn fetch_catalog<T: IssueTracker>(tracker: &mut T) -> Result<ActivityCatalog, SyncError> {
    let activities = tracker.activities().map_err(SyncError::Catalog)?;
    let catalog = ActivityCatalog::new(activities).ok_or(SyncError::EmptyCatalog)?;
    debug!(activities = catalog.len(), default = %catalog.default_activity().name, "loaded activity catalog");
    Ok(catalog)
}

/// Runs a full synchronization of `range`.
///
/// `observer` sees the running percentage after each submitted entry and is
/// finished once the run ends, whether it succeeded or not.
pub fn run<S, T, O>(source: &mut S, tracker: &mut T, range: &DateRange, filter: &Filter, observer: O) -> Result<SyncOutcome, SyncError>
where
    S: FactSource,
    T: IssueTracker,
    O: ProgressObserver,
{
    let batches = collect(source, range, filter)?;
    let total: usize = batches.iter().map(|batch| batch.rows.len()).sum();
    if total == 0 {
        info!("no time entries in the window");
        return Ok(SyncOutcome::NothingToSync);
    }
    info!(entries = total, days = batches.len(), "starting upload");

    let catalog = fetch_catalog(tracker)?;
    let mut progress = Progress::new(observer);
    let result = submit(tracker, &catalog, &batches, 100.0 / total as f64, &mut progress);
    progress.finish();

    let submitted = result?;
    info!(submitted, "upload finished");
    Ok(SyncOutcome::Completed { submitted })
}

fn submit<T, O>(tracker: &mut T, catalog: &ActivityCatalog, batches: &[DayBatch], step: f64, progress: &mut Progress<O>) -> Result<usize, SyncError>
where
    T: IssueTracker,
    O: ProgressObserver,
{
    let mut submitted = 0;
    for batch in batches {
        for row in &batch.rows {
            let entry = TimeEntry::from_row(row, batch.spent_on(), catalog).ok_or_else(|| SyncError::Extraction {
                activity: row.activity.clone().unwrap_or_default(),
            })?;
            tracker.create_time_entry(&entry).map_err(|source| SyncError::Submission {
                issue_id: entry.issue_id,
                source,
            })?;
            debug!(
                issue_id = entry.issue_id,
                activity_id = entry.activity_id,
                spent_on = %entry.spent_on,
                hours = entry.hours,
                "submitted time entry"
            );
            submitted += 1;
            progress.advance(step);
        }
    }
    Ok(submitted)
}
