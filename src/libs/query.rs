//! Resolution of the `--date`, `--project` and `--tags` options into a query.
//!
//! Dates use the `dd.mm.yyyy` form, either alone or as an inclusive
//! `dd.mm.yyyy-dd.mm.yyyy` range. Every date is shifted by the day-start
//! offset, so with a 05:00 offset the logical day `01.03.2024` covers
//! `2024-03-01 05:00` up to `2024-03-02 05:00`.

use super::date_range::DateRange;
use super::tags::TagSet;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date '{0}', expected dd.mm.yyyy")]
    Malformed(String),
    #[error("Invalid date range '{0}', expected dd.mm.yyyy or dd.mm.yyyy-dd.mm.yyyy")]
    TooManyParts(String),
    #[error("Date range '{0}' ends before it starts")]
    Inverted(String),
}

/// Inclusive window of logical days to synchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl QueryWindow {
    /// Builds the window from the raw `--date` value.
    ///
    /// Without a value the window is the logical day containing `now`.
    pub fn resolve(raw: Option<&str>, day_start: Duration, now: NaiveDateTime) -> Result<Self, DateError> {
        let raw = match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw,
            None => {
                let today = Self::day_start((now - day_start).date(), day_start);
                return Ok(Self { from: today, to: today });
            }
        };

        let parts: Vec<&str> = raw.split('-').map(str::trim).collect();
        let dates = match parts.as_slice() {
            [single] => vec![Self::parse_date(single)?],
            [from, to] => vec![Self::parse_date(from)?, Self::parse_date(to)?],
            _ => return Err(DateError::TooManyParts(raw.to_string())),
        };

        let from = Self::day_start(dates[0], day_start);
        let to = Self::day_start(*dates.last().unwrap_or(&dates[0]), day_start);
        if from > to {
            return Err(DateError::Inverted(raw.to_string()));
        }

        Ok(Self { from, to })
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }

    fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DateError::Malformed(value.to_string()))
    }

    fn day_start(date: NaiveDate, offset: Duration) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + offset
    }
}

/// Optional narrowing of the rows pulled from Hamster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Exact Hamster category name.
    pub project: Option<String>,
    /// Rows must carry at least one of these tags. Never empty when set.
    pub tags: Option<TagSet>,
}

impl Filter {
    pub fn new(project: Option<String>, tags: Option<&str>) -> Self {
        let project = project.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
        let tags = tags.map(TagSet::parse).filter(|t| !t.is_empty());
        Self { project, tags }
    }
}
