//! Inclusive day-by-day walk over a query window.

use chrono::{Duration, NaiveDateTime};

/// Inclusive range of logical days.
///
/// Bounds are day starts (midnight plus the configured day-start offset),
/// so every yielded value is the beginning of a 24 hour query window.
/// Iterating borrows nothing mutable: each call to [`DateRange::days`]
/// starts over from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Number of days the walk yields; zero for an inverted range.
    pub fn len(&self) -> usize {
        if self.start > self.end {
            return 0;
        }
        ((self.end - self.start).num_days() + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDateTime;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDateTime;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator returned by [`DateRange::days`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDateTime>,
    end: NaiveDateTime,
}

impl Iterator for Days {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        let current = self.next.filter(|day| *day <= self.end)?;
        self.next = current.checked_add_signed(Duration::days(1));
        Some(current)
    }
}
