//! Remote issue tracker access.
//!
//! The sync pipeline talks to the remote side only through the
//! [`IssueTracker`] trait; [`redmine::Redmine`] is the production
//! implementation on top of the Redmine REST API.
//!
//! ```rust,no_run
//! use hamster_redmine::api::{redmine::Redmine, IssueTracker};
//!
//! let mut redmine = Redmine::new("https://redmine.example.com", "api-key")?;
//! let activities = redmine.activities()?;
//! # Ok::<(), hamster_redmine::api::RedmineError>(())
//! ```

use crate::libs::catalog::Activity;
use crate::libs::entry::TimeEntry;
use thiserror::Error;

pub mod redmine;

pub use redmine::{Redmine, RedmineConfig};

#[derive(Debug, Error)]
pub enum RedmineError {
    #[error("Invalid Redmine URL '{0}', expected http:// or https://")]
    InvalidHost(String),
    #[error("Request to Redmine failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Redmine rejected the request ({status}): {details}")]
    Rejected { status: u16, details: String },
}

/// Blocking access to the issue tracker that receives the time entries.
pub trait IssueTracker {
    /// Time entry activities in the order the tracker declares them.
    fn activities(&mut self) -> Result<Vec<Activity>, RedmineError>;

    /// Creates and persists one time entry.
    fn create_time_entry(&mut self, entry: &TimeEntry) -> Result<(), RedmineError>;
}
