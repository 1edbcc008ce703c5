//! Read-only access to the Hamster time tracker database.
//!
//! Hamster stores every tracked span as a row in `facts`, linked to an
//! activity (`activities`), the activity's category (`categories`) and any
//! number of tags (`fact_tags` → `tags`). Nothing here ever writes to the
//! database: it is opened read-only and only queried per logical day.
//!
//! ```rust,no_run
//! use hamster_redmine::db::facts::Facts;
//! use hamster_redmine::libs::query::Filter;
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! let facts = Facts::open(Path::new("hamster.db"))?;
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let rows = facts.fetch(day, &Filter::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Connection opening and SQL function registration.
pub mod db;

/// Per-day aggregation of facts into task totals.
pub mod facts;
