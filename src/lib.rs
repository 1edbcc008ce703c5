//! # hamster-redmine
//!
//! Pushes time tracked with the Hamster time tracker to Redmine.
//!
//! ## Features
//!
//! - **Day aggregation**: every task of a logical day becomes one time entry,
//!   however many times it was started
//! - **Filters**: restrict a run to one Hamster category or to a set of tags
//! - **Activity mapping**: Hamster tags that name a Redmine activity pick the
//!   activity of the entry, otherwise Redmine's first activity is used
//! - **Issue linking**: the Redmine issue comes from a `#123` reference in the
//!   Hamster activity name
//! - **Dry runs**: preview the entries before submitting them
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hamster_redmine::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
