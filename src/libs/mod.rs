//! Core library modules.
//!
//! - **Input**: configuration, date and filter resolution, storage paths
//! - **Pipeline**: day walking, tag sets, activity resolution, upload
//! - **Output**: progress sinks, tables, user-facing messages
//!
//! ```rust,no_run
//! use hamster_redmine::api::redmine::Redmine;
//! use hamster_redmine::db::facts::Facts;
//! use hamster_redmine::libs::{config::Config, progress::TerminalBar, query::{Filter, QueryWindow}, sync};
//!
//! let config = Config::load(None)?;
//! let window = QueryWindow::resolve(Some("01.03.2024-07.03.2024"), config.day_start(), chrono::Local::now().naive_local())?;
//! let mut facts = Facts::open(&config.db_path)?;
//! let mut redmine = Redmine::new(&config.redmine_host, &config.redmine_key)?;
//! sync::run(&mut facts, &mut redmine, &window.range(), &Filter::default(), TerminalBar::stdout())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod data_storage;
pub mod date_range;
pub mod entry;
pub mod messages;
pub mod progress;
pub mod query;
pub mod sync;
pub mod tags;
pub mod view;
