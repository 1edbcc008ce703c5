//! The `sync` command: push a window of Hamster time to Redmine.

use crate::{
    api::redmine::Redmine,
    db::facts::Facts,
    libs::{
        config::Config,
        messages::{macros::is_debug_mode, Message},
        progress::{LogProgress, NoProgress, ProgressObserver, TerminalBar},
        query::{Filter, QueryWindow},
        sync::{self, SyncOutcome},
        view::View,
    },
    msg_debug, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::Path;
use std::process::ExitCode;

/// Exit status reported when the window holds nothing to upload.
pub const NOTHING_TO_SYNC_EXIT: u8 = 2;

const INPUT_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Single date or inclusive range: dd.mm.yyyy or dd.mm.yyyy-dd.mm.yyyy (default: today)
    #[arg(short, long)]
    date: Option<String>,

    /// Only activities of this Hamster category
    #[arg(short, long)]
    project: Option<String>,

    /// Only activities carrying at least one of these comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,

    /// Show what would be submitted without creating time entries
    #[arg(long)]
    dry_run: bool,

    /// Do not draw the progress bar
    #[arg(short, long)]
    quiet: bool,
}

pub fn cmd(args: SyncArgs, config_path: Option<&Path>) -> Result<ExitCode> {
    let config = Config::load(config_path)?;
    let window = QueryWindow::resolve(args.date.as_deref(), config.day_start(), Local::now().naive_local())?;
    let filter = Filter::new(args.project, args.tags.as_deref());

    msg_info!(Message::SyncWindow(
        window.from.format(INPUT_DATE_FORMAT).to_string(),
        window.to.format(INPUT_DATE_FORMAT).to_string()
    ));

    msg_debug!(format!("Hamster database: {}", config.db_path.display()));
    let mut facts = Facts::open(&config.db_path)?;
    let mut redmine = Redmine::new(&config.redmine_host, &config.redmine_key)?;

    if args.dry_run {
        return preview(&mut facts, &mut redmine, &window, &filter);
    }

    let observer: Box<dyn ProgressObserver> = match (args.quiet, is_debug_mode()) {
        (true, _) => Box::new(NoProgress),
        (false, true) => Box::new(LogProgress),
        (false, false) => Box::new(TerminalBar::stdout()),
    };

    match sync::run(&mut facts, &mut redmine, &window.range(), &filter, observer)? {
        SyncOutcome::NothingToSync => {
            msg_warning!(Message::NothingToSync);
            Ok(ExitCode::from(NOTHING_TO_SYNC_EXIT))
        }
        SyncOutcome::Completed { submitted } => {
            msg_success!(Message::SyncCompleted(submitted));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn preview(facts: &mut Facts, redmine: &mut Redmine, window: &QueryWindow, filter: &Filter) -> Result<ExitCode> {
    let batches = sync::collect(facts, &window.range(), filter)?;
    let total: usize = batches.iter().map(|batch| batch.rows.len()).sum();
    if total == 0 {
        msg_warning!(Message::NothingToSync);
        return Ok(ExitCode::from(NOTHING_TO_SYNC_EXIT));
    }

    let catalog = sync::fetch_catalog(redmine)?;
    msg_info!(Message::EntriesFound(total, batches.len()));
    for batch in &batches {
        msg_print!(Message::DryRunHeader(batch.spent_on().to_string()), true);
        View::rows(&batch.rows, &catalog);
    }
    msg_print!(Message::DryRunCompleted(total), true);

    Ok(ExitCode::SUCCESS)
}
