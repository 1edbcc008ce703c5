use crate::{
    api::{redmine::Redmine, IssueTracker},
    libs::{catalog::ActivityCatalog, config::Config, messages::Message, view::View},
    msg_print, msg_warning,
};
use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

/// Lists the Redmine activities tags can map to; the default is marked.
pub fn cmd(config_path: Option<&Path>) -> Result<ExitCode> {
    let config = Config::load(config_path)?;
    let mut redmine = Redmine::new(&config.redmine_host, &config.redmine_key)?;

    match ActivityCatalog::new(redmine.activities()?) {
        Some(catalog) => {
            msg_print!(Message::ActivitiesHeader);
            View::activities(&catalog);
        }
        None => msg_warning!(Message::NoActivitiesFound),
    }

    Ok(ExitCode::SUCCESS)
}
