//! Interactive configuration setup.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

/// Runs the setup wizard and writes the result to `config_path` or the default location.
pub fn cmd(config_path: Option<&Path>) -> Result<ExitCode> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };

    Config::init(&path)?.save(&path)?;

    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(ExitCode::SUCCESS)
}
