pub mod activities;
pub mod init;
pub mod sync;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Submit Hamster time to Redmine as time entries")]
    Sync(sync::SyncArgs),
    #[command(about = "List Redmine time entry activities")]
    Activities,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<ExitCode> {
        let cli = Self::parse();
        let config = cli.config.as_deref();
        match cli.command {
            Commands::Init => init::cmd(config),
            Commands::Sync(args) => sync::cmd(args, config),
            Commands::Activities => activities::cmd(config),
        }
    }
}
