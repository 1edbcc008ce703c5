use dotenv::dotenv;
use hamster_redmine::commands::Cli;
use hamster_redmine::libs::messages::macros::is_debug_mode;
use hamster_redmine::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _ = dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::menu() {
        Ok(code) => code,
        Err(error) => {
            msg_error!(error);
            ExitCode::FAILURE
        }
    }
}
