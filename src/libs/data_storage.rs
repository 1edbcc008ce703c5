use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "hamster-redmine";

/// Hamster keeps its database under the applet's own data directory.
const HAMSTER_DIR: &str = "hamster-applet";
const HAMSTER_DB_FILE: &str = "hamster.db";

#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = Self::user_data_dir().join(APP_NAME);

        Self { base_path }
    }

    /// Path of `file_name` inside the application directory, creating the directory on demand.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Default location of the Hamster database for the current user.
    pub fn hamster_db_path() -> PathBuf {
        Self::user_data_dir().join(HAMSTER_DIR).join(HAMSTER_DB_FILE)
    }

    fn user_data_dir() -> PathBuf {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        Path::new(&base_path).to_path_buf()
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
