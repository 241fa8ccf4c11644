mod config;
pub mod plan_db;

pub use config::{Config, GenerationConfig, OutputConfig};
pub use plan_db::PlanDb;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the StudySync data directory, creating it if needed.
///
/// `STUDYSYNC_DATA_DIR` overrides the location outright. Otherwise the
/// directory is `~/.config/studysync[-dev]/`, with the `-dev` suffix when
/// `STUDYSYNC_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDYSYNC_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDYSYNC_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studysync-dev")
            } else {
                base_dir.join("studysync")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
