//! CLI subcommands and the helpers they share.

pub mod config;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod task;

use std::error::Error;
use std::path::Path;

use serde::Serialize;
use studysync_core::{Config, PlanDb, Profile, Schedule};

pub type CliResult<T = ()> = Result<T, Box<dyn Error>>;

/// Print a value as JSON, pretty or compact per `output.pretty_json`.
pub fn print_json<T: Serialize>(value: &T) -> CliResult {
    let config = Config::load_or_default();
    let text = if config.output.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

/// Read a profile from a `.json` file, or TOML for any other extension.
pub fn read_profile(path: &Path) -> CliResult<Profile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let profile = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        _ => toml::from_str(&content)?,
    };
    Ok(profile)
}

pub fn require_profile(db: &PlanDb) -> CliResult<Profile> {
    db.load_profile()?
        .ok_or_else(|| "no profile stored; run 'profile set <file>' first".into())
}

pub fn require_schedule(db: &PlanDb) -> CliResult<Schedule> {
    db.load_schedule()?
        .ok_or_else(|| "no schedule yet; run 'plan generate' first".into())
}

/// Remove the stored profile and schedule.
pub fn reset() -> CliResult {
    PlanDb::open()?.reset()?;
    println!("stored profile and schedule removed");
    Ok(())
}
