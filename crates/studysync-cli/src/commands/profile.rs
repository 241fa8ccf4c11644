//! Study profile commands.

use std::path::PathBuf;

use clap::Subcommand;
use studysync_core::{PlanDb, Profile};

use super::{print_json, read_profile, require_profile, CliResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Write a sample profile to edit
    Init {
        /// Output file (TOML)
        #[arg(long, default_value = "profile.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate a profile file and store it (at least one subject required)
    Set {
        /// Profile file (.toml or .json)
        file: PathBuf,
    },
    /// Show the stored profile
    Show,
    /// Check a profile file without storing it
    Validate {
        /// Profile file (.toml or .json)
        file: PathBuf,
    },
}

pub fn run(action: ProfileAction) -> CliResult {
    match action {
        ProfileAction::Init { path, force } => {
            if path.exists() && !force {
                return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
            }
            std::fs::write(&path, toml::to_string_pretty(&Profile::sample())?)?;
            println!("sample profile written to {}", path.display());
        }
        ProfileAction::Set { file } => {
            let profile = read_profile(&file)?;
            profile.require_subjects()?;
            PlanDb::open()?.save_profile(&profile)?;
            println!("profile saved ({} subjects)", profile.subjects.len());
        }
        ProfileAction::Show => {
            let profile = require_profile(&PlanDb::open()?)?;
            print_json(&profile)?;
        }
        ProfileAction::Validate { file } => {
            read_profile(&file)?.validate()?;
            println!("profile is valid");
        }
    }
    Ok(())
}
