//! Schedule generation and inspection commands.

use std::path::PathBuf;

use chrono::Weekday;
use clap::Subcommand;
use studysync_core::profile::format_hour;
use studysync_core::{Activity, Config, DaySchedule, PlanDb, StudyPlanner};

use super::{print_json, read_profile, require_profile, require_schedule, CliResult};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a new weekly schedule (discards recorded progress)
    Generate {
        /// Use and store this profile file instead of the stored profile
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Seed for reproducible task topics (overrides config)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the full schedule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the stored schedule
    Show {
        /// Only this weekday (e.g. "mon", "Friday")
        #[arg(long)]
        day: Option<Weekday>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List recommended study techniques
    Techniques,
    /// List break pattern presets
    Breaks,
    /// List contingency plans
    Contingency,
}

pub fn run(action: PlanAction) -> CliResult {
    let db = PlanDb::open()?;

    match action {
        PlanAction::Generate { profile, seed, json } => {
            let profile = match profile {
                Some(path) => read_profile(&path)?,
                None => require_profile(&db)?,
            };

            let mut planner_config = Config::load()?.planner();
            if seed.is_some() {
                planner_config.seed = seed;
            }
            let schedule = StudyPlanner::with_config(planner_config).generate(&profile)?;
            db.save_plan(&profile, &schedule)?;

            if json {
                print_json(&schedule)?;
            } else {
                for day in &schedule.days {
                    println!(
                        "{:<4} study {:>2}h  review {}h  free {:>2}h",
                        day.day,
                        day.count(Activity::Study),
                        day.count(Activity::Review),
                        day.count(Activity::Free)
                    );
                }
                println!("schedule generated ({} tasks)", schedule.tasks().count());
            }
        }
        PlanAction::Show { day, json } => {
            let schedule = require_schedule(&db)?;
            let days: Vec<&DaySchedule> = schedule
                .days
                .iter()
                .filter(|d| day.map_or(true, |wanted| d.day == wanted))
                .collect();

            if json {
                print_json(&days)?;
            } else {
                for day in days {
                    print_day(day);
                }
            }
        }
        PlanAction::Techniques => {
            let schedule = require_schedule(&db)?;
            for technique in &schedule.techniques {
                println!("- {technique}");
            }
        }
        PlanAction::Breaks => {
            let schedule = require_schedule(&db)?;
            for pattern in &schedule.break_patterns {
                println!(
                    "- {} (x{}), then a {} long break",
                    pattern.duration, pattern.repeat, pattern.long_break
                );
            }
        }
        PlanAction::Contingency => {
            let schedule = require_schedule(&db)?;
            for plan in &schedule.contingency_plans {
                println!("- {plan}");
            }
        }
    }
    Ok(())
}

fn print_day(day: &DaySchedule) {
    println!("{}", day.day);
    for block in &day.blocks {
        println!(
            "  {}-{}  {:<10}  {}",
            format_hour(block.start_hour),
            format_hour(block.end_hour),
            format!("{:?}", block.activity),
            block.subject.as_deref().unwrap_or("")
        );
    }
    println!();
}
