use chrono::Local;
use clap::Subcommand;
use studysync_core::{upcoming_deadlines, DeadlineKind, PlanDb, ProgressStore};

use super::{print_json, require_profile, require_schedule, CliResult};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Overall and per-subject progress
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Due dates and exams, soonest first
    Deadlines,
}

pub fn run(action: ProgressAction) -> CliResult {
    let db = PlanDb::open()?;

    match action {
        ProgressAction::Show { json } => {
            let store = ProgressStore::new(require_schedule(&db)?);
            let summary = store.summary();
            if json {
                print_json(&serde_json::json!({
                    "summary": summary,
                    "subjects": store.schedule().progress,
                }))?;
            } else {
                println!(
                    "overall {}%  ({}/{} tasks done)",
                    summary.overall_progress, summary.completed_tasks, summary.total_tasks
                );
                for subject in &store.schedule().progress {
                    let last = subject
                        .last_studied
                        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "never".to_string());
                    println!("  {:<24} {:>3}%  last studied {last}", subject.name, subject.progress);
                }
            }
        }
        ProgressAction::Deadlines => {
            let profile = require_profile(&db)?;
            let deadlines = upcoming_deadlines(&profile.subjects, Local::now().date_naive());
            if deadlines.is_empty() {
                println!("no deadlines");
            }
            for deadline in deadlines {
                let kind = match deadline.kind {
                    DeadlineKind::Assignment => "Assignment",
                    DeadlineKind::Exam => "Exam",
                };
                println!(
                    "{}  {:<10} {:<24} in {} days",
                    deadline.date, kind, deadline.subject, deadline.days_until
                );
            }
        }
    }
    Ok(())
}
