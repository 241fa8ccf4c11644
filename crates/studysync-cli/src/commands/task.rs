//! Task completion commands for CLI.

use chrono::{Local, Utc, Weekday};
use clap::Subcommand;
use studysync_core::progress::current_weekday;
use studysync_core::{Config, PlanDb, ProgressStore};

use super::{print_json, require_schedule, CliResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks for a day
    List {
        /// Weekday (default: today)
        #[arg(long)]
        day: Option<Weekday>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a task done, or undone if it already is
    Toggle {
        /// Weekday of the task
        day: Weekday,
        /// Task number as shown by `task list`
        index: usize,
    },
}

pub fn run(action: TaskAction) -> CliResult {
    let db = PlanDb::open()?;
    let config = Config::load_or_default();
    let mut store =
        ProgressStore::new(require_schedule(&db)?).with_step(config.generation.progress_step);

    match action {
        TaskAction::List { day, json } => {
            let day = day.unwrap_or_else(|| current_weekday(&Local::now()));
            let tasks = store.tasks_for(day);
            if json {
                print_json(&tasks)?;
            } else if tasks.is_empty() {
                println!("no tasks on {day}");
            } else {
                for (index, task) in tasks.iter().enumerate() {
                    let mark = if task.completed { "x" } else { " " };
                    println!(
                        "{index:>2}. [{mark}] {} - {} ({})",
                        task.subject, task.description, task.duration
                    );
                }
            }
        }
        TaskAction::Toggle { day, index } => {
            let completed = store.toggle_task(day, index, Utc::now())?;
            db.save_schedule(store.schedule())?;
            let state = if completed { "completed" } else { "reopened" };
            println!("task {index} on {day} {state}");
        }
    }
    Ok(())
}
