//! Progress tracking over a generated schedule.
//!
//! The planner only initializes progress. Afterwards the dashboard marks
//! tasks done or undone through a [`ProgressStore`], which owns the schedule
//! and applies each read-modify-write through `&mut self`.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProgressError;
use crate::profile::Subject;
use crate::schedule::{Schedule, Task};

/// Percentage points gained or lost per toggled task.
pub const DEFAULT_PROGRESS_STEP: u8 = 10;

/// Owner of the mutable parts of a schedule.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    schedule: Schedule,
    step: u8,
}

impl ProgressStore {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            step: DEFAULT_PROGRESS_STEP,
        }
    }

    /// Use a custom progress step (clamped to 100).
    pub fn with_step(mut self, step: u8) -> Self {
        self.step = step.min(100);
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// Tasks of one weekday.
    pub fn tasks_for(&self, day: Weekday) -> &[Task] {
        self.schedule
            .day(day)
            .map(|d| d.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Flip a task's completion flag and adjust its subject's progress.
    ///
    /// Completing a task adds the step (capped at 100) and stamps
    /// `last_studied` with `now`; reopening it subtracts the step (floored at
    /// 0) and leaves `last_studied` alone. Returns the new completion state.
    pub fn toggle_task(
        &mut self,
        day: Weekday,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<bool, ProgressError> {
        let task = self
            .schedule
            .day_mut(day)
            .and_then(|d| d.tasks.get_mut(index))
            .ok_or(ProgressError::TaskNotFound { day, index })?;

        task.completed = !task.completed;
        let completed = task.completed;
        let subject = task.subject.clone();

        if let Some(entry) = self.schedule.progress.iter_mut().find(|p| p.name == subject) {
            if completed {
                entry.progress = entry.progress.saturating_add(self.step).min(100);
                entry.last_studied = Some(now);
            } else {
                entry.progress = entry.progress.saturating_sub(self.step);
            }
            debug!(subject = %subject, progress = entry.progress, completed, "task toggled");
        }

        Ok(completed)
    }

    /// Mean subject progress, rounded; 0 without subjects.
    pub fn overall_progress(&self) -> u8 {
        let subjects = &self.schedule.progress;
        if subjects.is_empty() {
            return 0;
        }
        let total: u32 = subjects.iter().map(|p| u32::from(p.progress)).sum();
        let count = subjects.len() as u32;
        ((2 * total + count) / (2 * count)) as u8
    }

    pub fn completed_tasks(&self) -> usize {
        self.schedule.tasks().filter(|t| t.completed).count()
    }

    pub fn total_tasks(&self) -> usize {
        self.schedule.tasks().count()
    }

    /// Snapshot of the counters shown on a dashboard.
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            overall_progress: self.overall_progress(),
            completed_tasks: self.completed_tasks(),
            total_tasks: self.total_tasks(),
        }
    }
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSummary {
    pub overall_progress: u8,
    pub completed_tasks: usize,
    pub total_tasks: usize,
}

/// What a deadline is for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeadlineKind {
    Assignment,
    Exam,
}

/// A dated milestone of a subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deadline {
    pub kind: DeadlineKind,
    pub subject: String,
    pub date: NaiveDate,
    /// Negative once the date has passed.
    pub days_until: i64,
}

/// Due and exam dates of all subjects, soonest first.
pub fn upcoming_deadlines(subjects: &[Subject], today: NaiveDate) -> Vec<Deadline> {
    let mut deadlines: Vec<Deadline> = subjects
        .iter()
        .flat_map(|subject| {
            [
                (DeadlineKind::Assignment, subject.due_date),
                (DeadlineKind::Exam, subject.exam_date),
            ]
            .into_iter()
            .filter_map(move |(kind, date)| {
                date.map(|date| Deadline {
                    kind,
                    subject: subject.name.clone(),
                    date,
                    days_until: (date - today).num_days(),
                })
            })
        })
        .collect();
    deadlines.sort_by_key(|d| d.date);
    deadlines
}

/// The weekday of `now` in its own time zone.
pub fn current_weekday<Tz: TimeZone>(now: &DateTime<Tz>) -> Weekday {
    now.weekday()
}
