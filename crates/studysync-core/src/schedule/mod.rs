//! Schedule types produced by the planner.
//!
//! A [`Schedule`] is the immutable result of one generation run. The only
//! fields meant to change afterwards are [`Task::completed`] and the
//! [`SubjectProgress`] entries, which the progress store updates.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// The seven days of a plan, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Subject label attached to review blocks.
pub const REVIEW_SUBJECT: &str = "All Subjects";

/// Duration label of every generated task.
pub const TASK_DURATION: &str = "1 hour";

/// What a one-hour block is used for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Activity {
    Free,
    Study,
    Commitment,
    Review,
    Break,
}

/// One hour on one weekday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeBlock {
    pub day: Weekday,
    pub start_hour: u8,
    pub end_hour: u8,
    pub activity: Activity,
    /// Subject for Study, commitment name for Commitment,
    /// [`REVIEW_SUBJECT`] for Review, `None` otherwise.
    pub subject: Option<String>,
}

impl TimeBlock {
    /// An unclaimed block starting at `hour`.
    pub fn free(day: Weekday, hour: u8) -> Self {
        Self {
            day,
            start_hour: hour,
            end_hour: (hour + 1) % 24,
            activity: Activity::Free,
            subject: None,
        }
    }

    /// A block occupied by a fixed commitment.
    pub fn commitment(day: Weekday, hour: u8, name: &str) -> Self {
        Self {
            activity: Activity::Commitment,
            subject: Some(name.to_string()),
            ..Self::free(day, hour)
        }
    }

    pub fn is_free(&self) -> bool {
        self.activity == Activity::Free
    }

    pub(crate) fn assign_study(&mut self, subject: &str) {
        self.activity = Activity::Study;
        self.subject = Some(subject.to_string());
    }

    pub(crate) fn assign_review(&mut self) {
        self.activity = Activity::Review;
        self.subject = Some(REVIEW_SUBJECT.to_string());
    }
}

/// A study task generated for a Study block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub subject: String,
    pub description: String,
    pub duration: String,
    pub completed: bool,
}

impl Task {
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
            duration: TASK_DURATION.to_string(),
            completed: false,
        }
    }
}

/// A cross-subject review session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewSlot {
    pub day: Weekday,
    pub start_hour: u8,
    pub subjects: Vec<String>,
}

/// A work/break rhythm preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakPattern {
    pub duration: String,
    pub repeat: u32,
    pub long_break: String,
}

/// Progress of one subject, owned by the progress store after generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectProgress {
    pub name: String,
    /// Percentage, 0 to 100.
    pub progress: u8,
    pub last_studied: Option<DateTime<Utc>>,
}

impl SubjectProgress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            progress: 0,
            last_studied: None,
        }
    }
}

/// Blocks and tasks of a single weekday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub blocks: Vec<TimeBlock>,
    pub tasks: Vec<Task>,
}

impl DaySchedule {
    /// Number of blocks carrying `activity`.
    pub fn count(&self, activity: Activity) -> usize {
        self.blocks.iter().filter(|b| b.activity == activity).count()
    }
}

/// A generated week plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub days: Vec<DaySchedule>,
    pub techniques: Vec<String>,
    pub break_patterns: Vec<BreakPattern>,
    pub review_slots: Vec<ReviewSlot>,
    pub progress: Vec<SubjectProgress>,
    pub contingency_plans: Vec<String>,
}

impl Schedule {
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: Weekday) -> Option<&mut DaySchedule> {
        self.days.iter_mut().find(|d| d.day == day)
    }

    /// All tasks of the week, Monday first.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.days.iter().flat_map(|d| d.tasks.iter())
    }

    /// Weekly Study hours assigned to `subject`.
    pub fn study_hours(&self, subject: &str) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.blocks.iter())
            .filter(|b| b.activity == Activity::Study && b.subject.as_deref() == Some(subject))
            .count()
    }
}
