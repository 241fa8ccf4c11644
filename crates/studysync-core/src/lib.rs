//! # StudySync Core Library
//!
//! This library provides the core logic of StudySync, a weekly study planner.
//! All operations are available through the standalone CLI binary, which is
//! a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Profile**: the learner's availability, subjects, commitments and
//!   preferences, validated before generation
//! - **Generator**: a deterministic, single-shot pipeline turning a profile
//!   into a seven-day hourly schedule (only topic choice is random, through
//!   an injectable RNG)
//! - **Progress**: post-generation task completion and subject progress
//! - **Storage**: SQLite storage for the plan and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`StudyPlanner`]: schedule generation
//! - [`ProgressStore`]: task completion and progress bookkeeping
//! - [`PlanDb`]: profile and schedule persistence
//! - [`Config`]: application configuration management

pub mod error;
pub mod generator;
pub mod profile;
pub mod progress;
pub mod schedule;
pub mod storage;

pub use error::{ConfigError, CoreError, DatabaseError, GenerationError, ProgressError, ValidationError};
pub use generator::{generate_in_background, PlannerConfig, StudyPlanner};
pub use profile::{Commitment, LearningStyle, Profile, Subject};
pub use progress::{upcoming_deadlines, Deadline, DeadlineKind, ProgressStore, ProgressSummary};
pub use schedule::{
    Activity, BreakPattern, DaySchedule, ReviewSlot, Schedule, SubjectProgress, Task, TimeBlock, WEEK,
};
pub use storage::{Config, PlanDb};
