//! Weekly study plan generation.
//!
//! The pipeline runs day by day over the fixed Monday-to-Sunday week:
//! - [`grid`] partitions the wake/sleep window into hourly blocks and marks
//!   commitments
//! - [`allocator`] hands the remaining Free blocks to subjects by priority
//!   and reserves one leftover block for review
//! - [`tasks`] writes one task per new Study block
//!
//! [`techniques`] runs once per profile, and [`assembler`] merges everything
//! with the static presets. Generation either returns a complete
//! [`Schedule`] or an error, never a partial plan.

pub mod allocator;
pub mod assembler;
pub mod grid;
pub mod tasks;
pub mod techniques;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CoreError, Result};
use crate::profile::Profile;
use crate::schedule::{DaySchedule, Schedule, WEEK};

use allocator::AllocationPlan;

/// Planner configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Seed for topic selection. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

/// Turns a profile into a week schedule.
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    config: PlannerConfig,
}

impl StudyPlanner {
    /// Create a planner with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Create a planner whose output is reproducible for `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(PlannerConfig { seed: Some(seed) })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate a schedule using the configured random source.
    ///
    /// # Errors
    /// Returns [`CoreError::Validation`] for a malformed profile and
    /// [`CoreError::Generation`] when the wake-up hour equals the bedtime.
    pub fn generate(&self, profile: &Profile) -> Result<Schedule> {
        match self.config.seed {
            Some(seed) => self.generate_with_rng(profile, &mut Pcg64::seed_from_u64(seed)),
            None => self.generate_with_rng(profile, &mut rand::thread_rng()),
        }
    }

    /// Generate a schedule drawing task topics from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, profile: &Profile, rng: &mut R) -> Result<Schedule> {
        profile.validate()?;

        let plan = AllocationPlan::new(profile);
        let mut days = Vec::with_capacity(WEEK.len());
        let mut review_slots = Vec::new();

        for day in WEEK {
            let mut blocks = grid::build_day(day, profile.wake_up, profile.bed_time, &profile.commitments)?;
            let allocation = allocator::allocate_day(day, &mut blocks, &plan);
            let tasks = tasks::synthesize_tasks(&blocks, &allocation.claimed, &profile.subjects, rng)?;

            review_slots.extend(allocation.review);
            days.push(DaySchedule { day, blocks, tasks });
        }

        let techniques = techniques::recommend(profile.learning_style, &profile.preferred_methods);
        let schedule = assembler::assemble(profile, days, review_slots, techniques);

        info!(
            subjects = profile.subjects.len(),
            tasks = schedule.tasks().count(),
            review_slots = schedule.review_slots.len(),
            "generated weekly schedule"
        );
        Ok(schedule)
    }
}

/// Run generation on the blocking thread pool.
///
/// Generation is pure and bounded, so this only keeps an async caller
/// responsive; it needs no cancellation or retries.
pub async fn generate_in_background(profile: Profile, config: PlannerConfig) -> Result<Schedule> {
    tokio::task::spawn_blocking(move || StudyPlanner::with_config(config).generate(&profile))
        .await
        .map_err(|e| CoreError::Custom(format!("schedule generation task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenerationError, ValidationError};
    use crate::profile::{Commitment, LearningStyle, Subject};
    use crate::schedule::{Activity, REVIEW_SUBJECT};
    use chrono::Weekday;

    fn two_subject_profile() -> Profile {
        Profile::new(7, 23, 4)
            .with_learning_style(LearningStyle::Auditory)
            .with_subject(Subject::new("A", ["a1", "a2"]).with_ratings(3, 3, 3))
            .with_subject(Subject::new("B", ["b1", "b2"]).with_ratings(5, 2, 4))
    }

    #[test]
    fn sixteen_hour_day_with_two_subjects() {
        let schedule = StudyPlanner::with_seed(3).generate(&two_subject_profile()).unwrap();

        assert_eq!(schedule.days.len(), 7);
        for day in &schedule.days {
            assert_eq!(day.blocks.len(), 16);
            let owners: Vec<Option<&str>> = day.blocks[..5].iter().map(|b| b.subject.as_deref()).collect();
            assert_eq!(
                owners,
                vec![Some("B"), Some("B"), Some("B"), Some("A"), Some("A")]
            );
            assert_eq!(day.blocks[5].activity, Activity::Review);
            assert_eq!(day.blocks[5].subject.as_deref(), Some(REVIEW_SUBJECT));
            assert_eq!(day.count(Activity::Free), 10);
            assert_eq!(day.tasks.len(), 5);
        }
        assert_eq!(schedule.review_slots.len(), 7);
        assert_eq!(schedule.study_hours("B"), 21);
        assert_eq!(schedule.study_hours("A"), 14);
    }

    #[test]
    fn commitments_block_study_time() {
        let profile = two_subject_profile()
            .with_commitment(Commitment::new("Lecture", &[Weekday::Mon], 7, 9));
        let schedule = StudyPlanner::with_seed(3).generate(&profile).unwrap();

        let monday = schedule.day(Weekday::Mon).unwrap();
        assert_eq!(monday.count(Activity::Commitment), 2);
        assert_eq!(monday.blocks[2].subject.as_deref(), Some("B"));
        assert_eq!(monday.blocks[2].start_hour, 9);
    }

    #[test]
    fn same_seed_same_schedule() {
        let profile = two_subject_profile();
        let first = StudyPlanner::with_seed(99).generate(&profile).unwrap();
        let second = StudyPlanner::with_seed(99).generate(&profile).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn equal_wake_and_bed_time_aborts() {
        let mut profile = two_subject_profile();
        profile.bed_time = profile.wake_up;
        let err = StudyPlanner::new().generate(&profile).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Generation(GenerationError::AmbiguousBoundary { hour: 7 })
        ));
    }

    #[test]
    fn invalid_profile_is_rejected_before_generation() {
        let profile = two_subject_profile().with_subject(Subject::new("Art", Vec::<String>::new()));
        let err = StudyPlanner::new().generate(&profile).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyCollection(ref msg)) if msg.contains("Art")
        ));
    }

    #[test]
    fn profile_without_subjects_still_gets_a_week() {
        let profile = Profile::new(7, 23, 4).with_commitment(Commitment::new("Job", &[Weekday::Mon], 9, 12));
        let schedule = StudyPlanner::with_seed(1).generate(&profile).unwrap();

        assert_eq!(schedule.days.len(), 7);
        assert_eq!(schedule.tasks().count(), 0);
        assert!(schedule.progress.is_empty());
        for day in &schedule.days {
            assert_eq!(day.count(Activity::Study), 0);
            assert_eq!(day.count(Activity::Review), 1);
        }
        assert_eq!(schedule.day(Weekday::Mon).unwrap().count(Activity::Commitment), 3);
        assert_eq!(schedule.review_slots.len(), 7);
        assert!(schedule.review_slots.iter().all(|slot| slot.subjects.is_empty()));
        // the first free hour of each day is the review block
        assert_eq!(schedule.review_slots[0].start_hour, 7);
    }

    #[test]
    fn techniques_include_preferred_methods() {
        let profile = two_subject_profile().with_preferred_method("Mnemonics");
        let schedule = StudyPlanner::with_seed(1).generate(&profile).unwrap();
        assert_eq!(schedule.techniques.len(), 5);
        assert_eq!(schedule.techniques[4], "Mnemonics");
        assert_eq!(schedule.break_patterns.len(), 3);
        assert_eq!(schedule.contingency_plans.len(), 3);
        assert_eq!(schedule.progress.len(), 2);
    }

    #[tokio::test]
    async fn background_generation_matches_inline() {
        let profile = two_subject_profile();
        let config = PlannerConfig { seed: Some(11) };

        let background = generate_in_background(profile.clone(), config.clone()).await.unwrap();
        let inline = StudyPlanner::with_config(config).generate(&profile).unwrap();
        assert_eq!(background, inline);
    }
}
