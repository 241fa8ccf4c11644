//! Priority ranking and per-day study block allocation.
//!
//! Subjects are ranked once per profile. Each day then hands out its Free
//! blocks in chronological order, subject by subject in ranking order, until
//! either every subject has its daily target or the day runs out of Free
//! blocks. Unclaimed hours never carry over to another day.

use std::cmp::Ordering;

use chrono::Weekday;
use tracing::{debug, warn};

use crate::profile::{Profile, Subject};
use crate::schedule::{ReviewSlot, TimeBlock};

/// difficulty × urgency ÷ proficiency
pub fn priority_score(subject: &Subject) -> f64 {
    f64::from(subject.difficulty) * f64::from(subject.urgency) / f64::from(subject.proficiency)
}

/// Orders subjects by descending priority score.
///
/// Compares the scores as exact fractions by cross-multiplying.
pub fn compare_priority(a: &Subject, b: &Subject) -> Ordering {
    let weight = |s: &Subject, other: &Subject| {
        u32::from(s.difficulty) * u32::from(s.urgency) * u32::from(other.proficiency)
    };
    weight(b, a).cmp(&weight(a, b))
}

/// Whole study hours per day for a subject.
///
/// The weekly share is `difficulty / total_difficulty × hours_per_day × 7`;
/// the daily target is that share divided by seven, rounded half up. The
/// sevens cancel, so the result is computed exactly on integers.
pub fn daily_target(difficulty: u8, total_difficulty: u32, study_hours_per_day: u32) -> u32 {
    if total_difficulty == 0 {
        return 0;
    }
    let numerator = u64::from(difficulty) * u64::from(study_hours_per_day);
    let total = u64::from(total_difficulty);
    ((2 * numerator + total) / (2 * total)) as u32
}

/// A subject together with its daily block target.
#[derive(Debug, Clone, Copy)]
pub struct RankedSubject<'a> {
    pub subject: &'a Subject,
    pub daily_target: u32,
}

/// Ranked subjects with their targets, shared by all seven days.
#[derive(Debug, Clone)]
pub struct AllocationPlan<'a> {
    pub ranked: Vec<RankedSubject<'a>>,
    pub subject_names: Vec<String>,
}

impl<'a> AllocationPlan<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        let total = profile.total_difficulty();
        if total == 0 {
            warn!("profile has no weighted subjects; skipping study allocation");
            return Self {
                ranked: Vec::new(),
                subject_names: profile.subject_names(),
            };
        }

        let mut subjects: Vec<&Subject> = profile.subjects.iter().collect();
        // sort_by is stable, so equal scores keep profile order
        subjects.sort_by(|a, b| compare_priority(a, b));

        let ranked = subjects
            .into_iter()
            .map(|subject| {
                let entry = RankedSubject {
                    subject,
                    daily_target: daily_target(subject.difficulty, total, profile.study_hours_per_day),
                };
                debug!(
                    subject = %subject.name,
                    score = priority_score(subject),
                    daily_target = entry.daily_target,
                    "ranked subject"
                );
                entry
            })
            .collect();

        Self {
            ranked,
            subject_names: profile.subject_names(),
        }
    }
}

/// Outcome of allocating one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayAllocation {
    /// Indices of blocks turned into Study, in claim order.
    pub claimed: Vec<usize>,
    pub review: Option<ReviewSlot>,
}

/// Claim Free blocks of one day for study, then reserve one for review.
pub fn allocate_day(day: Weekday, blocks: &mut [TimeBlock], plan: &AllocationPlan<'_>) -> DayAllocation {
    let free: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.is_free())
        .map(|(index, _)| index)
        .collect();
    let free_count = free.len();
    let mut pool = free.into_iter();

    let mut claimed = Vec::new();
    for entry in &plan.ranked {
        for index in pool.by_ref().take(entry.daily_target as usize) {
            blocks[index].assign_study(&entry.subject.name);
            claimed.push(index);
        }
    }

    let review = pool.next().map(|index| {
        blocks[index].assign_review();
        ReviewSlot {
            day,
            start_hour: blocks[index].start_hour,
            subjects: plan.subject_names.clone(),
        }
    });

    debug!(
        day = %day,
        free = free_count,
        study = claimed.len(),
        review = review.is_some(),
        "allocated day"
    );

    DayAllocation { claimed, review }
}
