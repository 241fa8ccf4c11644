//! Profile validation performed before generation.

use std::collections::HashSet;

use super::{Profile, Subject};
use crate::error::ValidationError;

const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

impl Profile {
    /// Check the invariants the planner relies on.
    ///
    /// Returns the first problem found. A wake-up hour equal to the bedtime
    /// passes here; the planner rejects it separately as an ambiguous window.
    /// A profile without subjects is valid and yields a plan without study
    /// blocks; see [`Profile::require_subjects`] for callers that need some.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_hour("wake_up", self.wake_up)?;
        check_hour("bed_time", self.bed_time)?;
        if self.study_hours_per_day == 0 || self.study_hours_per_day > 24 {
            return Err(ValidationError::InvalidHour {
                field: "study_hours_per_day".to_string(),
                value: self.study_hours_per_day.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (index, subject) in self.subjects.iter().enumerate() {
            validate_subject(index, subject)?;
            if !seen.insert(subject.name.as_str()) {
                return Err(ValidationError::DuplicateSubject(subject.name.clone()));
            }
        }

        for (index, commitment) in self.commitments.iter().enumerate() {
            if commitment.name.trim().is_empty() {
                return Err(ValidationError::MissingField(format!(
                    "commitments[{index}].name"
                )));
            }
            if commitment.days.is_empty() {
                return Err(ValidationError::EmptyCollection(format!(
                    "days of commitment '{}'",
                    commitment.name
                )));
            }
            check_hour("commitment start", commitment.start)?;
            check_hour("commitment end", commitment.end)?;
            if commitment.start >= commitment.end {
                return Err(ValidationError::InvalidTimeRange {
                    name: commitment.name.clone(),
                    start: commitment.start,
                    end: commitment.end,
                });
            }
        }

        Ok(())
    }

    /// Full validation plus at least one subject.
    pub fn require_subjects(&self) -> Result<(), ValidationError> {
        self.validate()?;
        if self.subjects.is_empty() {
            return Err(ValidationError::EmptyCollection("subjects".to_string()));
        }
        Ok(())
    }
}

fn check_hour(field: &str, hour: u8) -> Result<(), ValidationError> {
    if hour > 23 {
        return Err(ValidationError::InvalidHour {
            field: field.to_string(),
            value: hour.to_string(),
        });
    }
    Ok(())
}

fn validate_subject(index: usize, subject: &Subject) -> Result<(), ValidationError> {
    if subject.name.trim().is_empty() {
        return Err(ValidationError::MissingField(format!("subjects[{index}].name")));
    }
    if subject.topics.is_empty() {
        return Err(ValidationError::EmptyCollection(format!(
            "topics of subject '{}'",
            subject.name
        )));
    }
    for (field, value) in [
        ("difficulty", subject.difficulty),
        ("proficiency", subject.proficiency),
        ("urgency", subject.urgency),
    ] {
        if !RATING_RANGE.contains(&value) {
            return Err(ValidationError::RatingOutOfRange {
                subject: subject.name.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}
