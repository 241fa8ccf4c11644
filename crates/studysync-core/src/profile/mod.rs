//! Study profile types: availability, subjects, commitments and preferences.
//!
//! A [`Profile`] is the single immutable input of schedule generation. It is
//! normally filled in by a form (or a TOML/JSON file through the CLI) and
//! checked with [`Profile::validate`] before the planner sees it.

mod validation;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// How the learner prefers to take in new material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum LearningStyle {
    #[default]
    #[serde(rename = "visual")]
    Visual,
    #[serde(rename = "auditory")]
    Auditory,
    #[serde(rename = "reading/writing")]
    ReadingWriting,
    #[serde(rename = "kinesthetic")]
    Kinesthetic,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::ReadingWriting => "reading/writing",
            LearningStyle::Kinesthetic => "kinesthetic",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "reading/writing" | "reading-writing" | "reading" => Ok(LearningStyle::ReadingWriting),
            "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            _ => Err(ValidationError::UnknownLearningStyle(s.to_string())),
        }
    }
}

/// A subject the learner is studying.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub topics: Vec<String>,
    /// 1 (easy) to 5 (hard)
    pub difficulty: u8,
    /// 1 (beginner) to 5 (confident)
    pub proficiency: u8,
    /// 1 (relaxed) to 5 (pressing)
    pub urgency: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
}

impl Subject {
    /// Create a subject with mid-scale ratings and no dates.
    pub fn new<I, S>(name: impl Into<String>, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            topics: topics.into_iter().map(Into::into).collect(),
            difficulty: 3,
            proficiency: 3,
            urgency: 3,
            due_date: None,
            exam_date: None,
        }
    }

    /// Sets difficulty, proficiency and urgency.
    pub fn with_ratings(mut self, difficulty: u8, proficiency: u8, urgency: u8) -> Self {
        self.difficulty = difficulty;
        self.proficiency = proficiency;
        self.urgency = urgency;
        self
    }

    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn with_exam_date(mut self, date: NaiveDate) -> Self {
        self.exam_date = Some(date);
        self
    }
}

/// A fixed weekly commitment such as a class or a shift.
///
/// Hours are whole clock hours on a single day, covering `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment {
    pub name: String,
    pub days: Vec<Weekday>,
    #[serde(with = "clock_hour")]
    pub start: u8,
    #[serde(with = "clock_hour")]
    pub end: u8,
}

impl Commitment {
    pub fn new(name: impl Into<String>, days: &[Weekday], start: u8, end: u8) -> Self {
        Self {
            name: name.into(),
            days: days.to_vec(),
            start,
            end,
        }
    }

    /// Whether this commitment takes place on `day`.
    pub fn occurs_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether the clock hour starting at `hour` falls inside the commitment.
    pub fn covers(&self, hour: u8) -> bool {
        self.start <= hour && hour < self.end
    }
}

/// Everything the planner needs to know about the learner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    #[serde(with = "clock_hour")]
    pub wake_up: u8,
    #[serde(with = "clock_hour")]
    pub bed_time: u8,
    pub study_hours_per_day: u32,
    #[serde(default)]
    pub learning_style: LearningStyle,
    #[serde(default)]
    pub preferred_methods: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub commitments: Vec<Commitment>,
}

impl Profile {
    /// Create a profile with no subjects or commitments.
    pub fn new(wake_up: u8, bed_time: u8, study_hours_per_day: u32) -> Self {
        Self {
            wake_up,
            bed_time,
            study_hours_per_day,
            learning_style: LearningStyle::default(),
            preferred_methods: Vec::new(),
            subjects: Vec::new(),
            commitments: Vec::new(),
        }
    }

    pub fn with_learning_style(mut self, style: LearningStyle) -> Self {
        self.learning_style = style;
        self
    }

    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitments.push(commitment);
        self
    }

    pub fn with_preferred_method(mut self, method: impl Into<String>) -> Self {
        self.preferred_methods.push(method.into());
        self
    }

    /// Sum of all subjects' difficulty ratings.
    pub fn total_difficulty(&self) -> u32 {
        self.subjects.iter().map(|s| u32::from(s.difficulty)).sum()
    }

    /// Subject names in profile order.
    pub fn subject_names(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.name.clone()).collect()
    }

    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// A small but complete profile used by `profile init`.
    pub fn sample() -> Self {
        use Weekday::*;

        Profile::new(7, 23, 4)
            .with_learning_style(LearningStyle::Visual)
            .with_preferred_method("Practice problems")
            .with_subject(
                Subject::new("Mathematics", ["Linear algebra", "Calculus", "Probability"])
                    .with_ratings(5, 2, 4),
            )
            .with_subject(
                Subject::new("History", ["Industrial revolution", "Cold war"])
                    .with_ratings(3, 3, 2),
            )
            .with_commitment(Commitment::new("Lectures", &[Mon, Tue, Wed, Thu, Fri], 9, 12))
            .with_commitment(Commitment::new("Part-time job", &[Sat], 14, 18))
    }
}

/// Format an hour as a clock string, e.g. `7` -> `"07:00"`.
pub fn format_hour(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// Parse a clock string (`"HH"` or `"HH:MM"`) into its hour.
///
/// Minutes are checked but otherwise ignored; the planner works on whole hours.
pub fn parse_clock_hour(value: &str) -> Result<u8, ValidationError> {
    let invalid = || ValidationError::InvalidHour {
        field: "clock".to_string(),
        value: value.to_string(),
    };

    let mut parts = value.trim().splitn(2, ':');
    let hour: u8 = parts
        .next()
        .and_then(|h| h.trim().parse().ok())
        .ok_or_else(invalid)?;
    if let Some(minutes) = parts.next() {
        let minutes: u8 = minutes.trim().parse().map_err(|_| invalid())?;
        if minutes > 59 {
            return Err(invalid());
        }
    }
    if hour > 23 {
        return Err(invalid());
    }
    Ok(hour)
}

/// Serde adapter writing hours as `"HH:00"` and reading `"HH:MM"` or integers.
pub mod clock_hour {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hour: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hour(*hour))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Hour(u8),
            Clock(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Hour(hour) => Ok(hour),
            Raw::Clock(text) => super::parse_clock_hour(&text).map_err(de::Error::custom),
        }
    }
}
