//! Final assembly of a week plan and its static presets.

use crate::profile::Profile;
use crate::schedule::{BreakPattern, DaySchedule, ReviewSlot, Schedule, SubjectProgress};

/// The three work/break rhythms offered with every schedule.
pub fn break_patterns() -> Vec<BreakPattern> {
    vec![
        BreakPattern {
            duration: "25 minutes study, 5 minutes break".to_string(),
            repeat: 4,
            long_break: "15-30 minutes".to_string(),
        },
        BreakPattern {
            duration: "50 minutes study, 10 minutes break".to_string(),
            repeat: 2,
            long_break: "30 minutes".to_string(),
        },
        BreakPattern {
            duration: "90 minutes study, 20 minutes break".to_string(),
            repeat: 2,
            long_break: "60 minutes".to_string(),
        },
    ]
}

/// Advice for when the plan cannot be followed.
pub fn contingency_plans() -> Vec<String> {
    [
        "If you miss a study session, prioritize the most urgent topics in your next available slot",
        "If you're feeling overwhelmed, focus on review rather than new material",
        "If you're struggling with a topic, switch to a different learning method",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Zero progress for every subject, in profile order.
pub fn initial_progress(profile: &Profile) -> Vec<SubjectProgress> {
    profile
        .subjects
        .iter()
        .map(|s| SubjectProgress::new(s.name.clone()))
        .collect()
}

/// Combine the generated parts into a schedule.
pub fn assemble(
    profile: &Profile,
    days: Vec<DaySchedule>,
    review_slots: Vec<ReviewSlot>,
    techniques: Vec<String>,
) -> Schedule {
    Schedule {
        days,
        techniques,
        break_patterns: break_patterns(),
        review_slots,
        progress: initial_progress(profile),
        contingency_plans: contingency_plans(),
    }
}
