//! Integration tests for weekly schedule generation.

use chrono::Weekday;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use studysync_core::generator::grid::available_hours;
use studysync_core::generator::techniques::base_techniques;
use studysync_core::{
    Activity, Commitment, CoreError, GenerationError, LearningStyle, Profile, StudyPlanner, Subject,
    WEEK,
};

fn scenario_profile() -> Profile {
    Profile::new(7, 23, 4)
        .with_learning_style(LearningStyle::Visual)
        .with_subject(
            Subject::new("Statistics", ["Regression", "Sampling", "Bayes"]).with_ratings(3, 3, 2),
        )
        .with_subject(
            Subject::new("Organic Chemistry", ["Alkenes", "Chirality"]).with_ratings(5, 1, 5),
        )
        .with_commitment(Commitment::new(
            "Lab",
            &[Weekday::Tue, Weekday::Thu],
            13,
            16,
        ))
}

#[test]
fn test_full_week_scenario() {
    let profile = scenario_profile();
    let schedule = StudyPlanner::with_seed(2024).generate(&profile).unwrap();

    assert_eq!(schedule.days.len(), 7);
    let days: Vec<Weekday> = schedule.days.iter().map(|d| d.day).collect();
    assert_eq!(days, WEEK.to_vec());

    for day in &schedule.days {
        assert_eq!(day.blocks.len(), 16);
        assert_eq!(day.count(Activity::Study), 5);
        assert_eq!(day.count(Activity::Review), 1);

        // Chemistry outranks Statistics and claims its three hours first
        let chemistry: Vec<u8> = day
            .blocks
            .iter()
            .filter(|b| b.subject.as_deref() == Some("Organic Chemistry"))
            .map(|b| b.start_hour)
            .collect();
        let statistics: Vec<u8> = day
            .blocks
            .iter()
            .filter(|b| b.subject.as_deref() == Some("Statistics"))
            .map(|b| b.start_hour)
            .collect();
        assert_eq!(chemistry, vec![7, 8, 9]);
        assert_eq!(statistics, vec![10, 11]);

        let tasks: Vec<&str> = day.tasks.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(
            tasks,
            vec![
                "Organic Chemistry",
                "Organic Chemistry",
                "Organic Chemistry",
                "Statistics",
                "Statistics"
            ]
        );
    }

    let tuesday = schedule.day(Weekday::Tue).unwrap();
    assert_eq!(tuesday.count(Activity::Commitment), 3);
    assert_eq!(tuesday.count(Activity::Free), 7);
    let monday = schedule.day(Weekday::Mon).unwrap();
    assert_eq!(monday.count(Activity::Free), 10);

    assert_eq!(schedule.review_slots.len(), 7);
    for slot in &schedule.review_slots {
        assert_eq!(slot.start_hour, 12);
        assert_eq!(slot.subjects, vec!["Statistics", "Organic Chemistry"]);
    }

    assert_eq!(schedule.techniques, base_techniques(LearningStyle::Visual));
}

#[test]
fn test_night_owl_schedule_wraps_past_midnight() {
    let profile = Profile::new(14, 3, 2)
        .with_subject(Subject::new("Astronomy", ["Stars"]).with_ratings(2, 2, 2));
    let schedule = StudyPlanner::with_seed(1).generate(&profile).unwrap();

    assert_eq!(available_hours(14, 3), Ok(13));
    for day in &schedule.days {
        assert_eq!(day.blocks.len(), 13);
        assert_eq!(day.blocks.first().unwrap().start_hour, 14);
        assert_eq!(day.blocks.last().unwrap().start_hour, 2);
        assert_eq!(day.blocks.last().unwrap().end_hour, 3);
    }
}

#[test]
fn test_overbooked_day_starves_lower_priority_subjects() {
    let profile = Profile::new(18, 21, 6)
        .with_subject(Subject::new("Low", ["l"]).with_ratings(3, 5, 1))
        .with_subject(Subject::new("High", ["h"]).with_ratings(3, 1, 5));
    let schedule = StudyPlanner::with_seed(1).generate(&profile).unwrap();

    for day in &schedule.days {
        assert!(day.blocks.iter().all(|b| b.subject.as_deref() == Some("High")));
        assert!(day.tasks.iter().all(|t| t.subject == "High"));
    }
    assert!(schedule.review_slots.is_empty());
    assert_eq!(schedule.study_hours("Low"), 0);
}

#[test]
fn test_ambiguous_boundary_returns_no_schedule() {
    let mut profile = scenario_profile();
    profile.wake_up = 23;
    let result = StudyPlanner::with_seed(1).generate(&profile);
    assert!(matches!(
        result,
        Err(CoreError::Generation(GenerationError::AmbiguousBoundary { hour: 23 }))
    ));
}

#[test]
fn test_injected_rng_drives_topics() {
    let profile = scenario_profile();
    let planner = StudyPlanner::new();

    let a = planner
        .generate_with_rng(&profile, &mut Pcg64::seed_from_u64(77))
        .unwrap();
    let b = planner
        .generate_with_rng(&profile, &mut Pcg64::seed_from_u64(77))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a, StudyPlanner::with_seed(77).generate(&profile).unwrap());
}

#[test]
fn test_schedule_json_roundtrip_is_lossless() {
    let schedule = StudyPlanner::with_seed(5).generate(&scenario_profile()).unwrap();
    let json = serde_json::to_string(&schedule).unwrap();
    let decoded: studysync_core::Schedule = serde_json::from_str(&json).unwrap();
    assert_eq!(schedule, decoded);
}

fn arb_subject(index: usize) -> impl Strategy<Value = Subject> {
    (1u8..=5, 1u8..=5, 1u8..=5, 1usize..4).prop_map(move |(d, p, u, topics)| {
        Subject::new(
            format!("Subject {index}"),
            (0..topics).map(|t| format!("Topic {t}")),
        )
        .with_ratings(d, p, u)
    })
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    let subjects = (0usize..5).prop_flat_map(|n| {
        (0..n).map(arb_subject).collect::<Vec<_>>()
    });
    let commitment = (0u8..23, 1u8..6, 0usize..7).prop_map(|(start, len, day)| {
        Commitment::new("Busy", &[WEEK[day]], start, (start + len).min(23).max(start + 1))
    });
    (
        0u8..24,
        0u8..24,
        1u32..12,
        subjects,
        proptest::collection::vec(commitment, 0..3),
    )
        .prop_filter("wake must differ from bed", |(wake, bed, ..)| wake != bed)
        .prop_map(|(wake, bed, hours, subjects, commitments)| {
            let mut profile = Profile::new(wake, bed, hours);
            profile.subjects = subjects;
            profile.commitments = commitments;
            profile
        })
}

proptest! {
    #[test]
    fn prop_week_invariants(profile in arb_profile(), seed in any::<u64>()) {
        let schedule = StudyPlanner::with_seed(seed).generate(&profile).unwrap();
        let hours = available_hours(profile.wake_up, profile.bed_time).unwrap() as usize;

        for day in &schedule.days {
            // contiguous partition of the wake/sleep window
            prop_assert_eq!(day.blocks.len(), hours);
            prop_assert_eq!(day.blocks[0].start_hour, profile.wake_up);
            for pair in day.blocks.windows(2) {
                prop_assert_eq!(pair[0].end_hour, pair[1].start_hour);
            }

            // commitments are never overwritten
            for block in &day.blocks {
                let committed = profile
                    .commitments
                    .iter()
                    .any(|c| c.occurs_on(day.day) && c.covers(block.start_hour));
                prop_assert_eq!(committed, block.activity == Activity::Commitment);
            }

            // study never exceeds the free pool, one task per study block
            let study = day.count(Activity::Study);
            let free_before = hours - day.count(Activity::Commitment);
            prop_assert!(study <= free_before);
            prop_assert_eq!(day.tasks.len(), study);

            // a review block appears exactly when free time was left over
            let review = day.count(Activity::Review);
            prop_assert!(review <= 1);
            prop_assert_eq!(review == 1, study < free_before);
            if review == 1 {
                prop_assert_eq!(day.count(Activity::Free), free_before - study - 1);
            }
        }
        prop_assert_eq!(
            schedule.review_slots.len(),
            schedule.days.iter().map(|d| d.count(Activity::Review)).sum::<usize>()
        );
    }

    #[test]
    fn prop_priority_order_is_respected(profile in arb_profile()) {
        let schedule = StudyPlanner::with_seed(0).generate(&profile).unwrap();
        let mut ranked: Vec<&Subject> = profile.subjects.iter().collect();
        ranked.sort_by(|a, b| studysync_core::generator::allocator::compare_priority(a, b));
        let rank = |name: &str| ranked.iter().position(|s| s.name == name).unwrap();

        for day in &schedule.days {
            let claims: Vec<usize> = day.tasks.iter().map(|t| rank(&t.subject)).collect();
            prop_assert!(claims.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
