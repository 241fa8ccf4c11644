//! Study technique recommendations per learning style.

use crate::profile::LearningStyle;

/// The four fixed techniques for a learning style.
pub fn base_techniques(style: LearningStyle) -> [&'static str; 4] {
    match style {
        LearningStyle::Visual => [
            "Create mind maps for complex topics",
            "Use color-coded notes for different concepts",
            "Watch video tutorials for difficult subjects",
            "Draw diagrams to visualize processes",
        ],
        LearningStyle::Auditory => [
            "Record yourself explaining concepts and listen back",
            "Participate in study groups with discussions",
            "Use text-to-speech for reading materials",
            "Explain concepts out loud to yourself",
        ],
        LearningStyle::ReadingWriting => [
            "Create detailed written summaries",
            "Rewrite notes in your own words",
            "Use the Cornell note-taking system",
            "Create flashcards for key concepts",
        ],
        LearningStyle::Kinesthetic => [
            "Use physical movement while reviewing material",
            "Create physical models or representations",
            "Take short walks between study sessions",
            "Use hands-on experiments when possible",
        ],
    }
}

/// Fixed techniques followed by each preferred method not yet listed.
pub fn recommend(style: LearningStyle, preferred: &[String]) -> Vec<String> {
    let mut techniques: Vec<String> = base_techniques(style).iter().map(|t| t.to_string()).collect();
    for method in preferred {
        if !techniques.contains(method) {
            techniques.push(method.clone());
        }
    }
    techniques
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn styles_have_distinct_lists() {
        let styles = [
            LearningStyle::Visual,
            LearningStyle::Auditory,
            LearningStyle::ReadingWriting,
            LearningStyle::Kinesthetic,
        ];
        let all: HashSet<&str> = styles.iter().flat_map(|s| base_techniques(*s)).collect();
        assert_eq!(all.len(), 16);
    }

    #[test]
    fn preferred_methods_are_appended_once() {
        let preferred = vec![
            "Pomodoro sprints".to_string(),
            "Create flashcards for key concepts".to_string(),
            "Pomodoro sprints".to_string(),
            "Teach a friend".to_string(),
        ];
        let techniques = recommend(LearningStyle::ReadingWriting, &preferred);

        assert_eq!(techniques.len(), 6);
        assert_eq!(&techniques[..4], &base_techniques(LearningStyle::ReadingWriting));
        assert_eq!(techniques[4], "Pomodoro sprints");
        assert_eq!(techniques[5], "Teach a friend");
    }

    #[test]
    fn no_preferences_gives_the_base_list() {
        let techniques = recommend(LearningStyle::Kinesthetic, &[]);
        assert_eq!(techniques, base_techniques(LearningStyle::Kinesthetic));
    }
}
