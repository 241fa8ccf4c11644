//! Task records for newly assigned study blocks.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerationError;
use crate::profile::Subject;
use crate::schedule::{Task, TimeBlock};

/// Emit one task per claimed Study block, in claim order.
///
/// The topic of each task is drawn from the subject's topics with `rng`;
/// this is the only random step of generation.
pub fn synthesize_tasks<R: Rng + ?Sized>(
    blocks: &[TimeBlock],
    claimed: &[usize],
    subjects: &[Subject],
    rng: &mut R,
) -> Result<Vec<Task>, GenerationError> {
    let by_name: HashMap<&str, &Subject> = subjects.iter().map(|s| (s.name.as_str(), s)).collect();

    claimed
        .iter()
        .filter_map(|&index| blocks.get(index)?.subject.as_deref())
        .map(|name| {
            let topic = by_name
                .get(name)
                .and_then(|subject| subject.topics.choose(rng))
                .ok_or_else(|| GenerationError::EmptyTopics {
                    subject: name.to_string(),
                })?;
            Ok(Task::new(name, format!("Study {topic}")))
        })
        .collect()
}
