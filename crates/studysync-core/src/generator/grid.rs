//! Hourly day grid built from the wake/sleep window and commitments.

use chrono::Weekday;

use crate::error::GenerationError;
use crate::profile::Commitment;
use crate::schedule::TimeBlock;

/// Number of whole hours between waking up and going to bed.
///
/// A bedtime at or before the wake-up hour wraps past midnight. Equal hours
/// could mean either no time at all or a full day, so they are rejected.
pub fn available_hours(wake_up: u8, bed_time: u8) -> Result<u8, GenerationError> {
    if wake_up == bed_time {
        return Err(GenerationError::AmbiguousBoundary { hour: wake_up });
    }
    if bed_time > wake_up {
        Ok(bed_time - wake_up)
    } else {
        Ok((24 - wake_up) + bed_time)
    }
}

/// Build the block sequence for one weekday.
///
/// Produces exactly [`available_hours`] consecutive blocks starting at the
/// wake-up hour. A block is a Commitment when the first commitment scheduled
/// on `day` covering that hour exists, Free otherwise.
pub fn build_day(
    day: Weekday,
    wake_up: u8,
    bed_time: u8,
    commitments: &[Commitment],
) -> Result<Vec<TimeBlock>, GenerationError> {
    let hours = available_hours(wake_up, bed_time)?;
    let todays: Vec<&Commitment> = commitments.iter().filter(|c| c.occurs_on(day)).collect();

    let blocks = (0..hours)
        .map(|offset| {
            let hour = (wake_up + offset) % 24;
            match todays.iter().find(|c| c.covers(hour)) {
                Some(commitment) => TimeBlock::commitment(day, hour, &commitment.name),
                None => TimeBlock::free(day, hour),
            }
        })
        .collect();

    Ok(blocks)
}
