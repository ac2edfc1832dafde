use crate::dates::{day_key, today};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Upper bound on the backward walk so a malformed set can never loop.
const MAX_STREAK_DAYS: u32 = 365;

pub fn current_streak(completed: &BTreeSet<String>) -> u32 {
    current_streak_at(today(), completed)
}

/// Consecutive-day streak ending at `today`, with a grace day: a streak that
/// ran through yesterday is still alive while today is pending. Counting
/// starts at today when today is done, at yesterday when only yesterday is,
/// and walks backward until the first gap.
pub fn current_streak_at(today: NaiveDate, completed: &BTreeSet<String>) -> u32 {
    let mut cursor = today;
    if !completed.contains(&day_key(cursor)) {
        cursor -= Duration::days(1);
        if !completed.contains(&day_key(cursor)) {
            return 0;
        }
    }

    let mut streak = 0;
    for _ in 0..MAX_STREAK_DAYS {
        if !completed.contains(&day_key(cursor)) {
            break;
        }
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}
