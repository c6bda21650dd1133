use crate::model::{DAYS_IN_LAST_SIX_MONTHS, OUT_OF_RANGE};
use chrono::{NaiveDate, Weekday};

/// Shift that lines the most recent calendar column up with today's weekday.
pub fn day_offset(weekday: Weekday) -> u32 {
    match weekday {
        Weekday::Sun => 7,
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
    }
}

/// Whole days from `commit_date` to `today`.
///
/// Future dates count as 0. Anything older than the tracking window returns
/// [`OUT_OF_RANGE`].
pub fn days_since(commit_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = today.signed_duration_since(commit_date).num_days();
    if days <= 0 {
        return 0;
    }
    if days > DAYS_IN_LAST_SIX_MONTHS as i64 {
        return OUT_OF_RANGE;
    }
    days as u32
}

/// Bucket index for a raw age shifted by `offset`, or `None` when it falls
/// outside the window.
pub fn bucket_index(raw_days: u32, offset: u32) -> Option<usize> {
    if raw_days == OUT_OF_RANGE {
        return None;
    }
    let day = (raw_days + offset) as usize;
    (day <= DAYS_IN_LAST_SIX_MONTHS).then_some(day)
}

pub fn classify(commit_date: NaiveDate, today: NaiveDate, offset: u32) -> Option<usize> {
    bucket_index(days_since(commit_date, today), offset)
}
