use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Days of history tracked by the calendar, counting back from today.
pub const DAYS_IN_LAST_SIX_MONTHS: usize = 183;
/// Number of complete week columns the calendar is built from.
pub const WEEKS_IN_LAST_SIX_MONTHS: usize = 26;
/// Age returned for commits older than the tracking window.
pub const OUT_OF_RANGE: u32 = 9999;

/// Number of day buckets, `0..=DAYS_IN_LAST_SIX_MONTHS`.
pub const BUCKET_COUNT: usize = DAYS_IN_LAST_SIX_MONTHS + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
}

/// Commit counts keyed by shifted days-ago, pre-zeroed for the whole window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBuckets {
    counts: [u32; BUCKET_COUNT],
}

impl DayBuckets {
    pub fn new() -> Self {
        Self {
            counts: [0; BUCKET_COUNT],
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count one commit at `day`. Days outside the window are ignored.
    pub fn increment(&mut self, day: usize) -> bool {
        match self.counts.get_mut(day) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, day: usize) -> Option<u32> {
        self.counts.get(day).copied()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `(day, count)` pairs in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

impl Default for DayBuckets {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts for one week, index 0 holding the lowest day key of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekColumn(pub Vec<u32>);

impl WeekColumn {
    pub fn get(&self, row: usize) -> Option<u32> {
        self.0.get(row).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarGrid {
    pub weeks: BTreeMap<usize, WeekColumn>,
}

impl CalendarGrid {
    pub fn week(&self, index: usize) -> Option<&WeekColumn> {
        self.weeks.get(&index)
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
