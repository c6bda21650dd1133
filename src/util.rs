use chrono::{DateTime, Local, NaiveDate, Utc};

/// Calendar date of `timestamp` on the local clock.
pub fn local_date(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Three-letter month abbreviation, e.g. `Jan`.
pub fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string()
}
