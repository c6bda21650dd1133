use crate::model::{CalendarGrid, DayBuckets, WeekColumn};

/// Fold the flat day buckets into week columns of seven days.
///
/// A column is only stored once its seventh day is reached, so a trailing
/// partial week never appears in the grid.
pub fn build_grid(buckets: &DayBuckets) -> CalendarGrid {
    let mut grid = CalendarGrid::default();
    let mut column = WeekColumn::default();

    for (day, count) in buckets.iter() {
        let week = day / 7;
        let day_of_week = day % 7;
        if day_of_week == 0 {
            column = WeekColumn::default();
        }
        column.0.push(count);
        if day_of_week == 6 {
            grid.weeks.insert(week, column.clone());
        }
    }

    grid
}
