pub mod age;
pub mod aggregate;
pub mod exec;
pub mod grid;
pub mod render;

pub use age::{bucket_index, classify, day_offset, days_since};
pub use aggregate::{aggregate_repositories, tally};
pub use exec::exec;
pub use grid::build_grid;
pub use render::{
    cell_text, format_cell, render_calendar, render_cells, render_months, today_cell,
    Palette,
};
