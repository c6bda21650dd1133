pub mod calendar;
pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod repo_list;
pub mod scan;
pub mod util;
