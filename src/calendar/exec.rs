use super::{aggregate_repositories, build_grid, day_offset, render_calendar, Palette};
use crate::cli::Settings;
use crate::repo_list::RepoList;
use crate::util::today;
use anyhow::Context;
use chrono::Datelike;

pub fn exec(settings: &Settings, email: &str) -> anyhow::Result<()> {
    println!("{email}");

    let list = RepoList::new(&settings.repo_list);
    let repos = list.load().context("Failed to read repository list")?;
    tracing::debug!(
        event = "calendar.exec.repositories_loaded",
        path = %settings.repo_list.display(),
        count = repos.len()
    );

    let today = today();
    let buckets = aggregate_repositories(&repos, email, today)
        .context("Failed to collect commits from repositories")?;

    let grid = build_grid(&buckets);
    let offset = day_offset(today.weekday());
    print!("{}", render_calendar(&grid, offset, today, &Palette::default()));

    Ok(())
}
