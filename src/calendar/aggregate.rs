use super::age::{classify, day_offset};
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{CommitRecord, DayBuckets};
use crate::util::local_date;
use chrono::{Datelike, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};

/// Add every commit authored by `email` to `buckets`.
///
/// Emails are compared exactly. Commits that classify outside the tracking
/// window are dropped. Returns how many commits were counted.
pub fn tally<'a, I>(
    commits: I,
    email: &str,
    today: NaiveDate,
    offset: u32,
    buckets: &mut DayBuckets,
) -> usize
where
    I: IntoIterator<Item = &'a CommitRecord>,
{
    let mut counted = 0;
    for commit in commits {
        if commit.author_email != email {
            continue;
        }
        if let Some(day) = classify(local_date(&commit.timestamp), today, offset) {
            if buckets.increment(day) {
                counted += 1;
            }
        }
    }
    counted
}

/// Walk every repository in order and bucket the commits authored by `email`.
///
/// A repository that cannot be opened or walked aborts the whole run. A
/// repository without any commit is skipped.
pub fn aggregate_repositories<S: AsRef<str>>(
    repos: &[S],
    email: &str,
    today: NaiveDate,
) -> Result<DayBuckets> {
    let offset = day_offset(today.weekday());
    let mut buckets = DayBuckets::new();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    for path in repos {
        let path = path.as_ref();
        pb.set_message(format!("Reading {path}"));

        let repo = GitRepo::open(path)?;
        let commits = repo.collect_commits()?;
        pb.inc(1);
        let Some(commits) = commits else {
            tracing::debug!(event = "calendar.aggregate.unborn_head", path = %path);
            continue;
        };

        let counted = tally(&commits, email, today, offset, &mut buckets);
        tracing::debug!(
            event = "calendar.aggregate.repo_done",
            path = %repo.path().display(),
            commits = commits.len(),
            counted
        );
    }

    pb.finish_and_clear();
    Ok(buckets)
}
