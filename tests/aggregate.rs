mod common;

use chrono::Datelike;
use commitcal::calendar::{aggregate_repositories, day_offset};
use commitcal::util::today;
use common::{commit_as, has_git, init_git_repo};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn lossy(path: &std::path::Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn buckets_author_commits_by_shifted_age() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    init_git_repo(&repo);
    commit_as(&repo, "a.txt", "a@x.com", 5);
    commit_as(&repo, "b.txt", "b@x.com", 1);
    commit_as(&repo, "a.txt", "a@x.com", 0);
    commit_as(&repo, "a.txt", "a@x.com", 0);
    commit_as(&repo, "a.txt", "a@x.com", 400);

    let today = today();
    let offset = day_offset(today.weekday()) as usize;
    let buckets = aggregate_repositories(&[lossy(&repo)], "a@x.com", today).unwrap();

    assert_eq!(buckets.len(), 184);
    assert_eq!(buckets.get(offset), Some(2));
    assert_eq!(buckets.get(offset + 1), Some(0));
    assert_eq!(buckets.get(offset + 5), Some(1));
    assert_eq!(buckets.total(), 3);
}

#[test]
fn empty_repository_contributes_nothing() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty");
    let busy = dir.path().join("busy");
    init_git_repo(&empty);
    init_git_repo(&busy);
    commit_as(&busy, "a.txt", "a@x.com", 3);

    let repos = [lossy(&empty), lossy(&busy)];
    let buckets = aggregate_repositories(&repos, "a@x.com", today()).unwrap();

    assert_eq!(buckets.total(), 1);
}

#[test]
fn unopenable_repository_aborts() {
    let dir = tempdir().unwrap();
    let missing = lossy(&dir.path().join("gone"));

    assert!(aggregate_repositories(&[missing], "a@x.com", today()).is_err());
}
