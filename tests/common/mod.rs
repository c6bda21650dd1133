#![allow(dead_code)]

use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

pub fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    // init and basic identity
    assert!(Command::new("git")
        .args(["init", "-q"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.email", "you@example.com"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.name", "Your Name"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "commit.gpgsign", "false"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

/// Noon on the local calendar day `days_ago` days before today, as a git
/// date string.
pub fn days_ago_date(days_ago: i64) -> String {
    let date: NaiveDate = Local::now().date_naive() - Duration::days(days_ago);
    let noon = date.and_hms_opt(12, 0, 0).unwrap();
    let local = Local.from_local_datetime(&noon).earliest().unwrap();
    format!("@{} +0000", local.with_timezone(&Utc).timestamp())
}

/// Commit a change to `name` authored by `email` on the given day.
pub fn commit_as(dir: &Path, name: &str, email: &str, days_ago: i64) {
    let path = dir.join(name);
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .unwrap();
    writeln!(f, "{email} {days_ago}").unwrap();
    f.sync_all().unwrap();

    assert!(Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());

    let date = days_ago_date(days_ago);
    assert!(Command::new("git")
        .args(["commit", "-q", "-m", &format!("touch {name}")])
        .env("GIT_AUTHOR_EMAIL", email)
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}
