use crate::cli::Settings;
use crate::error::{CalendarError, Result};
use crate::repo_list::RepoList;
use anyhow::Context;
use console::style;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Find every repository root below `root`.
///
/// A directory holding a `.git` directory is a repository root. `.git` and
/// `vendor` directories are never descended into. Nested repositories inside
/// a working tree are found too.
pub fn discover_repositories<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    // Normalising drops a trailing separator.
    let root: PathBuf = root.as_ref().components().collect();

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && (entry.file_name() == ".git" || entry.file_name() == "vendor"))
        })
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| CalendarError::Scan(e.to_string()))?;
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        if entry.path().join(".git").is_dir() {
            let repo = entry.path().to_string_lossy().to_string();
            tracing::debug!(event = "scan.repository_found", path = %repo);
            repos.push(repo);
        }
    }

    Ok(repos)
}

pub fn exec(settings: &Settings, folder: &Path) -> anyhow::Result<()> {
    println!("{}", style("Found Folders").bold());
    println!("{}", folder.display());

    let repos = discover_repositories(folder)
        .with_context(|| format!("Failed to scan {}", folder.display()))?;
    for repo in &repos {
        println!("{repo}");
    }

    RepoList::new(&settings.repo_list)
        .add(&repos)
        .context("Failed to update repository list")?;

    println!("\n {}", style("Successfully added files").green());
    Ok(())
}
