use crate::error::{CalendarError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = ".gitlocalstats";

/// Newline-separated list of known repository roots.
pub struct RepoList {
    path: PathBuf,
}

impl RepoList {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `~/.gitlocalstats`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CalendarError::RepoList("home directory not found".to_string()))?;
        Ok(home.join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored paths, creating an empty list file if none exists.
    pub fn load(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::File::create(&self.path)?;
                tracing::debug!(event = "repo_list.created", path = %self.path.display());
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Rewrite the whole file, one path per line, without a trailing newline.
    pub fn save(&self, repos: &[String]) -> Result<()> {
        fs::write(&self.path, repos.join("\n"))?;
        Ok(())
    }

    /// Merge `new_repos` into the stored list and persist the result.
    pub fn add(&self, new_repos: &[String]) -> Result<Vec<String>> {
        let existing = self.load()?;
        let before = existing.len();
        let repos = merge(existing, new_repos);
        self.save(&repos)?;
        tracing::info!(
            event = "repo_list.saved",
            path = %self.path().display(),
            added = repos.len() - before,
            total = repos.len()
        );
        Ok(repos)
    }
}

/// Append each new path not already present, keeping first-seen order.
pub fn merge(mut existing: Vec<String>, new_repos: &[String]) -> Vec<String> {
    for repo in new_repos {
        if !existing.contains(repo) {
            existing.push(repo.clone());
        }
    }
    existing
}
