use crate::error::{CalendarError, Result};
use crate::model::CommitRecord;
use chrono::DateTime;
use gix::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`. No upward discovery is done.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = gix::open(&path)?;
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Author email and author time of every commit reachable from HEAD,
    /// walking back through parents.
    ///
    /// Returns `Ok(None)` when HEAD is unborn, i.e. the repository has no
    /// commits yet.
    pub fn collect_commits(&self) -> Result<Option<Vec<CommitRecord>>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Ok(None);
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let walk = self
            .repo
            .rev_walk([head_commit.id])
            .all()
            .map_err(|e| CalendarError::GitRepo(format!("Failed to walk history: {e}")))?;

        let mut commits = Vec::new();
        for info in walk {
            let info = info
                .map_err(|e| CalendarError::GitRepo(format!("Failed to walk history: {e}")))?;
            let commit = self.repo.find_commit(info.id)?;
            let author = commit.author()?;
            let secs = author
                .time()
                .map_err(|e| CalendarError::InvalidDate(format!("Invalid author time: {e}")))?
                .seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| CalendarError::InvalidDate(format!("Invalid timestamp: {secs}")))?;

            commits.push(CommitRecord {
                author_email: author.email.to_string(),
                timestamp,
            });
        }

        Ok(Some(commits))
    }
}
