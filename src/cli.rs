use crate::repo_list::RepoList;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_EMAIL: &str = "your@email.com";

#[derive(Parser)]
#[command(name = "commitcal")]
#[command(about = "Commit activity calendar for your local git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long, value_name = "FOLDER", help = "Add a new folder to scan for git repositories")]
    pub add: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_EMAIL, help = "Author email whose commits are counted")]
    pub email: String,

    #[arg(long, value_name = "PATH", help = "Path to the repository list [default: ~/.gitlocalstats]")]
    pub repo_list: Option<PathBuf>,
}

/// Resolved configuration shared by the scan and calendar commands.
#[derive(Debug, Clone)]
pub struct Settings {
    pub repo_list: PathBuf,
}

impl Settings {
    pub fn resolve(repo_list: Option<PathBuf>) -> Result<Self> {
        let repo_list = match repo_list {
            Some(path) => path,
            None => RepoList::default_path().context("Failed to locate repository list")?,
        };
        Ok(Self { repo_list })
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let settings = Settings::resolve(self.repo_list)?;
        match self.add {
            Some(folder) => crate::scan::exec(&settings, &folder),
            None => crate::calendar::exec(&settings, &self.email),
        }
    }
}
