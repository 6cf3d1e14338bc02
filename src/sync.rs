//! Keeping the score file in step with a remote git repository.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};

pub trait SyncAgent {
    /// Fetch the latest score file before the ledger loads it.
    fn pull(&mut self) -> Result<()>;
    /// Commit local changes with `description` and send them upstream.
    fn push(&mut self, description: &str) -> Result<()>;
}

/// Used when syncing is turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSync;

impl SyncAgent for NoopSync {
    fn pull(&mut self) -> Result<()> {
        tracing::debug!("sync disabled, skipping pull");
        Ok(())
    }

    fn push(&mut self, description: &str) -> Result<()> {
        tracing::debug!(description, "sync disabled, skipping push");
        Ok(())
    }
}

/// Shells out to the `git` binary in the repository holding the score file.
#[derive(Debug, Clone)]
pub struct GitSync {
    repo_dir: PathBuf,
    remote: String,
    data_file: PathBuf,
}

impl GitSync {
    pub fn new(
        repo_dir: impl Into<PathBuf>,
        remote: impl Into<String>,
        data_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            remote: remote.into(),
            data_file: data_file.into(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .with_context(|| format!("run git {}", args.join(" ")))
    }

    fn git_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.git(args)?;
        if !output.status.success() {
            bail!(
                "git {} failed with status {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output)
    }
}

impl SyncAgent for GitSync {
    fn pull(&mut self) -> Result<()> {
        self.git_checked(&["pull"])?;
        tracing::info!(repo = %self.repo_dir.display(), "pulled score file");
        Ok(())
    }

    fn push(&mut self, description: &str) -> Result<()> {
        let data_file = self.data_file.to_string_lossy().into_owned();
        if self.repo_dir.join(&self.data_file).is_file() {
            self.git_checked(&["add", "--", data_file.as_str()])?;
        }
        self.git_checked(&["add", "--update"])?;

        let commit = self.git(&["commit", "-m", description])?;
        if !commit.status.success() {
            let stdout = String::from_utf8_lossy(&commit.stdout);
            if nothing_to_commit(&stdout) {
                tracing::info!("no score changes to commit");
                return Ok(());
            }
            bail!(
                "git commit failed with status {}: {}",
                commit.status,
                String::from_utf8_lossy(&commit.stderr).trim()
            );
        }

        self.git_checked(&["push", self.remote.as_str()])?;
        tracing::info!(remote = %self.remote, description, "pushed score file");
        Ok(())
    }
}

fn nothing_to_commit(stdout: &str) -> bool {
    stdout.contains("nothing to commit") || stdout.contains("nothing added to commit")
}
