//! Command builder for mining authorship from `git log`

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::GitError;

/// Field delimiter used in the log format string
///
/// The ASCII unit separator cannot appear in names or emails, unlike
/// commas or tabs.
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Builder for the `git log` invocation that emits one
/// author/committer line per commit
#[derive(Debug, Clone)]
pub struct GitLogCommand {
    repo: PathBuf,
    all_refs: bool,
    max_count: Option<usize>,
}

impl GitLogCommand {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            all_refs: true,
            max_count: None,
        }
    }

    /// Walk every ref instead of just HEAD (default: true)
    pub fn all_refs(mut self, all_refs: bool) -> Self {
        self.all_refs = all_refs;
        self
    }

    /// Limit the number of commits walked
    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// The argv passed to `git`, without the program name
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-C".to_string(),
            self.repo.to_string_lossy().into_owned(),
            "log".to_string(),
        ];
        if self.all_refs {
            args.push("--all".to_string());
        }
        if let Some(n) = self.max_count {
            args.push(format!("--max-count={n}"));
        }
        args.push(format!(
            "--format=%an{sep}%ae{sep}%cn{sep}%ce",
            sep = FIELD_SEPARATOR
        ));
        args
    }

    /// Run the command and return its stdout
    pub fn run(&self) -> Result<String, GitError> {
        let output = Command::new("git").args(self.args()).output()?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
