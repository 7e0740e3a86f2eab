//! gitfolk-git: git history mining for developer identity deduplication
//!
//! Models, parsers, and command builders around `git log`. The mining
//! output is a deduplicated set of raw (name, email) observations,
//! consumed by `gitfolk-core` for pairwise matching.
//!
//! The crate shells out to the `git` binary rather than linking
//! libgit2; the command builder and parser are pure and testable
//! without a repository.

pub mod command;
pub mod error;
pub mod parser;

pub use command::{GitLogCommand, FIELD_SEPARATOR};
pub use error::GitError;
pub use parser::{collect_identities, parse_log_output, CommitAuthorship};

use std::path::Path;

use gitfolk_core::IdentityRecord;

/// Mine the deduplicated identity set from a repository's full history
pub fn mine_repository(repo: &Path) -> Result<Vec<IdentityRecord>, GitError> {
    let output = GitLogCommand::new(repo).run()?;
    let commits = parse_log_output(&output);
    Ok(collect_identities(&commits))
}
