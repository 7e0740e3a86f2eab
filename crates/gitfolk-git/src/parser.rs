//! Parser for the formatted `git log` authorship output

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use gitfolk_core::IdentityRecord;

use crate::command::FIELD_SEPARATOR;

/// Author and committer of a single commit
///
/// The two can be different people (e.g. a maintainer applying a mailed
/// patch), so both are collected as independent observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthorship {
    pub author: IdentityRecord,
    pub committer: IdentityRecord,
}

/// Parse `git log --format=%an<US>%ae<US>%cn<US>%ce` output
///
/// One line per commit. Lines without exactly four fields (merge
/// artifacts, trailing blank line) are skipped.
pub fn parse_log_output(output: &str) -> Vec<CommitAuthorship> {
    output
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            match fields.as_slice() {
                [author_name, author_email, committer_name, committer_email] => {
                    Some(CommitAuthorship {
                        author: IdentityRecord::new(*author_name, *author_email),
                        committer: IdentityRecord::new(*committer_name, *committer_email),
                    })
                }
                _ => None,
            }
        })
        .collect()
}

/// Collect the deduplicated, sorted identity set from commit authorship
///
/// Every distinct (name, email) observation is kept once; author and
/// committer contribute independently.
pub fn collect_identities(commits: &[CommitAuthorship]) -> Vec<IdentityRecord> {
    let mut seen: BTreeSet<IdentityRecord> = BTreeSet::new();
    for commit in commits {
        seen.insert(commit.author.clone());
        seen.insert(commit.committer.clone());
    }
    seen.into_iter().collect()
}
