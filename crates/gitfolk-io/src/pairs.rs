//! Writing scored candidate-pair tables

use std::path::Path;

use serde::Serialize;

use gitfolk_core::{IdentityRecord, ScoredPair};

use crate::error::{IoError, IoResult};

/// One flattened CSV row per scored pair
#[derive(Debug, Serialize)]
struct PairRow<'a> {
    name_1: &'a str,
    email_1: &'a str,
    name_2: &'a str,
    email_2: &'a str,
    name_similarity: f64,
    prefix_similarity: f64,
    first_name_similarity: f64,
    last_name_similarity: f64,
    token_jaccard: f64,
    same_surname: bool,
    same_domain: bool,
    prefix_equal: bool,
    any_generic_alias: bool,
    a_initials_in_b_prefix: bool,
    a_reversed_in_b_prefix: bool,
    b_initials_in_a_prefix: bool,
    b_reversed_in_a_prefix: bool,
    same_person: bool,
    strong_name: bool,
    strong_email: bool,
    reason: &'a str,
}

/// Write scored pairs with their full feature bundles and verdicts
///
/// `identities` must be the slice the pairs were scored from; each
/// pair's indices are resolved back to the original records so the
/// table can be reviewed without the identity CSV at hand.
pub fn write_scored_pairs(
    path: &Path,
    identities: &[IdentityRecord],
    pairs: &[ScoredPair],
) -> IoResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IoError::WriteFailed(e.to_string()))?;

    for pair in pairs {
        let left = resolve(identities, pair.left)?;
        let right = resolve(identities, pair.right)?;
        let f = &pair.features;
        let v = &pair.verdict;

        let row = PairRow {
            name_1: &left.name,
            email_1: &left.email,
            name_2: &right.name,
            email_2: &right.email,
            name_similarity: f.name_similarity,
            prefix_similarity: f.prefix_similarity,
            first_name_similarity: f.first_name_similarity,
            last_name_similarity: f.last_name_similarity,
            token_jaccard: f.token_jaccard,
            same_surname: f.same_surname,
            same_domain: f.same_domain,
            prefix_equal: f.prefix_equal,
            any_generic_alias: f.any_generic_alias,
            a_initials_in_b_prefix: f.initials_embedded[0],
            a_reversed_in_b_prefix: f.initials_embedded[1],
            b_initials_in_a_prefix: f.initials_embedded[2],
            b_reversed_in_a_prefix: f.initials_embedded[3],
            same_person: v.same_person,
            strong_name: v.strong_name,
            strong_email: v.strong_email,
            reason: &v.reason,
        };
        writer
            .serialize(row)
            .map_err(|e| IoError::WriteFailed(e.to_string()))?;
    }

    writer.flush().map_err(|e| IoError::WriteFailed(e.to_string()))
}

fn resolve(identities: &[IdentityRecord], index: u32) -> IoResult<&IdentityRecord> {
    identities
        .get(index as usize)
        .ok_or_else(|| IoError::InvalidFormat(format!("pair index {index} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitfolk_core::{score_all_pairs, MatchConfig};
    use tempfile::tempdir;

    #[test]
    fn test_write_scored_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");

        let identities = vec![
            IdentityRecord::new("David Britch", "david@contoso.com"),
            IdentityRecord::new("David Britch", "david@contoso.com"),
        ];
        let pairs = score_all_pairs(&identities, &MatchConfig::default());
        write_scored_pairs(&path, &identities, &pairs).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("name_1,email_1,name_2,email_2"));
        assert!(header.contains("token_jaccard"));
        assert!(header.contains("same_person"));
        let row = lines.next().unwrap();
        assert!(row.contains("David Britch"));
        assert!(row.contains("true"));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");

        let identities = vec![IdentityRecord::new("A", "a@x.com")];
        let pairs = score_all_pairs(
            &[
                IdentityRecord::new("A", "a@x.com"),
                IdentityRecord::new("B", "b@x.com"),
            ],
            &MatchConfig::default(),
        );
        let err = write_scored_pairs(&path, &identities, &pairs).unwrap_err();
        assert!(matches!(err, IoError::InvalidFormat(_)));
    }
}
