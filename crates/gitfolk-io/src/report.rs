//! Writing disagreement reports for spot-check review

use std::path::Path;

use serde::Serialize;

use gitfolk_core::{Disagreement, GroundTruth};

use crate::error::{IoError, IoResult};

/// One CSV row per rule-vs-label disagreement
#[derive(Debug, Serialize)]
struct DisagreementRow<'a> {
    name_1: &'a str,
    email_1: &'a str,
    name_2: &'a str,
    email_2: &'a str,
    token_jaccard: f64,
    name_similarity: f64,
    prefix_equal: bool,
    same_domain: bool,
    same_surname: bool,
    any_generic_alias: bool,
    label: &'a str,
    rule_pred: &'a str,
    reason: &'a str,
}

/// Write the rows where the rule contradicts the ground truth
///
/// The feature columns carried along are the ones a reviewer needs to
/// see why the rule fired (or refused to).
pub fn write_disagreements(path: &Path, rows: &[Disagreement]) -> IoResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IoError::WriteFailed(e.to_string()))?;

    for row in rows {
        let record = DisagreementRow {
            name_1: &row.left.name,
            email_1: &row.left.email,
            name_2: &row.right.name,
            email_2: &row.right.email,
            token_jaccard: row.features.token_jaccard,
            name_similarity: row.features.name_similarity,
            prefix_equal: row.features.prefix_equal,
            same_domain: row.features.same_domain,
            same_surname: row.features.same_surname,
            any_generic_alias: row.features.any_generic_alias,
            label: label_tag(row.label),
            rule_pred: if row.verdict.same_person { "TP" } else { "FP" },
            reason: &row.verdict.reason,
        };
        writer
            .serialize(record)
            .map_err(|e| IoError::WriteFailed(e.to_string()))?;
    }

    writer.flush().map_err(|e| IoError::WriteFailed(e.to_string()))
}

fn label_tag(label: GroundTruth) -> &'static str {
    match label {
        GroundTruth::Tp => "TP",
        GroundTruth::Fp => "FP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitfolk_core::{disagreements, IdentityRecord, LabeledPair, MatchConfig};
    use tempfile::tempdir;

    #[test]
    fn test_write_disagreements() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("disagreements.csv");

        // Generic alias rejected despite a TP label: one disagreement
        let pairs = vec![LabeledPair {
            left: IdentityRecord::new("Eric Torre", "etorre@gmail.com"),
            right: IdentityRecord::new("Eric Torre", "eric@users.noreply.github.com"),
            label: Some(GroundTruth::Tp),
        }];
        let rows = disagreements(&pairs, &MatchConfig::default());
        write_disagreements(&path, &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("name_1,email_1,name_2,email_2"));
        assert!(header.contains("rule_pred"));
        let row = lines.next().unwrap();
        assert!(row.contains("Eric Torre"));
        assert!(row.ends_with("Generic alias"));
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("disagreements.csv");
        write_disagreements(&path, &[]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty() || contents.lines().count() <= 1);
    }
}
