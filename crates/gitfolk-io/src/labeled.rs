//! Reading labeled ground-truth pair tables
//!
//! Labeled tables come back from manual review and are not always
//! tidy: the label column may be named anything (a spreadsheet export
//! can produce `Column13`), and label values mix TP/FP with
//! TRUE/FALSE or 1/0. The reader finds the label column by header name
//! first and by content scanning as a fallback.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use gitfolk_core::{GroundTruth, IdentityRecord, LabeledPair};

use crate::error::{IoError, IoResult};

/// Header names recognized as the label column outright
const LABEL_HEADERS: [&str; 4] = ["label", "labels", "labeled", "annotation"];

/// Read a labeled pair table
///
/// Requires `name_1,email_1,name_2,email_2` columns. Rows whose label
/// cell does not parse as TP/FP are kept with no label; `evaluate`
/// skips them. Fails with [`IoError::MissingColumn`] when no label
/// column can be found at all.
pub fn read_labeled_pairs(path: &Path) -> IoResult<Vec<LabeledPair>> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let name_1 = column_index(&headers, "name_1")?;
    let email_1 = column_index(&headers, "email_1")?;
    let name_2 = column_index(&headers, "name_2")?;
    let email_2 = column_index(&headers, "email_2")?;
    let identity_columns = [name_1, email_1, name_2, email_2];

    // Buffer all rows; content-based label detection needs a full pass
    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for result in reader.records() {
        rows.push(result.map_err(|e| IoError::InvalidFormat(e.to_string()))?);
    }

    let label_column = find_label_column(&headers, &rows, &identity_columns)?;

    Ok(rows
        .iter()
        .map(|row| LabeledPair {
            left: IdentityRecord::new(cell(row, name_1), cell(row, email_1)),
            right: IdentityRecord::new(cell(row, name_2), cell(row, email_2)),
            label: GroundTruth::parse(cell(row, label_column)),
        })
        .collect())
}

fn cell<'a>(row: &'a csv::StringRecord, index: usize) -> &'a str {
    row.get(index).unwrap_or("")
}

fn column_index(headers: &[String], name: &str) -> IoResult<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| IoError::MissingColumn(name.to_string()))
}

/// Locate the label column by header name, then by contents
///
/// The contents fallback picks the non-identity column with the most
/// parseable labels, matching how spreadsheet exports with mangled
/// headers are handled downstream of manual review. A column is only
/// trusted when at least one of its values is a word-form label
/// (TP/FP/TRUE/FALSE): bare 0/1 values also occur in exported boolean
/// feature columns and are not evidence on their own.
fn find_label_column(
    headers: &[String],
    rows: &[csv::StringRecord],
    identity_columns: &[usize],
) -> IoResult<usize> {
    if let Some(index) = headers.iter().position(|h| {
        LABEL_HEADERS
            .into_iter()
            .any(|known| h.eq_ignore_ascii_case(known))
    }) {
        return Ok(index);
    }

    let mut best: Option<(usize, usize)> = None;
    for index in 0..headers.len() {
        if identity_columns.contains(&index) {
            continue;
        }
        let mut hits = 0;
        let mut word_hits = 0;
        for row in rows {
            let value = cell(row, index);
            if GroundTruth::parse(value).is_some() {
                hits += 1;
                if !matches!(value.trim(), "0" | "1") {
                    word_hits += 1;
                }
            }
        }
        if word_hits > 0 && best.map_or(true, |(_, best_hits)| hits > best_hits) {
            best = Some((index, hits));
        }
    }

    best.map(|(index, _)| index)
        .ok_or_else(|| IoError::MissingColumn("label".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("labeled.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_with_named_label_column() {
        let (_dir, path) = write_csv(
            "name_1,email_1,name_2,email_2,label\n\
             David Britch,david@contoso.com,David Britch,david@contoso.com,TP\n\
             Kyle White,kyle@xamarin.com,Kyle White,k.white@other.com,FP\n",
        );
        let pairs = read_labeled_pairs(&path).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].label, Some(GroundTruth::Tp));
        assert_eq!(pairs[1].label, Some(GroundTruth::Fp));
        assert_eq!(pairs[0].left.name, "David Britch");
    }

    #[test]
    fn test_label_column_detected_by_contents() {
        // Spreadsheet export mangled the label header
        let (_dir, path) = write_csv(
            "name_1,email_1,name_2,email_2,tok_sim,Column13\n\
             A B,a@x.com,A B,a@x.com,0.9,TP\n\
             C D,c@x.com,E F,e@y.com,0.1,FP\n",
        );
        let pairs = read_labeled_pairs(&path).unwrap();
        assert_eq!(pairs[0].label, Some(GroundTruth::Tp));
        assert_eq!(pairs[1].label, Some(GroundTruth::Fp));
    }

    #[test]
    fn test_boolean_and_numeric_labels() {
        let (_dir, path) = write_csv(
            "name_1,email_1,name_2,email_2,label\n\
             A B,a@x.com,A B,a@x.com,TRUE\n\
             C D,c@x.com,E F,e@y.com,0\n\
             G H,g@x.com,I J,i@y.com,maybe\n",
        );
        let pairs = read_labeled_pairs(&path).unwrap();
        assert_eq!(pairs[0].label, Some(GroundTruth::Tp));
        assert_eq!(pairs[1].label, Some(GroundTruth::Fp));
        assert_eq!(pairs[2].label, None);
    }

    #[test]
    fn test_numeric_flag_column_not_mistaken_for_labels() {
        // A boolean feature exported as 0/1 must not win over the real
        // label column, even when the label header was mangled
        let (_dir, path) = write_csv(
            "name_1,email_1,name_2,email_2,prefix_eq,Column13\n\
             A B,a@x.com,A B,a@x.com,1,TP\n\
             C D,c@x.com,E F,e@y.com,0,FP\n\
             G H,g@x.com,I J,i@y.com,1,FP\n",
        );
        let pairs = read_labeled_pairs(&path).unwrap();
        assert_eq!(pairs[0].label, Some(GroundTruth::Tp));
        assert_eq!(pairs[1].label, Some(GroundTruth::Fp));
        assert_eq!(pairs[2].label, Some(GroundTruth::Fp));
    }

    #[test]
    fn test_bare_numeric_column_alone_is_not_a_label_column() {
        let (_dir, path) = write_csv(
            "name_1,email_1,name_2,email_2,prefix_eq\n\
             A B,a@x.com,A B,a@x.com,1\n\
             C D,c@x.com,E F,e@y.com,0\n",
        );
        let err = read_labeled_pairs(&path).unwrap_err();
        assert!(matches!(err, IoError::MissingColumn(_)));
    }

    #[test]
    fn test_missing_identity_column() {
        let (_dir, path) = write_csv("name_1,email_1,label\nA,a@x.com,TP\n");
        let err = read_labeled_pairs(&path).unwrap_err();
        assert!(matches!(err, IoError::MissingColumn(_)));
    }

    #[test]
    fn test_no_label_column_anywhere() {
        let (_dir, path) = write_csv(
            "name_1,email_1,name_2,email_2,score\n\
             A B,a@x.com,A B,a@x.com,0.9\n",
        );
        let err = read_labeled_pairs(&path).unwrap_err();
        assert!(matches!(err, IoError::MissingColumn(_)));
    }
}
