//! Evaluation of the decision rule against a labeled ground truth
//!
//! Ground truth comes from a human-reviewed table of candidate pairs
//! tagged TP (same person) or FP (different people). Evaluation re-runs
//! the full normalize -> extract -> score -> decide pipeline on the raw
//! records and compares the verdicts to the labels.

use serde::{Deserialize, Serialize};

use crate::identity::IdentityRecord;
use crate::rule::{decide, MatchConfig, Verdict};
use crate::similarity::{score_pair, FeatureBundle};

/// Human-reviewed judgment for a candidate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundTruth {
    /// Reviewed as the same person
    Tp,
    /// Reviewed as different people
    Fp,
}

impl GroundTruth {
    /// Lenient label parsing: accepts TP/FP, TRUE/FALSE, and 1/0 in any
    /// casing with surrounding whitespace. Anything else is unlabeled.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "TP" | "TRUE" | "1" => Some(Self::Tp),
            "FP" | "FALSE" | "0" => Some(Self::Fp),
            _ => None,
        }
    }
}

/// A candidate pair with an optional human label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPair {
    pub left: IdentityRecord,
    pub right: IdentityRecord,
    pub label: Option<GroundTruth>,
}

/// Confusion counts from evaluating the rule against labeled pairs
///
/// Unlabeled rows are counted in `total` but excluded from the
/// confusion matrix and the derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    pub labeled: usize,
    pub total: usize,
}

impl Evaluation {
    /// Precision, or `None` when the rule predicted no matches
    pub fn precision(&self) -> Option<f64> {
        let predicted = self.true_positives + self.false_positives;
        if predicted == 0 {
            return None;
        }
        Some(self.true_positives as f64 / predicted as f64)
    }

    /// Recall, or `None` when the ground truth has no positives
    pub fn recall(&self) -> Option<f64> {
        let actual = self.true_positives + self.false_negatives;
        if actual == 0 {
            return None;
        }
        Some(self.true_positives as f64 / actual as f64)
    }

    /// Harmonic mean of precision and recall
    pub fn f1(&self) -> Option<f64> {
        let (p, r) = (self.precision()?, self.recall()?);
        if p + r == 0.0 {
            return None;
        }
        Some(2.0 * p * r / (p + r))
    }
}

/// Evaluate the decision rule over a labeled pair table
pub fn evaluate(pairs: &[LabeledPair], config: &MatchConfig) -> Evaluation {
    let mut result = Evaluation {
        total: pairs.len(),
        ..Default::default()
    };

    for pair in pairs {
        let Some(label) = pair.label else {
            continue;
        };
        result.labeled += 1;

        let features = score_pair(&pair.left, &pair.right, &config.aliases);
        let predicted = decide(&features, config).same_person;

        match (predicted, label) {
            (true, GroundTruth::Tp) => result.true_positives += 1,
            (true, GroundTruth::Fp) => result.false_positives += 1,
            (false, GroundTruth::Fp) => result.true_negatives += 1,
            (false, GroundTruth::Tp) => result.false_negatives += 1,
        }
    }

    result
}

/// A labeled pair where the verdict contradicts the human label,
/// carrying the full feature bundle for spot-check inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disagreement {
    pub left: IdentityRecord,
    pub right: IdentityRecord,
    pub label: GroundTruth,
    pub features: FeatureBundle,
    pub verdict: Verdict,
}

/// Collect the rows where the rule disagrees with the ground truth
pub fn disagreements(pairs: &[LabeledPair], config: &MatchConfig) -> Vec<Disagreement> {
    pairs
        .iter()
        .filter_map(|pair| {
            let label = pair.label?;
            let features = score_pair(&pair.left, &pair.right, &config.aliases);
            let verdict = decide(&features, config);

            let expected = matches!(label, GroundTruth::Tp);
            if verdict.same_person == expected {
                return None;
            }

            Some(Disagreement {
                left: pair.left.clone(),
                right: pair.right.clone(),
                label,
                features,
                verdict,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(a: (&str, &str), b: (&str, &str), label: &str) -> LabeledPair {
        LabeledPair {
            left: IdentityRecord::new(a.0, a.1),
            right: IdentityRecord::new(b.0, b.1),
            label: GroundTruth::parse(label),
        }
    }

    fn sample() -> Vec<LabeledPair> {
        vec![
            // Matched and labeled TP
            labeled(
                ("David Britch", "david@contoso.com"),
                ("David Britch", "david@contoso.com"),
                "TP",
            ),
            // Rejected and labeled FP
            labeled(
                ("Kyle White", "kyle@xamarin.com"),
                ("Kyle White", "k.white@other.com"),
                "FP",
            ),
            // Rejected (generic alias) but labeled TP -> false negative
            labeled(
                ("Eric Torre", "etorre@gmail.com"),
                ("Eric Torre", "eric@users.noreply.github.com"),
                "TP",
            ),
            // Unlabeled row is skipped
            labeled(("A B", "a@b.com"), ("C D", "c@d.com"), ""),
        ]
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(GroundTruth::parse(" tp "), Some(GroundTruth::Tp));
        assert_eq!(GroundTruth::parse("TRUE"), Some(GroundTruth::Tp));
        assert_eq!(GroundTruth::parse("1"), Some(GroundTruth::Tp));
        assert_eq!(GroundTruth::parse("fp"), Some(GroundTruth::Fp));
        assert_eq!(GroundTruth::parse("FALSE"), Some(GroundTruth::Fp));
        assert_eq!(GroundTruth::parse("0"), Some(GroundTruth::Fp));
        assert_eq!(GroundTruth::parse("maybe"), None);
        assert_eq!(GroundTruth::parse(""), None);
    }

    #[test]
    fn test_confusion_counts() {
        let result = evaluate(&sample(), &MatchConfig::default());
        assert_eq!(result.total, 4);
        assert_eq!(result.labeled, 3);
        assert_eq!(result.true_positives, 1);
        assert_eq!(result.false_positives, 0);
        assert_eq!(result.true_negatives, 1);
        assert_eq!(result.false_negatives, 1);
    }

    #[test]
    fn test_metrics() {
        let result = evaluate(&sample(), &MatchConfig::default());
        assert_eq!(result.precision(), Some(1.0));
        assert_eq!(result.recall(), Some(0.5));
        let f1 = result.f1().unwrap();
        assert!((f1 - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_undefined_on_empty() {
        let result = Evaluation::default();
        assert_eq!(result.precision(), None);
        assert_eq!(result.recall(), None);
        assert_eq!(result.f1(), None);
    }

    #[test]
    fn test_disagreements_carry_features() {
        let rows = disagreements(&sample(), &MatchConfig::default());
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.label, GroundTruth::Tp);
        assert!(!row.verdict.same_person);
        assert!(row.features.any_generic_alias);
    }
}
