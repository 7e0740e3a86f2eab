//! Pairwise scoring over a deduplicated identity set
//!
//! Every unordered pair of distinct records is scored independently with
//! no shared mutable state, so the O(N^2) sweep is embarrassingly
//! parallel. With the `parallel` feature enabled, scoring fans out over
//! rayon; the output is identical either way.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::identity::IdentityRecord;
use crate::rule::{decide, MatchConfig, Verdict};
use crate::similarity::{score_pair, FeatureBundle};

/// A scored candidate pair: indices into the identity set plus the
/// derived features and the terminal verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
    /// Index of the first record in the input slice
    pub left: u32,
    /// Index of the second record (always greater than `left`)
    pub right: u32,
    pub features: FeatureBundle,
    pub verdict: Verdict,
}

/// Score and decide every unordered pair of distinct identities
///
/// Pairs are returned in (left, right) order regardless of whether the
/// parallel path was taken.
pub fn score_all_pairs(identities: &[IdentityRecord], config: &MatchConfig) -> Vec<ScoredPair> {
    let indices = pair_indices(identities.len());

    let score_one = |&(i, j): &(usize, usize)| {
        let features = score_pair(&identities[i], &identities[j], &config.aliases);
        let verdict = decide(&features, config);
        ScoredPair {
            left: i as u32,
            right: j as u32,
            features,
            verdict,
        }
    };

    #[cfg(feature = "parallel")]
    let pairs: Vec<ScoredPair> = indices.par_iter().map(score_one).collect();
    #[cfg(not(feature = "parallel"))]
    let pairs: Vec<ScoredPair> = indices.iter().map(score_one).collect();

    pairs
}

/// All (i, j) index pairs with i < j
fn pair_indices(len: usize) -> Vec<(usize, usize)> {
    let mut indices = Vec::with_capacity(len.saturating_mul(len.saturating_sub(1)) / 2);
    for i in 0..len {
        for j in (i + 1)..len {
            indices.push((i, j));
        }
    }
    indices
}

/// Filter scored pairs down to the manual-labeling candidate shortlist
///
/// Keeps pairs with a strong full-name, email-prefix, or combined
/// first+last name similarity. The looser initials heuristics are
/// deliberately ignored here; they produce too many weak candidates to
/// review by hand.
pub fn shortlist<'a>(pairs: &'a [ScoredPair], threshold: f64) -> Vec<&'a ScoredPair> {
    pairs
        .iter()
        .filter(|p| {
            let f = &p.features;
            f.name_similarity >= threshold
                || f.prefix_similarity >= threshold
                || (f.first_name_similarity >= threshold && f.last_name_similarity >= threshold)
        })
        .collect()
}
