//! The same-person decision rule
//!
//! A short-circuiting sequence of guards over an already-computed
//! [`FeatureBundle`]: one hard reject for generic aliases, then an
//! escalating set of strong-match conditions. The first matching guard
//! decides; the rule never errors.

use serde::{Deserialize, Serialize};

use crate::identity::GenericAliasList;
use crate::similarity::FeatureBundle;

/// Tunable thresholds for the decision rule
///
/// Defaults are the hand-tuned values; sweeps over a labeled ground
/// truth only need a different config, not a code edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum full-name similarity for a strong name signal
    pub name_similarity_threshold: f64,
    /// Minimum local-part length for a cross-domain prefix match to be
    /// trusted; shorter shared aliases collide too easily
    pub min_local_part_len: usize,
    /// Token-Jaccard floor for the surname + domain guard
    pub surname_domain_jaccard: f64,
    /// Token-Jaccard floor for the prefix + domain guard
    pub prefix_domain_jaccard: f64,
    /// Similarity floor for the manual-labeling candidate shortlist
    pub shortlist_threshold: f64,
    /// Email patterns excluded from matching outright
    pub aliases: GenericAliasList,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            name_similarity_threshold: 0.8,
            min_local_part_len: 3,
            surname_domain_jaccard: 0.7,
            prefix_domain_jaccard: 0.90,
            shortlist_threshold: 0.8,
            aliases: GenericAliasList::default(),
        }
    }
}

/// Terminal output of the decision rule for one candidate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Final same-person decision
    pub same_person: bool,
    /// Name side of the evidence was strong on its own
    pub strong_name: bool,
    /// Email side of the evidence was strong on its own
    pub strong_email: bool,
    /// Human-readable explanation of the deciding guard
    pub reason: String,
}

/// Decide whether a candidate pair refers to the same person
///
/// Guards are evaluated in order; the first match wins:
/// 1. Any generic alias rejects outright, regardless of every other
///    signal - anonymized and automation addresses are shared by many
///    distinct identities.
/// 2. Same surname, same domain, and substantial token overlap.
/// 3. Shared mailbox (prefix and domain equal) with near-identical
///    token sets - catches reordered name tokens.
/// 4. Strong name and strong email together. A cross-domain prefix
///    match only counts as strong email when the shared local part is
///    long enough not to collide by accident.
pub fn decide(features: &FeatureBundle, config: &MatchConfig) -> Verdict {
    let strong_name = features.name_similarity >= config.name_similarity_threshold
        || features.same_surname;
    let strong_email = features.same_domain
        || (features.prefix_equal
            && (features.same_domain || features.local_part_len >= config.min_local_part_len));

    if features.any_generic_alias {
        return Verdict {
            same_person: false,
            strong_name,
            strong_email,
            reason: "Generic alias".to_string(),
        };
    }

    if features.same_surname
        && features.same_domain
        && features.token_jaccard >= config.surname_domain_jaccard
    {
        return Verdict {
            same_person: true,
            strong_name,
            strong_email,
            reason: "Surname and domain match".to_string(),
        };
    }

    if features.prefix_equal
        && features.same_domain
        && features.token_jaccard >= config.prefix_domain_jaccard
    {
        return Verdict {
            same_person: true,
            strong_name,
            strong_email,
            reason: "Shared mailbox, matching name tokens".to_string(),
        };
    }

    if strong_name && strong_email {
        return Verdict {
            same_person: true,
            strong_name,
            strong_email,
            reason: "Strong name and strong email".to_string(),
        };
    }

    Verdict {
        same_person: false,
        strong_name,
        strong_email,
        reason: "No strong agreement".to_string(),
    }
}

/// Convenience wrapper returning only the boolean decision
pub fn is_same_person(features: &FeatureBundle, config: &MatchConfig) -> bool {
    decide(features, config).same_person
}
