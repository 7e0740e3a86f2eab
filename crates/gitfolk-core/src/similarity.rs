//! Similarity scoring between two identity records

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;

use crate::identity::{normalize_identity, GenericAliasList, IdentityRecord, NormalizedIdentity};
use crate::normalization::{first_name, initial, normalize};

/// Similarity features derived from a candidate pair of identity records
///
/// Created once per unordered pair and never mutated. `Default` gives the
/// neutral value for every field (0.0 / false), so a partially-computed
/// bundle degrades to a conservative non-match verdict.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureBundle {
    /// Normalized edit-distance similarity of the two full names
    pub name_similarity: f64,
    /// Normalized edit-distance similarity of the two email local parts
    pub prefix_similarity: f64,
    /// Similarity of the two first tokens
    pub first_name_similarity: f64,
    /// Similarity of the two surnames
    pub last_name_similarity: f64,
    /// Set overlap of the two token sets (0.0 when both are empty)
    pub token_jaccard: f64,
    /// Both surnames non-empty and equal
    pub same_surname: bool,
    /// Both email domains non-empty and equal
    pub same_domain: bool,
    /// Both email local parts non-empty and equal
    pub prefix_equal: bool,
    /// Length of the shared local part when `prefix_equal`, else 0
    pub local_part_len: usize,
    /// Either email matches the generic-alias denylist
    pub any_generic_alias: bool,
    /// Directional initials-in-mailbox heuristics:
    /// `[0]` A's first initial + surname embedded in B's local part,
    /// `[1]` A's last initial + first name embedded in B's local part,
    /// `[2]` and `[3]` the mirrored checks of B against A's local part
    pub initials_embedded: [bool; 4],
}

/// Compute the feature bundle for a pair of raw identity records
pub fn score_pair(
    a: &IdentityRecord,
    b: &IdentityRecord,
    aliases: &GenericAliasList,
) -> FeatureBundle {
    let norm_a = normalize_identity(a, aliases);
    let norm_b = normalize_identity(b, aliases);

    let surname_a = &norm_a.surname;
    let surname_b = &norm_b.surname;
    let first_a = first_name(&a.name);
    let first_b = first_name(&b.name);

    let prefix_equal = !norm_a.email_local.is_empty() && norm_a.email_local == norm_b.email_local;

    FeatureBundle {
        name_similarity: text_similarity(&normalize(&a.name), &normalize(&b.name)),
        prefix_similarity: text_similarity(&norm_a.email_local, &norm_b.email_local),
        first_name_similarity: text_similarity(&first_a, &first_b),
        last_name_similarity: text_similarity(surname_a, surname_b),
        token_jaccard: token_jaccard(&norm_a.tokens, &norm_b.tokens),
        same_surname: !surname_a.is_empty() && surname_a == surname_b,
        same_domain: !norm_a.email_domain.is_empty() && norm_a.email_domain == norm_b.email_domain,
        prefix_equal,
        local_part_len: if prefix_equal {
            norm_a.email_local.chars().count()
        } else {
            0
        },
        any_generic_alias: norm_a.is_generic_alias || norm_b.is_generic_alias,
        initials_embedded: initials_embedded(&norm_a, &first_a, &norm_b, &first_b),
    }
}

/// Edit-distance similarity between two already-normalized strings
///
/// Empty input is never evidence of similarity, so any empty side
/// scores 0.0.
fn text_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(a, b)
}

/// Jaccard overlap of two token sequences
///
/// Defined as 0.0 when both sets are empty: "nothing vs nothing" is not
/// proof of similarity.
pub fn token_jaccard(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}

/// The four directional initials-in-mailbox checks
fn initials_embedded(
    a: &NormalizedIdentity,
    first_a: &str,
    b: &NormalizedIdentity,
    first_b: &str,
) -> [bool; 4] {
    [
        embeds(initial(first_a), &a.surname, &b.email_local),
        embeds(initial(&a.surname), first_a, &b.email_local),
        embeds(initial(first_b), &b.surname, &a.email_local),
        embeds(initial(&b.surname), first_b, &a.email_local),
    ]
}

/// True if both the initial and the name part appear in the local part
fn embeds(initial: Option<char>, part: &str, local: &str) -> bool {
    match initial {
        Some(c) if !part.is_empty() => local.contains(c) && local.contains(part),
        _ => false,
    }
}
