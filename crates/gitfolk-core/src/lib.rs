//! gitfolk-core: identity matching core for developer deduplication
//!
//! Decides whether two (name, email) observations mined from
//! version-control history refer to the same human. The pipeline is a
//! referentially transparent sequence of pure functions:
//!
//! - **Normalization**: accent folding, casing, delimiter tokenization
//! - **Feature extraction**: surname, email local part and domain,
//!   generic-alias detection
//! - **Similarity scoring**: edit-distance and token-overlap signals
//!   per candidate pair
//! - **Decision rule**: a short-circuiting guard sequence producing a
//!   terminal same-person verdict
//!
//! The core performs no I/O and has no fatal error path: malformed
//! input (an email without `@`, an empty name) degrades to empty
//! derived fields, which make every equality and similarity check false
//! by construction. Mining, CSV handling, and report writing live in
//! the sibling `gitfolk-git` and `gitfolk-io` crates.

pub mod evaluation;
pub mod identity;
pub mod normalization;
pub mod pairing;
pub mod rule;
pub mod similarity;

// Re-export main types for convenience
pub use evaluation::{disagreements, evaluate, Disagreement, Evaluation, GroundTruth, LabeledPair};
pub use identity::{
    is_generic_alias, normalize_identity, split_email, GenericAliasList, IdentityRecord,
    NormalizedIdentity,
};
pub use normalization::{normalize, surname, tokenize};
pub use pairing::{score_all_pairs, shortlist, ScoredPair};
pub use rule::{decide, is_same_person, MatchConfig, Verdict};
pub use similarity::{score_pair, FeatureBundle};
