//! Identity records and derived comparison fields

use serde::{Deserialize, Serialize};

use crate::normalization::{surname, tokenize};

/// A raw (name, email) observation from version-control authorship
/// metadata
///
/// Immutable once collected; all derived views are recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub name: String,
    pub email: String,
}

impl IdentityRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Comparable view derived from an [`IdentityRecord`]
///
/// Invariants: `surname` is empty iff `tokens` is empty;
/// `email_local`/`email_domain` are empty iff the email contains no `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIdentity {
    pub tokens: Vec<String>,
    pub surname: String,
    pub email_local: String,
    pub email_domain: String,
    pub is_generic_alias: bool,
}

/// Split an email address into (local part, domain)
///
/// An address without `@` has no usable local part or domain and yields
/// `("", "")` rather than an error. Both halves are lowercased.
pub fn split_email(raw: &str) -> (String, String) {
    match raw.split_once('@') {
        Some((local, domain)) => (local.to_lowercase(), domain.to_lowercase()),
        None => (String::new(), String::new()),
    }
}

/// Denylist of email host patterns that do not identify a unique human
///
/// GitHub's anonymized-contribution relay and private-network hostnames
/// are shared by many distinct humans (or by no human at all), so any
/// address matching a marker is excluded from matching outright.
///
/// The marker set is configurable: `contains` markers match anywhere in
/// the lowercased address, `suffixes` markers match its end. Callers may
/// extend either list (e.g. with `bot`/`ci`/`automation` local-part
/// markers), at the cost of rejecting human addresses that happen to
/// embed a short marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericAliasList {
    pub contains: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Default for GenericAliasList {
    fn default() -> Self {
        Self {
            contains: vec![
                "users.noreply.github.com".to_string(),
                ".local".to_string(),
            ],
            suffixes: vec![".lan".to_string()],
        }
    }
}

impl GenericAliasList {
    /// True if the email matches any marker in the denylist
    pub fn matches(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.contains.iter().any(|m| email.contains(m.as_str()))
            || self.suffixes.iter().any(|m| email.ends_with(m.as_str()))
    }
}

/// True if the email is a generic (non-human-identifying) alias
pub fn is_generic_alias(email: &str, aliases: &GenericAliasList) -> bool {
    aliases.matches(email)
}

/// Derive the comparable view of an identity record
pub fn normalize_identity(record: &IdentityRecord, aliases: &GenericAliasList) -> NormalizedIdentity {
    let tokens = tokenize(&record.name);
    let surname = surname(&record.name);
    let (email_local, email_domain) = split_email(&record.email);
    let is_generic_alias = aliases.matches(&record.email);

    NormalizedIdentity {
        tokens,
        surname,
        email_local,
        email_domain,
        is_generic_alias,
    }
}
