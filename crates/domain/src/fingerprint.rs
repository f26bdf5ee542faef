use base64::{engine::general_purpose::URL_SAFE, Engine};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

const EMPTY_SENTINEL: &str = "empty";

/// Order-independent digest of a record set.
///
/// Non-empty sets hash to URL-safe base64 SHA-256 (44 chars). The empty set
/// maps to a fixed sentinel outside that output domain, so "no answer" is a
/// comparable class of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(Arc<str>);

impl Fingerprint {
    pub fn empty() -> Self {
        Self(Arc::from(EMPTY_SENTINEL))
    }

    /// Hash `values` after sorting a copy.
    ///
    /// Duplicates are kept in the hash input, so `["a", "a"]` and `["a"]`
    /// produce different fingerprints.
    pub fn of<S: AsRef<str>>(values: &[S]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let mut sorted: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
        sorted.sort_unstable();

        let mut hasher = Sha256::new();
        for value in sorted {
            hasher.update(value.as_bytes());
        }

        Self(Arc::from(URL_SAFE.encode(hasher.finalize())))
    }

    /// CNAME is hashed as a singleton set; an empty name is the empty set.
    pub fn of_cname(cname: &str) -> Self {
        if cname.is_empty() {
            Self::empty()
        } else {
            Self::of(&[cname])
        }
    }

    pub fn is_empty(&self) -> bool {
        &*self.0 == EMPTY_SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
