//! Principals — account identifiers for raters, subjects, delegates, and
//! the administrator.
//!
//! A principal is an opaque identifier. The ledger never interprets its
//! contents; equality is the only property resolution relies on.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Unique identifier for a principal.
///
/// Generated IDs use the format `pid_` + base58 of 16 random bytes.
/// Externally minted identifiers of any shape are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrincipalId(pub String);

impl PrincipalId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random principal ID.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        let encoded = bs58::encode(bytes).into_string();
        Self(format!("pid_{encoded}"))
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
