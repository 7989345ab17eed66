//! Ledger entry types — trust records and default delegations.

use serde::{Deserialize, Serialize};

use crate::principal::PrincipalId;

/// A trust value as stored in the ledger.
///
/// The full `u8` range is storable:
/// - `0` — unknown/unset, returned whenever no explicit value exists
/// - `1..=100` — the usable rating range, 1 = minimum, 100 = maximum
/// - `255` — reserved: "trust the subject exactly as I trust myself";
///   stored and returned verbatim, never interpreted by resolution
/// - `101..=254` — outside the usable range, preserved as written
pub type TrustLevel = u8;

/// No trust value recorded.
pub const UNKNOWN_TRUST: TrustLevel = 0;

/// Lowest usable rating.
pub const MIN_TRUST: TrustLevel = 1;

/// Highest usable rating.
pub const MAX_TRUST: TrustLevel = 100;

/// Reserved sentinel: trust the subject as the rater trusts itself.
pub const TRUST_AS_SELF: TrustLevel = 255;

/// One rater's ledger entry for one subject.
///
/// Entries are created lazily on first write and overwritten in place;
/// there is no deletion — "unset" is the [`UNKNOWN_TRUST`] / absent
/// sentinel, not removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustRecord {
    /// Explicitly set trust value; [`UNKNOWN_TRUST`] when never set.
    pub value: TrustLevel,
    /// Delegate consulted for this subject when no explicit value exists.
    /// Invariant: never the rater itself.
    pub record_delegate: Option<PrincipalId>,
    /// Microsecond timestamp of the last write to this entry.
    pub updated_at: u64,
}

impl TrustRecord {
    /// A fresh entry with nothing set.
    pub fn unset() -> Self {
        Self {
            value: UNKNOWN_TRUST,
            record_delegate: None,
            updated_at: 0,
        }
    }

    /// Whether an explicit value has been written.
    pub fn has_value(&self) -> bool {
        self.value != UNKNOWN_TRUST
    }
}

impl Default for TrustRecord {
    fn default() -> Self {
        Self::unset()
    }
}

/// A rater's fallback delegate, consulted for every subject that lacks a
/// record-level delegate. Invariant: never the rater itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultDelegation {
    /// The fallback delegate, if one has been set.
    pub default_delegate: Option<PrincipalId>,
    /// Microsecond timestamp of the last write to this entry.
    pub updated_at: u64,
}
