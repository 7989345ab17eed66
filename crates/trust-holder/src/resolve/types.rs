//! Resolution results.

use serde::{Deserialize, Serialize};

use crate::ledger::TrustLevel;
use crate::principal::PrincipalId;

/// Outcome of a resolution walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The resolved trust value; [`crate::ledger::UNKNOWN_TRUST`] when the
    /// chain ended without an explicit value.
    pub value: TrustLevel,
    /// The principal whose ledger entry produced the value, or the last
    /// rater visited when the value is unknown.
    pub source: PrincipalId,
    /// The depth at which the walk terminated: the starting depth plus the
    /// number of delegation hops actually taken.
    pub depth: u32,
}
