//! The resolution walk.
//!
//! Delegation edges form an arbitrary directed graph that may contain
//! cycles. The walk does no cycle detection: the depth ceiling bounds the
//! number of hops, so any cycle runs into `DepthExceeded` instead of
//! looping forever.

use crate::error::{Result, TrustError};
use crate::governance::LookupBounds;
use crate::ledger::{TrustLedger, UNKNOWN_TRUST};
use crate::principal::PrincipalId;

use super::types::Resolution;

/// Resolve `rater`'s effective trust in `subject`.
///
/// The effective ceiling is `min(caller_max_depth, bounds.max_lookups())`,
/// computed once before the first ledger read. Precedence at every hop,
/// strict: an explicitly set value terminates the walk; otherwise the
/// record-level delegate for this subject is followed; otherwise the
/// rater's default delegate; otherwise the walk ends with the unknown
/// sentinel attributed to the last rater visited.
///
/// The walk performs no writes: identical calls over an unchanged ledger
/// return identical results.
///
/// # Errors
///
/// `DepthExceeded` when `start_depth` already exceeds the ceiling, or when
/// the chain needs more hops than the ceiling allows. The walk never
/// truncates — a too-deep chain fails outright instead of returning a
/// partial answer.
pub fn resolve(
    ledger: &TrustLedger,
    bounds: &LookupBounds,
    rater: &PrincipalId,
    subject: &PrincipalId,
    start_depth: u32,
    caller_max_depth: u32,
) -> Result<Resolution> {
    let ceiling = caller_max_depth.min(bounds.max_lookups());

    // Loop state is (current, depth); an explicit loop keeps arbitrarily
    // long chains off the call stack.
    let mut current = rater.clone();
    let mut depth = start_depth;

    loop {
        if depth > ceiling {
            return Err(TrustError::DepthExceeded { depth, ceiling });
        }

        let value = ledger.read_value(&current, subject);
        if value != UNKNOWN_TRUST {
            log::trace!("resolved {subject} for {rater}: {value} via {current} at depth {depth}");
            return Ok(Resolution {
                value,
                source: current,
                depth,
            });
        }

        let next = ledger
            .read_record_delegate(&current, subject)
            .or_else(|| ledger.read_default_delegate(&current));

        match next {
            Some(delegate) => {
                current = delegate.clone();
                // An overflowing depth exceeds any u32 ceiling.
                depth = depth
                    .checked_add(1)
                    .ok_or(TrustError::DepthExceeded { depth, ceiling })?;
            }
            None => {
                log::trace!("no entry for {subject}: chain ends at {current}, depth {depth}");
                return Ok(Resolution {
                    value: UNKNOWN_TRUST,
                    source: current,
                    depth,
                });
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
