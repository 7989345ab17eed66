//! Query layer for ledger records.
//!
//! [`RecordQuery`] / [`query_records`] filter trust records by rater,
//! subject, minimum explicit value, and delegation presence.
//!
//! All fields are optional. Unset fields impose no restriction. When
//! multiple filters are set they are combined with logical AND. Results
//! are sorted by (rater, subject) for a stable order, then capped at
//! `limit` entries.

use crate::ledger::{TrustLedger, TrustLevel, TrustRecord};
use crate::principal::PrincipalId;

/// Query parameters for filtering [`TrustRecord`] entries.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Restrict results to records owned by this rater.
    pub rater: Option<PrincipalId>,
    /// Restrict results to records about this subject.
    pub subject: Option<PrincipalId>,
    /// Restrict results to records whose explicit value is at least this.
    /// Records with no explicit value never match.
    pub min_value: Option<TrustLevel>,
    /// When `true`, only return records carrying a record-level delegate.
    pub delegated_only: bool,
    /// Maximum number of records to return (applied after sorting).
    pub limit: Option<usize>,
}

/// A matched record together with its owning rater and subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch<'a> {
    pub rater: &'a PrincipalId,
    pub subject: &'a PrincipalId,
    pub record: &'a TrustRecord,
}

/// Execute a [`RecordQuery`] against a [`TrustLedger`].
pub fn query_records<'a>(ledger: &'a TrustLedger, query: &RecordQuery) -> Vec<RecordMatch<'a>> {
    let mut matches: Vec<RecordMatch<'a>> = ledger
        .records()
        .filter(|(rater, subject, record)| {
            if let Some(want) = &query.rater {
                if *rater != want {
                    return false;
                }
            }
            if let Some(want) = &query.subject {
                if *subject != want {
                    return false;
                }
            }
            if let Some(min) = query.min_value {
                if !record.has_value() || record.value < min {
                    return false;
                }
            }
            if query.delegated_only && record.record_delegate.is_none() {
                return false;
            }
            true
        })
        .map(|(rater, subject, record)| RecordMatch {
            rater,
            subject,
            record,
        })
        .collect();

    // Ledger iteration order is unspecified; sort for reproducibility.
    matches.sort_unstable_by_key(|m| (m.rater, m.subject));

    if let Some(limit) = query.limit {
        matches.truncate(limit);
    }

    matches
}

// ── Tests ─────────────────────────────────────────────────────────────────────
