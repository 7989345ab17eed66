//! The trust ledger — caller-scoped storage of values and delegations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrustError};
use crate::principal::PrincipalId;

use super::record::{DefaultDelegation, TrustLevel, TrustRecord, UNKNOWN_TRUST};

/// In-memory trust state: one [`TrustRecord`] per (rater, subject) pair
/// and one optional [`DefaultDelegation`] per rater.
///
/// Every mutating operation takes the acting principal explicitly and is
/// rejected with `NotAuthorized` unless it matches the owner of the entry
/// being written. Reads are unrestricted. Failures are detected before any
/// state changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrustLedger {
    /// rater → subject → record.
    records: HashMap<PrincipalId, HashMap<PrincipalId, TrustRecord>>,
    /// rater → fallback delegation.
    defaults: HashMap<PrincipalId, DefaultDelegation>,
}

impl TrustLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Store `value` as `rater`'s explicit trust in `subject`, overwriting
    /// any prior value. The full `u8` range is accepted, including the
    /// reserved sentinels.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` unless `caller == rater`.
    pub fn set_value(
        &mut self,
        caller: &PrincipalId,
        rater: &PrincipalId,
        subject: &PrincipalId,
        value: TrustLevel,
    ) -> Result<()> {
        require_owner(caller, rater)?;

        let record = self.record_entry(rater, subject);
        record.value = value;
        record.updated_at = crate::time::now_micros();
        Ok(())
    }

    /// Store `delegate` as the principal `rater` defers to specifically for
    /// `subject`, overwriting any prior record-level delegate.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` unless `caller == rater`; `SelfDelegation` when
    /// `delegate == rater`.
    pub fn set_record_delegate(
        &mut self,
        caller: &PrincipalId,
        rater: &PrincipalId,
        subject: &PrincipalId,
        delegate: PrincipalId,
    ) -> Result<()> {
        require_owner(caller, rater)?;
        require_not_self(rater, &delegate)?;

        let record = self.record_entry(rater, subject);
        record.record_delegate = Some(delegate);
        record.updated_at = crate::time::now_micros();
        Ok(())
    }

    /// Store `delegate` as `rater`'s fallback for every subject without a
    /// record-level delegate, overwriting any prior default delegate.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` unless `caller == rater`; `SelfDelegation` when
    /// `delegate == rater`.
    pub fn set_default_delegate(
        &mut self,
        caller: &PrincipalId,
        rater: &PrincipalId,
        delegate: PrincipalId,
    ) -> Result<()> {
        require_owner(caller, rater)?;
        require_not_self(rater, &delegate)?;

        self.defaults.insert(
            rater.clone(),
            DefaultDelegation {
                default_delegate: Some(delegate),
                updated_at: crate::time::now_micros(),
            },
        );
        Ok(())
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    /// `rater`'s explicit trust in `subject`; [`UNKNOWN_TRUST`] if never set.
    pub fn read_value(&self, rater: &PrincipalId, subject: &PrincipalId) -> TrustLevel {
        self.record(rater, subject)
            .map(|r| r.value)
            .unwrap_or(UNKNOWN_TRUST)
    }

    /// The delegate `rater` defers to specifically for `subject`.
    pub fn read_record_delegate(
        &self,
        rater: &PrincipalId,
        subject: &PrincipalId,
    ) -> Option<&PrincipalId> {
        self.record(rater, subject)
            .and_then(|r| r.record_delegate.as_ref())
    }

    /// `rater`'s fallback delegate.
    pub fn read_default_delegate(&self, rater: &PrincipalId) -> Option<&PrincipalId> {
        self.defaults
            .get(rater)
            .and_then(|d| d.default_delegate.as_ref())
    }

    /// The full record for (rater, subject), if one was ever written.
    pub fn record(&self, rater: &PrincipalId, subject: &PrincipalId) -> Option<&TrustRecord> {
        self.records.get(rater).and_then(|per| per.get(subject))
    }

    /// Iterate every (rater, subject, record) triple in the ledger.
    ///
    /// Iteration order is unspecified; callers that need a stable order
    /// must sort (see [`crate::query`]).
    pub fn records(&self) -> impl Iterator<Item = (&PrincipalId, &PrincipalId, &TrustRecord)> {
        self.records.iter().flat_map(|(rater, per_subject)| {
            per_subject
                .iter()
                .map(move |(subject, record)| (rater, subject, record))
        })
    }

    /// Total number of (rater, subject) records stored.
    pub fn len(&self) -> usize {
        self.records.values().map(HashMap::len).sum()
    }

    /// `true` when no record has ever been written.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Fetch or lazily create the record for (rater, subject).
    fn record_entry(&mut self, rater: &PrincipalId, subject: &PrincipalId) -> &mut TrustRecord {
        self.records
            .entry(rater.clone())
            .or_default()
            .entry(subject.clone())
            .or_default()
    }
}

/// Reject writes to entries the caller does not own.
fn require_owner(caller: &PrincipalId, owner: &PrincipalId) -> Result<()> {
    if caller != owner {
        return Err(TrustError::NotAuthorized);
    }
    Ok(())
}

/// Reject delegation of a rater to itself, at either level.
fn require_not_self(rater: &PrincipalId, delegate: &PrincipalId) -> Result<()> {
    if delegate == rater {
        return Err(TrustError::SelfDelegation {
            rater: rater.to_string(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
