//! The deployed trust holder — ledger, lookup bounds, and administration
//! behind one operation surface.
//!
//! Mutating operations validate identity first, then invariants, and only
//! then touch state; a failed call leaves the holder unchanged. The
//! resolution query is read-only and open to any caller.

use serde::{Deserialize, Serialize};

use crate::admin::Administration;
use crate::error::{Result, TrustError};
use crate::governance::LookupBounds;
use crate::ledger::{TrustLedger, TrustLevel};
use crate::principal::PrincipalId;
use crate::resolve::{self, Resolution};

/// One deployed trust-holder instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustHolder {
    ledger: TrustLedger,
    bounds: LookupBounds,
    administration: Administration,
}

impl TrustHolder {
    // ── Deployment ────────────────────────────────────────────────────────────

    /// Deploy with an explicit attached value, mirroring hosts where calls
    /// can carry payment. The holder accepts none.
    ///
    /// # Errors
    ///
    /// `UnexpectedPayment` when `attached_value != 0`; `InvalidBounds`
    /// when `min_lookups == 0` or `min_lookups > max_lookups`.
    pub fn deploy(
        owner: PrincipalId,
        min_lookups: u32,
        max_lookups: u32,
        attached_value: u128,
    ) -> Result<Self> {
        if attached_value != 0 {
            return Err(TrustError::UnexpectedPayment {
                amount: attached_value,
            });
        }
        let bounds = LookupBounds::new(min_lookups, max_lookups)?;
        log::debug!("deployed trust holder: owner={owner}, lookups {min_lookups}..={max_lookups}");

        Ok(Self {
            ledger: TrustLedger::new(),
            bounds,
            administration: Administration::new(owner),
        })
    }

    /// Deploy without payment semantics.
    pub fn new(owner: PrincipalId, min_lookups: u32, max_lookups: u32) -> Result<Self> {
        Self::deploy(owner, min_lookups, max_lookups, 0)
    }

    // ── User operations ───────────────────────────────────────────────────────

    /// Record `caller`'s explicit trust value for `subject`.
    pub fn set_record_trust_value(
        &mut self,
        caller: &PrincipalId,
        subject: &PrincipalId,
        value: TrustLevel,
    ) -> Result<()> {
        self.ledger.set_value(caller, caller, subject, value)
    }

    /// Record the delegate `caller` defers to specifically for `subject`.
    pub fn set_record_trust_delegation(
        &mut self,
        caller: &PrincipalId,
        subject: &PrincipalId,
        delegate: PrincipalId,
    ) -> Result<()> {
        self.ledger
            .set_record_delegate(caller, caller, subject, delegate)
    }

    /// Record `caller`'s fallback delegate for all subjects.
    pub fn set_default_trust_delegation(
        &mut self,
        caller: &PrincipalId,
        delegate: PrincipalId,
    ) -> Result<()> {
        self.ledger.set_default_delegate(caller, caller, delegate)
    }

    /// Resolve `rater`'s effective trust in `subject`.
    ///
    /// Open to any caller, including on behalf of a rater other than the
    /// caller — a pure lookup, not an action taken as anyone.
    pub fn get_public_trust_value(
        &self,
        rater: &PrincipalId,
        subject: &PrincipalId,
        start_depth: u32,
        caller_max_depth: u32,
    ) -> Result<Resolution> {
        resolve::resolve(
            &self.ledger,
            &self.bounds,
            rater,
            subject,
            start_depth,
            caller_max_depth,
        )
    }

    // ── Owner operations ──────────────────────────────────────────────────────

    /// Raise the lookup floor. Owner-only; the floor never goes down.
    pub fn set_min_num_lookups(&mut self, caller: &PrincipalId, new_min: u32) -> Result<()> {
        self.administration.require_admin(caller)?;
        self.bounds.raise_min_lookups(new_min)?;
        log::debug!("min lookups raised to {new_min}");
        Ok(())
    }

    /// Move the lookup ceiling. Owner-only.
    pub fn set_max_num_lookups(&mut self, caller: &PrincipalId, new_max: u32) -> Result<()> {
        self.administration.require_admin(caller)?;
        self.bounds.set_max_lookups(new_max)?;
        log::debug!("max lookups set to {new_max}");
        Ok(())
    }

    /// Hand governance to `new_owner`. Owner-only.
    pub fn transfer_ownership(
        &mut self,
        caller: &PrincipalId,
        new_owner: PrincipalId,
    ) -> Result<()> {
        self.administration.transfer(caller, new_owner)
    }

    /// Clear the owner slot. Owner-only and irreversible: no further
    /// governance mutation is possible afterwards.
    pub fn renounce_ownership(&mut self, caller: &PrincipalId) -> Result<()> {
        self.administration.renounce(caller)
    }

    // ── Getters ───────────────────────────────────────────────────────────────

    /// The current owner, unless ownership has been renounced.
    pub fn owner(&self) -> Option<&PrincipalId> {
        self.administration.admin()
    }

    /// The current lookup floor.
    pub fn min_lookups(&self) -> u32 {
        self.bounds.min_lookups()
    }

    /// The current lookup ceiling.
    pub fn max_lookups(&self) -> u32 {
        self.bounds.max_lookups()
    }

    /// Read access to the underlying ledger, for queries and snapshots.
    pub fn ledger(&self) -> &TrustLedger {
        &self.ledger
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
