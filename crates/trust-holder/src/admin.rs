//! Single-administrator governance — an explicit ownership field with
//! transfer and renounce, guarded by an identity check.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrustError};
use crate::principal::PrincipalId;

/// The administrator slot for governance operations.
///
/// Exactly one principal holds the slot at a time; renouncing clears it
/// permanently, after which every admin-gated operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administration {
    admin: Option<PrincipalId>,
}

impl Administration {
    /// Create with an initial administrator.
    pub fn new(admin: PrincipalId) -> Self {
        Self { admin: Some(admin) }
    }

    /// The current administrator, if the slot has not been renounced.
    pub fn admin(&self) -> Option<&PrincipalId> {
        self.admin.as_ref()
    }

    /// Reject callers that do not hold the slot.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` when `caller` is not the current administrator or
    /// the slot has been renounced.
    pub fn require_admin(&self, caller: &PrincipalId) -> Result<()> {
        match &self.admin {
            Some(admin) if admin == caller => Ok(()),
            _ => Err(TrustError::NotAuthorized),
        }
    }

    /// Hand the slot to `new_admin`. Admin-only.
    pub fn transfer(&mut self, caller: &PrincipalId, new_admin: PrincipalId) -> Result<()> {
        self.require_admin(caller)?;
        self.admin = Some(new_admin);
        Ok(())
    }

    /// Clear the slot. Admin-only and irreversible.
    pub fn renounce(&mut self, caller: &PrincipalId) -> Result<()> {
        self.require_admin(caller)?;
        self.admin = None;
        Ok(())
    }
}
