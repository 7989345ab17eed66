//! TrustHolder — delegated trust ratings between principals.
//!
//! Any principal can record a trust rating for another principal, or
//! delegate the question "what do I think of this principal" to a
//! different principal. The resolution engine walks the delegation chain
//! under strict precedence rules — explicit value, then record-level
//! delegate, then default delegate — with owner-governed depth limits.
//! The depth bound is the cycle-safety mechanism: delegation edges may
//! form arbitrary graphs, and a too-deep walk fails instead of looping.

pub mod admin;
pub mod error;
pub mod governance;
pub mod holder;
pub mod ledger;
pub mod principal;
pub mod query;
pub mod resolve;
pub mod storage;
pub mod time;

// Re-export primary types
pub use admin::Administration;
pub use error::{Result, TrustError};
pub use governance::LookupBounds;
pub use holder::TrustHolder;
pub use ledger::{
    DefaultDelegation, TrustLedger, TrustLevel, TrustRecord, MAX_TRUST, MIN_TRUST, TRUST_AS_SELF,
    UNKNOWN_TRUST,
};
pub use principal::PrincipalId;
pub use query::{query_records, RecordMatch, RecordQuery};
pub use resolve::{resolve, Resolution};
