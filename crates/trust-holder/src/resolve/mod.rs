//! Resolution engine — bounded delegation-chain traversal.
//!
//! Given an asking rater and a subject, the engine walks the delegation
//! chain recorded in the ledger and produces the effective trust value,
//! the principal that produced it, and the number of hops taken.

pub mod engine;
pub mod types;

pub use engine::resolve;
pub use types::Resolution;
