//! Error types for TrustHolder.
//!
//! All errors are strongly typed, detected before any state is mutated,
//! and propagated without panicking.

/// Trust error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    #[error("Principal cannot delegate to itself: {rater}")]
    SelfDelegation { rater: String },

    #[error("Lookup depth {depth} exceeds ceiling {ceiling}")]
    DepthExceeded { depth: u32, ceiling: u32 },

    #[error("Invalid lookup bounds: min {min_lookups} must be at least 1 and at most max {max_lookups}")]
    InvalidBounds { min_lookups: u32, max_lookups: u32 },

    #[error("Lookup floor may only rise: current {current}, requested {requested}")]
    NotMonotonic { current: u32, requested: u32 },

    #[error("Caller is not authorized for this operation")]
    NotAuthorized,

    #[error("Operation accepts no payment, got {amount}")]
    UnexpectedPayment { amount: u128 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, TrustError>;
