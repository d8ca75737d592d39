//! Synthetic resource identity for the overview aggregation core.
//!
//! Every canonical resource assembled by this system carries a synthetic identity that is
//! embedded into reference strings (`Condition/<id>`, section entry references, and so on).
//! To keep those references well-formed regardless of what the upstream sources send, the
//! identity is a *canonical token*:
//!
//! - Length: 1 to 64 characters
//! - Characters: `a-z`, `0-9` and `-` only
//! - Never starts or ends with `-`
//!
//! This module provides:
//! - A wrapper type ([`ResourceId`]) that *guarantees* the canonical form once constructed.
//! - A single derivation function ([`ResourceId::derive`]) shared by every mapper: prefer a
//!   normalised upstream natural key (order id, record id, organisation number), fall back
//!   to a random token when no key exists.
//!
//! Deriving from a natural key keeps identities stable across repeated aggregation runs for
//! the same upstream data; the random fallback keeps them unique within one run.

mod token;

// Re-export public types
pub use token::ResourceId;

/// Error type for identity operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identity operations.
pub type IdentResult<T> = Result<T, IdentError>;
