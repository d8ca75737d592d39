//! # Overblik Core
//!
//! Normalisation and aggregation engine for the cross-source patient overview.
//!
//! This crate contains the pure, synchronous heart of the system:
//! - Resource mappers that convert one upstream reply shape into canonical resources
//! - The merge layer combining independently mapped sources of one category
//! - The absence policy that turns an empty category into a single sentinel resource
//! - The summary assembler producing a document bundle with a composition cover
//! - The collection builder and period filter for single-category queries
//!
//! Nothing here performs I/O, suspends, or touches shared mutable state: inputs are
//! already-fetched upstream payloads (fetched concurrently by the retrieval layer and
//! joined before assembly), outputs are newly constructed collections. A failed or
//! timed-out upstream fetch is handed in as `None` and degrades to the absence policy;
//! one category's failure never fails the whole assembly.
//!
//! **No transport concerns**: authenticated HTTP calls, endpoint routing and wire
//! serialisation belong to the surrounding service, not here.

pub mod absence;
pub mod category;
pub mod collection;
pub mod mappers;
pub mod merge;
pub mod summary;

pub use absence::apply_absence_policy;
pub use category::Category;
pub use collection::{build_collection, filter_by_period};
pub use merge::merge;
pub use summary::{assemble, CategorizedResources, PatientContext};

/// Errors produced by the aggregation engine.
///
/// Per-record problems are not represented here: an unusable record is dropped from its
/// category and an unparseable date is omitted from its field. The only fatal condition
/// is an internal invariant failure of the summary assembler, which indicates a logic
/// defect and must never be swallowed.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("summary document integrity violated: {0}")]
    ReferentialIntegrity(String),
}

/// Result type for aggregation operations.
pub type AggregateResult<T> = Result<T, AggregateError>;
