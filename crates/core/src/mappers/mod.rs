//! Resource mappers: one module per upstream source.
//!
//! Each mapper converts one source's reply into canonical resources. The contract is the
//! same across categories:
//!
//! - an absent reply (`None`) maps to an empty list; the absence policy, not the mapper,
//!   decides what an empty category means;
//! - a record lacking both a machine code and a display text for its primary concept is
//!   dropped silently (lenience policy, logged at `debug`, never an error);
//! - status translation is total, with unrecognised or absent raw statuses mapping to the
//!   variant's unknown-equivalent rather than failing;
//! - an unparseable date is tolerated and the field omitted;
//! - synthetic identities prefer the record's natural key and fall back to a random token.

mod common;

pub mod appointment;
pub mod condition;
pub mod immunization;
pub mod medication;
pub mod observation;
pub mod organization;
pub mod patient;

pub use appointment::map_appointments;
pub use condition::map_conditions;
pub use immunization::map_immunizations;
pub use medication::map_medications;
pub use observation::map_observations;
pub use organization::map_organizations;
pub use patient::map_patient;
