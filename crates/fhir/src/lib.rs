//! FHIR-aligned canonical resource model for the overview aggregation core.
//!
//! This crate defines the *output* side of the aggregation engine: the canonical clinical
//! resources that upstream records are normalised into, the bundle container used for
//! search-style collections and the patient summary document, and the composition cover
//! resource that indexes a summary's sections.
//!
//! This crate focuses on:
//! - semantic alignment with the JSON clinical-bundle wire vocabulary (field names and
//!   coding-system URIs map one-to-one, so the outward API layer's serialisation is a
//!   mechanical projection)
//! - structural invariants that hold regardless of upstream data quality (a bundle's
//!   `total` always equals its entry count)
//! - normalisation of heterogeneous upstream date/time strings into absolute instants
//!
//! Mapping from upstream payloads lives in `overblik-core`; this crate carries no
//! knowledge of any individual source.

pub mod bundle;
pub mod codes;
pub mod composition;
pub mod datetime;
pub mod resource;
pub mod types;

// Re-export facades
pub use bundle::{Bundle, BundleEntry, BundleType};
pub use composition::{Composition, CompositionStatus, Section};
pub use datetime::{normalize, Boundary, InvalidDateFormat};
pub use resource::{
    Appointment, AppointmentStatus, Condition, ConditionStatus, Immunization,
    ImmunizationStatus, MedicationStatement, MedicationStatementStatus, Observation,
    ObservationStatus, Organization, Patient, Resource,
};
pub use types::{
    Address, CodeableConcept, Coding, HumanName, Identifier, Period, Quantity, Reference,
};

// Re-export the shared identity token
pub use overblik_ident::ResourceId;
