//! Coding-system URIs and reserved codes used across the canonical model.
//!
//! These values match the target wire vocabulary one-to-one so that serialising a bundle
//! for an outward API is a mechanical projection.

/// LOINC, used for document type and section codes.
pub const LOINC: &str = "http://loinc.org";

/// Absent/unknown code system carrying the reserved absence-sentinel codes.
pub const ABSENT_UNKNOWN: &str = "http://hl7.org/fhir/uv/ips/CodeSystem/absent-unknown-uv-ips";

/// List-empty-reason code system, used for sections that have no upstream feed at all.
pub const LIST_EMPTY_REASON: &str = "http://terminology.hl7.org/CodeSystem/list-empty-reason";

/// Danish SKS classification (diagnosis codes).
pub const SKS: &str = "urn:oid:1.2.208.176.2.4";

/// NPU terminology (laboratory analysis codes).
pub const NPU: &str = "urn:oid:1.2.208.176.2.1";

/// WHO ATC classification (drugs and vaccines).
pub const ATC: &str = "http://www.whocc.no/atc";

/// SOR, the Danish health organisation registry.
pub const SOR: &str = "urn:oid:1.2.208.176.1.1";

/// CPR, the Danish civil registration number system.
pub const CPR: &str = "urn:oid:1.2.208.176.1.2";

/// LOINC document type code for a patient summary.
pub const DOC_TYPE_PATIENT_SUMMARY: &str = "60591-5";

/// Reserved absence code: the problem list is known to be empty.
pub const NO_KNOWN_PROBLEMS: &str = "no-known-problems";

/// Reserved absence code: the medication list is known to be empty.
pub const NO_KNOWN_MEDICATIONS: &str = "no-known-medications";

/// Reserved absence code: no immunization information is available.
pub const NO_IMMUNIZATION_INFO: &str = "no-immunization-info";

/// Empty-reason code for a section whose upstream feed does not exist.
pub const EMPTY_REASON_UNAVAILABLE: &str = "unavailable";
