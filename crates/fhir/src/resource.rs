//! The canonical resource sum type and its variants.
//!
//! Every upstream record that survives mapping becomes exactly one of these variants. The
//! type is an internally tagged union; dispatch happens on the explicit `resourceType`
//! tag, not on a class hierarchy. Each variant carries its own closed status
//! vocabulary with an `as_wire` string form, following the wire vocabulary one-to-one.
//!
//! Variants share a common surface through [`Resource`]: a synthetic identity, a
//! `<Type>/<id>` reference string, and a temporal anchor used by the period filter.

use crate::composition::Composition;
use crate::types::{Address, CodeableConcept, HumanName, Identifier, Period, Quantity, Reference};
use chrono::{DateTime, Utc};
use overblik_ident::ResourceId;
use serde::Serialize;

// ============================================================================
// Status vocabularies
// ============================================================================

/// Clinical status of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionStatus {
    Active,
    Resolved,
}

impl ConditionStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            ConditionStatus::Active => "active",
            ConditionStatus::Resolved => "resolved",
        }
    }
}

/// Status of an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationStatus {
    Final,
    Preliminary,
    Cancelled,
    Unknown,
}

impl ObservationStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            ObservationStatus::Final => "final",
            ObservationStatus::Preliminary => "preliminary",
            ObservationStatus::Cancelled => "cancelled",
            ObservationStatus::Unknown => "unknown",
        }
    }
}

/// Status of a medication statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MedicationStatementStatus {
    Active,
    Completed,
    Stopped,
    EnteredInError,
    Unknown,
}

impl MedicationStatementStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            MedicationStatementStatus::Active => "active",
            MedicationStatementStatus::Completed => "completed",
            MedicationStatementStatus::Stopped => "stopped",
            MedicationStatementStatus::EnteredInError => "entered-in-error",
            MedicationStatementStatus::Unknown => "unknown",
        }
    }
}

/// Status of an immunization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmunizationStatus {
    Completed,
    NotDone,
}

impl ImmunizationStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            ImmunizationStatus::Completed => "completed",
            ImmunizationStatus::NotDone => "not-done",
        }
    }
}

/// Status of an appointment. No cancellation data is available upstream, so the
/// vocabulary currently has a single member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentStatus {
    Booked,
}

impl AppointmentStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
        }
    }
}

macro_rules! serialize_as_wire {
    ($($status:ty),+ $(,)?) => {
        $(impl Serialize for $status {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_wire())
            }
        })+
    };
}

serialize_as_wire!(
    ConditionStatus,
    ObservationStatus,
    MedicationStatementStatus,
    ImmunizationStatus,
    AppointmentStatus,
);

// ============================================================================
// Resource variants
// ============================================================================

/// A diagnosis or health problem.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Condition {
    pub id: ResourceId,

    #[serde(rename = "clinicalStatus")]
    pub clinical_status: ConditionStatus,

    /// Diagnosis-type classification; attached only when the upstream record carries an
    /// explicit type tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    pub code: CodeableConcept,

    pub subject: Reference,

    #[serde(rename = "onsetDateTime", skip_serializing_if = "Option::is_none")]
    pub onset: Option<DateTime<Utc>>,

    #[serde(rename = "abatementDateTime", skip_serializing_if = "Option::is_none")]
    pub abatement: Option<DateTime<Utc>>,
}

/// A laboratory result.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Observation {
    pub id: ResourceId,

    pub status: ObservationStatus,

    pub code: CodeableConcept,

    pub subject: Reference,

    #[serde(rename = "effectiveDateTime", skip_serializing_if = "Option::is_none")]
    pub effective: Option<DateTime<Utc>>,

    /// Numeric result value; absent when the upstream table held a non-numeric sentinel.
    #[serde(rename = "valueQuantity", skip_serializing_if = "Option::is_none")]
    pub value_quantity: Option<Quantity>,

    /// Free-text result, used as the fallback when no numeric value could be extracted.
    #[serde(rename = "valueString", skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Reference>,
}

/// A statement that a medication is, or has been, taken.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MedicationStatement {
    pub id: ResourceId,

    pub status: MedicationStatementStatus,

    #[serde(rename = "medicationCodeableConcept")]
    pub medication: CodeableConcept,

    pub subject: Reference,

    #[serde(rename = "effectivePeriod", skip_serializing_if = "Period::is_empty")]
    pub effective_period: Period,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An administered (or explicitly declined) vaccination.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Immunization {
    pub id: ResourceId,

    pub status: ImmunizationStatus,

    #[serde(rename = "vaccineCode")]
    pub vaccine_code: CodeableConcept,

    pub patient: Reference,

    #[serde(rename = "occurrenceDateTime", skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<DateTime<Utc>>,
}

/// A planned healthcare appointment.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Appointment {
    pub id: ResourceId,

    pub status: AppointmentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,

    /// Subject, performer and location as display-only weak references.
    #[serde(rename = "participant", skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Reference>,
}

/// A healthcare organisation from the national directory.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Organization {
    pub id: ResourceId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// The subject of an aggregation run.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Patient {
    pub id: ResourceId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

// ============================================================================
// The tagged union
// ============================================================================

/// A canonical clinical resource.
///
/// Internally tagged on `resourceType`, matching the wire form exactly.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Condition(Condition),
    Observation(Observation),
    MedicationStatement(MedicationStatement),
    Immunization(Immunization),
    Appointment(Appointment),
    Organization(Organization),
    Patient(Patient),
    Composition(Composition),
}

impl Resource {
    /// The synthetic identity of this resource.
    pub fn id(&self) -> &ResourceId {
        match self {
            Resource::Condition(r) => &r.id,
            Resource::Observation(r) => &r.id,
            Resource::MedicationStatement(r) => &r.id,
            Resource::Immunization(r) => &r.id,
            Resource::Appointment(r) => &r.id,
            Resource::Organization(r) => &r.id,
            Resource::Patient(r) => &r.id,
            Resource::Composition(r) => &r.id,
        }
    }

    /// The wire name of this resource's variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::Condition(_) => "Condition",
            Resource::Observation(_) => "Observation",
            Resource::MedicationStatement(_) => "MedicationStatement",
            Resource::Immunization(_) => "Immunization",
            Resource::Appointment(_) => "Appointment",
            Resource::Organization(_) => "Organization",
            Resource::Patient(_) => "Patient",
            Resource::Composition(_) => "Composition",
        }
    }

    /// The `<Type>/<id>` reference string other resources use to point at this one.
    pub fn reference_string(&self) -> String {
        format!("{}/{}", self.type_name(), self.id())
    }

    /// A weak reference to this resource.
    pub fn as_reference(&self) -> Reference {
        Reference {
            reference: Some(self.reference_string()),
            display: None,
        }
    }

    /// The start of this resource's temporal anchor, when it has one.
    ///
    /// Semantics vary by variant: onset for conditions, effective time for observations,
    /// occurrence for immunizations, start for appointments, period start for medication
    /// statements. Organisations and patients have no temporal anchor.
    pub fn anchor_start(&self) -> Option<DateTime<Utc>> {
        match self {
            Resource::Condition(r) => r.onset,
            Resource::Observation(r) => r.effective,
            Resource::MedicationStatement(r) => r.effective_period.start,
            Resource::Immunization(r) => r.occurrence,
            Resource::Appointment(r) => r.start,
            Resource::Organization(_) | Resource::Patient(_) => None,
            Resource::Composition(r) => Some(r.date),
        }
    }

    /// True when this resource is a composition cover resource.
    pub fn is_composition(&self) -> bool {
        matches!(self, Resource::Composition(_))
    }
}
