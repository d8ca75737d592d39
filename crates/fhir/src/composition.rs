//! The composition cover resource of a summary document.
//!
//! A summary document's first entry is always a composition: a structured index that
//! enumerates one section per clinical category and refers to every other entry of the
//! document by identity. The referential-integrity invariant between sections and entries
//! is enforced by the assembler in `overblik-core`; this module only defines the shape.

use crate::codes;
use crate::types::{CodeableConcept, Coding, Reference};
use chrono::{DateTime, Utc};
use overblik_ident::ResourceId;
use serde::Serialize;

/// Status of a composition. Assembled summaries are always complete documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositionStatus {
    Final,
}

impl CompositionStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            CompositionStatus::Final => "final",
        }
    }
}

impl Serialize for CompositionStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

/// One section of a composition: a coded category plus the references of every resource
/// placed in that category.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Section {
    pub title: String,

    pub code: CodeableConcept,

    #[serde(rename = "entry", skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Reference>,

    /// Set only for categories with no upstream feed at all; categories whose feed
    /// returned nothing carry an absence sentinel entry instead.
    #[serde(rename = "emptyReason", skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<CodeableConcept>,
}

impl Section {
    /// A section listing the given entry references.
    pub fn with_entries(
        title: impl Into<String>,
        code: CodeableConcept,
        entries: Vec<Reference>,
    ) -> Self {
        Self {
            title: title.into(),
            code,
            entries,
            empty_reason: None,
        }
    }

    /// An empty section marked with the reason no data can exist for it.
    pub fn unavailable(title: impl Into<String>, code: CodeableConcept) -> Self {
        Self {
            title: title.into(),
            code,
            entries: Vec::new(),
            empty_reason: Some(CodeableConcept::coded(
                Coding::new(
                    codes::LIST_EMPTY_REASON,
                    codes::EMPTY_REASON_UNAVAILABLE,
                    Some("Unavailable".into()),
                ),
                None,
            )),
        }
    }
}

/// The cover resource of a summary document.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Composition {
    pub id: ResourceId,

    pub status: CompositionStatus,

    /// Document type coding (LOINC patient summary).
    #[serde(rename = "type")]
    pub doc_type: CodeableConcept,

    pub subject: Reference,

    pub date: DateTime<Utc>,

    pub title: String,

    #[serde(rename = "section")]
    pub sections: Vec<Section>,
}

impl Composition {
    /// A new patient summary cover resource with no sections yet.
    pub fn patient_summary(
        id: ResourceId,
        subject: Reference,
        date: DateTime<Utc>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status: CompositionStatus::Final,
            doc_type: CodeableConcept::coded(
                Coding::new(
                    codes::LOINC,
                    codes::DOC_TYPE_PATIENT_SUMMARY,
                    Some("Patient summary Document".into()),
                ),
                None,
            ),
            subject,
            date,
            title: title.into(),
            sections: Vec::new(),
        }
    }
}
