//! Shared value types of the canonical model.
//!
//! These are the building blocks every resource variant is assembled from: codings and
//! codeable concepts for terminology, weak references between resources, periods and
//! quantities for temporal and measured values. Field names follow the wire vocabulary.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A code from a terminology system, with an optional human-readable display.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Coding {
    /// A fully coded value from a known terminology system.
    pub fn new(
        system: impl Into<String>,
        code: impl Into<String>,
        display: Option<String>,
    ) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            display,
        }
    }
}

/// A concept that may be coded, carry free text, or both.
///
/// Upstream records frequently carry only one of the two; the mappers' lenience policy
/// (drop a record only when *both* are missing) is expressed against this type.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    /// A concept carrying a single coding and optional fallback text.
    pub fn coded(coding: Coding, text: Option<String>) -> Self {
        Self {
            coding: vec![coding],
            text,
        }
    }

    /// A concept carrying free text only.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            coding: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// The primary (first) coding, when one exists.
    pub fn primary_coding(&self) -> Option<&Coding> {
        self.coding.first()
    }
}

/// A weak reference to another resource.
///
/// References are identity strings plus display text, never owning pointers: a summary
/// document refers to its subject, it does not own it. Participants that cannot be
/// resolved to an identity are represented by display text alone.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Reference {
    /// A resolved reference of the form `<Type>/<id>`.
    pub fn to(type_name: &str, id: &overblik_ident::ResourceId, display: Option<String>) -> Self {
        Self {
            reference: Some(format!("{}/{}", type_name, id)),
            display,
        }
    }

    /// A display-only reference for participants with no resolvable identity.
    pub fn display_only(display: impl Into<String>) -> Self {
        Self {
            reference: None,
            display: Some(display.into()),
        }
    }
}

/// A business identifier assigned by an upstream registry.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    pub value: String,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: value.into(),
        }
    }
}

/// An interval of absolute time, open at either end.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl Period {
    /// True when neither bound is set; such a period is omitted from the wire form.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// A measured amount with an optional unit.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Quantity {
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A postal address, reduced to the fields the organisation directory provides.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct Address {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(rename = "postalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// A human name in wire shape.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct HumanName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use overblik_ident::ResourceId;

    #[test]
    fn coding_omits_absent_fields_on_the_wire() {
        let coding = Coding::new("http://loinc.org", "60591-5", None);
        let json = serde_json::to_value(&coding).expect("serialise coding");
        assert_eq!(
            json,
            serde_json::json!({"system": "http://loinc.org", "code": "60591-5"})
        );
    }

    #[test]
    fn reference_to_builds_type_slash_id() {
        let id = ResourceId::parse("cond-1").expect("canonical id");
        let reference = Reference::to("Condition", &id, None);
        assert_eq!(reference.reference.as_deref(), Some("Condition/cond-1"));
    }

    #[test]
    fn display_only_reference_has_no_identity() {
        let reference = Reference::display_only("Dr. Holm");
        assert!(reference.reference.is_none());
        assert_eq!(reference.display.as_deref(), Some("Dr. Holm"));
    }

    #[test]
    fn text_only_concept_has_no_coding() {
        let concept = CodeableConcept::text_only("pollen allergy");
        assert!(concept.coding.is_empty());
        assert!(concept.primary_coding().is_none());
    }
}
