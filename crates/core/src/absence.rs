//! Absence policy: an empty category becomes one sentinel resource.
//!
//! A category whose merged collection is empty, whether its feed returned nothing or the
//! retrieval layer handed in no payload at all, is represented by a single
//! sentinel resource carrying the category's reserved absence code, never by an empty
//! list. Each category is handled independently; one empty category has no effect on its
//! siblings.

use crate::category::Category;
use fhir::{
    codes, CodeableConcept, Coding, Condition, ConditionStatus, Immunization,
    ImmunizationStatus, MedicationStatement, MedicationStatementStatus, Period, Reference,
    Resource,
};
use overblik_ident::ResourceId;

/// Replaces an empty merged collection with the category's sentinel; identity otherwise.
///
/// Categories without a sentinel concept (Allergies, Results) are returned unchanged even
/// when empty; the summary assembler handles those cases structurally.
pub fn apply_absence_policy(
    merged: Vec<Resource>,
    category: Category,
    subject: &Reference,
) -> Vec<Resource> {
    if !merged.is_empty() {
        return merged;
    }
    match sentinel(category, subject) {
        Some(resource) => vec![resource],
        None => merged,
    }
}

/// Builds the sentinel resource asserting "no known data" for `category`.
///
/// The sentinel's identity derives from the absence code itself, so repeated runs over
/// the same (empty) upstream data produce the same reference strings.
pub fn sentinel(category: Category, subject: &Reference) -> Option<Resource> {
    let (code, display) = category.absence_code()?;
    let concept = CodeableConcept::coded(
        Coding::new(codes::ABSENT_UNKNOWN, code, Some(display.into())),
        Some(display.into()),
    );
    let id = ResourceId::derive(Some(code));

    let resource = match category {
        Category::Problems => Resource::Condition(Condition {
            id,
            clinical_status: ConditionStatus::Active,
            category: None,
            code: concept,
            subject: subject.clone(),
            onset: None,
            abatement: None,
        }),
        Category::Medications => Resource::MedicationStatement(MedicationStatement {
            id,
            status: MedicationStatementStatus::Unknown,
            medication: concept,
            subject: subject.clone(),
            effective_period: Period::default(),
            dosage: None,
            note: None,
        }),
        Category::Immunizations => Resource::Immunization(Immunization {
            id,
            status: ImmunizationStatus::NotDone,
            vaccine_code: concept,
            patient: subject.clone(),
            occurrence: None,
        }),
        Category::Allergies | Category::Results => return None,
    };
    Some(resource)
}
