//! Diagnosis feed → Condition.

use super::common::{concept, non_blank, parse_instant};
use fhir::{codes, Boundary, CodeableConcept, Condition, ConditionStatus, Reference, Resource};
use overblik_ident::ResourceId;
use upstream::{DiagnosisRecord, DiagnosisReply};

/// Maps one diagnosis feed reply. An absent reply maps to an empty list.
pub fn map_conditions(reply: Option<&DiagnosisReply>, subject: &Reference) -> Vec<Resource> {
    reply
        .map(|reply| {
            reply
                .diagnoses
                .iter()
                .filter_map(|record| map_record(record, subject))
                .collect()
        })
        .unwrap_or_default()
}

fn map_record(record: &DiagnosisRecord, subject: &Reference) -> Option<Resource> {
    let Some(code) = concept(
        codes::SKS,
        record.code.as_deref(),
        record.code_text.as_deref(),
    ) else {
        tracing::debug!("skipping diagnosis record without code or text");
        return None;
    };

    // Resolved exactly when an end date is present and non-blank.
    let clinical_status = if non_blank(record.to_date.as_deref()).is_some() {
        ConditionStatus::Resolved
    } else {
        ConditionStatus::Active
    };

    // Classification is attached only when the feed tagged the record explicitly.
    let category = non_blank(record.diagnosis_type.as_deref()).map(CodeableConcept::text_only);

    Some(Resource::Condition(Condition {
        id: ResourceId::derive(non_blank(record.record_id.as_deref())),
        clinical_status,
        category,
        code,
        subject: subject.clone(),
        onset: parse_instant(record.from_date.as_deref(), Boundary::Start),
        abatement: parse_instant(record.to_date.as_deref(), Boundary::End),
    }))
}
