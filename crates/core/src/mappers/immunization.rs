//! Vaccination register → Immunization.

use super::common::{concept, non_blank, parse_instant};
use fhir::{codes, Boundary, Immunization, ImmunizationStatus, Reference, Resource};
use overblik_ident::ResourceId;
use upstream::{VaccinationRecord, VaccinationReply};

/// Maps one vaccination register reply. An absent reply maps to an empty list.
pub fn map_immunizations(reply: Option<&VaccinationReply>, subject: &Reference) -> Vec<Resource> {
    reply
        .map(|reply| {
            reply
                .vaccinations
                .iter()
                .filter_map(|record| map_record(record, subject))
                .collect()
        })
        .unwrap_or_default()
}

fn map_record(record: &VaccinationRecord, subject: &Reference) -> Option<Resource> {
    let Some(vaccine_code) = concept(
        codes::ATC,
        record.atc_code.as_deref(),
        record.vaccine_name.as_deref(),
    ) else {
        tracing::debug!("skipping vaccination record without code or name");
        return None;
    };

    Some(Resource::Immunization(Immunization {
        id: ResourceId::derive(non_blank(record.identifier.as_deref())),
        status: translate_status(record),
        vaccine_code,
        patient: subject.clone(),
        occurrence: parse_instant(record.effectuated_at.as_deref(), Boundary::Start),
    }))
}

/// Flag precedence: negative consent, then the inactive marking. Everything else is
/// completed, whether the active flag is set explicitly or the record is unflagged.
fn translate_status(record: &VaccinationRecord) -> ImmunizationStatus {
    if record.negative_consent == Some(true) || record.inactive == Some(true) {
        ImmunizationStatus::NotDone
    } else {
        ImmunizationStatus::Completed
    }
}
