//! National medication record → MedicationStatement.

use super::common::{concept, non_blank, non_blank_owned, parse_instant};
use fhir::{
    codes, Boundary, MedicationStatement, MedicationStatementStatus, Period, Reference, Resource,
};
use overblik_ident::ResourceId;
use upstream::{DrugMedication, MedicationReply};

/// Maps one medication record reply. An absent reply maps to an empty list.
pub fn map_medications(reply: Option<&MedicationReply>, subject: &Reference) -> Vec<Resource> {
    reply
        .map(|reply| {
            reply
                .drug_medications
                .iter()
                .filter_map(|order| map_order(order, subject))
                .collect()
        })
        .unwrap_or_default()
}

fn map_order(order: &DrugMedication, subject: &Reference) -> Option<Resource> {
    let drug = order.drug.as_ref();
    let Some(medication) = concept(
        codes::ATC,
        drug.and_then(|d| d.atc_code.as_deref()),
        drug.and_then(|d| non_blank(d.name.as_deref()).or_else(|| non_blank(d.atc_text.as_deref()))),
    ) else {
        tracing::debug!("skipping medication order without drug code or name");
        return None;
    };

    // Two alternative end fields; the first populated one wins.
    let end_raw = non_blank(order.treatment_end.as_deref())
        .or_else(|| non_blank(order.discontinued_at.as_deref()));

    Some(Resource::MedicationStatement(MedicationStatement {
        id: ResourceId::derive(non_blank(order.identifier.as_deref())),
        status: translate_status(order.status.as_deref()),
        medication,
        subject: subject.clone(),
        effective_period: Period {
            start: parse_instant(order.treatment_start.as_deref(), Boundary::Start),
            end: parse_instant(end_raw, Boundary::End),
        },
        dosage: non_blank_owned(order.dosage_text.as_deref()),
        note: non_blank_owned(order.instruction_text.as_deref()),
    }))
}

/// Total translation of the upstream status vocabulary; anything unrecognised is unknown.
fn translate_status(raw: Option<&str>) -> MedicationStatementStatus {
    match non_blank(raw) {
        Some("aktiv") => MedicationStatementStatus::Active,
        Some("afsluttet") => MedicationStatementStatus::Completed,
        Some("seponeret") => MedicationStatementStatus::Stopped,
        Some("fejlregistreret") => MedicationStatementStatus::EnteredInError,
        _ => MedicationStatementStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upstream::Drug;

    fn subject() -> Reference {
        Reference {
            reference: Some("Patient/pt-1".into()),
            display: None,
        }
    }

    fn order() -> DrugMedication {
        DrugMedication {
            identifier: Some("FMK-100".into()),
            status: Some("aktiv".into()),
            drug: Some(Drug {
                name: Some("Amlodipin".into()),
                atc_code: Some("C08CA01".into()),
                atc_text: Some("Amlodipine".into()),
                form: Some("tablet".into()),
            }),
            dosage_text: Some("1 tablet morgen".into()),
            instruction_text: None,
            treatment_start: Some("2022-03".into()),
            treatment_end: None,
            discontinued_at: None,
        }
    }

    fn reply(orders: Vec<DrugMedication>) -> MedicationReply {
        MedicationReply {
            drug_medications: orders,
        }
    }

    #[test]
    fn maps_coded_drug_with_dosage() {
        let mapped = map_medications(Some(&reply(vec![order()])), &subject());
        let Resource::MedicationStatement(statement) = &mapped[0] else {
            panic!("expected a medication statement");
        };
        let coding = statement.medication.primary_coding().expect("ATC coding");
        assert_eq!(coding.code.as_deref(), Some("C08CA01"));
        assert_eq!(statement.dosage.as_deref(), Some("1 tablet morgen"));
        assert_eq!(statement.status, MedicationStatementStatus::Active);
        // Partial start date expands to the start of its range.
        assert_eq!(
            statement.effective_period.start,
            Some("2022-03-01T00:00:00Z".parse().expect("fixture instant"))
        );
    }

    #[test]
    fn first_populated_end_field_wins() {
        let mut both = order();
        both.treatment_end = Some("2023-06-30".into());
        both.discontinued_at = Some("2024-01-15".into());

        let mut only_discontinued = order();
        only_discontinued.discontinued_at = Some("2024-01-15".into());

        let mapped = map_medications(Some(&reply(vec![both, only_discontinued])), &subject());
        let ends: Vec<_> = mapped
            .iter()
            .map(|resource| match resource {
                Resource::MedicationStatement(s) => s.effective_period.end,
                _ => panic!("expected a medication statement"),
            })
            .collect();
        assert_eq!(ends[0], Some("2023-06-30T23:59:59Z".parse().expect("fixture instant")));
        assert_eq!(ends[1], Some("2024-01-15T23:59:59Z".parse().expect("fixture instant")));
    }

    #[test]
    fn drug_name_alone_is_enough() {
        let mut uncoded = order();
        uncoded.drug = Some(Drug {
            name: Some("Panodil".into()),
            ..Drug::default()
        });
        let mapped = map_medications(Some(&reply(vec![uncoded])), &subject());
        let Resource::MedicationStatement(statement) = &mapped[0] else {
            panic!("expected a medication statement");
        };
        assert!(statement.medication.primary_coding().is_none());
        assert_eq!(statement.medication.text.as_deref(), Some("Panodil"));
    }

    #[test]
    fn order_without_drug_is_dropped() {
        let mut drugless = order();
        drugless.drug = None;
        assert!(map_medications(Some(&reply(vec![drugless])), &subject()).is_empty());
    }

    #[test]
    fn status_translation_is_total() {
        assert_eq!(translate_status(Some("seponeret")), MedicationStatementStatus::Stopped);
        assert_eq!(
            translate_status(Some("fejlregistreret")),
            MedicationStatementStatus::EnteredInError
        );
        assert_eq!(translate_status(Some("??")), MedicationStatementStatus::Unknown);
        assert_eq!(translate_status(None), MedicationStatementStatus::Unknown);
    }

    #[test]
    fn absent_reply_maps_to_empty_list() {
        assert!(map_medications(None, &subject()).is_empty());
    }
}
