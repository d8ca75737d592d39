//! Demographics service → Patient.

use super::common::{non_blank, non_blank_owned};
use fhir::{codes, HumanName, Identifier, Patient, Resource};
use overblik_ident::ResourceId;
use upstream::DemographicsReply;

/// Maps the demographics reply to the subject patient.
///
/// Unlike the list-shaped categories this is zero-or-one: an absent reply, or a reply
/// without a patient record, maps to `None` and the caller falls back to an anonymous
/// subject context.
pub fn map_patient(reply: Option<&DemographicsReply>) -> Option<Resource> {
    let record = reply?.patient.as_ref()?;

    let family = non_blank_owned(record.family_name.as_deref());
    let given: Vec<String> = non_blank_owned(record.given_name.as_deref())
        .into_iter()
        .collect();
    let name = if family.is_some() || !given.is_empty() {
        vec![HumanName { family, given }]
    } else {
        Vec::new()
    };

    let national_id = non_blank(record.national_id.as_deref());

    Some(Resource::Patient(Patient {
        id: ResourceId::derive(national_id),
        identifier: national_id.map(|value| Identifier::new(codes::CPR, value)),
        name,
        birth_date: non_blank_owned(record.birth_date.as_deref()),
    }))
}
