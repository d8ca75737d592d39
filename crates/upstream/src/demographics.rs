//! Demographics service reply.

use serde::Deserialize;

/// Reply of the demographics service.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsReply {
    pub patient: Option<PatientRecord>,
}

/// The demographic record of the requested person.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Civil registration number; the natural key for the patient identity.
    pub national_id: Option<String>,

    pub given_name: Option<String>,
    pub family_name: Option<String>,

    pub birth_date: Option<String>,
}
