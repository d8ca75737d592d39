//! Vaccination register reply.

use serde::Deserialize;

/// Reply of the national vaccination register.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationReply {
    #[serde(default)]
    pub vaccinations: Vec<VaccinationRecord>,
}

/// One registered vaccination.
///
/// The register exposes three flags whose precedence determines the canonical status:
/// a negative consent beats an inactive marking, which beats an active marking.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationRecord {
    pub identifier: Option<String>,

    pub vaccine_name: Option<String>,

    /// WHO ATC classification code.
    pub atc_code: Option<String>,

    pub effectuated_at: Option<String>,

    pub negative_consent: Option<bool>,
    pub inactive: Option<bool>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_json;

    #[test]
    fn parses_vaccination_record() {
        let reply: VaccinationReply = from_json(
            r#"{
                "vaccinations": [{
                    "identifier": "DDV-55",
                    "vaccineName": "MFR",
                    "atcCode": "J07BD52",
                    "effectuatedAt": "2019-09-12",
                    "active": true
                }]
            }"#,
        )
        .expect("parse vaccination reply");

        let record = &reply.vaccinations[0];
        assert_eq!(record.vaccine_name.as_deref(), Some("MFR"));
        assert_eq!(record.active, Some(true));
        assert!(record.negative_consent.is_none());
    }

    #[test]
    fn empty_object_parses_to_no_vaccinations() {
        let reply: VaccinationReply = from_json("{}").expect("parse empty reply");
        assert!(reply.vaccinations.is_empty());
    }
}
