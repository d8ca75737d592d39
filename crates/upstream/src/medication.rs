//! National medication record reply.

use serde::Deserialize;

/// Reply of the national medication record.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationReply {
    #[serde(default)]
    pub drug_medications: Vec<DrugMedication>,
}

/// One drug medication order.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugMedication {
    pub identifier: Option<String>,

    /// Upstream status word: `aktiv`, `afsluttet`, `seponeret` or `fejlregistreret`.
    pub status: Option<String>,

    pub drug: Option<Drug>,

    pub dosage_text: Option<String>,
    pub instruction_text: Option<String>,

    pub treatment_start: Option<String>,

    /// Two alternative end fields; whichever is populated first wins.
    pub treatment_end: Option<String>,
    pub discontinued_at: Option<String>,
}

/// The drug of a medication order.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    pub name: Option<String>,

    /// WHO ATC classification code.
    pub atc_code: Option<String>,
    pub atc_text: Option<String>,

    pub form: Option<String>,
}
