//! Diagnosis feed reply.
//!
//! Two independent feeds deliver diagnoses in this shape: the hospital record feed and the
//! general-practitioner feed. Both are mapped separately and merged afterwards; the merge
//! layer does not collapse entries that both feeds report.

use serde::Deserialize;

/// Reply of a diagnosis feed.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReply {
    #[serde(default)]
    pub diagnoses: Vec<DiagnosisRecord>,
}

/// One reported diagnosis.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRecord {
    pub record_id: Option<String>,

    /// SKS diagnosis code.
    pub code: Option<String>,
    pub code_text: Option<String>,

    /// Explicit diagnosis-type tag (e.g. `A` for action diagnosis); most records omit it.
    pub diagnosis_type: Option<String>,

    pub from_date: Option<String>,
    pub to_date: Option<String>,

    pub reported_by: Option<String>,
}
