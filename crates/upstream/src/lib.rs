//! Upstream payload boundary for the overview aggregation core.
//!
//! Each module models the deserialized reply of one independent upstream source: the lab
//! result service, the two diagnosis feeds, the national medication record, the vaccination
//! register, the appointment service, the organisation directory, and the demographics
//! service. These shapes are owned by the upstream systems, not by us, so every field is
//! optional and unknown fields are tolerated: a reply must deserialize even when a source
//! adds fields or leaves most of a record blank. Semantic problems (a record without a
//! usable concept, an unparseable date) are NOT errors at this boundary; the mappers in
//! `overblik-core` apply the lenience policy record by record.
//!
//! The only error this crate produces is a structural one: the payload text is not valid
//! JSON or does not fit the reply shape at all. [`from_json`] surfaces a best-effort path
//! (e.g. `orders[0].resultTable`) to the failing field.

pub mod appointment;
pub mod demographics;
pub mod diagnosis;
pub mod labs;
pub mod medication;
pub mod organization;
pub mod vaccination;

pub use appointment::{AppointmentRecord, AppointmentReply};
pub use demographics::{DemographicsReply, PatientRecord};
pub use diagnosis::{DiagnosisRecord, DiagnosisReply};
pub use labs::{LabOrder, LabReply, ResultTable};
pub use medication::{Drug, DrugMedication, MedicationReply};
pub use organization::{OrganizationRecord, OrganizationReply};
pub use vaccination::{VaccinationRecord, VaccinationReply};

/// Errors returned by the `upstream` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream payload schema mismatch at {path}: {message}")]
    Parse { path: String, message: String },
}

/// Result type for upstream payload operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Deserializes one upstream reply from JSON text.
///
/// # Errors
///
/// Returns [`UpstreamError::Parse`] with the path to the failing field when the text is
/// not valid JSON or does not structurally match the reply shape.
pub fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> UpstreamResult<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let path = if path.is_empty() || path == "." {
            "<root>".to_owned()
        } else {
            path
        };
        UpstreamError::Parse {
            path,
            message: err.into_inner().to_string(),
        }
    })
}
