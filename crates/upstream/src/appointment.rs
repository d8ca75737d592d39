//! Appointment service reply.

use serde::Deserialize;

/// Reply of the appointment service.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentReply {
    #[serde(default)]
    pub appointments: Vec<AppointmentRecord>,
}

/// One planned appointment.
///
/// The service exposes no cancellation data, so every appointment it returns is booked.
/// Participants arrive as display names only, never as resolvable identities.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub identifier: Option<String>,

    pub title: Option<String>,

    pub start_time: Option<String>,
    pub end_time: Option<String>,

    pub location_name: Option<String>,
    pub practitioner_name: Option<String>,
    pub patient_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_json;

    #[test]
    fn parses_appointment_record() {
        let reply: AppointmentReply = from_json(
            r#"{
                "appointments": [{
                    "identifier": "APT-9",
                    "title": "Kontrol, diabetes",
                    "startTime": "2024-02-05T09:30:00",
                    "endTime": "2024-02-05T10:00:00",
                    "locationName": "Endokrinologisk Ambulatorium",
                    "practitionerName": "Dr. Holm"
                }]
            }"#,
        )
        .expect("parse appointment reply");

        let record = &reply.appointments[0];
        assert_eq!(record.title.as_deref(), Some("Kontrol, diabetes"));
        assert_eq!(record.location_name.as_deref(), Some("Endokrinologisk Ambulatorium"));
    }

    #[test]
    fn empty_object_parses_to_no_appointments() {
        let reply: AppointmentReply = from_json("{}").expect("parse empty reply");
        assert!(reply.appointments.is_empty());
    }
}
