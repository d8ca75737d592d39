//! Appointment service → Appointment.

use super::common::{non_blank, non_blank_owned, parse_instant};
use fhir::{Appointment, AppointmentStatus, Boundary, Reference, Resource};
use overblik_ident::ResourceId;
use upstream::{AppointmentRecord, AppointmentReply};

/// Maps one appointment service reply. An absent reply maps to an empty list.
pub fn map_appointments(reply: Option<&AppointmentReply>) -> Vec<Resource> {
    reply
        .map(|reply| {
            reply
                .appointments
                .iter()
                .filter_map(map_record)
                .collect()
        })
        .unwrap_or_default()
}

fn map_record(record: &AppointmentRecord) -> Option<Resource> {
    // The appointment's primary concept is its title; the service provides no coding.
    let Some(description) = non_blank_owned(record.title.as_deref()) else {
        tracing::debug!("skipping appointment record without a title");
        return None;
    };

    // Subject, performer and location arrive as display names only and stay weak.
    let participants = [
        record.patient_name.as_deref(),
        record.practitioner_name.as_deref(),
        record.location_name.as_deref(),
    ]
    .into_iter()
    .filter_map(|name| non_blank(name).map(Reference::display_only))
    .collect();

    Some(Resource::Appointment(Appointment {
        id: ResourceId::derive(non_blank(record.identifier.as_deref())),
        // No cancellation data is available upstream.
        status: AppointmentStatus::Booked,
        description: Some(description),
        start: parse_instant(record.start_time.as_deref(), Boundary::Start),
        end: parse_instant(record.end_time.as_deref(), Boundary::End),
        participants,
    }))
}
