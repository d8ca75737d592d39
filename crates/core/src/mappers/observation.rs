//! Lab result service → Observation.

use super::common::{concept, non_blank, non_blank_owned, parse_instant};
use fhir::{codes, Boundary, Observation, ObservationStatus, Quantity, Reference, Resource};
use overblik_ident::ResourceId;
use upstream::labs::{UNIT_COLUMN, VALUE_COLUMN};
use upstream::{LabOrder, LabReply, ResultTable};

/// Result-table marker for an analysis that detected nothing; carries no numeric value.
const NOT_DETECTED: &str = "Ikke påvist";

/// Maps one lab service reply. An absent reply maps to an empty list.
pub fn map_observations(reply: Option<&LabReply>, subject: &Reference) -> Vec<Resource> {
    reply
        .map(|reply| {
            reply
                .orders
                .iter()
                .filter_map(|order| map_order(order, subject))
                .collect()
        })
        .unwrap_or_default()
}

fn map_order(order: &LabOrder, subject: &Reference) -> Option<Resource> {
    let Some(code) = concept(
        codes::NPU,
        order.analysis_code.as_deref(),
        order.analysis_name.as_deref(),
    ) else {
        tracing::debug!("skipping lab order without analysis code or name");
        return None;
    };

    let (value_quantity, value_string) = extract_value(order.result_table.as_ref());

    // Natural key preference: order id, accession id, requisition id.
    let natural_key = non_blank(order.order_id.as_deref())
        .or_else(|| non_blank(order.accession_number.as_deref()))
        .or_else(|| non_blank(order.requisition_id.as_deref()));

    Some(Resource::Observation(Observation {
        id: ResourceId::derive(natural_key),
        status: translate_status(order.status.as_deref()),
        code,
        subject: subject.clone(),
        effective: parse_instant(order.observation_time.as_deref(), Boundary::Start),
        value_quantity,
        value_string,
        performer: non_blank_owned(order.laboratory.as_deref()).map(Reference::display_only),
    }))
}

/// Total translation of the upstream status vocabulary; anything unrecognised is unknown.
fn translate_status(raw: Option<&str>) -> ObservationStatus {
    match non_blank(raw) {
        Some("endelig") => ObservationStatus::Final,
        Some("foreløbig") => ObservationStatus::Preliminary,
        Some("annulleret") => ObservationStatus::Cancelled,
        _ => ObservationStatus::Unknown,
    }
}

/// Reads the result value from the fixed column of the first data row.
///
/// A numeric cell becomes a quantity with the unit column attached; the not-detected
/// sentinel and any other non-numeric cell fall back to a free-text value.
fn extract_value(table: Option<&ResultTable>) -> (Option<Quantity>, Option<String>) {
    let Some(raw) = table.and_then(|t| t.first_data_cell(VALUE_COLUMN)).map(str::trim) else {
        return (None, None);
    };
    if raw.is_empty() {
        return (None, None);
    }

    if raw != NOT_DETECTED {
        if let Some(value) = parse_decimal(raw) {
            let unit = table
                .and_then(|t| t.first_data_cell(UNIT_COLUMN))
                .and_then(|u| non_blank(Some(u)))
                .map(str::to_owned);
            return (Some(Quantity { value, unit }), None);
        }
    }

    (None, Some(raw.to_owned()))
}

/// Parses a decimal cell, accepting the Danish decimal comma.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse().ok()
}
