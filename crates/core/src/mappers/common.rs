//! Helpers shared by every mapper.

use fhir::{normalize, Boundary, CodeableConcept, Coding};
use chrono::{DateTime, Utc};

/// Trims `value` and returns it only when something is left.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Owned variant of [`non_blank`] for fields that move into a resource.
pub(crate) fn non_blank_owned(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_owned)
}

/// Builds the primary concept of a record, applying the lenience gate.
///
/// Returns `None` when both the machine code and the display text are blank; the record
/// is then dropped from its category. A blank code with a populated text yields a
/// text-only concept; a populated code is attached to `system`.
pub(crate) fn concept(
    system: &str,
    code: Option<&str>,
    text: Option<&str>,
) -> Option<CodeableConcept> {
    let code = non_blank(code);
    let text = non_blank(text);
    match (code, text) {
        (Some(code), text) => Some(CodeableConcept::coded(
            Coding::new(system, code, text.map(str::to_owned)),
            text.map(str::to_owned),
        )),
        (None, Some(text)) => Some(CodeableConcept::text_only(text)),
        (None, None) => None,
    }
}

/// Parses an upstream date field, tolerating failure.
///
/// A blank field is simply absent; a populated field that matches no accepted pattern is
/// logged at `debug` and omitted, per the tolerated-failure policy.
pub(crate) fn parse_instant(raw: Option<&str>, boundary: Boundary) -> Option<DateTime<Utc>> {
    let raw = non_blank(raw)?;
    match normalize(raw, boundary) {
        Ok(instant) => Some(instant),
        Err(err) => {
            tracing::debug!("omitting unparseable date field: {err}");
            None
        }
    }
}

/// Joins the non-blank parts with single spaces; `None` when every part is blank.
pub(crate) fn join_non_blank(parts: &[Option<&str>]) -> Option<String> {
    let joined = parts
        .iter()
        .filter_map(|part| non_blank(*part))
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
