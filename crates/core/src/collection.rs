//! Collection builder and period filter for single-category queries.

use chrono::{DateTime, Utc};
use fhir::{Bundle, Resource};

/// Wraps a mapped category in a searchset bundle with a self link.
pub fn build_collection(resources: Vec<Resource>, self_url: impl Into<String>) -> Bundle {
    Bundle::searchset(resources, self_url)
}

/// Retains only the entries whose temporal anchor start lies in the inclusive window.
///
/// A missing bound leaves that side unbounded; with no bounds at all the collection passes
/// through untouched. An entry without a temporal anchor is excluded whenever any bound is
/// given; an undated appointment cannot be shown to fall inside a date window. The total
/// count is recomputed.
pub fn filter_by_period(
    mut collection: Bundle,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Bundle {
    if start.is_none() && end.is_none() {
        return collection;
    }

    collection.retain(|resource| match resource.anchor_start() {
        Some(anchor) => {
            start.is_none_or(|bound| anchor >= bound) && end.is_none_or(|bound| anchor <= bound)
        }
        None => false,
    });
    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::map_appointments;
    use upstream::{AppointmentRecord, AppointmentReply};

    fn appointment(id: &str, start: Option<&str>) -> AppointmentRecord {
        AppointmentRecord {
            identifier: Some(id.into()),
            title: Some("Kontrol".into()),
            start_time: start.map(str::to_owned),
            ..AppointmentRecord::default()
        }
    }

    fn sample_collection() -> Bundle {
        let reply = AppointmentReply {
            appointments: vec![
                appointment("apt-1", Some("2024-01-10")),
                appointment("apt-2", Some("2024-02-05")),
                appointment("apt-3", Some("2024-03-01")),
            ],
        };
        build_collection(
            map_appointments(Some(&reply)),
            "https://example.test/Appointment",
        )
    }

    fn bound(raw: &str) -> Option<DateTime<Utc>> {
        Some(raw.parse().expect("valid RFC 3339 fixture"))
    }

    #[test]
    fn window_retains_only_entries_inside_it() {
        let filtered = filter_by_period(
            sample_collection(),
            bound("2024-01-15T00:00:00Z"),
            bound("2024-02-28T23:59:59Z"),
        );
        assert_eq!(filtered.total(), 1);
        assert_eq!(filtered.entries()[0].resource.id().as_str(), "apt-2");
    }

    #[test]
    fn missing_bound_is_unbounded_on_that_side() {
        let from_only = filter_by_period(sample_collection(), bound("2024-02-01T00:00:00Z"), None);
        assert_eq!(from_only.total(), 2);

        let to_only = filter_by_period(sample_collection(), None, bound("2024-02-01T00:00:00Z"));
        assert_eq!(to_only.total(), 1);
    }

    #[test]
    fn no_bounds_is_the_identity() {
        let collection = sample_collection();
        let before = collection.clone();
        assert_eq!(filter_by_period(collection, None, None), before);
    }

    #[test]
    fn anchorless_entries_are_excluded_when_any_bound_is_given() {
        let reply = AppointmentReply {
            appointments: vec![
                appointment("apt-1", Some("2024-01-10")),
                appointment("apt-undated", None),
            ],
        };
        let collection = build_collection(
            map_appointments(Some(&reply)),
            "https://example.test/Appointment",
        );

        let filtered = filter_by_period(collection, bound("2024-01-01T00:00:00Z"), None);
        assert_eq!(filtered.total(), 1);
        assert_eq!(filtered.entries()[0].resource.id().as_str(), "apt-1");
    }

    #[test]
    fn total_matches_entry_count_after_filtering() {
        let filtered = filter_by_period(sample_collection(), bound("2024-01-15T00:00:00Z"), None);
        assert_eq!(filtered.total() as usize, filtered.entries().len());
    }
}
