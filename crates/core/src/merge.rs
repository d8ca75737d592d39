//! Merge layer for categories fed by more than one upstream source.

use fhir::Resource;

/// Combines independently mapped resources of the same category into one collection.
///
/// This is plain concatenation, primary source first. Records that failed the mappers'
/// lenience gate are already absent from both inputs. No deduplication by clinical
/// content happens here: a diagnosis reported by both the hospital feed and the GP feed
/// appears twice, and callers are expected to present the `reportedBy`-style provenance
/// upstream records carry.
//
// TODO: collapsing entries whose primary code and onset match across the two feeds would
// remove the visible doubling; needs agreement on which feed's record wins.
pub fn merge(primary: Vec<Resource>, secondary: Vec<Resource>) -> Vec<Resource> {
    let mut merged = primary;
    merged.extend(secondary);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::map_conditions;
    use fhir::Reference;
    use upstream::{DiagnosisRecord, DiagnosisReply};

    fn feed(code: &str) -> DiagnosisReply {
        DiagnosisReply {
            diagnoses: vec![DiagnosisRecord {
                code: Some(code.into()),
                ..DiagnosisRecord::default()
            }],
        }
    }

    #[test]
    fn merging_two_single_element_sources_yields_both_without_dedup() {
        let subject = Reference {
            reference: Some("Patient/pt-1".into()),
            display: None,
        };
        let hospital = map_conditions(Some(&feed("DJ45")), &subject);
        let gp = map_conditions(Some(&feed("DJ45")), &subject);

        let merged = merge(hospital, gp);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn order_is_primary_then_secondary() {
        let subject = Reference {
            reference: Some("Patient/pt-1".into()),
            display: None,
        };
        let hospital = map_conditions(Some(&feed("DJ45")), &subject);
        let gp = map_conditions(Some(&feed("DI10")), &subject);

        let merged = merge(hospital, gp);
        let codes: Vec<_> = merged
            .iter()
            .map(|resource| match resource {
                fhir::Resource::Condition(c) => {
                    c.code.primary_coding().and_then(|c| c.code.clone())
                }
                _ => None,
            })
            .collect();
        assert_eq!(codes, vec![Some("DJ45".into()), Some("DI10".into())]);
    }

    #[test]
    fn empty_sources_merge_to_empty() {
        assert!(merge(Vec::new(), Vec::new()).is_empty());
    }
}
