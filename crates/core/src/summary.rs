//! Summary assembler: categorized resources → document bundle.
//!
//! The assembler is the single join point of the aggregation: it runs after every upstream
//! payload has been fetched (or has failed and degraded to nothing), applies the absence
//! policy per category, and builds a document bundle whose first entry is a composition
//! indexing every other entry by section.
//!
//! The referential-integrity postcondition (every non-cover entry appears in exactly one
//! section reference list, and every section reference resolves to an entry) is checked
//! before the bundle is handed out. A violation indicates a defect in a mapper or in this
//! assembler and aborts the assembly; it is the only fatal error in the engine.

use crate::absence::apply_absence_policy;
use crate::category::Category;
use crate::{AggregateError, AggregateResult};
use chrono::Utc;
use fhir::{Bundle, Composition, Reference, Resource, Section};
use overblik_ident::ResourceId;
use std::collections::HashMap;

/// The subject of an aggregation run, as a weak reference target.
///
/// The summary document refers to the patient; it does not own a patient resource. The
/// patient itself is served through the demographic collection path.
#[derive(Clone, Debug)]
pub struct PatientContext {
    pub id: ResourceId,
    pub display: Option<String>,
}

impl PatientContext {
    /// Context for a known patient identity.
    pub fn new(id: ResourceId, display: Option<String>) -> Self {
        Self { id, display }
    }

    /// Context derived from a mapped patient resource.
    pub fn from_resource(patient: &fhir::Patient) -> Self {
        let display = patient.name.first().map(|name| {
            let mut parts: Vec<&str> = name.given.iter().map(String::as_str).collect();
            if let Some(family) = name.family.as_deref() {
                parts.push(family);
            }
            parts.join(" ")
        });
        Self {
            id: patient.id.clone(),
            display: display.filter(|d| !d.is_empty()),
        }
    }

    /// The weak reference every mapped resource points at.
    pub fn subject_reference(&self) -> Reference {
        Reference::to("Patient", &self.id, self.display.clone())
    }
}

/// Mapped-and-merged resources per fed category, before the absence policy.
///
/// Allergies has no field: no upstream allergy feed exists in the current scope, and its
/// section is marked unavailable rather than filled with a sentinel.
#[derive(Clone, Debug, Default)]
pub struct CategorizedResources {
    pub problems: Vec<Resource>,
    pub medications: Vec<Resource>,
    pub immunizations: Vec<Resource>,
    pub results: Vec<Resource>,
}

/// Assembles the cross-source patient summary document.
///
/// Steps: apply the absence policy to each sentinel-bearing category, build one section
/// per category in fixed order (Results only when non-empty), place the composition
/// first, append every categorized resource in stable order, and verify referential
/// integrity.
///
/// # Errors
///
/// Returns [`AggregateError::ReferentialIntegrity`] when the built document violates the
/// exactly-once invariant between entries and section references.
pub fn assemble(
    patient: &PatientContext,
    resources: CategorizedResources,
) -> AggregateResult<Bundle> {
    let subject = patient.subject_reference();

    let problems = apply_absence_policy(resources.problems, Category::Problems, &subject);
    let medications = apply_absence_policy(resources.medications, Category::Medications, &subject);
    let immunizations =
        apply_absence_policy(resources.immunizations, Category::Immunizations, &subject);
    let results = resources.results;

    let mut sections = vec![
        section_for(Category::Problems, &problems),
        section_for(Category::Medications, &medications),
        Section::unavailable(
            Category::Allergies.title(),
            Category::Allergies.section_code(),
        ),
        section_for(Category::Immunizations, &immunizations),
    ];
    if !results.is_empty() {
        sections.push(section_for(Category::Results, &results));
    }

    let date = Utc::now();
    let mut composition = Composition::patient_summary(
        ResourceId::random(),
        subject,
        date,
        "Patient summary",
    );
    composition.sections = sections;

    let mut entries = Vec::with_capacity(
        1 + problems.len() + medications.len() + immunizations.len() + results.len(),
    );
    entries.push(Resource::Composition(composition));
    entries.extend(problems);
    entries.extend(medications);
    entries.extend(immunizations);
    entries.extend(results);

    verify_integrity(&entries)?;

    Ok(Bundle::document(ResourceId::random(), date, entries))
}

fn section_for(category: Category, resources: &[Resource]) -> Section {
    Section::with_entries(
        category.title(),
        category.section_code(),
        resources.iter().map(Resource::as_reference).collect(),
    )
}

/// Checks the exactly-once invariant between document entries and section references.
fn verify_integrity(entries: &[Resource]) -> AggregateResult<()> {
    let Some(Resource::Composition(cover)) = entries.first() else {
        return Err(AggregateError::ReferentialIntegrity(
            "first entry is not a composition".into(),
        ));
    };

    let mut reference_counts: HashMap<&str, usize> = HashMap::new();
    for section in &cover.sections {
        for entry in &section.entries {
            if let Some(reference) = entry.reference.as_deref() {
                *reference_counts.entry(reference).or_default() += 1;
            }
        }
    }

    for resource in entries.iter().skip(1) {
        let reference = resource.reference_string();
        match reference_counts.remove(reference.as_str()) {
            Some(1) => {}
            Some(n) => {
                return Err(AggregateError::ReferentialIntegrity(format!(
                    "{reference} is referenced by {n} section entries"
                )));
            }
            None => {
                return Err(AggregateError::ReferentialIntegrity(format!(
                    "{reference} appears in no section"
                )));
            }
        }
    }

    if let Some((dangling, _)) = reference_counts.into_iter().next() {
        return Err(AggregateError::ReferentialIntegrity(format!(
            "section references {dangling}, which is not an entry"
        )));
    }

    Ok(())
}
