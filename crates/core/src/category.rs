//! The closed set of clinical categories of a patient summary.

use fhir::codes;
use fhir::{CodeableConcept, Coding};

/// One clinical category of the summary document.
///
/// The set is fixed: a summary always considers exactly these categories, in this order.
/// Allergies has no upstream feed in the current scope and Results has no absence-sentinel
/// concept; both facts are encoded here so the assembler and the absence policy stay in
/// agreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Problems,
    Medications,
    Allergies,
    Immunizations,
    Results,
}

impl Category {
    /// Every category, in document section order.
    pub const ALL: [Category; 5] = [
        Category::Problems,
        Category::Medications,
        Category::Allergies,
        Category::Immunizations,
        Category::Results,
    ];

    /// Section title.
    pub fn title(self) -> &'static str {
        match self {
            Category::Problems => "Problems",
            Category::Medications => "Medications",
            Category::Allergies => "Allergies",
            Category::Immunizations => "Immunizations",
            Category::Results => "Results",
        }
    }

    /// LOINC section code.
    pub fn loinc_code(self) -> &'static str {
        match self {
            Category::Problems => "11450-4",
            Category::Medications => "10160-0",
            Category::Allergies => "48765-2",
            Category::Immunizations => "11369-6",
            Category::Results => "30954-2",
        }
    }

    fn loinc_display(self) -> &'static str {
        match self {
            Category::Problems => "Problem list - Reported",
            Category::Medications => "History of Medication use Narrative",
            Category::Allergies => "Allergies and adverse reactions Document",
            Category::Immunizations => "History of Immunization Narrative",
            Category::Results => "Relevant diagnostic tests/laboratory data Narrative",
        }
    }

    /// The coded concept identifying this category's section.
    pub fn section_code(self) -> CodeableConcept {
        CodeableConcept::coded(
            Coding::new(
                codes::LOINC,
                self.loinc_code(),
                Some(self.loinc_display().into()),
            ),
            None,
        )
    }

    /// The reserved absence code and display for this category, when it has a sentinel
    /// concept. Allergies has no feed (its section carries an empty reason instead) and
    /// Results is simply omitted when empty.
    pub fn absence_code(self) -> Option<(&'static str, &'static str)> {
        match self {
            Category::Problems => Some((codes::NO_KNOWN_PROBLEMS, "No known problems")),
            Category::Medications => Some((codes::NO_KNOWN_MEDICATIONS, "No known medications")),
            Category::Immunizations => {
                Some((codes::NO_IMMUNIZATION_INFO, "No information about immunizations"))
            }
            Category::Allergies | Category::Results => None,
        }
    }
}
