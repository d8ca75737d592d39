//! Developer driver for the aggregation engine.
//!
//! Reads upstream payload JSON files from disk (standing in for the concurrent retrieval
//! layer), runs them through the mappers, merge layer, absence policy and assembler, and
//! prints the resulting bundle as JSON. A missing or unreadable payload file is treated
//! exactly like a failed upstream fetch: no data for that category.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhir::{Boundary, Bundle, Resource, ResourceId};
use overblik_core::mappers::{
    map_appointments, map_conditions, map_immunizations, map_medications, map_observations,
    map_organizations, map_patient,
};
use overblik_core::{
    assemble, build_collection, filter_by_period, merge, CategorizedResources, PatientContext,
};

#[derive(Parser)]
#[command(name = "overblik")]
#[command(about = "Cross-source patient overview aggregation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the patient summary document from payload files in a directory
    ///
    /// Expected files (each optional): demographics.json, hospital-diagnoses.json,
    /// gp-diagnoses.json, medications.json, vaccinations.json, labs.json
    Summary {
        /// Directory holding the per-source payload files
        dir: PathBuf,
    },
    /// Build an appointment collection, optionally filtered to a date window
    Appointments {
        /// Appointment service payload file
        file: PathBuf,
        /// Inclusive window start (full or partial date)
        #[arg(long)]
        from: Option<String>,
        /// Inclusive window end (full or partial date)
        #[arg(long)]
        to: Option<String>,
    },
    /// Build an organisation collection
    Organizations {
        /// Organisation directory payload file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("overblik=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let bundle = match &cli.command {
        Commands::Summary { dir } => summary(dir)?,
        Commands::Appointments { file, from, to } => appointments(file, from.as_deref(), to.as_deref())?,
        Commands::Organizations { file } => organizations(file)?,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&bundle)?
    } else {
        serde_json::to_string(&bundle)?
    };
    println!("{json}");

    Ok(())
}

fn summary(dir: &Path) -> anyhow::Result<Bundle> {
    let demographics = load_payload(dir, "demographics.json");
    let hospital = load_payload(dir, "hospital-diagnoses.json");
    let gp = load_payload(dir, "gp-diagnoses.json");
    let medications = load_payload(dir, "medications.json");
    let vaccinations = load_payload(dir, "vaccinations.json");
    let labs = load_payload(dir, "labs.json");

    let context = match map_patient(demographics.as_ref()) {
        Some(Resource::Patient(ref patient)) => PatientContext::from_resource(patient),
        _ => {
            tracing::warn!("no demographics available, assembling for an anonymous subject");
            PatientContext::new(ResourceId::random(), None)
        }
    };
    let subject = context.subject_reference();

    let resources = CategorizedResources {
        problems: merge(
            map_conditions(hospital.as_ref(), &subject),
            map_conditions(gp.as_ref(), &subject),
        ),
        medications: map_medications(medications.as_ref(), &subject),
        immunizations: map_immunizations(vaccinations.as_ref(), &subject),
        results: map_observations(labs.as_ref(), &subject),
    };

    assemble(&context, resources).context("summary assembly failed")
}

fn appointments(file: &Path, from: Option<&str>, to: Option<&str>) -> anyhow::Result<Bundle> {
    let reply = read_payload(file)?;
    let collection = build_collection(
        map_appointments(Some(&reply)),
        "Appointment?patient=current",
    );

    let start = from
        .map(|raw| fhir::normalize(raw, Boundary::Start))
        .transpose()
        .context("invalid --from date")?;
    let end = to
        .map(|raw| fhir::normalize(raw, Boundary::End))
        .transpose()
        .context("invalid --to date")?;

    Ok(filter_by_period(collection, start, end))
}

fn organizations(file: &Path) -> anyhow::Result<Bundle> {
    let reply = read_payload(file)?;
    Ok(build_collection(
        map_organizations(Some(&reply)),
        "Organization?active=true",
    ))
}

/// Reads one payload file for the summary path, degrading to "no data" on any failure.
fn load_payload<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> Option<T> {
    let path = dir.join(name);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            tracing::info!("no payload {}: {err}", path.display());
            return None;
        }
    };
    match upstream::from_json(&text) {
        Ok(reply) => Some(reply),
        Err(err) => {
            tracing::warn!("unusable payload {}: {err}", path.display());
            None
        }
    }
}

/// Reads one payload file for a single-category query; here a bad file is an error.
fn read_payload<T: serde::de::DeserializeOwned>(file: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read payload file {}", file.display()))?;
    upstream::from_json(&text).with_context(|| format!("failed to parse {}", file.display()))
}
