//! The bundle container: an ordered, counted collection of canonical resources.
//!
//! Two flavours share one type: a *searchset* wraps the result of a single-category query
//! with a self-referencing link, and a *document* carries an assembled patient summary with
//! the composition as its first entry.
//!
//! Invariant: `total` always equals the number of entries. The fields are private and every
//! mutation goes through methods that recompute the count, so the invariant cannot be
//! broken from outside this module.

use crate::resource::Resource;
use chrono::{DateTime, Utc};
use overblik_ident::ResourceId;
use serde::Serialize;

/// Bundle flavour, serialised as the wire `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BundleType {
    Searchset,
    Document,
}

impl BundleType {
    pub fn as_wire(self) -> &'static str {
        match self {
            BundleType::Searchset => "searchset",
            BundleType::Document => "document",
        }
    }
}

impl Serialize for BundleType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

/// A link carried by a bundle, currently only the self-referencing query link.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct BundleLink {
    pub relation: String,
    pub url: String,
}

/// One entry of a bundle.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BundleEntry {
    #[serde(rename = "fullUrl")]
    pub full_url: String,

    pub resource: Resource,
}

impl BundleEntry {
    fn wrap(resource: Resource) -> Self {
        Self {
            full_url: resource.reference_string(),
            resource,
        }
    }
}

/// An ordered, counted collection of canonical resources.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Bundle {
    id: ResourceId,

    #[serde(rename = "type")]
    bundle_type: BundleType,

    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,

    total: u32,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    link: Vec<BundleLink>,

    #[serde(rename = "entry", skip_serializing_if = "Vec::is_empty")]
    entries: Vec<BundleEntry>,
}

impl Bundle {
    /// Wraps a homogeneous query result with a total count and a self link.
    pub fn searchset(resources: Vec<Resource>, self_url: impl Into<String>) -> Self {
        let entries: Vec<BundleEntry> = resources.into_iter().map(BundleEntry::wrap).collect();
        Self {
            id: ResourceId::random(),
            bundle_type: BundleType::Searchset,
            timestamp: None,
            total: entries.len() as u32,
            link: vec![BundleLink {
                relation: "self".into(),
                url: self_url.into(),
            }],
            entries,
        }
    }

    /// Wraps an assembled document. Entry order is the caller's responsibility; the
    /// summary assembler places the composition first and checks integrity before
    /// handing the bundle out.
    pub fn document(id: ResourceId, timestamp: DateTime<Utc>, resources: Vec<Resource>) -> Self {
        let entries: Vec<BundleEntry> = resources.into_iter().map(BundleEntry::wrap).collect();
        Self {
            id,
            bundle_type: BundleType::Document,
            timestamp: Some(timestamp),
            total: entries.len() as u32,
            link: Vec::new(),
            entries,
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn bundle_type(&self) -> BundleType {
        self.bundle_type
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// The total count; equal to `entries().len()` at all times.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The self-referencing query link, when this is a searchset.
    pub fn self_url(&self) -> Option<&str> {
        self.link
            .iter()
            .find(|l| l.relation == "self")
            .map(|l| l.url.as_str())
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    /// The contained resources in entry order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entries.iter().map(|e| &e.resource)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a resource, keeping the count in step.
    pub fn push(&mut self, resource: Resource) {
        self.entries.push(BundleEntry::wrap(resource));
        self.total = self.entries.len() as u32;
    }

    /// Keeps only the entries whose resource satisfies the predicate, recomputing the
    /// count afterwards.
    pub fn retain(&mut self, mut predicate: impl FnMut(&Resource) -> bool) {
        self.entries.retain(|entry| predicate(&entry.resource));
        self.total = self.entries.len() as u32;
    }
}
