//! Organisation directory reply.

use serde::Deserialize;

/// Reply of the national organisation directory.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationReply {
    #[serde(default)]
    pub organizations: Vec<OrganizationRecord>,
}

/// One directory entry.
///
/// The address arrives split into sub-fields (street, house number, floor, door); any of
/// them may be blank and the canonical address line joins only the populated ones.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRecord {
    /// Directory registry number.
    pub organization_id: Option<i64>,

    pub name: Option<String>,

    pub street_name: Option<String>,
    pub house_number: Option<String>,
    pub floor: Option<String>,
    pub door: Option<String>,

    pub postal_code: Option<String>,
    pub city: Option<String>,
}
