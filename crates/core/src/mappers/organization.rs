//! Organisation directory → Organization.

use super::common::{join_non_blank, non_blank_owned};
use fhir::{codes, Address, Identifier, Organization, Resource};
use overblik_ident::ResourceId;
use upstream::{OrganizationRecord, OrganizationReply};

/// Maps one directory reply. An absent reply maps to an empty list.
pub fn map_organizations(reply: Option<&OrganizationReply>) -> Vec<Resource> {
    reply
        .map(|reply| {
            reply
                .organizations
                .iter()
                .filter_map(map_record)
                .collect()
        })
        .unwrap_or_default()
}

fn map_record(record: &OrganizationRecord) -> Option<Resource> {
    let name = non_blank_owned(record.name.as_deref());
    let registry_number = record.organization_id.map(|n| n.to_string());

    // Lenience gate: a directory entry with neither registry number nor name is unusable.
    if name.is_none() && registry_number.is_none() {
        tracing::debug!("skipping directory entry without registry number or name");
        return None;
    }

    // Address line joins the non-blank sub-fields with single spaces.
    let line = join_non_blank(&[
        record.street_name.as_deref(),
        record.house_number.as_deref(),
        record.floor.as_deref(),
        record.door.as_deref(),
    ]);
    let city = non_blank_owned(record.city.as_deref());
    let postal_code = non_blank_owned(record.postal_code.as_deref());
    let address = (line.is_some() || city.is_some() || postal_code.is_some()).then(|| Address {
        line: line.into_iter().collect(),
        city,
        postal_code,
    });

    Some(Resource::Organization(Organization {
        id: ResourceId::derive(registry_number.as_deref()),
        identifier: registry_number
            .as_deref()
            .map(|number| Identifier::new(codes::SOR, number)),
        name,
        address,
    }))
}
