//! Property grouping - one-time backfill transform
//!
//! Groups existing projects into deduplicated properties keyed by client +
//! address. The grouping itself is a pure single pass and safe to re-run;
//! skipping an already-populated properties table is the service's job.

use ahash::AHashMap as HashMap; // Fast non-cryptographic hasher
use ridgeline_domain::constants::NO_ADDRESS_KEY;
use ridgeline_domain::utils::address::parse_address_tail;
use ridgeline_domain::{ProjectSeed, PropertyGroup};

/// Group projects into properties keyed by `(client, address)`.
///
/// Project ids keep their input order within a group and groups come out in
/// first-appearance order. Projects without an address share one group per
/// client. The group name is the address when present, else the first
/// grouped project's name.
#[must_use]
pub fn group_properties(projects: &[ProjectSeed]) -> Vec<PropertyGroup> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(projects.len());
    let mut groups: Vec<PropertyGroup> = Vec::new();

    for project in projects {
        let address_key = project.property_address.as_deref().unwrap_or(NO_ADDRESS_KEY);
        let key = format!("{}::{}", project.client_id, address_key);

        if let Some(&slot) = index.get(&key) {
            groups[slot].project_ids.push(project.id);
            continue;
        }

        let tail = project.property_address.as_deref().and_then(parse_address_tail);
        let name =
            project.property_address.clone().unwrap_or_else(|| project.name.clone());

        index.insert(key, groups.len());
        groups.push(PropertyGroup {
            client_id: project.client_id,
            name,
            address: project.property_address.clone(),
            city: tail.as_ref().map(|t| t.city.clone()),
            state: tail.as_ref().map(|t| t.state.clone()),
            zip: tail.as_ref().and_then(|t| t.zip.clone()),
            project_ids: vec![project.id],
        });
    }

    groups
}
