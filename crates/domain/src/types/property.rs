//! Property backfill record types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project row as read by the property backfill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSeed {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub property_address: Option<String>,
}

/// One deduplicated property produced by the backfill grouping
///
/// `name` falls back to the first grouped project's name when the address
/// is missing. City/state/zip are only set when the address carries a
/// parseable `", City, ST ZIP"` tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    pub client_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    /// Grouped project ids, in input order.
    pub project_ids: Vec<Uuid>,
}
