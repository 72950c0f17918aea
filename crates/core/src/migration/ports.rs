//! Port interfaces for the property backfill

use async_trait::async_trait;
use ridgeline_domain::{ProjectSeed, PropertyGroup, Result};

/// Source of project rows to group
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, in creation order.
    async fn list_projects(&self) -> Result<Vec<ProjectSeed>>;
}

/// Destination for grouped properties
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Number of property rows already present.
    async fn count_properties(&self) -> Result<i64>;

    /// Persist one property group and its project links.
    async fn save_group(&self, group: &PropertyGroup) -> Result<()>;
}
