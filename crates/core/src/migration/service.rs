//! Property backfill service

use std::sync::Arc;

use ridgeline_domain::{MigrationConfig, Result};
use tracing::info;

use super::ports::{ProjectRepository, PropertyRepository};
use super::property_backfill::group_properties;

/// One-time migration that backfills properties from existing projects
pub struct PropertyBackfillService {
    projects: Arc<dyn ProjectRepository>,
    properties: Arc<dyn PropertyRepository>,
    skip_if_populated: bool,
}

impl PropertyBackfillService {
    /// Create a new backfill service with the default configuration.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        properties: Arc<dyn PropertyRepository>,
    ) -> Self {
        Self { projects, properties, skip_if_populated: true }
    }

    /// Apply migration configuration.
    #[must_use]
    pub fn with_config(mut self, config: &MigrationConfig) -> Self {
        self.skip_if_populated = config.skip_if_populated;
        self
    }

    /// Run the backfill. Returns the number of property groups written.
    ///
    /// When property rows already exist the whole migration is skipped, so
    /// rerunning the migration at the call site is a no-op.
    pub async fn run(&self) -> Result<usize> {
        if self.skip_if_populated {
            let existing = self.properties.count_properties().await?;
            if existing > 0 {
                info!(existing, "properties already populated, skipping backfill");
                return Ok(0);
            }
        }

        let projects = self.projects.list_projects().await?;
        let groups = group_properties(&projects);

        for group in &groups {
            self.properties.save_group(group).await?;
        }

        info!(
            projects = projects.len(),
            properties = groups.len(),
            "property backfill complete"
        );

        Ok(groups.len())
    }
}
