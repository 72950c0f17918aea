//! Configuration management

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::OWNER_APPROVAL_THRESHOLD;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RidgelineConfig {
    pub approval: ApprovalConfig,
    pub migration: MigrationConfig,
}

/// Approval rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    /// POs strictly above this total require majority-owner approval.
    pub owner_threshold: Decimal,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self { owner_threshold: OWNER_APPROVAL_THRESHOLD }
    }
}

/// Property backfill configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Skip the backfill entirely when property rows already exist.
    pub skip_if_populated: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self { skip_if_populated: true }
    }
}
