//! # Ridgeline Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The approval authorization policy and pending-queue rules
//! - The property backfill migration
//! - Port/adapter interfaces (traits) for storage
//!
//! ## Architecture Principles
//! - Only depends on `ridgeline-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod approval;
pub mod migration;

// Re-export specific items to avoid ambiguity
pub use approval::policy::{pending_order, ApprovalPolicy, PendingFilter};
pub use approval::ports::PurchaseOrderRepository;
pub use approval::ApprovalService;
pub use migration::ports::{ProjectRepository, PropertyRepository};
pub use migration::property_backfill::group_properties;
pub use migration::PropertyBackfillService;
