//! Port interfaces for purchase-order approval

use async_trait::async_trait;
use ridgeline_domain::{PurchaseOrder, Result};
use uuid::Uuid;

/// Trait for loading and updating purchase orders
#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    /// List POs awaiting approval (`status = Submitted`).
    ///
    /// No ordering is required here; the service applies the queue's
    /// ordering contract after filtering.
    async fn list_submitted(&self) -> Result<Vec<PurchaseOrder>>;

    /// Fetch one PO by id.
    async fn find_po(&self, id: Uuid) -> Result<Option<PurchaseOrder>>;

    /// Record an approval against a PO.
    async fn record_approval(&self, id: Uuid, approver_id: Uuid) -> Result<()>;
}
