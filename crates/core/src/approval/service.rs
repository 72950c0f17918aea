//! Approval service - pending queue and guarded approval writes

use std::sync::Arc;

use ridgeline_domain::{Approver, PurchaseOrder, Result, RidgelineError};
use tracing::{debug, info};
use uuid::Uuid;

use super::policy::{pending_order, ApprovalPolicy};
use super::ports::PurchaseOrderRepository;

/// Approval workflow service
pub struct ApprovalService {
    repository: Arc<dyn PurchaseOrderRepository>,
    policy: ApprovalPolicy,
}

impl ApprovalService {
    /// Create a new approval service with the default policy.
    pub fn new(repository: Arc<dyn PurchaseOrderRepository>) -> Self {
        Self { repository, policy: ApprovalPolicy::default() }
    }

    /// Override the approval policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ApprovalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pending POs visible to this user, in queue order.
    ///
    /// Applies the user's visibility filter, then the ordering contract:
    /// total amount descending, oldest first among equal amounts.
    pub async fn pending_for(&self, user: &Approver) -> Result<Vec<PurchaseOrder>> {
        let filter = self.policy.pending_filter(user.role, user.division_id);

        let mut pending: Vec<PurchaseOrder> = self
            .repository
            .list_submitted()
            .await?
            .into_iter()
            .filter(|po| filter.matches(po))
            .collect();
        pending.sort_by(pending_order);

        Ok(pending)
    }

    /// Approve a PO on behalf of `user`.
    ///
    /// Returns `Ok(false)` when the policy denies the approval; a denial is
    /// an answer, not an error. The error paths are a missing PO and
    /// repository failures.
    pub async fn approve(&self, user: &Approver, po_id: Uuid) -> Result<bool> {
        let po = self
            .repository
            .find_po(po_id)
            .await?
            .ok_or_else(|| RidgelineError::NotFound(format!("purchase order {po_id}")))?;

        let decision = self.policy.decide(user.role, user.division_id, &po);
        if !decision.can_approve {
            debug!(po_number = %po.po_number, role = %user.role, "approval denied by policy");
            return Ok(false);
        }

        self.repository.record_approval(po.id, user.id).await?;
        info!(po_number = %po.po_number, approver = %user.id, "purchase order approved");

        Ok(true)
    }
}
