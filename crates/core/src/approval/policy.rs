//! Approval authorization policy - core business rules
//!
//! Pure decision functions answering who may approve a purchase order and
//! which submitted POs a given user sees in the pending queue. Both are
//! total over their input space: unknown roles and missing divisions fall
//! through to "no access" instead of erroring.

use std::cmp::Ordering;

use ridgeline_domain::constants::OWNER_APPROVAL_THRESHOLD;
use ridgeline_domain::{ApprovalConfig, ApprovalDecision, PurchaseOrder, UserRole};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Approval threshold policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalPolicy {
    owner_threshold: Decimal,
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self { owner_threshold: OWNER_APPROVAL_THRESHOLD }
    }
}

impl ApprovalPolicy {
    /// Create a policy with an explicit owner-approval threshold.
    #[must_use]
    pub const fn new(owner_threshold: Decimal) -> Self {
        Self { owner_threshold }
    }

    /// Build the policy from configuration.
    #[must_use]
    pub fn from_config(config: &ApprovalConfig) -> Self {
        Self::new(config.owner_threshold)
    }

    /// Whether this total needs the majority owner's sign-off.
    ///
    /// Strictly greater than the threshold; a PO at exactly the threshold
    /// is not gated. Holds independent of who is asking.
    #[must_use]
    pub fn requires_owner_approval(&self, total_amount: Decimal) -> bool {
        total_amount > self.owner_threshold
    }

    /// Whether `role` may approve a PO in `po_division` for `total_amount`.
    ///
    /// Superusers approve anything. Division leaders approve their own
    /// division's POs under the threshold. The operations manager approves
    /// any division under the threshold. Everyone else is denied.
    #[must_use]
    pub fn can_approve(
        &self,
        role: UserRole,
        user_division: Option<Uuid>,
        po_division: Uuid,
        total_amount: Decimal,
    ) -> bool {
        if role.is_superuser() {
            return true;
        }

        let owner_gated = self.requires_owner_approval(total_amount);
        match role {
            UserRole::DivisionLeader => !owner_gated && user_division == Some(po_division),
            UserRole::OperationsManager => !owner_gated,
            _ => false,
        }
    }

    /// Evaluate both approval flags for one user against one PO.
    #[must_use]
    pub fn decide(
        &self,
        role: UserRole,
        user_division: Option<Uuid>,
        po: &PurchaseOrder,
    ) -> ApprovalDecision {
        ApprovalDecision {
            can_approve: self.can_approve(role, user_division, po.division_id, po.total_amount),
            requires_owner_approval: self.requires_owner_approval(po.total_amount),
        }
    }

    /// Visibility filter for the pending-approval queue.
    ///
    /// Describes, not executes: callers translate it into their query or
    /// apply it in memory via [`PendingFilter::matches`].
    #[must_use]
    pub fn pending_filter(&self, role: UserRole, user_division: Option<Uuid>) -> PendingFilter {
        if role.is_superuser() {
            return PendingFilter::Unrestricted;
        }

        match (role, user_division) {
            (UserRole::DivisionLeader, Some(division_id)) => {
                PendingFilter::DivisionCapped { division_id, max_total: self.owner_threshold }
            }
            (UserRole::OperationsManager, _) => {
                PendingFilter::AmountCapped { max_total: self.owner_threshold }
            }
            // A leader without a division can match no PO; read-only roles
            // see an empty queue.
            _ => PendingFilter::Hidden,
        }
    }
}

/// Predicate a caller applies when listing submitted POs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingFilter {
    /// All divisions, all amounts.
    Unrestricted,
    /// One division, at or under the owner threshold.
    DivisionCapped { division_id: Uuid, max_total: Decimal },
    /// Any division, at or under the owner threshold.
    AmountCapped { max_total: Decimal },
    /// The queue is empty for this user.
    Hidden,
}

impl PendingFilter {
    /// Apply the filter to one PO in memory.
    #[must_use]
    pub fn matches(&self, po: &PurchaseOrder) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::DivisionCapped { division_id, max_total } => {
                po.division_id == *division_id && po.total_amount <= *max_total
            }
            Self::AmountCapped { max_total } => po.total_amount <= *max_total,
            Self::Hidden => false,
        }
    }
}

/// Pending-queue ordering contract.
///
/// Primary key total amount descending, secondary key creation time
/// ascending (oldest first among equal amounts). Callers rendering the
/// queue must reproduce this ordering exactly.
#[must_use]
pub fn pending_order(a: &PurchaseOrder, b: &PurchaseOrder) -> Ordering {
    b.total_amount.cmp(&a.total_amount).then_with(|| a.created_at.cmp(&b.created_at))
}
