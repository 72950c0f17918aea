//! Purchase order header types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_string_conversions;

/// Purchase order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Closed,
}

impl_domain_string_conversions!(PoStatus {
    Draft => "DRAFT",
    Submitted => "SUBMITTED",
    Approved => "APPROVED",
    Rejected => "REJECTED",
    Closed => "CLOSED",
});

/// Purchase order header
///
/// The fields the approval rule and pending queue consume. Line items,
/// vendor detail, and invoice linkage live with the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    /// Encoded PO number, e.g. `01CP0012-1`. May be foreign (manual entry,
    /// data import) and fail to decode.
    pub po_number: String,
    pub division_id: Uuid,
    pub work_order_id: Option<Uuid>,
    pub vendor_id: Option<Uuid>,
    pub total_amount: Decimal,
    pub status: PoStatus,
    pub created_at: DateTime<Utc>,
}

/// Outcome of evaluating the approval rule for one user against one PO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalDecision {
    pub can_approve: bool,
    /// Whether the total is over the owner threshold; independent of role.
    pub requires_owner_approval: bool,
}
