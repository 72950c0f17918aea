//! Shared test helpers for `ridgeline-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so the
//! approval and backfill tests can focus on behaviour instead of
//! boilerplate.

pub mod repositories;

use chrono::{DateTime, TimeZone, Utc};
use ridgeline_domain::{Approver, PoStatus, ProjectSeed, PurchaseOrder, UserRole};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Build a submitted PO with a deterministic creation time offset.
pub fn submitted_po(division: Uuid, total: Decimal, minute: u32) -> PurchaseOrder {
    PurchaseOrder {
        id: Uuid::new_v4(),
        po_number: "01CP0012-1".to_string(),
        division_id: division,
        work_order_id: None,
        vendor_id: None,
        total_amount: total,
        status: PoStatus::Submitted,
        created_at: created_at(minute),
    }
}

/// Deterministic timestamp helper: minutes past a fixed epoch.
pub fn created_at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, minute, 0).unwrap()
}

/// Build an approver with the given role and division.
pub fn approver(role: UserRole, division_id: Option<Uuid>) -> Approver {
    Approver { id: Uuid::new_v4(), role, division_id }
}

/// Build a project row for backfill tests.
pub fn project(client: Uuid, name: &str, address: Option<&str>) -> ProjectSeed {
    ProjectSeed {
        id: Uuid::new_v4(),
        client_id: client,
        name: name.to_string(),
        property_address: address.map(str::to_string),
    }
}
