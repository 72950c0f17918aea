//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core repository ports, enabling
//! deterministic tests without database dependencies.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ridgeline_core::{ProjectRepository, PropertyRepository, PurchaseOrderRepository};
use ridgeline_domain::{
    PoStatus, ProjectSeed, PropertyGroup, PurchaseOrder, Result as DomainResult,
};
use uuid::Uuid;

/// In-memory mock for `PurchaseOrderRepository`.
///
/// Stores a fixed set of POs and records approvals in place.
#[derive(Default, Clone)]
pub struct MockPurchaseOrderRepository {
    orders: Arc<Mutex<Vec<PurchaseOrder>>>,
}

impl MockPurchaseOrderRepository {
    /// Create a new mock seeded with the provided purchase orders.
    pub fn new(orders: Vec<PurchaseOrder>) -> Self {
        Self { orders: Arc::new(Mutex::new(orders)) }
    }

    /// Snapshot of the stored orders, for assertions.
    pub fn orders(&self) -> Vec<PurchaseOrder> {
        self.orders.lock().unwrap().clone()
    }

    /// Ids of orders currently marked approved.
    pub fn approved_ids(&self) -> Vec<Uuid> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .filter(|po| po.status == PoStatus::Approved)
            .map(|po| po.id)
            .collect()
    }
}

#[async_trait]
impl PurchaseOrderRepository for MockPurchaseOrderRepository {
    async fn list_submitted(&self) -> DomainResult<Vec<PurchaseOrder>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|po| po.status == PoStatus::Submitted)
            .cloned()
            .collect())
    }

    async fn find_po(&self, id: Uuid) -> DomainResult<Option<PurchaseOrder>> {
        Ok(self.orders.lock().unwrap().iter().find(|po| po.id == id).cloned())
    }

    async fn record_approval(&self, id: Uuid, _approver_id: Uuid) -> DomainResult<()> {
        let mut orders = self.orders.lock().unwrap();
        if let Some(po) = orders.iter_mut().find(|po| po.id == id) {
            po.status = PoStatus::Approved;
        }
        Ok(())
    }
}

/// In-memory mock for `ProjectRepository`.
#[derive(Default, Clone)]
pub struct MockProjectRepository {
    projects: Arc<Vec<ProjectSeed>>,
}

impl MockProjectRepository {
    /// Create a new mock seeded with the provided projects.
    pub fn new(projects: Vec<ProjectSeed>) -> Self {
        Self { projects: Arc::new(projects) }
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn list_projects(&self) -> DomainResult<Vec<ProjectSeed>> {
        Ok(self.projects.as_ref().clone())
    }
}

/// In-memory mock for `PropertyRepository`.
///
/// Counts pre-seeded rows and collects saved groups for assertions.
#[derive(Default, Clone)]
pub struct MockPropertyRepository {
    existing: i64,
    saved: Arc<Mutex<Vec<PropertyGroup>>>,
}

impl MockPropertyRepository {
    /// Create an empty property store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend `count` property rows already exist.
    pub fn with_existing(mut self, count: i64) -> Self {
        self.existing = count;
        self
    }

    /// Groups persisted through the port, in save order.
    pub fn saved(&self) -> Vec<PropertyGroup> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl PropertyRepository for MockPropertyRepository {
    async fn count_properties(&self) -> DomainResult<i64> {
        Ok(self.existing + self.saved.lock().unwrap().len() as i64)
    }

    async fn save_group(&self, group: &PropertyGroup) -> DomainResult<()> {
        self.saved.lock().unwrap().push(group.clone());
        Ok(())
    }
}
