//! Purchase-order approval rules and pending queue

pub mod policy;
pub mod ports;
pub mod service;

pub use policy::{pending_order, ApprovalPolicy, PendingFilter};
pub use service::ApprovalService;
