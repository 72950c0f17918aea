//! Property backfill migration

pub mod ports;
pub mod property_backfill;
pub mod service;

pub use property_backfill::group_properties;
pub use service::PropertyBackfillService;
