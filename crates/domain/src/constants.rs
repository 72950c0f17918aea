//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Approval rule constants
/// POs strictly above this total require majority-owner approval.
pub const OWNER_APPROVAL_THRESHOLD: Decimal = dec!(25000);

// PO number formatting
pub const WORK_ORDER_PAD_WIDTH: usize = 4;
pub const UNKNOWN_DIVISION_CODE: &str = "XX";
pub const UNKNOWN_LEADER_ID: &str = "00";
pub const UNKNOWN_DIVISION_NAME: &str = "Unknown Division";
pub const UNKNOWN_LEADER_NAME: &str = "Unknown Leader";

// Property backfill
/// Grouping-key stand-in for projects without a property address.
pub const NO_ADDRESS_KEY: &str = "NO_ADDRESS";
