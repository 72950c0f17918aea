//! Division enumeration
//!
//! Single source of truth for the cost-center divisions, their short codes
//! as embedded in PO numbers, and their display names.

use serde::{Deserialize, Serialize};

/// Organizational cost-center divisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Division {
    Capex,
    ServiceWork,
    Roofing,
    CommercialOne,
    CommercialTwo,
}

impl Division {
    /// Every division, in code order.
    pub const ALL: [Self; 5] =
        [Self::Capex, Self::ServiceWork, Self::Roofing, Self::CommercialOne, Self::CommercialTwo];

    /// Short code embedded in PO numbers.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Capex => "CP",
            Self::ServiceWork => "SW",
            Self::Roofing => "RF",
            Self::CommercialOne => "CD1",
            Self::CommercialTwo => "CD2",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Capex => "CAPEX",
            Self::ServiceWork => "Service Work",
            Self::Roofing => "Roofing",
            Self::CommercialOne => "Commercial Division 1",
            Self::CommercialTwo => "Commercial Division 2",
        }
    }

    /// Look up a division by its short code (already uppercased).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|division| division.code() == code)
    }

    /// Look up a division by its exact display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|division| division.name() == name)
    }
}
