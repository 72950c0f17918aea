//! User roles and approver identity
//!
//! Roles are synced from the session layer; the domain only ever sees the
//! already-authenticated role string and division id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_string_conversions;

/// Application roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    MajorityOwner,
    DirectorOfSystemsIntegrations,
    DivisionLeader,
    OperationsManager,
    Accounting,
    Admin,
    User,
}

impl UserRole {
    /// Roles that may approve any PO regardless of division or amount.
    ///
    /// This is the one superuser set; the approval policy and the pending
    /// queue both consult it.
    #[must_use]
    pub const fn is_superuser(self) -> bool {
        matches!(self, Self::MajorityOwner | Self::DirectorOfSystemsIntegrations)
    }
}

impl_domain_string_conversions!(UserRole {
    MajorityOwner => "MAJORITY_OWNER",
    DirectorOfSystemsIntegrations => "DIRECTOR_OF_SYSTEMS_INTEGRATIONS",
    DivisionLeader => "DIVISION_LEADER",
    OperationsManager => "OPERATIONS_MANAGER",
    Accounting => "ACCOUNTING",
    Admin => "ADMIN",
    User => "USER",
});

/// Authenticated user fields the approval rule consumes
///
/// `division_id` is only meaningful for division leaders; every other role
/// carries `None` or an ignored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Approver {
    pub id: Uuid,
    pub role: UserRole,
    pub division_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn superuser_set_is_exactly_two_roles() {
        assert!(UserRole::MajorityOwner.is_superuser());
        assert!(UserRole::DirectorOfSystemsIntegrations.is_superuser());

        assert!(!UserRole::DivisionLeader.is_superuser());
        assert!(!UserRole::OperationsManager.is_superuser());
        assert!(!UserRole::Accounting.is_superuser());
        assert!(!UserRole::Admin.is_superuser());
        assert!(!UserRole::User.is_superuser());
    }

    #[test]
    fn role_strings_match_stored_values() {
        assert_eq!(UserRole::MajorityOwner.to_string(), "MAJORITY_OWNER");
        assert_eq!(
            UserRole::DirectorOfSystemsIntegrations.to_string(),
            "DIRECTOR_OF_SYSTEMS_INTEGRATIONS"
        );
        assert_eq!(UserRole::from_str("operations_manager").unwrap(), UserRole::OperationsManager);
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert!(UserRole::from_str("SUPERINTENDENT").is_err());
    }
}
