//! Macro for implementing Display and FromStr for domain string enums
//!
//! Roles and statuses are stored as SCREAMING_SNAKE_CASE strings. This macro
//! provides a single implementation of both Display and FromStr so every
//! enum serializes the same way the database stores it, with
//! case-insensitive parsing on the way in.
//!
//! # Example
//!
//! ```rust
//! use ridgeline_domain::impl_domain_string_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum QueueState {
//!     Open,
//!     OnHold,
//! }
//!
//! impl_domain_string_conversions!(QueueState {
//!     Open => "OPEN",
//!     OnHold => "ON_HOLD",
//! });
//! ```

/// Implements Display and FromStr traits for domain string enums
///
/// This macro generates:
/// - Display trait: renders the canonical SCREAMING_SNAKE_CASE string
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical
///   string representations
#[macro_export]
macro_rules! impl_domain_string_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
