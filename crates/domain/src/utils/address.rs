//! Street-address tail parser.
//!
//! Pulls a trailing `", City, ST ZIP"` (zip optional) off the end of a
//! property address. Addresses without the tail are left unparsed; the
//! backfill stores them with city/state/zip unset.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const ADDRESS_TAIL_PATTERN: &str = r",\s*([^,]+),\s*([A-Z]{2})\s*(\d{5}(-\d{4})?)?$";

static ADDRESS_TAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(ADDRESS_TAIL_PATTERN).expect("ADDRESS_TAIL_REGEX should compile - this is a bug")
});

/// City/state/zip parsed off the end of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressTail {
    pub city: String,
    /// Two-letter state code, as written.
    pub state: String,
    /// 5-digit zip, optionally with the +4 extension.
    pub zip: Option<String>,
}

/// Parse the trailing city/state/zip, if present.
///
/// # Examples
///
/// ```
/// use ridgeline_domain::utils::address::parse_address_tail;
///
/// let tail = parse_address_tail("123 Main St, Springfield, IL 62704").unwrap();
/// assert_eq!(tail.city, "Springfield");
/// assert_eq!(tail.state, "IL");
/// assert_eq!(tail.zip.as_deref(), Some("62704"));
///
/// assert_eq!(parse_address_tail("123 Main St"), None);
/// ```
#[must_use]
pub fn parse_address_tail(address: &str) -> Option<AddressTail> {
    let caps = ADDRESS_TAIL_REGEX.captures(address)?;

    Some(AddressTail {
        city: caps.get(1)?.as_str().trim().to_string(),
        state: caps.get(2)?.as_str().to_string(),
        zip: caps.get(3).map(|zip| zip.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_tail_with_zip() {
        let tail = parse_address_tail("123 Main St, Springfield, IL 62704").unwrap();

        assert_eq!(tail.city, "Springfield");
        assert_eq!(tail.state, "IL");
        assert_eq!(tail.zip.as_deref(), Some("62704"));
    }

    #[test]
    fn tail_without_zip() {
        let tail = parse_address_tail("400 Ridge Rd, Naperville, IL").unwrap();

        assert_eq!(tail.city, "Naperville");
        assert_eq!(tail.state, "IL");
        assert_eq!(tail.zip, None);
    }

    #[test]
    fn zip_plus_four_is_kept_whole() {
        let tail = parse_address_tail("9 Elm Ct, Aurora, CO 80014-1234").unwrap();

        assert_eq!(tail.zip.as_deref(), Some("80014-1234"));
    }

    #[test]
    fn no_tail_means_none() {
        assert_eq!(parse_address_tail("123 Main St"), None);
        assert_eq!(parse_address_tail(""), None);
    }

    #[test]
    fn lowercase_state_does_not_match() {
        assert_eq!(parse_address_tail("123 Main St, Springfield, il 62704"), None);
    }

    #[test]
    fn multi_word_city_is_trimmed() {
        let tail = parse_address_tail("55 Lake Dr, Oak Park Heights, MN 55082").unwrap();

        assert_eq!(tail.city, "Oak Park Heights");
        assert_eq!(tail.state, "MN");
    }
}
