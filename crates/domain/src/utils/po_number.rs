//! Purchase-order number codec.
//!
//! Deterministic mapping between the structured PO identity and the string
//! printed on every purchase order: `{leader}{division}{work_order:04}-{seq}`,
//! e.g. `01CP0012-1`. An older format carrying a 4-character vendor fragment
//! is still accepted for parsing but never generated.
//!
//! Decoding walks an ordered list of format parsers and reports which one
//! matched; a string no format recognizes decodes to `None` rather than an
//! error, since PO numbers also enter the system by hand and by import.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{
    UNKNOWN_DIVISION_CODE, UNKNOWN_DIVISION_NAME, UNKNOWN_LEADER_ID, UNKNOWN_LEADER_NAME,
    WORK_ORDER_PAD_WIDTH,
};
use crate::errors::{Result, RidgelineError};
use crate::types::Division;

// The division atom admits the two-letter codes plus the digit-suffixed
// commercial divisions (CD1/CD2). Unmapped but structurally valid codes
// still decode; they surface as "Unknown Division" when described.
const CURRENT_PATTERN: &str = r"(?i)^(\d{2}|OM)([A-Z]{2}[A-Z0-9]?)(\d{4})-(\d+)$";
const LEGACY_PATTERN: &str = r"(?i)^(\d{2}|OM)([A-Z]{2})(\d{4})-(\d+)([a-z0-9]{4})$";
const LEADER_ID_PATTERN: &str = r"(?i)^(\d{2}|OM)$";

static CURRENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(CURRENT_PATTERN).expect("CURRENT_REGEX should compile - this is a bug")
});

static LEGACY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(LEGACY_PATTERN).expect("LEGACY_REGEX should compile - this is a bug")
});

static LEADER_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(LEADER_ID_PATTERN).expect("LEADER_ID_REGEX should compile - this is a bug")
});

/// Leader-seat display names keyed by leader id.
const LEADER_NAMES: [(&str, &str); 6] = [
    ("01", "CAPEX Division Leader"),
    ("02", "Service Work Division Leader"),
    ("03", "Roofing Division Leader"),
    ("04", "Commercial 1 Division Leader"),
    ("05", "Commercial 2 Division Leader"),
    ("OM", "Operations Manager"),
];

/// Leader seat code (`O1`..`O5`) to leader id.
const LEADER_IDS: [(&str, &str); 5] =
    [("O1", "01"), ("O2", "02"), ("O3", "03"), ("O4", "04"), ("O5", "05")];

/// Structured components of a PO number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoComponents {
    /// Two-digit leader code or the literal `OM`.
    pub leader_id: String,
    /// Division short code, e.g. `CP` or `CD1`.
    pub division_code: String,
    /// Work order the purchase was issued against.
    pub work_order: u32,
    /// 1-based purchase sequence within the work order.
    pub sequence: u32,
}

/// Decode result, tagged by the wire format that matched.
///
/// Formats are tried in declaration order and the current format wins any
/// overlap. Adding a future format is one new variant plus one parse arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPoNumber {
    /// Output of the current generator.
    Current(PoComponents),
    /// Pre-cutover format with the vendor-derived suffix.
    Legacy {
        components: PoComponents,
        /// The trailing 4 characters. Decorative; never validated against
        /// vendor data.
        supplier_suffix: String,
    },
}

impl DecodedPoNumber {
    /// Structured components regardless of which format matched.
    #[must_use]
    pub fn components(&self) -> &PoComponents {
        match self {
            Self::Current(components) | Self::Legacy { components, .. } => components,
        }
    }
}

/// Encode components into the current PO-number format.
///
/// Leader and division codes are normalized to uppercase. Work orders at or
/// above 10000 overflow the 4-digit padding and simply render wider.
///
/// # Errors
///
/// `InvalidComponent` when the leader id is not two digits or `OM`, the
/// division code is not one of the known divisions, or the sequence is 0.
pub fn encode(components: &PoComponents) -> Result<String> {
    let leader = components.leader_id.to_uppercase();
    if !LEADER_ID_REGEX.is_match(&leader) {
        return Err(RidgelineError::InvalidComponent(format!(
            "leader id {:?} must be two digits or OM",
            components.leader_id
        )));
    }

    let division = components.division_code.to_uppercase();
    if Division::from_code(&division).is_none() {
        return Err(RidgelineError::InvalidComponent(format!(
            "unknown division code {:?}",
            components.division_code
        )));
    }

    if components.sequence == 0 {
        return Err(RidgelineError::InvalidComponent(
            "purchase sequence starts at 1".to_string(),
        ));
    }

    Ok(format!(
        "{leader}{division}{:0width$}-{}",
        components.work_order,
        components.sequence,
        width = WORK_ORDER_PAD_WIDTH
    ))
}

/// Decode a raw PO-number string, current format first, then legacy.
///
/// Returns `None` for anything neither format recognizes.
#[must_use]
pub fn decode(raw: &str) -> Option<DecodedPoNumber> {
    if let Some(caps) = CURRENT_REGEX.captures(raw) {
        return components_from(&caps).map(DecodedPoNumber::Current);
    }

    if let Some(caps) = LEGACY_REGEX.captures(raw) {
        let components = components_from(&caps)?;
        let supplier_suffix = caps.get(5)?.as_str().to_lowercase();
        return Some(DecodedPoNumber::Legacy { components, supplier_suffix });
    }

    None
}

/// Whether a raw string parses as either PO-number format.
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    decode(raw).is_some()
}

/// Human-readable rendering of a PO number.
///
/// Returns `None` when the string does not parse at all. Structurally valid
/// but unmapped leader/division codes render as the unknown sentinels
/// instead of failing.
#[must_use]
pub fn describe(raw: &str) -> Option<String> {
    let decoded = decode(raw)?;
    let components = decoded.components();

    let leader = leader_name(&components.leader_id);
    let division =
        Division::from_code(&components.division_code).map_or(UNKNOWN_DIVISION_NAME, Division::name);

    Some(format!(
        "{leader} | {division} | WO-{} | Purchase #{}",
        components.work_order, components.sequence
    ))
}

/// Division code for an exact display name; `"XX"` when unmapped.
#[must_use]
pub fn division_code_for(division_name: &str) -> &'static str {
    Division::from_name(division_name).map_or(UNKNOWN_DIVISION_CODE, Division::code)
}

/// Leader id for a leader seat code (`O1`..`O5`); `"00"` when unmapped.
#[must_use]
pub fn leader_id_for(leader_code: &str) -> &'static str {
    LEADER_IDS
        .iter()
        .find(|(code, _)| *code == leader_code)
        .map_or(UNKNOWN_LEADER_ID, |(_, id)| *id)
}

fn leader_name(leader_id: &str) -> &'static str {
    LEADER_NAMES
        .iter()
        .find(|(id, _)| *id == leader_id)
        .map_or(UNKNOWN_LEADER_NAME, |(_, name)| *name)
}

fn components_from(caps: &regex::Captures<'_>) -> Option<PoComponents> {
    let work_order = caps.get(3)?.as_str().parse().ok()?;
    let sequence = caps.get(4)?.as_str().parse().ok()?;

    Some(PoComponents {
        leader_id: caps.get(1)?.as_str().to_uppercase(),
        division_code: caps.get(2)?.as_str().to_uppercase(),
        work_order,
        sequence,
    })
}
