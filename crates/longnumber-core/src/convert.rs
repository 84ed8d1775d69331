//! # Long Form Conversion
//!
//! The two entry points: plain numerals and currency strings.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "1000000000001"                   "-$5,000,032.01"                     │
//! │        │                                  │                             │
//! │        ▼                                  ▼                             │
//! │   Segments (split)               CurrencyAmount (validate)              │
//! │        │                           │            │                       │
//! │        │                        dollars       cents                     │
//! │        │                           │            │                       │
//! │        ▼                           ▼            ▼                       │
//! │   Segment::append_words ──────► words ◄── Segment(0, cents)             │
//! │        │                                  │                             │
//! │        ▼                                  ▼                             │
//! │  "One trillion one"      "Negative five million thirty-two dollars      │
//! │                           and one cent"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conway_wechsler::scale_name;
use crate::currency::CurrencyAmount;
use crate::error::{CoreError, CoreResult};
use crate::segment::Segment;
use crate::segments::Segments;

/// Spells out a numeral.
///
/// Zero, any run of zeros, and the empty string all give `"Zero"`.
///
/// ## Example
/// ```rust
/// use longnumber_core::convert_to_long_form;
///
/// assert_eq!(convert_to_long_form("123").unwrap(), "One hundred twenty-three");
/// assert_eq!(convert_to_long_form("1000000000001").unwrap(), "One trillion one");
/// assert_eq!(convert_to_long_form("0").unwrap(), "Zero");
/// assert!(convert_to_long_form("12a").is_err());
/// ```
pub fn convert_to_long_form(numeral: &str) -> CoreResult<String> {
    let mut words = Vec::new();
    append_numeral(numeral, &mut words)?;

    if words.is_empty() {
        return Ok("Zero".to_string());
    }
    Ok(join_capitalized(words))
}

/// Spells out a dollar amount.
///
/// ## Example
/// ```rust
/// use longnumber_core::convert_currency_to_long_form;
///
/// assert_eq!(
///     convert_currency_to_long_form("-$5,000,032.01").unwrap(),
///     "Negative five million thirty-two dollars and one cent"
/// );
/// assert_eq!(convert_currency_to_long_form("$0.15").unwrap(), "Fifteen cents");
/// assert!(convert_currency_to_long_form("$1.5").is_err());
/// ```
pub fn convert_currency_to_long_form(currency_string: &str) -> CoreResult<String> {
    let amount = CurrencyAmount::parse(currency_string)?;
    let mut words = Vec::new();

    let dollars = amount.significant_dollars();
    match dollars {
        "" => {}
        "1" => words.push("one dollar".to_string()),
        _ => {
            append_numeral(dollars, &mut words)?;
            words.push("dollars".to_string());
        }
    }

    let cents = amount.significant_cents();
    if !cents.is_empty() {
        if !dollars.is_empty() {
            words.push("and".to_string());
        }
        if cents == "1" {
            words.push("one cent".to_string());
        } else {
            Segment::new(0, cents)?.append_words(&mut words)?;
            words.push("cents".to_string());
        }
    }

    if words.is_empty() {
        return Ok("Zero dollars".to_string());
    }
    if amount.negative {
        words.insert(0, "negative".to_string());
    }
    Ok(join_capitalized(words))
}

fn append_numeral(numeral: &str, words: &mut Vec<String>) -> CoreResult<()> {
    for segment in Segments::new(numeral) {
        segment?.append_words(words)?;
    }
    Ok(())
}

/// Joins words with single spaces, upper-casing the first character.
fn join_capitalized(words: Vec<String>) -> String {
    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => joined,
    }
}

// =============================================================================
// Conversion Kind
// =============================================================================

/// Which conversion a caller wants, for front ends that choose at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    /// [`convert_to_long_form`]
    #[default]
    Number,
    /// [`convert_currency_to_long_form`]
    Currency,
    /// [`scale_name`] on a decimal scale index.
    Scale,
}

impl ConversionKind {
    pub const ALL: [ConversionKind; 3] = [
        ConversionKind::Number,
        ConversionKind::Currency,
        ConversionKind::Scale,
    ];
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionKind::Number => write!(f, "number"),
            ConversionKind::Currency => write!(f, "currency"),
            ConversionKind::Scale => write!(f, "scale"),
        }
    }
}

/// Error for an unrecognized conversion kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown conversion kind: '{0}'. Valid options: number, currency, scale")]
pub struct UnknownKind(pub String);

impl FromStr for ConversionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "number" | "numeral" | "convert" => Ok(ConversionKind::Number),
            "currency" | "money" | "convertcurrency" => Ok(ConversionKind::Currency),
            "scale" => Ok(ConversionKind::Scale),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Runs the conversion selected by `kind` on `input`.
///
/// For [`ConversionKind::Scale`] the input is a decimal scale index. A
/// non-digit index is a shape error; an empty or overflowing one is out of
/// range.
pub fn convert(kind: ConversionKind, input: &str) -> CoreResult<String> {
    match kind {
        ConversionKind::Number => convert_to_long_form(input),
        ConversionKind::Currency => convert_currency_to_long_form(input),
        ConversionKind::Scale => scale_name(parse_scale(input)?),
    }
}

fn parse_scale(input: &str) -> CoreResult<usize> {
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::SegmentNotNumeric { field: "scale" });
    }
    // Empty or overflowing input is out of range either way.
    Ok(input.parse().unwrap_or(usize::MAX))
}

// =============================================================================
// Unit Tests
// =============================================================================
