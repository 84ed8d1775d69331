//! # Currency Parsing
//!
//! Validates a dollar string and pulls out its parts.
//!
//! ## Accepted Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   -      $      5,000,032      .01                                      │
//! │   │      │          │           │                                       │
//! │   │      │          │           └── optional: "." + exactly two digits  │
//! │   │      │          └── digits, either ungrouped ("5000032") or         │
//! │   │      │              1-3 digits then ",ddd" groups ("5,000,032")     │
//! │   │      └── optional "$"                                               │
//! │   └── optional "-" (only in first position)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Anything else is rejected with a single
//! [`CoreError::InvalidCurrency`]. The error does not say which rule
//! failed.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

static CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<negative>-)?\$?(?P<dollars>[0-9]+|[0-9]{1,3}(?:,[0-9]{3})*)(?:\.(?P<cents>[0-9]{2}))?$")
        .expect("currency pattern is valid")
});

/// The parts of a validated currency string.
///
/// Lives only for one conversion; digits are kept as text so amounts of any
/// length survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmount {
    /// A leading "-" was present.
    pub negative: bool,
    /// Dollar digits with grouping commas removed. Leading zeros kept.
    pub dollars: String,
    /// The two cent digits, if a fractional part was given.
    pub cents: Option<String>,
}

impl CurrencyAmount {
    /// Validates `currency_string` and splits it into its parts.
    ///
    /// ## Example
    /// ```rust
    /// use longnumber_core::currency::CurrencyAmount;
    ///
    /// let amount = CurrencyAmount::parse("-$5,000,032.01").unwrap();
    /// assert!(amount.negative);
    /// assert_eq!(amount.dollars, "5000032");
    /// assert_eq!(amount.cents.as_deref(), Some("01"));
    ///
    /// assert!(CurrencyAmount::parse("$13,56,132").is_err());
    /// ```
    pub fn parse(currency_string: &str) -> CoreResult<Self> {
        let captures = CURRENCY_RE
            .captures(currency_string)
            .ok_or(CoreError::InvalidCurrency {
                field: "currency_string",
            })?;

        let dollars = captures
            .name("dollars")
            .map(|m| m.as_str().replace(',', ""))
            .unwrap_or_default();

        Ok(CurrencyAmount {
            negative: captures.name("negative").is_some(),
            dollars,
            cents: captures.name("cents").map(|m| m.as_str().to_string()),
        })
    }

    /// Dollar digits without leading zeros; empty for a zero amount.
    pub fn significant_dollars(&self) -> &str {
        self.dollars.trim_start_matches('0')
    }

    /// Cent digits without leading zeros; empty for none or zero cents.
    pub fn significant_cents(&self) -> &str {
        self.cents
            .as_deref()
            .map(|cents| cents.trim_start_matches('0'))
            .unwrap_or("")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
