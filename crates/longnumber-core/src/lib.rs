//! # longnumber-core: Numerals to English Words
//!
//! Converts decimal numerals and dollar amounts into their spelled-out
//! English names, naming scales all the way to 10^3003 with the
//! Conway-Wechsler system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       LongNumber Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  longnumber-cli (binary)                        │   │
//! │  │     args ──► config ──► convert ──► text / JSON + status        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ longnumber-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌───────────────┐  ┌──────────┐  │   │
//! │  │   │ segments │─►│ segment  │─►│conway_wechsler│  │ currency │  │   │
//! │  │   │ (split)  │  │ (words)  │  │ (-illions)    │  │ (parse)  │  │   │
//! │  │   └──────────┘  └──────────┘  └───────────────┘  └──────────┘  │   │
//! │  │                        ▲                              │         │   │
//! │  │                        └────────── convert ◄──────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO MUTABLE STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`convert`] - The entry points: numerals and currency strings
//! - [`segments`] - Splits a numeral into three-digit groups
//! - [`segment`] - Spells one group with its scale suffix
//! - [`conway_wechsler`] - Builds scale names from decillion upward
//! - [`currency`] - Validates and decomposes currency strings
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, safe from any thread
//! 2. **Digits as Text**: numerals are never parsed into integers, so length
//!    is bounded only by the scale table
//! 3. **Explicit Errors**: every failure is a typed [`CoreError`], never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use longnumber_core::{convert_currency_to_long_form, convert_to_long_form};
//!
//! assert_eq!(
//!     convert_to_long_form("30542").unwrap(),
//!     "Thirty thousand five hundred fourty-two"
//! );
//! assert_eq!(
//!     convert_currency_to_long_form("$1,337.00").unwrap(),
//!     "One thousand three hundred thirty-seven dollars"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod convert;
pub mod conway_wechsler;
pub mod currency;
pub mod error;
pub mod segment;
pub mod segments;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use convert::{
    convert, convert_currency_to_long_form, convert_to_long_form, ConversionKind, UnknownKind,
};
pub use conway_wechsler::scale_name;
pub use currency::CurrencyAmount;
pub use error::{CoreError, CoreResult, ErrorKind};
pub use segment::Segment;
pub use segments::Segments;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First scale index named by the Conway-Wechsler generator ("decillion").
///
/// Indices 1 through 10 come from the fixed table ("thousand" through
/// "nonillion").
pub const MIN_GENERATED_SCALE: usize = 11;

/// Largest scale index that has a name ("novenonagintanongentillion").
pub const MAX_SCALE: usize = 1000;

/// Longest numeral whose leading group can still be named.
///
/// A group at [`MAX_SCALE`] has 1000 full groups to its right.
pub const MAX_DIGITS: usize = 3 * (MAX_SCALE + 1);
