//! # Conway-Wechsler Scale Names
//!
//! Synthesizes the "-illion" name for scale indices past the fixed table
//! (decillion and up).
//!
//! ## Latin Component Table
//! ```text
//! ┌───┬───────────────┬───────────────────┬───────────────────┐
//! │   │ Ones          │ Tens              │ Hundreds          │
//! ├───┼───────────────┼───────────────────┼───────────────────┤
//! │ 1 │ un            │  (n) deci         │ (nx) centi        │
//! │ 2 │ duo           │ (ms) viginti      │  (n) ducenti      │
//! │ 3 │ tre       (*) │ (ns) triginta     │ (ns) trecenti     │
//! │ 4 │ quattuor      │ (ns) quadraginta  │ (ns) quadringenti │
//! │ 5 │ quin          │ (ns) quinquaginta │ (ns) quingenti    │
//! │ 6 │ se       (sx) │  (n) sexaginta    │  (n) sescenti     │
//! │ 7 │ septe    (mn) │  (n) septuaginta  │  (n) septingenti  │
//! │ 8 │ octo          │ (mx) octoginta    │ (mx) octingenti   │
//! │ 9 │ nove     (mn) │      nonaginta    │      nongenti     │
//! └───┴───────────────┴───────────────────┴───────────────────┘
//!  (*) "tre" becomes "tres" before any component marked s or x
//! ```
//!
//! ## Construction
//! ```text
//! scale 87 ──► n = 86 ──► ones 6, tens 8
//!                             │       │
//!                        se (sx)  (mx) octoginta
//!                             └── x ──┘
//!                  "se" + "x" + "octoginta" = "sexoctoginta"
//!                  drop trailing vowel      = "sexoctogint"
//!                  + "illion"               = "sexoctogintillion"
//! ```
//!
//! ## Scale Numbering
//! Scale index 10 is "nonillion", the last entry of the fixed table in
//! [`segment`](crate::segment). Index 11 is the first name built here:
//! `11 - 1 = 10` gives tens `deci`, so "dec" + "illion" = "decillion".

use bitflags::bitflags;

use crate::error::{CoreError, CoreResult};
use crate::{MAX_SCALE, MIN_GENERATED_SCALE};

// =============================================================================
// Phonetic Flags
// =============================================================================

bitflags! {
    /// Connector letters a Latin component accepts next to a ones component.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PhoneticFlags: u8 {
        const M = 0b0001;
        const N = 0b0010;
        const S = 0b0100;
        const X = 0b1000;
    }
}

impl PhoneticFlags {
    /// Resolution order when more than one flag is set.
    const PRECEDENCE: [(PhoneticFlags, char); 4] = [
        (PhoneticFlags::M, 'm'),
        (PhoneticFlags::N, 'n'),
        (PhoneticFlags::S, 's'),
        (PhoneticFlags::X, 'x'),
    ];

    /// Returns the connector letter for the highest-precedence flag set
    /// (M, then N, then S, then X), or `None` if no flag is set.
    ///
    /// ## Example
    /// ```rust
    /// use longnumber_core::conway_wechsler::PhoneticFlags;
    ///
    /// let shared = (PhoneticFlags::M | PhoneticFlags::N) & (PhoneticFlags::M | PhoneticFlags::S);
    /// assert_eq!(shared.connector(), Some('m'));
    /// assert_eq!(PhoneticFlags::empty().connector(), None);
    /// ```
    pub fn connector(self) -> Option<char> {
        Self::PRECEDENCE
            .iter()
            .find(|(flag, _)| self.contains(*flag))
            .map(|&(_, letter)| letter)
    }
}

// =============================================================================
// Latin Components
// =============================================================================

/// Where a component sits relative to the ones component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Tens and hundreds roots.
    Prefix,
    /// Ones roots; the only position that triggers connector insertion.
    Suffix,
}

/// One Latin root used to build a scale name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatinComponent {
    pub text: &'static str,
    pub flags: PhoneticFlags,
    pub position: Position,
}

impl LatinComponent {
    const fn ones(text: &'static str, flags: PhoneticFlags) -> Self {
        LatinComponent {
            text,
            flags,
            position: Position::Suffix,
        }
    }

    const fn prefix(text: &'static str, flags: PhoneticFlags) -> Self {
        LatinComponent {
            text,
            flags,
            position: Position::Prefix,
        }
    }
}

const NONE: PhoneticFlags = PhoneticFlags::empty();
const M: PhoneticFlags = PhoneticFlags::M;
const N: PhoneticFlags = PhoneticFlags::N;
const MN: PhoneticFlags = PhoneticFlags::M.union(PhoneticFlags::N);
const MS: PhoneticFlags = PhoneticFlags::M.union(PhoneticFlags::S);
const MX: PhoneticFlags = PhoneticFlags::M.union(PhoneticFlags::X);
const NS: PhoneticFlags = PhoneticFlags::N.union(PhoneticFlags::S);
const NX: PhoneticFlags = PhoneticFlags::N.union(PhoneticFlags::X);
const SX: PhoneticFlags = PhoneticFlags::S.union(PhoneticFlags::X);

/// Ones roots, indexed by digit - 1.
pub static LATIN_ONES: [LatinComponent; 9] = [
    LatinComponent::ones("un", NONE),
    LatinComponent::ones("duo", NONE),
    LatinComponent::ones("tre", NONE),
    LatinComponent::ones("quattuor", NONE),
    LatinComponent::ones("quin", NONE),
    LatinComponent::ones("se", SX),
    LatinComponent::ones("septe", MN),
    LatinComponent::ones("octo", NONE),
    LatinComponent::ones("nove", MN),
];

/// Tens roots, indexed by digit - 1.
pub static LATIN_TENS: [LatinComponent; 9] = [
    LatinComponent::prefix("deci", N),
    LatinComponent::prefix("viginti", MS),
    LatinComponent::prefix("triginta", NS),
    LatinComponent::prefix("quadraginta", NS),
    LatinComponent::prefix("quinquaginta", NS),
    LatinComponent::prefix("sexaginta", N),
    LatinComponent::prefix("septuaginta", N),
    LatinComponent::prefix("octoginta", MX),
    LatinComponent::prefix("nonaginta", NONE),
];

/// Hundreds roots, indexed by digit - 1.
pub static LATIN_HUNDREDS: [LatinComponent; 9] = [
    LatinComponent::prefix("centi", NX),
    LatinComponent::prefix("ducenti", N),
    LatinComponent::prefix("trecenti", NS),
    LatinComponent::prefix("quadringenti", NS),
    LatinComponent::prefix("quingenti", NS),
    LatinComponent::prefix("sescenti", N),
    LatinComponent::prefix("septingenti", N),
    LatinComponent::prefix("octingenti", MX),
    LatinComponent::prefix("nongenti", NONE),
];

const VOWELS: [char; 4] = ['a', 'e', 'i', 'o'];

// Ones root that takes an "s" before any s- or x-marked component.
const TRE: &str = "tre";

// =============================================================================
// Name Synthesis
// =============================================================================

/// Builds the scale name for `scale` (11 = decillion ... 1000 =
/// novenonagintanongentillion).
///
/// ## Example
/// ```rust
/// use longnumber_core::conway_wechsler::scale_name;
///
/// assert_eq!(scale_name(12).unwrap(), "undecillion");
/// assert_eq!(scale_name(87).unwrap(), "sexoctogintillion");
/// assert!(scale_name(10).is_err());
/// ```
pub fn scale_name(scale: usize) -> CoreResult<String> {
    if !(MIN_GENERATED_SCALE..=MAX_SCALE).contains(&scale) {
        return Err(CoreError::ScaleOutOfRange {
            field: "scale",
            value: scale,
            min: MIN_GENERATED_SCALE,
            max: MAX_SCALE,
        });
    }

    let components = components_for(scale - 1);

    let mut name = String::with_capacity(48);
    for (i, component) in components.iter().enumerate() {
        if i == 1 && components[0].position == Position::Suffix {
            if let Some(letter) = connector_between(components[0], component) {
                name.push(letter);
            }
        }
        name.push_str(component.text);
    }

    if name.ends_with(VOWELS) {
        name.pop();
    }
    name.push_str("illion");

    Ok(name)
}

/// Splits `n` into digits and looks up the roots in ones, tens, hundreds
/// order, skipping zero digits.
fn components_for(n: usize) -> Vec<&'static LatinComponent> {
    let hundreds = n / 100;
    let tens = (n % 100) / 10;
    let ones = n % 10;

    [
        (ones, &LATIN_ONES),
        (tens, &LATIN_TENS),
        (hundreds, &LATIN_HUNDREDS),
    ]
    .into_iter()
    .filter(|&(digit, _)| digit > 0)
    .map(|(digit, table)| &table[digit - 1])
    .collect()
}

/// Letter inserted between a ones root and the root that follows it.
fn connector_between(ones: &LatinComponent, next: &LatinComponent) -> Option<char> {
    if ones.text == TRE && next.flags.intersects(PhoneticFlags::S | PhoneticFlags::X) {
        return Some('s');
    }
    ones.flags.intersection(next.flags).connector()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range() {
        for scale in [0, 10, 1001, usize::MAX] {
            let err = scale_name(scale).unwrap_err();
            assert_eq!(
                err,
                CoreError::ScaleOutOfRange {
                    field: "scale",
                    value: scale,
                    min: 11,
                    max: 1000,
                }
            );
        }
    }

    #[test]
    fn test_known_names() {
        let cases = [
            (11, "decillion"),
            (12, "undecillion"),
            (13, "duodecillion"),
            (17, "sedecillion"),
            (18, "septendecillion"),
            (19, "octodecillion"),
            (20, "novendecillion"),
            (28, "septemvigintillion"),
            (37, "sestrigintillion"),
            (40, "noventrigintillion"),
            (54, "tresquinquagintillion"),
            (87, "sexoctogintillion"),
            (101, "centillion"),
            (104, "trescentillion"),
            (111, "decicentillion"),
            (455, "quattuorquinquagintaquadringentillion"),
            (807, "sexoctingentillion"),
            (1000, "novenonagintanongentillion"),
        ];
        for (scale, expected) in cases {
            assert_eq!(scale_name(scale).unwrap(), expected, "scale {}", scale);
        }
    }

    #[test]
    fn test_tre_takes_s_before_s_or_x() {
        // tre + viginti (ms)
        assert_eq!(scale_name(24).unwrap(), "tresvigintillion");
        // tre + deci (n): no s
        assert_eq!(scale_name(14).unwrap(), "tredecillion");
    }

    #[test]
    fn test_every_name_is_one_lowercase_word() {
        for scale in MIN_GENERATED_SCALE..=MAX_SCALE {
            let name = scale_name(scale).unwrap();
            assert!(name.ends_with("illion"), "{}", name);
            assert!(name.chars().all(|c| c.is_ascii_lowercase()), "{}", name);
        }
    }

    #[test]
    fn test_connector_precedence() {
        assert_eq!(MN.connector(), Some('m'));
        assert_eq!(NS.connector(), Some('n'));
        assert_eq!(SX.connector(), Some('s'));
        assert_eq!(PhoneticFlags::X.connector(), Some('x'));
        assert_eq!(PhoneticFlags::all().connector(), Some('m'));
        assert_eq!(NONE.connector(), None);
    }

    #[test]
    fn test_no_connector_between_tens_and_hundreds() {
        // tens octoginta (mx) next to hundreds octingenti (mx), no ones root
        let name = scale_name(881).unwrap();
        assert_eq!(name, "octogintaoctingentillion");
    }

    #[test]
    fn test_components_order() {
        let texts: Vec<_> = components_for(806).iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["se", "octingenti"]);

        let texts: Vec<_> = components_for(454).iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["quattuor", "quinquaginta", "quadringenti"]);
    }
}
