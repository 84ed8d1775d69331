//! # Segment Module
//!
//! A [`Segment`] is one group of up to three digits plus the scale it sits
//! at. It knows how to spell itself.
//!
//! ## Word Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Segment { scale: 2, digits: "888" }                                    │
//! │                                                                         │
//! │   hundreds        tens-and-ones        suffix                           │
//! │  ┌───────────────┬─────────────────┬──────────────┐                     │
//! │  │ eight hundred │  eighty-eight   │   million    │                     │
//! │  └───────────────┴─────────────────┴──────────────┘                     │
//! │                                                                         │
//! │  scale 0        → no suffix                                             │
//! │  scale 1..=10   → thousand .. nonillion (fixed table)                   │
//! │  scale 11..     → Conway-Wechsler (decillion, undecillion, ...)         │
//! │  all-zero group → nothing at all                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Spelling
//! The compound tens table keeps the spellings "fourty" and "nintety".
//! Callers depend on these exact words; do not correct them.

use crate::conway_wechsler::scale_name;
use crate::error::{CoreError, CoreResult};

/// Words for 1..=19, indexed by value - 1.
const SINGLE_WORDS: [&str; 19] = [
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Compound prefixes for 20, 30, ... 90, indexed by tens - 2.
const COMPOUND_WORDS: [&str; 8] = [
    "twenty", "thirty", "fourty", "fifty", "sixty", "seventy", "eighty", "nintety",
];

/// Fixed scale names for scale 1..=10, indexed by scale - 1.
const SCALE_WORDS: [&str; 10] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
];

// =============================================================================
// Segment
// =============================================================================

/// One digit group of a numeral.
///
/// ## Invariants
/// - `hundreds`, `tens`, `ones` are each 0-9
/// - A group built from one or two digits has leading zeros filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    scale: usize,
    hundreds: u8,
    tens: u8,
    ones: u8,
}

impl Segment {
    /// Builds a segment from one to three ASCII digits.
    ///
    /// ## Example
    /// ```rust
    /// use longnumber_core::segment::Segment;
    ///
    /// let segment = Segment::new(1, "55").unwrap();
    /// assert_eq!(segment.to_words().unwrap(), "fifty-five thousand");
    ///
    /// assert!(Segment::new(0, "1234").is_err());
    /// assert!(Segment::new(0, "abc").is_err());
    /// ```
    pub fn new(scale: usize, digits: &str) -> CoreResult<Self> {
        Self::from_bytes(scale, digits.as_bytes())
    }

    /// Byte-slice form of [`Segment::new`], used by the splitter.
    pub(crate) fn from_bytes(scale: usize, digits: &[u8]) -> CoreResult<Self> {
        let (hundreds, tens, ones) = match *digits {
            [h, t, o] => (h, t, o),
            [t, o] => (b'0', t, o),
            [o] => (b'0', b'0', o),
            _ => {
                return Err(CoreError::SegmentLength {
                    field: "digits",
                    len: digits.len(),
                })
            }
        };

        Ok(Segment {
            scale,
            hundreds: digit_value(hundreds)?,
            tens: digit_value(tens)?,
            ones: digit_value(ones)?,
        })
    }

    /// Scale index: 0 for the rightmost group, 1 for thousands, and so on.
    #[inline]
    pub const fn scale(&self) -> usize {
        self.scale
    }

    #[inline]
    pub const fn hundreds(&self) -> u8 {
        self.hundreds
    }

    #[inline]
    pub const fn tens(&self) -> u8 {
        self.tens
    }

    #[inline]
    pub const fn ones(&self) -> u8 {
        self.ones
    }

    /// True if every digit is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.hundreds == 0 && self.tens == 0 && self.ones == 0
    }

    /// Appends this group's words to `words`.
    ///
    /// Emits hundreds, then tens-and-ones, then the scale suffix. An all-zero
    /// group emits nothing, including no suffix.
    pub fn append_words(&self, words: &mut Vec<String>) -> CoreResult<()> {
        if self.is_zero() {
            return Ok(());
        }

        // Resolve the suffix first so a range error leaves `words` untouched.
        let suffix = self.suffix()?;

        if self.hundreds > 0 {
            words.push(SINGLE_WORDS[usize::from(self.hundreds) - 1].to_string());
            words.push("hundred".to_string());
        }

        if let Some(word) = self.tens_and_ones() {
            words.push(word);
        }

        words.extend(suffix);
        Ok(())
    }

    /// Spells this group alone, words joined by single spaces.
    ///
    /// An all-zero group gives an empty string.
    pub fn to_words(&self) -> CoreResult<String> {
        let mut words = Vec::new();
        self.append_words(&mut words)?;
        Ok(words.join(" "))
    }

    fn tens_and_ones(&self) -> Option<String> {
        let tens = usize::from(self.tens);
        let ones = usize::from(self.ones);

        match (tens, ones) {
            (0, 0) => None,
            (2.., 0) => Some(COMPOUND_WORDS[tens - 2].to_string()),
            (2.., _) => Some(format!(
                "{}-{}",
                COMPOUND_WORDS[tens - 2],
                SINGLE_WORDS[ones - 1]
            )),
            _ => Some(SINGLE_WORDS[tens * 10 + ones - 1].to_string()),
        }
    }

    fn suffix(&self) -> CoreResult<Option<String>> {
        match self.scale {
            0 => Ok(None),
            scale if scale <= SCALE_WORDS.len() => Ok(Some(SCALE_WORDS[scale - 1].to_string())),
            scale => scale_name(scale).map(Some),
        }
    }
}

fn digit_value(byte: u8) -> CoreResult<u8> {
    if byte.is_ascii_digit() {
        Ok(byte - b'0')
    } else {
        Err(CoreError::SegmentNotNumeric { field: "digits" })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            Segment::new(0, "").unwrap_err(),
            CoreError::SegmentLength {
                field: "digits",
                len: 0
            }
        );
    }

    #[test]
    fn test_long_input_rejected() {
        assert_eq!(
            Segment::new(0, "1234").unwrap_err(),
            CoreError::SegmentLength {
                field: "digits",
                len: 4
            }
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        for input in ["abc", "1a", "-", " 12", "½"] {
            let err = Segment::new(0, input).unwrap_err();
            assert!(
                matches!(err, CoreError::SegmentNotNumeric { .. }),
                "{:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_digits_fill_from_the_right() {
        let segment = Segment::new(0, "25").unwrap();
        assert_eq!(
            (segment.hundreds(), segment.tens(), segment.ones()),
            (0, 2, 5)
        );

        let segment = Segment::new(0, "7").unwrap();
        assert_eq!(
            (segment.hundreds(), segment.tens(), segment.ones()),
            (0, 0, 7)
        );
    }

    #[test]
    fn test_segment_words() {
        let cases = [
            (0, "0", ""),
            (0, "000", ""),
            (0, "19", "nineteen"),
            (0, "20", "twenty"),
            (0, "43", "fourty-three"),
            (0, "90", "nintety"),
            (0, "100", "one hundred"),
            (0, "123", "one hundred twenty-three"),
            (0, "530", "five hundred thirty"),
            (0, "010", "ten"),
            (1, "55", "fifty-five thousand"),
            (2, "888", "eight hundred eighty-eight million"),
            (3, "30", "thirty billion"),
            (4, "1", "one trillion"),
            (10, "10", "ten nonillion"),
            (11, "11", "eleven decillion"),
            (19, "18", "eighteen octodecillion"),
        ];
        for (scale, digits, expected) in cases {
            let segment = Segment::new(scale, digits).unwrap();
            assert_eq!(segment.to_words().unwrap(), expected, "{} @ {}", digits, scale);
        }
    }

    #[test]
    fn test_fixed_and_generated_scales_meet() {
        assert_eq!(Segment::new(10, "1").unwrap().to_words().unwrap(), "one nonillion");
        assert_eq!(Segment::new(11, "1").unwrap().to_words().unwrap(), "one decillion");
    }

    #[test]
    fn test_zero_group_skips_scale_check() {
        let segment = Segment::new(5000, "000").unwrap();
        assert_eq!(segment.to_words().unwrap(), "");
    }

    #[test]
    fn test_scale_out_of_range_leaves_words_untouched() {
        let segment = Segment::new(1001, "7").unwrap();
        let mut words = vec!["existing".to_string()];
        let err = segment.append_words(&mut words).unwrap_err();
        assert!(matches!(err, CoreError::ScaleOutOfRange { value: 1001, .. }));
        assert_eq!(words, vec!["existing".to_string()]);
    }
}
