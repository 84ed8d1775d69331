//! # Segment Splitting
//!
//! Walks a numeral left to right, three digits at a time.
//!
//! ```text
//!   "1000500"
//!    │└┬┘└┬┘
//!    │ │  └── "500"  scale 0
//!    │ └───── "000"  scale 1
//!    └─────── "1"    scale 2   (leading group: len % 3, or 3 if that is 0)
//! ```
//!
//! The scale of a group is the number of whole groups still to its right.

use crate::error::CoreResult;
use crate::segment::Segment;

/// One-shot iterator over the digit groups of a numeral, most significant
/// first.
///
/// Empty input yields nothing. A group holding a non-digit yields an error;
/// iteration can carry on past it, but conversions stop at the first one.
///
/// ## Example
/// ```rust
/// use longnumber_core::segments::Segments;
///
/// let scales: Vec<usize> = Segments::new("8040")
///     .map(|segment| segment.unwrap().scale())
///     .collect();
/// assert_eq!(scales, vec![1, 0]);
/// ```
#[derive(Debug)]
pub struct Segments<'a> {
    remaining: &'a [u8],
}

impl<'a> Segments<'a> {
    pub fn new(numeral: &'a str) -> Self {
        Segments {
            remaining: numeral.as_bytes(),
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = CoreResult<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let head_len = match self.remaining.len() % 3 {
            0 => 3,
            partial => partial,
        };
        let (head, rest) = self.remaining.split_at(head_len);
        self.remaining = rest;

        Some(Segment::from_bytes(rest.len() / 3, head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.len().div_ceil(3);
        (count, Some(count))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl std::iter::FusedIterator for Segments<'_> {}

// =============================================================================
// Unit Tests
// =============================================================================
