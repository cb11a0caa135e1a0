//! Selection criteria and per-reference classification.

use std::num::IntErrorKind;

use thiserror::Error;

/// Errors that can occur when constructing [`Criteria`].
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// The reference prefix was empty.
    #[error("reference prefix must not be empty")]
    EmptyPrefix,

    /// The lower bound exceeded the upper bound.
    #[error("invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds {
        /// The lower bound.
        lower: u32,
        /// The upper bound.
        upper: u32,
    },
}

/// Classification of a single reference designator against criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceMatch {
    /// The reference does not begin with the criteria prefix.
    PrefixMismatch,

    /// The prefix matches but the remainder is not a decimal number
    /// (including an empty remainder, e.g. `SW` or `SWX` against prefix
    /// `SW`).
    Malformed,

    /// The prefix matches and the number falls outside the range (including
    /// numbers too large to represent).
    OutOfRange,

    /// The prefix matches and the number falls within the range.
    InRange(u32),
}

/// What to select: a reference prefix and an inclusive numeric range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    prefix: String,
    lower: u32,
    upper: u32,
}

impl Criteria {
    /// Creates validated criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is empty or `lower > upper`.
    pub fn new(prefix: impl Into<String>, lower: u32, upper: u32) -> Result<Self, CriteriaError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(CriteriaError::EmptyPrefix);
        }
        if lower > upper {
            return Err(CriteriaError::InvertedBounds { lower, upper });
        }
        Ok(Self {
            prefix,
            lower,
            upper,
        })
    }

    /// Returns the reference prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn lower(&self) -> u32 {
        self.lower
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn upper(&self) -> u32 {
        self.upper
    }

    /// Classifies a reference designator against these criteria.
    ///
    /// The prefix must match the leading characters exactly; the remainder
    /// must parse as a base-10 integer. Both bounds are inclusive.
    #[must_use]
    pub fn classify(&self, reference: &str) -> ReferenceMatch {
        let Some(suffix) = reference.strip_prefix(self.prefix.as_str()) else {
            return ReferenceMatch::PrefixMismatch;
        };

        // An empty or non-numeric suffix after a matching prefix is
        // malformed, not a mismatch. A valid decimal number too large for
        // u32 is still a number; it is out of range, never malformed.
        match suffix.parse::<u32>() {
            Ok(n) if self.lower <= n && n <= self.upper => ReferenceMatch::InRange(n),
            Ok(_) => ReferenceMatch::OutOfRange,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => ReferenceMatch::OutOfRange,
            Err(_) => ReferenceMatch::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sw_range() -> Criteria {
        Criteria::new("SW", 33, 62).unwrap()
    }

    #[test]
    fn empty_prefix_rejected() {
        assert!(matches!(
            Criteria::new("", 33, 62),
            Err(CriteriaError::EmptyPrefix)
        ));
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(matches!(
            Criteria::new("SW", 62, 33),
            Err(CriteriaError::InvertedBounds {
                lower: 62,
                upper: 33
            })
        ));
    }

    #[test]
    fn degenerate_single_value_range_allowed() {
        let criteria = Criteria::new("SW", 40, 40).unwrap();
        assert_eq!(criteria.classify("SW40"), ReferenceMatch::InRange(40));
        assert_eq!(criteria.classify("SW41"), ReferenceMatch::OutOfRange);
    }

    #[test]
    fn prefix_mismatch() {
        assert_eq!(sw_range().classify("R1"), ReferenceMatch::PrefixMismatch);
        assert_eq!(sw_range().classify("S1"), ReferenceMatch::PrefixMismatch);
        assert_eq!(sw_range().classify(""), ReferenceMatch::PrefixMismatch);
    }

    #[test]
    fn inclusive_boundaries() {
        let criteria = sw_range();
        assert_eq!(criteria.classify("SW33"), ReferenceMatch::InRange(33));
        assert_eq!(criteria.classify("SW62"), ReferenceMatch::InRange(62));
        assert_eq!(criteria.classify("SW32"), ReferenceMatch::OutOfRange);
        assert_eq!(criteria.classify("SW63"), ReferenceMatch::OutOfRange);
    }

    #[test]
    fn suffix_beyond_u32_is_out_of_range() {
        let criteria = sw_range();
        assert_eq!(
            criteria.classify("SW5000000000"),
            ReferenceMatch::OutOfRange
        );
        assert_eq!(
            criteria.classify("SW99999999999999999999999999999999999999999"),
            ReferenceMatch::OutOfRange
        );
    }

    #[test]
    fn malformed_suffixes() {
        let criteria = sw_range();
        assert_eq!(criteria.classify("SWX"), ReferenceMatch::Malformed);
        assert_eq!(criteria.classify("SW"), ReferenceMatch::Malformed);
        assert_eq!(criteria.classify("SW4A"), ReferenceMatch::Malformed);
    }

    #[test]
    fn longer_prefix() {
        let criteria = Criteria::new("LED", 1, 8).unwrap();
        assert_eq!(criteria.classify("LED5"), ReferenceMatch::InRange(5));
        assert_eq!(criteria.classify("LED9"), ReferenceMatch::OutOfRange);
        assert_eq!(criteria.classify("SW5"), ReferenceMatch::PrefixMismatch);
    }
}
