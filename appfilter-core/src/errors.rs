//! Error Types for Rejected Readings
//!
//! ## Design Philosophy
//!
//! Filter operations never fail: every reading is stored, `limit()` always
//! returns a value and misconfiguration is normalized instead of rejected.
//! The boolean queries (`is_low`, `is_high`, `is_jump`, ...) are the primary
//! interface. [`FilterError`] exists for callers who want to know *why* a
//! reading is invalid and prefer `?` over a chain of `if`s:
//!
//! ```rust
//! use appfilter_core::{FilterError, FilterResult, RangeChangeFilter, RangeCheck};
//!
//! fn accept(filter: &mut RangeChangeFilter<f32>, raw: f32) -> FilterResult<f32> {
//!     filter.check_for(raw)
//! }
//!
//! let mut filter = RangeChangeFilter::new(60.0, 40.0, 10.0);
//! assert_eq!(accept(&mut filter, 45.0), Ok(45.0));
//! assert!(matches!(
//!     accept(&mut filter, 58.0),
//!     Err(FilterError::Jump { .. })
//! ));
//! ```
//!
//! Errors are small, `Copy` and carry the offending numbers inline, so they
//! can be queued or logged without allocation.
//!
//! ## Precedence
//!
//! A reading can be out of range and a jump at the same time. Range
//! violations win: the bound that was crossed is the more actionable fact.

use core::fmt::{Debug, Display};

use thiserror_no_std::Error;

/// Result type for filter checks, carrying the accepted value on success
pub type FilterResult<T> = Result<T, FilterError<T>>;

/// Reason a reading was classified as invalid
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FilterError<T: Copy + Debug + Display> {
    /// Value below the inclusive minimum
    #[error("Value {value} below minimum {minimum}")]
    BelowMinimum {
        /// The rejected reading
        value: T,
        /// Configured lower bound
        minimum: T,
    },

    /// Value above the inclusive maximum
    #[error("Value {value} above maximum {maximum}")]
    AboveMaximum {
        /// The rejected reading
        value: T,
        /// Configured upper bound
        maximum: T,
    },

    /// Change from the previous reading exceeds the allowed difference
    #[error("Change {change} exceeds allowed difference {difference}")]
    Jump {
        /// Signed delta from the previous reading
        change: T,
        /// Configured maximum absolute difference
        difference: T,
    },
}

impl<T: Copy + Debug + Display> FilterError<T> {
    /// Bound or threshold the reading violated
    pub fn limit(&self) -> T {
        match *self {
            Self::BelowMinimum { minimum, .. } => minimum,
            Self::AboveMaximum { maximum, .. } => maximum,
            Self::Jump { difference, .. } => difference,
        }
    }

    /// Whether the reading fell outside the configured range
    pub fn is_range(&self) -> bool {
        !matches!(self, Self::Jump { .. })
    }
}

#[cfg(feature = "defmt")]
impl<T: Copy + Debug + Display + defmt::Format> defmt::Format for FilterError<T> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::BelowMinimum { value, minimum } =>
                defmt::write!(fmt, "Value {} below {}", value, minimum),
            Self::AboveMaximum { value, maximum } =>
                defmt::write!(fmt, "Value {} above {}", value, maximum),
            Self::Jump { change, difference } =>
                defmt::write!(fmt, "Change {} exceeds {}", change, difference),
        }
    }
}
