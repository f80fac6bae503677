//! Core traits for filters
//!
//! [`RangeCheck`] is the interface both filter variants share. Implementors
//! only provide storage access; every range query is derived from it, so the
//! inclusive-bound rules live in exactly one place.
//!
//! The numeric capabilities are split in two:
//! - [`Reading`] is enough for range checks and works with unsigned types
//! - [`Sample`] adds signed arithmetic and bounds for change tracking
//!
//! `Display` is only needed to build a [`FilterError`], so it is required
//! by [`check`](RangeCheck::check) alone.

use core::fmt::{Debug, Display};
use core::ops::{Add, Neg, Sub};

use num_traits::{Bounded, Zero};

use crate::errors::{FilterError, FilterResult};

/// Scalar that can be compared against a range
pub trait Reading: Copy + PartialOrd + Zero + Debug {}

impl<T> Reading for T where T: Copy + PartialOrd + Zero + Debug {}

/// Scalar that also supports signed deltas between readings
///
/// Covers signed integers, floats and signed fixed-point types. Overflow of
/// the change `value - previous` follows the numeric type; every other
/// operation saturates at the type's bounds.
pub trait Sample:
    Reading + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> + Bounded
{
}

impl<T> Sample for T where
    T: Reading + Add<Output = T> + Sub<Output = T> + Neg<Output = T> + Bounded
{
}

/// Absolute value: `x` if `x >= 0`, otherwise `-x`
///
/// Saturates at `T::max_value()` for `T::min_value()`, which has no positive
/// counterpart in two's complement.
#[inline]
pub fn magnitude<T: Sample>(value: T) -> T {
    if value >= T::zero() {
        value
    } else if value == T::min_value() {
        T::max_value()
    } else {
        -value
    }
}

/// Width of `[minimum, maximum]`, saturating at `T::max_value()`
///
/// Expects `minimum <= maximum`.
#[inline]
pub fn span<T: Sample>(minimum: T, maximum: T) -> T {
    // max - min overflows only when min < 0 and max > T::MAX + min
    if minimum < T::zero() && maximum > T::max_value() + minimum {
        T::max_value()
    } else {
        maximum - minimum
    }
}

/// Range validation over a stored value
///
/// Bounds are inclusive: a value equal to `minimum()` or `maximum()` is
/// valid. The `*_for` methods record the given value first and then evaluate,
/// matching `set_value(v)` followed by the plain query.
pub trait RangeCheck {
    /// Numeric type of the readings
    type Value: Reading;

    /// Lower inclusive bound
    fn minimum(&self) -> Self::Value;

    /// Upper inclusive bound
    fn maximum(&self) -> Self::Value;

    /// Last recorded value
    fn value(&self) -> Self::Value;

    /// Record a new value
    fn set_value(&mut self, value: Self::Value) -> &mut Self;

    /// Value is below the minimum
    #[inline]
    fn is_low(&self) -> bool {
        self.value() < self.minimum()
    }

    /// Value is above the maximum
    #[inline]
    fn is_high(&self) -> bool {
        self.value() > self.maximum()
    }

    /// Value is outside the range
    fn is_invalid(&self) -> bool {
        self.is_low() || self.is_high()
    }

    /// Negation of [`is_invalid`](Self::is_invalid)
    fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    /// Stored value clamped to the range, without recording anything
    fn clamped(&self) -> Self::Value {
        if self.is_low() {
            self.minimum()
        } else if self.is_high() {
            self.maximum()
        } else {
            self.value()
        }
    }

    /// Record `value` and return it clamped to the range
    ///
    /// In-range values, including the bounds themselves, pass through
    /// unchanged.
    fn limit(&mut self, value: Self::Value) -> Self::Value {
        self.set_value(value).clamped()
    }

    /// Re-feed the stored value through [`limit`](Self::limit)
    fn relimit(&mut self) -> Self::Value {
        let value = self.value();
        self.limit(value)
    }

    /// Classify the stored value as a result
    fn check(&self) -> FilterResult<Self::Value>
    where
        Self::Value: Display,
    {
        let value = self.value();
        if self.is_low() {
            Err(FilterError::BelowMinimum { value, minimum: self.minimum() })
        } else if self.is_high() {
            Err(FilterError::AboveMaximum { value, maximum: self.maximum() })
        } else {
            Ok(value)
        }
    }

    /// Record `value`, then [`is_low`](Self::is_low)
    fn is_low_for(&mut self, value: Self::Value) -> bool {
        self.set_value(value).is_low()
    }

    /// Record `value`, then [`is_high`](Self::is_high)
    fn is_high_for(&mut self, value: Self::Value) -> bool {
        self.set_value(value).is_high()
    }

    /// Record `value`, then [`is_invalid`](Self::is_invalid)
    fn is_invalid_for(&mut self, value: Self::Value) -> bool {
        self.set_value(value).is_invalid()
    }

    /// Record `value`, then [`is_valid`](Self::is_valid)
    fn is_valid_for(&mut self, value: Self::Value) -> bool {
        self.set_value(value).is_valid()
    }

    /// Record `value`, then [`check`](Self::check)
    fn check_for(&mut self, value: Self::Value) -> FilterResult<Self::Value>
    where
        Self::Value: Display,
    {
        self.set_value(value).check()
    }
}
