//! Range filter with change tracking
//!
//! Extends range validation with the signed delta between consecutive
//! readings:
//! - Jump detection: `|change|` above the configured difference
//! - Trend: increasing, decreasing or unchanged
//!
//! The first reading after [`init`](RangeChangeFilter::init) only seeds the
//! history, so none of the change-based queries can fire on it.

use core::fmt::Display;

use crate::{
    config::FilterConfig,
    errors::{FilterError, FilterResult},
    traits::{magnitude, span, RangeCheck, Sample},
};

use super::ordered;

/// Direction of the last change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Value went up
    Increasing,
    /// Value went down
    Decreasing,
    /// Value repeated
    Unchanged,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Trend {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Increasing => defmt::write!(fmt, "increasing"),
            Self::Decreasing => defmt::write!(fmt, "decreasing"),
            Self::Unchanged => defmt::write!(fmt, "unchanged"),
        }
    }
}

/// Range filter with jump and trend detection
///
/// ## Internal Invariants
///
/// - `minimum <= maximum`
/// - `0 <= difference <= maximum - minimum`, saturated at `T::max_value()`
/// - `change` is zero until the second reading after `init()`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeChangeFilter<T> {
    /// Lower inclusive bound
    minimum: T,

    /// Upper inclusive bound
    maximum: T,

    /// Last recorded reading
    value: T,

    /// Largest allowed absolute change, zero disables jump detection
    difference: T,

    /// Signed delta from the previous reading
    change: T,

    /// At least one reading recorded since `init()`
    initialized: bool,
}

impl<T: Sample> RangeChangeFilter<T> {
    /// Create filter for `[minimum, maximum]` with jump threshold `difference`
    ///
    /// Reversed bounds are swapped, then the threshold is normalized as by
    /// [`set_difference`](Self::set_difference).
    pub fn new(maximum: T, minimum: T, difference: T) -> Self {
        let (minimum, maximum) = ordered(maximum, minimum);
        let mut filter = Self {
            minimum,
            maximum,
            value: T::zero(),
            difference: T::zero(),
            change: T::zero(),
            initialized: false,
        };
        filter.set_difference(difference);
        filter.init();
        filter
    }

    /// Create filter for `[0, maximum]` with jump detection disabled
    pub fn with_maximum(maximum: T) -> Self {
        Self::new(maximum, T::zero(), T::zero())
    }

    /// Restart change tracking
    ///
    /// Clears value and change; bounds and difference are kept.
    pub fn init(&mut self) {
        log_debug!("Change tracking reset");
        self.value = T::zero();
        self.change = T::zero();
        self.initialized = false;
    }

    /// Set the minimum, never above the current maximum
    pub fn set_minimum(&mut self, minimum: T) {
        self.minimum = if minimum < self.maximum { minimum } else { self.maximum };
        self.set_difference(self.difference);
    }

    /// Set the maximum, never below the current minimum
    pub fn set_maximum(&mut self, maximum: T) {
        self.maximum = if maximum > self.minimum { maximum } else { self.minimum };
        self.set_difference(self.difference);
    }

    /// Set the jump threshold as `min(maximum - minimum, |difference|)`
    ///
    /// Both terms saturate at `T::max_value()`, so extreme integer inputs
    /// cannot push the threshold outside `[0, maximum - minimum]`.
    pub fn set_difference(&mut self, difference: T) {
        let width = span(self.minimum, self.maximum);
        let difference = magnitude(difference);
        self.difference = if difference < width {
            difference
        } else {
            if difference > width {
                log_debug!("Difference {:?} capped to span {:?}", difference, width);
            }
            width
        };
    }

    /// Largest allowed absolute change
    pub fn difference(&self) -> T {
        self.difference
    }

    /// Signed delta between the last two readings
    pub fn change(&self) -> T {
        self.change
    }

    /// At least one reading recorded since `init()`
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Last change exceeds the allowed difference
    ///
    /// Always false while the difference is zero.
    pub fn is_jump(&self) -> bool {
        // difference >= 0, so -difference cannot overflow
        self.initialized
            && self.difference > T::zero()
            && (self.change > self.difference || self.change < -self.difference)
    }

    /// Last change was negative
    pub fn is_decr(&self) -> bool {
        self.initialized && self.change < T::zero()
    }

    /// Last change was positive
    pub fn is_incr(&self) -> bool {
        self.initialized && self.change > T::zero()
    }

    /// Last change was zero
    ///
    /// True right after the first reading, since no change is recorded yet.
    pub fn is_equal(&self) -> bool {
        self.initialized && self.change == T::zero()
    }

    /// Direction of the last change, `None` before the first reading
    pub fn trend(&self) -> Option<Trend> {
        if self.is_incr() {
            Some(Trend::Increasing)
        } else if self.is_decr() {
            Some(Trend::Decreasing)
        } else if self.is_equal() {
            Some(Trend::Unchanged)
        } else {
            None
        }
    }

    /// Record `value`, then [`is_jump`](Self::is_jump)
    pub fn is_jump_for(&mut self, value: T) -> bool {
        self.set_value(value).is_jump()
    }

    /// Record `value`, then [`is_decr`](Self::is_decr)
    pub fn is_decr_for(&mut self, value: T) -> bool {
        self.set_value(value).is_decr()
    }

    /// Record `value`, then [`is_incr`](Self::is_incr)
    pub fn is_incr_for(&mut self, value: T) -> bool {
        self.set_value(value).is_incr()
    }

    /// Record `value`, then [`is_equal`](Self::is_equal)
    pub fn is_equal_for(&mut self, value: T) -> bool {
        self.set_value(value).is_equal()
    }

    /// Record `value`, then [`trend`](Self::trend)
    pub fn trend_for(&mut self, value: T) -> Option<Trend> {
        self.set_value(value).trend()
    }

    /// Active configuration
    pub fn config(&self) -> FilterConfig<T> {
        FilterConfig::new(self.maximum, self.minimum).with_difference(self.difference)
    }
}

impl<T: Sample> RangeCheck for RangeChangeFilter<T> {
    type Value = T;

    fn minimum(&self) -> T {
        self.minimum
    }

    fn maximum(&self) -> T {
        self.maximum
    }

    fn value(&self) -> T {
        self.value
    }

    /// Record a reading, updating the change from the previous one
    ///
    /// The first reading after `init()` leaves the change untouched.
    fn set_value(&mut self, value: T) -> &mut Self {
        if self.initialized {
            self.change = value - self.value;
        } else {
            self.initialized = true;
        }
        self.value = value;

        if self.is_jump() {
            log_trace!("Jump to {:?}: change {:?} > {:?}", value, self.change, self.difference);
        }
        self
    }

    fn is_invalid(&self) -> bool {
        self.is_low() || self.is_high() || self.is_jump()
    }

    fn check(&self) -> FilterResult<T>
    where
        T: Display,
    {
        let value = self.value;
        if self.is_low() {
            Err(FilterError::BelowMinimum { value, minimum: self.minimum })
        } else if self.is_high() {
            Err(FilterError::AboveMaximum { value, maximum: self.maximum })
        } else if self.is_jump() {
            Err(FilterError::Jump { change: self.change, difference: self.difference })
        } else {
            Ok(value)
        }
    }
}
