//! Plain range filter
//!
//! Clamps and validates readings against a fixed inclusive range. No
//! history is kept.

use crate::{
    config::FilterConfig,
    traits::{RangeCheck, Reading},
};

use super::ordered;

/// Range filter without change tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter<T> {
    /// Lower inclusive bound
    minimum: T,

    /// Upper inclusive bound
    maximum: T,

    /// Last recorded reading
    value: T,
}

impl<T: Reading> RangeFilter<T> {
    /// Create filter for `[minimum, maximum]`
    ///
    /// Reversed bounds are swapped silently.
    pub fn new(maximum: T, minimum: T) -> Self {
        let (minimum, maximum) = ordered(maximum, minimum);
        Self {
            minimum,
            maximum,
            value: T::zero(),
        }
    }

    /// Create filter for `[0, maximum]`
    pub fn with_maximum(maximum: T) -> Self {
        Self::new(maximum, T::zero())
    }

    /// Overwrite the minimum
    ///
    /// Not re-checked against the maximum; keeping `minimum <= maximum` is
    /// up to the caller.
    pub fn set_minimum(&mut self, minimum: T) {
        self.minimum = minimum;
    }

    /// Overwrite the maximum
    ///
    /// Not re-checked against the minimum.
    pub fn set_maximum(&mut self, maximum: T) {
        self.maximum = maximum;
    }

    /// Active configuration
    pub fn config(&self) -> FilterConfig<T> {
        FilterConfig::new(self.maximum, self.minimum)
    }
}

impl<T: Reading> RangeCheck for RangeFilter<T> {
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

    fn set_value(&mut self, value: T) -> &mut Self {
        self.value = value;
        self
    }
}
