//! Filter configuration
//!
//! [`FilterConfig`] is the plain-data form of a filter's settings, meant to
//! travel in device configuration files. With the `serde` feature it
//! (de)serializes, and `minimum` and `difference` may be omitted:
//!
//! ```json
//! { "maximum": 60.0, "minimum": 40.0, "difference": 10.3 }
//! ```
//!
//! A config is stored as given. Normalization (bound swap, threshold
//! capping) happens when a filter is built from it, so a hand-edited file
//! with reversed bounds still yields a working filter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    filters::{RangeChangeFilter, RangeFilter},
    traits::{Reading, Sample},
};

/// Settings for a range or range-change filter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterConfig<T> {
    /// Upper inclusive bound
    pub maximum: T,

    /// Lower inclusive bound
    #[cfg_attr(feature = "serde", serde(default))]
    pub minimum: T,

    /// Largest allowed absolute change, zero disables jump detection
    #[cfg_attr(feature = "serde", serde(default))]
    pub difference: T,
}

impl<T: Reading> FilterConfig<T> {
    /// Config for `[minimum, maximum]` without jump detection
    pub fn new(maximum: T, minimum: T) -> Self {
        Self {
            maximum,
            minimum,
            difference: T::zero(),
        }
    }

    /// Set the jump threshold
    pub fn with_difference(mut self, difference: T) -> Self {
        self.difference = difference;
        self
    }

    /// Build a plain range filter, ignoring `difference`
    pub fn range_filter(&self) -> RangeFilter<T> {
        RangeFilter::new(self.maximum, self.minimum)
    }
}

impl<T: Sample> FilterConfig<T> {
    /// Build a range filter with change tracking
    pub fn change_filter(&self) -> RangeChangeFilter<T> {
        RangeChangeFilter::new(self.maximum, self.minimum, self.difference)
    }
}

impl<T: Reading> From<FilterConfig<T>> for RangeFilter<T> {
    fn from(config: FilterConfig<T>) -> Self {
        config.range_filter()
    }
}

impl<T: Sample> From<FilterConfig<T>> for RangeChangeFilter<T> {
    fn from(config: FilterConfig<T>) -> Self {
        config.change_filter()
    }
}
