//! Range and Change Filters
//!
//! ## Overview
//!
//! Two filters share the [`RangeCheck`](crate::traits::RangeCheck) interface:
//!
//! | Filter                 | Range check | Change tracking | Numeric bound |
//! |------------------------|-------------|-----------------|---------------|
//! | [`RangeFilter`]        | yes         | no              | `Reading`     |
//! | [`RangeChangeFilter`]  | yes         | yes             | `Sample`      |
//!
//! `RangeFilter` only needs ordering, so it also works with unsigned
//! integers straight from an ADC. `RangeChangeFilter` keeps the signed delta
//! between consecutive readings and adds jump and trend detection on top.
//!
//! ## Normalization Instead of Errors
//!
//! Construction never fails. Swapped bounds are put in order and a negative
//! or oversized jump threshold is folded into `[0, maximum - minimum]`:
//!
//! ```rust
//! use appfilter_core::{RangeChangeFilter, RangeCheck};
//!
//! let filter = RangeChangeFilter::new(40, 60, -100);
//! assert_eq!(filter.minimum(), 40);
//! assert_eq!(filter.maximum(), 60);
//! assert_eq!(filter.difference(), 20);
//! ```
//!
//! ## Reading Sequence
//!
//! ```text
//! init()         value=0     change=0      initialized=false
//! set_value(a)   value=a     change=0      initialized=true
//! set_value(b)   value=b     change=b-a
//! set_value(c)   value=c     change=c-b
//! ```
//!
//! Jump and trend queries are all false until the first value is recorded.

mod change;
mod range;

pub use change::{RangeChangeFilter, Trend};
pub use range::RangeFilter;

/// Put bounds in `(minimum, maximum)` order, swapping if needed
pub(crate) fn ordered<T: crate::traits::Reading>(maximum: T, minimum: T) -> (T, T) {
    if minimum > maximum {
        log_debug!("Bounds swapped: minimum {:?} > maximum {:?}", minimum, maximum);
        (maximum, minimum)
    } else {
        (minimum, maximum)
    }
}
