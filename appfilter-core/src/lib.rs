//! Range and change filter for scalar sensor readings
//!
//! Validates a single measurement against a configured `[minimum, maximum]`
//! range and, optionally, against the largest change allowed between two
//! consecutive readings. Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - O(1) state, no heap allocation
//! - Every operation accepts any input; nothing fails or panics
//! - Works with integers, floats and (with `fixed`) fixed-point samples
//!
//! ```
//! use appfilter_core::{RangeChangeFilter, RangeCheck};
//!
//! let mut filter = RangeChangeFilter::new(60.0_f32, 40.0, 10.3);
//!
//! assert_eq!(filter.limit(38.9), 40.0);
//! assert!(filter.is_valid_for(45.0));
//!
//! // 45.0 -> 61.7 is out of range and a jump at the same time
//! assert!(filter.is_jump_for(61.7));
//! assert_eq!(filter.relimit(), 60.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod errors;
pub mod filters;
pub mod traits;

// Public API
pub use config::FilterConfig;
pub use errors::{FilterError, FilterResult};
pub use filters::{RangeChangeFilter, RangeFilter, Trend};
pub use traits::{RangeCheck, Reading, Sample};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
