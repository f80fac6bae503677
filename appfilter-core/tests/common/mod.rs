//! Shared sample sequences and reference models for integration tests
//!
//! The reference functions restate each rule directly over the raw sample
//! list so the filter output can be compared index by index.

#![allow(dead_code)]

pub const MINIMUM: f32 = 40.0;
pub const MAXIMUM: f32 = 60.0;
pub const DIFFERENCE: f32 = 10.3;

/// Readings crossing both bounds
pub const RANGE_SAMPLES: [f32; 5] = [38.9, 45.0, 56.7, 61.7, 42.3];

/// Readings with large swings, a repeat and out-of-range values
pub const CHANGE_SAMPLES: [f32; 9] = [15.4, -8.7, -9.6, 38.9, 38.9, 45.0, 56.7, 61.7, 42.3];

/// Expected clamp of a single reading
pub fn expected_limit(value: f32) -> f32 {
    if value < MINIMUM {
        MINIMUM
    } else if value > MAXIMUM {
        MAXIMUM
    } else {
        value
    }
}

/// Pair each sample with its predecessor, `None` for the first one
pub fn with_previous(samples: &[f32]) -> impl Iterator<Item = (usize, f32, Option<f32>)> + '_ {
    samples
        .iter()
        .enumerate()
        .map(move |(i, &value)| (i, value, i.checked_sub(1).map(|p| samples[p])))
}
