//! Class-imbalance correction for labeled tabular data.
//!
//! Oversamplers synthesize minority rows (uniform, density-weighted or
//! principal-axis interpolation); cleaners drop rows by neighbor vote or
//! Tomek link. Distances are Euclidean over normalized features or HVDM.

pub mod config;
pub mod core;
pub mod distance;
pub mod neighbors;
pub mod oversampling;
pub mod preprocessing;
pub mod reporting;
pub mod resamplers;
pub mod undersampling;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
