mod normalization;
mod rounding;

pub use normalization::{AttributeRanges, attribute_ranges, denormalize, normalize};
pub use rounding::{MAX_DECIMALS, Precision, infer_precision, round_to};
