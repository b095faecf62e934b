pub mod attributes;
pub mod dataset;
pub mod error;
pub mod instance_header;

pub use dataset::{ClassCounts, Dataset, Matrix, MinorityPolicy};
pub use error::{ResampleError, Result};
pub use instance_header::InstanceHeader;
