mod datasets;
mod headers;

pub use datasets::*;
pub use headers::*;
