mod context;
mod engine;
mod metric;

pub use context::DistanceContext;
pub use engine::{distance, euclidean};
pub use metric::DistanceMetric;
