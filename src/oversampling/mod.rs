//! Synthetic minority sample generation.
//!
//! Every strategy consumes the same inputs: a pool of rows, one neighborhood
//! per seed row and the number of rows to synthesize from each seed.

mod buffer;
mod density_weighted;
mod generator;
mod principal_axis;
mod uniform;

pub use buffer::SyntheticBuffer;
pub use density_weighted::DensityWeighting;
pub use generator::{Generator, SeedNeighborhood};
pub use principal_axis::principal_axis;
pub use uniform::interpolate;
