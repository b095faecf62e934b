mod knn;

pub use knn::{Neighbor, NeighborSearch, k_neighbors, pool_row, require_neighbors};
