use crate::core::{Matrix, Result};
use crate::neighbors::{Neighbor, pool_row, require_neighbors};
use crate::utils::math::{covariance, dominant_eigenvector};

/// Dominant principal axis of a seed row together with its neighbors.
///
/// At least two neighbors are required for the covariance to carry a
/// direction.
pub fn principal_axis(pool: &Matrix, seed: usize, neighbors: &[Neighbor]) -> Result<Vec<f64>> {
    require_neighbors(neighbors, 2)?;
    let mut rows: Vec<&[f64]> = Vec::with_capacity(neighbors.len() + 1);
    rows.push(pool_row(pool, seed)?);
    for n in neighbors {
        rows.push(pool_row(pool, n.index)?);
    }
    Ok(dominant_eigenvector(&covariance(&rows)))
}
