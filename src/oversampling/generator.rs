use crate::core::{Matrix, ResampleError, Result};
use crate::neighbors::{Neighbor, pool_row, require_neighbors};
use crate::oversampling::{DensityWeighting, SyntheticBuffer, interpolate, principal_axis};
use crate::utils::math::dot;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// A seed row of the pool and its ranked neighbors.
#[derive(Debug, Clone)]
pub struct SeedNeighborhood {
    pub seed: usize,
    pub neighbors: Vec<Neighbor>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Generator {
    /// SMOTE: per-feature uniform interpolation toward a random neighbor.
    Uniform,
    /// ADASYN: uniform interpolation. The per-seed counts passed to
    /// [`Generator::generate`] must already come from
    /// [`DensityWeighting::allocate`]; the weighting is carried for logging.
    DensityWeighted(DensityWeighting),
    /// ADOMS: displacement along the neighborhood's dominant principal axis.
    PrincipalAxis,
}

impl Generator {
    /// Synthesizes `counts[i]` rows from `neighborhoods[i]` for every seed.
    /// `nominal` flags feature columns holding unordered codes.
    pub fn generate(
        &self,
        pool: &Matrix,
        nominal: &[bool],
        neighborhoods: &[SeedNeighborhood],
        counts: &[usize],
        rng: &mut StdRng,
    ) -> Result<SyntheticBuffer> {
        if neighborhoods.len() != counts.len() {
            return Err(ResampleError::DimensionMismatch {
                expected: neighborhoods.len(),
                found: counts.len(),
            });
        }
        let width = pool.first().map_or(0, Vec::len);
        let total: usize = counts.iter().sum();
        let mut buffer = SyntheticBuffer::new(total, width);

        for (hood, &count) in neighborhoods.iter().zip(counts) {
            if count == 0 {
                continue;
            }
            match self {
                Generator::Uniform | Generator::DensityWeighted(_) => {
                    uniform_from_seed(pool, nominal, hood, count, rng, &mut buffer)?
                }
                Generator::PrincipalAxis => {
                    principal_axis_from_seed(pool, nominal, hood, count, rng, &mut buffer)?
                }
            }
        }

        debug!(generator = ?self, synthesized = buffer.len(), "synthetic rows generated");
        Ok(buffer)
    }
}

fn uniform_from_seed(
    pool: &Matrix,
    nominal: &[bool],
    hood: &SeedNeighborhood,
    count: usize,
    rng: &mut StdRng,
    buffer: &mut SyntheticBuffer,
) -> Result<()> {
    require_neighbors(&hood.neighbors, 1)?;
    let x = pool_row(pool, hood.seed)?;
    for _ in 0..count {
        let pick = rng.random_range(0..hood.neighbors.len());
        let z = pool_row(pool, hood.neighbors[pick].index)?;
        buffer.push(hood.seed, interpolate(x, z, nominal, rng))?;
    }
    Ok(())
}

/// Nominal columns keep the seed's code; the axis only displaces numeric
/// columns.
fn principal_axis_from_seed(
    pool: &Matrix,
    nominal: &[bool],
    hood: &SeedNeighborhood,
    count: usize,
    rng: &mut StdRng,
    buffer: &mut SyntheticBuffer,
) -> Result<()> {
    let axis = principal_axis(pool, hood.seed, &hood.neighbors)?;
    let axis_norm = dot(&axis, &axis);
    let x = pool_row(pool, hood.seed)?;
    for _ in 0..count {
        let pick = rng.random_range(0..hood.neighbors.len());
        let neighbor = hood.neighbors[pick];
        let z = pool_row(pool, neighbor.index)?;
        let diff: Vec<f64> = z.iter().zip(x.iter()).map(|(a, b)| a - b).collect();
        let projection = if axis_norm > 0.0 {
            dot(&diff, &axis) / axis_norm
        } else {
            0.0
        };
        let factor: f64 = rng.random();
        let scale = projection * neighbor.distance * factor;
        let row = x
            .iter()
            .zip(axis.iter())
            .enumerate()
            .map(|(j, (&xi, &ai))| {
                if nominal.get(j).copied().unwrap_or(false) {
                    xi
                } else {
                    xi + scale * ai
                }
            })
            .collect();
        buffer.push(hood.seed, row)?;
    }
    Ok(())
}
