use crate::core::{Matrix, ResampleError, Result};
use crate::distance::{DistanceContext, DistanceMetric, distance};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

/// Exhaustive nearest-neighbor search over a fixed pool of rows.
///
/// Results are ordered by ascending distance, ties broken by ascending pool
/// index, so repeated queries over the same pool always agree. A request for
/// more neighbors than there are candidates is capped at the candidate count.
pub struct NeighborSearch<'a> {
    pool: &'a Matrix,
    metric: DistanceMetric,
    context: &'a DistanceContext,
}

impl<'a> NeighborSearch<'a> {
    pub fn new(pool: &'a Matrix, metric: DistanceMetric, context: &'a DistanceContext) -> Self {
        Self {
            pool,
            metric,
            context,
        }
    }

    pub fn pool(&self) -> &'a Matrix {
        self.pool
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn distance_between(&self, i: usize, j: usize) -> Result<f64> {
        distance(self.row(i)?, self.row(j)?, self.metric, self.context)
    }

    fn row(&self, index: usize) -> Result<&'a [f64]> {
        pool_row(self.pool, index)
    }

    /// Up to `k` nearest rows of the whole pool, never including `query`.
    pub fn nearest(&self, query: usize, k: usize) -> Result<Vec<Neighbor>> {
        self.nearest_among(query, 0..self.pool.len(), k)
    }

    /// Up to `k` nearest rows among `candidates`, never including `query`.
    pub fn nearest_among<I>(&self, query: usize, candidates: I, k: usize) -> Result<Vec<Neighbor>>
    where
        I: IntoIterator<Item = usize>,
    {
        let point = self.row(query)?;
        let mut scored = Vec::new();
        for index in candidates {
            if index == query {
                continue;
            }
            let d = distance(point, self.row(index)?, self.metric, self.context)?;
            scored.push(Neighbor { index, distance: d });
        }
        scored.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.index.cmp(&b.index))
        });
        scored.truncate(k);
        Ok(scored)
    }
}

/// Row `index` of `pool`, or an error when it lies outside the pool.
pub fn pool_row(pool: &Matrix, index: usize) -> Result<&[f64]> {
    pool.get(index).map(Vec::as_slice).ok_or_else(|| {
        ResampleError::config(format!("row {index} outside pool of {} rows", pool.len()))
    })
}

/// Indices of the `k` nearest rows of `pool` to `pool[query_index]`.
pub fn k_neighbors(
    pool: &Matrix,
    query_index: usize,
    k: usize,
    metric: DistanceMetric,
    context: &DistanceContext,
) -> Result<Vec<usize>> {
    let search = NeighborSearch::new(pool, metric, context);
    Ok(search
        .nearest(query_index, k)?
        .into_iter()
        .map(|n| n.index)
        .collect())
}

/// Fails when fewer than `required` neighbors were found.
pub fn require_neighbors(neighbors: &[Neighbor], required: usize) -> Result<()> {
    if neighbors.len() < required {
        Err(ResampleError::InsufficientNeighbors {
            required,
            available: neighbors.len(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::normalize;
    use crate::testing::dummies::{blobs, header_numeric};

    fn line_pool() -> (Matrix, DistanceContext) {
        let pool = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.3, 0.0],
            vec![0.55, 0.0],
            vec![1.0, 0.0],
        ];
        let ctx = DistanceContext::build(&header_numeric(2), &pool, &[0, 0, 1, 1, 1]).unwrap();
        (pool, ctx)
    }

    #[test]
    fn excludes_query_and_orders_by_distance() {
        let (pool, ctx) = line_pool();
        let got = k_neighbors(&pool, 2, 3, DistanceMetric::Euclidean, &ctx).unwrap();
        assert_eq!(got, vec![1, 3, 0]);
    }

    #[test]
    fn caps_k_at_available_candidates() {
        let (pool, ctx) = line_pool();
        let got = k_neighbors(&pool, 0, 10, DistanceMetric::Euclidean, &ctx).unwrap();
        assert_eq!(got.len(), pool.len() - 1);
        assert!(!got.contains(&0));
    }

    #[test]
    fn ties_break_toward_lower_index() {
        let pool = vec![vec![0.5], vec![1.0], vec![0.0], vec![1.0], vec![0.0]];
        let ctx = DistanceContext::build(&header_numeric(1), &pool, &[0; 5]).unwrap();
        let got = k_neighbors(&pool, 0, 4, DistanceMetric::Euclidean, &ctx).unwrap();
        assert_eq!(got, vec![1, 2, 3, 4]);
    }

    #[test]
    fn distances_are_non_decreasing_and_repeatable() {
        let ds = blobs(10, 40, 9);
        let pool = normalize(&ds);
        let ctx = DistanceContext::build(ds.header(), &pool, ds.labels()).unwrap();
        let search = NeighborSearch::new(&pool, DistanceMetric::Euclidean, &ctx);
        for q in 0..pool.len() {
            let first = search.nearest(q, 5).unwrap();
            assert_eq!(first.len(), 5);
            assert!(first.windows(2).all(|w| w[0].distance <= w[1].distance));
            assert!(first.iter().all(|n| n.index != q));
            assert_eq!(first, search.nearest(q, 5).unwrap());
        }
    }

    #[test]
    fn candidate_restriction_is_honored() {
        let (pool, ctx) = line_pool();
        let search = NeighborSearch::new(&pool, DistanceMetric::Euclidean, &ctx);
        let got = search.nearest_among(1, [3, 4, 1], 5).unwrap();
        let idx: Vec<usize> = got.iter().map(|n| n.index).collect();
        assert_eq!(idx, vec![3, 4]);
    }

    #[test]
    fn out_of_range_query_is_rejected() {
        let (pool, ctx) = line_pool();
        assert!(k_neighbors(&pool, 99, 2, DistanceMetric::Euclidean, &ctx).is_err());
    }

    #[test]
    fn require_neighbors_reports_shortfall() {
        let one = [Neighbor {
            index: 0,
            distance: 0.0,
        }];
        let err = require_neighbors(&one, 2).unwrap_err();
        assert!(matches!(
            err,
            ResampleError::InsufficientNeighbors {
                required: 2,
                available: 1
            }
        ));
        assert!(require_neighbors(&one, 1).is_ok());
    }
}
