use crate::core::Result;
use crate::neighbors::NeighborSearch;
use crate::undersampling::neighbor_vote::check_labels;

/// Pairs `(i, j)`, `i < j`, of differently labeled rows that are each
/// other's nearest neighbor among rows of another class.
pub fn tomek_links(search: &NeighborSearch<'_>, labels: &[usize]) -> Result<Vec<(usize, usize)>> {
    check_labels(search, labels)?;
    let n = labels.len();
    let mut nearest_foreign = vec![None; n];
    for i in 0..n {
        let candidates = (0..n).filter(|&j| labels[j] != labels[i]);
        nearest_foreign[i] = search
            .nearest_among(i, candidates, 1)?
            .first()
            .map(|nb| nb.index);
    }

    let mut links = Vec::new();
    for (i, nn) in nearest_foreign.iter().enumerate() {
        if let Some(j) = *nn {
            if i < j && nearest_foreign[j] == Some(i) {
                links.push((i, j));
            }
        }
    }
    Ok(links)
}

/// Marks both members of every Tomek link.
pub fn tomek_marks(search: &NeighborSearch<'_>, labels: &[usize]) -> Result<Vec<bool>> {
    let mut marks = vec![false; labels.len()];
    for (i, j) in tomek_links(search, labels)? {
        marks[i] = true;
        marks[j] = true;
    }
    Ok(marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Matrix;
    use crate::distance::{DistanceContext, DistanceMetric};
    use crate::preprocessing::normalize;
    use crate::testing::dummies::{header_numeric, overlapping};

    #[test]
    fn finds_mutual_cross_class_pairs() {
        let pool: Matrix = vec![vec![0.0], vec![0.1], vec![0.45], vec![0.55], vec![0.9], vec![1.0]];
        let labels = vec![0, 0, 0, 1, 1, 1];
        let ctx = DistanceContext::build(&header_numeric(1), &pool, &labels).unwrap();
        let search = NeighborSearch::new(&pool, DistanceMetric::Euclidean, &ctx);
        assert_eq!(tomek_links(&search, &labels).unwrap(), vec![(2, 3)]);
        let marks = tomek_marks(&search, &labels).unwrap();
        assert_eq!(marks, vec![false, false, true, true, false, false]);
    }

    #[test]
    fn same_class_pairs_are_not_links() {
        let pool: Matrix = vec![vec![0.0], vec![0.01], vec![1.0]];
        let labels = vec![0, 0, 1];
        let ctx = DistanceContext::build(&header_numeric(1), &pool, &labels).unwrap();
        let search = NeighborSearch::new(&pool, DistanceMetric::Euclidean, &ctx);
        // 0 and 1 are closest to each other but share a label
        assert_eq!(tomek_links(&search, &labels).unwrap(), vec![(1, 2)]);
    }

    #[test]
    fn links_are_mutual_and_repeatable() {
        let ds = overlapping(10, 40, 6, 21);
        let pool = normalize(&ds);
        let ctx = DistanceContext::build(ds.header(), &pool, ds.labels()).unwrap();
        let search = NeighborSearch::new(&pool, DistanceMetric::Euclidean, &ctx);
        let labels = ds.labels();
        let links = tomek_links(&search, labels).unwrap();
        for &(i, j) in &links {
            assert_ne!(labels[i], labels[j]);
            let foreign_i = (0..labels.len()).filter(|&c| labels[c] != labels[i]);
            let foreign_j = (0..labels.len()).filter(|&c| labels[c] != labels[j]);
            assert_eq!(search.nearest_among(i, foreign_i, 1).unwrap()[0].index, j);
            assert_eq!(search.nearest_among(j, foreign_j, 1).unwrap()[0].index, i);
        }
        assert_eq!(links, tomek_links(&search, labels).unwrap());
    }
}
