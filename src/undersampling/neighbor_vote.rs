use crate::core::{ResampleError, Result};
use crate::neighbors::NeighborSearch;
use std::collections::BTreeMap;

/// Whether a row labeled `own_label` survives the vote of its neighbors.
///
/// The own label must be strictly more frequent than every other label among
/// the neighbors; any tie counts as disagreement. A row without neighbors
/// has nothing voting against it and survives.
pub fn vote_agrees<I>(own_label: usize, neighbor_labels: I) -> bool
where
    I: IntoIterator<Item = usize>,
{
    let mut tally: BTreeMap<usize, usize> = BTreeMap::new();
    for label in neighbor_labels {
        *tally.entry(label).or_insert(0) += 1;
    }
    if tally.is_empty() {
        return true;
    }
    let own = tally.get(&own_label).copied().unwrap_or(0);
    let best_other = tally
        .iter()
        .filter(|&(&l, _)| l != own_label)
        .map(|(_, &c)| c)
        .max()
        .unwrap_or(0);
    own > best_other
}

/// Marks every row whose `k` nearest neighbors outvote its label. Rows
/// labeled `untouchable` are never marked.
pub fn neighbor_vote_marks(
    search: &NeighborSearch<'_>,
    labels: &[usize],
    k: usize,
    untouchable: usize,
) -> Result<Vec<bool>> {
    check_labels(search, labels)?;
    let mut marks = vec![false; labels.len()];
    for (i, &label) in labels.iter().enumerate() {
        if label == untouchable {
            continue;
        }
        let neighbors = search.nearest(i, k)?;
        marks[i] = !vote_agrees(label, neighbors.iter().map(|n| labels[n.index]));
    }
    Ok(marks)
}

/// `labels` must hold exactly one label per pool row.
pub(crate) fn check_labels(search: &NeighborSearch<'_>, labels: &[usize]) -> Result<()> {
    if labels.len() != search.pool().len() {
        return Err(ResampleError::DimensionMismatch {
            expected: search.pool().len(),
            found: labels.len(),
        });
    }
    Ok(())
}
