use crate::core::Result;
use crate::neighbors::NeighborSearch;
use crate::undersampling::{neighbor_vote_marks, tomek_marks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruningRule {
    /// Edited nearest neighbors: drop rows outvoted by their `k` neighbors.
    NeighborVote { k: usize },
    /// Drop both members of every Tomek link.
    TomekLink,
}

impl PruningRule {
    /// Removal mark per pool row. The neighbor vote never marks rows labeled
    /// `untouchable`; Tomek links drop both sides regardless of label.
    pub fn marks(
        &self,
        search: &NeighborSearch<'_>,
        labels: &[usize],
        untouchable: usize,
    ) -> Result<Vec<bool>> {
        match *self {
            PruningRule::NeighborVote { k } => neighbor_vote_marks(search, labels, k, untouchable),
            PruningRule::TomekLink => tomek_marks(search, labels),
        }
    }
}
