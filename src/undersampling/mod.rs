//! Sample pruning rules. Each rule marks pool rows for removal.

mod neighbor_vote;
mod rule;
mod tomek;

pub use neighbor_vote::{neighbor_vote_marks, vote_agrees};
pub use rule::PruningRule;
pub use tomek::{tomek_links, tomek_marks};
