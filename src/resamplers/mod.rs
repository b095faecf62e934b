//! Top-level resampling algorithms.
//!
//! Each algorithm is a fixed pipeline over a [`Run`]: resolve the minority
//! label, map rows into metric space, build neighborhoods, apply exactly one
//! generator or pruning rule, then assemble the output dataset.

mod adasyn;
mod adoms;
mod enn;
mod resampler;
mod run;
mod settings;
mod smote;
mod smote_enn;
mod tomek_links;

pub use adasyn::{Adasyn, DEFAULT_BALANCE_LEVEL, DEFAULT_IMBALANCE_THRESHOLD};
pub use adoms::Adoms;
pub use enn::EditedNearestNeighbors;
pub use resampler::{ResampleOutcome, Resampler};
pub use settings::{DEFAULT_K, ResamplerSettings};
pub use smote::{DEFAULT_PERCENT, Smote};
pub use smote_enn::{DEFAULT_ENN_K, SmoteEnn};
pub use tomek_links::TomekLinks;

pub(crate) use run::Run;
