//! JSON configuration: tagged algorithm choices and their builders.

pub mod build;
pub mod choices;

use anyhow::{Context, Result};
use build::build_resampler;
use choices::ResamplerChoice;
use std::fs;
use std::path::Path;

use crate::resamplers::Resampler;

/// Reads a `{"type": ..., "params": {...}}` file.
pub fn load_choice(path: impl AsRef<Path>) -> Result<ResamplerChoice> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read resampler config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid resampler config {}", path.display()))
}

/// Reads a config file and builds the algorithm it names.
pub fn load_resampler(path: impl AsRef<Path>) -> Result<Box<dyn Resampler>> {
    let path = path.as_ref();
    let choice = load_choice(path)?;
    build_resampler(choice)
        .with_context(|| format!("cannot build resampler from {}", path.display()))
}
