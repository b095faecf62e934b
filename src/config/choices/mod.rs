mod choice;
mod resampler_choice;

pub use choice::Choice;
pub use resampler_choice::*;
