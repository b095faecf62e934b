mod error;
mod resamplers;

pub use error::BuildError;

use crate::config::choices::ResamplerChoice;
use crate::resamplers::{
    Adasyn, Adoms, EditedNearestNeighbors, Resampler, Smote, SmoteEnn, TomekLinks,
};

pub fn build_resampler(choice: ResamplerChoice) -> Result<Box<dyn Resampler>, BuildError> {
    match choice {
        ResamplerChoice::Smote(p) => {
            let r = Smote::try_from(p)?;
            Ok(Box::new(r))
        }
        ResamplerChoice::SmoteEnn(p) => {
            let r = SmoteEnn::try_from(p)?;
            Ok(Box::new(r))
        }
        ResamplerChoice::Adasyn(p) => {
            let r = Adasyn::try_from(p)?;
            Ok(Box::new(r))
        }
        ResamplerChoice::Adoms(p) => {
            let r = Adoms::try_from(p)?;
            Ok(Box::new(r))
        }
        ResamplerChoice::EditedNearestNeighbors(p) => {
            let r = EditedNearestNeighbors::try_from(p)?;
            Ok(Box::new(r))
        }
        ResamplerChoice::TomekLinks(p) => {
            let r = TomekLinks::try_from(p)?;
            Ok(Box::new(r))
        }
    }
}
