use crate::config::build::BuildError;
use crate::config::choices::*;
use crate::core::MinorityPolicy;
use crate::distance::DistanceMetric;
use crate::resamplers::{
    Adasyn, Adoms, EditedNearestNeighbors, ResamplerSettings, Smote, SmoteEnn, TomekLinks,
};
use std::convert::TryFrom;

impl TryFrom<CommonParameters> for ResamplerSettings {
    type Error = BuildError;

    fn try_from(parameters: CommonParameters) -> Result<Self, Self::Error> {
        let metric = DistanceMetric::parse(&parameters.metric)?;
        if parameters.k == 0 {
            return Err(BuildError::InvalidParameter("k must be at least 1".into()));
        }

        let mut settings = ResamplerSettings::new()
            .with_metric(metric)
            .with_k(parameters.k);
        if let Some(seed) = parameters.seed {
            settings = settings.with_seed(seed);
        }
        if let Some(decimals) = parameters.precision {
            settings = settings.with_precision(decimals);
        }
        if let Some(label) = parameters.minority_label {
            settings = settings.with_minority(MinorityPolicy::Named(label));
        }
        if let Some(path) = parameters.log_path {
            settings = settings.with_log_path(path);
        }
        Ok(settings)
    }
}

impl TryFrom<SmoteParameters> for Smote {
    type Error = BuildError;

    fn try_from(parameters: SmoteParameters) -> Result<Self, Self::Error> {
        let settings = ResamplerSettings::try_from(parameters.common)?;
        Smote::new(settings, parameters.percent).map_err(BuildError::from)
    }
}

impl TryFrom<SmoteEnnParameters> for SmoteEnn {
    type Error = BuildError;

    fn try_from(parameters: SmoteEnnParameters) -> Result<Self, Self::Error> {
        let settings = ResamplerSettings::try_from(parameters.common)?;
        SmoteEnn::new(settings, parameters.percent, parameters.enn_k).map_err(BuildError::from)
    }
}

impl TryFrom<AdasynParameters> for Adasyn {
    type Error = BuildError;

    fn try_from(parameters: AdasynParameters) -> Result<Self, Self::Error> {
        let settings = ResamplerSettings::try_from(parameters.common)?;
        Adasyn::new(
            settings,
            parameters.balance_level,
            parameters.imbalance_threshold,
        )
        .map_err(BuildError::from)
    }
}

impl TryFrom<AdomsParameters> for Adoms {
    type Error = BuildError;

    fn try_from(parameters: AdomsParameters) -> Result<Self, Self::Error> {
        let settings = ResamplerSettings::try_from(parameters.common)?;
        Adoms::new(settings, parameters.percent).map_err(BuildError::from)
    }
}

impl TryFrom<CleaningParameters> for EditedNearestNeighbors {
    type Error = BuildError;

    fn try_from(parameters: CleaningParameters) -> Result<Self, Self::Error> {
        let settings = ResamplerSettings::try_from(parameters.common)?;
        EditedNearestNeighbors::new(settings).map_err(BuildError::from)
    }
}

impl TryFrom<CleaningParameters> for TomekLinks {
    type Error = BuildError;

    fn try_from(parameters: CleaningParameters) -> Result<Self, Self::Error> {
        let settings = ResamplerSettings::try_from(parameters.common)?;
        TomekLinks::new(settings).map_err(BuildError::from)
    }
}
