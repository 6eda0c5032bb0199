use std::path::Path;
use std::sync::Arc;

use models_risk::{FEATURE_COUNT, FeatureRecord, RiskClass};

use crate::artifact::{load_classifier, load_scaler};
use crate::{ArtifactError, Classifier, ConversionError, InvalidArtifact, Scaler, ScoreError};

/// The loaded scaler and classifier, shared read only for the life of the process
#[derive(Clone)]
pub struct RiskModel {
    scaler: Arc<dyn Scaler>,
    classifier: Arc<dyn Classifier>,
}

impl RiskModel {
    pub fn new(scaler: Arc<dyn Scaler>, classifier: Arc<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Load both artifacts and check they accept a full feature vector
    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, ArtifactError> {
        let scaler = load_scaler(scaler_path)?;
        check_feature_count("scaler", scaler.n_features()).map_err(|source| {
            ArtifactError::Invalid {
                path: scaler_path.to_path_buf(),
                source,
            }
        })?;

        let classifier = load_classifier(model_path)?;
        check_feature_count("classifier", classifier.n_features()).map_err(|source| {
            ArtifactError::Invalid {
                path: model_path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self::new(Arc::from(scaler), Arc::from(classifier)))
    }

    /// validate → scale → predict → class index → label
    pub fn score(&self, record: &FeatureRecord) -> Result<RiskClass, ScoreError> {
        record.validate()?;
        let scaled = self.scaler.transform(&record.feature_vector())?;
        let raw = self.classifier.predict(&scaled)?;
        let index = class_index(raw)?;
        RiskClass::from_index(index).ok_or_else(|| ConversionError::UnknownClass(index).into())
    }
}

/// Turn a raw prediction into a class index, truncating toward zero
pub fn class_index(raw: f64) -> Result<usize, ConversionError> {
    if !raw.is_finite() {
        return Err(ConversionError::NonFinite(raw));
    }
    let truncated = raw.trunc();
    if truncated < 0.0 {
        return Err(ConversionError::Negative(raw));
    }
    Ok(truncated as usize)
}

fn check_feature_count(component: &'static str, got: usize) -> Result<(), InvalidArtifact> {
    if got != FEATURE_COUNT {
        return Err(InvalidArtifact::FeatureCount {
            component,
            got,
            expected: FEATURE_COUNT,
        });
    }
    Ok(())
}
