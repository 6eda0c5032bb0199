use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use models_risk::{FEATURE_COUNT, FeatureRecord};
use risk_inference::{Classifier, PredictError, RiskModel, ScaleError, Scaler};

/// the scenario record used throughout the tests
pub fn sample_record() -> FeatureRecord {
    FeatureRecord {
        age: 45.0,
        race: 1,
        education: 2,
        couple: 2,
        acculturation: 2,
        fat: 2,
        poverty: 0,
        hypertension: 0,
        gender: 1,
        smoker: 0,
    }
}

/// The scaler and classifier shipped in `artifacts/`
pub fn shipped_model() -> RiskModel {
    let artifacts = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("artifacts");
    RiskModel::load(&artifacts.join("scaler.json"), &artifacts.join("model.json")).unwrap()
}

/// Identity scaler which counts how often it was reached
#[derive(Default)]
pub struct RecordingScaler {
    calls: AtomicUsize,
}

impl RecordingScaler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Scaler for RecordingScaler {
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScaleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(features.to_vec())
    }
}

pub struct FailingScaler;

impl Scaler for FailingScaler {
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn transform(&self, _features: &[f64]) -> Result<Vec<f64>, ScaleError> {
        Err(ScaleError::Other("could not convert string to float".to_string()))
    }
}

/// Classifier which always emits the same raw prediction
pub struct FixedClassifier(pub f64);

impl Classifier for FixedClassifier {
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn predict(&self, _features: &[f64]) -> Result<f64, PredictError> {
        Ok(self.0)
    }
}

pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn predict(&self, _features: &[f64]) -> Result<f64, PredictError> {
        Err(PredictError::Other("estimator is not fitted yet".to_string()))
    }
}

/// a model whose scaler can be inspected after the fact
pub fn recording_model(raw_prediction: f64) -> (RiskModel, Arc<RecordingScaler>) {
    let scaler = Arc::new(RecordingScaler::default());
    let model = RiskModel::new(scaler.clone(), Arc::new(FixedClassifier(raw_prediction)));
    (model, scaler)
}
