/*!
Risk Inference

Loads the fitted scaler and classifier artifacts and scores a [FeatureRecord] with them.
Both artifacts are opaque capabilities behind the [Scaler] and [Classifier] traits so the
serialized format can change without touching the service.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    non_local_definitions,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod artifact;
pub mod classifier;
pub mod error;
pub mod scaler;

mod pipeline;

pub use error::{
    ArtifactError, ConversionError, InvalidArtifact, PredictError, ScaleError, ScoreError,
};
pub use models_risk::{FeatureRecord, RiskClass};
pub use pipeline::{RiskModel, class_index};

/// A pre-fit transform from a raw feature vector to the normalized vector the classifier expects
pub trait Scaler: Send + Sync {
    /// Width of the vectors this scaler accepts
    fn n_features(&self) -> usize;

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScaleError>;
}

/// A pre-trained model from a normalized feature vector to a raw class prediction.
///
/// The raw prediction is whatever number the model emits for the class; turning it into a
/// class index is done by [class_index].
pub trait Classifier: Send + Sync {
    /// Width of the vectors this classifier accepts
    fn n_features(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<f64, PredictError>;
}
