use std::path::PathBuf;

use models_risk::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    #[error("X has {got} features, but the scaler is expecting {expected} features as input")]
    FeatureCount { got: usize, expected: usize },
    #[error("scaled value of feature {index} is not finite")]
    NonFinite { index: usize },
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("X has {got} features, but the classifier is expecting {expected} features as input")]
    FeatureCount { got: usize, expected: usize },
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConversionError {
    #[error("prediction {0} is not a finite number")]
    NonFinite(f64),
    #[error("prediction {0} is negative")]
    Negative(f64),
    #[error("class index {0} has no label")]
    UnknownClass(usize),
}

/// Every way scoring a single record can fail, in pipeline order
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Error in scaling input data: {0}")]
    Scale(#[from] ScaleError),
    #[error("Error in model prediction: {0}")]
    Predict(#[from] PredictError),
    #[error("Error converting prediction to integer: {0}")]
    Conversion(#[from] ConversionError),
}

/// A structurally unusable artifact
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InvalidArtifact {
    #[error("{name} has {got} entries, expected {expected}")]
    Width {
        name: &'static str,
        got: usize,
        expected: usize,
    },
    #[error("scale entry {index} is {value}, expected a finite non zero number")]
    Scale { index: usize, value: f64 },
    #[error("{name} contains a non finite value")]
    NonFinite { name: &'static str },
    #[error("decision tree has no nodes")]
    EmptyTree,
    #[error("node {node} splits on feature {feature} but the tree has {n_features} features")]
    SplitFeature {
        node: usize,
        feature: usize,
        n_features: usize,
    },
    #[error("node {node} points to child {child}, children must come after their parent in a tree of {len} nodes")]
    Child { node: usize, child: usize, len: usize },
    #[error("{component} expects {got} features but a record has {expected}")]
    FeatureCount {
        component: &'static str,
        got: usize,
        expected: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("unable to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid artifact {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidArtifact,
    },
}
