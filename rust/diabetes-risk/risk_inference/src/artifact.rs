//! Reading artifacts from local storage

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::classifier::ClassifierArtifact;
use crate::scaler::ScalerArtifact;
use crate::{ArtifactError, Classifier, Scaler};

#[tracing::instrument(err)]
pub fn load_scaler(path: &Path) -> Result<Box<dyn Scaler>, ArtifactError> {
    let artifact: ScalerArtifact = read_json(path)?;
    let scaler = artifact.build().map_err(|source| ArtifactError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(n_features = scaler.n_features(), "loaded scaler");
    Ok(scaler)
}

#[tracing::instrument(err)]
pub fn load_classifier(path: &Path) -> Result<Box<dyn Classifier>, ArtifactError> {
    let artifact: ClassifierArtifact = read_json(path)?;
    let classifier = artifact.build().map_err(|source| ArtifactError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(n_features = classifier.n_features(), "loaded classifier");
    Ok(classifier)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
