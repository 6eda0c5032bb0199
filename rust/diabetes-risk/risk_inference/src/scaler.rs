//! Scaler artifacts.
//!
//! Both scalers are column wise affine transforms, they only differ in how the fitted
//! parameters are stored.

use serde::{Deserialize, Serialize};

use crate::{InvalidArtifact, ScaleError, Scaler};

/// On disk representation of a fitted scaler, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

impl ScalerArtifact {
    /// Check the fitted parameters and hand back the scaler they describe
    pub fn build(self) -> Result<Box<dyn Scaler>, InvalidArtifact> {
        Ok(match self {
            ScalerArtifact::Standard(s) => Box::new(s.checked()?),
            ScalerArtifact::MinMax(s) => Box::new(s.checked()?),
        })
    }
}

/// `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn checked(self) -> Result<Self, InvalidArtifact> {
        check_columns("mean", &self.mean, &self.scale)?;
        Ok(self)
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScaleError> {
        check_width(features, self.n_features())?;
        let scaled: Vec<f64> = features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect();
        check_finite(scaled)
    }
}

/// `(x - min) * scale`, where `scale` is the fitted multiplier `1 / (max - min)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub min: Vec<f64>,
    pub scale: Vec<f64>,
}

impl MinMaxScaler {
    fn checked(self) -> Result<Self, InvalidArtifact> {
        check_columns("min", &self.min, &self.scale)?;
        Ok(self)
    }
}

impl Scaler for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.min.len()
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScaleError> {
        check_width(features, self.n_features())?;
        let scaled: Vec<f64> = features
            .iter()
            .zip(self.min.iter().zip(&self.scale))
            .map(|(x, (min, scale))| (x - min) * scale)
            .collect();
        check_finite(scaled)
    }
}

fn check_columns(
    name: &'static str,
    offset: &[f64],
    scale: &[f64],
) -> Result<(), InvalidArtifact> {
    if offset.is_empty() || offset.len() != scale.len() {
        return Err(InvalidArtifact::Width {
            name,
            got: offset.len(),
            expected: scale.len(),
        });
    }
    if offset.iter().any(|v| !v.is_finite()) {
        return Err(InvalidArtifact::NonFinite { name });
    }
    match scale.iter().position(|v| !v.is_finite() || *v == 0.0) {
        Some(index) => Err(InvalidArtifact::Scale {
            index,
            value: scale[index],
        }),
        None => Ok(()),
    }
}

fn check_width(features: &[f64], expected: usize) -> Result<(), ScaleError> {
    if features.len() != expected {
        return Err(ScaleError::FeatureCount {
            got: features.len(),
            expected,
        });
    }
    Ok(())
}

fn check_finite(scaled: Vec<f64>) -> Result<Vec<f64>, ScaleError> {
    match scaled.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ScaleError::NonFinite { index }),
        None => Ok(scaled),
    }
}
