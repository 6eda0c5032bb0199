//! Classifier artifacts

use serde::{Deserialize, Serialize};

use crate::{Classifier, InvalidArtifact, PredictError};

/// On disk representation of a trained classifier, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    #[serde(alias = "linear")]
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
}

impl ClassifierArtifact {
    /// Check the trained parameters and hand back the classifier they describe
    pub fn build(self) -> Result<Box<dyn Classifier>, InvalidArtifact> {
        Ok(match self {
            ClassifierArtifact::LogisticRegression(c) => Box::new(c.checked()?),
            ClassifierArtifact::DecisionTree(c) => Box::new(c.checked()?),
        })
    }
}

/// Binary linear model, predicts class 1 when `w·x + b > 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    fn checked(self) -> Result<Self, InvalidArtifact> {
        if self.coefficients.is_empty() {
            return Err(InvalidArtifact::Width {
                name: "coefficients",
                got: 0,
                expected: 1,
            });
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(InvalidArtifact::NonFinite {
                name: "coefficients",
            });
        }
        Ok(self)
    }

    pub fn decision_function(&self, features: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        check_width(features, self.n_features())?;
        if self.decision_function(features) > 0.0 {
            Ok(1.0)
        } else {
            Ok(0.0)
        }
    }
}

/// A single node of a [DecisionTree]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// go `left` when `x[feature] <= threshold`, `right` otherwise
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { value: f64 },
}

/// Flattened decision tree, node 0 is the root and children always follow their parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub n_features: usize,
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn checked(self) -> Result<Self, InvalidArtifact> {
        if self.nodes.is_empty() {
            return Err(InvalidArtifact::EmptyTree);
        }
        let len = self.nodes.len();
        for (node, tree_node) in self.nodes.iter().enumerate() {
            match *tree_node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= self.n_features {
                        return Err(InvalidArtifact::SplitFeature {
                            node,
                            feature,
                            n_features: self.n_features,
                        });
                    }
                    if threshold.is_nan() {
                        return Err(InvalidArtifact::NonFinite { name: "threshold" });
                    }
                    // forward only children rule out cycles
                    for child in [left, right] {
                        if child <= node || child >= len {
                            return Err(InvalidArtifact::Child { node, child, len });
                        }
                    }
                }
                TreeNode::Leaf { value } if !value.is_finite() => {
                    return Err(InvalidArtifact::NonFinite { name: "leaf value" });
                }
                TreeNode::Leaf { .. } => {}
            }
        }
        Ok(self)
    }
}

impl Classifier for DecisionTree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        check_width(features, self.n_features())?;
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                None => {
                    return Err(PredictError::Other(format!(
                        "decision tree has no node {index}"
                    )));
                }
            }
        }
    }
}

fn check_width(features: &[f64], expected: usize) -> Result<(), PredictError> {
    if features.len() != expected {
        return Err(PredictError::FeatureCount {
            got: features.len(),
            expected,
        });
    }
    Ok(())
}
