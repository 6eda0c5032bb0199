#![deny(missing_docs)]
//! Wire types shared by the early diabetes risk service and its callers.
//!
//! The field names of [FeatureRecord] on the wire are the survey variable names the
//! scaler and classifier were fitted against, so they are not renamed to rust casing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod code;
mod domain;

pub use domain::{FEATURE_COUNT, FIELD_DOMAINS, FieldDomain, FieldViolation, ValidationError};


/// The message returned by the liveness route
pub const ROOT_MESSAGE: &str = "Early diabetes model API";

/// One submitted survey record, already encoded to the numeric codes the model expects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureRecord {
    /// Age in years
    #[serde(rename = "RIDAGEYR")]
    #[schema(minimum = 21.0, maximum = 120.0)]
    pub age: f64,
    /// Race/ethnicity category
    #[serde(rename = "RACE", deserialize_with = "code::integral")]
    #[schema(minimum = 1, maximum = 4)]
    pub race: i64,
    /// Education level
    #[serde(rename = "EDUC", deserialize_with = "code::integral")]
    #[schema(minimum = 1, maximum = 3)]
    pub education: i64,
    /// Marital status
    #[serde(rename = "COUPLE", deserialize_with = "code::integral")]
    #[schema(minimum = 1, maximum = 3)]
    pub couple: i64,
    /// Total acculturation score, low to high
    #[serde(rename = "TOTAL_ACCULTURATION_SCORE_v2", deserialize_with = "code::integral")]
    #[schema(minimum = 1, maximum = 3)]
    pub acculturation: i64,
    /// Dietary fat intake, low to high
    #[serde(rename = "FAT", deserialize_with = "code::integral")]
    #[schema(minimum = 1, maximum = 3)]
    pub fat: i64,
    /// 1 when below the poverty level
    #[serde(rename = "POVERTIES", deserialize_with = "code::integral")]
    #[schema(minimum = 0, maximum = 1)]
    pub poverty: i64,
    /// 1 when hypertensive
    #[serde(rename = "HTN", deserialize_with = "code::integral")]
    #[schema(minimum = 0, maximum = 1)]
    pub hypertension: i64,
    /// 1 male, 2 female
    #[serde(rename = "RIAGENDR", deserialize_with = "code::integral")]
    #[schema(minimum = 1, maximum = 2)]
    pub gender: i64,
    /// 1 when a smoker
    #[serde(rename = "SMOKER", deserialize_with = "code::integral")]
    #[schema(minimum = 0, maximum = 1)]
    pub smoker: i64,
}

impl FeatureRecord {
    /// The record as a fixed order feature vector.
    /// The order matches [FIELD_DOMAINS] and the column order the artifacts were fitted on.
    pub fn feature_vector(&self) -> Vec<f64> {
        self.values().to_vec()
    }

    /// Check every field against its declared domain, reporting all violations at once
    pub fn validate(&self) -> Result<(), ValidationError> {
        let violations: Vec<FieldViolation> = FIELD_DOMAINS
            .iter()
            .zip(self.values())
            .filter_map(|(domain, value)| domain.check(value).err())
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.race as f64,
            self.education as f64,
            self.couple as f64,
            self.acculturation as f64,
            self.fat as f64,
            self.poverty as f64,
            self.hypertension as f64,
            self.gender as f64,
            self.smoker as f64,
        ]
    }
}

/// The two classes the model distinguishes, in class index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RiskClass {
    /// class index 0
    #[serde(rename = "No risk")]
    NoRisk,
    /// class index 1
    #[serde(rename = "Early diabetes risk")]
    EarlyDiabetesRisk,
}

impl RiskClass {
    /// every class, indexed by its class index
    pub const ALL: [RiskClass; 2] = [RiskClass::NoRisk, RiskClass::EarlyDiabetesRisk];

    /// Look up the class for a predicted class index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The human readable label
    pub fn label(self) -> &'static str {
        match self {
            RiskClass::NoRisk => "No risk",
            RiskClass::EarlyDiabetesRisk => "Early diabetes risk",
        }
    }
}

impl std::fmt::Display for RiskClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Successful response of the predict route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    /// The predicted class label
    pub predicted_class: RiskClass,
}

/// Response of the liveness route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// fixed informational message
    pub message: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}

/// Error body for every non 2xx response of the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Message explaining the failure
    pub detail: String,
}

impl ErrorDetail {
    /// construct a new [ErrorDetail]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// paths of the API endpoints
pub mod paths {
    /// liveness route
    pub const ROOT: &str = "/";
    /// scoring route
    pub const PREDICT: &str = "/predict";
    /// generated OpenAPI document
    pub const OPENAPI: &str = "/api-doc/openapi.json";
}
