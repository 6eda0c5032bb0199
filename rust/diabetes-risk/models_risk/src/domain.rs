//! Declared domains of the ten survey fields

/// Width of the feature vector
pub const FEATURE_COUNT: usize = 10;

/// The inclusive bounds a single field must fall within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDomain {
    /// wire name of the field
    pub key: &'static str,
    /// inclusive lower bound
    pub min: f64,
    /// inclusive upper bound
    pub max: f64,
}

impl FieldDomain {
    const fn new(key: &'static str, min: f64, max: f64) -> Self {
        Self { key, min, max }
    }

    /// Check a single value, a NaN never passes
    pub fn check(&self, value: f64) -> Result<(), FieldViolation> {
        if (self.min..=self.max).contains(&value) {
            Ok(())
        } else {
            Err(FieldViolation {
                field: self.key,
                min: self.min,
                max: self.max,
                value,
            })
        }
    }
}

/// Field domains in feature vector order
pub const FIELD_DOMAINS: [FieldDomain; FEATURE_COUNT] = [
    FieldDomain::new("RIDAGEYR", 21.0, 120.0),
    FieldDomain::new("RACE", 1.0, 4.0),
    FieldDomain::new("EDUC", 1.0, 3.0),
    FieldDomain::new("COUPLE", 1.0, 3.0),
    FieldDomain::new("TOTAL_ACCULTURATION_SCORE_v2", 1.0, 3.0),
    FieldDomain::new("FAT", 1.0, 3.0),
    FieldDomain::new("POVERTIES", 0.0, 1.0),
    FieldDomain::new("HTN", 0.0, 1.0),
    FieldDomain::new("RIAGENDR", 1.0, 2.0),
    FieldDomain::new("SMOKER", 0.0, 1.0),
];

/// A single field outside of its domain
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{field} must be between {min} and {max} (got {value})")]
pub struct FieldViolation {
    /// wire name of the offending field
    pub field: &'static str,
    /// inclusive lower bound
    pub min: f64,
    /// inclusive upper bound
    pub max: f64,
    /// the submitted value
    pub value: f64,
}

/// A record with one or more fields outside of their domains
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", join(.violations))]
pub struct ValidationError {
    /// every violation found, in feature vector order
    pub violations: Vec<FieldViolation>,
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
