use models_risk::FeatureRecord;

use crate::choices::{
    Education, Level, MaritalStatus, PovertyStatus, Race, Sex, SmokingStatus, YesNo,
};

/// where the inference service listens when nothing else is configured
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";

const MIN_AGE: f64 = 21.0;
const MAX_AGE: f64 = 120.0;

/// Answer the early diabetes risk survey and print the predicted risk class
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Age in years
    #[arg(long, value_parser = parse_age)]
    pub age: f64,

    /// Race/Ethnicity
    #[arg(long, value_enum)]
    pub race: Race,

    /// Education Level
    #[arg(long, value_enum)]
    pub education: Education,

    /// Marital Status
    #[arg(long, value_enum)]
    pub marital_status: MaritalStatus,

    /// Total Acculturation Score
    #[arg(long, value_enum)]
    pub acculturation: Level,

    /// Dietary Fat Intake
    #[arg(long, value_enum)]
    pub dietary_fat: Level,

    /// Poverty Status
    #[arg(long, value_enum)]
    pub poverty_status: PovertyStatus,

    /// Hypertension (High Blood Pressure)
    #[arg(long, value_enum)]
    pub hypertension: YesNo,

    /// Sex
    #[arg(long, value_enum)]
    pub sex: Sex,

    /// Smoking Status
    #[arg(long, value_enum)]
    pub smoking_status: SmokingStatus,

    /// Base url of the inference service
    #[arg(long, env = "RISK_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    pub url: String,
}

impl Args {
    /// translate every answer into the code the service expects
    pub fn record(&self) -> FeatureRecord {
        FeatureRecord {
            age: self.age,
            race: self.race.code(),
            education: self.education.code(),
            couple: self.marital_status.code(),
            acculturation: self.acculturation.code(),
            fat: self.dietary_fat.code(),
            poverty: self.poverty_status.code(),
            hypertension: self.hypertension.code(),
            gender: self.sex.code(),
            smoker: self.smoking_status.code(),
        }
    }
}

fn parse_age(raw: &str) -> Result<f64, String> {
    let age: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(format!("age must be between {MIN_AGE} and {MAX_AGE}"));
    }

    Ok(age)
}
