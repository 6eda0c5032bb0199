//! Label to code tables for the categorical survey questions.
//!
//! Each table is declared once with `choice_table!`, which produces a clap value enum
//! whose variants carry the human readable label and the numeric code sent to the service.

macro_rules! choice_table {
    (
        $(#[$attr:meta])*
        $v:vis enum $name:ident {
            $($variant:ident => ($label:literal, $code:literal)),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
        $v enum $name {
            $(
                #[value(help = $label)]
                $variant
            ),+
        }

        impl $name {
            /// the label shown to the person filling in the survey
            $v fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// the code the model was trained on
            $v fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }
    };
}

choice_table! {
    /// Race/Ethnicity
    pub enum Race {
        NonHispanicWhite => ("Non-Hispanic White", 1),
        NonHispanicBlack => ("Non-Hispanic Black", 2),
        MexicanAmerican => ("Mexican American", 3),
        OtherHispanicOrOtherRace => ("Other Hispanic/Other Race", 4),
    }
}

choice_table! {
    /// Education Level
    pub enum Education {
        LessThanHighSchool => ("Less than High School", 1),
        HighSchoolGraduate => ("High School Graduate", 2),
        SomeCollegeOrGraduate => ("Some College/College Graduate", 3),
    }
}

choice_table! {
    /// Marital Status
    pub enum MaritalStatus {
        Single => ("Single", 1),
        MarriedOrCohabiting => ("Married/Cohabiting", 2),
        DivorcedSeparatedOrWidowed => ("Divorced/Separated/Widowed", 3),
    }
}

choice_table! {
    /// Shared by the acculturation score and dietary fat intake questions
    pub enum Level {
        Low => ("Low", 1),
        Medium => ("Medium", 2),
        High => ("High", 3),
    }
}

choice_table! {
    /// Poverty Status
    pub enum PovertyStatus {
        AbovePovertyLevel => ("Above Poverty Level", 0),
        BelowPovertyLevel => ("Below Poverty Level", 1),
    }
}

choice_table! {
    /// Hypertension (High Blood Pressure)
    pub enum YesNo {
        No => ("No", 0),
        Yes => ("Yes", 1),
    }
}

choice_table! {
    /// Sex
    pub enum Sex {
        Male => ("Male", 1),
        Female => ("Female", 2),
    }
}

choice_table! {
    /// Smoking Status
    pub enum SmokingStatus {
        NonSmoker => ("Non-Smoker", 0),
        Smoker => ("Smoker", 1),
    }
}
