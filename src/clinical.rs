//! Clinical parameters submitted for a heart-disease risk prediction.
//!
//! DESIGN
//! ======
//! Enumerated fields carry a numeric code (what the backend receives) and
//! a human label (what the prompt shows). Labels never reach the wire.
//! Numeric fields carry an inclusive domain that form collection enforces.

#[cfg(test)]
#[path = "clinical_test.rs"]
mod tests;

/// An enumerated clinical field with a fixed set of numeric codes.
pub trait ClinicalCode: Copy + Sized + 'static {
    /// Prompt shown when asking for this field.
    const PROMPT: &'static str;
    /// Every variant, ordered by code.
    const ALL: &'static [Self];

    fn code(self) -> u8;
    fn label(self) -> &'static str;

    #[must_use]
    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.code() == code)
    }
}

macro_rules! clinical_code {
    (
        $(#[$meta:meta])*
        $name:ident, $prompt:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl ClinicalCode for $name {
            const PROMPT: &'static str = $prompt;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> u8 {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

clinical_code! {
    Sex, "Sex" {
        Female = 0 => "Female",
        Male = 1 => "Male",
    }
}

clinical_code! {
    ChestPainType, "Chest Pain Type" {
        TypicalAngina = 0 => "Typical Angina",
        AtypicalAngina = 1 => "Atypical Angina",
        NonAnginalPain = 2 => "Non-anginal Pain",
        Asymptomatic = 3 => "Asymptomatic",
    }
}

clinical_code! {
    /// Fasting blood sugar above 120 mg/dl.
    FastingBloodSugar, "Fasting Blood Sugar > 120 mg/dl" {
        Normal = 0 => "<= 120 mg/dl",
        Elevated = 1 => "> 120 mg/dl",
    }
}

clinical_code! {
    RestingEcg, "Resting ECG Results" {
        Normal = 0 => "Normal",
        StTWaveAbnormality = 1 => "ST-T Wave Abnormality",
        LeftVentricularHypertrophy = 2 => "Left Ventricular Hypertrophy",
    }
}

clinical_code! {
    ExerciseAngina, "Chest Pain During Exercise" {
        No = 0 => "No",
        Yes = 1 => "Yes",
    }
}

clinical_code! {
    StSlope, "Slope of ST Segment" {
        Upsloping = 0 => "Upsloping",
        Flat = 1 => "Flat",
        Downsloping = 2 => "Downsloping",
    }
}

/// Inclusive domain of a numeric clinical field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    pub prompt: &'static str,
    pub min: f64,
    pub max: f64,
    pub integer: bool,
}

impl NumericField {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite()
            && value >= self.min
            && value <= self.max
            && (!self.integer || value.fract() == 0.0)
    }
}

pub const AGE: NumericField = NumericField { prompt: "Age", min: 1.0, max: 120.0, integer: true };
pub const RESTING_BP: NumericField =
    NumericField { prompt: "Resting Blood Pressure", min: 80.0, max: 200.0, integer: true };
pub const CHOLESTEROL: NumericField = NumericField { prompt: "Cholesterol", min: 100.0, max: 600.0, integer: true };
pub const MAX_HEART_RATE: NumericField =
    NumericField { prompt: "Max Heart Rate Achieved", min: 60.0, max: 250.0, integer: true };
pub const ST_DEPRESSION: NumericField = NumericField { prompt: "ST Depression", min: 0.0, max: 6.0, integer: false };

/// A complete set of clinical inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClinicalParameters {
    pub age: u16,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    pub resting_bp: u16,
    pub cholesterol: u16,
    pub fasting_blood_sugar: FastingBloodSugar,
    pub resting_ecg: RestingEcg,
    pub max_heart_rate: u16,
    pub exercise_angina: ExerciseAngina,
    pub st_depression: f64,
    pub st_slope: StSlope,
}

/// Clinical inputs as collected; a field left blank is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClinicalDraft {
    pub age: Option<u16>,
    pub sex: Option<Sex>,
    pub chest_pain_type: Option<ChestPainType>,
    pub resting_bp: Option<u16>,
    pub cholesterol: Option<u16>,
    pub fasting_blood_sugar: Option<FastingBloodSugar>,
    pub resting_ecg: Option<RestingEcg>,
    pub max_heart_rate: Option<u16>,
    pub exercise_angina: Option<ExerciseAngina>,
    pub st_depression: Option<f64>,
    pub st_slope: Option<StSlope>,
}

impl ClinicalDraft {
    /// The complete parameters, or `None` if any field is missing.
    #[must_use]
    pub fn complete(&self) -> Option<ClinicalParameters> {
        Some(ClinicalParameters {
            age: self.age?,
            sex: self.sex?,
            chest_pain_type: self.chest_pain_type?,
            resting_bp: self.resting_bp?,
            cholesterol: self.cholesterol?,
            fasting_blood_sugar: self.fasting_blood_sugar?,
            resting_ecg: self.resting_ecg?,
            max_heart_rate: self.max_heart_rate?,
            exercise_angina: self.exercise_angina?,
            st_depression: self.st_depression?,
            st_slope: self.st_slope?,
        })
    }
}

impl From<ClinicalParameters> for ClinicalDraft {
    fn from(p: ClinicalParameters) -> Self {
        Self {
            age: Some(p.age),
            sex: Some(p.sex),
            chest_pain_type: Some(p.chest_pain_type),
            resting_bp: Some(p.resting_bp),
            cholesterol: Some(p.cholesterol),
            fasting_blood_sugar: Some(p.fasting_blood_sugar),
            resting_ecg: Some(p.resting_ecg),
            max_heart_rate: Some(p.max_heart_rate),
            exercise_angina: Some(p.exercise_angina),
            st_depression: Some(p.st_depression),
            st_slope: Some(p.st_slope),
        }
    }
}
