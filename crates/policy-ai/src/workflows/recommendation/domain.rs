use serde::{Deserialize, Serialize};

/// Raw request payload exactly as received from callers, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub age: u32,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub smoking_status: YesNo,
    pub drinking_status: YesNo,
    #[serde(default)]
    pub chronic_conditions: String,
    pub annual_income: f64,
    pub occupation: String,
    #[serde(default)]
    pub dependents: u32,
    pub health_status: HealthStatus,
    #[serde(default)]
    pub family_health_history: String,
}

/// Gender as collected on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

/// Closed yes/no answer used for the smoking and drinking questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Self-reported health status; the form offers the lowercase spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    pub const fn label(self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Fair => "fair",
            HealthStatus::Poor => "poor",
        }
    }
}

/// The validated profile consumed by scoring, explanations, and the prompt
/// builder. Produced only by `ProfileValidator::validate`; carries no identity
/// and lives for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub smoking_status: YesNo,
    pub drinking_status: YesNo,
    pub chronic_conditions: String,
    pub annual_income: f64,
    pub occupation: String,
    pub dependents: u32,
    pub health_status: HealthStatus,
    pub family_health_history: String,
}

/// Assembled response for one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecommendation {
    /// Completion text on success; a descriptive error string when the
    /// completion call degraded.
    pub recommendations: String,
    pub risk_score: u32,
    pub explanations: Vec<String>,
    /// Placeholder estimate until a trained model replaces it.
    pub health_risk_prediction: f64,
}
