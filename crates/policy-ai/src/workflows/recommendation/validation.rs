use super::domain::{ProfileSubmission, UserProfile};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 120;

/// Field-level faults raised while promoting a submission to a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("age must be between 18 and 120, got {0}")]
    AgeOutOfRange(u32),
    #[error("annual income must be a positive amount, got {0}")]
    NonPositiveIncome(f64),
    #[error("occupation must not be empty")]
    EmptyOccupation,
}

pub fn valid_age(age: u32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

pub fn valid_annual_income(annual_income: f64) -> bool {
    annual_income.is_finite() && annual_income > 0.0
}

pub fn valid_occupation(occupation: &str) -> bool {
    !occupation.trim().is_empty()
}

/// Composite check over every field predicate. The enum fields are valid by
/// construction and the free-text fields accept any string, so only the
/// bounded fields contribute.
pub fn valid_submission(submission: &ProfileSubmission) -> bool {
    valid_age(submission.age)
        && valid_annual_income(submission.annual_income)
        && valid_occupation(&submission.occupation)
}

/// Guard responsible for producing `UserProfile` instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileValidator;

impl ProfileValidator {
    /// Convert an inbound submission into a validated profile. Checks run in
    /// field order and the first failure aborts; a profile is never partially
    /// constructed.
    pub fn validate(
        &self,
        submission: ProfileSubmission,
    ) -> Result<UserProfile, ProfileValidationError> {
        if !valid_age(submission.age) {
            return Err(ProfileValidationError::AgeOutOfRange(submission.age));
        }

        if !valid_annual_income(submission.annual_income) {
            return Err(ProfileValidationError::NonPositiveIncome(
                submission.annual_income,
            ));
        }

        if !valid_occupation(&submission.occupation) {
            return Err(ProfileValidationError::EmptyOccupation);
        }

        Ok(UserProfile {
            age: submission.age,
            gender: submission.gender,
            marital_status: submission.marital_status,
            smoking_status: submission.smoking_status,
            drinking_status: submission.drinking_status,
            chronic_conditions: submission.chronic_conditions,
            annual_income: submission.annual_income,
            occupation: submission.occupation,
            dependents: submission.dependents,
            health_status: submission.health_status,
            family_health_history: submission.family_health_history,
        })
    }
}
