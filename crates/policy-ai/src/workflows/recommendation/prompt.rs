use super::domain::UserProfile;

/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "Generate personalized insurance policy recommendations.";

/// Render the labeled profile block the completion provider receives. Every
/// profile field appears, one per line, followed by the instruction sentence.
pub fn user_prompt(profile: &UserProfile) -> String {
    format!(
        "User details:\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Marital Status: {marital_status}\n\
         - Smoking Status: {smoking_status}\n\
         - Drinking Status: {drinking_status}\n\
         - Chronic Conditions: {chronic_conditions}\n\
         - Annual Income: {annual_income}\n\
         - Occupation: {occupation}\n\
         - Number of Dependents: {dependents}\n\
         - Health Status: {health_status}\n\
         - Family Health History: {family_health_history}\n\n\
         Provide personalized insurance policy recommendations based on this data.",
        age = profile.age,
        gender = profile.gender.label(),
        marital_status = profile.marital_status.label(),
        smoking_status = profile.smoking_status.label(),
        drinking_status = profile.drinking_status.label(),
        chronic_conditions = profile.chronic_conditions,
        annual_income = profile.annual_income,
        occupation = profile.occupation,
        dependents = profile.dependents,
        health_status = profile.health_status.label(),
        family_health_history = profile.family_health_history,
    )
}
