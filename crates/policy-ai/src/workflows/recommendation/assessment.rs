use super::domain::{MaritalStatus, UserProfile, YesNo};

/// Fixed health-risk estimate reported until a trained model replaces it.
pub const HEALTH_RISK_ESTIMATE: f64 = 0.65;

/// Additive risk score over the profile. Rules fire in a fixed order; the two
/// age bands are mutually exclusive and the first match wins.
pub fn risk_score(profile: &UserProfile) -> u32 {
    let mut score = 0;

    if profile.age > 50 {
        score += 2;
    } else if profile.age > 30 {
        score += 1;
    }

    if profile.smoking_status == YesNo::Yes {
        score += 3;
    }

    if profile.drinking_status == YesNo::Yes {
        score += 2;
    }

    if profile.marital_status == MaritalStatus::Single {
        score += 1;
    }

    score += 2 * chronic_condition_count(&profile.chronic_conditions);

    score
}

/// Rule-based notes accompanying the score, appended independently in rule
/// order. The lower age band contributes score but no sentence.
pub fn explanations(profile: &UserProfile) -> Vec<String> {
    let mut notes = Vec::new();

    if profile.age > 50 {
        notes.push("Age over 50 increases risk for certain health conditions.".to_string());
    }

    if profile.smoking_status == YesNo::Yes {
        notes.push("Smoking status adds significant health risks, increasing premium.".to_string());
    }

    if profile.drinking_status == YesNo::Yes {
        notes.push("Alcohol consumption may increase health risks.".to_string());
    }

    if profile.marital_status == MaritalStatus::Single {
        notes.push("Being single may affect insurance needs and coverage options.".to_string());
    }

    if !profile.chronic_conditions.is_empty() {
        notes.push(
            "Chronic conditions add to health risk and can affect insurance eligibility."
                .to_string(),
        );
    }

    notes
}

pub fn health_risk_estimate(_profile: &UserProfile) -> f64 {
    HEALTH_RISK_ESTIMATE
}

/// Conditions arrive as one comma-space separated string from the intake
/// form. Tokens split on the literal `", "`; a lone value with no separator
/// counts as one condition.
fn chronic_condition_count(conditions: &str) -> u32 {
    if conditions.is_empty() {
        return 0;
    }

    conditions.split(", ").count() as u32
}
