use crate::infra::CannedCompletionGateway;
use chrono::{DateTime, Local};
use clap::Args;
use policy_ai::config::AppConfig;
use policy_ai::error::AppError;
use policy_ai::workflows::recommendation::{
    user_prompt, Gender, HealthStatus, HttpCompletionClient, MaritalStatus, PolicyRecommendation,
    ProfileSubmission, ProfileValidator, RecommendationError, RecommendationService, YesNo,
    SYSTEM_PROMPT,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

/// One recommendation request from the command line, mirroring the intake
/// form field for field.
#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Age in years (18-120)
    #[arg(long)]
    pub(crate) age: u32,
    /// Gender: Male, Female, or Other
    #[arg(long, value_parser = crate::infra::parse_gender)]
    pub(crate) gender: Gender,
    /// Marital status: Single, Married, Divorced, or Widowed
    #[arg(long, value_parser = crate::infra::parse_marital_status)]
    pub(crate) marital_status: MaritalStatus,
    /// Smoker: Yes or No
    #[arg(long, value_parser = crate::infra::parse_yes_no)]
    pub(crate) smoking_status: YesNo,
    /// Drinker: Yes or No
    #[arg(long, value_parser = crate::infra::parse_yes_no)]
    pub(crate) drinking_status: YesNo,
    /// Chronic conditions as a comma-separated list, e.g. "hypertension, diabetes"
    #[arg(long, default_value = "")]
    pub(crate) chronic_conditions: String,
    /// Annual income in your local currency
    #[arg(long)]
    pub(crate) annual_income: f64,
    /// Occupation
    #[arg(long)]
    pub(crate) occupation: String,
    /// Number of dependents
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: u32,
    /// Self-reported health status: good, fair, or poor
    #[arg(long, value_parser = crate::infra::parse_health_status)]
    pub(crate) health_status: HealthStatus,
    /// Family health history as a comma-separated list
    #[arg(long, default_value = "")]
    pub(crate) family_health_history: String,
    /// Write the result to a plain-text report file
    #[arg(long)]
    pub(crate) save: Option<PathBuf>,
}

impl RecommendArgs {
    fn submission(&self) -> ProfileSubmission {
        ProfileSubmission {
            age: self.age,
            gender: self.gender,
            marital_status: self.marital_status,
            smoking_status: self.smoking_status,
            drinking_status: self.drinking_status,
            chronic_conditions: self.chronic_conditions.clone(),
            annual_income: self.annual_income,
            occupation: self.occupation.clone(),
            dependents: self.dependents,
            health_status: self.health_status,
            family_health_history: self.family_health_history.clone(),
        }
    }
}

pub(crate) async fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let submission = args.submission();

    let gateway = Arc::new(HttpCompletionClient::from_config(&config.completion)?);
    let service = RecommendationService::new(gateway, &config.completion);
    let recommendation = service.process(submission).await?;

    render_recommendation(&recommendation);

    if let Some(path) = args.save {
        let report = recommendation_report(&recommendation, Local::now());
        std::fs::write(&path, report)?;
        println!("\nReport saved to {}", path.display());
    }

    Ok(())
}

pub(crate) async fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    println!("Policy recommendation demo (offline, canned completion gateway)");

    let submission = demo_submission();
    let profile = ProfileValidator
        .validate(submission.clone())
        .map_err(RecommendationError::from)?;

    println!("\nPrompt sent to the completion provider:");
    println!("[system] {SYSTEM_PROMPT}");
    println!("[user]\n{}", user_prompt(&profile));

    let gateway = Arc::new(CannedCompletionGateway::default());
    let service = RecommendationService::new(gateway, &config.completion);
    let recommendation = service.process(submission).await?;

    println!();
    render_recommendation(&recommendation);

    Ok(())
}

/// The worked example from the service documentation: every scoring rule
/// fires, including two chronic-condition tokens, for a total score of 12.
fn demo_submission() -> ProfileSubmission {
    ProfileSubmission {
        age: 55,
        gender: Gender::Male,
        marital_status: MaritalStatus::Single,
        smoking_status: YesNo::Yes,
        drinking_status: YesNo::Yes,
        chronic_conditions: "hypertension, diabetes".to_string(),
        annual_income: 85_000.0,
        occupation: "Software Engineer".to_string(),
        dependents: 2,
        health_status: HealthStatus::Fair,
        family_health_history: "heart disease".to_string(),
    }
}

fn render_recommendation(recommendation: &PolicyRecommendation) {
    println!("Risk score: {}", recommendation.risk_score);
    println!(
        "Health risk estimate: {:.2}",
        recommendation.health_risk_prediction
    );

    if recommendation.explanations.is_empty() {
        println!("Risk factors: none identified");
    } else {
        println!("Risk factors:");
        for explanation in &recommendation.explanations {
            println!("- {explanation}");
        }
    }

    println!("\nRecommendations:\n{}", recommendation.recommendations);
}

/// Plain-text export of one result, the CLI counterpart of the interactive
/// client's save-as-text action.
fn recommendation_report(
    recommendation: &PolicyRecommendation,
    generated: DateTime<Local>,
) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "Insurance Policy Recommendation Report");
    let _ = writeln!(report, "Generated: {}", generated.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(report);
    let _ = writeln!(report, "Risk score: {}", recommendation.risk_score);
    let _ = writeln!(
        report,
        "Health risk estimate: {:.2}",
        recommendation.health_risk_prediction
    );
    let _ = writeln!(report);

    if recommendation.explanations.is_empty() {
        let _ = writeln!(report, "Risk factors: none identified");
    } else {
        let _ = writeln!(report, "Risk factors:");
        for explanation in &recommendation.explanations {
            let _ = writeln!(report, "- {explanation}");
        }
    }

    let _ = writeln!(report);
    let _ = writeln!(report, "Recommendations:");
    let _ = writeln!(report, "{}", recommendation.recommendations);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_recommendation() -> PolicyRecommendation {
        PolicyRecommendation {
            recommendations: "1. Term life policy.".to_string(),
            risk_score: 12,
            explanations: vec![
                "Age over 50 increases risk.".to_string(),
                "Smoking increases risk.".to_string(),
            ],
            health_risk_prediction: 0.65,
        }
    }

    #[test]
    fn demo_submission_passes_validation() {
        let profile = ProfileValidator
            .validate(demo_submission())
            .expect("demo profile is valid");
        assert_eq!(profile.age, 55);
        assert_eq!(profile.chronic_conditions, "hypertension, diabetes");
    }

    #[test]
    fn report_carries_score_factors_and_text() {
        let generated = Local
            .with_ymd_and_hms(2026, 8, 29, 10, 30, 0)
            .single()
            .expect("unambiguous timestamp");
        let report = recommendation_report(&sample_recommendation(), generated);

        assert!(report.starts_with("Insurance Policy Recommendation Report"));
        assert!(report.contains("Generated: 2026-08-29 10:30"));
        assert!(report.contains("Risk score: 12"));
        assert!(report.contains("Health risk estimate: 0.65"));
        assert!(report.contains("- Smoking increases risk."));
        assert!(report.contains("1. Term life policy."));
    }

    #[test]
    fn report_notes_when_no_risk_factors_fired() {
        let mut recommendation = sample_recommendation();
        recommendation.explanations.clear();
        let report = recommendation_report(&recommendation, Local::now());
        assert!(report.contains("Risk factors: none identified"));
    }
}
