//! Deal fixture files.
//!
//! A fixture is a TOML document holding agreement text, the configuration
//! each heuristic receives, and the results expected back:
//!
//! ```toml
//! title = "Missing clauses"
//! text = """
//! Section 1
//! The Buyer may..."""
//!
//! [evaluation_profile]
//! critical_clauses_checklist = ["MAC"]
//!
//! [expect]
//! section_count = 1
//! missing_clauses = ["MAC"]
//! ```

use mna_quant::{
    AgreementAnalysis, ConfigSection, DealContext, DealFinancials, DealStructure,
    EvaluationProfile, MarketContext, PredictionModelConfig, RiskAssessmentParameters, RiskItem,
};
use serde::{Deserialize, Serialize};

use crate::errors::{SpecError, SpecResult};

/// A parsed deal fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealFixture {
    #[serde(default)]
    pub title: Option<String>,
    /// Agreement text handed to the compliance and risk scans.
    pub text: String,
    #[serde(default)]
    pub deal_context: DealContext,
    #[serde(default)]
    pub evaluation_profile: EvaluationProfile,
    #[serde(default)]
    pub risk_assessment: RiskAssessmentParameters,
    #[serde(default)]
    pub deal_financials: DealFinancials,
    #[serde(default)]
    pub deal_structure: DealStructure,
    #[serde(default)]
    pub market_context: MarketContext,
    /// Predictor input; when absent the fixture's own compliance result is used.
    #[serde(default)]
    pub agreement_analysis: Option<AgreementAnalysis>,
    #[serde(default)]
    pub prediction_model: PredictionModelConfig,
    #[serde(default)]
    pub expect: Expectations,
}

/// Expected results; unset fields are not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default)]
    pub section_count: Option<usize>,
    #[serde(default)]
    pub ambiguity_score: Option<f64>,
    #[serde(default)]
    pub missing_clauses: Option<Vec<String>>,
    #[serde(default)]
    pub risks: Option<Vec<RiskItem>>,
    #[serde(default)]
    pub closure_probability: Option<f64>,
}

impl Expectations {
    /// Number of checks this fixture will run.
    pub fn count(&self) -> usize {
        [
            self.section_count.is_some(),
            self.ambiguity_score.is_some(),
            self.missing_clauses.is_some(),
            self.risks.is_some(),
            self.closure_probability.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Parse fixture content; `origin` names the source in errors.
pub fn parse_fixture(content: &str, origin: &str) -> SpecResult<DealFixture> {
    let fixture: DealFixture = toml::from_str(content).map_err(|e| SpecError::Parse {
        path: origin.to_string(),
        message: e.message().to_string(),
    })?;

    fixture
        .risk_assessment
        .validate()
        .map_err(|e| SpecError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

    if fixture.expect.count() == 0 {
        tracing::warn!(fixture = origin, "fixture has no expectations");
    }

    Ok(fixture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_fixture_takes_defaults() {
        let fixture = parse_fixture("text = \"1. Scope\"", "inline").unwrap();
        assert!(fixture.title.is_none());
        assert!(fixture.evaluation_profile.critical_clauses_checklist.is_empty());
        assert_eq!(fixture.risk_assessment, RiskAssessmentParameters::default());
        assert_eq!(fixture.market_context.regulatory_hurdle_score_1_5, 3.0);
        assert!(fixture.agreement_analysis.is_none());
        assert_eq!(fixture.expect.count(), 0);
    }

    #[test]
    fn full_fixture() {
        let fixture = parse_fixture(
            r#"
            title = "Everything"
            text = "Section 1"

            [evaluation_profile]
            critical_clauses_checklist = ["MAC"]

            [deal_financials]
            deal_value_usd_M = 500

            [market_context]
            regulatory_hurdle_score_1_5 = 4

            [expect]
            section_count = 1
            closure_probability = 39.5
            risks = [{ category = "Legal_Compliance", severity = 1, likelihood = 1 }]
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(fixture.title.as_deref(), Some("Everything"));
        assert_eq!(fixture.deal_financials.deal_value_usd_m, 500.0);
        assert_eq!(fixture.market_context.regulatory_hurdle_score_1_5, 4.0);
        assert_eq!(fixture.expect.count(), 3);
        assert_eq!(fixture.expect.risks.as_ref().unwrap()[0].category, "Legal_Compliance");
    }

    #[test]
    fn missing_text_is_a_parse_error() {
        let err = parse_fixture("title = \"No text\"", "no-text.toml").unwrap_err();
        assert!(matches!(err, SpecError::Parse { ref path, .. } if path == "no-text.toml"));
    }

    #[test]
    fn scalar_checklist_is_a_parse_error() {
        let err = parse_fixture(
            "text = \"\"\n[evaluation_profile]\ncritical_clauses_checklist = \"MAC\"",
            "scalar.toml",
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::Parse { .. }));
    }

    #[test]
    fn zero_scale_is_a_parse_error() {
        let err = parse_fixture(
            "text = \"\"\n[risk_assessment]\nseverity_scale_max = 0",
            "zero.toml",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse zero.toml: severity_scale_max must be at least 1, got 0"
        );
    }
}
