//! Typed configuration records for the review heuristics.
//!
//! Callers hand over loosely shaped mappings (JSON values or TOML tables).
//! Each mapping is shaped into a record with named fields and documented
//! defaults here, so a wrong-typed value is reported at the boundary instead
//! of being silently coerced. Unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ConfigError, ConfigResult};
use crate::ComplianceResult;

/// Risk categories scanned when none are configured.
pub const DEFAULT_RISK_CATEGORIES: [&str; 3] = [
    "Legal_Compliance",
    "Financial_Exposure",
    "Operational_Disruption",
];

/// Default upper bound of the severity and likelihood scales.
pub const DEFAULT_SCALE_MAX: u32 = 5;

/// Regulatory hurdle assumed when the market context is silent.
pub const DEFAULT_REGULATORY_HURDLE: f64 = 3.0;

/// A configuration record that can be shaped from a loose mapping.
pub trait ConfigSection: DeserializeOwned {
    /// Name used in error messages and as the TOML table key.
    const SECTION: &'static str;

    /// Checks that go beyond the shape of the data.
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

/// Shape a JSON mapping into a typed record and validate it.
///
/// ```
/// use mna_quant::{from_value, EvaluationProfile};
/// use serde_json::json;
///
/// let profile: EvaluationProfile =
///     from_value(json!({ "critical_clauses_checklist": ["MAC"] })).unwrap();
/// assert_eq!(profile.critical_clauses_checklist, vec!["MAC".to_string()]);
///
/// let malformed = from_value::<EvaluationProfile>(json!({ "critical_clauses_checklist": "MAC" }));
/// assert!(malformed.is_err());
/// ```
pub fn from_value<T: ConfigSection>(value: Value) -> ConfigResult<T> {
    let record: T = serde_json::from_value(value).map_err(|e| ConfigError::Malformed {
        section: T::SECTION.to_string(),
        message: e.to_string(),
    })?;
    record.validate()?;
    Ok(record)
}

fn from_toml_value<T: ConfigSection>(value: toml::Value) -> ConfigResult<T> {
    let record: T = value.try_into().map_err(|e: toml::de::Error| ConfigError::Malformed {
        section: T::SECTION.to_string(),
        message: e.message().to_string(),
    })?;
    record.validate()?;
    Ok(record)
}

// ============================================================================
// Compliance
// ============================================================================

/// Evaluation profile for the structure and compliance analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationProfile {
    /// Clauses expected somewhere in the agreement, matched as literal text.
    pub critical_clauses_checklist: Vec<String>,
}

impl EvaluationProfile {
    pub fn with_checklist<I, S>(clauses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            critical_clauses_checklist: clauses.into_iter().map(Into::into).collect(),
        }
    }
}

impl ConfigSection for EvaluationProfile {
    const SECTION: &'static str = "evaluation_profile";
}

// ============================================================================
// Risk
// ============================================================================

/// Parameters for keyword-based risk identification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessmentParameters {
    /// Category labels; underscores become spaces when searching.
    pub risk_categories_to_scan: Vec<String>,
    pub severity_scale_max: u32,
    pub likelihood_scale_max: u32,
}

impl Default for RiskAssessmentParameters {
    fn default() -> Self {
        Self {
            risk_categories_to_scan: DEFAULT_RISK_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            severity_scale_max: DEFAULT_SCALE_MAX,
            likelihood_scale_max: DEFAULT_SCALE_MAX,
        }
    }
}

impl RiskAssessmentParameters {
    /// Default scales with a custom category list.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            risk_categories_to_scan: categories.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl ConfigSection for RiskAssessmentParameters {
    const SECTION: &'static str = "risk_assessment";

    fn validate(&self) -> ConfigResult<()> {
        if self.severity_scale_max == 0 {
            return Err(ConfigError::InvalidScale {
                field: "severity_scale_max",
                value: self.severity_scale_max,
            });
        }
        if self.likelihood_scale_max == 0 {
            return Err(ConfigError::InvalidScale {
                field: "likelihood_scale_max",
                value: self.likelihood_scale_max,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Closure prediction inputs
// ============================================================================

/// Headline financials of the deal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealFinancials {
    /// Deal value in millions of USD.
    #[serde(rename = "deal_value_usd_M")]
    pub deal_value_usd_m: f64,
}

impl ConfigSection for DealFinancials {
    const SECTION: &'static str = "deal_financials";
}

/// Market conditions around the deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketContext {
    /// Regulatory hurdle on a nominal 1 to 5 scale; not range checked.
    pub regulatory_hurdle_score_1_5: f64,
}

impl Default for MarketContext {
    fn default() -> Self {
        Self {
            regulatory_hurdle_score_1_5: DEFAULT_REGULATORY_HURDLE,
        }
    }
}

impl ConfigSection for MarketContext {
    const SECTION: &'static str = "market_context";
}

/// Outputs of earlier agreement analysis fed into the predictor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgreementAnalysis {
    pub missing_clauses: Vec<String>,
}

impl ConfigSection for AgreementAnalysis {
    const SECTION: &'static str = "agreement_analysis";
}

impl From<&ComplianceResult> for AgreementAnalysis {
    fn from(result: &ComplianceResult) -> Self {
        Self {
            missing_clauses: result.missing_clauses.clone(),
        }
    }
}

// ============================================================================
// Reserved mappings
// ============================================================================

macro_rules! reserved_mapping {
    ($(#[$meta:meta])* $name:ident, $section:literal) => {
        $(#[$meta])*
        ///
        /// Reserved extension point: carried through the call surface but never
        /// read by any heuristic.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub fields: Map<String, Value>,
        }

        impl ConfigSection for $name {
            const SECTION: &'static str = $section;
        }
    };
}

reserved_mapping!(
    /// Context about the deal (parties, sector, jurisdiction).
    DealContext,
    "deal_context"
);
reserved_mapping!(
    /// Structure of the deal (consideration mix, earn-outs).
    DealStructure,
    "deal_structure"
);
reserved_mapping!(
    /// Weights for the closure scoring model.
    PredictionModelConfig,
    "prediction_model"
);

// ============================================================================
// ReviewConfig
// ============================================================================

/// All caller-supplied configuration, loadable from one TOML document.
///
/// ```toml
/// [evaluation_profile]
/// critical_clauses_checklist = ["MAC", "Non-Compete"]
///
/// [risk_assessment]
/// risk_categories_to_scan = ["Legal_Compliance"]
/// severity_scale_max = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    pub evaluation_profile: EvaluationProfile,
    pub risk_assessment: RiskAssessmentParameters,
    pub prediction_model: PredictionModelConfig,
}

impl ReviewConfig {
    /// Parse a TOML document; absent tables take their defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let mut table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::Malformed {
            section: "review".to_string(),
            message: e.message().to_string(),
        })?;

        let config = Self {
            evaluation_profile: take_section(&mut table)?,
            risk_assessment: take_section(&mut table)?,
            prediction_model: take_section(&mut table)?,
        };

        for unknown in table.keys() {
            tracing::debug!(table = %unknown, "ignoring unknown review config table");
        }

        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}

fn take_section<T: ConfigSection + Default>(table: &mut toml::Table) -> ConfigResult<T> {
    match table.remove(T::SECTION) {
        Some(value) => from_toml_value(value),
        None => Ok(T::default()),
    }
}
