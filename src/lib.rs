#![doc(
    issue_tracker_base_url = "https://github.com/storyscript/mna-quant/issues/"
)]

//! Heuristic review helpers for M&A agreements.
//!
//! Three independent, stateless operations:
//!
//! - [`StructureComplianceAnalyzer`] - Counts section headers, scores modal-verb
//!   ambiguity and lists checklist clauses missing from the text
//! - [`RiskIdentifier`] - Flags risk categories by keyword frequency with bounded
//!   severity and likelihood ratings
//! - [`ClosureProbabilityPredictor`] - Additive closure score clamped to `[0, 100]`
//!
//! Configuration arrives as typed records ([`EvaluationProfile`],
//! [`RiskAssessmentParameters`], ...) which can be shaped from loose JSON
//! mappings with [`from_value`] or loaded from TOML via [`ReviewConfig`].
//!
//! Nothing chains the operations together; callers feed
//! [`ComplianceResult::missing_clauses`] into the predictor themselves.
//!
//! ## Example
//!
//! ```
//! use mna_quant::*;
//!
//! let text = "1. Definitions\n2. Purchase Price\nThe Buyer may terminate.";
//! let profile = EvaluationProfile::with_checklist(["MAC"]);
//!
//! let compliance =
//!     StructureComplianceAnalyzer::new().analyze(text, &DealContext::default(), &profile);
//! assert_eq!(compliance.section_count, 2);
//!
//! let probability = ClosureProbabilityPredictor::new().predict(
//!     &DealFinancials { deal_value_usd_m: 2500.0 },
//!     &DealStructure::default(),
//!     &AgreementAnalysis::from(&compliance),
//!     &MarketContext::default(),
//!     &PredictionModelConfig::default(),
//! );
//! assert_eq!(probability, 43.5);
//! ```

mod closure;
mod compliance;
mod config;
mod errors;
mod risk;
mod utils;

pub use closure::{ClosureProbabilityPredictor, BASE_SCORE};
pub use compliance::{ComplianceResult, StructureComplianceAnalyzer};
pub use config::{
    from_value, AgreementAnalysis, ConfigSection, DealContext, DealFinancials, DealStructure,
    EvaluationProfile, MarketContext, PredictionModelConfig, ReviewConfig,
    RiskAssessmentParameters, DEFAULT_REGULATORY_HURDLE, DEFAULT_RISK_CATEGORIES,
    DEFAULT_SCALE_MAX,
};
pub use errors::{ConfigError, ConfigResult};
pub use risk::{RiskIdentifier, RiskItem};
