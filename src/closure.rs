//! Additive closure probability scoring.

use crate::config::{
    AgreementAnalysis, DealFinancials, DealStructure, MarketContext, PredictionModelConfig,
};
use crate::utils::round_to;

/// Score before any adjustment.
pub const BASE_SCORE: f64 = 50.0;

/// Points gained per USD 1,000M of deal value.
const DEAL_VALUE_DIVISOR: f64 = 1000.0;

/// Points lost per regulatory hurdle point.
const REGULATORY_PENALTY: f64 = 2.0;

/// Points lost per missing checklist clause.
const MISSING_CLAUSE_PENALTY: f64 = 3.0;

/// Computes a bounded closure score in `[0, 100]`.
///
/// The score is a heuristic, not a calibrated probability:
///
/// `50 + deal_value_usd_M / 1000 - 2 * regulatory_hurdle - 3 * missing_clauses`,
/// clamped into `[0, 100]` and rounded to 2 decimals.
///
/// # Example
///
/// ```
/// use mna_quant::*;
///
/// let probability = ClosureProbabilityPredictor::new().predict(
///     &DealFinancials { deal_value_usd_m: 500.0 },
///     &DealStructure::default(),
///     &AgreementAnalysis { missing_clauses: vec!["MAC".into()] },
///     &MarketContext { regulatory_hurdle_score_1_5: 4.0 },
///     &PredictionModelConfig::default(),
/// );
/// assert_eq!(probability, 39.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosureProbabilityPredictor;

impl ClosureProbabilityPredictor {
    pub fn new() -> Self {
        Self
    }

    /// `_deal_structure` and `_prediction_model_config` are reserved
    /// extension points and are not read.
    pub fn predict(
        &self,
        deal_financials: &DealFinancials,
        _deal_structure: &DealStructure,
        agreement_analysis: &AgreementAnalysis,
        market_context: &MarketContext,
        _prediction_model_config: &PredictionModelConfig,
    ) -> f64 {
        let missing = agreement_analysis.missing_clauses.len();
        let raw = BASE_SCORE + deal_financials.deal_value_usd_m / DEAL_VALUE_DIVISOR
            - REGULATORY_PENALTY * market_context.regulatory_hurdle_score_1_5
            - MISSING_CLAUSE_PENALTY * missing as f64;

        let score = if raw.is_nan() {
            tracing::warn!(
                deal_value_usd_m = deal_financials.deal_value_usd_m,
                regulatory_hurdle = market_context.regulatory_hurdle_score_1_5,
                "closure score is not a number, using 100"
            );
            100.0
        } else {
            round_to(raw.clamp(0.0, 100.0), 2)
        };

        tracing::debug!(raw, score, missing, "predicted closure probability");
        score
    }
}
