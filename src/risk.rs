//! Keyword-frequency risk identification.
//!
//! Each configured category label doubles as its search phrase: underscores
//! become spaces and the phrase is counted as literal, case-insensitive text.
//! Hit counts map onto bounded ratings:
//!
//! - severity = `min(severity_scale_max, hits)`
//! - likelihood = `min(likelihood_scale_max, 1 + hits / 2)`
//!
//! Categories without hits produce no [`RiskItem`].

use serde::{Deserialize, Serialize};

use crate::config::{DealContext, RiskAssessmentParameters};
use crate::utils::count_literal_ci;

/// A risk category found in the text with its ratings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskItem {
    /// Configured label, underscores intact.
    pub category: String,
    /// In `1..=severity_scale_max`.
    pub severity: u32,
    /// In `1..=likelihood_scale_max`.
    pub likelihood: u32,
}

impl RiskItem {
    /// Ratings for a category with `hits > 0` keyword occurrences.
    fn from_hits(category: &str, hits: usize, params: &RiskAssessmentParameters) -> Self {
        let hits = u32::try_from(hits).unwrap_or(u32::MAX);
        Self {
            category: category.to_string(),
            severity: bounded_rating(hits, params.severity_scale_max),
            likelihood: bounded_rating(1 + hits / 2, params.likelihood_scale_max),
        }
    }
}

/// Clamp into `1..=scale_max`; a zero scale is treated as 1.
fn bounded_rating(raw: u32, scale_max: u32) -> u32 {
    raw.clamp(1, scale_max.max(1))
}

/// Scans agreement text for configured risk categories.
///
/// # Example
///
/// ```
/// use mna_quant::{DealContext, RiskAssessmentParameters, RiskIdentifier};
///
/// let text = "Legal compliance is essential. Financial exposure may occur.";
/// let params = RiskAssessmentParameters::default();
///
/// let risks = RiskIdentifier::new().identify(text, &DealContext::default(), &params);
/// assert_eq!(risks.len(), 2);
/// assert_eq!(risks[0].category, "Legal_Compliance");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskIdentifier;

impl RiskIdentifier {
    pub fn new() -> Self {
        Self
    }

    /// Identify risk categories present in `agreement_text`, in scan order.
    ///
    /// `_deal_context` is a reserved extension point and is not read.
    pub fn identify(
        &self,
        agreement_text: &str,
        _deal_context: &DealContext,
        risk_assessment_parameters: &RiskAssessmentParameters,
    ) -> Vec<RiskItem> {
        let items: Vec<RiskItem> = risk_assessment_parameters
            .risk_categories_to_scan
            .iter()
            .filter_map(|category| {
                let phrase = category.replace('_', " ");
                let hits = count_literal_ci(agreement_text, &phrase);
                tracing::trace!(category = %category, hits, "risk category scanned");
                (hits > 0)
                    .then(|| RiskItem::from_hits(category, hits, risk_assessment_parameters))
            })
            .collect();

        tracing::debug!(
            scanned = risk_assessment_parameters.risk_categories_to_scan.len(),
            flagged = items.len(),
            "identified deal risks"
        );

        items
    }
}
