//! Structure and compliance analysis of agreement text.
//!
//! Three independent scans over the same text:
//! - section headers at line start (`1.` or `Section 1`)
//! - density of ambiguous modal verbs per sentence-like segment
//! - presence of each checklist clause as literal text

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{DealContext, EvaluationProfile};
use crate::utils::{contains_literal_ci, round_to};

/// Lines opening with `12.` or `section 12`, case-insensitive.
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(?:\d+\.|section\s+\d+)").expect("Invalid section header regex"));

/// Whole-word modal verbs that soften an obligation.
static AMBIGUOUS_MODAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:may|might|could|should)\b").expect("Invalid modal regex"));

/// Runs of sentence-ending punctuation.
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence break regex"));

/// Outcome of [`StructureComplianceAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Number of lines that open with a section marker.
    pub section_count: usize,
    /// Modal verbs per sentence-like segment, rounded to 3 decimals.
    pub ambiguity_score: f64,
    /// Checklist clauses absent from the text, in checklist order.
    pub missing_clauses: Vec<String>,
}

/// Detects section structure, ambiguous language and missing checklist clauses.
///
/// # Example
///
/// ```
/// use mna_quant::{DealContext, EvaluationProfile, StructureComplianceAnalyzer};
///
/// let text = "Section 1\nThis Agreement shall...\nSection 2\nThe Buyer may...";
/// let profile = EvaluationProfile::with_checklist(["MAC", "Agreement"]);
///
/// let result = StructureComplianceAnalyzer::new().analyze(text, &DealContext::default(), &profile);
/// assert_eq!(result.section_count, 2);
/// assert_eq!(result.missing_clauses, vec!["MAC".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureComplianceAnalyzer;

impl StructureComplianceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze `agreement_text` against the checklist in `evaluation_profile`.
    ///
    /// `_deal_context` is a reserved extension point and is not read.
    pub fn analyze(
        &self,
        agreement_text: &str,
        _deal_context: &DealContext,
        evaluation_profile: &EvaluationProfile,
    ) -> ComplianceResult {
        let section_count = count_sections(agreement_text);
        let ambiguity_score = ambiguity_score(agreement_text);
        let missing_clauses = missing_clauses(
            agreement_text,
            &evaluation_profile.critical_clauses_checklist,
        );

        tracing::debug!(
            section_count,
            ambiguity_score,
            missing = missing_clauses.len(),
            checklist = evaluation_profile.critical_clauses_checklist.len(),
            "analyzed agreement structure"
        );

        ComplianceResult {
            section_count,
            ambiguity_score,
            missing_clauses,
        }
    }
}

/// Count lines starting with a numeric or `section N` marker.
///
/// No deduplication or ordering check: `1.` followed by `5.` counts 2.
pub(crate) fn count_sections(text: &str) -> usize {
    SECTION_HEADER.find_iter(text).count()
}

/// Modal verb occurrences divided by the number of sentence-like segments.
///
/// Splitting always yields at least one segment, so empty or
/// punctuation-free text divides by 1.
pub(crate) fn ambiguity_score(text: &str) -> f64 {
    let modals = AMBIGUOUS_MODAL.find_iter(text).count();
    let segments = SENTENCE_BREAK.split(text).count().max(1);
    round_to(modals as f64 / segments as f64, 3)
}

fn missing_clauses(text: &str, checklist: &[String]) -> Vec<String> {
    checklist
        .iter()
        .filter(|clause| {
            let found = contains_literal_ci(text, clause);
            tracing::trace!(clause = %clause, found, "checklist clause");
            !found
        })
        .cloned()
        .collect()
}
