//! Runs fixtures through the three heuristics and checks expectations.

use mna_quant::{
    AgreementAnalysis, ClosureProbabilityPredictor, ComplianceResult, RiskIdentifier, RiskItem,
    StructureComplianceAnalyzer,
};

use crate::failures::{ExpectedFailures, HarnessResult};
use crate::fixture::DealFixture;
use crate::formatter::format_failure;

/// Largest difference tolerated between expected and actual scores.
pub const SCORE_TOLERANCE: f64 = 1e-9;

/// Everything the heuristics produced for one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureReport {
    pub compliance: ComplianceResult,
    pub risks: Vec<RiskItem>,
    pub closure_probability: f64,
}

/// Outcome of a single expectation.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Passed,
    Failed { expected: String, actual: String },
}

/// A named expectation and its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub check: &'static str,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    fn compare<T: PartialEq + std::fmt::Debug>(check: &'static str, expected: &T, actual: &T) -> Self {
        Self::from_bool(check, expected == actual, expected, actual)
    }

    fn compare_score(check: &'static str, expected: f64, actual: f64) -> Self {
        Self::from_bool(
            check,
            (expected - actual).abs() <= SCORE_TOLERANCE,
            &expected,
            &actual,
        )
    }

    fn from_bool<T: std::fmt::Debug>(check: &'static str, ok: bool, expected: &T, actual: &T) -> Self {
        let outcome = if ok {
            CheckOutcome::Passed
        } else {
            CheckOutcome::Failed {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            }
        };
        Self { check, outcome }
    }

    pub fn passed(&self) -> bool {
        self.outcome == CheckOutcome::Passed
    }
}

/// Run every heuristic on the fixture.
///
/// The predictor receives the fixture's `agreement_analysis` when present,
/// otherwise the missing clauses found by the compliance scan.
pub fn run_fixture(fixture: &DealFixture) -> FixtureReport {
    let compliance = StructureComplianceAnalyzer::new().analyze(
        &fixture.text,
        &fixture.deal_context,
        &fixture.evaluation_profile,
    );

    let risks = RiskIdentifier::new().identify(
        &fixture.text,
        &fixture.deal_context,
        &fixture.risk_assessment,
    );

    let analysis = fixture
        .agreement_analysis
        .clone()
        .unwrap_or_else(|| AgreementAnalysis::from(&compliance));

    let closure_probability = ClosureProbabilityPredictor::new().predict(
        &fixture.deal_financials,
        &fixture.deal_structure,
        &analysis,
        &fixture.market_context,
        &fixture.prediction_model,
    );

    FixtureReport {
        compliance,
        risks,
        closure_probability,
    }
}

/// Compare a report against the fixture's expectations, one result per
/// expectation that is set.
pub fn check_fixture(fixture: &DealFixture, report: &FixtureReport) -> Vec<CheckResult> {
    let expect = &fixture.expect;
    let mut results = Vec::with_capacity(expect.count());

    if let Some(expected) = &expect.section_count {
        results.push(CheckResult::compare(
            "section_count",
            expected,
            &report.compliance.section_count,
        ));
    }
    if let Some(expected) = expect.ambiguity_score {
        results.push(CheckResult::compare_score(
            "ambiguity_score",
            expected,
            report.compliance.ambiguity_score,
        ));
    }
    if let Some(expected) = &expect.missing_clauses {
        results.push(CheckResult::compare(
            "missing_clauses",
            expected,
            &report.compliance.missing_clauses,
        ));
    }
    if let Some(expected) = &expect.risks {
        results.push(CheckResult::compare("risks", expected, &report.risks));
    }
    if let Some(expected) = expect.closure_probability {
        results.push(CheckResult::compare_score(
            "closure_probability",
            expected,
            report.closure_probability,
        ));
    }

    results
}

/// Tally and diagnostics for a harness run.
#[derive(Debug, Clone, Default)]
pub struct HarnessRun {
    pub result: HarnessResult,
    /// Formatted failures, expected ones included.
    pub failures: Vec<String>,
}

/// Run and check every fixture, classifying failures against `expected`.
pub fn run_harness(fixtures: &[(String, DealFixture)], expected: &ExpectedFailures) -> HarnessRun {
    let mut run = HarnessRun::default();

    for (name, fixture) in fixtures {
        let report = run_fixture(fixture);
        for check in check_fixture(fixture, &report) {
            if check.passed() {
                run.result.record_pass();
                continue;
            }
            let state = expected.is_expected(name, check.check);
            tracing::debug!(fixture = %name, check = check.check, state = state.label(), "check failed");
            run.result.record_failure(state);
            run.failures.push(format_failure(name, fixture, &check, state));
        }
    }

    run
}
