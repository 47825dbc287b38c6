//! Human-readable diagnostics for failed checks.

use crate::failures::{FailureState, HarnessResult};
use crate::fixture::DealFixture;
use crate::runner::{CheckOutcome, CheckResult};
use std::fmt::Write;

/// Format a failed check with fixture context.
pub fn format_failure(
    fixture_name: &str,
    fixture: &DealFixture,
    result: &CheckResult,
    state: FailureState,
) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "\nFAIL: {} [{}] ({})",
        fixture_name,
        result.check,
        state.label()
    )
    .unwrap();
    if let Some(title) = &fixture.title {
        writeln!(output, "  {}", title).unwrap();
    }
    writeln!(output).unwrap();

    match &result.outcome {
        CheckOutcome::Failed { expected, actual } => {
            writeln!(
                output,
                "    \u{2717} {}: expected `{}`, found `{}`",
                result.check, expected, actual
            )
            .unwrap();
        }
        CheckOutcome::Passed => {
            // Should not happen in format_failure
            writeln!(output, "  (passed)").unwrap();
        }
    }

    if let Some(hint) = generate_hint(fixture, result) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of a harness run.
pub fn format_summary(label: &str, result: &HarnessResult) -> String {
    let mut output = String::new();

    let status = if result.success() { "PASS" } else { "FAIL" };

    writeln!(output, "\n{}: {}", status, label).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        result.passed,
        result.failed(),
        result.expected_failures,
        result.regressions
    )
    .unwrap();

    output
}

fn generate_hint(fixture: &DealFixture, result: &CheckResult) -> Option<String> {
    match result.check {
        "section_count" => Some(
            "headers count only at the very start of a line: `12.` or `Section 12`".to_string(),
        ),
        "ambiguity_score" => Some(
            "every run of `.`, `!` or `?` starts a new segment, including abbreviations and a trailing period"
                .to_string(),
        ),
        "missing_clauses" => Some(
            "checklist clauses match as literal, case-insensitive text; underscores are not spaces"
                .to_string(),
        ),
        "risks" => Some(
            "category phrases replace underscores with single spaces before matching".to_string(),
        ),
        "closure_probability" if fixture.agreement_analysis.is_none() => Some(
            "no [agreement_analysis] table: the predictor was fed this fixture's missing clauses"
                .to_string(),
        ),
        _ => None,
    }
}
