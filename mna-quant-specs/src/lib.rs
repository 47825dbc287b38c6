//! Fixture-driven regression harness for mna-quant.
//!
//! Deal fixtures are TOML documents pairing agreement text and configuration
//! with the results each heuristic should return. The harness runs every
//! fixture, compares the expectations that are set, and classifies failures
//! against an `expected-failures.toml` ledger.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types and parsing
//! - [`loader`] - Fixture file discovery
//! - [`runner`] - Runs the heuristics and checks expectations
//! - [`failures`] - Expected failures tracking via TOML
//! - [`formatter`] - Failure and summary diagnostics
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, DealFixture, Expectations};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{
    check_fixture, run_fixture, run_harness, CheckOutcome, CheckResult, FixtureReport, HarnessRun,
};
