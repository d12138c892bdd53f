//! Fixture runner infrastructure.
//!
//! - Discovery: finding fixture files and their mode
//! - Execution: evaluating every fixture line against the subject
//! - Result tracking: per-file and overall outcome counts
//! - Parallel execution: fixtures run concurrently with rayon

mod discovery;
mod result;

pub use discovery::{discover_fixtures, discover_fixtures_in, FixtureFile};
pub use result::{FileSummary, FixtureResult, TestSummary};
pub use runner::{run_fixtures, OracleConfig, SUBJECT_ENV};
