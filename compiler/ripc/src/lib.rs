//! ripcheck: a differential conformance oracle.
//!
//! Proves that the hand-built subject ([`rip_subject`]) tokenizes and
//! parses the supported Ruby subset exactly as the reference
//! ([`rip_lexer`], [`rip_parse`]) does, fixture by fixture.
//!
//! ```text
//! fixture line ──► subject process ──► stdout ─────────────┐
//!       │                                                  ▼
//!       ├──► canonical_tokens() ──► "start-end type text" ─► compare
//!       │                                                  ▲
//!       └──► label_stream() ──► "INTEGER=1 ADD ..." ───────┘
//! ```
//!
//! The reference side is pure; only the subject run touches the OS.

pub mod canonical;
pub mod classify;
pub mod commands;
mod error;
pub mod fixture;
pub mod oracle;
pub mod subject;
pub mod test;

use std::sync::Once;

pub use canonical::{canonical_tokens, render_tokens};
pub use classify::{classify, label_stream, render_labels, ClassifyError};
pub use error::SetupError;
pub use fixture::{Fixture, FixtureError, MissingDelimiter, Mode};
pub use oracle::{evaluate, normalize, Divergence, Outcome};
pub use subject::{ProcessError, SubjectOutput, SubjectRunner};
pub use test::{run_fixtures, FixtureResult, OracleConfig, TestSummary};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ripc=debug`; set `RIPC_LOG_TREE=1` for
/// hierarchical output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("RIPC_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
