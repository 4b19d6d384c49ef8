//! # Observability & Tracing
//!
//! Routing is traced with structured fields so a single send can be followed
//! hop by hop:
//!
//! - **`info`**: actor started / stopped, system shutdown
//! - **`debug`**: hand-off to opaque references, dead ends, resolution outcome,
//!   dead letters
//! - **`trace`**: every hop, pattern match counts, final delivery
//!
//! ```bash
//! RUST_LOG=info cargo test
//! RUST_LOG=actor_selection::selection=trace cargo test -- --nocapture
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO Actor started path="local://sys/workers/w1"
//! DEBUG Resolving selection=local://sys/workers/w* correlation_id=6f1c… timeout=1s
//! DEBUG Resolved selection=local://sys/workers/w* actor=local://sys/workers/w1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Panics if a global subscriber is already installed; see
/// [`try_setup_tracing`] for the lenient variant.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but a no-op when a subscriber is already installed
/// (useful in tests, where many cases share one process).
pub fn try_setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
