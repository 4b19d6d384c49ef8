//! # Framework Errors
//!
//! Errors raised by the local actor tree itself (spawning and naming).
//! Routing errors live in [`crate::selection::SelectionError`].

/// Errors that can occur while building or changing the local actor tree.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Invalid actor name: {0:?}")]
    InvalidActorName(String),
    #[error("Actor name already taken: {0}")]
    DuplicateActorName(String),
    #[error("Shutdown failed: {0}")]
    ShutdownFailed(String),
}
