//! # Selection Errors
//!
//! Only two things can go wrong with a selection:
//!
//! - building it from a glob that does not compile (fails immediately, at
//!   construction time);
//! - asking it to [`resolve_one`](crate::selection::ActorSelection::resolve_one)
//!   and getting no positive answer. A negative reply, an unexpected reply and a
//!   timeout all collapse into [`SelectionError::ActorNotFound`].
//!
//! Sending through a selection never fails: a dead end is a silent drop.

use crate::selection::actor_selection::ActorSelection;

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("Actor not found for: {0}")]
    ActorNotFound(ActorSelection),
}
