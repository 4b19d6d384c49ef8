//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running an actor tree:
//!
//! - **System lifecycle**: creating the root, spawning top-level actors, shutting down
//! - **Configuration**: system name and default resolution timeout
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`ActorSystem`] - owns the root of the tree
//! - [`SystemConfig`] - serde-deserializable settings
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod system;
pub mod tracing;

pub use config::SystemConfig;
pub use system::ActorSystem;
pub use self::tracing::{setup_tracing, try_setup_tracing};
