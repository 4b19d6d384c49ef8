#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Actor Selection
//!
//! > **Path-based addressing for a tree of Tokio actors.**
//!
//! Given an anchor reference and a path such as `"../workers/w*/inbox"`, this crate
//! routes a message to zero, one or many actors, walking the local tree hop by hop
//! and handing the rest of the path to any reference it cannot look inside.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Sends never fail, resolution answers
//!
//! - **`tell`** is fire-and-forget. A path that leads nowhere silently drops the
//!   message, exactly like sending to a stopped actor.
//! - **`resolve_one`** is the only way to learn whether something lives at a path.
//!   It layers an `Identify` / `ActorIdentity` exchange on top of `tell` and fails
//!   with `ActorNotFound` on a negative reply, an unexpected reply or a timeout.
//!
//! ### Capabilities, not ownership
//!
//! The routing core never owns actors. It asks a reference two questions: "can I
//! look inside you?" ([`Recipient::introspect`](framework::Recipient::introspect))
//! and "deliver this" ([`Recipient::deliver`](framework::Recipient::deliver)).
//! Anything opaque (a remote proxy, a test probe) is trusted to continue routing.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use actor_selection::framework::{Actor, ActorContext, Envelope, Payload};
//! use actor_selection::framework::mock::TestProbe;
//! use actor_selection::lifecycle::{ActorSystem, SystemConfig};
//! use async_trait::async_trait;
//! use std::time::Duration;
//!
//! /// Forwards every payload it receives to a probe.
//! struct Echo(actor_selection::framework::ActorRef);
//!
//! #[async_trait]
//! impl Actor for Echo {
//!     async fn receive(&mut self, ctx: &mut ActorContext, envelope: Envelope) {
//!         if let Some(payload) = envelope.payload() {
//!             self.0.tell(payload.clone(), Some(ctx.self_ref()));
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::new(SystemConfig::named("demo"));
//!     let mut probe = TestProbe::new("probe");
//!     system.spawn("w1", Echo(probe.actor_ref())).unwrap();
//!     system.spawn("w2", Echo(probe.actor_ref())).unwrap();
//!
//!     // Fan out to both workers.
//!     system.actor_selection("/w*").unwrap().tell(Payload::new("ping"), None);
//!     let first: &str = probe.expect_payload(Duration::from_secs(1)).await;
//!     let second: &str = probe.expect_payload(Duration::from_secs(1)).await;
//!     assert_eq!((first, second), ("ping", "ping"));
//!
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Routing Core ([`selection`])
//! - **Role**: path parsing, the tree walk, and the resolution protocol.
//! - **Key items**: [`ActorSelection`](selection::ActorSelection),
//!   [`PathElement`](selection::PathElement),
//!   [`deliver_selection`](selection::deliver_selection).
//!
//! ### 2. The Actor Tree ([`framework`])
//! - **Role**: references, cells with mailboxes, the `Actor` trait, messages.
//! - **Key items**: [`ActorRef`](framework::ActorRef), [`Actor`](framework::Actor),
//!   [`TestProbe`](framework::mock::TestProbe).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: owns the root of a tree, configuration and tracing setup.
//! - **Key items**: [`ActorSystem`](lifecycle::ActorSystem),
//!   [`SystemConfig`](lifecycle::SystemConfig).
//!
//! ## Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod framework;
pub mod lifecycle;
pub mod selection;
