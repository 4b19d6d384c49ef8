//! Local actor tree: references, cells, mailboxes and messages.
//!
//! This is the collaborator the routing core navigates. The core itself only
//! relies on three things from here:
//!
//! - [`Recipient::deliver`]: fire-and-forget delivery to a reference
//! - [`Recipient::introspect`]: whether a reference exposes its tree structure
//! - [`Introspect`]: parent, single child and child enumeration
//!
//! # Testing
//!
//! See the [`mock`] module for [`TestProbe`](mock::TestProbe).

pub mod actor;
pub mod actor_ref;
pub mod cell;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::{Actor, ActorContext};
pub use actor_ref::{ActorRef, DeadLetters, Introspect, Recipient};
pub use cell::ActorCell;
pub use error::FrameworkError;
pub use message::{ActorIdentity, CorrelationId, Envelope, Identify, Message, Payload};
