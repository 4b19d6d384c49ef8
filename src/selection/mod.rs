//! Path-based addressing and routing.
//!
//! # Main Components
//!
//! - [`PathElement`] - one hop: a child name, a child glob, or `..`
//! - [`parse`] / [`parse_segments`] - path text to elements
//! - [`ActorSelection`] - anchor + elements; `tell` and `resolve_one`
//! - [`deliver_selection`] - the tree walk behind every send
//! - [`SelectionMessage`] - a message still on its way, with the unconsumed path
//!
//! ```text
//!  ActorSelection::tell ──▶ deliver_selection ──▶ local hop (.., name, glob) ──▶ ... ──▶ ActorRef::tell
//!                                   │
//!                                   └── opaque reference ──▶ SelectionMessage { rest of path }
//! ```

pub mod actor_selection;
pub mod delivery;
pub mod element;
pub mod error;
pub mod message;
pub mod parser;
pub mod resolve;

pub use actor_selection::ActorSelection;
pub use delivery::deliver_selection;
pub use element::{ChildPattern, PathElement};
pub use error::SelectionError;
pub use message::SelectionMessage;
pub use parser::{parse, parse_segments};
