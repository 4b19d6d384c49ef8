//! # Actor References
//!
//! An [`ActorRef`] is the only handle the routing layer ever holds on an actor.
//! It never owns the actor; it only knows how to hand it an [`Envelope`].
//!
//! Whether the routing layer may look *inside* a reference (walk to its parent or
//! its children) is a capability, not a type test: [`Recipient::introspect`]
//! returns `Some` for nodes of the local tree and `None` for anything opaque
//! (remote proxies, probes, temporary reply handles). Opaque references receive
//! the rest of a selection path as an ordinary message and are trusted to
//! continue routing on their own.

use crate::framework::message::{Envelope, Message};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Something that can be sent messages.
pub trait Recipient: Send + Sync + 'static {
    /// Rendered address of this recipient, e.g. `local://sys/user/worker`.
    fn path(&self) -> &str;

    /// Fire-and-forget delivery. Must not block and must not fail for a dead
    /// target; undeliverable envelopes are dropped.
    fn deliver(&self, envelope: Envelope);

    /// Local tree structure, if this recipient exposes it.
    fn introspect(&self) -> Option<&dyn Introspect> {
        None
    }
}

/// Read-only view of a node of the local actor tree.
pub trait Introspect: Send + Sync {
    /// The parent node. The root is its own parent.
    fn parent(&self) -> ActorRef;

    /// The child with exactly this name.
    fn child(&self, name: &str) -> Option<ActorRef>;

    /// All children, in the order the tree enumerates them.
    fn children(&self) -> Vec<(String, ActorRef)>;
}

/// Cloneable handle to a [`Recipient`].
///
/// Equality and hashing are by identity: two handles are equal only when they
/// point at the very same recipient, whatever their paths look like.
#[derive(Clone)]
pub struct ActorRef {
    inner: Arc<dyn Recipient>,
}

impl ActorRef {
    pub fn new(recipient: impl Recipient) -> Self {
        Self {
            inner: Arc::new(recipient),
        }
    }

    pub fn from_arc<R: Recipient>(recipient: Arc<R>) -> Self {
        Self { inner: recipient }
    }

    pub fn path(&self) -> &str {
        self.inner.path()
    }

    /// Sends `message` to this reference, attributing it to `sender`.
    pub fn tell(&self, message: impl Into<Message>, sender: Option<&ActorRef>) {
        self.inner.deliver(Envelope::new(message, sender.cloned()));
    }

    pub fn deliver(&self, envelope: Envelope) {
        self.inner.deliver(envelope);
    }

    pub fn introspect(&self) -> Option<&dyn Introspect> {
        self.inner.introspect()
    }

    pub fn is_local(&self) -> bool {
        self.introspect().is_some()
    }

    fn identity(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }
}

impl PartialEq for ActorRef {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for ActorRef {}

impl Hash for ActorRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Debug for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorRef({})", self.path())
    }
}

/// Sink for messages that could not be delivered.
pub struct DeadLetters {
    path: String,
}

impl DeadLetters {
    pub fn new(system_name: &str) -> Self {
        Self {
            path: format!("local://{}/deadLetters", system_name),
        }
    }
}

impl Recipient for DeadLetters {
    fn path(&self) -> &str {
        &self.path
    }

    fn deliver(&self, envelope: Envelope) {
        let sender = envelope.sender.as_ref().map(ActorRef::path);
        debug!(?sender, message = ?envelope.message, "Dead letter");
    }
}
