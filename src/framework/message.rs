//! # Messages
//!
//! Everything that travels through a mailbox is an [`Envelope`]: a [`Message`]
//! plus the optional sender that replies should be addressed to.
//!
//! User data is carried as an opaque [`Payload`]. The framework never looks
//! inside it; it only needs to clone it when a wildcard hop fans out to several
//! recipients.
//!
//! Two message shapes are well known to every actor:
//!
//! - [`Identify`] asks "who are you?". Every running actor answers it with an
//!   [`ActorIdentity`] carrying the same [`CorrelationId`] and its own reference.
//! - [`SelectionMessage`] is a message still on its way to its recipients,
//!   together with the path elements not yet consumed.

use crate::framework::actor_ref::ActorRef;
use crate::selection::SelectionMessage;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Opaque, cheaply cloneable message body.
#[derive(Clone)]
pub struct Payload {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Payload {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload<{}>", self.type_name)
    }
}

/// Token pairing an [`Identify`] probe with its [`ActorIdentity`] reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Existence probe. Answered by every running actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identify {
    pub correlation_id: CorrelationId,
}

impl Identify {
    pub fn new(correlation_id: CorrelationId) -> Self {
        Self { correlation_id }
    }
}

/// Reply to an [`Identify`] probe. `actor` is `None` when nothing lives at the
/// probed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorIdentity {
    pub correlation_id: CorrelationId,
    pub actor: Option<ActorRef>,
}

impl ActorIdentity {
    pub fn found(correlation_id: CorrelationId, actor: ActorRef) -> Self {
        Self {
            correlation_id,
            actor: Some(actor),
        }
    }

    pub fn not_found(correlation_id: CorrelationId) -> Self {
        Self {
            correlation_id,
            actor: None,
        }
    }
}

/// Everything an actor reference can be asked to deliver.
#[derive(Clone, Debug)]
pub enum Message {
    /// Application data.
    User(Payload),
    Identify(Identify),
    ActorIdentity(ActorIdentity),
    /// A message still being routed along a selection path.
    Selection(SelectionMessage),
    /// Stops the receiving actor and all of its children.
    PoisonPill,
}

impl Message {
    /// The identify probe carried by this message, looking through any
    /// selection envelopes wrapped around it.
    pub fn identify_request(&self) -> Option<&Identify> {
        match self {
            Message::Identify(identify) => Some(identify),
            Message::Selection(selection) => selection.identify_request(),
            _ => None,
        }
    }
}

impl From<Payload> for Message {
    fn from(payload: Payload) -> Self {
        Message::User(payload)
    }
}

impl From<Identify> for Message {
    fn from(identify: Identify) -> Self {
        Message::Identify(identify)
    }
}

impl From<ActorIdentity> for Message {
    fn from(identity: ActorIdentity) -> Self {
        Message::ActorIdentity(identity)
    }
}

impl From<SelectionMessage> for Message {
    fn from(selection: SelectionMessage) -> Self {
        Message::Selection(selection)
    }
}

/// A message together with the reference replies should go to.
#[derive(Clone, Debug)]
pub struct Envelope {
    pub message: Message,
    pub sender: Option<ActorRef>,
}

impl Envelope {
    pub fn new(message: impl Into<Message>, sender: Option<ActorRef>) -> Self {
        Self {
            message: message.into(),
            sender,
        }
    }

    /// The user payload, if this envelope carries one.
    pub fn payload(&self) -> Option<&Payload> {
        match &self.message {
            Message::User(payload) => Some(payload),
            _ => None,
        }
    }
}
