//! # Resolution Protocol
//!
//! `resolve_one` answers "is there a concrete actor at this path?" using nothing
//! but ordinary messages:
//!
//! 1. A temporary, opaque [`ReplySlot`] reference is created, wrapping the
//!    sending half of a `oneshot` channel.
//! 2. An [`Identify`] probe with a fresh [`CorrelationId`] is sent through the
//!    selection with the slot as sender.
//! 3. The first envelope delivered to the slot claims it. Later deliveries (other
//!    branches of a wildcard fan-out, replies arriving after the timeout) find the
//!    slot empty and are dropped.
//!
//! Only a positive [`ActorIdentity`] with the matching correlation id resolves.
//! Anything else, including the timeout, is [`SelectionError::ActorNotFound`].

use crate::framework::actor_ref::{ActorRef, Recipient};
use crate::framework::message::{ActorIdentity, CorrelationId, Envelope, Identify, Message};
use crate::selection::actor_selection::ActorSelection;
use crate::selection::error::SelectionError;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, trace};

/// Single-assignment reply handle.
struct ReplySlot {
    path: String,
    slot: Mutex<Option<oneshot::Sender<Envelope>>>,
}

impl ReplySlot {
    fn new(correlation_id: CorrelationId) -> (Arc<Self>, oneshot::Receiver<Envelope>) {
        let (sender, receiver) = oneshot::channel();
        let slot = Arc::new(Self {
            path: format!("temp://resolve/{}", correlation_id),
            slot: Mutex::new(Some(sender)),
        });
        (slot, receiver)
    }

    /// Claims the slot without completing it.
    fn expire(&self) {
        self.slot.lock().take();
    }
}

impl Recipient for ReplySlot {
    fn path(&self) -> &str {
        &self.path
    }

    fn deliver(&self, envelope: Envelope) {
        match self.slot.lock().take() {
            Some(sender) => {
                let _ = sender.send(envelope);
            }
            None => trace!(path = %self.path, "Late reply dropped"),
        }
    }
}

impl ActorSelection {
    /// Resolves this selection to the reference of a concrete, running actor.
    ///
    /// With a wildcard path that matches several actors, whichever answers
    /// first wins; the others are ignored.
    pub async fn resolve_one(&self, timeout: Duration) -> Result<ActorRef, SelectionError> {
        let correlation_id = CorrelationId::new();
        let (slot, reply) = ReplySlot::new(correlation_id);
        let reply_to = ActorRef::from_arc(slot.clone());

        debug!(selection = %self, %correlation_id, ?timeout, "Resolving");
        self.tell(Identify::new(correlation_id), Some(&reply_to));

        let outcome = tokio::time::timeout(timeout, reply).await;
        slot.expire();

        match outcome {
            Ok(Ok(Envelope {
                message:
                    Message::ActorIdentity(ActorIdentity {
                        correlation_id: replied,
                        actor: Some(actor),
                    }),
                ..
            })) if replied == correlation_id => {
                debug!(selection = %self, actor = %actor, "Resolved");
                Ok(actor)
            }
            Ok(Ok(envelope)) => {
                debug!(selection = %self, reply = ?envelope.message, "Not found");
                Err(SelectionError::ActorNotFound(self.clone()))
            }
            Ok(Err(_)) => Err(SelectionError::ActorNotFound(self.clone())),
            Err(_) => {
                debug!(selection = %self, ?timeout, "Resolve timed out");
                Err(SelectionError::ActorNotFound(self.clone()))
            }
        }
    }
}
