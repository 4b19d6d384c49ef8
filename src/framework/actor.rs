//! # Actors and their Mailbox Loop
//!
//! An [`Actor`] only sees application traffic. The mailbox loop in [`run`]
//! answers the well-known messages itself:
//!
//! - [`Identify`](crate::framework::Identify) is answered with a positive
//!   [`ActorIdentity`] carrying the probe's correlation id.
//! - [`SelectionMessage`](crate::selection::SelectionMessage) continues the
//!   routing protocol from this actor. This is what makes an actor a valid
//!   hand-off target for selections coming from outside its tree.
//! - [`Message::PoisonPill`] stops the actor and, with it, its children.

use crate::framework::actor_ref::{ActorRef, Introspect};
use crate::framework::cell::ActorCell;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ActorIdentity, Envelope, Message};
use crate::selection::{deliver_selection, ActorSelection, SelectionError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

/// Behaviour of a local actor.
///
/// # Lifecycle Hooks
/// `pre_start` runs before the first message, `post_stop` after the last one
/// (children have already been asked to stop by then). Both default to doing
/// nothing.
#[async_trait]
pub trait Actor: Send + 'static {
    async fn pre_start(&mut self, _ctx: &mut ActorContext) {}

    /// Handles one application message (user payloads and identify replies).
    async fn receive(&mut self, ctx: &mut ActorContext, envelope: Envelope);

    async fn post_stop(&mut self, _ctx: &mut ActorContext) {}
}

/// What an actor can see of itself and its surroundings while it runs.
pub struct ActorContext {
    cell: Arc<ActorCell>,
    myself: ActorRef,
}

impl ActorContext {
    pub(crate) fn new(cell: Arc<ActorCell>) -> Self {
        let myself = ActorRef::from_arc(cell.clone());
        Self { cell, myself }
    }

    pub fn self_ref(&self) -> &ActorRef {
        &self.myself
    }

    pub fn name(&self) -> &str {
        self.cell.name()
    }

    pub fn parent(&self) -> ActorRef {
        self.cell.parent()
    }

    pub fn children(&self) -> Vec<(String, ActorRef)> {
        self.cell.children()
    }

    pub fn spawn<A: Actor>(&self, name: &str, actor: A) -> Result<ActorRef, FrameworkError> {
        self.cell.spawn(name, actor)
    }

    /// Stops this actor once the current message has been handled.
    pub fn stop(&self) {
        self.cell.stop();
    }

    /// Selection relative to this actor, or to the root for paths starting
    /// with `/`.
    pub fn actor_selection(&self, path: &str) -> Result<ActorSelection, SelectionError> {
        let anchor = if path.starts_with('/') {
            self.cell.root_ref()
        } else {
            self.myself.clone()
        };
        ActorSelection::parse(anchor, path)
    }
}

/// The mailbox loop of one actor. Returns once the actor has stopped.
pub(crate) async fn run<A: Actor>(
    mut actor: A,
    cell: Arc<ActorCell>,
    mut mailbox: mpsc::UnboundedReceiver<Envelope>,
) {
    let mut ctx = ActorContext::new(cell);
    let path = ctx.myself.path().to_string();
    info!(%path, "Actor started");
    actor.pre_start(&mut ctx).await;

    while let Some(Envelope { message, sender }) = mailbox.recv().await {
        match message {
            Message::Identify(identify) => {
                trace!(%path, correlation_id = %identify.correlation_id, "Identify");
                if let Some(sender) = sender {
                    let identity = ActorIdentity::found(identify.correlation_id, ctx.myself.clone());
                    sender.tell(identity, Some(&ctx.myself));
                }
            }
            Message::Selection(selection) => {
                deliver_selection(&ctx.myself, sender.as_ref(), selection);
            }
            Message::PoisonPill => {
                debug!(%path, "PoisonPill");
                break;
            }
            message => actor.receive(&mut ctx, Envelope { message, sender }).await,
        }
    }

    // Anything still queued or arriving from now on goes to dead letters.
    mailbox.close();
    while let Ok(envelope) = mailbox.try_recv() {
        ctx.cell.dead_letters().deliver(envelope);
    }
    ctx.cell.stop_children();
    actor.post_stop(&mut ctx).await;
    ctx.cell.detach();
    info!(%path, "Actor stopped");
}
