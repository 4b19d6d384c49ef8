//! # Actor Cells
//!
//! An [`ActorCell`] is one node of the local actor tree: a name, a rendered path,
//! a weak link to its parent, the references of its children and the sending
//! half of its mailbox.
//!
//! Cells are the locally introspectable recipients: they implement both
//! [`Recipient`] and [`Introspect`], so the selection engine can walk through
//! them synchronously instead of routing through their mailboxes.

use crate::framework::actor::{run, Actor};
use crate::framework::actor_ref::{ActorRef, Introspect, Recipient};
use crate::framework::error::FrameworkError;
use crate::framework::message::{Envelope, Message};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub struct ActorCell {
    name: String,
    path: String,
    parent: Option<Weak<ActorCell>>,
    // Name-ordered so that wildcard fan-out visits children deterministically.
    children: RwLock<BTreeMap<String, ActorRef>>,
    mailbox: mpsc::UnboundedSender<Envelope>,
    myself: Weak<ActorCell>,
    dead_letters: ActorRef,
}

impl ActorCell {
    /// Creates the root of a tree. The caller is responsible for running the
    /// returned mailbox.
    pub(crate) fn root(
        system_name: &str,
        dead_letters: ActorRef,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<Envelope>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cell = Arc::new_cyclic(|myself| Self {
            name: String::new(),
            path: format!("local://{}", system_name),
            parent: None,
            children: RwLock::new(BTreeMap::new()),
            mailbox: sender,
            myself: myself.clone(),
            dead_letters,
        });
        (cell, receiver)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn self_ref(&self) -> ActorRef {
        match self.myself.upgrade() {
            Some(cell) => ActorRef::from_arc(cell),
            None => self.dead_letters.clone(),
        }
    }

    pub fn dead_letters(&self) -> &ActorRef {
        &self.dead_letters
    }

    /// The root of the tree this cell belongs to.
    pub fn root_ref(&self) -> ActorRef {
        let mut current = match self.myself.upgrade() {
            Some(cell) => cell,
            None => return self.dead_letters.clone(),
        };
        while let Some(parent) = current.parent.as_ref().and_then(Weak::upgrade) {
            current = parent;
        }
        ActorRef::from_arc(current)
    }

    /// Creates a child actor named `name` and starts its mailbox loop on the
    /// current tokio runtime.
    pub fn spawn<A: Actor>(self: &Arc<Self>, name: &str, actor: A) -> Result<ActorRef, FrameworkError> {
        validate_name(name)?;

        let (sender, receiver) = mpsc::unbounded_channel();
        let (cell, actor_ref) = {
            let mut children = self.children.write();
            if children.contains_key(name) {
                warn!(parent = %self.path, name, "Duplicate actor name");
                return Err(FrameworkError::DuplicateActorName(format!("{}/{}", self.path, name)));
            }
            let cell = Arc::new_cyclic(|myself| Self {
                name: name.to_string(),
                path: format!("{}/{}", self.path, name),
                parent: Some(Arc::downgrade(self)),
                children: RwLock::new(BTreeMap::new()),
                mailbox: sender,
                myself: myself.clone(),
                dead_letters: self.dead_letters.clone(),
            });
            let actor_ref = ActorRef::from_arc(cell.clone());
            children.insert(name.to_string(), actor_ref.clone());
            (cell, actor_ref)
        };

        tokio::spawn(run(actor, cell, receiver));
        Ok(actor_ref)
    }

    /// Asks this actor to stop after the messages already in its mailbox.
    pub fn stop(&self) {
        self.deliver(Envelope::new(Message::PoisonPill, None));
    }

    pub(crate) fn stop_children(&self) {
        let children: Vec<ActorRef> = self.children.read().values().cloned().collect();
        for child in children {
            child.tell(Message::PoisonPill, None);
        }
    }

    /// Removes this cell from its parent's children, unless the name has
    /// already been taken over by another actor.
    pub(crate) fn detach(&self) {
        let Some(parent) = self.parent.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        let myself = self.self_ref();
        let mut children = parent.children.write();
        if children.get(&self.name) == Some(&myself) {
            children.remove(&self.name);
        }
    }
}

impl Recipient for ActorCell {
    fn path(&self) -> &str {
        &self.path
    }

    fn deliver(&self, envelope: Envelope) {
        if let Err(closed) = self.mailbox.send(envelope) {
            debug!(path = %self.path, "Mailbox closed");
            self.dead_letters.deliver(closed.0);
        }
    }

    fn introspect(&self) -> Option<&dyn Introspect> {
        Some(self)
    }
}

impl Introspect for ActorCell {
    fn parent(&self) -> ActorRef {
        match &self.parent {
            None => self.self_ref(),
            Some(parent) => match parent.upgrade() {
                Some(parent) => ActorRef::from_arc(parent),
                None => self.dead_letters.clone(),
            },
        }
    }

    fn child(&self, name: &str) -> Option<ActorRef> {
        self.children.read().get(name).cloned()
    }

    fn children(&self) -> Vec<(String, ActorRef)> {
        self.children
            .read()
            .iter()
            .map(|(name, child)| (name.clone(), child.clone()))
            .collect()
    }
}

fn validate_name(name: &str) -> Result<(), FrameworkError> {
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        return Err(FrameworkError::InvalidActorName(name.to_string()));
    }
    Ok(())
}
