//! # Delivery Engine
//!
//! Walks the actor tree along a [`SelectionMessage`]'s elements, one element
//! per local hop:
//!
//! - no elements left: deliver the message to the current reference;
//! - current reference is opaque: forward everything that is left as a new
//!   [`SelectionMessage`] and let the reference continue;
//! - `..`: move to the parent;
//! - a child name: move to that child, or stop if there is none;
//! - a pattern: fan out to every matching child, each branch with its own copy
//!   of the remaining elements.
//!
//! Single-match hops loop in place; only pattern fan-out recurses. Nothing is
//! retried and nothing fails: a dead end only answers identify probes (with a
//! negative [`ActorIdentity`]) and drops everything else.

use crate::framework::actor_ref::ActorRef;
use crate::framework::message::{ActorIdentity, Message};
use crate::selection::element::PathElement;
use crate::selection::message::SelectionMessage;
use tracing::{debug, trace};

/// Routes `selection` starting at `anchor`, attributing every delivery to
/// `sender`.
pub fn deliver_selection(anchor: &ActorRef, sender: Option<&ActorRef>, selection: SelectionMessage) {
    let (message, elements, wildcard_fan_out) = selection.into_parts();
    walk(anchor.clone(), elements, message, sender, wildcard_fan_out);
}

fn walk(
    mut current: ActorRef,
    elements: Vec<PathElement>,
    message: Message,
    sender: Option<&ActorRef>,
    wildcard_fan_out: bool,
) {
    let mut remaining = elements.into_iter();
    loop {
        let Some(element) = remaining.next() else {
            trace!(to = %current, "Deliver");
            current.tell(message, sender);
            return;
        };

        let Some(tree) = current.introspect() else {
            let rest: Vec<PathElement> = std::iter::once(element).chain(remaining).collect();
            debug!(to = %current, remaining = rest.len(), "Hand-off to opaque reference");
            current.tell(
                SelectionMessage::new(message, rest).with_fan_out(wildcard_fan_out),
                sender,
            );
            return;
        };

        let next = match element {
            PathElement::Parent => tree.parent(),
            PathElement::ChildName(name) => match tree.child(&name) {
                Some(child) => child,
                None => {
                    debug!(at = %current, child = %name, "No such child");
                    dead_end(&message, sender, wildcard_fan_out);
                    return;
                }
            },
            PathElement::ChildPattern(pattern) => {
                let matching: Vec<ActorRef> = tree
                    .children()
                    .into_iter()
                    .filter(|(name, _)| pattern.matches(name))
                    .map(|(_, child)| child)
                    .collect();
                trace!(at = %current, pattern = pattern.as_str(), matched = matching.len(), "Pattern");

                if matching.is_empty() {
                    dead_end(&message, sender, wildcard_fan_out);
                } else if remaining.as_slice().is_empty() {
                    for child in matching {
                        child.tell(message.clone(), sender);
                    }
                } else {
                    let fan_out = wildcard_fan_out || matching.len() > 1;
                    let rest = remaining.as_slice();
                    for child in matching {
                        walk(child, rest.to_vec(), message.clone(), sender, fan_out);
                    }
                }
                return;
            }
        };
        current = next;
    }
}

/// Answers an identify probe that ran into nothing. After a fan-out the other
/// branches may still find an actor, so only the unbranched path answers.
fn dead_end(message: &Message, sender: Option<&ActorRef>, wildcard_fan_out: bool) {
    if wildcard_fan_out {
        return;
    }
    if let (Some(identify), Some(sender)) = (message.identify_request(), sender) {
        sender.tell(ActorIdentity::not_found(identify.correlation_id), None);
    }
}
