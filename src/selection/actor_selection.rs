//! # ActorSelection
//!
//! An immutable anchor + path pair. Sending through a selection walks the tree
//! from the anchor (see [`deliver_selection`]); nothing is looked up when the
//! selection is built.

use crate::framework::actor_ref::ActorRef;
use crate::framework::message::Message;
use crate::selection::delivery::deliver_selection;
use crate::selection::element::PathElement;
use crate::selection::error::SelectionError;
use crate::selection::message::SelectionMessage;
use crate::selection::parser;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A path of hops, interpreted relative to an anchor reference.
///
/// Two selections are equal when they share the *same* anchor (identity, not
/// path) and element-wise equal paths, in the same order. `Hash` agrees with
/// that, so selections can be used as map keys.
///
/// # Example
///
/// ```rust
/// use actor_selection::framework::mock::TestProbe;
/// use actor_selection::selection::{ActorSelection, PathElement};
///
/// let probe = TestProbe::new("anchor");
/// let selection = ActorSelection::parse(probe.actor_ref(), "workers/w*").unwrap();
///
/// assert_eq!(selection.path_string(), "/workers/w*");
/// assert_eq!(selection.to_string(), "probe://anchor/workers/w*");
/// assert_eq!(selection.elements()[0], PathElement::child_name("workers"));
/// ```
#[derive(Clone)]
pub struct ActorSelection {
    anchor: ActorRef,
    elements: Arc<[PathElement]>,
}

impl ActorSelection {
    pub fn new(anchor: ActorRef, elements: impl IntoIterator<Item = PathElement>) -> Self {
        Self {
            anchor,
            elements: elements.into_iter().collect(),
        }
    }

    /// Parses a slash separated path relative to `anchor`.
    pub fn parse(anchor: ActorRef, path: &str) -> Result<Self, SelectionError> {
        Ok(Self::new(anchor, parser::parse(path)?))
    }

    /// Builds a selection from already split path segments.
    pub fn from_segments<I, S>(anchor: ActorRef, segments: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(anchor, parser::parse_segments(segments)?))
    }

    pub fn anchor(&self) -> &ActorRef {
        &self.anchor
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// The path alone, e.g. `/a/b/..`.
    pub fn path_string(&self) -> String {
        let mut path = String::new();
        for element in self.elements.iter() {
            path.push('/');
            path.push_str(&element.to_string());
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// Fire-and-forget send through this selection. Never blocks and never
    /// reports absence: a path leading nowhere simply drops the message.
    pub fn tell(&self, message: impl Into<Message>, sender: Option<&ActorRef>) {
        let selection = SelectionMessage::new(message, self.elements.to_vec());
        deliver_selection(&self.anchor, sender, selection);
    }
}

impl PartialEq for ActorSelection {
    fn eq(&self, other: &Self) -> bool {
        self.anchor == other.anchor && self.elements == other.elements
    }
}

impl Eq for ActorSelection {}

impl Hash for ActorSelection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.anchor.hash(state);
        self.elements.hash(state);
    }
}

impl fmt::Display for ActorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.anchor)?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ActorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorSelection[anchor={}, path={}]", self.anchor, self.path_string())
    }
}
