//! # Selection Envelope
//!
//! A message that is still travelling along a selection path. Each hop builds a
//! fresh [`SelectionMessage`] with a shorter `elements` list; nothing is ever
//! shortened in place, and every branch of a wildcard fan-out owns its own copy.

use crate::framework::message::{Identify, Message};
use crate::selection::element::PathElement;

#[derive(Clone, Debug)]
pub struct SelectionMessage {
    message: Box<Message>,
    elements: Vec<PathElement>,
    wildcard_fan_out: bool,
}

impl SelectionMessage {
    pub fn new(message: impl Into<Message>, elements: Vec<PathElement>) -> Self {
        Self {
            message: Box::new(message.into()),
            elements,
            wildcard_fan_out: false,
        }
    }

    pub(crate) fn with_fan_out(mut self, wildcard_fan_out: bool) -> Self {
        self.wildcard_fan_out = wildcard_fan_out;
        self
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The path elements not consumed yet, first hop first.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Whether a wildcard hop has already matched more than one child on the
    /// way here.
    pub fn wildcard_fan_out(&self) -> bool {
        self.wildcard_fan_out
    }

    /// The identify probe being routed, if any.
    pub fn identify_request(&self) -> Option<&Identify> {
        self.message.identify_request()
    }

    pub(crate) fn into_parts(self) -> (Message, Vec<PathElement>, bool) {
        (*self.message, self.elements, self.wildcard_fan_out)
    }
}
