//! # Test Probe
//!
//! [`TestProbe`] is an opaque, recording reference for tests. It can play three
//! roles at once:
//!
//! | Role | How |
//! |------|-----|
//! | **Sender** | pass `Some(&probe.actor_ref())` so replies land in the probe |
//! | **Recipient** | place it where a message is expected and assert on what arrives |
//! | **Hand-off target** | it is opaque, so a selection hop reaching it forwards the remaining path as a [`SelectionMessage`](crate::selection::SelectionMessage) |
//!
//! ```rust
//! use actor_selection::framework::{mock::TestProbe, Payload};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut probe = TestProbe::new("probe");
//!     probe.actor_ref().tell(Payload::new(42u32), None);
//!
//!     let value: u32 = probe.expect_payload(Duration::from_secs(1)).await;
//!     assert_eq!(value, 42);
//!     probe.expect_no_message(Duration::from_millis(50)).await;
//! }
//! ```

use crate::framework::actor_ref::{ActorRef, Recipient};
use crate::framework::message::{Envelope, Message};
use std::any::Any;
use std::time::Duration;
use tokio::sync::mpsc;

struct ProbeRecipient {
    path: String,
    sender: mpsc::UnboundedSender<Envelope>,
}

impl Recipient for ProbeRecipient {
    fn path(&self) -> &str {
        &self.path
    }

    fn deliver(&self, envelope: Envelope) {
        let _ = self.sender.send(envelope);
    }
}

/// Recording, opaque reference with assertion helpers.
pub struct TestProbe {
    actor_ref: ActorRef,
    receiver: mpsc::UnboundedReceiver<Envelope>,
}

impl TestProbe {
    pub fn new(name: &str) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor_ref = ActorRef::new(ProbeRecipient {
            path: format!("probe://{}", name),
            sender,
        });
        Self { actor_ref, receiver }
    }

    pub fn actor_ref(&self) -> ActorRef {
        self.actor_ref.clone()
    }

    /// Waits for the next envelope. Panics if none arrives within `timeout`.
    pub async fn expect_message(&mut self, timeout: Duration) -> Envelope {
        match tokio::time::timeout(timeout, self.receiver.recv()).await {
            Ok(Some(envelope)) => envelope,
            Ok(None) => panic!("{}: probe channel closed", self.actor_ref),
            Err(_) => panic!("{}: no message within {:?}", self.actor_ref, timeout),
        }
    }

    /// Waits for the next envelope and downcasts its user payload.
    pub async fn expect_payload<T: Any + Clone>(&mut self, timeout: Duration) -> T {
        let envelope = self.expect_message(timeout).await;
        match &envelope.message {
            Message::User(payload) => match payload.downcast_ref::<T>() {
                Some(value) => value.clone(),
                None => panic!(
                    "{}: expected {}, got {}",
                    self.actor_ref,
                    std::any::type_name::<T>(),
                    payload.type_name()
                ),
            },
            other => panic!("{}: expected a user payload, got {:?}", self.actor_ref, other),
        }
    }

    /// Panics if anything arrives within `duration`.
    pub async fn expect_no_message(&mut self, duration: Duration) {
        if let Ok(Some(envelope)) = tokio::time::timeout(duration, self.receiver.recv()).await {
            panic!("{}: unexpected message {:?}", self.actor_ref, envelope.message);
        }
    }

    /// Everything received so far, without waiting.
    pub fn drain(&mut self) -> Vec<Envelope> {
        let mut received = Vec::new();
        while let Ok(envelope) = self.receiver.try_recv() {
            received.push(envelope);
        }
        received
    }
}
