#![allow(dead_code)]

use actor_selection::framework::mock::TestProbe;
use actor_selection::framework::{Actor, ActorContext, ActorRef, Envelope, Payload};
use actor_selection::lifecycle::{try_setup_tracing, ActorSystem, SystemConfig};
use async_trait::async_trait;
use std::time::Duration;

pub const TIMEOUT: Duration = Duration::from_secs(2);
pub const QUIET: Duration = Duration::from_millis(100);

/// Shape of a subtree to spawn.
#[derive(Clone, Debug)]
pub struct Spec {
    pub name: &'static str,
    pub children: Vec<Spec>,
}

pub fn leaf(name: &'static str) -> Spec {
    Spec {
        name,
        children: Vec::new(),
    }
}

pub fn node(name: &'static str, children: Vec<Spec>) -> Spec {
    Spec { name, children }
}

impl Spec {
    fn count(&self) -> usize {
        1 + self.children.iter().map(Spec::count).sum::<usize>()
    }
}

/// Sent to the probe once an actor (and its children) have been spawned.
#[derive(Clone, Debug)]
pub struct Ready(pub String);

/// Sent to the probe for every text payload an actor receives.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivered {
    pub at: String,
    pub text: &'static str,
}

/// Asks the receiving actor to send `text` through `path`, relative to itself.
#[derive(Clone, Debug)]
pub struct Relay {
    pub path: &'static str,
    pub text: &'static str,
}

/// Reports everything it receives to a probe.
pub struct Recorder {
    probe: ActorRef,
    children: Vec<Spec>,
}

#[async_trait]
impl Actor for Recorder {
    async fn pre_start(&mut self, ctx: &mut ActorContext) {
        for spec in self.children.drain(..) {
            let child = Recorder {
                probe: self.probe.clone(),
                children: spec.children,
            };
            ctx.spawn(spec.name, child).unwrap();
        }
        self.probe
            .tell(Payload::new(Ready(ctx.self_ref().path().to_string())), None);
    }

    async fn receive(&mut self, ctx: &mut ActorContext, envelope: Envelope) {
        let Some(payload) = envelope.payload() else {
            return;
        };
        if let Some(text) = payload.downcast_ref::<&'static str>() {
            let delivered = Delivered {
                at: ctx.self_ref().path().to_string(),
                text: *text,
            };
            self.probe.tell(Payload::new(delivered), Some(ctx.self_ref()));
        } else if let Some(relay) = payload.downcast_ref::<Relay>() {
            ctx.actor_selection(relay.path)
                .unwrap()
                .tell(Payload::new(relay.text), Some(ctx.self_ref()));
        }
    }
}

pub fn start(name: &str) -> (ActorSystem, TestProbe) {
    try_setup_tracing();
    let mut config = SystemConfig::named(name);
    config.resolve_timeout_ms = 500;
    (ActorSystem::new(config), TestProbe::new(name))
}

/// Spawns `specs` under the root and waits until every actor has started.
pub async fn build(system: &ActorSystem, probe: &mut TestProbe, specs: Vec<Spec>) -> Vec<ActorRef> {
    let total: usize = specs.iter().map(Spec::count).sum();
    let refs = specs
        .into_iter()
        .map(|spec| {
            let actor = Recorder {
                probe: probe.actor_ref(),
                children: spec.children,
            };
            system.spawn(spec.name, actor).unwrap()
        })
        .collect();
    for _ in 0..total {
        let _: Ready = probe.expect_payload(TIMEOUT).await;
    }
    refs
}

/// Collects `n` deliveries (sorted by path) and checks nothing else arrives.
pub async fn deliveries(probe: &mut TestProbe, n: usize) -> Vec<Delivered> {
    let mut received = Vec::with_capacity(n);
    for _ in 0..n {
        received.push(probe.expect_payload::<Delivered>(TIMEOUT).await);
    }
    probe.expect_no_message(QUIET).await;
    received.sort_by(|a, b| a.at.cmp(&b.at));
    received
}

pub fn delivered(at: &str, text: &'static str) -> Delivered {
    Delivered {
        at: at.to_string(),
        text,
    }
}
