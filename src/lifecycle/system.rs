use crate::framework::actor::run;
use crate::framework::{Actor, ActorCell, ActorContext, ActorRef, DeadLetters, Envelope, FrameworkError, Message};
use crate::lifecycle::config::SystemConfig;
use crate::selection::{ActorSelection, SelectionError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Owner of one local actor tree.
///
/// `ActorSystem` is responsible for:
/// - **Lifecycle Management**: starting the root guardian and stopping the whole tree
/// - **Top-level actors**: spawning actors directly under the root
/// - **Addressing**: building root-anchored selections and resolving them with
///   the configured timeout
///
/// Must be created inside a tokio runtime.
///
/// # Example
///
/// ```rust
/// use actor_selection::framework::{Actor, ActorContext, Envelope};
/// use actor_selection::lifecycle::{ActorSystem, SystemConfig};
/// use async_trait::async_trait;
///
/// struct Worker;
///
/// #[async_trait]
/// impl Actor for Worker {
///     async fn receive(&mut self, _ctx: &mut ActorContext, _envelope: Envelope) {}
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let system = ActorSystem::new(SystemConfig::named("demo"));
///     let worker = system.spawn("worker", Worker).unwrap();
///
///     let found = system.resolve_one("/worker").await.unwrap();
///     assert_eq!(found, worker);
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct ActorSystem {
    config: SystemConfig,
    root: Arc<ActorCell>,
    dead_letters: ActorRef,
    guardian: JoinHandle<()>,
}

/// Behaviour of the root: it owns the top-level actors and nothing else.
struct Guardian;

#[async_trait]
impl Actor for Guardian {
    async fn receive(&mut self, ctx: &mut ActorContext, envelope: Envelope) {
        debug!(path = %ctx.self_ref(), message = ?envelope.message, "Guardian ignores message");
    }
}

impl ActorSystem {
    pub fn new(config: SystemConfig) -> Self {
        let dead_letters = ActorRef::new(DeadLetters::new(&config.name));
        let (root, mailbox) = ActorCell::root(&config.name, dead_letters.clone());
        let guardian = tokio::spawn(run(Guardian, root.clone(), mailbox));
        info!(system = %config.name, "Actor system started");

        Self {
            config,
            root,
            dead_letters,
            guardian,
        }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn root(&self) -> ActorRef {
        self.root.self_ref()
    }

    pub fn dead_letters(&self) -> ActorRef {
        self.dead_letters.clone()
    }

    /// Spawns a top-level actor under the root.
    pub fn spawn<A: Actor>(&self, name: &str, actor: A) -> Result<ActorRef, FrameworkError> {
        self.root.spawn(name, actor)
    }

    /// Asks `actor` to stop after the messages already in its mailbox.
    pub fn stop(&self, actor: &ActorRef) {
        actor.tell(Message::PoisonPill, None);
    }

    /// Selection anchored at the root. A leading `/` is optional.
    pub fn actor_selection(&self, path: &str) -> Result<ActorSelection, SelectionError> {
        ActorSelection::parse(self.root(), path)
    }

    /// Resolves a root-anchored path with the configured timeout.
    pub async fn resolve_one(&self, path: &str) -> Result<ActorRef, SelectionError> {
        self.actor_selection(path)?
            .resolve_one(self.config.resolve_timeout())
            .await
    }

    /// Stops the root (and with it every actor) and waits for the root to
    /// finish.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!(system = %self.config.name, "Shutting down system...");
        self.root.stop();

        if let Err(e) = self.guardian.await {
            error!("Guardian task failed: {:?}", e);
            return Err(FrameworkError::ShutdownFailed(e.to_string()));
        }

        info!(system = %self.config.name, "System shutdown complete.");
        Ok(())
    }
}
