//! Runtime orchestrator: spawns the session worker and hands out handles.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use schulte_core::{GameSession, SessionConfig};

use crate::clock::{Clock, SystemClock};
use crate::events::EventBus;
use crate::handle::RuntimeHandle;
use crate::worker::{Command, SessionWorker};

const COMMAND_BUFFER: usize = 64;

/// Owns the worker task for one session.
pub struct Runtime {
    handle: RuntimeHandle,
    command_tx: mpsc::Sender<Command>,
    worker: JoinHandle<()>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::default()
    }

    /// Cloneable handle for frontends.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stops the worker and waits for it to drain.
    pub async fn shutdown(self) {
        if self.command_tx.send(Command::Shutdown).await.is_err() {
            debug!("worker already gone at shutdown");
        }
        if let Err(err) = self.worker.await {
            debug!("worker join failed: {err}");
        }
    }
}

/// Builder wiring configuration, seed, and clock into a spawned worker.
pub struct RuntimeBuilder {
    config: SessionConfig,
    seed: Option<u64>,
    clock: Arc<dyn Clock>,
    event_capacity: usize,
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            seed: None,
            clock: Arc::new(SystemClock),
            event_capacity: 100,
        }
    }
}

impl RuntimeBuilder {
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Fixed session seed; defaults to a random one.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Swap the wall clock (tests use `ManualClock`).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Spawns the session worker. Must run inside a tokio runtime.
    pub fn build(self) -> Runtime {
        let seed = self.seed.unwrap_or_else(rand::random);
        let session = GameSession::new(self.config, seed);
        let event_bus = EventBus::with_capacity(self.event_capacity);

        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let worker = SessionWorker::new(
            session,
            self.clock,
            command_rx,
            command_tx.clone(),
            event_bus.clone(),
        );
        let handle = RuntimeHandle::new(command_tx.clone(), event_bus);

        debug!(seed, "spawning session worker");
        let worker = tokio::spawn(worker.run());

        Runtime {
            handle,
            command_tx,
            worker,
        }
    }
}
