//! Cloneable façade for issuing commands to the session worker.
//!
//! Hides the channel plumbing and offers async helpers; any number of
//! handles may exist, but the worker serializes all mutation.

use tokio::sync::{broadcast, mpsc, oneshot};

use schulte_core::{PointerSample, SelectionOutcome, SessionConfig};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::snapshot::SessionSnapshot;
use crate::worker::Command;

/// Client-facing handle to interact with the running session.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Replace the session configuration (clamped by the core) and return
    /// the resulting Idle snapshot.
    pub async fn configure(&self, config: SessionConfig) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Configure {
            config,
            reply: reply_tx,
        })
        .await?;
        Ok(reply_rx.await?)
    }

    /// Start (or restart) the session on a fresh table.
    pub async fn start(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Start { reply: reply_tx }).await?;
        Ok(reply_rx.await?)
    }

    /// Force the session to Finished.
    pub async fn stop(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Stop { reply: reply_tx }).await?;
        Ok(reply_rx.await?)
    }

    /// Deliver a "cell selected" event.
    ///
    /// `pointer` is the click position normalized to `[0, 1]` against the
    /// playing area, used only for mousemap tracking.
    pub async fn select_cell(
        &self,
        index: usize,
        pointer: Option<PointerSample>,
    ) -> Result<SelectionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::SelectCell {
            index,
            pointer,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await?
    }

    /// Fire-and-forget pointer-move sample (normalized coordinates).
    pub async fn pointer_move(&self, sample: PointerSample) -> Result<()> {
        self.send(Command::PointerMove { sample }).await
    }

    /// Read-only snapshot of the current session state.
    pub async fn query_snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::QuerySnapshot { reply: reply_tx }).await?;
        Ok(reply_rx.await?)
    }

    /// Subscribe to events from a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    async fn send(&self, cmd: Command) -> Result<()> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
