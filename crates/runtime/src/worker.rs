//! Session worker that owns the authoritative [`GameSession`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle),
//! drives the core state machine, arms the countdown and highlight
//! timers, and publishes events to the bus. Single-writer by
//! construction: all mutation happens inside this task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use schulte_core::{
    GameSession, PcgRng, PointerSample, SelectionOutcome, SessionConfig, SessionEffect, SessionEnv,
    SessionStatus,
};

use crate::clock::Clock;
use crate::error::Result;
use crate::events::{Event, EventBus, SessionEvent, TimerEvent};
use crate::snapshot::SessionSnapshot;
use crate::timers::TimerSlot;

/// How long the click highlight stays on screen.
pub const HIGHLIGHT_TIMEOUT: Duration = Duration::from_millis(500);

// Stateless oracle; every draw is seeded explicitly by the core.
static RNG: PcgRng = PcgRng;

/// Commands the worker accepts.
pub enum Command {
    /// Replace the configuration; drops the session back to Idle.
    Configure {
        config: SessionConfig,
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Rebuild the table and start (or restart) the session.
    Start {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Force the session to Finished.
    Stop {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Player selected the cell at `index`.
    SelectCell {
        index: usize,
        pointer: Option<PointerSample>,
        reply: oneshot::Sender<Result<SelectionOutcome>>,
    },
    /// Pointer moved (fire-and-forget tracking sample).
    PointerMove { sample: PointerSample },
    /// Countdown timer fired.
    TimeExpired,
    /// Highlight auto-clear timer fired.
    HighlightTimeout,
    /// Read-only snapshot of the current session.
    QuerySnapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// End the worker loop.
    Shutdown,
}

/// Background task that processes session commands.
pub struct SessionWorker {
    session: GameSession,
    clock: Arc<dyn Clock>,
    command_rx: mpsc::Receiver<Command>,
    /// Timer tasks deliver their expiry through the same command channel,
    /// preserving the single-writer discipline.
    self_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    countdown: TimerSlot,
    highlight: TimerSlot,
}

impl SessionWorker {
    pub fn new(
        session: GameSession,
        clock: Arc<dyn Clock>,
        command_rx: mpsc::Receiver<Command>,
        self_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            session,
            clock,
            command_rx,
            self_tx,
            event_bus,
            countdown: TimerSlot::default(),
            highlight: TimerSlot::default(),
        }
    }

    /// Main worker loop. Ends on `Command::Shutdown` or when every sender
    /// is gone.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if self.handle_command(cmd) {
                break;
            }
        }
        self.countdown.cancel();
        self.highlight.cancel();
        debug!("session worker stopped");
    }

    /// Returns true when the loop should end.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Configure { config, reply } => {
                self.countdown.cancel();
                self.highlight.cancel();
                self.session.configure(config);
                if reply.send(self.snapshot()).is_err() {
                    debug!("configure reply channel closed (caller dropped)");
                }
            }
            Command::Start { reply } => {
                self.handle_start();
                if reply.send(self.snapshot()).is_err() {
                    debug!("start reply channel closed (caller dropped)");
                }
            }
            Command::Stop { reply } => {
                self.handle_stop();
                if reply.send(self.snapshot()).is_err() {
                    debug!("stop reply channel closed (caller dropped)");
                }
            }
            Command::SelectCell {
                index,
                pointer,
                reply,
            } => {
                let result = self.handle_select(index, pointer);
                if reply.send(result).is_err() {
                    debug!("select reply channel closed (caller dropped)");
                }
            }
            Command::PointerMove { sample } => {
                self.session.record_pointer_move(sample);
            }
            Command::TimeExpired => self.handle_time_expired(),
            Command::HighlightTimeout => self.session.notify_highlight_timeout(),
            Command::QuerySnapshot { reply } => {
                if reply.send(self.snapshot()).is_err() {
                    debug!("snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => return true,
        }
        false
    }

    fn handle_start(&mut self) {
        let env = self.env();
        self.session.start(&env);
        self.highlight.cancel();

        let config = self.session.config();
        if config.timed {
            let minutes = config.timer_minutes;
            self.countdown.schedule(
                Duration::from_secs(u64::from(minutes) * 60),
                self.self_tx.clone(),
                || Command::TimeExpired,
            );
            self.event_bus
                .publish(Event::Timer(TimerEvent::CountdownStarted { minutes }));
        } else {
            self.countdown.cancel();
        }

        self.event_bus.publish(Event::Session(SessionEvent::Started));
    }

    fn handle_stop(&mut self) {
        let was_running = self.session.status() == SessionStatus::Running;
        let env = self.env();
        self.session.stop(&env);
        self.countdown.cancel();
        self.highlight.cancel();
        if was_running {
            self.publish_finished();
        }
    }

    fn handle_select(&mut self, index: usize, pointer: Option<PointerSample>) -> Result<SelectionOutcome> {
        let env = self.env();
        let outcome = self.session.select_cell(&env, index, pointer)?;

        if outcome != SelectionOutcome::Ignored {
            // Each selection supersedes the previous highlight timer.
            self.highlight.schedule(HIGHLIGHT_TIMEOUT, self.self_tx.clone(), || {
                Command::HighlightTimeout
            });
        }

        self.event_bus
            .publish(Event::Session(SessionEvent::Selection {
                outcome,
                correct: self.session.stats().correct(),
                wrong: self.session.stats().wrong(),
            }));

        if let SelectionOutcome::Correct { effect, .. } = outcome {
            match effect {
                SessionEffect::TableRebuilt => {
                    self.event_bus
                        .publish(Event::Session(SessionEvent::TableRebuilt));
                }
                SessionEffect::Finished => {
                    self.countdown.cancel();
                    self.highlight.cancel();
                    self.publish_finished();
                }
                SessionEffect::None => {}
            }
        }

        Ok(outcome)
    }

    fn handle_time_expired(&mut self) {
        if self.session.status() != SessionStatus::Running {
            // Stale expiry after a finished session; the cancel contract
            // makes this rare but not impossible.
            return;
        }
        let env = self.env();
        self.session.notify_time_expired(&env);
        self.highlight.cancel();
        self.event_bus
            .publish(Event::Timer(TimerEvent::CountdownExpired));
        self.publish_finished();
    }

    fn publish_finished(&self) {
        let stats = self.session.stats();
        self.event_bus
            .publish(Event::Session(SessionEvent::Finished {
                status: self.session.status(),
                correct: stats.correct(),
                wrong: stats.wrong(),
                elapsed_hms: stats.elapsed_hms(self.clock.now()),
            }));
    }

    fn env(&self) -> SessionEnv<'static> {
        SessionEnv::new(self.clock.now(), &RNG)
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, self.clock.now())
    }
}
