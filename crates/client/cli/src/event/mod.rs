//! Event loop orchestrating runtime events, terminal input, and rendering.

use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use schulte_core::PointerSample;
use schulte_runtime::{Event as RuntimeEvent, RuntimeHandle, SessionEvent, Topic};
use tokio::{
    sync::broadcast::{self, error::RecvError},
    time::{self, Duration},
};

use crate::presentation::{terminal::Tui, ui};
use crate::state::{AppState, Overlay};

/// Input poll cadence. Also drives the elapsed clock and highlight decay
/// in the status bar, so it stays well under a second.
const FRAME_INTERVAL_MS: u64 = 100;

pub struct EventLoop {
    handle: RuntimeHandle,
    session_rx: broadcast::Receiver<RuntimeEvent>,
    timer_rx: broadcast::Receiver<RuntimeEvent>,
    state: AppState,
}

impl EventLoop {
    pub fn new(handle: RuntimeHandle, state: AppState) -> Self {
        let session_rx = handle.subscribe(Topic::Session);
        let timer_rx = handle.subscribe(Topic::Timer);
        Self {
            handle,
            session_rx,
            timer_rx,
            state,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.refresh(terminal).await?;

        loop {
            tokio::select! {
                result = self.session_rx.recv() => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                result = self.timer_rx.recv() => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_runtime_event(
        &mut self,
        result: std::result::Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                if let RuntimeEvent::Session(SessionEvent::Finished { .. }) = &event {
                    self.state.overlay = Overlay::Results;
                }
                self.refresh(terminal).await?;
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("event bus closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "dropped stale events");
                Ok(false)
            }
        }
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        // Drain everything queued since the last frame before redrawing.
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key).await? {
                        return Ok(true);
                    }
                }
                TermEvent::Mouse(mouse) => self.handle_mouse(mouse).await?,
                TermEvent::Resize(_, _) => {}
                _ => {}
            }
        }
        self.refresh(terminal).await?;
        Ok(false)
    }

    async fn handle_key_press(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('s') => {
                self.state.overlay = Overlay::None;
                self.handle.start().await?;
            }
            KeyCode::Char('x') => {
                self.handle.stop().await?;
            }
            KeyCode::Char('r') => {
                self.state.overlay = match self.state.overlay {
                    Overlay::Results => Overlay::None,
                    _ => Overlay::Results,
                };
            }
            KeyCode::Char('m') => {
                self.state.overlay = match self.state.overlay {
                    Overlay::Mousemap => Overlay::None,
                    _ => Overlay::Mousemap,
                };
            }
            KeyCode::Esc => self.state.overlay = Overlay::None,
            _ => {}
        }
        Ok(false)
    }

    async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.state.overlay == Overlay::None => {
                if let Some(index) = self.state.cell_at(mouse.column, mouse.row) {
                    let pointer = self
                        .state
                        .normalize(mouse.column, mouse.row)
                        .map(|(x, y)| PointerSample { x, y });
                    self.handle.select_cell(index, pointer).await?;
                }
            }
            MouseEventKind::Moved => {
                self.state.hover_index = self.state.cell_at(mouse.column, mouse.row);
                if let Some((x, y)) = self.state.normalize(mouse.column, mouse.row) {
                    self.handle.pointer_move(PointerSample { x, y }).await?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn refresh(&mut self, terminal: &mut Tui) -> Result<()> {
        self.state.snapshot = self.handle.query_snapshot().await?;
        terminal.draw(|frame| ui::draw(frame, &mut self.state))?;
        Ok(())
    }
}
