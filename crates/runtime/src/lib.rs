//! Async orchestration for the Schulte session core.
//!
//! This crate wires the pure [`schulte_core::GameSession`] state machine
//! into a tokio worker task. Consumers embed [`Runtime`] to start
//! sessions, deliver selections, subscribe to events, and let the
//! runtime own the countdown and highlight timers the core only reacts
//! to.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`handle`] exposes the command façade frontends hold
//! - [`events`] provides the topic-based event bus
//! - [`worker`] keeps the session-owning task internal to the crate
//! - [`timers`] implements the cancel-before-reschedule one-shot timers
//! - [`clock`] and [`snapshot`] provide the time source and view types
pub mod clock;
pub mod error;
pub mod events;
pub mod handle;
pub mod runtime;
pub mod snapshot;
pub mod timers;
pub mod worker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, SessionEvent, TimerEvent, Topic};
pub use handle::RuntimeHandle;
pub use runtime::{Runtime, RuntimeBuilder};
pub use snapshot::{CellView, GroupView, SessionSnapshot};
pub use worker::HIGHLIGHT_TIMEOUT;
