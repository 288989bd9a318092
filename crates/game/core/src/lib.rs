//! Deterministic Schulte-table session logic shared across clients.
//!
//! `schulte-core` defines the canonical rules: table construction and
//! shuffling, the traversal rules each group follows, selection
//! validation, and statistics. All state mutation flows through
//! [`session::GameSession`], which is pure and synchronous; time and
//! randomness enter through [`env::SessionEnv`] so the same inputs always
//! replay the same session.
pub mod config;
pub mod env;
pub mod error;
pub mod sequence;
pub mod session;
pub mod state;

pub use config::SessionConfig;
pub use env::{PcgRng, RngOracle, SessionEnv, mix_seed};
pub use error::InvariantError;
pub use sequence::{TraversalKind, TraversalMode, next_value, start_value};
pub use session::{GameSession, SelectionOutcome, SessionEffect, SessionStatus};
pub use state::{
    AttemptRecord, Cell, ClickSample, ColorTag, Grid, Group, GroupId, Millis, PointerSample,
    Rotation, SessionStats, Spin, TrackingLog, format_hms,
};
