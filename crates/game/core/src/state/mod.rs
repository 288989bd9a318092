//! Session state types: cells, groups, the grid, statistics, tracking.
mod cell;
mod grid;
mod group;
mod stats;
mod tracking;

pub use cell::{Cell, ColorTag, Rotation, Spin};
pub use grid::Grid;
pub use group::{Group, GroupId};
pub use stats::{AttemptRecord, Millis, SessionStats, format_hms};
pub use tracking::{ClickSample, PointerSample, TrackingLog};
