//! Session configuration and tunable constants.

/// Configuration for one game session.
///
/// A training tool should be forgiving: out-of-range values are clamped by
/// [`SessionConfig::clamped`], never rejected. Changing any field requires
/// a table rebuild (`GameSession::start`), so the session owns a frozen
/// copy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Side length of the square grid (clamped to 2..=9).
    pub grid_size: u8,
    /// Number of interleaved counting sequences (clamped to 1..=5, the
    /// size of the group color palette).
    pub group_count: u8,
    /// Uniform mode: run odd-indexed groups (or a lone group) high-to-low.
    pub inverse: bool,
    /// Uniform mode: traverse every group center-outward.
    pub divergent: bool,
    /// Cycle all four (divergent x inverted) combinations across groups,
    /// overriding `inverse`/`divergent`.
    pub varied_modes: bool,
    /// Timed mode: the session runs until the countdown expires, rebuilding
    /// the table each time it is cleared.
    pub timed: bool,
    /// Countdown length in minutes (clamped to 1..=180).
    pub timer_minutes: u16,
    /// Re-shuffle the whole table after every correct selection.
    pub shuffle_on_correct: bool,
    /// Record normalized pointer moves and clicks for the mousemap view.
    pub tracking: bool,
    /// Draw each symbol rotated by a random quarter turn.
    pub turn_symbols: bool,
    /// Animate each symbol spinning left or right.
    pub spin_symbols: bool,
}

impl SessionConfig {
    // ===== grid bounds =====
    pub const MIN_GRID_SIZE: u8 = 2;
    pub const MAX_GRID_SIZE: u8 = 9;
    pub const MIN_GROUP_COUNT: u8 = 1;
    /// Bounded by the group color palette.
    pub const MAX_GROUP_COUNT: u8 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_SIZE: u8 = 5;
    pub const DEFAULT_TIMER_MINUTES: u16 = 5;
    pub const MAX_TIMER_MINUTES: u16 = 180;

    /// Number of random pairwise swaps applied per shuffle. The N-swap
    /// shuffle (not Fisher-Yates) is observable behavior; only this count
    /// is tunable.
    pub const SHUFFLE_ITERATIONS: u32 = 1000;

    pub fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            group_count: 1,
            inverse: false,
            divergent: false,
            varied_modes: false,
            timed: false,
            timer_minutes: Self::DEFAULT_TIMER_MINUTES,
            shuffle_on_correct: false,
            tracking: false,
            turn_symbols: false,
            spin_symbols: false,
        }
    }

    /// Returns a copy with every field forced into its supported range.
    pub fn clamped(mut self) -> Self {
        self.grid_size = self
            .grid_size
            .clamp(Self::MIN_GRID_SIZE, Self::MAX_GRID_SIZE);
        self.group_count = self
            .group_count
            .clamp(Self::MIN_GROUP_COUNT, Self::MAX_GROUP_COUNT);
        self.timer_minutes = self.timer_minutes.clamp(1, Self::MAX_TIMER_MINUTES);
        self
    }

    /// Total number of cells on the table.
    pub fn cell_count(&self) -> usize {
        let side = self.grid_size as usize;
        side * side
    }

    pub fn with_grid_size(mut self, grid_size: u8) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_group_count(mut self, group_count: u8) -> Self {
        self.group_count = group_count;
        self
    }

    pub fn with_timed(mut self, timer_minutes: u16) -> Self {
        self.timed = true;
        self.timer_minutes = timer_minutes;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
