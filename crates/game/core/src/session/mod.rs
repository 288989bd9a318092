//! The session state machine.
//!
//! [`GameSession`] is the aggregate root: it owns the grid, the groups,
//! the statistics, and the tracking log, and is the only place state is
//! mutated. All entry points are synchronous and take a [`SessionEnv`];
//! the caller serializes delivery (a single UI event loop) and owns the
//! actual timers, notifying the session when they fire.
mod outcome;

pub use outcome::{SelectionOutcome, SessionEffect};

use strum::Display;

use crate::config::SessionConfig;
use crate::env::SessionEnv;
use crate::error::InvariantError;
use crate::state::{
    Cell, ColorTag, Grid, Group, GroupId, PointerSample, SessionStats, TrackingLog,
};

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    /// Constructed or reconfigured, not yet playable.
    #[default]
    Idle,
    /// Accepting selections.
    Running,
    /// Terminal; statistics are closed.
    Finished,
}

/// One playable Schulte table session.
///
/// A session is created from a clamped [`SessionConfig`] and a seed;
/// changing grid size, group count, or any mode flag requires
/// [`GameSession::configure`] (or a new instance) followed by
/// [`GameSession::start`]. Nothing here is shared or global, so
/// independent sessions can run side by side.
pub struct GameSession {
    config: SessionConfig,
    seed: u64,
    status: SessionStatus,
    grid: Grid,
    groups: Vec<Group>,
    active_group: usize,
    stats: SessionStats,
    tracking: TrackingLog,
    shuffle_round: u32,
    /// Last selected slot, cleared by the highlight timeout.
    click_index: Option<usize>,
    /// Last correctly selected slot, for the trace highlight.
    correct_index: Option<usize>,
}

impl GameSession {
    /// Creates an Idle session showing an unshuffled preview table.
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let config = config.clamped();
        let (grid, groups) = Grid::build(&config);
        Self {
            config,
            seed,
            status: SessionStatus::Idle,
            grid,
            groups,
            active_group: 0,
            stats: SessionStats::default(),
            tracking: TrackingLog::default(),
            shuffle_round: 0,
            click_index: None,
            correct_index: None,
        }
    }

    /// Replaces the configuration (clamped) and drops back to Idle with a
    /// fresh preview table. Statistics reset on the next `start`.
    pub fn configure(&mut self, config: SessionConfig) {
        self.config = config.clamped();
        let (grid, groups) = Grid::build(&self.config);
        self.grid = grid;
        self.groups = groups;
        self.active_group = 0;
        self.status = SessionStatus::Idle;
        self.click_index = None;
        self.correct_index = None;
        self.tracking.clear();
    }

    /// Idle/Finished -> Running: rebuilds the table, resets statistics and
    /// tracking. Restarting a Running session is allowed and equivalent.
    pub fn start(&mut self, env: &SessionEnv<'_>) {
        self.rebuild_table(env);
        self.stats.reset(env.now);
        self.tracking.clear();
        self.status = SessionStatus::Running;
    }

    /// Running -> Finished. A no-op on an Idle or already-Finished
    /// session, so stop timestamps are never double-written.
    pub fn stop(&mut self, env: &SessionEnv<'_>) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Finished;
            self.stats.close(env.now);
            self.click_index = None;
            self.correct_index = None;
        }
    }

    /// External countdown expiry: forces Running -> Finished immediately,
    /// regardless of progress.
    pub fn notify_time_expired(&mut self, env: &SessionEnv<'_>) {
        self.stop(env);
    }

    /// Cosmetic: clears the transient click highlight. The caller's
    /// one-shot timer delivers this; a fresh selection supersedes any
    /// pending one.
    pub fn notify_highlight_timeout(&mut self) {
        self.click_index = None;
    }

    /// Handles "cell selected at `index`".
    ///
    /// `pointer`, if given, is the normalized click position for the
    /// mousemap; it is logged only while tracking is enabled.
    ///
    /// Returns `Ok(SelectionOutcome::Ignored)` for stray input (not
    /// Running, or out of bounds). `Err` only on a broken internal
    /// invariant.
    pub fn select_cell(
        &mut self,
        env: &SessionEnv<'_>,
        index: usize,
        pointer: Option<PointerSample>,
    ) -> Result<SelectionOutcome, InvariantError> {
        if self.status != SessionStatus::Running {
            return Ok(SelectionOutcome::Ignored);
        }
        let Some(cell) = self.grid.cell(index) else {
            return Ok(SelectionOutcome::Ignored);
        };
        let (cell_group, cell_number) = (cell.group, cell.number);

        let active = &self.groups[self.active_group];
        let correct = cell_group == active.id() && active.expected() == Some(cell_number);
        let active_mode = active.mode();

        if self.config.tracking
            && let Some(sample) = pointer
        {
            self.tracking.push_click(sample, correct);
        }

        self.stats
            .record(env.now, cell_group, cell_number, active_mode, !correct);
        self.click_index = Some(index);

        if !correct {
            // The player retries the same target: cursors and turn order
            // stay untouched.
            self.correct_index = None;
            return Ok(SelectionOutcome::Wrong);
        }

        self.grid.mark_traced(index);

        let mut highlight_index = index;
        if self.config.shuffle_on_correct {
            self.shuffle_round += 1;
            self.grid.shuffle(
                env.rng,
                self.seed,
                self.shuffle_round,
                SessionConfig::SHUFFLE_ITERATIONS,
            );
            highlight_index = self.grid.index_of(cell_group, cell_number).ok_or(
                InvariantError::ExpectedCellMissing {
                    group: cell_group,
                    number: cell_number,
                },
            )?;
        }
        self.click_index = Some(highlight_index);
        self.correct_index = Some(highlight_index);

        self.groups[self.active_group].advance();
        self.rotate_active_group();

        let effect = self.apply_termination_policy(env);
        Ok(SelectionOutcome::Correct {
            cell_index: index,
            highlight_index,
            effect,
        })
    }

    /// Appends a pointer-move sample while Running with tracking enabled.
    pub fn record_pointer_move(&mut self, sample: PointerSample) {
        if self.status == SessionStatus::Running && self.config.tracking {
            self.tracking.push_move(sample);
        }
    }

    /// Round-robin to the next group that still expects values. Unequal
    /// group sizes leave exhausted groups in the rotation near the end,
    /// so they are skipped rather than visited.
    fn rotate_active_group(&mut self) {
        let n = self.groups.len();
        for offset in 1..=n {
            let candidate = (self.active_group + offset) % n;
            if !self.groups[candidate].is_exhausted() {
                self.active_group = candidate;
                return;
            }
        }
        // All exhausted; the termination policy fires next.
    }

    /// Timed mode rebuilds the cleared table and keeps going; untimed
    /// mode finishes once every sequence is exhausted.
    fn apply_termination_policy(&mut self, env: &SessionEnv<'_>) -> SessionEffect {
        let cell_count = self.grid.len() as u32;
        if self.config.timed {
            if self.stats.correct() > 0 && self.stats.correct() % cell_count == 0 {
                self.rebuild_table(env);
                return SessionEffect::TableRebuilt;
            }
            SessionEffect::None
        } else if self.groups.iter().all(Group::is_exhausted) {
            self.status = SessionStatus::Finished;
            self.stats.close(env.now);
            SessionEffect::Finished
        } else {
            SessionEffect::None
        }
    }

    /// Fresh shuffle and fresh group cursors under the same configuration.
    fn rebuild_table(&mut self, env: &SessionEnv<'_>) {
        self.shuffle_round += 1;
        let (mut grid, groups) = Grid::build(&self.config);
        grid.apply_decorations(&self.config, env.rng, self.seed, self.shuffle_round);
        grid.shuffle(
            env.rng,
            self.seed,
            self.shuffle_round,
            SessionConfig::SHUFFLE_ITERATIONS,
        );
        self.grid = grid;
        self.groups = groups;
        self.active_group = 0;
        self.click_index = None;
        self.correct_index = None;
    }

    // ===== read-only snapshot accessors =====

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn active_group(&self) -> &Group {
        &self.groups[self.active_group]
    }

    pub fn active_group_index(&self) -> usize {
        self.active_group
    }

    /// Display color for a cell, derived from its group.
    pub fn cell_color(&self, cell: &Cell) -> ColorTag {
        ColorTag::for_group(cell.group, self.config.group_count)
    }

    /// Range description of the active group, e.g. `1→25` or `←12|13→`.
    pub fn active_range_label(&self) -> String {
        self.active_group().range_label()
    }

    /// Slot of the cell the active group currently expects.
    ///
    /// `None` only when the session is over (every group exhausted);
    /// anything else would be an internal invariant violation.
    pub fn expected_index(&self) -> Option<usize> {
        self.grid.index_of_expected(self.active_group())
    }

    pub fn index_of(&self, group: GroupId, number: u16) -> Option<usize> {
        self.grid.index_of(group, number)
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn tracking(&self) -> &TrackingLog {
        &self.tracking
    }

    pub fn click_index(&self) -> Option<usize> {
        self.click_index
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Millis;

    fn env(now: u64) -> SessionEnv<'static> {
        static RNG: PcgRng = PcgRng;
        SessionEnv::new(Millis(now), &RNG)
    }

    fn running_session(config: SessionConfig) -> GameSession {
        let mut session = GameSession::new(config, 0xabcd);
        session.start(&env(0));
        session
    }

    #[test]
    fn selection_before_start_is_ignored() {
        let mut session = GameSession::new(SessionConfig::default(), 1);
        let outcome = session.select_cell(&env(10), 0, None).unwrap();
        assert_eq!(outcome, SelectionOutcome::Ignored);
        assert!(session.stats().records().is_empty());
    }

    #[test]
    fn out_of_bounds_selection_is_ignored() {
        let mut session = running_session(SessionConfig::default());
        let outcome = session.select_cell(&env(10), 999, None).unwrap();
        assert_eq!(outcome, SelectionOutcome::Ignored);
        assert!(session.stats().records().is_empty());
    }

    #[test]
    fn correct_selection_increments_correct_count() {
        let mut session = running_session(SessionConfig::default());
        let target = session.expected_index().unwrap();
        let outcome = session.select_cell(&env(100), target, None).unwrap();
        assert!(outcome.is_correct());
        assert_eq!(session.stats().correct(), 1);
        assert_eq!(session.stats().wrong(), 0);
        assert!(session.cells()[target].traced);
    }

    #[test]
    fn wrong_selection_leaves_cursor_unchanged() {
        let mut session = running_session(SessionConfig::default());
        let target = session.expected_index().unwrap();
        let wrong = (target + 1) % session.cells().len();

        let expected_before = session.active_group().expected();
        let outcome = session.select_cell(&env(100), wrong, None).unwrap();
        assert_eq!(outcome, SelectionOutcome::Wrong);
        assert_eq!(session.stats().wrong(), 1);
        assert_eq!(session.active_group().expected(), expected_before);
        assert_eq!(session.expected_index(), Some(target));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut session = running_session(SessionConfig::default());
        session.stop(&env(5_000));
        assert_eq!(session.status(), SessionStatus::Finished);
        let stopped = session.stats().stopped_at();

        session.stop(&env(9_000));
        assert_eq!(session.stats().stopped_at(), stopped);
        assert_eq!(session.status(), SessionStatus::Finished);
    }

    #[test]
    fn time_expiry_finishes_regardless_of_progress() {
        let mut session = running_session(SessionConfig::default().with_timed(5));
        let target = session.expected_index().unwrap();
        session.select_cell(&env(50), target, None).unwrap();

        session.notify_time_expired(&env(60));
        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(
            session.select_cell(&env(70), 0, None).unwrap(),
            SelectionOutcome::Ignored
        );
    }

    #[test]
    fn highlight_timeout_clears_click_only() {
        let mut session = running_session(SessionConfig::default());
        let target = session.expected_index().unwrap();
        session.select_cell(&env(50), target, None).unwrap();
        assert!(session.click_index().is_some());
        assert!(session.correct_index().is_some());

        session.notify_highlight_timeout();
        assert_eq!(session.click_index(), None);
        assert!(session.correct_index().is_some());
    }

    #[test]
    fn shuffle_on_correct_relocates_the_highlight() {
        let config = SessionConfig {
            shuffle_on_correct: true,
            ..SessionConfig::default()
        };
        let mut session = running_session(config);
        let target = session.expected_index().unwrap();
        let outcome = session.select_cell(&env(10), target, None).unwrap();

        let SelectionOutcome::Correct {
            highlight_index, ..
        } = outcome
        else {
            panic!("expected correct outcome");
        };
        // The highlighted slot must carry the just-selected cell.
        let cell = &session.cells()[highlight_index];
        assert_eq!(cell.number, 1);
        assert!(cell.traced);
    }

    #[test]
    fn tracking_gated_on_flag_and_status() {
        let mut session = running_session(SessionConfig::default());
        session.record_pointer_move(PointerSample::new(0.5, 0.5));
        assert!(session.tracking().moves().is_empty(), "tracking disabled");

        let config = SessionConfig {
            tracking: true,
            ..SessionConfig::default()
        };
        let mut session = running_session(config);
        session.record_pointer_move(PointerSample::new(0.5, 0.5));
        let target = session.expected_index().unwrap();
        session
            .select_cell(&env(10), target, Some(PointerSample::new(0.1, 0.9)))
            .unwrap();
        assert_eq!(session.tracking().moves().len(), 1);
        assert_eq!(session.tracking().clicks().len(), 1);
        assert!(session.tracking().clicks()[0].correct);

        session.stop(&env(20));
        session.record_pointer_move(PointerSample::new(0.2, 0.2));
        assert_eq!(session.tracking().moves().len(), 1, "not Running");
    }
}
