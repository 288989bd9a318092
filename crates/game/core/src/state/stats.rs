//! Per-attempt records and aggregate session statistics.

use crate::sequence::TraversalMode;
use crate::state::GroupId;

/// Milliseconds since an arbitrary epoch. Only differences are meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub fn saturating_sub(self, earlier: Millis) -> Millis {
        Millis(self.0.saturating_sub(earlier.0))
    }
}

/// Formats a duration as `HH:MM:SS`, hours wrapping at 24.
pub fn format_hms(elapsed: Millis) -> String {
    let total_secs = elapsed.0 / 1000;
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = (total_secs / 3600) % 24;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// One selection attempt, correct or not.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttemptRecord {
    /// Group of the selected cell.
    pub group: GroupId,
    /// Number on the selected cell.
    pub number: u16,
    /// Time since the previous attempt, or since session start for the
    /// first one.
    pub elapsed_since_last: Millis,
    pub was_error: bool,
    /// Mode flags of the group that was active at the time.
    pub was_inverted: bool,
    pub was_divergent: bool,
}

/// Accumulated statistics for one session.
///
/// Invariant: `correct + wrong == records.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    started_at: Millis,
    stopped_at: Option<Millis>,
    last_attempt_at: Millis,
    correct: u32,
    wrong: u32,
    records: Vec<AttemptRecord>,
}

impl SessionStats {
    /// Resets everything and stamps the session start.
    pub fn reset(&mut self, now: Millis) {
        self.started_at = now;
        self.stopped_at = None;
        self.last_attempt_at = now;
        self.correct = 0;
        self.wrong = 0;
        self.records.clear();
    }

    /// Appends one attempt, bumping the matching counter.
    pub fn record(
        &mut self,
        now: Millis,
        group: GroupId,
        number: u16,
        mode: TraversalMode,
        was_error: bool,
    ) {
        let elapsed_since_last = now.saturating_sub(self.last_attempt_at);
        self.last_attempt_at = now;
        if was_error {
            self.wrong += 1;
        } else {
            self.correct += 1;
        }
        self.records.push(AttemptRecord {
            group,
            number,
            elapsed_since_last,
            was_error,
            was_inverted: mode.inverted,
            was_divergent: mode.divergent,
        });
    }

    /// Fixes the stop timestamp. Later calls are ignored so a finished
    /// session's duration never drifts.
    pub fn close(&mut self, now: Millis) {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }

    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    pub fn stopped_at(&self) -> Option<Millis> {
        self.stopped_at
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// Total duration between start and stop (or `now` while running).
    pub fn elapsed(&self, now: Millis) -> Millis {
        self.stopped_at
            .unwrap_or(now)
            .saturating_sub(self.started_at)
    }

    /// Elapsed time formatted as `HH:MM:SS`.
    pub fn elapsed_hms(&self, now: Millis) -> String {
        format_hms(self.elapsed(now))
    }
}
