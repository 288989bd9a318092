//! Observable results of session commands.
//!
//! Every side effect of a selection is surfaced in the returned value;
//! the core never communicates through logging or hidden state.

/// Result of `GameSession::select_cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionOutcome {
    /// Input arrived while not Running or outside the grid; nothing
    /// changed and nothing was recorded.
    Ignored,
    /// The selected cell was not the active group's expected target.
    Wrong,
    /// The expected target was hit.
    Correct {
        /// Slot that was selected.
        cell_index: usize,
        /// Slot to highlight as the last correct pick. Differs from
        /// `cell_index` after a shuffle-on-correct reshuffle relocated
        /// the cell.
        highlight_index: usize,
        /// Follow-up the session applied after this selection.
        effect: SessionEffect,
    },
}

impl SelectionOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, SelectionOutcome::Correct { .. })
    }
}

/// Session-level consequence of a correct selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionEffect {
    #[default]
    None,
    /// Timed mode cleared the whole table: fresh shuffle and cursors,
    /// stats keep accumulating.
    TableRebuilt,
    /// Every sequence is exhausted; the session is Finished and results
    /// should be shown.
    Finished,
}
