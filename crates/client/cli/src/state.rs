//! Client-side view state.

use ratatui::layout::{Margin, Position, Rect};
use schulte_runtime::SessionSnapshot;

/// Which overlay, if any, sits on top of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    Results,
    Mousemap,
}

/// Everything the renderer needs, refreshed from runtime snapshots.
pub struct AppState {
    pub snapshot: SessionSnapshot,
    pub overlay: Overlay,
    /// Screen area the grid occupied on the last draw; used to map mouse
    /// coordinates back to cell indices and to normalize tracking samples.
    pub grid_area: Rect,
    /// Cell the pointer currently rests on.
    pub hover_index: Option<usize>,
}

impl AppState {
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot,
            overlay: Overlay::None,
            grid_area: Rect::default(),
            hover_index: None,
        }
    }

    /// Playable area inside the grid block's border.
    fn playing_area(&self) -> Rect {
        self.grid_area.inner(Margin::new(1, 1))
    }

    /// Maps a terminal position to a cell index, if it lands on a cell.
    ///
    /// The grid block's border and any slack below the last row are not
    /// part of any cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.playing_area();
        let size = u16::from(self.snapshot.grid_size);
        if size == 0 || inner.width == 0 || inner.height == 0 {
            return None;
        }
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        // Rows render at a fixed height; columns split the width evenly.
        let row_height = (inner.height / size).max(1);
        let line = (row - inner.y) / row_height;
        if line >= size {
            return None;
        }
        let col = ((column - inner.x) * size / inner.width).min(size - 1);
        Some((line * size + col) as usize)
    }

    /// Normalizes a terminal position against the playable area to `[0, 1]`.
    pub fn normalize(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        let inner = self.playing_area();
        if inner.width == 0 || inner.height == 0 || !inner.contains(Position::new(column, row)) {
            return None;
        }
        let x = f32::from(column - inner.x) / f32::from(inner.width);
        let y = f32::from(row - inner.y) / f32::from(inner.height);
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schulte_core::SessionStatus;

    fn state(grid_size: u8, area: Rect) -> AppState {
        let snapshot = SessionSnapshot {
            status: SessionStatus::Idle,
            grid_size,
            cells: Vec::new(),
            groups: Vec::new(),
            active_group: 0,
            active_range_label: String::new(),
            correct: 0,
            wrong: 0,
            elapsed_hms: "00:00:00".into(),
            timed: false,
            timer_minutes: 5,
            click_index: None,
            correct_index: None,
            records: Vec::new(),
            pointer_moves: Vec::new(),
            pointer_clicks: Vec::new(),
        };
        let mut state = AppState::new(snapshot);
        state.grid_area = area;
        state
    }

    #[test]
    fn border_clicks_hit_no_cell() {
        // 3x3 grid in a 32x17 block: inner area is 30x15, rows 5 high.
        let state = state(3, Rect::new(0, 0, 32, 17));
        assert_eq!(state.cell_at(0, 0), None, "top-left border corner");
        assert_eq!(state.cell_at(0, 8), None, "left border");
        assert_eq!(state.cell_at(31, 8), None, "right border");
        assert_eq!(state.cell_at(15, 16), None, "bottom border");
    }

    #[test]
    fn corner_cells_map_to_first_and_last_index() {
        let state = state(3, Rect::new(0, 0, 32, 17));
        assert_eq!(state.cell_at(1, 1), Some(0));
        assert_eq!(state.cell_at(30, 15), Some(8));
    }

    #[test]
    fn slack_below_the_last_row_is_dead() {
        // Inner height 16 over 3 rows of 5 leaves one unrendered line.
        let state = state(3, Rect::new(0, 0, 32, 18));
        assert_eq!(state.cell_at(5, 15), Some(6), "last rendered row");
        assert_eq!(state.cell_at(5, 16), None, "slack line");
    }

    #[test]
    fn normalize_spans_the_playable_area() {
        let state = state(3, Rect::new(0, 0, 32, 17));
        assert_eq!(state.normalize(0, 0), None);
        assert_eq!(state.normalize(1, 1), Some((0.0, 0.0)));
        let (x, y) = state.normalize(16, 8).unwrap();
        assert!((x - 0.5).abs() <= 0.05);
        assert!((y - 7.0 / 15.0).abs() <= 0.05);
    }
}
