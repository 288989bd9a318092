//! Read-only views of a session for frontends and report export.

use serde::{Deserialize, Serialize};

use schulte_core::{
    AttemptRecord, ClickSample, ColorTag, GameSession, Millis, PointerSample, Rotation,
    SessionStatus, Spin,
};

/// One cell as a frontend renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellView {
    pub symbol: String,
    pub number: u16,
    pub group: u8,
    pub color: ColorTag,
    pub traced: bool,
    pub rotation: Rotation,
    pub spin: Spin,
}

/// One group's public state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupView {
    pub id: u8,
    pub size: u16,
    pub expected: Option<u16>,
    pub range_label: String,
    pub color: ColorTag,
    pub exhausted: bool,
}

/// Full read-only snapshot of a session at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub grid_size: u8,
    pub cells: Vec<CellView>,
    pub groups: Vec<GroupView>,
    pub active_group: usize,
    pub active_range_label: String,
    pub correct: u32,
    pub wrong: u32,
    pub elapsed_hms: String,
    pub timed: bool,
    pub timer_minutes: u16,
    pub click_index: Option<usize>,
    pub correct_index: Option<usize>,
    pub records: Vec<AttemptRecord>,
    pub pointer_moves: Vec<PointerSample>,
    pub pointer_clicks: Vec<ClickSample>,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession, now: Millis) -> Self {
        let config = session.config();
        let cells = session
            .cells()
            .iter()
            .map(|cell| CellView {
                symbol: cell.symbol.clone(),
                number: cell.number,
                group: cell.group.0,
                color: session.cell_color(cell),
                traced: cell.traced,
                rotation: cell.rotation,
                spin: cell.spin,
            })
            .collect();
        let groups = session
            .groups()
            .iter()
            .map(|group| GroupView {
                id: group.id().0,
                size: group.size(),
                expected: group.expected(),
                range_label: group.range_label(),
                color: ColorTag::for_group(group.id(), config.group_count),
                exhausted: group.is_exhausted(),
            })
            .collect();

        Self {
            status: session.status(),
            grid_size: config.grid_size,
            cells,
            groups,
            active_group: session.active_group_index(),
            active_range_label: session.active_range_label(),
            correct: session.stats().correct(),
            wrong: session.stats().wrong(),
            elapsed_hms: session.stats().elapsed_hms(now),
            timed: config.timed,
            timer_minutes: config.timer_minutes,
            click_index: session.click_index(),
            correct_index: session.correct_index(),
            records: session.stats().records().to_vec(),
            pointer_moves: session.tracking().moves().to_vec(),
            pointer_clicks: session.tracking().clicks().to_vec(),
        }
    }

    /// Pretty JSON report of the full snapshot, for the results view or
    /// piping to a file.
    pub fn to_report_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
