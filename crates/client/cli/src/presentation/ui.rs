//! Top-level layout: grid above a one-line status bar, overlays on top.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::presentation::widgets;
use crate::state::{AppState, Overlay};

pub fn draw(frame: &mut Frame<'_>, state: &mut AppState) {
    let [grid_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    // Remember where the grid landed so mouse events can be mapped back.
    state.grid_area = grid_area;

    widgets::grid::render(frame, grid_area, &state.snapshot, state.hover_index);
    widgets::status::render(frame, status_area, &state.snapshot);

    match state.overlay {
        Overlay::None => {}
        Overlay::Results => widgets::results::render(frame, frame.area(), &state.snapshot),
        Overlay::Mousemap => widgets::mousemap::render(frame, grid_area, &state.snapshot),
    }
}
