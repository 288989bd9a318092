//! The table itself: one square cell per number.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell as TableCell, Row, Table},
};

use schulte_core::{Rotation, Spin};
use schulte_runtime::{CellView, SessionSnapshot};

use crate::presentation::theme;

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &SessionSnapshot,
    hover_index: Option<usize>,
) {
    let size = snapshot.grid_size as usize;
    if size == 0 {
        return;
    }

    let row_height = (area.height.saturating_sub(2) / size as u16).max(1);
    let widths = vec![Constraint::Ratio(1, size as u32); size];

    let rows = snapshot.cells.chunks(size).enumerate().map(|(r, cells)| {
        let row_cells = cells
            .iter()
            .enumerate()
            .map(|(c, cell)| table_cell(cell, r * size + c, snapshot, hover_index));
        Row::new(row_cells).height(row_height)
    });

    // No column spacing: cell edges line up with the click map.
    let table = Table::new(rows, widths)
        .column_spacing(0)
        .block(Block::default().borders(Borders::ALL).title(" table "));

    frame.render_widget(table, area);
}

fn table_cell<'a>(
    cell: &'a CellView,
    index: usize,
    snapshot: &SessionSnapshot,
    hover_index: Option<usize>,
) -> TableCell<'a> {
    let mut style = Style::default().fg(theme::group_color(cell.color));

    if cell.traced {
        style = style.fg(theme::TRACED_FG);
    }
    if snapshot.correct_index == Some(index) {
        style = style.bg(theme::CORRECT_BG);
    } else if snapshot.click_index == Some(index) {
        style = style.bg(theme::HIGHLIGHT_BG);
    } else if hover_index == Some(index) {
        style = style.bg(theme::HOVER_BG);
    }

    // Terminals cannot rotate glyphs; rotations map to text attributes
    // and spins to arrow suffixes.
    style = match cell.rotation {
        Rotation::None => style,
        Rotation::Quarter => style.add_modifier(Modifier::UNDERLINED),
        Rotation::Half => style.add_modifier(Modifier::REVERSED),
        Rotation::ThreeQuarter => style.add_modifier(Modifier::ITALIC),
    };
    let label = match cell.spin {
        Spin::None => cell.symbol.clone(),
        Spin::Left => format!("{}↺", cell.symbol),
        Spin::Right => format!("{}↻", cell.symbol),
    };

    TableCell::from(Line::from(label).alignment(Alignment::Center)).style(style)
}
