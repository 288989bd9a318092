//! Results overlay: totals plus the per-attempt timing table.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

use schulte_core::format_hms;
use schulte_runtime::SessionSnapshot;

pub fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &SessionSnapshot) {
    let popup = centered(area, 60, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default().borders(Borders::ALL).title(" results ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [summary_area, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);

    let total = snapshot.correct + snapshot.wrong;
    let accuracy = if total == 0 {
        100.0
    } else {
        f64::from(snapshot.correct) * 100.0 / f64::from(total)
    };
    let summary = Paragraph::new(vec![
        Line::from(format!(
            "time {}   correct {}   wrong {}",
            snapshot.elapsed_hms, snapshot.correct, snapshot.wrong
        )),
        Line::from(format!("accuracy {accuracy:.1}%")),
        Line::from("Esc closes"),
    ]);
    frame.render_widget(summary, summary_area);

    let header = Row::new(["#", "group", "number", "split", "mode", "hit"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = snapshot.records.iter().enumerate().map(|(i, record)| {
        let mode = match (record.was_divergent, record.was_inverted) {
            (false, false) => "asc",
            (false, true) => "desc",
            (true, false) => "div",
            (true, true) => "conv",
        };
        Row::new([
            Cell::from((i + 1).to_string()),
            Cell::from(format!("g{}", record.group.0)),
            Cell::from(record.number.to_string()),
            Cell::from(format_hms(record.elapsed_since_last)),
            Cell::from(mode),
            Cell::from(if record.was_error { "x" } else { "ok" }),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(4),
        ],
    )
    .header(header);
    frame.render_widget(table, table_area);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    area
}
