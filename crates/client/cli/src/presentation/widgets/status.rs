//! One-line status bar under the grid.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use schulte_runtime::SessionSnapshot;

use crate::presentation::theme;

pub fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &SessionSnapshot) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", snapshot.status),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("| {} ", snapshot.elapsed_hms)),
    ];

    if snapshot.timed {
        spans.push(Span::raw(format!("| {}m countdown ", snapshot.timer_minutes)));
    }

    // Per-group targets, the active one bold.
    for (index, group) in snapshot.groups.iter().enumerate() {
        let mut style = Style::default().fg(theme::group_color(group.color));
        if index == snapshot.active_group {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        let target = match group.expected {
            Some(number) => number.to_string(),
            None => "done".to_string(),
        };
        spans.push(Span::styled(
            format!("| {} {} ", group.range_label, target),
            style,
        ));
    }

    spans.push(Span::raw(format!(
        "| +{} -{} ",
        snapshot.correct, snapshot.wrong
    )));
    spans.push(Span::raw(
        "| s start  r results  m mousemap  q quit".to_string(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
