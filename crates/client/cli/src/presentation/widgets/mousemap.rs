//! Mousemap overlay: pointer trail and clicks drawn over the grid outline.

use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    widgets::{
        Block, Borders, Clear,
        canvas::{Canvas, Line, Points},
    },
};

use schulte_runtime::SessionSnapshot;

pub fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &SessionSnapshot) {
    frame.render_widget(Clear, area);

    let size = f64::from(snapshot.grid_size);
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" mousemap "))
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(move |ctx| {
            // Cell boundaries, so the trail reads against the table.
            for i in 1..snapshot.grid_size {
                let at = f64::from(i) / size;
                ctx.draw(&Line {
                    x1: at,
                    y1: 0.0,
                    x2: at,
                    y2: 1.0,
                    color: Color::DarkGray,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: at,
                    x2: 1.0,
                    y2: at,
                    color: Color::DarkGray,
                });
            }

            // Samples are stored with y growing downward; the canvas grows
            // upward.
            ctx.layer();
            for pair in snapshot.pointer_moves.windows(2) {
                ctx.draw(&Line {
                    x1: f64::from(pair[0].x),
                    y1: 1.0 - f64::from(pair[0].y),
                    x2: f64::from(pair[1].x),
                    y2: 1.0 - f64::from(pair[1].y),
                    color: Color::Cyan,
                });
            }

            ctx.layer();
            let hits: Vec<(f64, f64)> = snapshot
                .pointer_clicks
                .iter()
                .filter(|click| click.correct)
                .map(|click| (f64::from(click.x), 1.0 - f64::from(click.y)))
                .collect();
            let misses: Vec<(f64, f64)> = snapshot
                .pointer_clicks
                .iter()
                .filter(|click| !click.correct)
                .map(|click| (f64::from(click.x), 1.0 - f64::from(click.y)))
                .collect();
            ctx.draw(&Points {
                coords: &hits,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &misses,
                color: Color::Red,
            });
        });

    frame.render_widget(canvas, area);
}
