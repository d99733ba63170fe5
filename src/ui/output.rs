//! Output overlay rendering.
//!
//! Displays a modal with the output of a finished run: the numbered image
//! references with their captions, or a message when the practical has no
//! recorded output.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{resolve, OutputLookup, PracticalId, NO_OUTPUT_MESSAGE};
use crate::ui::centered;

/// Minimum width required for the overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 40;
/// Minimum height required for the overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 10;

/// Lines listing the output of a practical.
pub fn output_lines(lookup: OutputLookup, app: &App) -> Vec<Line<'static>> {
    let Some(bundle) = lookup.bundle() else {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", NO_OUTPUT_MESSAGE),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
    };

    let mut lines = vec![Line::from(Span::styled(
        bundle.title,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (index, entry) in bundle.images.iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}. ", index + 1),
                Style::default().fg(app.theme.highlight),
            ),
            Span::styled(entry.caption, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.image_ref),
            app.theme.muted,
        )));
    }
    lines
}

/// Render the output as a modal overlay.
pub fn render_overlay(
    frame: &mut Frame,
    app: &App,
    id: PracticalId,
    lookup: OutputLookup,
    area: Rect,
) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }
    let Ok(practical) = resolve(id) else {
        return;
    };

    let overlay_width = (area.width * 90 / 100).clamp(MIN_OVERLAY_WIDTH, 100);
    let overlay_height = (area.height * 80 / 100).clamp(MIN_OVERLAY_HEIGHT, 40);
    let overlay_area = centered(area, overlay_width, overlay_height);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(format!(" Output - Practical {}: {} ", practical.id, practical.title))
        .title_bottom(
            Line::from(" Esc:close ↑↓:scroll ").style(Style::default().add_modifier(Modifier::DIM)),
        )
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Description
        Constraint::Min(3),    // Images
    ])
    .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        format!(" Result of running the Scilab code for Practical {}", practical.id),
        app.theme.muted,
    )));
    frame.render_widget(description, chunks[0]);

    let body = Paragraph::new(output_lines(lookup, app))
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll, 0));
    frame.render_widget(body, chunks[1]);
}
