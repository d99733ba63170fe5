//! Not Found page.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::PracticalId;

/// Render the page shown for an unresolved route parameter.
pub fn render(frame: &mut Frame, app: &App, requested: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "404",
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Practical not found", app.theme.header)),
        Line::from(""),
        Line::from(format!("No practical matches \"{}\".", requested)),
        Line::from(Span::styled(
            format!(
                "Practicals are numbered {} to {}. Press h for home or 1-0 to open one.",
                PracticalId::MIN,
                PracticalId::MAX
            ),
            app.theme.muted,
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.error)),
    );

    frame.render_widget(paragraph, area);
}
