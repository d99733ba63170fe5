//! Home page rendering.
//!
//! A short introduction above a table of every practical.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::catalog;

const INTRO: &str =
    "A comprehensive documentation of 10 practical image processing techniques using Scilab.";

/// Render the home page.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Intro
        Constraint::Min(5),    // Practical list
    ])
    .split(area);

    let intro = vec![
        Line::from(Span::styled("Digital Image Processing", app.theme.header)),
        Line::from(Span::styled(INTRO, app.theme.muted)),
        Line::from(Span::styled(
            "Press Enter to explore the selected practical, or 1 to get started.",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(intro).wrap(Wrap { trim: true }).block(Block::default()),
        chunks[0],
    );

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Practical"),
        Cell::from("Description"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = catalog()
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id.to_string()),
                Cell::from(p.title),
                Cell::from(p.description).style(app.theme.muted),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Fill(5),
    ];

    let selected = app.selected_index.min(catalog().len().saturating_sub(1));
    let title = format!(
        " Explore the Practicals [{}/{}] ",
        selected + 1,
        catalog().len()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(table, chunks[1], &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::ui::test_support::{contains, draw};
    use crate::ui::Theme;

    #[test]
    fn test_lists_every_practical() {
        let app = App::new(Box::new(MemoryClipboard::new()), Theme::light());
        let buffer = draw(120, 20, |frame, area| render(frame, &app, area));
        assert!(contains(&buffer, "Basic Image Operations"));
        assert!(contains(&buffer, "Edge Detection"));
        assert!(contains(&buffer, "[1/10]"));
    }

    #[test]
    fn test_rows_show_card_blurbs() {
        let app = App::new(Box::new(MemoryClipboard::new()), Theme::dark());
        let buffer = draw(160, 20, |frame, area| render(frame, &app, area));
        assert!(contains(&buffer, "Learn how to implement linear convolution"));
        assert!(contains(&buffer, "Implement circular convolution for periodic"));
        assert!(contains(&buffer, "Explore additional morphological operations"));
    }
}
