//! About page.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::catalog;

const OVERVIEW: [&str; 2] = [
    "This Digital Image Processing (DIP) documentation is a resource for students and \
     professionals learning image processing techniques with Scilab. It covers 10 practical \
     exercises that demonstrate image processing concepts and algorithms.",
    "Each practical includes a theoretical explanation, the Scilab code, and the output the \
     code produces.",
];

const AUTHOR: &str = "Created by Varun Singh, a developer and student of image processing, to \
                      help others learn digital image processing with Scilab.";

const LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/VarunSingh19"),
    ("LinkedIn", "https://linkedin.com/in/"),
    ("Email", "mailto:contact@example.com"),
];

/// Render the about page with the credits footer.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("About DIP Documentation", app.theme.header)),
        Line::from(Span::styled(
            "Documentation of digital image processing techniques using Scilab.",
            app.theme.muted,
        )),
        Line::from(""),
        Line::from(Span::styled("Project Overview", bold)),
    ];
    lines.extend(OVERVIEW.iter().map(|p| Line::from(*p)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Practicals Included", bold)));
    lines.extend(catalog().iter().map(|p| {
        Line::from(vec![
            Span::styled(format!("  • Practical {}: ", p.id), bold),
            Span::raw(p.title),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("About the Author", bold)));
    lines.push(Line::from(AUTHOR));
    lines.extend(LINKS.iter().map(|(name, url)| {
        Line::from(vec![
            Span::styled(format!("  {:<9}", name), Style::default().fg(app.theme.highlight)),
            Span::styled(*url, app.theme.muted),
        ])
    }));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        );
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(" © DIP Documentation. Created by Varun Singh.")
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(footer, chunks[1]);
}
