//! Common UI components shared across pages.
//!
//! This module contains the header bar, navigation tabs, status bar, and
//! help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Route};
use crate::ui::centered;

/// Site name shown in the header.
pub const SITE_TITLE: &str = "DIP Documentation";

/// Render the header bar: site name, current page and display mode.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let page = match (&app.route, app.current_practical()) {
        (Route::Practical(_), Some(practical)) => {
            format!("Practical {}: {}", practical.id, practical.title)
        }
        (Route::About, _) => "About".to_string(),
        (Route::NotFound(_), _) => "Not Found".to_string(),
        _ => "Digital Image Processing".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", SITE_TITLE),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(page, Style::default().fg(app.theme.highlight)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} mode", app.theme.mode.label()),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the navigation tabs.
///
/// Not Found pages highlight nothing.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let practicals = match app.route {
        Route::Practical(id) => format!(" n/p:Practical {} ", id),
        _ => " 1-0:Practicals ".to_string(),
    };
    let titles: Vec<Line> = vec![
        Line::from(" h:Home "),
        Line::from(practicals),
        Line::from(" a:About "),
    ];

    let selected = match app.route {
        Route::Home => Some(0),
        Route::Practical(_) => Some(1),
        Route::About => Some(2),
        Route::NotFound(_) => None,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the "go to" prompt while it is open, otherwise any temporary
/// status message, otherwise the breadcrumb and context-sensitive controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if app.goto_active {
        let line = Line::from(vec![
            Span::styled(" Go to: ", app.theme.header),
            Span::raw(format!("{}_", app.goto_text)),
            Span::styled(
                "  (id, /practical/<id>, /about, /)  Enter:go Esc:cancel",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.run.display_open() {
        "↑↓:scroll Esc:close q:close"
    } else {
        match app.route {
            Route::Home => "↑↓:select Enter:open 1-0:practical ::go to ?:help q:quit",
            Route::Practical(_) => "Tab:theory/code c:copy r:run n/p:next/prev ?:help q:quit",
            Route::About | Route::NotFound(_) => "h:home 1-0:practical ::go to ?:help q:quit",
        }
    };

    let status = format!(" {} | {}", app.breadcrumb(), controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current page.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Navigation"),
        Line::from("  h / Home    Home page"),
        Line::from("  a           About page"),
        Line::from("  1-9, 0      Open practical (0 = 10)"),
        Line::from("  n / p       Next / previous practical"),
        Line::from("  : or /      Go to a path or id"),
        Line::from("  Esc         Close output / go back"),
        Line::from(""),
        section(" Practical"),
        Line::from("  Tab         Switch Theory / Code"),
        Line::from("  ↑/↓ j/k     Scroll"),
        Line::from("  PgUp/PgDn   Scroll a page"),
        Line::from("  c           Copy code"),
        Line::from("  r           Run code"),
        Line::from("  L           Toggle line numbers"),
        Line::from(""),
        section(" General"),
        Line::from("  t         Toggle light/dark"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Responsive to terminal size
    let help_area = centered(
        area,
        44u16.min(area.width.saturating_sub(4)),
        25u16.min(area.height.saturating_sub(2)),
    );

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::ui::test_support::{contains, draw};
    use crate::ui::Theme;

    #[test]
    fn test_header_names_current_practical() {
        let mut app = App::new(Box::new(MemoryClipboard::new()), Theme::dark());
        app.navigate("10");
        let buffer = draw(80, 1, |frame, area| render_header(frame, &app, area));
        assert!(contains(&buffer, "Practical 10: Edge Detection"));
        assert!(contains(&buffer, "dark mode"));
    }

    #[test]
    fn test_status_bar_shows_prompt() {
        let mut app = App::new(Box::new(MemoryClipboard::new()), Theme::dark());
        app.start_goto();
        app.goto_push('4');
        let buffer = draw(100, 1, |frame, area| render_status_bar(frame, &app, area));
        assert!(contains(&buffer, "Go to: 4_"));
    }
}
