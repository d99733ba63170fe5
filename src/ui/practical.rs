//! Practical page rendering.
//!
//! Title and description, then a Theory/Code tab strip over the selected
//! tab's content.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, PracticalTab};
use crate::content::{paragraphs, PracticalRecord};
use crate::ui::{code, Theme};

/// Render a practical.
pub fn render(frame: &mut Frame, app: &App, practical: &'static PracticalRecord, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title + description
        Constraint::Length(1), // Tabs
        Constraint::Min(5),    // Content
    ])
    .split(area);

    let heading = vec![
        Line::from(Span::styled(
            format!("Practical {}: {}", practical.id, practical.title),
            app.theme.header,
        )),
        Line::from(Span::styled(practical.description, app.theme.muted)),
    ];
    frame.render_widget(Paragraph::new(heading).wrap(Wrap { trim: true }), chunks[0]);

    let selected = match app.tab {
        PracticalTab::Theory => 0,
        PracticalTab::Code => 1,
    };
    let tabs = Tabs::new(vec![Line::from(" Theory "), Line::from(" Code ")])
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");
    frame.render_widget(tabs, chunks[1]);

    match app.tab {
        PracticalTab::Theory => render_theory(frame, app, practical, chunks[2]),
        PracticalTab::Code => code::render(frame, app, practical, chunks[2]),
    }
}

fn render_theory(frame: &mut Frame, app: &App, practical: &'static PracticalRecord, area: Rect) {
    let block = Block::default()
        .title(" Theory ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(theory_lines(practical.theory, &app.theme))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Style theory text, one line per paragraph.
///
/// Recognizes `## ` headings, `- ` bullets, fenced blocks, and inline
/// `**bold**` and `` `code` `` spans. Fence lines themselves are hidden.
pub fn theory_lines(theory: &'static str, theme: &Theme) -> Vec<Line<'static>> {
    let base = Style::default();
    let code = Style::default().fg(theme.syntax.function);
    let mut in_fence = false;
    let mut lines = Vec::new();

    for paragraph in paragraphs(theory) {
        let trimmed = paragraph.trim_start();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            lines.push(Line::from(Span::styled(paragraph, code)));
        } else if let Some(heading) = trimmed.strip_prefix("## ") {
            lines.push(Line::from(inline_spans(heading, theme.header, code)));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            let mut spans = vec![Span::styled("  • ", Style::default().fg(theme.highlight))];
            spans.extend(inline_spans(item, base, code));
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(inline_spans(paragraph, base, code)));
        }
    }
    lines
}

/// Split a line on `**` and `` ` `` pairs. Unclosed markers are left as text.
fn inline_spans(text: &'static str, base: Style, code: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut rest = text;

    loop {
        let (start, marker, style) = match (rest.find("**"), rest.find('`')) {
            (Some(bold), Some(tick)) if tick < bold => (tick, "`", code),
            (Some(bold), _) => (bold, "**", base.add_modifier(Modifier::BOLD)),
            (None, Some(tick)) => (tick, "`", code),
            (None, None) => break,
        };
        let after = &rest[start + marker.len()..];
        let Some(end) = after.find(marker) else {
            break;
        };
        if start > 0 {
            spans.push(Span::styled(&rest[..start], base));
        }
        spans.push(Span::styled(&after[..end], style));
        rest = &after[end + marker.len()..];
    }

    if !rest.is_empty() {
        spans.push(Span::styled(rest, base));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::content::{resolve_str, PracticalId};
    use crate::ui::test_support::{contains, draw};

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_inline_markup() {
        let base = Style::default();
        let code = Style::default().fg(ratatui::style::Color::Red);
        let spans = inline_spans("use **imadd** or `imsubtract` here", base, code);

        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, ["use ", "imadd", " or ", "imsubtract", " here"]);
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[3].style, code);
    }

    #[test]
    fn test_unclosed_marker_is_literal() {
        let spans = inline_spans("a ** b", Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "a ** b");
    }

    #[test]
    fn test_headings_and_bullets() {
        let theory = "\n## Steps\n- **imadd**: brighten\n```\nx = 1\n```\n";
        let lines = theory_lines(theory, &Theme::dark());
        let texts: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(texts, ["Steps", "  • imadd: brighten", "x = 1"]);
    }

    #[test]
    fn test_theory_keeps_every_word() {
        let record = resolve_str("1").unwrap();
        let rendered: String = theory_lines(record.theory, &Theme::dark())
            .iter()
            .map(text_of)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(rendered.contains("imabsdiff: Computes the absolute difference"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn test_tabs_switch_content() {
        let mut app = App::new(Box::new(MemoryClipboard::new()), Theme::dark());
        app.open_practical(PracticalId::new(3).unwrap());
        let practical = app.current_practical().unwrap();

        let theory = draw(100, 30, |frame, area| render(frame, &app, practical, area));
        assert!(contains(&theory, "Practical 3: Linear Convolution"));
        assert!(!contains(&theory, "Scilab Code"));

        app.switch_tab();
        let code = draw(100, 30, |frame, area| render(frame, &app, practical, area));
        assert!(contains(&code, "Scilab Code"));
    }
}
