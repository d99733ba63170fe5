//! Code block rendering.
//!
//! Draws a [`CodeBlock`] inside a bordered panel. The title bar carries the
//! block title and language label, the top-right corner the copy control,
//! and the bottom-right corner the run control.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::{PracticalRecord, CODE_LANGUAGE, CODE_TITLE};
use crate::highlight::CodeBlock;

/// Build the code block for a practical with the current display options.
pub fn code_block(app: &App, practical: &'static PracticalRecord) -> CodeBlock<'static> {
    CodeBlock::new(practical.code, CODE_LANGUAGE)
        .title(CODE_TITLE)
        .show_line_numbers(app.show_line_numbers)
}

/// Copy control label: a check mark while the copy feedback is active.
pub fn copy_label(app: &App) -> Span<'static> {
    if app.copy.is_active() {
        Span::styled(
            " ✓ Copied ",
            Style::default().fg(app.theme.success).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" c:Copy ", app.theme.muted)
    }
}

/// Run control label, disabled-looking while a run is in progress.
pub fn run_label(app: &App) -> Span<'static> {
    let label = format!(" r:{} ", app.run.label());
    if app.run.is_running() {
        Span::styled(label, Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC))
    } else {
        Span::styled(label, Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD))
    }
}

/// Render a practical's code.
pub fn render(frame: &mut Frame, app: &App, practical: &'static PracticalRecord, area: Rect) {
    let palette = app.theme.syntax;
    let block = code_block(app, practical);

    let mut panel = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(palette.background))
        .title_top(Line::from(copy_label(app)).alignment(Alignment::Right))
        .title_bottom(Line::from(run_label(app)).alignment(Alignment::Right));
    if let Some(header) = block.header(&palette) {
        panel = panel.title(header);
    }

    let paragraph = Paragraph::new(block.lines(&palette))
        .block(panel)
        .scroll((app.scroll, 0));

    frame.render_widget(paragraph, area);
}
