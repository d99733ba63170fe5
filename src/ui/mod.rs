//! Terminal rendering.
//!
//! Every page renders into the content area between the header/navigation
//! rows and the status bar. Overlays (output modal, help) are drawn last on
//! top of the whole frame.

pub mod about;
pub mod code;
pub mod common;
pub mod home;
pub mod not_found;
pub mod output;
pub mod practical;
pub mod theme;

pub use theme::{Theme, ThemeMode};

use ratatui::layout::Rect;

/// Center a `width` x `height` rectangle inside `area`, shrinking to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    /// Draw into an in-memory terminal and return the buffer.
    pub fn draw<F>(width: u16, height: u16, render: F) -> Buffer
    where
        F: FnOnce(&mut ratatui::Frame, Rect),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area)
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// All rendered text, one string per row.
    pub fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    pub fn contains(buffer: &Buffer, needle: &str) -> bool {
        rows(buffer).iter().any(|row| row.contains(needle))
    }
}
