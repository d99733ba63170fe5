//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection. The
//! active theme lives on the app and can be toggled at any time; the code
//! renderer reads its [`SyntaxPalette`] from whichever theme is current.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::highlight::SyntaxPalette;
use crate::settings::ThemePreference;

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for the "copied" marker.
    pub success: Color,
    /// Color for errors and the not-found page.
    pub error: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for secondary text such as descriptions and captions.
    pub muted: Style,
    /// Style for headings.
    pub header: Style,
    /// Style for the selected row in lists.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
    /// Token colors for code blocks.
    pub syntax: SyntaxPalette,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            highlight: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            border: Color::Gray,
            muted: Style::default().fg(Color::Gray),
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
            syntax: SyntaxPalette::vs_dark(),
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            highlight: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            border: Color::DarkGray,
            muted: Style::default().fg(Color::DarkGray),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
            syntax: SyntaxPalette::vs_light(),
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured preference into a theme.
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Auto => Self::auto_detect(),
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// The opposite display mode.
    pub fn toggled(&self) -> Self {
        match self.mode {
            ThemeMode::Light => Self::dark(),
            ThemeMode::Dark => Self::light(),
        }
    }
}
