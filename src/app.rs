//! Application state and navigation logic.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::content::{
    catalog, resolve, resolve_outputs, resolve_str, OutputLookup, PracticalId, PracticalRecord,
};
use crate::timers::{CopyFeedback, RunControl};
use crate::ui::Theme;

/// How long a status bar message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// A navigable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page listing every practical.
    Home,
    /// One practical.
    Practical(PracticalId),
    /// Project overview and credits.
    About,
    /// A request that did not resolve; keeps the raw parameter for display.
    NotFound(String),
}

impl Route {
    /// Parse a path such as `/practical/3`, `practical/3`, `3`, `/about` or `/`.
    ///
    /// Anything that names a practical but does not resolve, and any
    /// unknown path, becomes [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);

        match trimmed {
            "" | "home" => Route::Home,
            "about" => Route::About,
            _ => {
                let param = trimmed.strip_prefix("practical/").unwrap_or(trimmed);
                match resolve_str(param) {
                    Ok(record) => Route::Practical(record.id),
                    Err(_) => Route::NotFound(param.to_string()),
                }
            }
        }
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Practical(id) => format!("/practical/{}", id),
            Route::About => "/about".to_string(),
            Route::NotFound(raw) => format!("/practical/{}", raw),
        }
    }
}

/// Tab within a practical page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PracticalTab {
    #[default]
    Theory,
    Code,
}

impl PracticalTab {
    pub fn next(self) -> Self {
        match self {
            PracticalTab::Theory => PracticalTab::Code,
            PracticalTab::Code => PracticalTab::Theory,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PracticalTab::Theory => "Theory",
            PracticalTab::Code => "Code",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub route: Route,
    pub tab: PracticalTab,
    pub show_help: bool,

    // Navigation state
    pub selected_index: usize,
    pub scroll: u16,
    pub output_scroll: u16,

    // "Go to" prompt
    pub goto_active: bool,
    pub goto_text: String,

    // Code block
    pub show_line_numbers: bool,
    pub copy: CopyFeedback,
    clipboard: Box<dyn Clipboard>,

    // Simulated run
    pub run: RunControl,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App on the home page.
    pub fn new(clipboard: Box<dyn Clipboard>, theme: Theme) -> Self {
        Self {
            running: true,
            route: Route::Home,
            tab: PracticalTab::default(),
            show_help: false,
            selected_index: 0,
            scroll: 0,
            output_scroll: 0,
            goto_active: false,
            goto_text: String::new(),
            show_line_numbers: true,
            copy: CopyFeedback::new(),
            clipboard,
            run: RunControl::new(),
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the clipboard backend.
    pub fn clipboard_description(&self) -> &str {
        self.clipboard.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// The practical on screen, if the current route is a practical.
    pub fn current_practical(&self) -> Option<&'static PracticalRecord> {
        match self.route {
            Route::Practical(id) => resolve(id).ok(),
            _ => None,
        }
    }

    /// Navigate to a route.
    ///
    /// Leaving a page releases its pending copy and run timers so they never
    /// fire against a view that is gone.
    pub fn go(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.copy.cancel();
        self.run.cancel();
        self.tab = PracticalTab::default();
        self.scroll = 0;
        self.output_scroll = 0;

        match &route {
            Route::NotFound(raw) => info!(requested = %raw, "practical not found"),
            _ => info!(path = %route.path(), "navigate"),
        }
        if let Route::Practical(id) = route {
            self.selected_index = id.index();
        }
        self.route = route;
    }

    /// Navigate to a raw path or route parameter.
    pub fn navigate(&mut self, path: &str) {
        self.go(Route::parse(path));
    }

    pub fn open_practical(&mut self, id: PracticalId) {
        self.go(Route::Practical(id));
    }

    pub fn go_home(&mut self) {
        self.go(Route::Home);
    }

    pub fn go_about(&mut self) {
        self.go(Route::About);
    }

    /// Esc/Backspace: close the output first, then return home.
    pub fn go_back(&mut self) {
        if self.run.display_open() {
            self.close_output();
            return;
        }
        self.go_home();
    }

    /// Open the following practical (wraps around).
    pub fn next_practical(&mut self) {
        let id = match self.route {
            Route::Practical(id) => id.next(),
            _ => self.selected_id(),
        };
        self.open_practical(id);
    }

    /// Open the preceding practical (wraps around).
    pub fn prev_practical(&mut self) {
        let id = match self.route {
            Route::Practical(id) => id.prev(),
            _ => self.selected_id(),
        };
        self.open_practical(id);
    }

    /// The practical highlighted in the home list.
    pub fn selected_id(&self) -> PracticalId {
        PracticalId::all()
            .nth(self.selected_index)
            .unwrap_or(PracticalId::LAST)
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let max = catalog().len().saturating_sub(1);
        self.selected_index = (self.selected_index + n).min(max);
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = catalog().len().saturating_sub(1);
    }

    /// Open the practical highlighted in the home list.
    pub fn open_selected(&mut self) {
        let id = self.selected_id();
        self.open_practical(id);
    }

    /// Switch between the Theory and Code tabs.
    pub fn switch_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    pub fn set_tab(&mut self, tab: PracticalTab) {
        if self.tab != tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self, n: u16) {
        if self.run.display_open() {
            self.output_scroll = self.output_scroll.saturating_add(n);
        } else {
            self.scroll = self.scroll.saturating_add(n);
        }
    }

    pub fn scroll_up(&mut self, n: u16) {
        if self.run.display_open() {
            self.output_scroll = self.output_scroll.saturating_sub(n);
        } else {
            self.scroll = self.scroll.saturating_sub(n);
        }
    }

    /// Copy the current practical's code to the clipboard.
    ///
    /// Failures are kept on [`App::copy`] and logged; they never propagate.
    pub fn copy_code(&mut self, now: Instant) {
        let Some(practical) = self.current_practical() else {
            return;
        };
        if self.copy.copy(self.clipboard.as_mut(), practical.code, now) {
            self.set_status_message(format!("Copied Practical {} code", practical.id));
        }
    }

    /// Start the simulated run for the current practical.
    ///
    /// Ignored while a run is already in progress.
    pub fn trigger_run(&mut self, now: Instant) {
        let Some(practical) = self.current_practical() else {
            return;
        };
        if self.tab != PracticalTab::Code {
            self.set_tab(PracticalTab::Code);
        }
        if self.run.trigger(now) {
            info!(practical = %practical.id, "run started");
        } else {
            debug!(practical = %practical.id, "run already in progress");
        }
    }

    /// Advance timers. Call once per event loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if self.copy.tick(now) {
            debug!("copy feedback cleared");
        }
        if self.run.tick(now) {
            self.output_scroll = 0;
            if let Route::Practical(id) = self.route {
                let images = resolve_outputs(id).bundle().map_or(0, |b| b.images.len());
                info!(practical = %id, images, "run finished");
            }
        }
    }

    /// The output to display, once a run has finished.
    ///
    /// The output table is only consulted here, never before a run.
    pub fn output(&self) -> Option<(PracticalId, OutputLookup)> {
        match self.route {
            Route::Practical(id) if self.run.display_open() => Some((id, resolve_outputs(id))),
            _ => None,
        }
    }

    pub fn close_output(&mut self) {
        self.run.close_display();
        self.output_scroll = 0;
    }

    /// Switch between light and dark mode.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.set_status_message(format!("Theme: {}", self.theme.mode.label()));
    }

    pub fn toggle_line_numbers(&mut self) {
        self.show_line_numbers = !self.show_line_numbers;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Open the "go to" prompt.
    pub fn start_goto(&mut self) {
        self.goto_active = true;
        self.goto_text.clear();
    }

    /// Close the prompt without navigating.
    pub fn cancel_goto(&mut self) {
        self.goto_active = false;
        self.goto_text.clear();
    }

    pub fn goto_push(&mut self, c: char) {
        self.goto_text.push(c);
    }

    pub fn goto_pop(&mut self) {
        self.goto_text.pop();
    }

    /// Navigate to the text typed into the prompt.
    pub fn submit_goto(&mut self) {
        let path = std::mem::take(&mut self.goto_text);
        self.goto_active = false;
        self.navigate(&path);
    }

    /// Breadcrumb shown in the status bar.
    pub fn breadcrumb(&self) -> String {
        match &self.route {
            Route::Home => "Home".to_string(),
            Route::About => "Home > About".to_string(),
            Route::Practical(id) => format!("Home > Practical {} > {}", id, self.tab.label()),
            Route::NotFound(_) => "Home > Not Found".to_string(),
        }
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::timers::{COPY_FEEDBACK_DURATION, RUN_DELAY};

    fn app_with(clipboard: MemoryClipboard) -> App {
        App::new(Box::new(clipboard), Theme::dark())
    }

    fn id(n: u8) -> PracticalId {
        PracticalId::new(n).unwrap()
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/practical/3"), Route::Practical(id(3)));
        assert_eq!(Route::parse("practical/10"), Route::Practical(id(10)));
        assert_eq!(Route::parse(" 7 "), Route::Practical(id(7)));
        assert_eq!(Route::parse("/practical/11"), Route::NotFound("11".to_string()));
        assert_eq!(Route::parse("/practical/abc"), Route::NotFound("abc".to_string()));
        assert_eq!(Route::parse("/nowhere"), Route::NotFound("nowhere".to_string()));
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in [Route::Home, Route::About, Route::Practical(id(4))] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_navigate_to_invalid_id_shows_not_found() {
        let mut app = app_with(MemoryClipboard::new());
        app.navigate("11");
        assert_eq!(app.route, Route::NotFound("11".to_string()));
        assert!(app.current_practical().is_none());
        assert!(app.output().is_none());
    }

    #[test]
    fn test_navigate_to_practical() {
        let mut app = app_with(MemoryClipboard::new());
        app.navigate("/practical/3");
        let practical = app.current_practical().unwrap();
        assert_eq!(practical.title, "Linear Convolution");
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.breadcrumb(), "Home > Practical 3 > Theory");
    }

    #[test]
    fn test_copy_uses_exact_source() {
        let clipboard = MemoryClipboard::new();
        let mut app = app_with(clipboard.clone());
        app.open_practical(id(8));
        let now = Instant::now();

        app.copy_code(now);
        assert_eq!(clipboard.last().as_deref(), Some(app.current_practical().unwrap().code));
        assert!(app.copy.is_active());

        app.tick(now + COPY_FEEDBACK_DURATION);
        assert!(!app.copy.is_active());
    }

    #[test]
    fn test_copy_failure_is_local() {
        let mut app = app_with(MemoryClipboard::failing());
        app.open_practical(id(1));
        app.copy_code(Instant::now());
        assert!(!app.copy.is_active());
        assert!(app.copy.last_error().is_some());
        assert!(app.running);
    }

    #[test]
    fn test_copy_outside_practical_is_ignored() {
        let clipboard = MemoryClipboard::new();
        let mut app = app_with(clipboard.clone());
        app.copy_code(Instant::now());
        assert_eq!(clipboard.write_count(), 0);
    }

    #[test]
    fn test_run_reveals_output_after_delay() {
        let mut app = app_with(MemoryClipboard::new());
        app.open_practical(id(9));
        let t0 = Instant::now();

        app.trigger_run(t0);
        assert_eq!(app.tab, PracticalTab::Code);
        assert!(app.run.is_running());
        assert!(app.output().is_none());

        app.tick(t0 + Duration::from_millis(1000));
        assert!(app.output().is_none());

        app.tick(t0 + RUN_DELAY);
        let (practical, lookup) = app.output().expect("output is displayed");
        assert_eq!(practical, id(9));
        let captions: Vec<&str> =
            lookup.bundle().unwrap().images.iter().map(|e| e.caption).collect();
        assert_eq!(captions.len(), 3);
        assert_eq!(&captions[1..], ["Dilation (Rectangular)", "Erosion (Rectangular)"]);

        app.go_back();
        assert!(app.output().is_none());
        assert_eq!(app.route, Route::Practical(id(9)));
    }

    #[test]
    fn test_run_without_bundle_shows_empty() {
        let mut app = app_with(MemoryClipboard::new());
        app.open_practical(id(8));
        let t0 = Instant::now();
        app.trigger_run(t0);
        app.tick(t0 + RUN_DELAY);
        assert_eq!(app.output(), Some((id(8), OutputLookup::Empty)));
    }

    #[test]
    fn test_navigation_cancels_pending_timers() {
        let mut app = app_with(MemoryClipboard::new());
        app.open_practical(id(2));
        let t0 = Instant::now();
        app.copy_code(t0);
        app.trigger_run(t0);

        app.next_practical();
        assert_eq!(app.route, Route::Practical(id(3)));
        assert!(!app.run.is_running());
        assert!(!app.copy.is_active());

        app.tick(t0 + RUN_DELAY);
        assert!(app.output().is_none());
    }

    #[test]
    fn test_home_selection_and_wrapping() {
        let mut app = app_with(MemoryClipboard::new());
        app.select_last();
        app.select_next_n(5);
        assert_eq!(app.selected_id(), id(10));

        app.open_selected();
        app.next_practical();
        assert_eq!(app.route, Route::Practical(id(1)));
        app.prev_practical();
        assert_eq!(app.route, Route::Practical(id(10)));
    }

    #[test]
    fn test_goto_prompt() {
        let mut app = app_with(MemoryClipboard::new());
        app.start_goto();
        for c in "/practical/5".chars() {
            app.goto_push(c);
        }
        app.submit_goto();
        assert!(!app.goto_active);
        assert!(app.goto_text.is_empty());
        assert_eq!(app.route, Route::Practical(id(5)));

        app.start_goto();
        app.goto_push('0');
        app.submit_goto();
        assert_eq!(app.route, Route::NotFound("0".to_string()));
    }

    #[test]
    fn test_theme_toggle_is_live() {
        let mut app = app_with(MemoryClipboard::new());
        let before = app.theme.syntax;
        app.toggle_theme();
        assert_ne!(app.theme.syntax, before);
        assert_eq!(app.get_status_message(), Some("Theme: light"));
    }
}
