use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, Route};
use crate::content::PracticalId;

/// Lines moved by PgUp/PgDn.
const PAGE: u16 = 10;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    handle_key_event_at(app, key, Instant::now());
}

/// Handle a key event, using `now` as the clock for timed actions.
pub fn handle_key_event_at(app: &mut App, key: KeyEvent, now: Instant) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If the output overlay is shown, handle overlay-specific keys
    if app.run.display_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                app.close_output();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
            KeyCode::PageUp => app.scroll_up(PAGE),
            KeyCode::PageDown => app.scroll_down(PAGE),
            _ => {}
        }
        return;
    }

    // If the "go to" prompt is active, handle text input
    if app.goto_active {
        handle_goto_input(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.quit();
        }
        return;
    }

    let on_home = app.route == Route::Home;

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Pages
        KeyCode::Char('h') | KeyCode::Home if !on_home => app.go_home(),
        KeyCode::Char('a') => app.go_about(),
        KeyCode::Char(c @ '0'..='9') => {
            let number = c.to_digit(10).map_or(0, |d| if d == 0 { 10 } else { d as u8 });
            if let Some(id) = PracticalId::new(number) {
                app.open_practical(id);
            }
        }
        KeyCode::Char('n') => app.next_practical(),
        KeyCode::Char('p') => app.prev_practical(),
        KeyCode::Char(':') | KeyCode::Char('/') => app.start_goto(),

        // Home list
        KeyCode::Up | KeyCode::Char('k') if on_home => app.select_prev_n(1),
        KeyCode::Down | KeyCode::Char('j') if on_home => app.select_next_n(1),
        KeyCode::PageUp if on_home => app.select_prev_n(PAGE as usize),
        KeyCode::PageDown if on_home => app.select_next_n(PAGE as usize),
        KeyCode::Home if on_home => app.select_first(),
        KeyCode::End if on_home => app.select_last(),
        KeyCode::Enter if on_home => app.open_selected(),

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),

        // Practical page
        KeyCode::Tab | KeyCode::BackTab => app.switch_tab(),
        KeyCode::Char('c') => app.copy_code(now),
        KeyCode::Char('r') => app.trigger_run(now),
        KeyCode::Char('L') => app.toggle_line_numbers(),

        // Go back (Esc and Backspace)
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Display
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the "go to" prompt is active
fn handle_goto_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_goto(),
        KeyCode::Esc => app.cancel_goto(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cancel_goto();
        }
        KeyCode::Backspace => {
            if app.goto_text.is_empty() {
                app.cancel_goto();
            } else {
                app.goto_pop();
            }
        }
        KeyCode::Char(c) => app.goto_push(c),
        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let on_home = app.route == Route::Home;
    match mouse.kind {
        MouseEventKind::ScrollUp if on_home => app.select_prev_n(1),
        MouseEventKind::ScrollDown if on_home => app.select_next_n(1),
        MouseEventKind::ScrollUp => app.scroll_up(3),
        MouseEventKind::ScrollDown => app.scroll_down(3),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PracticalTab;
    use crate::clipboard::MemoryClipboard;
    use crate::timers::RUN_DELAY;
    use crate::ui::Theme;

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_key_event_at(app, KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn app() -> App {
        App::new(Box::new(MemoryClipboard::new()), Theme::dark())
    }

    #[test]
    fn test_digit_shortcuts() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('7'), now);
        assert_eq!(app.route, Route::Practical(PracticalId::new(7).unwrap()));
        press(&mut app, KeyCode::Char('0'), now);
        assert_eq!(app.route, Route::Practical(PracticalId::new(10).unwrap()));
    }

    #[test]
    fn test_home_list_navigation() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.route, Route::Practical(PracticalId::new(3).unwrap()));

        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_goto_prompt_typing() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char(':'), now);
        for c in "12".chars() {
            press(&mut app, KeyCode::Char(c), now);
        }
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.goto_text, "11");
        // Keys are text while the prompt is open
        assert!(app.running);

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.route, Route::NotFound("11".to_string()));
    }

    #[test]
    fn test_run_and_close_output() {
        let mut app = app();
        let t0 = Instant::now();
        press(&mut app, KeyCode::Char('9'), t0);
        press(&mut app, KeyCode::Char('r'), t0);
        assert_eq!(app.tab, PracticalTab::Code);
        assert!(app.run.is_running());

        app.tick(t0 + RUN_DELAY);
        assert!(app.output().is_some());

        // q closes the overlay rather than quitting
        press(&mut app, KeyCode::Char('q'), t0 + RUN_DELAY);
        assert!(app.output().is_none());
        assert!(app.running);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('?'), now);
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.show_help);
        assert!(app.running);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.running);
    }
}
