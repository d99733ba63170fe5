use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

use dip_docs::app::{App, Route};
use dip_docs::clipboard::Osc52Clipboard;
use dip_docs::export::export_to_file;
use dip_docs::settings::{Settings, ThemePreference};
use dip_docs::ui::{self, Theme};
use dip_docs::{events, logging};

#[derive(Parser, Debug)]
#[command(name = "dip-docs")]
#[command(about = "Browse the Digital Image Processing practicals in the terminal")]
struct Args {
    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display mode
    #[arg(long, value_enum)]
    theme: Option<ThemePreference>,

    /// Hide line numbers in code blocks
    #[arg(long)]
    no_line_numbers: bool,

    /// Practical to open on start (1-10)
    #[arg(short, long)]
    practical: Option<String>,

    /// Event poll interval in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Export the practical given by --practical to a JSON file and exit
    #[arg(short, long, requires = "practical")]
    export: Option<PathBuf>,
}

impl Args {
    /// Command-line flags take precedence over the settings file and environment.
    fn apply(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.no_line_numbers {
            settings.show_line_numbers = false;
        }
        if let Some(tick_rate) = self.tick_rate {
            settings.tick_rate_ms = tick_rate;
        }
        if let Some(ref log_file) = self.log_file {
            settings.log_file = Some(log_file.clone());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply(&mut settings);

    if let Some(ref log_file) = settings.log_file {
        logging::init(log_file, &settings.log_level)?;
    }

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        let requested = args.practical.as_deref().unwrap_or_default();
        export_to_file(requested, export_path)?;
        println!("Exported practical {} to: {}", requested.trim(), export_path.display());
        return Ok(());
    }

    run_tui(&settings, args.practical.as_deref())
}

/// Run the TUI, optionally starting on a practical
fn run_tui(settings: &Settings, start: Option<&str>) -> Result<()> {
    // Detect the background before raw mode takes over the terminal
    let theme = Theme::from_preference(settings.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(Box::new(Osc52Clipboard::stdout()), theme);
    app.show_line_numbers = settings.show_line_numbers;
    if let Some(start) = start {
        app.navigate(start);
    }
    tracing::info!(
        theme = app.theme.mode.label(),
        clipboard = app.clipboard_description(),
        "starting"
    );

    // Run the main loop
    let result = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(settings.tick_rate_ms.max(1)),
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        app.tick(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| {
                let area = frame.area();

                // Check for minimum terminal size
                if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                    let msg = format!(
                        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                    );
                    let paragraph = ratatui::widgets::Paragraph::new(msg)
                        .alignment(ratatui::layout::Alignment::Center)
                        .style(ratatui::style::Style::default().fg(app.theme.error));
                    let centered = ui::centered(area, area.width, 5);
                    frame.render_widget(paragraph, centered);
                    return;
                }

                let chunks = Layout::vertical([
                    Constraint::Length(1), // Header bar
                    Constraint::Length(1), // Navigation tabs
                    Constraint::Min(8),    // Page
                    Constraint::Length(1), // Status bar
                ])
                .split(area);

                ui::common::render_header(frame, app, chunks[0]);
                ui::common::render_tabs(frame, app, chunks[1]);

                // Render current page
                match (&app.route, app.current_practical()) {
                    (Route::Practical(_), Some(practical)) => {
                        ui::practical::render(frame, app, practical, chunks[2])
                    }
                    (Route::About, _) => ui::about::render(frame, app, chunks[2]),
                    (Route::NotFound(requested), _) => {
                        ui::not_found::render(frame, app, requested, chunks[2])
                    }
                    _ => ui::home::render(frame, app, chunks[2]),
                }

                ui::common::render_status_bar(frame, app, chunks[3]);

                // Render output overlay once a run has finished
                if let Some((id, lookup)) = app.output() {
                    ui::output::render_overlay(frame, app, id, lookup, area);
                }

                // Render help overlay if active
                if app.show_help {
                    ui::common::render_help(frame, app, area);
                }
            })
            .context("failed to draw frame")?;

        // Poll for events; the timeout doubles as the timer resolution
        if let Some(event) = events::poll_event(tick_rate)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}
