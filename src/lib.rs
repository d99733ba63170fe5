// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # dip-docs
//!
//! A terminal browser for the Digital Image Processing (DIP) practicals: ten
//! Scilab exercises, each with a title, description, theory, source code and
//! the output the code produces.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │ events  │───▶│   app    │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (input) │    │ (state)  │    │(render) │    │         │ │
//! │  └─────────┘    └────┬─────┘    └────┬────┘    └─────────┘ │
//! │                      │               │                      │
//! │            ┌─────────┼─────────┐     ▼                      │
//! │            ▼         ▼         ▼  highlight                 │
//! │        content    timers   clipboard                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`content`]**: The practical catalog, the output table, and the
//!   resolvers that turn a route parameter into a record or a not-found
//! - **[`highlight`]**: MATLAB-family tokenizer and the [`CodeBlock`] renderer
//! - **[`timers`]**: Copy feedback and simulated run state machines
//! - **[`clipboard`]**: The [`Clipboard`] trait with OSC 52 and in-memory backends
//! - **[`app`]**: Routes, tabs, scrolling and the "go to" prompt
//! - **[`ui`]**: Pages, overlays and themes using ratatui
//! - **[`settings`]** and **[`logging`]**: Runtime configuration and file logging
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Browse from the home page
//! dip-docs
//!
//! # Open a practical directly, in light mode
//! dip-docs --practical 3 --theme light
//!
//! # Export a practical as JSON and exit
//! dip-docs --practical 9 --export practical9.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use dip_docs::{resolve_outputs, resolve_str};
//!
//! let practical = resolve_str("3").unwrap();
//! assert_eq!(practical.title, "Linear Convolution");
//! assert!(practical.code.contains("y(i + j - 1)"));
//!
//! assert!(resolve_str("11").is_err());
//! assert_eq!(resolve_outputs(practical.id).bundle().map(|b| b.images.len()), Some(1));
//! ```
//!
//! ### Driving the app without a terminal
//!
//! ```
//! use std::time::Instant;
//! use dip_docs::{App, MemoryClipboard, Route, Theme, RUN_DELAY};
//!
//! let clipboard = MemoryClipboard::new();
//! let mut app = App::new(Box::new(clipboard.clone()), Theme::dark());
//! app.navigate("/practical/9");
//!
//! let t0 = Instant::now();
//! app.copy_code(t0);
//! assert_eq!(clipboard.last().as_deref(), Some(app.current_practical().unwrap().code));
//!
//! app.trigger_run(t0);
//! app.tick(t0 + RUN_DELAY);
//! let (_, output) = app.output().unwrap();
//! assert_eq!(output.bundle().unwrap().images.len(), 3);
//! ```

pub mod app;
pub mod clipboard;
pub mod content;
pub mod events;
pub mod export;
pub mod highlight;
pub mod logging;
pub mod settings;
pub mod timers;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, PracticalTab, Route};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, Osc52Clipboard};
pub use content::{
    catalog, resolve, resolve_outputs, resolve_str, OutputBundle, OutputEntry, OutputLookup,
    PracticalId, PracticalRecord, ResolveError,
};
pub use highlight::{tokenize, CodeBlock, Language, SyntaxPalette, Token, TokenKind};
pub use settings::{Settings, ThemePreference};
pub use timers::{CopyFeedback, RunControl, RunPhase, COPY_FEEDBACK_DURATION, RUN_DELAY};
pub use ui::{Theme, ThemeMode};
