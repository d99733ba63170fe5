//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional config file,
//! then `DIPDOC_*` environment variables. Command-line flags are applied on
//! top by the binary. None of these affect practical content, only how it
//! is presented.
//!
//! ```toml
//! theme = "dark"
//! show_line_numbers = true
//! tick_rate_ms = 100
//! log_file = "dip-docs.log"
//! log_level = "debug"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Which display mode to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Light,
    Dark,
}

/// Presentation settings for the TUI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    pub show_line_numbers: bool,
    /// Event poll interval in milliseconds; also the timer resolution.
    pub tick_rate_ms: u64,
    /// Log destination. Logging is off when unset.
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            show_line_numbers: true,
            tick_rate_ms: 100,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

/// Prefix for environment overrides, e.g. `DIPDOC_THEME=light`.
pub const ENV_PREFIX: &str = "DIPDOC";

impl Settings {
    /// Load settings from an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(|config| config.try_deserialize())
            .with_context(|| match path {
                Some(path) => format!("failed to load settings from {}", path.display()),
                None => "failed to load settings from environment".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemePreference::Auto);
        assert!(settings.show_line_numbers);
        assert_eq!(settings.tick_rate_ms, 100);
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
theme = "light"
show_line_numbers = false
log_file = "/tmp/dip-docs.log"
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.theme, ThemePreference::Light);
        assert!(!settings.show_line_numbers);
        assert_eq!(settings.log_file.as_deref(), Some(Path::new("/tmp/dip-docs.log")));
        // Unset keys keep their defaults.
        assert_eq!(settings.tick_rate_ms, 100);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "theme = \"sepia\"").unwrap();

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to load settings"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("missing.toml");
        assert!(Settings::load(Some(&path)).is_err());
    }
}
