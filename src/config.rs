use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub tui: TuiConfig,
}

/// Glyphs and coloring for the console board renderer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub black_char: String,
    pub white_char: String,
    pub empty_char: String,
    /// Colorize console output with ANSI escapes.
    pub color: bool,
}

/// Geometry of the terminal UI board.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Width of one board cell in terminal columns.
    pub tile_width: u16,
    /// Height of one board cell in terminal rows.
    pub tile_height: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display: DisplayConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            black_char: "\u{25cb}".to_string(), // ○
            white_char: "\u{25cf}".to_string(), // ●
            empty_char: "*".to_string(),
            color: false,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        TuiConfig {
            tile_width: 4,
            tile_height: 2,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, glyph) in [
            ("display.black_char", &self.display.black_char),
            ("display.white_char", &self.display.white_char),
            ("display.empty_char", &self.display.empty_char),
        ] {
            if glyph.chars().count() != 1 {
                return Err(ConfigError::Validation(format!(
                    "{} must be a single character",
                    name
                )));
            }
        }
        if self.tui.tile_width == 0 {
            return Err(ConfigError::Validation(
                "tui.tile_width must be > 0".into(),
            ));
        }
        if self.tui.tile_height == 0 {
            return Err(ConfigError::Validation(
                "tui.tile_height must be > 0".into(),
            ));
        }
        Ok(())
    }
}
