// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Popup Configuration
//!
//! Fallback values used by the aggregate `configure` call, plus the
//! [TagMode] policy, loadable from environment variables and TOML files.
//!
//! ## Environment Variables
//!
//! - `POPKIT_CONFIG`: Path to a TOML configuration file (applied first)
//! - `POPKIT_THEME`: Default theme name
//! - `POPKIT_SIDE`: Default side (`top left`, `top right`, `bottom right`, `bottom left`)
//! - `POPKIT_ANIMATION`: Default animation (`bottom` or `top`)
//! - `POPKIT_TAG_MODE`: `replace` or `accumulate`
//!
//! ## Configuration File Format
//!
//! ```toml
//! [popup]
//! theme = "dark"
//! side = "bottom left"
//! animation = "bottom"
//! tag_mode = "replace"
//! ```
//!
//! Missing keys keep their defaults.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::classes::{Animation, Position, TagMode, ThemeName};
use crate::error::ConfigError;

/// Environment variable holding a configuration file path.
pub const ENV_CONFIG: &str = "POPKIT_CONFIG";
/// Environment variable overriding the default theme.
pub const ENV_THEME: &str = "POPKIT_THEME";
/// Environment variable overriding the default side.
pub const ENV_SIDE: &str = "POPKIT_SIDE";
/// Environment variable overriding the default animation.
pub const ENV_ANIMATION: &str = "POPKIT_ANIMATION";
/// Environment variable overriding the tag mode.
pub const ENV_TAG_MODE: &str = "POPKIT_TAG_MODE";

/// Defaults and policies injected into popup builders.
///
/// The default configuration is theme `light`, side `top right`, animation
/// `top` and [TagMode::Accumulate].
///
/// ```rust
/// use popkit_theme::classes::{Animation, Position, TagMode};
/// use popkit_theme::config::PopupConfig;
///
/// let config = PopupConfig::new()
///     .with_theme("dark")
///     .with_side(Position::BottomLeft)
///     .with_animation(Animation::Bottom)
///     .with_tag_mode(TagMode::Replace);
///
/// assert_eq!(config.theme.as_str(), "dark");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupConfig {
    /// Theme applied when settings carry none.
    pub theme: ThemeName,
    /// Side applied when settings carry none.
    pub side: Position,
    /// Animation applied when settings carry none.
    pub animation: Animation,
    /// Replace or accumulate dimension classes.
    pub tag_mode: TagMode,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    popup: PopupSection,
}

#[derive(Debug, Default, Deserialize)]
struct PopupSection {
    theme: Option<String>,
    side: Option<String>,
    animation: Option<String>,
    tag_mode: Option<String>,
}

impl PopupConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default theme.
    pub fn with_theme(mut self, theme: impl Into<ThemeName>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the default side.
    pub fn with_side(mut self, side: Position) -> Self {
        self.side = side;
        self
    }

    /// Set the default animation.
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Set the tag mode.
    pub fn with_tag_mode(mut self, tag_mode: TagMode) -> Self {
        self.tag_mode = tag_mode;
        self
    }

    /// Load configuration from TOML content, on top of the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::new().merge_toml(content)
    }

    /// Load configuration from a `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::new().merge_file(path)
    }

    fn merge_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        log::info!("Loading popup config from: {:?}", path);
        self.merge_toml(&content)
    }

    fn merge_toml(mut self, content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let section = file.popup;

        if let Some(theme) = section.theme {
            self.theme = ThemeName::from(theme);
        }
        if let Some(side) = section.side {
            self.side = parse_value("side", &side)?;
        }
        if let Some(animation) = section.animation {
            self.animation = parse_value("animation", &animation)?;
        }
        if let Some(tag_mode) = section.tag_mode {
            self.tag_mode = tag_mode.parse()?;
        }

        Ok(self)
    }

    /// Create a configuration from environment variables or use defaults.
    pub fn from_env_or_default() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [PopupConfig::from_env_or_default], reading variables through `lookup`.
    ///
    /// The file named by `POPKIT_CONFIG` is applied first, then the individual
    /// variables. Invalid values are logged and skipped.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup(ENV_CONFIG) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_CONFIG, e),
            }
        }

        if let Some(theme) = lookup(ENV_THEME) {
            config.theme = ThemeName::from(theme);
        }
        if let Some(side) = lookup(ENV_SIDE) {
            match parse_value::<Position>("side", &side) {
                Ok(side) => config.side = side,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_SIDE, e),
            }
        }
        if let Some(animation) = lookup(ENV_ANIMATION) {
            match parse_value::<Animation>("animation", &animation) {
                Ok(animation) => config.animation = animation,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_ANIMATION, e),
            }
        }
        if let Some(tag_mode) = lookup(ENV_TAG_MODE) {
            match tag_mode.parse() {
                Ok(tag_mode) => config.tag_mode = tag_mode,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_TAG_MODE, e),
            }
        }

        config
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
