// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! # popkit Theming & Configuration
//!
//! The stable class-name contract popups are styled through, the typed
//! configuration dimensions behind it, and the configuration layer that
//! supplies defaults.
//!
//! ## Overview
//!
//! - **[ThemeName](classes::ThemeName)**: Free-form theme names (`light` and `dark` are advisory)
//! - **[Position](classes::Position)**: The four screen corners
//! - **[Animation](classes::Animation)**: Entrance animations (`bottom`, `top`)
//! - **[TagMode](classes::TagMode)**: Replace or accumulate dimension classes
//! - **[PopupConfig](config::PopupConfig)**: Defaults from code, environment variables and TOML files
//!
//! ## Quick Start
//!
//! ```rust
//! use popkit_theme::classes::Position;
//!
//! let position: Position = "top left".parse().unwrap();
//! assert_eq!(position.class_name(), "popup-top-left");
//! assert!("top-left".parse::<Position>().is_err());
//! ```

/// Class names and typed dimensions.
pub mod classes;

/// Configuration from code, environment variables and files.
pub mod config;

/// Error types.
pub mod error;

pub use classes::{Animation, Position, TagMode, ThemeName};
pub use config::PopupConfig;
pub use error::{ConfigError, PopupError};
