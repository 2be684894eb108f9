// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Class-Name Contract
//!
//! The stable class names an external stylesheet uses to style popups, and the
//! typed configuration dimensions that map onto them.
//!
//! | dimension   | values                                                   | class                    |
//! |-------------|----------------------------------------------------------|--------------------------|
//! | base        |                                                          | `popupjs`                |
//! | theme       | any name (`light`, `dark` are advisory)                  | `popup-theme-<name>`     |
//! | position    | `top left`, `top right`, `bottom right`, `bottom left`   | `popup-top-left`, …      |
//! | animation   | `bottom`, `top`                                          | `popup-animation-<id>`   |
//! | visibility  |                                                          | `popup-show`             |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PopupError};

/// Base class carried by every popup node.
pub const BASE: &str = "popupjs";

/// Class toggled by show/hide.
pub const SHOW: &str = "popup-show";

/// Prefix of theme classes.
pub const THEME_PREFIX: &str = "popup-theme-";

/// Prefix of animation classes.
pub const ANIMATION_PREFIX: &str = "popup-animation-";

/// A theme name. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeName(String);

impl ThemeName {
    /// The advisory light theme.
    pub const LIGHT: &'static str = "light";
    /// The advisory dark theme.
    pub const DARK: &'static str = "dark";

    /// Create a theme name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The light theme.
    pub fn light() -> Self {
        Self::new(Self::LIGHT)
    }

    /// The dark theme.
    pub fn dark() -> Self {
        Self::new(Self::DARK)
    }

    /// The raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the documented themes.
    pub fn is_builtin(&self) -> bool {
        self.0 == Self::LIGHT || self.0 == Self::DARK
    }

    /// The class this theme maps onto, e.g. `popup-theme-light`.
    pub fn class_name(&self) -> String {
        format!("{}{}", THEME_PREFIX, self.0)
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        Self::light()
    }
}

impl From<&str> for ThemeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ThemeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Screen corner a popup is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    /// `top left`
    TopLeft,
    /// `top right`
    #[default]
    TopRight,
    /// `bottom right`
    BottomRight,
    /// `bottom left`
    BottomLeft,
}

impl Position {
    /// Every position, in documentation order.
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomRight,
        Position::BottomLeft,
    ];

    /// The accepted literal, e.g. `"top left"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top left",
            Position::TopRight => "top right",
            Position::BottomRight => "bottom right",
            Position::BottomLeft => "bottom left",
        }
    }

    /// The class this position maps onto, e.g. `popup-top-left`.
    pub fn class_name(self) -> &'static str {
        match self {
            Position::TopLeft => "popup-top-left",
            Position::TopRight => "popup-top-right",
            Position::BottomRight => "popup-bottom-right",
            Position::BottomLeft => "popup-bottom-left",
        }
    }
}

impl FromStr for Position {
    type Err = PopupError;

    fn from_str(side: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == side)
            .ok_or_else(|| PopupError::invalid("Invalid side"))
    }
}

impl TryFrom<&str> for Position {
    type Error = PopupError;

    fn try_from(side: &str) -> Result<Self, Self::Error> {
        side.parse()
    }
}

impl TryFrom<String> for Position {
    type Error = PopupError;

    fn try_from(side: String) -> Result<Self, Self::Error> {
        side.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entrance animation. The keyframes themselves live in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Animation {
    /// Slide in from the bottom.
    Bottom,
    /// Slide in from the top.
    #[default]
    Top,
}

impl Animation {
    /// The keyframes id, `"bottom"` or `"top"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Animation::Bottom => "bottom",
            Animation::Top => "top",
        }
    }

    /// The class this animation maps onto, e.g. `popup-animation-top`.
    pub fn class_name(self) -> String {
        format!("{}{}", ANIMATION_PREFIX, self.as_str())
    }
}

impl FromStr for Animation {
    type Err = PopupError;

    fn from_str(keyframes_id: &str) -> Result<Self, Self::Err> {
        match keyframes_id {
            "bottom" => Ok(Animation::Bottom),
            "top" => Ok(Animation::Top),
            _ => Err(PopupError::invalid("Invalid keyframesId")),
        }
    }
}

impl TryFrom<&str> for Animation {
    type Error = PopupError;

    fn try_from(keyframes_id: &str) -> Result<Self, Self::Error> {
        keyframes_id.parse()
    }
}

impl TryFrom<String> for Animation {
    type Error = PopupError;

    fn try_from(keyframes_id: String) -> Result<Self, Self::Error> {
        keyframes_id.parse()
    }
}

impl From<Animation> for String {
    fn from(animation: Animation) -> Self {
        animation.as_str().to_string()
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to the previous class when a dimension is set again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// The previous theme/position/animation class is removed first.
    Replace,
    /// Every call adds its class and nothing is removed.
    #[default]
    Accumulate,
}

impl FromStr for TagMode {
    type Err = ConfigError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "replace" => Ok(TagMode::Replace),
            "accumulate" => Ok(TagMode::Accumulate),
            _ => Err(ConfigError::InvalidValue {
                key: "tag_mode",
                value: mode.to_string(),
            }),
        }
    }
}
