// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings accepted by [PopupBuilder::configure](crate::popup::PopupBuilder::configure).

use popkit_theme::PopupError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::style::Css;

/// The aggregate settings object.
///
/// Only `msg` is required. Dimension values are kept as strings so an invalid
/// side or animation is reported by the setter it reaches, after the
/// dimensions before it have been applied.
///
/// Conversion from a dynamic value is lenient for optional members: a
/// non-string `theme`, `side` or `animation` counts as absent, and a `css`
/// that is neither a string nor an object is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupSettings {
    /// Message markup.
    pub msg: String,
    /// Theme name.
    pub theme: Option<String>,
    /// One of the four side literals.
    pub side: Option<String>,
    /// `bottom` or `top`.
    pub animation: Option<String>,
    /// Markup or inline style.
    pub css: Option<Css>,
}

fn string_member(object: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

impl PopupSettings {
    /// Settings with only a message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            ..Default::default()
        }
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the side.
    pub fn with_side(mut self, side: impl Into<String>) -> Self {
        self.side = Some(side.into());
        self
    }

    /// Set the animation.
    pub fn with_animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = Some(animation.into());
        self
    }

    /// Set the style input.
    pub fn with_css(mut self, css: Css) -> Self {
        self.css = Some(css);
        self
    }

    /// Read settings from a dynamic value.
    ///
    /// Fails with `Invalid settings object` when `value` is not an object and
    /// with `Invalid msg` when `msg` is missing or not a string.
    pub fn from_value(value: &Value) -> Result<Self, PopupError> {
        let Value::Object(object) = value else {
            log::warn!("Rejected settings: expected an object, got {}", value);
            return Err(PopupError::invalid("Invalid settings object"));
        };

        let Some(msg) = string_member(object, "msg") else {
            log::warn!("Rejected settings: `msg` is not a string");
            return Err(PopupError::invalid("Invalid msg"));
        };

        let css = object.get("css").and_then(|css| match css {
            Value::String(_) | Value::Object(_) => Css::try_from(css).ok(),
            _ => {
                log::debug!("Ignoring `css` of unsupported type: {}", css);
                None
            }
        });

        Ok(Self {
            msg,
            theme: string_member(object, "theme"),
            side: string_member(object, "side"),
            animation: string_member(object, "animation"),
            css,
        })
    }

    /// Read settings from TOML text.
    ///
    /// ```rust
    /// use popkit_widgets::settings::PopupSettings;
    ///
    /// let settings = PopupSettings::from_toml(r#"
    /// msg = "Saved"
    /// side = "bottom left"
    ///
    /// [css]
    /// color = "green"
    /// "#).unwrap();
    ///
    /// assert_eq!(settings.side.as_deref(), Some("bottom left"));
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, PopupError> {
        let value: Value = toml::from_str(content).map_err(|e| {
            log::warn!("Rejected settings: {}", e);
            PopupError::invalid("Invalid settings object")
        })?;
        Self::from_value(&value)
    }
}

impl<'de> Deserialize<'de> for PopupSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
