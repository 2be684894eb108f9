// SPDX-License-Identifier: MIT OR Apache-2.0

//! Style input accepted by [PopupBuilder::set_style](crate::popup::PopupBuilder::set_style).

use indexmap::IndexMap;
use popkit_theme::PopupError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Either raw markup or a map of inline style properties.
///
/// The shape is decided when converting into `Css`. Dynamic values that are
/// neither a string nor an object are rejected with [PopupError::InvalidInput].
///
/// ```rust
/// use popkit_widgets::style::Css;
/// use serde_json::json;
///
/// assert!(matches!(Css::try_from(&json!("<b>hi</b>")), Ok(Css::Markup(_))));
/// assert!(matches!(Css::try_from(&json!({"color": "red"})), Ok(Css::Style(_))));
/// assert!(Css::try_from(&json!(42)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Css {
    /// Replaces the popup content.
    Markup(String),
    /// Merged into the popup's inline style.
    Style(IndexMap<String, String>),
}

impl Css {
    /// Raw markup.
    pub fn markup(markup: impl Into<String>) -> Self {
        Css::Markup(markup.into())
    }

    /// A style map built from `(property, value)` pairs.
    pub fn style<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Css::Style(
            properties
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Convert a camelCase property name to its CSS form, e.g. `backgroundColor`
/// to `background-color`.
///
/// Names that are already kebab-case and custom properties (`--name`) are
/// returned unchanged.
pub fn property_name(name: &str) -> String {
    if name.starts_with("--") || !name.contains(|c: char| c.is_ascii_uppercase()) {
        return name.to_string();
    }

    let mut css = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            css.push('-');
            css.push(c.to_ascii_lowercase());
        } else {
            css.push(c);
        }
    }
    css
}

fn invalid_css() -> PopupError {
    PopupError::invalid("Invalid CSS object")
}

fn style_value(name: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        // An empty value clears the property.
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => {
            log::warn!("Skipping style property `{}`: nested values are not supported", name);
            None
        }
    }
}

impl TryFrom<&Value> for Css {
    type Error = PopupError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(markup) => Ok(Css::Markup(markup.clone())),
            Value::Object(properties) => Ok(Css::Style(
                properties
                    .iter()
                    .filter_map(|(name, value)| style_value(name, value).map(|v| (name.clone(), v)))
                    .collect(),
            )),
            _ => Err(invalid_css()),
        }
    }
}

impl<'de> Deserialize<'de> for Css {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Css::try_from(&value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Value> for Css {
    type Error = PopupError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Css::try_from(&value)
    }
}

impl TryFrom<&str> for Css {
    type Error = PopupError;

    fn try_from(markup: &str) -> Result<Self, Self::Error> {
        Ok(Css::markup(markup))
    }
}

impl TryFrom<String> for Css {
    type Error = PopupError;

    fn try_from(markup: String) -> Result<Self, Self::Error> {
        Ok(Css::Markup(markup))
    }
}

impl TryFrom<IndexMap<String, String>> for Css {
    type Error = PopupError;

    fn try_from(properties: IndexMap<String, String>) -> Result<Self, Self::Error> {
        Ok(Css::Style(properties))
    }
}
