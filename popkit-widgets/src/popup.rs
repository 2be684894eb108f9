// SPDX-License-Identifier: MIT OR Apache-2.0

//! Popup widget for displaying floating notifications

use popkit_core::dom::{Document, Node};
use popkit_theme::classes::{self, Animation, Position, TagMode, ThemeName};
use popkit_theme::config::PopupConfig;
use popkit_theme::PopupError;
use serde_json::Value;

use crate::settings::PopupSettings;
use crate::style::{self, Css};

/// A floating notification built on a node of a [Document].
///
/// Every configuration call mutates the owned node right away and returns the
/// builder for chaining. Fallible calls return [PopupError::InvalidInput] and
/// leave everything applied before them in place.
///
/// ```rust
/// use popkit_core::dom::Document;
/// use popkit_widgets::popup::PopupBuilder;
///
/// # fn main() -> Result<(), popkit_theme::PopupError> {
/// let document = Document::new();
/// let mut popup = PopupBuilder::new(&document);
///
/// popup
///     .set_content("Saved!")
///     .set_theme("dark")
///     .set_position("bottom left")?
///     .set_animation("bottom")?
///     .attach(None)?
///     .show();
///
/// assert!(popup.is_shown());
/// assert_eq!(document.body().children(), vec![popup.node().clone()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PopupBuilder {
    /// The document providing the default root container
    document: Document,
    /// The popup element
    node: Node,
    /// Fallbacks and tag policy
    config: PopupConfig,
    theme: Option<ThemeName>,
    position: Option<Position>,
    animation: Option<Animation>,
}

impl PopupBuilder {
    /// Create a new popup on `document` with the default configuration.
    pub fn new(document: &Document) -> Self {
        Self::with_config(document, PopupConfig::default())
    }

    /// Create a new popup on `document` with the given configuration.
    pub fn with_config(document: &Document, config: PopupConfig) -> Self {
        let node = document.create_element("div");
        node.add_class(classes::BASE);
        log::debug!("Created popup {:?} ({:?})", node.id(), config.tag_mode);

        Self {
            document: document.clone(),
            node,
            config,
            theme: None,
            position: None,
            animation: None,
        }
    }

    /// Replace the popup content with raw markup.
    pub fn set_content(&mut self, message: impl AsRef<str>) -> &mut Self {
        self.node.set_inner_html(message.as_ref());
        log::debug!("Popup {:?}: content set", self.node.id());
        self
    }

    /// Apply a theme. Any name is accepted.
    ///
    /// The class is added verbatim, so a name containing whitespace produces a
    /// class that a stylesheet cannot select.
    pub fn set_theme(&mut self, theme: impl Into<ThemeName>) -> &mut Self {
        let theme = theme.into();
        if theme.as_str().contains(|c: char| c.is_ascii_whitespace()) {
            log::warn!(
                "Popup {:?}: theme {:?} contains whitespace and will not match a stylesheet selector",
                self.node.id(),
                theme.as_str()
            );
        }
        let previous = self.theme.as_ref().map(ThemeName::class_name);
        self.swap_class(previous, &theme.class_name());
        self.theme = Some(theme);
        self
    }

    /// Apply raw markup or inline style properties.
    ///
    /// Markup REPLACES the content, exactly like [PopupBuilder::set_content].
    /// A style map is merged into the inline style and leaves the content alone.
    /// camelCase property names are written in their CSS form, so
    /// `backgroundColor` sets `background-color`.
    pub fn set_style<C>(&mut self, css: C) -> Result<&mut Self, PopupError>
    where
        C: TryInto<Css>,
        PopupError: From<<C as TryInto<Css>>::Error>,
    {
        let css: Css = css.try_into().map_err(|e| {
            let e = PopupError::from(e);
            log::warn!("Popup {:?}: {}", self.node.id(), e);
            e
        })?;

        match css {
            Css::Markup(markup) => {
                self.set_content(markup);
            }
            Css::Style(properties) => {
                for (name, value) in &properties {
                    self.node.set_style_property(&style::property_name(name), value);
                }
                log::debug!(
                    "Popup {:?}: merged {} style properties",
                    self.node.id(),
                    properties.len()
                );
            }
        }
        Ok(self)
    }

    /// Apply an entrance animation, `"bottom"` or `"top"`.
    pub fn set_animation<A>(&mut self, keyframes_id: A) -> Result<&mut Self, PopupError>
    where
        A: TryInto<Animation>,
        PopupError: From<<A as TryInto<Animation>>::Error>,
    {
        let animation: Animation = keyframes_id.try_into().map_err(|e| {
            let e = PopupError::from(e);
            log::warn!("Popup {:?}: {}", self.node.id(), e);
            e
        })?;

        let previous = self.animation.map(Animation::class_name);
        self.swap_class(previous, &animation.class_name());
        self.animation = Some(animation);
        Ok(self)
    }

    /// Pin the popup to a corner: `"top left"`, `"top right"`, `"bottom right"` or `"bottom left"`.
    pub fn set_position<P>(&mut self, side: P) -> Result<&mut Self, PopupError>
    where
        P: TryInto<Position>,
        PopupError: From<<P as TryInto<Position>>::Error>,
    {
        let position: Position = side.try_into().map_err(|e| {
            let e = PopupError::from(e);
            log::warn!("Popup {:?}: {}", self.node.id(), e);
            e
        })?;

        let previous = self.position.map(|p| p.class_name().to_string());
        self.swap_class(previous, position.class_name());
        self.position = Some(position);
        Ok(self)
    }

    /// Configure everything from a dynamic settings object.
    ///
    /// See [PopupSettings::from_value] for the accepted shape. Absent or
    /// non-string dimensions fall back to the configured defaults.
    pub fn configure(&mut self, settings: &Value) -> Result<&mut Self, PopupError> {
        let settings = PopupSettings::from_value(settings)?;
        self.configure_with(&settings)
    }

    /// Configure everything from typed settings.
    ///
    /// Applies theme, position and animation, then the message, then `css`.
    pub fn configure_with(&mut self, settings: &PopupSettings) -> Result<&mut Self, PopupError> {
        let theme = match &settings.theme {
            Some(theme) => ThemeName::from(theme.as_str()),
            None => self.config.theme.clone(),
        };
        self.set_theme(theme);

        match &settings.side {
            Some(side) => self.set_position(side.as_str())?,
            None => self.set_position(self.config.side)?,
        };

        match &settings.animation {
            Some(animation) => self.set_animation(animation.as_str())?,
            None => self.set_animation(self.config.animation)?,
        };

        self.set_content(&settings.msg);

        if let Some(css) = &settings.css {
            self.set_style(css.clone())?;
        }

        Ok(self)
    }

    /// Append the popup to `target`, or to the document body when `None`.
    ///
    /// Attaching again moves the popup. A target that is not an element, or
    /// that the tree rejects, fails with `Invalid root` and leaves the popup
    /// where it was.
    pub fn attach(&mut self, target: Option<&Node>) -> Result<&mut Self, PopupError> {
        let root = target.cloned().unwrap_or_else(|| self.document.body());

        if !root.is_element() {
            log::warn!("Popup {:?}: attach target {:?} is not an element", self.node.id(), root);
            return Err(PopupError::invalid("Invalid root"));
        }

        root.append_child(&self.node).map_err(|e| {
            log::warn!("Popup {:?}: {}", self.node.id(), e);
            PopupError::invalid("Invalid root")
        })?;

        log::debug!("Popup {:?}: attached to {:?}", self.node.id(), root.id());
        Ok(self)
    }

    /// Show the popup.
    pub fn show(&mut self) -> &mut Self {
        if self.node.add_class(classes::SHOW) {
            log::debug!("Popup {:?}: shown", self.node.id());
        }
        self
    }

    /// Hide the popup.
    pub fn hide(&mut self) -> &mut Self {
        if self.node.remove_class(classes::SHOW) {
            log::debug!("Popup {:?}: hidden", self.node.id());
        }
        self
    }

    /// The popup element.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The current content markup.
    pub fn content(&self) -> String {
        self.node.inner_html()
    }

    /// Check if the popup is visible
    pub fn is_shown(&self) -> bool {
        self.node.has_class(classes::SHOW)
    }

    /// Whether the popup has a parent.
    pub fn is_attached(&self) -> bool {
        self.node.parent().is_some()
    }

    /// The last applied theme.
    pub fn theme(&self) -> Option<&ThemeName> {
        self.theme.as_ref()
    }

    /// The last applied position.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The last applied animation.
    pub fn animation(&self) -> Option<Animation> {
        self.animation
    }

    /// The configured tag mode.
    pub fn tag_mode(&self) -> TagMode {
        self.config.tag_mode
    }

    /// Serialize the popup element.
    pub fn to_html(&self) -> String {
        self.node.outer_html()
    }

    fn swap_class(&self, previous: Option<String>, next: &str) {
        if self.config.tag_mode == TagMode::Replace {
            if let Some(previous) = previous.filter(|previous| previous != next) {
                self.node.remove_class(&previous);
            }
        }
        self.node.add_class(next);
        log::debug!("Popup {:?}: class `{}` applied", self.node.id(), next);
    }
}
