// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Build floating notification popups on a headless visual tree.
//!
//! ```rust
//! use popkit::prelude::*;
//!
//! # fn main() -> Result<(), PopupError> {
//! let document = Document::new();
//! let mut popup = PopupBuilder::new(&document);
//! popup
//!     .configure(&popkit::serde_json::json!({"msg": "Saved!", "side": "bottom left"}))?
//!     .attach(None)?
//!     .show();
//!
//! assert!(document.to_html().contains("popup-bottom-left"));
//! # Ok(())
//! # }
//! ```

pub use popkit_core as core;
pub use popkit_theme as theme;
pub use popkit_widgets as widgets;

#[cfg(feature = "json")]
pub use serde_json;

/// A "prelude" for users of popkit.
///
/// ```rust
/// use popkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::dom::{Document, Node};
    pub use crate::theme::classes::{Animation, Position, TagMode, ThemeName};
    pub use crate::theme::config::PopupConfig;
    pub use crate::theme::error::PopupError;
    pub use crate::widgets::popup::PopupBuilder;
    pub use crate::widgets::settings::PopupSettings;
    pub use crate::widgets::style::Css;
}
