// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Widgets for popkit => See the `popkit` crate.

/// Contains the [PopupBuilder](popup::PopupBuilder) widget.
pub mod popup;

/// Contains the aggregate [PopupSettings](settings::PopupSettings).
pub mod settings;

/// Contains the [Css](style::Css) style input.
pub mod style;
