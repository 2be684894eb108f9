// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Core library for popkit => See `popkit` crate.
//!
//! Contains the headless visual tree popups are attached to.

/// Contains the [Document](dom::Document) and [Node](dom::Node) types.
pub mod dom;

/// Contains the [DomError](error::DomError) type.
pub mod error;

pub use dom::{Document, Node, NodeId};
pub use error::DomError;
