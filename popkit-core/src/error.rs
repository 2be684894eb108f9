// SPDX-License-Identifier: MIT OR Apache-2.0

//! Visual tree errors.

use thiserror::Error;

/// Errors raised by structural operations on the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The requested insertion would break the tree structure.
    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(&'static str),
}
