//! Scroll area error types

use interop_core::Axis;
use thiserror::Error;

use crate::nodes::NodeRole;

/// Scroll area errors
#[derive(Error, Debug)]
pub enum ScrollAreaError {
    /// A part needs a node that was never registered
    #[error("{component} requires a registered {role} node")]
    MissingNode {
        component: &'static str,
        role: NodeRole,
    },

    /// A node role was registered twice in one mount
    #[error("{role} node is already registered")]
    NodeAlreadyRegistered { role: NodeRole },

    /// A scrollbar was added twice for the same axis
    #[error("a scrollbar is already registered for the {0} axis")]
    DuplicateScrollbar(Axis),

    /// An interaction targeted an axis without a scrollbar
    #[error("no scrollbar is registered for the {0} axis")]
    MissingScrollbar(Axis),

    /// Configuration could not be parsed
    #[error("invalid scroll area configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for scroll area operations
pub type Result<T> = std::result::Result<T, ScrollAreaError>;
