//! Node registries
//!
//! Each role is registered once per mount by the part that owns it. Reads go
//! through `require_*` accessors that fail fast with
//! [`ScrollAreaError::MissingNode`] instead of wiring half a scroll area.

use std::fmt;

use interop_core::{Axis, Node};

use crate::error::{Result, ScrollAreaError};
use crate::types::LogicalDirection;

/// Role a registered node plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Position,
    Viewport,
    Corner,
    Scrollbar(Axis),
    Track(Axis),
    Thumb(Axis),
    Button(Axis, LogicalDirection),
}

impl NodeRole {
    /// Part name used in `data-interop-scroll-area-*` markers
    pub fn part_name(self) -> &'static str {
        match self {
            NodeRole::Position => "position",
            NodeRole::Viewport => "viewport",
            NodeRole::Corner => "corner",
            NodeRole::Scrollbar(Axis::X) => "scrollbar-x",
            NodeRole::Scrollbar(Axis::Y) => "scrollbar-y",
            NodeRole::Track(_) => "track",
            NodeRole::Thumb(_) => "thumb",
            NodeRole::Button(_, LogicalDirection::Start) => "button-start",
            NodeRole::Button(_, LogicalDirection::End) => "button-end",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Position | NodeRole::Viewport | NodeRole::Corner | NodeRole::Scrollbar(_) => {
                f.write_str(self.part_name())
            }
            NodeRole::Track(axis) | NodeRole::Thumb(axis) | NodeRole::Button(axis, _) => {
                write!(f, "{}-{}", self.part_name(), axis)
            }
        }
    }
}

fn register(slot: &mut Option<Node>, role: NodeRole, node: Node) -> Result<()> {
    if slot.is_some() {
        return Err(ScrollAreaError::NodeAlreadyRegistered { role });
    }
    tracing::trace!(%role, "node registered");
    *slot = Some(node);
    Ok(())
}

fn require<'a>(slot: &'a Option<Node>, role: NodeRole, component: &'static str) -> Result<&'a Node> {
    slot.as_ref()
        .ok_or(ScrollAreaError::MissingNode { component, role })
}

// ============================================================================
// Root registry
// ============================================================================

/// Nodes owned by the root, viewport and corner
#[derive(Default)]
pub struct ScrollAreaNodes {
    position: Option<Node>,
    viewport: Option<Node>,
    corner: Option<Node>,
}

impl ScrollAreaNodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the scrollable element
    pub fn register_position(&mut self, node: Node) -> Result<()> {
        register(&mut self.position, NodeRole::Position, node)
    }

    /// Register the viewport wrapping the content
    pub fn register_viewport(&mut self, node: Node) -> Result<()> {
        register(&mut self.viewport, NodeRole::Viewport, node)
    }

    pub fn register_corner(&mut self, node: Node) -> Result<()> {
        register(&mut self.corner, NodeRole::Corner, node)
    }

    pub fn position(&self) -> Option<&Node> {
        self.position.as_ref()
    }

    pub fn viewport(&self) -> Option<&Node> {
        self.viewport.as_ref()
    }

    pub fn corner(&self) -> Option<&Node> {
        self.corner.as_ref()
    }

    pub fn require_position(&self, component: &'static str) -> Result<&Node> {
        require(&self.position, NodeRole::Position, component)
    }

    pub fn require_viewport(&self, component: &'static str) -> Result<&Node> {
        require(&self.viewport, NodeRole::Viewport, component)
    }
}

// ============================================================================
// Scrollbar registry
// ============================================================================

/// Nodes owned by one scrollbar
pub struct ScrollbarNodes {
    axis: Axis,
    scrollbar: Node,
    track: Option<Node>,
    thumb: Option<Node>,
    button_start: Option<Node>,
    button_end: Option<Node>,
}

impl ScrollbarNodes {
    pub fn new(axis: Axis, scrollbar: Node) -> Self {
        Self {
            axis,
            scrollbar,
            track: None,
            thumb: None,
            button_start: None,
            button_end: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn register_track(&mut self, node: Node) -> Result<()> {
        register(&mut self.track, NodeRole::Track(self.axis), node)
    }

    pub fn register_thumb(&mut self, node: Node) -> Result<()> {
        register(&mut self.thumb, NodeRole::Thumb(self.axis), node)
    }

    pub fn register_button(&mut self, direction: LogicalDirection, node: Node) -> Result<()> {
        let role = NodeRole::Button(self.axis, direction);
        match direction {
            LogicalDirection::Start => register(&mut self.button_start, role, node),
            LogicalDirection::End => register(&mut self.button_end, role, node),
        }
    }

    pub fn scrollbar(&self) -> &Node {
        &self.scrollbar
    }

    pub fn track(&self) -> Option<&Node> {
        self.track.as_ref()
    }

    pub fn thumb(&self) -> Option<&Node> {
        self.thumb.as_ref()
    }

    pub fn button(&self, direction: LogicalDirection) -> Option<&Node> {
        match direction {
            LogicalDirection::Start => self.button_start.as_ref(),
            LogicalDirection::End => self.button_end.as_ref(),
        }
    }

    pub fn require_track(&self, component: &'static str) -> Result<&Node> {
        require(&self.track, NodeRole::Track(self.axis), component)
    }

    pub fn require_thumb(&self, component: &'static str) -> Result<&Node> {
        require(&self.thumb, NodeRole::Thumb(self.axis), component)
    }

    pub fn require_button(
        &self,
        direction: LogicalDirection,
        component: &'static str,
    ) -> Result<&Node> {
        let slot = match direction {
            LogicalDirection::Start => &self.button_start,
            LogicalDirection::End => &self.button_end,
        };
        require(slot, NodeRole::Button(self.axis, direction), component)
    }

    /// Every registered node with its role
    pub fn registered(&self) -> impl Iterator<Item = (NodeRole, &Node)> {
        let axis = self.axis;
        [
            (NodeRole::Scrollbar(axis), Some(&self.scrollbar)),
            (NodeRole::Track(axis), self.track.as_ref()),
            (NodeRole::Thumb(axis), self.thumb.as_ref()),
            (
                NodeRole::Button(axis, LogicalDirection::Start),
                self.button_start.as_ref(),
            ),
            (
                NodeRole::Button(axis, LogicalDirection::End),
                self.button_end.as_ref(),
            ),
        ]
        .into_iter()
        .filter_map(|(role, node)| node.map(|node| (role, node)))
    }
}
