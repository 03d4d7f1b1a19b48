//! Scroll area value types

use interop_core::Axis;
use serde::{Deserialize, Serialize};

// ============================================================================
// Behaviours
// ============================================================================

/// Overflow behaviour for one axis, mirrors CSS `overflow-x`/`overflow-y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowBehavior {
    #[default]
    Auto,
    Hidden,
    Scroll,
    Visible,
}

impl OverflowBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowBehavior::Auto => "auto",
            OverflowBehavior::Hidden => "hidden",
            OverflowBehavior::Scroll => "scroll",
            OverflowBehavior::Visible => "visible",
        }
    }

    /// Whether a scrollbar for this axis is displayed at all
    pub fn displays_scrollbar(self, content_overflowing: bool) -> bool {
        match self {
            OverflowBehavior::Scroll => true,
            OverflowBehavior::Auto => content_overflowing,
            OverflowBehavior::Hidden | OverflowBehavior::Visible => false,
        }
    }
}

/// Resize affordance, mirrors CSS `resize`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeBehavior {
    #[default]
    None,
    Both,
    Horizontal,
    Vertical,
    Initial,
    Inherit,
}

impl ResizeBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeBehavior::None => "none",
            ResizeBehavior::Both => "both",
            ResizeBehavior::Horizontal => "horizontal",
            ResizeBehavior::Vertical => "vertical",
            ResizeBehavior::Initial => "initial",
            ResizeBehavior::Inherit => "inherit",
        }
    }

    /// Parse a computed `resize` value
    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim() {
            "none" => Some(ResizeBehavior::None),
            "both" => Some(ResizeBehavior::Both),
            "horizontal" | "inline" => Some(ResizeBehavior::Horizontal),
            "vertical" | "block" => Some(ResizeBehavior::Vertical),
            "initial" => Some(ResizeBehavior::Initial),
            "inherit" => Some(ResizeBehavior::Inherit),
            _ => None,
        }
    }

    /// Whether the user can resize the scroll area
    pub fn is_resizable(self) -> bool {
        matches!(
            self,
            ResizeBehavior::Both | ResizeBehavior::Horizontal | ResizeBehavior::Vertical
        )
    }
}

/// When scrollbars are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollbarVisibility {
    /// Visible whenever content overflows
    #[default]
    Always,
    /// Visible while scrolling along the axis
    Scroll,
    /// Visible while scrolling or while the area is hovered
    Hover,
}

impl ScrollbarVisibility {
    /// Scrollbars that may hide are laid over content instead of beside it
    pub fn overlaps_content(self) -> bool {
        self != ScrollbarVisibility::Always
    }
}

/// What a click on the track does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackClickBehavior {
    /// Scroll a page towards the click, then towards the pointer while held
    Page,
    /// Jump so the thumb is centred on the click and start dragging
    #[default]
    Relative,
}

/// Direction along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalDirection {
    /// Towards offset 0 (up/left)
    Start,
    /// Towards the maximum offset (down/right)
    End,
}

impl LogicalDirection {
    /// -1 for start, 1 for end
    pub fn sign(self) -> f32 {
        match self {
            LogicalDirection::Start => -1.0,
            LogicalDirection::End => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalDirection::Start => "start",
            LogicalDirection::End => "end",
        }
    }
}

// ============================================================================
// Parts
// ============================================================================

/// Interactive part of a scroll area that can receive pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAreaPart {
    Scrollbar(Axis),
    Track(Axis),
    Thumb(Axis),
    Button(Axis, LogicalDirection),
}

impl ScrollAreaPart {
    pub fn axis(self) -> Axis {
        match self {
            ScrollAreaPart::Scrollbar(axis)
            | ScrollAreaPart::Track(axis)
            | ScrollAreaPart::Thumb(axis)
            | ScrollAreaPart::Button(axis, _) => axis,
        }
    }
}

/// Element whose border box is observed for size changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeTarget {
    /// The root viewport element
    Viewport,
    /// The scrollable position element (content size changes land here too)
    Position,
    Scrollbar(Axis),
    Track(Axis),
}
