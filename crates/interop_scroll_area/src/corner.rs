//! Scroll area corner
//!
//! Fills the gap where both scrollbars meet and doubles as the resize
//! handle when the scrollable element is resizable.

use interop_core::{Direction, Element};

use crate::css::{self, px, set_displayed};
use crate::state::ReducerState;
use crate::types::ResizeBehavior;

/// Horizontal edge the corner is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerSide {
    Left,
    Right,
}

/// Size, placement and cursor of the corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerGeometry {
    pub width: f32,
    pub height: f32,
    pub side: CornerSide,
    pub cursor: &'static str,
    pub visible: bool,
}

impl CornerGeometry {
    /// Geometry for `state`; `both_displayed` is true when both scrollbars show
    pub fn compute(state: &ReducerState, dir: Direction, both_displayed: bool) -> Self {
        let sizes = &state.dom_sizes;
        let thickness = sizes.scrollbar_y.width.max(sizes.scrollbar_x.height);
        let resizable = state.explicit_resize.is_resizable();

        Self {
            width: thickness,
            height: thickness,
            side: if dir.is_rtl() {
                CornerSide::Left
            } else {
                CornerSide::Right
            },
            cursor: resize_cursor(state.explicit_resize, dir),
            visible: both_displayed || resizable,
        }
    }

    /// Write the geometry onto the corner element
    pub fn apply(&self, corner: &dyn Element) {
        set_displayed(corner, self.visible);
        corner.set_style("width", &px(self.width));
        corner.set_style("height", &px(self.height));
        corner.set_style("cursor", self.cursor);
        match self.side {
            CornerSide::Left => {
                corner.set_style("left", "0");
                corner.remove_style("right");
            }
            CornerSide::Right => {
                corner.set_style("right", "0");
                corner.remove_style("left");
            }
        }
    }

    /// Custom properties published on the root
    pub fn apply_properties(&self, root: &dyn Element) {
        root.set_style(css::CORNER_WIDTH, &px(self.width));
        root.set_style(css::CORNER_HEIGHT, &px(self.height));
        root.set_style(css::CORNER_CURSOR, self.cursor);
        let (left, right) = match self.side {
            CornerSide::Left => ("0", "auto"),
            CornerSide::Right => ("auto", "0"),
        };
        root.set_style(css::CORNER_LEFT, left);
        root.set_style(css::CORNER_RIGHT, right);
    }
}

/// Cursor for the resize handle
pub fn resize_cursor(resize: ResizeBehavior, dir: Direction) -> &'static str {
    match resize {
        ResizeBehavior::Horizontal => "ew-resize",
        ResizeBehavior::Vertical => "ns-resize",
        ResizeBehavior::Both if dir.is_rtl() => "sw-resize",
        ResizeBehavior::Both => "se-resize",
        _ => "initial",
    }
}

/// Resize behaviour as resolved by the platform
pub fn read_explicit_resize(position: &dyn Element) -> Option<ResizeBehavior> {
    position
        .computed_style("resize")
        .as_deref()
        .and_then(ResizeBehavior::from_css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::{HeadlessElement, Size};

    fn state(resize: ResizeBehavior) -> ReducerState {
        let mut state = ReducerState {
            explicit_resize: resize,
            ..ReducerState::default()
        };
        state.dom_sizes.scrollbar_y = Size::new(12.0, 400.0);
        state.dom_sizes.scrollbar_x = Size::new(400.0, 10.0);
        state
    }

    #[test]
    fn test_size_is_thickest_scrollbar() {
        let geometry = CornerGeometry::compute(&state(ResizeBehavior::None), Direction::Ltr, true);
        assert_eq!(geometry.width, 12.0);
        assert_eq!(geometry.height, 12.0);
        assert_eq!(geometry.side, CornerSide::Right);
        assert!(geometry.visible);
    }

    #[test]
    fn test_hidden_without_both_scrollbars_or_resize() {
        let geometry = CornerGeometry::compute(&state(ResizeBehavior::None), Direction::Ltr, false);
        assert!(!geometry.visible);

        let geometry = CornerGeometry::compute(&state(ResizeBehavior::Both), Direction::Ltr, false);
        assert!(geometry.visible);
    }

    #[test]
    fn test_cursor_follows_direction() {
        assert_eq!(resize_cursor(ResizeBehavior::Both, Direction::Ltr), "se-resize");
        assert_eq!(resize_cursor(ResizeBehavior::Both, Direction::Rtl), "sw-resize");
        assert_eq!(resize_cursor(ResizeBehavior::Vertical, Direction::Rtl), "ns-resize");
        assert_eq!(resize_cursor(ResizeBehavior::Initial, Direction::Ltr), "initial");
    }

    #[test]
    fn test_apply_in_rtl() {
        let geometry = CornerGeometry::compute(&state(ResizeBehavior::Both), Direction::Rtl, true);
        let corner = HeadlessElement::new();
        geometry.apply(&corner);
        assert_eq!(corner.style("left").as_deref(), Some("0"));
        assert_eq!(corner.style("right"), None);
        assert_eq!(corner.style("cursor").as_deref(), Some("sw-resize"));
    }

    #[test]
    fn test_read_explicit_resize() {
        let el = HeadlessElement::new();
        assert_eq!(read_explicit_resize(&el), None);
        el.set_computed_style("resize", "block");
        assert_eq!(read_explicit_resize(&el), Some(ResizeBehavior::Vertical));
    }
}
