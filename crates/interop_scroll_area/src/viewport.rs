//! Viewport and scrollable position element
//!
//! The position element is the one that actually scrolls. Its native
//! scrollbars are hidden while custom ones are active. The viewport inside it
//! is padded so content never sits under a scrollbar that takes up space.

use interop_core::{Axis, AxisMap, Direction, Element};

use crate::config::ScrollAreaContext;
use crate::css::px;
use crate::state::{ReducerState, ScrollAreaEvent};
use crate::utils::should_overflow;

/// Styles that make `position` scroll without native scrollbars
pub fn apply_position_styles(position: &dyn Element, context: &ScrollAreaContext) {
    position.set_style("overflow-x", context.overflow(Axis::X).as_str());
    position.set_style("overflow-y", context.overflow(Axis::Y).as_str());
    position.set_style("resize", context.resize().as_str());
    position.set_style("scrollbar-width", "none");
}

/// Styles for native scrolling on the root
pub fn apply_native_styles(root: &dyn Element, context: &ScrollAreaContext) {
    root.set_style("overflow-x", context.overflow(Axis::X).as_str());
    root.set_style("overflow-y", context.overflow(Axis::Y).as_str());
    root.set_style("resize", context.resize().as_str());
}

/// Overflow update for `state`, if the measured overflow changed
pub fn overflow_event(state: &ReducerState, position: &dyn Element) -> Option<ScrollAreaEvent> {
    let x = should_overflow(position, Axis::X);
    let y = should_overflow(position, Axis::Y);
    let changed = x != state.is_content_overflowing_x || y != state.is_content_overflowing_y;
    changed.then_some(ScrollAreaEvent::SetContentOverflowing { x, y })
}

/// Pad the viewport away from scrollbars that take up space
///
/// `offsets` holds the thickness of each such scrollbar, zero otherwise.
pub fn apply_padding(viewport: &dyn Element, dir: Direction, offsets: &AxisMap<f32>) {
    viewport.set_style("padding-bottom", &px(offsets[Axis::X]));
    let (padded, cleared) = if dir.is_rtl() {
        ("padding-left", "padding-right")
    } else {
        ("padding-right", "padding-left")
    };
    viewport.set_style(padded, &px(offsets[Axis::Y]));
    viewport.remove_style(cleared);
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::{HeadlessElement, HeadlessPlatform, Rect, Size};

    use crate::types::{OverflowBehavior, ResizeBehavior};
    use crate::ScrollAreaConfig;

    #[test]
    fn test_position_styles() {
        let config = ScrollAreaConfig::new()
            .overflow_x(OverflowBehavior::Hidden)
            .resize(ResizeBehavior::Both);
        let context = ScrollAreaContext::resolve(&config, &HeadlessPlatform::new());
        let position = HeadlessElement::new();
        apply_position_styles(&position, &context);
        assert_eq!(position.style("overflow-x").as_deref(), Some("hidden"));
        assert_eq!(position.style("overflow-y").as_deref(), Some("auto"));
        assert_eq!(position.style("resize").as_deref(), Some("both"));
        assert_eq!(position.style("scrollbar-width").as_deref(), Some("none"));
    }

    #[test]
    fn test_overflow_event_only_on_change() {
        let position = HeadlessElement::new()
            .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
            .with_scroll_size(Size::new(400.0, 2000.0));
        let state = ReducerState::default();
        let event = overflow_event(&state, &position);
        assert_eq!(
            event,
            Some(ScrollAreaEvent::SetContentOverflowing { x: false, y: true })
        );

        let state = crate::state::reducer(&state, event.unwrap());
        assert_eq!(overflow_event(&state, &position), None);
    }

    #[test]
    fn test_padding_side_follows_direction() {
        let viewport = HeadlessElement::new();
        let offsets = AxisMap::new(0.0, 12.0);

        apply_padding(&viewport, Direction::Ltr, &offsets);
        assert_eq!(viewport.style("padding-right").as_deref(), Some("12px"));
        assert_eq!(viewport.style("padding-bottom").as_deref(), Some("0"));

        apply_padding(&viewport, Direction::Rtl, &offsets);
        assert_eq!(viewport.style("padding-left").as_deref(), Some("12px"));
        assert_eq!(viewport.style("padding-right"), None);
    }
}
