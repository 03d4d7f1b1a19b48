//! Scrollbar thumb
//!
//! The thumb's length is the visible fraction of the content times the track
//! length, and its offset along the track mirrors the scroll offset. Dragging
//! maps pointer travel across the track back onto the scroll range.

use interop_core::{Axis, Element, LogicalRect, PointerEvent, PointerId, SubscriptionId};

use crate::css::{percent, px, set_displayed};
use crate::error::Result;
use crate::nodes::ScrollbarNodes;
use crate::scrollbar::PartEnv;
use crate::state::ScrollAreaEvent;
use crate::types::ScrollAreaPart;
use crate::utils::{
    get_logical_rect, get_max_scroll_position, get_scroll_position, get_scroll_size,
    get_visible_to_total_ratio, set_scroll_position, should_overflow,
};

const THUMB_NAME: &str = "ScrollArea.Thumb";

/// Thumb size and placement along its track
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    /// Length along the axis in pixels
    pub size: f32,
    /// Offset from the track start in pixels
    pub offset: f32,
    /// Offset from the track start as a percentage of the track
    pub offset_percent: f32,
    pub visible: bool,
}

impl ThumbGeometry {
    /// Geometry for the current scroll state of `position`
    pub fn compute(position: &dyn Element, axis: Axis, track_size: f32) -> Self {
        if !should_overflow(position, axis) {
            return Self::default();
        }

        let ratio = get_visible_to_total_ratio(position, axis);
        let scroll_size = get_scroll_size(position, axis);
        let offset_ratio = if scroll_size > 0.0 {
            get_scroll_position(position, axis) / scroll_size
        } else {
            0.0
        };
        let track_size = track_size.max(0.0);

        Self {
            size: ratio * track_size,
            offset: offset_ratio * track_size,
            offset_percent: offset_ratio * 100.0,
            visible: true,
        }
    }

    /// Thumb rect in the coordinate space of `track`
    pub fn rect_in(&self, track: LogicalRect) -> LogicalRect {
        LogicalRect::new(track.position + self.offset, self.size)
    }

    /// Write the geometry onto the thumb element
    pub fn apply(&self, thumb: &dyn Element, axis: Axis) {
        let (length, start) = match axis {
            Axis::X => ("width", "left"),
            Axis::Y => ("height", "top"),
        };
        set_displayed(thumb, self.visible);
        thumb.set_style(length, &px(self.size));
        thumb.set_style(start, &percent(self.offset_percent));
    }
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    pointer_id: PointerId,
    /// Pointer position along the axis at press
    start_pointer: f32,
    /// Scroll offset at press
    start_scroll: f32,
    track: LogicalRect,
    subscription: SubscriptionId,
}

/// Drag state of one thumb
#[derive(Debug, Default)]
pub struct Thumb {
    drag: Option<DragSession>,
}

impl Thumb {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn on_pointer_down(
        &mut self,
        axis: Axis,
        nodes: &ScrollbarNodes,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) -> Result<()> {
        if !event.is_main_click() {
            return Ok(());
        }
        let thumb = nodes.require_thumb(THUMB_NAME)?;
        let track = get_logical_rect(nodes.require_track(THUMB_NAME)?, axis);

        self.end_drag(nodes, env);

        thumb.set_pointer_capture(event.pointer_id);
        let subscription = env
            .subscriptions
            .subscribe(ScrollAreaPart::Thumb(axis), event.pointer_id);
        self.drag = Some(DragSession {
            pointer_id: event.pointer_id,
            start_pointer: event.position.along(axis),
            start_scroll: get_scroll_position(env.position, axis),
            track,
            subscription,
        });
        tracing::trace!(%axis, pointer = event.pointer_id, "thumb drag started");
        env.dispatch(ScrollAreaEvent::StartThumbing);
        Ok(())
    }

    pub(crate) fn on_pointer_move(&mut self, axis: Axis, event: &PointerEvent, env: &PartEnv<'_>) {
        let Some(drag) = self.drag else {
            return;
        };
        if drag.pointer_id != event.pointer_id || drag.track.size <= 0.0 {
            return;
        }

        let travel = event.position.along(axis) - drag.start_pointer;
        let scroll_size = get_scroll_size(env.position, axis);
        let target = (drag.start_scroll + travel / drag.track.size * scroll_size)
            .clamp(0.0, get_max_scroll_position(env.position, axis));

        if target != get_scroll_position(env.position, axis) {
            set_scroll_position(env.position, axis, target);
        }
    }

    pub(crate) fn on_pointer_up(
        &mut self,
        nodes: &ScrollbarNodes,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        if self
            .drag
            .is_some_and(|drag| drag.pointer_id == event.pointer_id)
        {
            self.end_drag(nodes, env);
        }
    }

    /// Release capture and listeners of an active drag
    pub(crate) fn end_drag(&mut self, nodes: &ScrollbarNodes, env: &mut PartEnv<'_>) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if let Some(thumb) = nodes.thumb() {
            thumb.release_pointer_capture(drag.pointer_id);
        }
        env.subscriptions.unsubscribe(drag.subscription);
        env.dispatch(ScrollAreaEvent::StopThumbing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::{HeadlessElement, Rect, Size};

    fn scroller() -> HeadlessElement {
        HeadlessElement::new()
            .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
            .with_scroll_size(Size::new(400.0, 2000.0))
    }

    #[test]
    fn test_geometry_at_top() {
        let el = scroller();
        let geometry = ThumbGeometry::compute(&el, Axis::Y, 400.0);
        assert!(geometry.visible);
        assert_eq!(geometry.size, 80.0);
        assert_eq!(geometry.offset, 0.0);
    }

    #[test]
    fn test_geometry_follows_scroll() {
        let el = scroller();
        set_scroll_position(&el, Axis::Y, 800.0);
        let geometry = ThumbGeometry::compute(&el, Axis::Y, 400.0);
        assert_eq!(geometry.offset, 160.0);
        assert_eq!(geometry.offset_percent, 40.0);
        assert_eq!(
            geometry.rect_in(LogicalRect::new(10.0, 400.0)),
            LogicalRect::new(170.0, 80.0)
        );
    }

    #[test]
    fn test_geometry_hidden_without_overflow() {
        let el = scroller();
        let geometry = ThumbGeometry::compute(&el, Axis::X, 400.0);
        assert_eq!(geometry, ThumbGeometry::default());

        let thumb = HeadlessElement::new();
        geometry.apply(&thumb, Axis::X);
        assert_eq!(thumb.style("display").as_deref(), Some("none"));
        assert_eq!(thumb.style("width").as_deref(), Some("0"));
    }

    #[test]
    fn test_apply_writes_size_and_offset() {
        let el = scroller();
        set_scroll_position(&el, Axis::Y, 400.0);
        let thumb = HeadlessElement::new();
        ThumbGeometry::compute(&el, Axis::Y, 400.0).apply(&thumb, Axis::Y);
        assert_eq!(thumb.style("height").as_deref(), Some("80px"));
        assert_eq!(thumb.style("top").as_deref(), Some("20%"));
        assert_eq!(thumb.style("display"), None);
    }
}
