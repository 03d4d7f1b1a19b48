//! Scroll area root
//!
//! [`ScrollArea`] owns the node registries, the reducer state and one
//! [`Scrollbar`] per axis. The host forwards platform events to the
//! `handle_*` methods and calls [`ScrollArea::tick`] once per frame while it
//! returns `true`. Every handler ends by applying dispatched events to the
//! state and rendering attributes and styles onto the registered nodes.
//!
//! # Example
//!
//! ```rust
//! use interop_core::{Axis, HeadlessElement, HeadlessPlatform, Node, Rect, Size};
//! use interop_scroll_area::{ScrollArea, ScrollAreaConfig};
//!
//! let position = HeadlessElement::new()
//!     .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
//!     .with_scroll_size(Size::new(400.0, 2000.0))
//!     .into_rc();
//! let bar = Rect::new(400.0, 0.0, 12.0, 400.0);
//! let scrollbar: Node = HeadlessElement::new().with_rect(bar).into_rc();
//! let track: Node = HeadlessElement::new().with_rect(bar).into_rc();
//!
//! let mut area = ScrollArea::new(HeadlessElement::new().into_rc(), ScrollAreaConfig::new());
//! area.nodes_mut().register_position(position).unwrap();
//! area.nodes_mut().register_viewport(HeadlessElement::new().into_rc()).unwrap();
//! let parts = area.add_scrollbar(Axis::Y, scrollbar).unwrap();
//! parts.register_track(track).unwrap();
//! parts.register_thumb(HeadlessElement::new().into_rc()).unwrap();
//!
//! area.mount(&HeadlessPlatform::new()).unwrap();
//! assert!(area.state().is_content_overflowing_y);
//! assert!(area.is_scrollbar_visible(Axis::Y));
//! ```

use std::time::Duration;

use interop_core::{
    Axis, AxisMap, Element, Node, Observation, ObservationKind, Platform, Point, PointerEvent,
    PointerPhase, Size, Subscriptions, WheelEvent,
};

use crate::config::{ScrollAreaConfig, ScrollAreaContext};
use crate::corner::{read_explicit_resize, CornerGeometry};
use crate::css::{self, px, set_displayed};
use crate::error::{Result, ScrollAreaError};
use crate::nodes::{NodeRole, ScrollAreaNodes, ScrollbarNodes};
use crate::scrollbar::{PartEnv, Scrollbar};
use crate::state::{reducer, ReducerState, ScrollAreaEvent};
use crate::support::should_fallback_to_native;
use crate::types::{ResizeTarget, ScrollAreaPart};
use crate::viewport::{
    apply_native_styles, apply_padding, apply_position_styles, overflow_event,
};

const ROOT_NAME: &str = "ScrollArea";

/// How the scroll area is currently rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountMode {
    #[default]
    Unmounted,
    /// Platform scrollbars on the root
    Native,
    /// Custom scrollbars driven by this engine
    Custom,
}

/// Headless scroll area
pub struct ScrollArea {
    config: ScrollAreaConfig,
    root: Node,
    nodes: ScrollAreaNodes,
    scrollbars: AxisMap<Option<Scrollbar>>,
    state: ReducerState,
    context: Option<ScrollAreaContext>,
    mode: MountMode,
    subscriptions: Subscriptions<ScrollAreaPart>,
    observations: Vec<Observation>,
    in_view: bool,
    last_offset: Point,
}

impl ScrollArea {
    pub fn new(root: Node, config: ScrollAreaConfig) -> Self {
        Self {
            config,
            root,
            nodes: ScrollAreaNodes::new(),
            scrollbars: AxisMap::new(None, None),
            state: ReducerState::default(),
            context: None,
            mode: MountMode::Unmounted,
            subscriptions: Subscriptions::new(),
            observations: Vec::new(),
            in_view: true,
            last_offset: Point::ZERO,
        }
    }

    pub fn config(&self) -> &ScrollAreaConfig {
        &self.config
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn nodes(&self) -> &ScrollAreaNodes {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut ScrollAreaNodes {
        &mut self.nodes
    }

    /// Add the scrollbar for `axis`; register its parts on the returned nodes
    pub fn add_scrollbar(&mut self, axis: Axis, scrollbar: Node) -> Result<&mut ScrollbarNodes> {
        if self.scrollbars[axis].is_some() {
            return Err(ScrollAreaError::DuplicateScrollbar(axis));
        }
        let scrollbar = self.scrollbars[axis].insert(Scrollbar::new(ScrollbarNodes::new(
            axis, scrollbar,
        )));
        Ok(scrollbar.nodes_mut())
    }

    pub fn scrollbar(&self, axis: Axis) -> Option<&Scrollbar> {
        self.scrollbars[axis].as_ref()
    }

    pub fn scrollbar_nodes_mut(&mut self, axis: Axis) -> Result<&mut ScrollbarNodes> {
        self.scrollbars[axis]
            .as_mut()
            .map(Scrollbar::nodes_mut)
            .ok_or(ScrollAreaError::MissingScrollbar(axis))
    }

    pub fn state(&self) -> &ReducerState {
        &self.state
    }

    /// Resolved options; `None` before mount
    pub fn context(&self) -> Option<&ScrollAreaContext> {
        self.context.as_ref()
    }

    pub fn mode(&self) -> MountMode {
        self.mode
    }

    pub fn is_native(&self) -> bool {
        self.mode == MountMode::Native
    }

    pub fn is_mounted(&self) -> bool {
        self.mode != MountMode::Unmounted
    }

    fn is_custom(&self) -> bool {
        self.mode == MountMode::Custom
    }

    /// Active pointer listeners
    pub fn subscriptions(&self) -> &Subscriptions<ScrollAreaPart> {
        &self.subscriptions
    }

    /// Whether the scrollbar for `axis` is displayed and not at rest
    pub fn is_scrollbar_visible(&self, axis: Axis) -> bool {
        match (&self.context, &self.scrollbars[axis]) {
            (Some(context), Some(scrollbar)) if self.is_custom() => {
                scrollbar.is_visible(context, &self.state)
            }
            _ => false,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Wire the scroll area to its nodes
    ///
    /// Falls back to native scrolling when the platform lacks a required
    /// feature or the configuration forces it.
    pub fn mount(&mut self, platform: &dyn Platform) -> Result<()> {
        if self.is_mounted() {
            self.unmount();
        }
        let context = ScrollAreaContext::resolve(&self.config, platform);

        if should_fallback_to_native(platform, self.config.force_native) {
            apply_native_styles(&self.root, &context);
            for scrollbar in [&self.scrollbars.x, &self.scrollbars.y].into_iter().flatten() {
                scrollbar.hide();
            }
            if let Some(corner) = self.nodes.corner() {
                set_displayed(corner, false);
            }
            self.context = Some(context);
            self.mode = MountMode::Native;
            tracing::debug!("scroll area mounted with native scrolling");
            return Ok(());
        }

        let position = self.nodes.require_position(ROOT_NAME)?.clone();
        let viewport = self.nodes.require_viewport(ROOT_NAME)?.clone();
        // Nothing is written until every scrollbar has its parts
        for scrollbar in [&self.scrollbars.x, &self.scrollbars.y].into_iter().flatten() {
            scrollbar.validate()?;
        }
        for scrollbar in [&mut self.scrollbars.x, &mut self.scrollbars.y]
            .into_iter()
            .flatten()
        {
            scrollbar.attach(&context)?;
        }

        self.root
            .set_attribute(&css::part_attribute("root"), "");
        self.root.set_attribute("dir", context.dir().as_str());
        for (role, node) in [
            (NodeRole::Position, Some(&position)),
            (NodeRole::Viewport, Some(&viewport)),
            (NodeRole::Corner, self.nodes.corner()),
        ] {
            if let Some(node) = node {
                node.set_attribute(&css::part_attribute(role.part_name()), "");
            }
        }
        apply_position_styles(&position, &context);

        self.observe(platform, &position, &viewport);

        // Initial measurement
        let mut events = Vec::new();
        for scrollbar in [&self.scrollbars.x, &self.scrollbars.y].into_iter().flatten() {
            let axis = scrollbar.axis();
            let nodes = scrollbar.nodes();
            events.push(ScrollAreaEvent::scrollbar_resize(
                axis,
                nodes.scrollbar().bounding_rect().size(),
            ));
            if let Some(track) = nodes.track() {
                events.push(ScrollAreaEvent::track_resize(axis, track.bounding_rect().size()));
            }
        }
        if let Some(resize) = read_explicit_resize(&position) {
            events.push(ScrollAreaEvent::SetExplicitResize(resize));
        }
        self.apply(events);
        if let Some(event) = overflow_event(&self.state, &position) {
            self.apply([event]);
        }

        self.last_offset = position.scroll_offset();
        self.in_view = true;
        self.context = Some(context);
        self.mode = MountMode::Custom;
        tracing::debug!(
            overflow_x = self.state.is_content_overflowing_x,
            overflow_y = self.state.is_content_overflowing_y,
            "scroll area mounted"
        );
        self.render();
        Ok(())
    }

    fn observe(&mut self, platform: &dyn Platform, position: &Node, viewport: &Node) {
        let mut targets = vec![viewport.clone(), position.clone()];
        for scrollbar in [&self.scrollbars.x, &self.scrollbars.y].into_iter().flatten() {
            let nodes = scrollbar.nodes();
            targets.push(nodes.scrollbar().clone());
            targets.extend(nodes.track().cloned());
        }
        self.observations = targets
            .iter()
            .map(|node| platform.observe(node, ObservationKind::Resize))
            .collect();
        self.observations
            .push(platform.observe(&self.root, ObservationKind::Intersection));
    }

    /// Stop animations, release pointers and disconnect observers
    pub fn unmount(&mut self) {
        if self.is_custom() {
            let mut dispatched = Vec::new();
            if let (Some(context), Some(position)) = (self.context.as_ref(), self.nodes.position()) {
                let mut env = PartEnv {
                    context,
                    position,
                    subscriptions: &mut self.subscriptions,
                    dispatched: &mut dispatched,
                };
                for scrollbar in [&mut self.scrollbars.x, &mut self.scrollbars.y]
                    .into_iter()
                    .flatten()
                {
                    scrollbar.detach(&mut env);
                }
            }
            self.apply(dispatched);

            for el in [Some(&self.root), self.nodes.viewport()].into_iter().flatten() {
                el.remove_attribute(css::DATA_DRAGGING);
                el.remove_attribute(css::DATA_SCROLLING);
            }
        }

        self.subscriptions.clear();
        self.observations.clear();
        self.state = ReducerState::default();
        self.last_offset = Point::ZERO;
        self.in_view = true;
        self.context = None;
        self.mode = MountMode::Unmounted;
        tracing::debug!("scroll area unmounted");
    }

    // ========================================================================
    // Platform events
    // ========================================================================

    /// An observed element changed size
    pub fn handle_resize(&mut self, target: ResizeTarget, size: Size, now: Duration) -> Result<()> {
        if !self.is_custom() {
            return Ok(());
        }
        let position = self.nodes.require_position(ROOT_NAME)?.clone();

        let mut events = Vec::new();
        match target {
            ResizeTarget::Scrollbar(axis) => {
                events.push(ScrollAreaEvent::scrollbar_resize(axis, size))
            }
            ResizeTarget::Track(axis) => events.push(ScrollAreaEvent::track_resize(axis, size)),
            ResizeTarget::Position => {
                if let Some(resize) = read_explicit_resize(&position) {
                    if resize != self.state.explicit_resize {
                        events.push(ScrollAreaEvent::SetExplicitResize(resize));
                    }
                }
            }
            ResizeTarget::Viewport => {}
        }
        self.apply(events);
        if let Some(event) = overflow_event(&self.state, &position) {
            self.apply([event]);
        }

        self.sync_scroll(now);
        self.render();
        Ok(())
    }

    /// The position element scrolled
    pub fn handle_scroll(&mut self, now: Duration) {
        if !self.is_custom() {
            return;
        }
        self.sync_scroll(now);
        self.render();
    }

    /// A wheel over the scrollbar for `axis`
    pub fn handle_wheel(&mut self, axis: Axis, event: &WheelEvent) -> Result<()> {
        if !self.is_custom() {
            return Ok(());
        }
        self.with_scrollbar(axis, |scrollbar, env| {
            scrollbar.on_wheel(event, env);
            Ok(())
        })?;
        self.sync_scroll(event.time_stamp);
        self.render();
        Ok(())
    }

    /// A pointer went down on `part`
    pub fn handle_pointer_down(&mut self, part: ScrollAreaPart, event: &PointerEvent) -> Result<()> {
        if !self.is_custom() {
            return Ok(());
        }
        let result = self.with_scrollbar(part.axis(), |scrollbar, env| {
            scrollbar.on_pointer_down(part, event, env)
        });
        self.sync_scroll(event.time_stamp);
        self.render();
        result
    }

    /// A pointer moved anywhere; routed to the parts listening for it
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> Result<()> {
        self.route_pointer(PointerPhase::Move, event)
    }

    /// A pointer was released anywhere; routed to the parts listening for it
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> Result<()> {
        self.route_pointer(PointerPhase::Up, event)
    }

    fn route_pointer(&mut self, phase: PointerPhase, event: &PointerEvent) -> Result<()> {
        if !self.is_custom() {
            return Ok(());
        }
        for part in self.subscriptions.listeners(phase, event.pointer_id) {
            self.with_scrollbar(part.axis(), |scrollbar, env| {
                match phase {
                    PointerPhase::Move => scrollbar.on_pointer_move(part, event, env),
                    PointerPhase::Up => scrollbar.on_pointer_up(part, event, env),
                }
                Ok(())
            })?;
        }
        self.sync_scroll(event.time_stamp);
        self.render();
        Ok(())
    }

    /// The pointer entered the scroll area
    pub fn handle_pointer_enter(&mut self, now: Duration) {
        self.set_hovered(true, now);
    }

    /// The pointer left the scroll area
    pub fn handle_pointer_leave(&mut self, now: Duration) {
        self.set_hovered(false, now);
    }

    fn set_hovered(&mut self, hovered: bool, now: Duration) {
        if !self.is_custom() {
            return;
        }
        for scrollbar in [&mut self.scrollbars.x, &mut self.scrollbars.y]
            .into_iter()
            .flatten()
        {
            scrollbar.on_hover(hovered, now);
        }
        self.render();
    }

    /// The root entered or left the viewport
    pub fn handle_intersection(&mut self, is_intersecting: bool, now: Duration) {
        if !self.is_custom() || self.in_view == is_intersecting {
            return;
        }
        self.in_view = is_intersecting;
        tracing::trace!(is_intersecting, "scroll area intersection");
        if is_intersecting {
            self.sync_scroll(now);
            self.render();
        }
    }

    /// Advance timers and animations to `now`
    ///
    /// Returns whether another frame is needed.
    pub fn tick(&mut self, now: Duration) -> Result<bool> {
        if !self.is_custom() {
            return Ok(false);
        }
        let mut active = false;
        for axis in Axis::ALL {
            if self.scrollbars[axis].is_some() {
                active |= self.with_scrollbar(axis, |scrollbar, env| scrollbar.tick(now, env))?;
            }
        }
        self.sync_scroll(now);
        self.render();
        Ok(active)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Run `f` against the scrollbar for `axis`, then apply what it dispatched
    fn with_scrollbar<R: Default>(
        &mut self,
        axis: Axis,
        f: impl FnOnce(&mut Scrollbar, &mut PartEnv<'_>) -> Result<R>,
    ) -> Result<R> {
        let Some(context) = self.context.as_ref() else {
            return Ok(R::default());
        };
        let position = self.nodes.require_position(ROOT_NAME)?;
        let scrollbar = self.scrollbars[axis]
            .as_mut()
            .ok_or(ScrollAreaError::MissingScrollbar(axis))?;

        let mut dispatched = Vec::new();
        let mut env = PartEnv {
            context,
            position,
            subscriptions: &mut self.subscriptions,
            dispatched: &mut dispatched,
        };
        let result = f(scrollbar, &mut env);
        self.apply(dispatched);
        result
    }

    fn apply(&mut self, events: impl IntoIterator<Item = ScrollAreaEvent>) {
        for event in events {
            let next = reducer(&self.state, event);
            if next.state != self.state.state {
                tracing::debug!(from = ?self.state.state, to = ?next.state, "scroll area state");
            }
            self.state = next;
        }
    }

    /// Report offset changes to the scrollbars of the axes that moved
    fn sync_scroll(&mut self, now: Duration) {
        let Some(position) = self.nodes.position() else {
            return;
        };
        let offset = position.scroll_offset();
        if offset == self.last_offset {
            return;
        }
        for axis in Axis::ALL {
            if offset.along(axis) != self.last_offset.along(axis) {
                if let Some(scrollbar) = self.scrollbars[axis].as_mut() {
                    scrollbar.on_scroll(now);
                }
            }
        }
        self.last_offset = offset;
    }

    fn render(&self) {
        let (Some(context), Some(position), Some(viewport)) = (
            self.context.as_ref(),
            self.nodes.position(),
            self.nodes.viewport(),
        ) else {
            return;
        };

        let dragging = self.state.state.is_dragging();
        let scrolling = self.state.state.is_scrolling();
        for el in [&self.root, viewport] {
            el.toggle_attribute(css::DATA_DRAGGING, dragging);
            el.toggle_attribute(css::DATA_SCROLLING, scrolling);
        }

        let mut offsets = AxisMap::new(0.0, 0.0);
        let mut displayed = AxisMap::new(false, false);
        for axis in Axis::ALL {
            let thickness = self.state.dom_sizes.scrollbar(axis).thickness(axis);
            self.root
                .set_style(css::scrollbar_size_property(axis), &px(thickness));

            let Some(scrollbar) = &self.scrollbars[axis] else {
                continue;
            };
            scrollbar.render(context, &self.state, position, self.in_view);
            displayed[axis] = scrollbar.is_displayed(context, &self.state);
            if displayed[axis] && !context.scrollbar_visibility().overlaps_content() {
                offsets[axis] = thickness;
            }
        }
        for axis in Axis::ALL {
            self.root
                .set_style(css::scrollbar_offset_property(axis), &px(offsets[axis]));
        }
        apply_padding(viewport, context.dir(), &offsets);

        let corner = CornerGeometry::compute(
            &self.state,
            context.dir(),
            displayed[Axis::X] && displayed[Axis::Y],
        );
        corner.apply_properties(&self.root);
        if let Some(node) = self.nodes.corner() {
            corner.apply(node);
        }
    }
}

impl Drop for ScrollArea {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.unmount();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::{HeadlessElement, HeadlessPlatform, Rect};

    fn area() -> (ScrollArea, Node) {
        let position: Node = HeadlessElement::new()
            .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
            .with_scroll_size(Size::new(400.0, 2000.0))
            .into_rc();
        let mut area = ScrollArea::new(HeadlessElement::new().into_rc(), ScrollAreaConfig::new());
        area.nodes_mut().register_position(position.clone()).unwrap();
        area.nodes_mut()
            .register_viewport(HeadlessElement::new().into_rc())
            .unwrap();
        (area, position)
    }

    #[test]
    fn test_duplicate_scrollbar() {
        let (mut area, _) = area();
        assert!(area.add_scrollbar(Axis::Y, HeadlessElement::new().into_rc()).is_ok());
        assert!(matches!(
            area.add_scrollbar(Axis::Y, HeadlessElement::new().into_rc()),
            Err(ScrollAreaError::DuplicateScrollbar(Axis::Y))
        ));
    }

    #[test]
    fn test_mount_requires_viewport() {
        let mut area = ScrollArea::new(HeadlessElement::new().into_rc(), ScrollAreaConfig::new());
        area.nodes_mut()
            .register_position(HeadlessElement::new().into_rc())
            .unwrap();
        let result = area.mount(&HeadlessPlatform::new());
        assert!(matches!(
            result,
            Err(ScrollAreaError::MissingNode {
                component: ROOT_NAME,
                role: NodeRole::Viewport
            })
        ));
        assert!(!area.is_mounted());
    }

    #[test]
    fn test_mount_without_scrollbars_measures_overflow() {
        let (mut area, position) = area();
        area.mount(&HeadlessPlatform::new()).unwrap();
        assert_eq!(area.mode(), MountMode::Custom);
        assert!(area.state().is_content_overflowing_y);
        assert!(!area.state().is_content_overflowing_x);
        assert_eq!(position.style("scrollbar-width").as_deref(), Some("none"));
        assert_eq!(
            area.root().attribute("data-interop-scroll-area-root").as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_handlers_are_noops_before_mount() {
        let (mut area, position) = area();
        let event = PointerEvent::new(Point::new(405.0, 300.0), Duration::ZERO);
        assert!(area
            .handle_pointer_down(ScrollAreaPart::Track(Axis::Y), &event)
            .is_ok());
        assert_eq!(area.tick(Duration::from_millis(16)).ok(), Some(false));
        assert_eq!(position.scroll_offset(), Point::ZERO);
    }

    #[test]
    fn test_pointer_down_on_missing_scrollbar() {
        let (mut area, _) = area();
        area.mount(&HeadlessPlatform::new()).unwrap();
        let event = PointerEvent::new(Point::new(405.0, 300.0), Duration::ZERO);
        assert!(matches!(
            area.handle_pointer_down(ScrollAreaPart::Thumb(Axis::X), &event),
            Err(ScrollAreaError::MissingScrollbar(Axis::X))
        ));
    }
}
