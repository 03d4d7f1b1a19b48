//! Scrollbar
//!
//! A scrollbar owns the parts laid out along one axis: track, thumb and the
//! optional start/end buttons. Each scrollbar has its own animation queue so
//! paging and button steps on one axis never delay the other.

use std::time::Duration;

use interop_animation::{AnimationQueue, AnimationTask, Easing};
use interop_core::{Axis, Node, PointerEvent, Subscriptions, WheelEvent};

use crate::button::Button;
use crate::config::ScrollAreaContext;
use crate::css::{self, set_displayed};
use crate::error::Result;
use crate::nodes::{NodeRole, ScrollbarNodes};
use crate::state::{ReducerState, ScrollAreaEvent};
use crate::thumb::{Thumb, ThumbGeometry};
use crate::track::Track;
use crate::types::{LogicalDirection, ScrollAreaPart};
use crate::utils::{round_to, scroll_by};
use crate::visibility::VisibilityState;

const SCROLLBAR_NAME: &str = "ScrollArea.Scrollbar";

/// What a part handler may touch outside its own scrollbar
pub(crate) struct PartEnv<'a> {
    pub context: &'a ScrollAreaContext,
    /// The scrollable element
    pub position: &'a Node,
    pub subscriptions: &'a mut Subscriptions<ScrollAreaPart>,
    pub dispatched: &'a mut Vec<ScrollAreaEvent>,
}

impl PartEnv<'_> {
    /// Queue an event for the root reducer
    pub fn dispatch(&mut self, event: ScrollAreaEvent) {
        tracing::trace!(?event, "dispatch");
        self.dispatched.push(event);
    }
}

/// Animate `position` by `distance` along `axis`
///
/// Frames apply the difference from the previous frame, so scrolling done by
/// anything else during the animation is preserved.
pub(crate) fn scroll_task(
    position: Node,
    axis: Axis,
    distance: f32,
    duration: Duration,
    timing: Easing,
) -> AnimationTask {
    let mut applied = 0.0;
    AnimationTask::new(duration, move |progress| {
        let target = round_to(distance * progress, 3);
        scroll_by(&position, axis, target - applied);
        applied = target;
    })
    .timing(timing)
}

/// One axis of custom scrollbar
pub struct Scrollbar {
    nodes: ScrollbarNodes,
    queue: AnimationQueue,
    visibility: VisibilityState,
    track: Track,
    thumb: Thumb,
    button_start: Button,
    button_end: Button,
}

impl Scrollbar {
    pub(crate) fn new(nodes: ScrollbarNodes) -> Self {
        Self {
            nodes,
            queue: AnimationQueue::new(),
            visibility: VisibilityState::default(),
            track: Track::default(),
            thumb: Thumb::default(),
            button_start: Button::new(LogicalDirection::Start),
            button_end: Button::new(LogicalDirection::End),
        }
    }

    pub fn axis(&self) -> Axis {
        self.nodes.axis()
    }

    pub fn nodes(&self) -> &ScrollbarNodes {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut ScrollbarNodes {
        &mut self.nodes
    }

    pub fn queue(&self) -> &AnimationQueue {
        &self.queue
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    /// Whether the scrollbar takes part in layout for the current state
    pub fn is_displayed(&self, context: &ScrollAreaContext, state: &ReducerState) -> bool {
        let axis = self.axis();
        context
            .overflow(axis)
            .displays_scrollbar(state.is_content_overflowing(axis))
    }

    /// Displayed and not hidden by the visibility policy
    pub fn is_visible(&self, context: &ScrollAreaContext, state: &ReducerState) -> bool {
        self.is_displayed(context, state) && self.visibility.is_visible()
    }

    fn is_pressed(&self) -> bool {
        self.track.is_pressed()
            || self.thumb.is_dragging()
            || self.button_start.is_pressed()
            || self.button_end.is_pressed()
    }

    fn sync_interaction(&mut self, now: Duration) {
        let pressed = self.is_pressed();
        self.visibility.set_interacting(pressed, now);
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Fail with `MissingNode` unless the track and thumb are registered
    pub(crate) fn validate(&self) -> Result<()> {
        self.nodes.require_track(SCROLLBAR_NAME)?;
        self.nodes.require_thumb(SCROLLBAR_NAME)?;
        Ok(())
    }

    /// Check the required parts and mark every registered node
    pub(crate) fn attach(&mut self, context: &ScrollAreaContext) -> Result<()> {
        self.validate()?;

        let axis = self.axis();
        for (role, node) in self.nodes.registered() {
            node.set_attribute(&css::part_attribute(role.part_name()), "");
            node.set_attribute(css::DATA_AXIS, axis.as_str());
            if let NodeRole::Scrollbar(_) = role {
                node.set_attribute(css::DATA_ORIENTATION, axis.orientation().as_str());
            }
        }

        self.visibility =
            VisibilityState::new(context.scrollbar_visibility(), context.rest_timeout());
        Ok(())
    }

    /// Stop animations and drop every press
    pub(crate) fn detach(&mut self, env: &mut PartEnv<'_>) {
        self.cancel(env);
        self.visibility.reset();
        for (_, node) in self.nodes.registered() {
            node.remove_attribute(css::DATA_STATE);
        }
    }

    pub(crate) fn cancel(&mut self, env: &mut PartEnv<'_>) {
        let nodes = &self.nodes;
        self.track.cancel(nodes, env);
        self.thumb.end_drag(nodes, env);
        self.button_start.end_press(nodes, env);
        self.button_end.end_press(nodes, env);
        self.queue.stop();
    }

    /// Hide the custom parts when scrolling natively
    pub(crate) fn hide(&self) {
        set_displayed(self.nodes.scrollbar(), false);
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub(crate) fn on_pointer_down(
        &mut self,
        part: ScrollAreaPart,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) -> Result<()> {
        let axis = self.axis();
        let nodes = &self.nodes;
        let queue = &mut self.queue;
        let result = match part {
            ScrollAreaPart::Track(_) => self.track.on_pointer_down(axis, nodes, queue, event, env),
            ScrollAreaPart::Thumb(_) => self.thumb.on_pointer_down(axis, nodes, event, env),
            ScrollAreaPart::Button(_, LogicalDirection::Start) => {
                self.button_start.on_pointer_down(axis, nodes, queue, event, env)
            }
            ScrollAreaPart::Button(_, LogicalDirection::End) => {
                self.button_end.on_pointer_down(axis, nodes, queue, event, env)
            }
            ScrollAreaPart::Scrollbar(_) => Ok(()),
        };
        self.sync_interaction(event.time_stamp);
        result
    }

    pub(crate) fn on_pointer_move(
        &mut self,
        part: ScrollAreaPart,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        let axis = self.axis();
        let nodes = &self.nodes;
        match part {
            ScrollAreaPart::Track(_) => {
                self.track.on_pointer_move(nodes, &mut self.queue, event, env)
            }
            ScrollAreaPart::Thumb(_) => self.thumb.on_pointer_move(axis, event, env),
            ScrollAreaPart::Button(_, LogicalDirection::Start) => {
                self.button_start.on_pointer_move(nodes, event, env)
            }
            ScrollAreaPart::Button(_, LogicalDirection::End) => {
                self.button_end.on_pointer_move(nodes, event, env)
            }
            ScrollAreaPart::Scrollbar(_) => {}
        }
    }

    pub(crate) fn on_pointer_up(
        &mut self,
        part: ScrollAreaPart,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        let nodes = &self.nodes;
        match part {
            ScrollAreaPart::Track(_) => self.track.on_pointer_up(nodes, event, env),
            ScrollAreaPart::Thumb(_) => self.thumb.on_pointer_up(nodes, event, env),
            ScrollAreaPart::Button(_, LogicalDirection::Start) => {
                self.button_start.on_pointer_up(nodes, event, env)
            }
            ScrollAreaPart::Button(_, LogicalDirection::End) => {
                self.button_end.on_pointer_up(nodes, event, env)
            }
            ScrollAreaPart::Scrollbar(_) => {}
        }
        self.sync_interaction(event.time_stamp);
    }

    /// Forward a wheel over the scrollbar to the scrollable element
    pub(crate) fn on_wheel(&mut self, event: &WheelEvent, env: &PartEnv<'_>) {
        let delta = event.delta_along(self.axis());
        if delta != 0.0 {
            scroll_by(env.position, self.axis(), delta);
        }
    }

    /// The scroll offset along this axis changed
    pub(crate) fn on_scroll(&mut self, now: Duration) {
        self.visibility.on_activity(now);
    }

    pub(crate) fn on_hover(&mut self, hovered: bool, now: Duration) {
        self.visibility.set_hovered(hovered, now);
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Advance timers and animations; returns whether more frames are needed
    pub(crate) fn tick(&mut self, now: Duration, env: &mut PartEnv<'_>) -> Result<bool> {
        let axis = self.axis();

        if let Some(press) = self.track.take_forwarded_press(env) {
            tracing::trace!(%axis, "forwarding track press to thumb");
            self.thumb.on_pointer_down(axis, &self.nodes, &press, env)?;
        }

        self.track
            .tick(now, axis, &self.nodes, &mut self.queue, env);
        self.button_start
            .tick(now, axis, &self.nodes, &mut self.queue, env);
        self.button_end
            .tick(now, axis, &self.nodes, &mut self.queue, env);
        let animating = self.queue.tick(now);

        self.sync_interaction(now);
        self.visibility.tick(now);

        Ok(animating
            || self.track.is_pending()
            || self.button_start.is_pending()
            || self.button_end.is_pending()
            || self.visibility.is_pending())
    }

    /// Write display, visibility and thumb geometry
    pub(crate) fn render(
        &self,
        context: &ScrollAreaContext,
        state: &ReducerState,
        position: &Node,
        reposition_thumb: bool,
    ) {
        let axis = self.axis();
        let scrollbar = self.nodes.scrollbar();
        let displayed = self.is_displayed(context, state);

        set_displayed(scrollbar, displayed);
        let visible = displayed && self.visibility.is_visible();
        scrollbar.set_attribute(css::DATA_STATE, if visible { "visible" } else { "hidden" });

        if reposition_thumb {
            if let Some(thumb) = self.nodes.thumb() {
                let track_size = state.dom_sizes.track(axis).along(axis);
                ThumbGeometry::compute(position, axis, track_size).apply(thumb, axis);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::{Element, HeadlessElement, Point, Rect, Size};

    fn scroller() -> Node {
        HeadlessElement::new()
            .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
            .with_scroll_size(Size::new(400.0, 2000.0))
            .into_rc()
    }

    #[test]
    fn test_scroll_task_lands_on_distance() {
        let position = scroller();
        let mut queue = AnimationQueue::new();
        let target = position.clone();
        queue.enqueue(move || {
            scroll_task(target, Axis::Y, 400.0, Duration::from_millis(200), Easing::SCROLL)
        });

        let mut now = Duration::ZERO;
        while queue.tick(now) {
            now += Duration::from_millis(16);
        }
        assert!((position.scroll_offset().y - 400.0).abs() < 0.01);
        assert_eq!(position.scroll_offset().x, 0.0);
    }

    #[test]
    fn test_scroll_task_keeps_outside_scrolling() {
        let position = scroller();
        let task = scroll_task(
            position.clone(),
            Axis::Y,
            100.0,
            Duration::from_millis(100),
            Easing::Linear,
        );
        let mut animation = interop_animation::Animation::start(task, Duration::ZERO);
        animation.step(Duration::from_millis(50));
        position.set_scroll_offset(Point::new(0.0, position.scroll_offset().y + 500.0));
        animation.step(Duration::from_millis(100));
        assert_eq!(position.scroll_offset().y, 600.0);
    }

    #[test]
    fn test_attach_requires_track_and_thumb() {
        let context = ScrollAreaContext::resolve(
            &crate::ScrollAreaConfig::default(),
            &interop_core::HeadlessPlatform::new(),
        );
        let nodes = ScrollbarNodes::new(Axis::Y, HeadlessElement::new().into_rc());
        let mut scrollbar = Scrollbar::new(nodes);
        assert!(matches!(
            scrollbar.attach(&context),
            Err(crate::ScrollAreaError::MissingNode {
                component: SCROLLBAR_NAME,
                role: NodeRole::Track(Axis::Y)
            })
        ));
    }
}
