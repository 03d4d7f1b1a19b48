//! Scrollbar track
//!
//! Clicking the track outside the thumb either pages the viewport toward the
//! pointer or jumps the thumb under it, depending on
//! [`TrackClickBehavior`]. Holding a paging press long-pages until the
//! viewport reaches the pointer.

use std::time::Duration;

use interop_animation::{AnimationQueue, Easing};
use interop_core::{
    Axis, LogicalRect, Point, PointerEvent, PointerId, SubscriptionId, Timeout,
};

use crate::error::Result;
use crate::nodes::ScrollbarNodes;
use crate::scrollbar::{scroll_task, PartEnv};
use crate::state::ScrollAreaEvent;
use crate::thumb::ThumbGeometry;
use crate::types::{LogicalDirection, ScrollAreaPart, TrackClickBehavior};
use crate::utils::{
    determine_scroll_direction_from_track_click, get_client_size, get_logical_rect,
    get_long_paged_scroll_distance, get_new_scroll_position, get_paged_scroll_distance,
    get_scroll_position, get_scroll_size, pointer_is_outside_element, scroll_by,
    set_scroll_position, LongPageInput,
};

const TRACK_NAME: &str = "ScrollArea.Track";

/// Duration of a single page scroll
pub const TRACK_PAGE_DURATION: Duration = Duration::from_millis(200);
/// Hold time before a paging press starts long-paging
pub const TRACK_HOLD_DELAY: Duration = Duration::from_millis(400);
/// Time after release before queued page animations are dropped
pub const TRACK_RELEASE_GRACE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy)]
struct TrackPress {
    pointer_id: PointerId,
    pointer: Point,
    direction: LogicalDirection,
    subscription: SubscriptionId,
}

#[derive(Debug, Clone)]
struct ForwardedPress {
    event: PointerEvent,
    /// Release listener that cancels the forward
    subscription: SubscriptionId,
}

/// Press state of one track
#[derive(Debug, Default)]
pub struct Track {
    press: Option<TrackPress>,
    hold: Timeout,
    release_grace: Timeout,
    forward: Option<ForwardedPress>,
}

impl Track {
    /// A paging press is held
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Timers that still need frames
    pub fn is_pending(&self) -> bool {
        self.hold.is_armed() || self.release_grace.is_armed() || self.forward.is_some()
    }

    pub(crate) fn on_pointer_down(
        &mut self,
        axis: Axis,
        nodes: &ScrollbarNodes,
        queue: &mut AnimationQueue,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) -> Result<()> {
        if !event.is_main_click() {
            return Ok(());
        }
        let track = get_logical_rect(nodes.require_track(TRACK_NAME)?, axis);
        nodes.require_thumb(TRACK_NAME)?;

        let thumb = ThumbGeometry::compute(env.position, axis, track.size).rect_in(track);
        if thumb.size > 0.0 && thumb.contains(event.position.along(axis)) {
            // The thumb handles its own presses
            return Ok(());
        }

        match env.context.track_click_behavior() {
            TrackClickBehavior::Page => self.start_paging(axis, nodes, thumb, queue, event, env),
            TrackClickBehavior::Relative => self.jump_to_pointer(axis, track, thumb, event, env),
        }
        Ok(())
    }

    fn start_paging(
        &mut self,
        axis: Axis,
        nodes: &ScrollbarNodes,
        thumb: LogicalRect,
        queue: &mut AnimationQueue,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        self.end_press(nodes, env);

        let direction = determine_scroll_direction_from_track_click(event.position, axis, thumb);
        if let Some(track) = nodes.track() {
            track.set_pointer_capture(event.pointer_id);
        }
        let subscription = env
            .subscriptions
            .subscribe(ScrollAreaPart::Track(axis), event.pointer_id);
        env.dispatch(ScrollAreaEvent::StartTracking);
        self.release_grace.clear();

        let distance = get_paged_scroll_distance(get_client_size(env.position, axis));
        if env.context.reduced_motion() {
            let target = get_new_scroll_position(env.position, axis, direction, distance);
            set_scroll_position(env.position, axis, target);
        } else {
            let position = env.position.clone();
            queue.enqueue(move || {
                scroll_task(
                    position,
                    axis,
                    direction.sign() * distance,
                    TRACK_PAGE_DURATION,
                    Easing::SCROLL,
                )
            });
        }

        tracing::trace!(%axis, direction = direction.as_str(), distance, "track page");
        self.hold.arm(event.time_stamp, TRACK_HOLD_DELAY);
        self.press = Some(TrackPress {
            pointer_id: event.pointer_id,
            pointer: event.position,
            direction,
            subscription,
        });
    }

    fn jump_to_pointer(
        &mut self,
        axis: Axis,
        track: LogicalRect,
        thumb: LogicalRect,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        if track.size <= 0.0 {
            return;
        }
        let pointer = event.position.along(axis) - track.position;
        let scroll_size = get_scroll_size(env.position, axis);
        let target = ((pointer - thumb.size / 2.0) / track.size * scroll_size).round();
        let applied = set_scroll_position(env.position, axis, target);
        tracing::trace!(%axis, target, applied, "track jump");

        // Continue as a thumb drag from the next frame unless released first
        if let Some(previous) = self.forward.take() {
            env.subscriptions.unsubscribe(previous.subscription);
        }
        let subscription = env
            .subscriptions
            .subscribe_release(ScrollAreaPart::Track(axis), event.pointer_id);
        self.forward = Some(ForwardedPress {
            event: event.clone(),
            subscription,
        });
    }

    /// Press to replay on the thumb after a relative jump
    pub(crate) fn take_forwarded_press(&mut self, env: &mut PartEnv<'_>) -> Option<PointerEvent> {
        let forward = self.forward.take()?;
        env.subscriptions.unsubscribe(forward.subscription);
        Some(forward.event)
    }

    pub(crate) fn tick(
        &mut self,
        now: Duration,
        axis: Axis,
        nodes: &ScrollbarNodes,
        queue: &mut AnimationQueue,
        env: &mut PartEnv<'_>,
    ) {
        if self.hold.fire(now) {
            if let Some(press) = self.press {
                self.long_page(axis, nodes, queue, press, env);
            }
        }
        if self.release_grace.fire(now) {
            queue.stop();
        }
    }

    fn long_page(
        &mut self,
        axis: Axis,
        nodes: &ScrollbarNodes,
        queue: &mut AnimationQueue,
        press: TrackPress,
        env: &mut PartEnv<'_>,
    ) {
        let Some(track) = nodes.track() else {
            return;
        };
        let track = get_logical_rect(track, axis);
        let jump = get_long_paged_scroll_distance(LongPageInput {
            pointer_offset: press.pointer.along(axis) - track.position,
            track_size: track.size,
            scroll_size: get_scroll_size(env.position, axis),
            visible_size: get_client_size(env.position, axis),
            start_position: get_scroll_position(env.position, axis),
            direction: press.direction,
        });
        let Some(jump) = jump else {
            tracing::trace!(%axis, "long page skipped");
            return;
        };

        tracing::trace!(%axis, distance = jump.distance, duration = ?jump.duration, "long page");
        if env.context.reduced_motion() {
            scroll_by(env.position, axis, jump.distance);
        } else {
            let position = env.position.clone();
            queue.enqueue(move || {
                scroll_task(position, axis, jump.distance, jump.duration, Easing::Linear)
            });
        }
    }

    pub(crate) fn on_pointer_move(
        &mut self,
        nodes: &ScrollbarNodes,
        queue: &mut AnimationQueue,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        let Some(press) = self.press else {
            return;
        };
        let Some(track) = nodes.track() else {
            return;
        };
        if press.pointer_id != event.pointer_id || !event.is_mouse() {
            return;
        }
        if pointer_is_outside_element(event.position, track.bounding_rect()) {
            self.hold.clear();
            env.subscriptions.unsubscribe_move(press.subscription);
            queue.stop();
        }
    }

    pub(crate) fn on_pointer_up(
        &mut self,
        nodes: &ScrollbarNodes,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        if self
            .forward
            .as_ref()
            .is_some_and(|forward| forward.event.pointer_id == event.pointer_id)
        {
            if let Some(forward) = self.forward.take() {
                env.subscriptions.unsubscribe(forward.subscription);
            }
        }

        if self
            .press
            .is_some_and(|press| press.pointer_id == event.pointer_id)
        {
            self.end_press(nodes, env);
            self.release_grace.arm(event.time_stamp, TRACK_RELEASE_GRACE);
        }
    }

    fn end_press(&mut self, nodes: &ScrollbarNodes, env: &mut PartEnv<'_>) {
        let Some(press) = self.press.take() else {
            return;
        };
        self.hold.clear();
        if let Some(track) = nodes.track() {
            track.release_pointer_capture(press.pointer_id);
        }
        env.subscriptions.unsubscribe(press.subscription);
        env.dispatch(ScrollAreaEvent::StopTracking);
    }

    /// Drop every press, forward and timer
    pub(crate) fn cancel(&mut self, nodes: &ScrollbarNodes, env: &mut PartEnv<'_>) {
        self.end_press(nodes, env);
        if let Some(forward) = self.forward.take() {
            env.subscriptions.unsubscribe(forward.subscription);
        }
        self.release_grace.clear();
    }
}
