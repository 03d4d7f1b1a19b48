//! Scroll buttons
//!
//! A press scrolls one step toward the button's end of the track. Holding it
//! keeps stepping for as long as the button holds pointer capture and the
//! content can still move.

use std::time::Duration;

use interop_animation::{AnimationQueue, AnimationTask, Easing};
use interop_core::{Axis, Node, PointerEvent, PointerId, SubscriptionId, Timeout};

use crate::error::Result;
use crate::nodes::ScrollbarNodes;
use crate::scrollbar::{scroll_task, PartEnv};
use crate::state::ScrollAreaEvent;
use crate::types::{LogicalDirection, ScrollAreaPart};
use crate::utils::{can_scroll, pointer_is_outside_element, scroll_by};

const BUTTON_NAME: &str = "ScrollArea.Button";

/// Distance scrolled by one button step
pub const BUTTON_SCROLL_DISTANCE: f32 = 51.0;
/// Duration of one button step
pub const BUTTON_SCROLL_TIME: Duration = Duration::from_millis(135);
/// Hold time before a press starts repeating
pub const BUTTON_HOLD_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy)]
struct ButtonPress {
    pointer_id: PointerId,
    subscription: SubscriptionId,
}

/// Press state of one scroll button
#[derive(Debug)]
pub struct Button {
    direction: LogicalDirection,
    press: Option<ButtonPress>,
    hold: Timeout,
    /// Step timer used when motion is reduced
    repeat: Timeout,
}

impl Button {
    pub fn new(direction: LogicalDirection) -> Self {
        Self {
            direction,
            press: None,
            hold: Timeout::new(),
            repeat: Timeout::new(),
        }
    }

    pub fn direction(&self) -> LogicalDirection {
        self.direction
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.hold.is_armed() || self.repeat.is_armed()
    }

    fn delta(&self) -> f32 {
        self.direction.sign() * BUTTON_SCROLL_DISTANCE
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
        let button = nodes.require_button(self.direction, BUTTON_NAME)?;
        self.end_press(nodes, env);

        button.set_pointer_capture(event.pointer_id);
        let subscription = env.subscriptions.subscribe(
            ScrollAreaPart::Button(axis, self.direction),
            event.pointer_id,
        );
        env.dispatch(ScrollAreaEvent::StartButtonPress);
        self.press = Some(ButtonPress {
            pointer_id: event.pointer_id,
            subscription,
        });

        let delta = self.delta();
        if env.context.reduced_motion() {
            scroll_by(env.position, axis, delta);
        } else if can_scroll(env.position, axis, delta) {
            let position = env.position.clone();
            queue.enqueue(move || {
                scroll_task(position, axis, delta, BUTTON_SCROLL_TIME, Easing::SCROLL)
            });
        }

        tracing::trace!(%axis, direction = self.direction.as_str(), "button pressed");
        self.hold.arm(event.time_stamp, BUTTON_HOLD_DELAY);
        Ok(())
    }

    pub(crate) fn tick(
        &mut self,
        now: Duration,
        axis: Axis,
        nodes: &ScrollbarNodes,
        queue: &mut AnimationQueue,
        env: &PartEnv<'_>,
    ) {
        let Some(press) = self.press else {
            return;
        };
        let delta = self.delta();

        if self.hold.fire(now) {
            if env.context.reduced_motion() {
                scroll_by(env.position, axis, delta);
                self.repeat.arm(now, BUTTON_SCROLL_TIME);
            } else if let Some(button) = nodes.button(self.direction) {
                if can_scroll(env.position, axis, delta) {
                    let position = env.position.clone();
                    let button = button.clone();
                    queue.enqueue(move || {
                        continuous_step(position, button, axis, delta, press.pointer_id)
                    });
                }
            }
        }

        if self.repeat.fire(now) && can_scroll(env.position, axis, delta) {
            scroll_by(env.position, axis, delta);
            self.repeat.arm(now, BUTTON_SCROLL_TIME);
        }
    }

    pub(crate) fn on_pointer_move(
        &mut self,
        nodes: &ScrollbarNodes,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        let Some(press) = self.press else {
            return;
        };
        let Some(button) = nodes.button(self.direction) else {
            return;
        };
        if press.pointer_id != event.pointer_id || !event.is_mouse() {
            return;
        }
        if pointer_is_outside_element(event.position, button.bounding_rect()) {
            // Only the pending hold is dropped; a running repeat continues
            self.hold.clear();
            env.subscriptions.unsubscribe_move(press.subscription);
        }
    }

    pub(crate) fn on_pointer_up(
        &mut self,
        nodes: &ScrollbarNodes,
        event: &PointerEvent,
        env: &mut PartEnv<'_>,
    ) {
        if self
            .press
            .is_some_and(|press| press.pointer_id == event.pointer_id)
        {
            self.end_press(nodes, env);
        }
    }

    pub(crate) fn end_press(&mut self, nodes: &ScrollbarNodes, env: &mut PartEnv<'_>) {
        let Some(press) = self.press.take() else {
            return;
        };
        self.hold.clear();
        self.repeat.clear();
        if let Some(button) = nodes.button(self.direction) {
            button.release_pointer_capture(press.pointer_id);
        }
        env.subscriptions.unsubscribe(press.subscription);
        env.dispatch(ScrollAreaEvent::StopButtonPress);
    }
}

/// One repeating step; queues the next while the press lasts
fn continuous_step(
    position: Node,
    button: Node,
    axis: Axis,
    delta: f32,
    pointer_id: PointerId,
) -> AnimationTask {
    let next_position = position.clone();
    scroll_task(position, axis, delta, BUTTON_SCROLL_TIME, Easing::Linear).on_done(move || {
        let keep_scrolling =
            button.has_pointer_capture(pointer_id) && can_scroll(&next_position, axis, delta);
        keep_scrolling.then(|| continuous_step(next_position, button, axis, delta, pointer_id))
    })
}
