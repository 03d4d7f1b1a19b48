//! Pointer and wheel events
//!
//! Hosts translate their native input into these types. Every event carries
//! the host timestamp so that timers and animations can be driven without a
//! wall clock.

use std::time::Duration;

use crate::geometry::{Axis, Point};

/// Pointer identifier assigned by the host
pub type PointerId = i32;

/// Kind of device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerType {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// Pointer button codes
pub mod buttons {
    /// Primary (usually left) button
    pub const MAIN: i16 = 0;
    pub const AUXILIARY: i16 = 1;
    pub const SECONDARY: i16 = 2;
    /// Reported by moves with no button change
    pub const NONE: i16 = -1;
}

/// A pointer down/move/up event
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub pointer_type: PointerType,
    /// Button that changed state, see [`buttons`]
    pub button: i16,
    /// Position in viewport coordinates
    pub position: Point,
    /// Host timestamp
    pub time_stamp: Duration,
}

impl PointerEvent {
    /// Create a primary mouse event at `position`
    pub fn new(position: Point, time_stamp: Duration) -> Self {
        Self {
            pointer_id: 1,
            pointer_type: PointerType::Mouse,
            button: buttons::MAIN,
            position,
            time_stamp,
        }
    }

    /// Set the pointer id
    pub fn with_pointer_id(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    /// Set the pointer type
    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    /// Set the button code
    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }

    /// Whether this event was produced by the main button
    pub fn is_main_click(&self) -> bool {
        self.button == buttons::MAIN
    }

    pub fn is_mouse(&self) -> bool {
        self.pointer_type == PointerType::Mouse
    }
}

/// A wheel event
#[derive(Debug, Clone, PartialEq)]
pub struct WheelEvent {
    /// Scroll delta in pixels
    pub delta: Point,
    pub time_stamp: Duration,
}

impl WheelEvent {
    pub fn new(delta_x: f32, delta_y: f32, time_stamp: Duration) -> Self {
        Self {
            delta: Point::new(delta_x, delta_y),
            time_stamp,
        }
    }

    /// Delta to apply along `axis`
    ///
    /// Plain mouse wheels only report vertical deltas, so a horizontal bar
    /// falls back to the vertical delta when there is no horizontal one.
    pub fn delta_along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X if self.delta.x != 0.0 => self.delta.x,
            Axis::X => self.delta.y,
            Axis::Y => self.delta.y,
        }
    }
}
