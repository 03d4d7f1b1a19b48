//! Interop Core
//!
//! Platform-agnostic building blocks shared by every Interop primitive:
//!
//! - **Geometry**: axis-parameterised points, sizes and rects
//! - **Events**: pointer and wheel events stamped with host time
//! - **Elements**: the [`Element`] trait components read and write through
//! - **Platform**: feature detection and observation guards
//! - **Timers & subscriptions**: frame-driven timeouts and scoped pointer listeners
//!
//! # Example
//!
//! ```rust
//! use interop_core::{Element, HeadlessElement, Point, Rect, Size};
//!
//! let scroller = HeadlessElement::new()
//!     .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
//!     .with_scroll_size(Size::new(400.0, 2000.0));
//!
//! scroller.set_scroll_offset(Point::new(0.0, 9000.0));
//! assert_eq!(scroller.scroll_offset().y, 1600.0);
//! ```

pub mod dom;
pub mod events;
pub mod geometry;
pub mod platform;
pub mod subscription;
pub mod timer;

pub use dom::{Element, HeadlessElement, Node};
pub use events::{PointerEvent, PointerId, PointerType, WheelEvent};
pub use geometry::{Axis, AxisMap, Direction, LogicalRect, Orientation, Point, Rect, Size};
pub use platform::{Feature, HeadlessPlatform, Observation, ObservationKind, Platform};
pub use subscription::{PointerPhase, SubscriptionId, Subscriptions};
pub use timer::Timeout;
