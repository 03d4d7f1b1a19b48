//! Interop Animation System
//!
//! Time-based transitions driven by the host's frame callback:
//!
//! - **Easing**: CSS-compatible cubic-bezier timing curves
//! - **Tasks**: duration + timing + per-frame draw + optional chained follow-up
//! - **Queue**: serialized execution, one task at a time, with `stop()`
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use interop_animation::{AnimationQueue, AnimationTask, Easing};
//!
//! let mut queue = AnimationQueue::new();
//! queue.enqueue(|| {
//!     AnimationTask::new(Duration::from_millis(200), |progress| {
//!         assert!((0.0..=1.0).contains(&progress));
//!     })
//!     .timing(Easing::SCROLL)
//! });
//!
//! assert!(queue.tick(Duration::ZERO));
//! assert!(!queue.tick(Duration::from_millis(200)));
//! ```

pub mod easing;
pub mod queue;
pub mod task;

pub use easing::{CubicBezier, Easing};
pub use queue::{AnimationQueue, TaskFactory};
pub use task::{Animation, AnimationHandle, AnimationStatus, AnimationTask};
