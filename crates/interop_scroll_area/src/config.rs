//! Scroll area configuration
//!
//! [`ScrollAreaConfig`] holds the consumer-facing options. At mount it is
//! resolved against the platform into a read-only [`ScrollAreaContext`] that
//! every part reads from.

use std::time::Duration;

use interop_core::{Axis, AxisMap, Direction, Platform};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{OverflowBehavior, ResizeBehavior, ScrollbarVisibility, TrackClickBehavior};

/// Default delay before `scroll`/`hover` scrollbars hide, in milliseconds
pub const DEFAULT_REST_TIMEOUT_MS: u64 = 600;

/// Options for a scroll area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollAreaConfig {
    /// Overflow behaviour of the horizontal axis
    pub overflow_x: OverflowBehavior,
    /// Overflow behaviour of the vertical axis
    pub overflow_y: OverflowBehavior,
    pub scrollbar_visibility: ScrollbarVisibility,
    /// Milliseconds before hiding scrollbars after the last interaction
    pub scrollbar_visibility_rest_timeout: u64,
    pub track_click_behavior: TrackClickBehavior,
    /// Skip feature detection and always use native scrolling
    pub force_native: bool,
    /// Override the platform reduced-motion preference
    pub prefers_reduced_motion: Option<bool>,
    pub dir: Direction,
    /// Resize affordance of the scrollable element
    pub resize: ResizeBehavior,
}

impl Default for ScrollAreaConfig {
    fn default() -> Self {
        Self {
            overflow_x: OverflowBehavior::Auto,
            overflow_y: OverflowBehavior::Auto,
            scrollbar_visibility: ScrollbarVisibility::Always,
            scrollbar_visibility_rest_timeout: DEFAULT_REST_TIMEOUT_MS,
            track_click_behavior: TrackClickBehavior::Relative,
            force_native: false,
            prefers_reduced_motion: None,
            dir: Direction::Ltr,
            resize: ResizeBehavior::None,
        }
    }
}

impl ScrollAreaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML document; missing keys keep their defaults
    ///
    /// ```rust
    /// use interop_scroll_area::{ScrollAreaConfig, TrackClickBehavior};
    ///
    /// let config = ScrollAreaConfig::from_toml_str(r#"
    ///     trackClickBehavior = "page"
    ///     scrollbarVisibilityRestTimeout = 900
    /// "#).unwrap();
    /// assert_eq!(config.track_click_behavior, TrackClickBehavior::Page);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set both overflow behaviours
    pub fn overflow(mut self, overflow: OverflowBehavior) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }

    pub fn overflow_x(mut self, overflow: OverflowBehavior) -> Self {
        self.overflow_x = overflow;
        self
    }

    pub fn overflow_y(mut self, overflow: OverflowBehavior) -> Self {
        self.overflow_y = overflow;
        self
    }

    pub fn scrollbar_visibility(mut self, visibility: ScrollbarVisibility) -> Self {
        self.scrollbar_visibility = visibility;
        self
    }

    pub fn rest_timeout(mut self, timeout: Duration) -> Self {
        self.scrollbar_visibility_rest_timeout = timeout.as_millis() as u64;
        self
    }

    pub fn track_click_behavior(mut self, behavior: TrackClickBehavior) -> Self {
        self.track_click_behavior = behavior;
        self
    }

    pub fn force_native(mut self, force: bool) -> Self {
        self.force_native = force;
        self
    }

    pub fn prefers_reduced_motion(mut self, reduced: bool) -> Self {
        self.prefers_reduced_motion = Some(reduced);
        self
    }

    pub fn dir(mut self, dir: Direction) -> Self {
        self.dir = dir;
        self
    }

    pub fn resize(mut self, resize: ResizeBehavior) -> Self {
        self.resize = resize;
        self
    }

    /// Overflow behaviour of `axis`
    pub fn overflow_for(&self, axis: Axis) -> OverflowBehavior {
        match axis {
            Axis::X => self.overflow_x,
            Axis::Y => self.overflow_y,
        }
    }
}

// ============================================================================
// Context
// ============================================================================

/// Values shared with every part, fixed for the lifetime of a mount
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAreaContext {
    overflow: AxisMap<OverflowBehavior>,
    scrollbar_visibility: ScrollbarVisibility,
    rest_timeout: Duration,
    track_click_behavior: TrackClickBehavior,
    reduced_motion: bool,
    dir: Direction,
    resize: ResizeBehavior,
}

impl ScrollAreaContext {
    /// Resolve `config` against the platform preferences
    pub fn resolve(config: &ScrollAreaConfig, platform: &dyn Platform) -> Self {
        Self {
            overflow: AxisMap::new(config.overflow_x, config.overflow_y),
            scrollbar_visibility: config.scrollbar_visibility,
            rest_timeout: Duration::from_millis(config.scrollbar_visibility_rest_timeout),
            track_click_behavior: config.track_click_behavior,
            reduced_motion: config
                .prefers_reduced_motion
                .unwrap_or_else(|| platform.prefers_reduced_motion()),
            dir: config.dir,
            resize: config.resize,
        }
    }

    pub fn overflow(&self, axis: Axis) -> OverflowBehavior {
        self.overflow[axis]
    }

    pub fn scrollbar_visibility(&self) -> ScrollbarVisibility {
        self.scrollbar_visibility
    }

    pub fn rest_timeout(&self) -> Duration {
        self.rest_timeout
    }

    pub fn track_click_behavior(&self) -> TrackClickBehavior {
        self.track_click_behavior
    }

    /// Animations become instantaneous jumps
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn resize(&self) -> ResizeBehavior {
        self.resize
    }
}
