//! Interop Scroll Area
//!
//! Headless custom scrollbars for an element that scrolls natively. The
//! engine keeps the content scrollable by the platform, hides its scrollbars
//! and renders thumb geometry, visibility and interaction state onto
//! host-provided nodes instead.
//!
//! # Features
//!
//! - **Thumb**: size and offset track the scroll position; dragging maps
//!   pointer travel back onto the scroll range
//! - **Track**: page or jump on click, long-page while held
//! - **Buttons**: stepped scrolling, repeating while held
//! - **Visibility**: `always`, `scroll` or `hover` with a rest timeout
//! - **Native fallback**: platform scrollbars when a required feature is
//!   missing or native scrolling is forced
//! - **Reduced motion**: animations become immediate jumps
//!
//! Time is supplied by the host. Handlers take the event timestamp and
//! [`ScrollArea::tick`] advances timers and animations once per frame.

pub mod button;
pub mod config;
pub mod corner;
pub mod css;
pub mod error;
pub mod nodes;
pub mod root;
pub mod scrollbar;
pub mod state;
pub mod support;
pub mod thumb;
pub mod track;
pub mod types;
pub mod utils;
pub mod viewport;
pub mod visibility;

pub use config::{ScrollAreaConfig, ScrollAreaContext, DEFAULT_REST_TIMEOUT_MS};
pub use corner::{CornerGeometry, CornerSide};
pub use error::{Result, ScrollAreaError};
pub use nodes::{NodeRole, ScrollAreaNodes, ScrollbarNodes};
pub use root::{MountMode, ScrollArea};
pub use scrollbar::Scrollbar;
pub use state::{reducer, DomSizes, ReducerState, ScrollAreaEvent, ScrollAreaState};
pub use support::{missing_features, should_fallback_to_native, REQUIRED_FEATURES};
pub use thumb::ThumbGeometry;
pub use types::{
    LogicalDirection, OverflowBehavior, ResizeBehavior, ResizeTarget, ScrollAreaPart,
    ScrollbarVisibility, TrackClickBehavior,
};
pub use visibility::VisibilityState;
