//! Scroll area state machine
//!
//! The root owns a single [`ReducerState`] and only ever replaces it with
//! the result of [`reducer`]. Parts report what happened as
//! [`ScrollAreaEvent`]s; the reducer never derives one field from another.

use interop_core::{Axis, Size};

use crate::types::ResizeBehavior;

// ============================================================================
// Interaction mode
// ============================================================================

/// Current pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollAreaState {
    #[default]
    Idle,
    /// Dragging a thumb
    Thumbing,
    /// Holding the pointer on a track
    Tracking,
    /// Holding a scroll button
    ButtonScrolling,
}

impl ScrollAreaState {
    /// Transition for an interaction event, `None` if the event doesn't apply
    pub fn on_event(&self, event: &ScrollAreaEvent) -> Option<Self> {
        use ScrollAreaEvent::*;
        use ScrollAreaState::*;

        match (self, event) {
            (_, StartThumbing) => Some(Thumbing),
            (_, StartTracking) => Some(Tracking),
            (_, StartButtonPress) => Some(ButtonScrolling),
            (Thumbing, StopThumbing) => Some(Idle),
            (Tracking, StopTracking) => Some(Idle),
            (ButtonScrolling, StopButtonPress) => Some(Idle),
            _ => None,
        }
    }

    /// A thumb is being dragged
    pub fn is_dragging(&self) -> bool {
        *self == ScrollAreaState::Thumbing
    }

    /// Scrolling is driven by a held track or button
    pub fn is_scrolling(&self) -> bool {
        matches!(
            self,
            ScrollAreaState::Tracking | ScrollAreaState::ButtonScrolling
        )
    }
}

// ============================================================================
// Reducer state
// ============================================================================

/// Border-box sizes of the observed scrollbar parts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DomSizes {
    pub scrollbar_x: Size,
    pub scrollbar_y: Size,
    pub track_x: Size,
    pub track_y: Size,
}

impl DomSizes {
    pub fn scrollbar(&self, axis: Axis) -> Size {
        match axis {
            Axis::X => self.scrollbar_x,
            Axis::Y => self.scrollbar_y,
        }
    }

    pub fn track(&self, axis: Axis) -> Size {
        match axis {
            Axis::X => self.track_x,
            Axis::Y => self.track_y,
        }
    }
}

/// Everything the root knows about its parts
#[derive(Debug, Clone, PartialEq)]
pub struct ReducerState {
    pub state: ScrollAreaState,
    /// Resize affordance read back from the computed style
    pub explicit_resize: ResizeBehavior,
    pub is_content_overflowing_x: bool,
    pub is_content_overflowing_y: bool,
    pub dom_sizes: DomSizes,
}

impl Default for ReducerState {
    fn default() -> Self {
        Self {
            state: ScrollAreaState::Idle,
            explicit_resize: ResizeBehavior::Initial,
            is_content_overflowing_x: false,
            is_content_overflowing_y: false,
            dom_sizes: DomSizes::default(),
        }
    }
}

impl ReducerState {
    pub fn is_content_overflowing(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.is_content_overflowing_x,
            Axis::Y => self.is_content_overflowing_y,
        }
    }
}

/// Something that happened to the scroll area
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ScrollAreaEvent {
    SetExplicitResize(ResizeBehavior),
    SetContentOverflowing { x: bool, y: bool },
    HandleScrollbarXResize(Size),
    HandleScrollbarYResize(Size),
    HandleTrackXResize(Size),
    HandleTrackYResize(Size),
    StartThumbing,
    StopThumbing,
    StartTracking,
    StopTracking,
    StartButtonPress,
    StopButtonPress,
}

impl ScrollAreaEvent {
    /// Scrollbar resize event for `axis`
    pub fn scrollbar_resize(axis: Axis, size: Size) -> Self {
        match axis {
            Axis::X => ScrollAreaEvent::HandleScrollbarXResize(size),
            Axis::Y => ScrollAreaEvent::HandleScrollbarYResize(size),
        }
    }

    /// Track resize event for `axis`
    pub fn track_resize(axis: Axis, size: Size) -> Self {
        match axis {
            Axis::X => ScrollAreaEvent::HandleTrackXResize(size),
            Axis::Y => ScrollAreaEvent::HandleTrackYResize(size),
        }
    }
}

/// Apply `event` to `state`
///
/// Each event replaces exactly the field (or overflow pair) it names.
/// Interaction events that don't apply to the current mode leave the state
/// unchanged.
pub fn reducer(state: &ReducerState, event: ScrollAreaEvent) -> ReducerState {
    let mut next = state.clone();
    match event {
        ScrollAreaEvent::SetExplicitResize(value) => next.explicit_resize = value,
        ScrollAreaEvent::SetContentOverflowing { x, y } => {
            next.is_content_overflowing_x = x;
            next.is_content_overflowing_y = y;
        }
        ScrollAreaEvent::HandleScrollbarXResize(size) => next.dom_sizes.scrollbar_x = size,
        ScrollAreaEvent::HandleScrollbarYResize(size) => next.dom_sizes.scrollbar_y = size,
        ScrollAreaEvent::HandleTrackXResize(size) => next.dom_sizes.track_x = size,
        ScrollAreaEvent::HandleTrackYResize(size) => next.dom_sizes.track_y = size,
        ScrollAreaEvent::StartThumbing
        | ScrollAreaEvent::StopThumbing
        | ScrollAreaEvent::StartTracking
        | ScrollAreaEvent::StopTracking
        | ScrollAreaEvent::StartButtonPress
        | ScrollAreaEvent::StopButtonPress => {
            if let Some(mode) = state.state.on_event(&event) {
                next.state = mode;
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ReducerState::default();
        assert_eq!(state.state, ScrollAreaState::Idle);
        assert_eq!(state.explicit_resize, ResizeBehavior::Initial);
        assert!(!state.is_content_overflowing(Axis::X));
    }

    #[test]
    fn test_size_events_touch_one_field() {
        let state = ReducerState::default();
        let size = Size::new(12.0, 400.0);

        let next = reducer(&state, ScrollAreaEvent::scrollbar_resize(Axis::Y, size));
        assert_eq!(next.dom_sizes.scrollbar_y, size);
        assert_eq!(
            DomSizes {
                scrollbar_y: Size::ZERO,
                ..next.dom_sizes
            },
            state.dom_sizes
        );

        let next = reducer(&next, ScrollAreaEvent::track_resize(Axis::X, size));
        assert_eq!(next.dom_sizes.track(Axis::X), size);
        assert_eq!(next.dom_sizes.scrollbar(Axis::Y), size);
    }

    #[test]
    fn test_overflow_and_resize_events() {
        let state = reducer(
            &ReducerState::default(),
            ScrollAreaEvent::SetContentOverflowing { x: false, y: true },
        );
        assert!(state.is_content_overflowing(Axis::Y));
        assert!(!state.is_content_overflowing(Axis::X));

        let state = reducer(&state, ScrollAreaEvent::SetExplicitResize(ResizeBehavior::Both));
        assert_eq!(state.explicit_resize, ResizeBehavior::Both);
        assert!(state.is_content_overflowing_y);
    }

    #[test]
    fn test_interaction_transitions() {
        let state = reducer(&ReducerState::default(), ScrollAreaEvent::StartThumbing);
        assert!(state.state.is_dragging());

        // Stopping a different mode is ignored
        let same = reducer(&state, ScrollAreaEvent::StopTracking);
        assert_eq!(same, state);

        let idle = reducer(&state, ScrollAreaEvent::StopThumbing);
        assert_eq!(idle.state, ScrollAreaState::Idle);

        let pressing = reducer(&idle, ScrollAreaEvent::StartButtonPress);
        assert!(pressing.state.is_scrolling());
    }

    #[test]
    fn test_on_event_table() {
        use ScrollAreaState::*;
        assert_eq!(Idle.on_event(&ScrollAreaEvent::StopThumbing), None);
        assert_eq!(Idle.on_event(&ScrollAreaEvent::StartTracking), Some(Tracking));
        assert_eq!(
            Tracking.on_event(&ScrollAreaEvent::HandleTrackXResize(Size::ZERO)),
            None
        );
    }
}
