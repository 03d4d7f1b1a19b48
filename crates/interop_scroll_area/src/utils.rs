//! Axis-parameterised scroll geometry
//!
//! All functions read from (and sometimes write to) the scrollable position
//! element through [`Element`]. Degenerate geometry (zero-sized tracks or
//! content) never produces NaN; writes are skipped instead.

use std::time::Duration;

use interop_core::{Axis, Element, LogicalRect, Point, Rect};

use crate::types::LogicalDirection;

/// Shortest duration of a long page scroll
pub const LONG_PAGE_MIN_DURATION: Duration = Duration::from_millis(100);
/// Longest duration of a long page scroll
pub const LONG_PAGE_MAX_DURATION: Duration = Duration::from_millis(500);

pub fn get_client_size(el: &dyn Element, axis: Axis) -> f32 {
    el.client_size().along(axis)
}

pub fn get_scroll_size(el: &dyn Element, axis: Axis) -> f32 {
    el.scroll_size().along(axis)
}

pub fn get_scroll_position(el: &dyn Element, axis: Axis) -> f32 {
    el.scroll_offset().along(axis)
}

/// Largest valid scroll offset along `axis`
pub fn get_max_scroll_position(el: &dyn Element, axis: Axis) -> f32 {
    (get_scroll_size(el, axis) - get_client_size(el, axis)).max(0.0)
}

/// Write a scroll offset clamped to `[0, max]`; returns the applied offset
pub fn set_scroll_position(el: &dyn Element, axis: Axis, value: f32) -> f32 {
    if !value.is_finite() {
        return get_scroll_position(el, axis);
    }
    let clamped = value.clamp(0.0, get_max_scroll_position(el, axis));
    el.set_scroll_offset(el.scroll_offset().with_along(axis, clamped));
    get_scroll_position(el, axis)
}

/// Move the scroll offset by `delta`; returns the applied offset
pub fn scroll_by(el: &dyn Element, axis: Axis, delta: f32) -> f32 {
    set_scroll_position(el, axis, get_scroll_position(el, axis) + delta)
}

/// Fraction of the content that is visible, in `(0, 1]`
pub fn get_visible_to_total_ratio(el: &dyn Element, axis: Axis) -> f32 {
    let total = get_scroll_size(el, axis);
    if total <= 0.0 {
        return 1.0;
    }
    (get_client_size(el, axis) / total).min(1.0)
}

/// Whether content overflows along `axis`
pub fn should_overflow(el: &dyn Element, axis: Axis) -> bool {
    get_visible_to_total_ratio(el, axis) < 1.0
}

/// Whether scrolling by a delta with the sign of `delta` would move anything
pub fn can_scroll(el: &dyn Element, axis: Axis, delta: f32) -> bool {
    let position = get_scroll_position(el, axis);
    if delta < 0.0 {
        position > 0.0
    } else if delta > 0.0 {
        position < get_max_scroll_position(el, axis)
    } else {
        false
    }
}

pub fn get_logical_rect(el: &dyn Element, axis: Axis) -> LogicalRect {
    el.bounding_rect().logical(axis)
}

/// Which way a click on the track should scroll
pub fn determine_scroll_direction_from_track_click(
    pointer: Point,
    axis: Axis,
    thumb: LogicalRect,
) -> LogicalDirection {
    if pointer.along(axis) < thumb.position {
        LogicalDirection::Start
    } else {
        LogicalDirection::End
    }
}

/// Distance of a single page scroll
pub fn get_paged_scroll_distance(visible_size: f32) -> f32 {
    visible_size.max(0.0)
}

/// Target offset after moving `distance` in `direction` (unclamped)
pub fn get_new_scroll_position(
    el: &dyn Element,
    axis: Axis,
    direction: LogicalDirection,
    distance: f32,
) -> f32 {
    get_scroll_position(el, axis) + direction.sign() * distance
}

pub fn pointer_is_outside_element(point: Point, rect: Rect) -> bool {
    !rect.contains(point)
}

/// Round to `places` decimal places
pub fn round_to(value: f32, places: i32) -> f32 {
    let factor = 10f32.powi(places);
    (value * factor).round() / factor
}

// ============================================================================
// Long page scroll
// ============================================================================

/// Inputs for the follow-up scroll of a held track press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongPageInput {
    /// Pointer position along the axis, relative to the track start
    pub pointer_offset: f32,
    pub track_size: f32,
    pub scroll_size: f32,
    pub visible_size: f32,
    /// Scroll offset when the hold fires
    pub start_position: f32,
    pub direction: LogicalDirection,
}

/// Follow-up scroll of a held track press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongPageJump {
    /// Signed distance to travel
    pub distance: f32,
    pub duration: Duration,
}

/// Distance that brings the viewport around the pointer
///
/// Returns `None` when the track is degenerate or when the first page
/// scroll already went past the pointer.
pub fn get_long_paged_scroll_distance(input: LongPageInput) -> Option<LongPageJump> {
    if input.track_size <= 0.0 || !input.pointer_offset.is_finite() {
        return None;
    }

    let ratio = (input.pointer_offset.round() / input.track_size * 100.0).round() / 100.0;
    let destination = match input.direction {
        LogicalDirection::Start => ratio * input.scroll_size,
        LogicalDirection::End => ratio * input.scroll_size - input.visible_size,
    };

    let half = input.visible_size / 2.0;
    let distance = if destination < input.start_position {
        destination - input.start_position - half
    } else {
        destination - input.start_position + half
    };

    let overshot = match input.direction {
        LogicalDirection::Start => distance > 0.0,
        LogicalDirection::End => distance < 0.0,
    };
    if overshot {
        return None;
    }

    let millis = distance.abs().round() as u64;
    let duration = Duration::from_millis(millis)
        .clamp(LONG_PAGE_MIN_DURATION, LONG_PAGE_MAX_DURATION);

    Some(LongPageJump { distance, duration })
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::{HeadlessElement, Size};

    fn scroller() -> HeadlessElement {
        HeadlessElement::new()
            .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
            .with_scroll_size(Size::new(400.0, 2000.0))
    }

    #[test]
    fn test_set_scroll_position_round_trips_in_bounds() {
        let el = scroller();
        for value in [0.0, 1.0, 800.0, 1600.0] {
            assert_eq!(set_scroll_position(&el, Axis::Y, value), value);
            assert_eq!(get_scroll_position(&el, Axis::Y), value);
        }
    }

    #[test]
    fn test_set_scroll_position_clamps() {
        let el = scroller();
        assert_eq!(set_scroll_position(&el, Axis::Y, 5000.0), 1600.0);
        assert_eq!(set_scroll_position(&el, Axis::Y, -5.0), 0.0);
        // No overflow on x: everything clamps to 0
        assert_eq!(set_scroll_position(&el, Axis::X, 30.0), 0.0);
    }

    #[test]
    fn test_nan_is_ignored() {
        let el = scroller();
        set_scroll_position(&el, Axis::Y, 300.0);
        assert_eq!(set_scroll_position(&el, Axis::Y, f32::NAN), 300.0);
    }

    #[test]
    fn test_ratio_and_overflow() {
        let el = scroller();
        assert_eq!(get_visible_to_total_ratio(&el, Axis::Y), 0.2);
        assert!(should_overflow(&el, Axis::Y));
        assert_eq!(get_visible_to_total_ratio(&el, Axis::X), 1.0);
        assert!(!should_overflow(&el, Axis::X));

        let empty = HeadlessElement::new();
        assert_eq!(get_visible_to_total_ratio(&empty, Axis::Y), 1.0);
        assert!(!should_overflow(&empty, Axis::Y));
    }

    #[test]
    fn test_can_scroll_at_edges() {
        let el = scroller();
        assert!(!can_scroll(&el, Axis::Y, -1.0));
        assert!(can_scroll(&el, Axis::Y, 1.0));
        set_scroll_position(&el, Axis::Y, 1600.0);
        assert!(can_scroll(&el, Axis::Y, -1.0));
        assert!(!can_scroll(&el, Axis::Y, 1.0));
        assert!(!can_scroll(&el, Axis::Y, 0.0));
    }

    #[test]
    fn test_track_click_direction() {
        let thumb = LogicalRect::new(100.0, 80.0);
        let start = determine_scroll_direction_from_track_click(
            Point::new(0.0, 50.0),
            Axis::Y,
            thumb,
        );
        let end = determine_scroll_direction_from_track_click(
            Point::new(0.0, 300.0),
            Axis::Y,
            thumb,
        );
        assert_eq!(start, LogicalDirection::Start);
        assert_eq!(end, LogicalDirection::End);
    }

    #[test]
    fn test_new_scroll_position_and_scroll_by() {
        let el = scroller();
        set_scroll_position(&el, Axis::Y, 500.0);
        assert_eq!(
            get_new_scroll_position(&el, Axis::Y, LogicalDirection::Start, 400.0),
            100.0
        );
        assert_eq!(scroll_by(&el, Axis::Y, 51.0), 551.0);
    }

    #[test]
    fn test_long_page_lands_around_pointer() {
        // After one page from 0, pointer at 75% of a 400px track
        let jump = get_long_paged_scroll_distance(LongPageInput {
            pointer_offset: 300.0,
            track_size: 400.0,
            scroll_size: 2000.0,
            visible_size: 400.0,
            start_position: 400.0,
            direction: LogicalDirection::End,
        })
        .expect("jump");
        assert_eq!(jump.distance, 900.0);
        assert_eq!(jump.duration, LONG_PAGE_MAX_DURATION);
    }

    #[test]
    fn test_long_page_duration_floor() {
        let jump = get_long_paged_scroll_distance(LongPageInput {
            pointer_offset: 300.0,
            track_size: 400.0,
            scroll_size: 2000.0,
            visible_size: 100.0,
            start_position: 1380.0,
            direction: LogicalDirection::End,
        })
        .expect("jump");
        assert_eq!(jump.distance, 70.0);
        assert_eq!(jump.duration, LONG_PAGE_MIN_DURATION);
    }

    #[test]
    fn test_long_page_overshoot_and_degenerate_track() {
        let overshot = get_long_paged_scroll_distance(LongPageInput {
            pointer_offset: 50.0,
            track_size: 400.0,
            scroll_size: 2000.0,
            visible_size: 400.0,
            start_position: 800.0,
            direction: LogicalDirection::End,
        });
        assert_eq!(overshot, None);

        let degenerate = get_long_paged_scroll_distance(LongPageInput {
            pointer_offset: 50.0,
            track_size: 0.0,
            scroll_size: 2000.0,
            visible_size: 400.0,
            start_position: 0.0,
            direction: LogicalDirection::End,
        });
        assert_eq!(degenerate, None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(0.125, 0), 0.0);
    }
}
