//! Attribute and custom property names written by the scroll area

use interop_core::{Axis, Element};

pub const DATA_STATE: &str = "data-state";
pub const DATA_AXIS: &str = "data-axis";
pub const DATA_DRAGGING: &str = "data-dragging";
pub const DATA_SCROLLING: &str = "data-scrolling";
pub const DATA_ORIENTATION: &str = "data-orientation";

/// Prefix of the part marker attributes
pub const PART_PREFIX: &str = "data-interop-scroll-area";

pub const SCROLLBAR_X_SIZE: &str = "--interop-scroll-area-scrollbar-x-size";
pub const SCROLLBAR_Y_SIZE: &str = "--interop-scroll-area-scrollbar-y-size";
pub const SCROLLBAR_X_OFFSET: &str = "--interop-scroll-area-scrollbar-x-offset";
pub const SCROLLBAR_Y_OFFSET: &str = "--interop-scroll-area-scrollbar-y-offset";
pub const CORNER_WIDTH: &str = "--interop-scroll-area-corner-width";
pub const CORNER_HEIGHT: &str = "--interop-scroll-area-corner-height";
pub const CORNER_LEFT: &str = "--interop-scroll-area-corner-left";
pub const CORNER_RIGHT: &str = "--interop-scroll-area-corner-right";
pub const CORNER_CURSOR: &str = "--interop-scroll-area-corner-cursor";

pub fn scrollbar_size_property(axis: Axis) -> &'static str {
    match axis {
        Axis::X => SCROLLBAR_X_SIZE,
        Axis::Y => SCROLLBAR_Y_SIZE,
    }
}

pub fn scrollbar_offset_property(axis: Axis) -> &'static str {
    match axis {
        Axis::X => SCROLLBAR_X_OFFSET,
        Axis::Y => SCROLLBAR_Y_OFFSET,
    }
}

/// Marker attribute for a part, e.g. `data-interop-scroll-area-thumb`
pub fn part_attribute(part: &str) -> String {
    format!("{PART_PREFIX}-{part}")
}

/// CSS pixel value; zero is written unitless
pub fn px(value: f32) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{value}px")
    }
}

pub fn percent(value: f32) -> String {
    format!("{value}%")
}

/// Show or hide an element through `display`
pub fn set_displayed(el: &dyn Element, displayed: bool) {
    if displayed {
        el.remove_style("display");
    } else {
        el.set_style("display", "none");
    }
}
