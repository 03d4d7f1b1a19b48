//! Aspect ratio box
//!
//! A wrapper padded to `100 / ratio` percent of its width, with the content
//! stretched absolutely over it.

use interop_core::Element;

use crate::error::{PrimitiveError, Result};

/// Square by default
pub const DEFAULT_RATIO: f32 = 1.0;

/// Marker attribute on the wrapper element
pub const WRAPPER_ATTRIBUTE: &str = "data-interop-aspect-ratio-wrapper";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    ratio: f32,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
        }
    }
}

impl AspectRatio {
    /// Width over height, e.g. `16.0 / 9.0`
    pub fn new(ratio: f32) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(PrimitiveError::InvalidRatio(ratio));
        }
        Ok(Self { ratio })
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Bottom padding of the wrapper as a percentage of its width
    pub fn padding_bottom(&self) -> f32 {
        100.0 / self.ratio
    }

    pub fn apply(&self, wrapper: &dyn Element, content: &dyn Element) {
        wrapper.set_attribute(WRAPPER_ATTRIBUTE, "");
        wrapper.set_style("position", "relative");
        wrapper.set_style("width", "100%");
        wrapper.set_style("padding-bottom", &format!("{}%", self.padding_bottom()));

        content.set_style("position", "absolute");
        for edge in ["top", "right", "bottom", "left"] {
            content.set_style(edge, "0");
        }
    }
}
