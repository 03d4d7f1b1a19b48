//! Separator
//!
//! Semantic separators get `role="separator"`; decorative ones are hidden
//! from assistive technology with `role="none"`.

use interop_core::{Element, Orientation};

use crate::DATA_ORIENTATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Separator {
    orientation: Orientation,
    decorative: bool,
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Purely visual; no semantic meaning
    pub fn decorative(mut self, decorative: bool) -> Self {
        self.decorative = decorative;
        self
    }

    pub fn get_orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_decorative(&self) -> bool {
        self.decorative
    }

    pub fn apply(&self, el: &dyn Element) {
        el.set_attribute("role", if self.decorative { "none" } else { "separator" });
        // Horizontal is the implicit ARIA orientation
        if !self.decorative && self.orientation == Orientation::Vertical {
            el.set_attribute("aria-orientation", self.orientation.as_str());
        } else {
            el.remove_attribute("aria-orientation");
        }
        el.set_attribute(DATA_ORIENTATION, self.orientation.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::HeadlessElement;

    #[test]
    fn test_semantic_vertical() {
        let el = HeadlessElement::new();
        Separator::new().orientation(Orientation::Vertical).apply(&el);
        assert_eq!(el.attribute("role").as_deref(), Some("separator"));
        assert_eq!(el.attribute("aria-orientation").as_deref(), Some("vertical"));
        assert_eq!(el.attribute(DATA_ORIENTATION).as_deref(), Some("vertical"));
    }

    #[test]
    fn test_horizontal_omits_aria_orientation() {
        let el = HeadlessElement::new();
        Separator::new().apply(&el);
        assert_eq!(el.attribute("aria-orientation"), None);
        assert_eq!(el.attribute(DATA_ORIENTATION).as_deref(), Some("horizontal"));
    }

    #[test]
    fn test_decorative() {
        let el = HeadlessElement::new();
        Separator::new()
            .orientation(Orientation::Vertical)
            .decorative(true)
            .apply(&el);
        assert_eq!(el.attribute("role").as_deref(), Some("none"));
        assert_eq!(el.attribute("aria-orientation"), None);
    }
}
