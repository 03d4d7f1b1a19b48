//! Platform capabilities and observation
//!
//! A [`Platform`] answers feature queries and hands out observation guards.
//! Observations stay connected for as long as their [`Observation`] guard
//! lives; dropping the guard disconnects them.

use std::cell::Cell;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::dom::Node;

/// Platform features the primitives can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Border-box size observation
    ResizeObserver,
    /// Viewport intersection observation
    IntersectionObserver,
    /// Hiding native scrollbars through styles
    ScrollbarHiding,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::ResizeObserver,
        Feature::IntersectionObserver,
        Feature::ScrollbarHiding,
    ];
}

/// What an observation reports back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationKind {
    Resize,
    Intersection,
}

/// Host platform
pub trait Platform {
    fn supports(&self, feature: Feature) -> bool;

    /// Operating system reduced-motion preference
    fn prefers_reduced_motion(&self) -> bool;

    /// Start observing `node`
    ///
    /// The host reports changes back through the component's handlers until
    /// the returned guard is dropped.
    fn observe(&self, node: &Node, kind: ObservationKind) -> Observation;
}

/// Guard for an active observation
#[must_use = "dropping an observation disconnects it"]
pub struct Observation {
    kind: ObservationKind,
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl Observation {
    pub fn new(kind: ObservationKind, disconnect: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            disconnect: Some(Box::new(disconnect)),
        }
    }

    pub fn kind(&self) -> ObservationKind {
        self.kind
    }

    /// Disconnect now
    pub fn disconnect(mut self) {
        self.run_disconnect();
    }

    fn run_disconnect(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.run_disconnect();
    }
}

impl std::fmt::Debug for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observation")
            .field("kind", &self.kind)
            .field("connected", &self.disconnect.is_some())
            .finish()
    }
}

// ============================================================================
// Headless platform
// ============================================================================

/// Platform with configurable features that counts live observations
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    features: FxHashSet<Feature>,
    reduced_motion: bool,
    active: Rc<Cell<usize>>,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPlatform {
    /// A platform supporting every feature
    pub fn new() -> Self {
        Self {
            features: Feature::ALL.into_iter().collect(),
            reduced_motion: false,
            active: Rc::new(Cell::new(0)),
        }
    }

    /// Remove support for `feature`
    pub fn without(mut self, feature: Feature) -> Self {
        self.features.remove(&feature);
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Observations created and not yet disconnected
    pub fn active_observations(&self) -> usize {
        self.active.get()
    }
}

impl Platform for HeadlessPlatform {
    fn supports(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn observe(&self, _node: &Node, kind: ObservationKind) -> Observation {
        self.active.set(self.active.get() + 1);
        let active = Rc::clone(&self.active);
        tracing::trace!(?kind, live = active.get(), "observe");
        Observation::new(kind, move || active.set(active.get().saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadlessElement;

    #[test]
    fn test_feature_support() {
        let platform = HeadlessPlatform::new().without(Feature::IntersectionObserver);
        assert!(platform.supports(Feature::ResizeObserver));
        assert!(!platform.supports(Feature::IntersectionObserver));
    }

    #[test]
    fn test_observation_disconnects_on_drop() {
        let platform = HeadlessPlatform::new();
        let node: Node = HeadlessElement::new().into_rc();

        let first = platform.observe(&node, ObservationKind::Resize);
        let second = platform.observe(&node, ObservationKind::Intersection);
        assert_eq!(platform.active_observations(), 2);
        assert_eq!(second.kind(), ObservationKind::Intersection);

        drop(first);
        assert_eq!(platform.active_observations(), 1);
        second.disconnect();
        assert_eq!(platform.active_observations(), 0);
    }
}
