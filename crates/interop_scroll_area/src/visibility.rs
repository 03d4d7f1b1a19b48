//! Scrollbar visibility policy
//!
//! `scroll` and `hover` scrollbars show up on activity and hide once the
//! rest timeout elapses without further activity. Held pointer interactions
//! keep them visible until released.

use std::time::Duration;

use interop_core::Timeout;

use crate::types::ScrollbarVisibility;

/// Visibility tracking for one scrollbar
#[derive(Debug, Clone)]
pub struct VisibilityState {
    policy: ScrollbarVisibility,
    rest_timeout: Duration,
    rest: Timeout,
    /// Recent scroll or pointer activity
    active: bool,
    hovered: bool,
    /// A press on this scrollbar is held
    interacting: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self::new(
            ScrollbarVisibility::Always,
            Duration::from_millis(crate::config::DEFAULT_REST_TIMEOUT_MS),
        )
    }
}

impl VisibilityState {
    pub fn new(policy: ScrollbarVisibility, rest_timeout: Duration) -> Self {
        Self {
            policy,
            rest_timeout,
            rest: Timeout::new(),
            active: false,
            hovered: false,
            interacting: false,
        }
    }

    pub fn policy(&self) -> ScrollbarVisibility {
        self.policy
    }

    /// Scroll or pointer activity; re-arms the rest timer
    pub fn on_activity(&mut self, now: Duration) {
        self.active = true;
        self.rest.arm(now, self.rest_timeout);
    }

    /// Pointer entered or left the scroll area
    pub fn set_hovered(&mut self, hovered: bool, now: Duration) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        if !hovered && self.policy == ScrollbarVisibility::Hover {
            // Linger for the rest timeout after the pointer leaves
            self.on_activity(now);
        }
    }

    /// A press started or ended on this scrollbar
    pub fn set_interacting(&mut self, interacting: bool, now: Duration) {
        if self.interacting == interacting {
            return;
        }
        self.interacting = interacting;
        if interacting {
            self.active = true;
            self.rest.clear();
        } else {
            self.rest.arm(now, self.rest_timeout);
        }
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Advance timers; returns true if the scrollbar just went to rest
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.rest.fire(now) && !self.interacting && self.active {
            self.active = false;
            tracing::trace!(policy = ?self.policy, "scrollbar at rest");
            return true;
        }
        false
    }

    /// Whether the rest timer still needs frames
    pub fn is_pending(&self) -> bool {
        self.rest.is_armed()
    }

    pub fn is_visible(&self) -> bool {
        match self.policy {
            ScrollbarVisibility::Always => true,
            ScrollbarVisibility::Scroll => self.active || self.interacting,
            ScrollbarVisibility::Hover => self.active || self.interacting || self.hovered,
        }
    }

    /// Forget activity and timers
    pub fn reset(&mut self) {
        self.rest.clear();
        self.active = false;
        self.hovered = false;
        self.interacting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn scroll_policy() -> VisibilityState {
        VisibilityState::new(ScrollbarVisibility::Scroll, ms(600))
    }

    #[test]
    fn test_always_is_visible() {
        let state = VisibilityState::new(ScrollbarVisibility::Always, ms(600));
        assert!(state.is_visible());
    }

    #[test]
    fn test_scroll_shows_then_rests() {
        let mut state = scroll_policy();
        assert!(!state.is_visible());

        state.on_activity(ms(0));
        assert!(state.is_visible());
        assert!(!state.tick(ms(599)));
        assert!(state.tick(ms(600)));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_new_activity_rearms() {
        let mut state = scroll_policy();
        state.on_activity(ms(0));
        state.on_activity(ms(500));
        assert!(!state.tick(ms(700)));
        assert!(state.is_visible());
        assert!(state.tick(ms(1100)));
    }

    #[test]
    fn test_interaction_holds_visibility() {
        let mut state = scroll_policy();
        state.set_interacting(true, ms(0));
        assert!(!state.tick(ms(5000)));
        assert!(state.is_visible());

        state.set_interacting(false, ms(5000));
        assert!(state.is_visible());
        assert!(state.tick(ms(5600)));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_hover_lingers_after_leave() {
        let mut state = VisibilityState::new(ScrollbarVisibility::Hover, ms(600));
        state.set_hovered(true, ms(0));
        assert!(state.is_visible());

        state.set_hovered(false, ms(100));
        assert!(state.is_visible());
        state.tick(ms(700));
        assert!(!state.is_visible());
    }
}
