//! Switch
//!
//! A two-state toggle rendered as a `role="switch"` button. The checked
//! state is either controlled by the host or kept internally.
//!
//! # Example
//!
//! ```
//! use interop_core::{Element, HeadlessElement};
//! use interop_primitives::{Switch, SwitchConfig};
//!
//! let root = HeadlessElement::new().into_rc();
//! let mut switch = Switch::new(root.clone(), SwitchConfig::new().default_checked(true));
//! switch.toggle();
//! assert_eq!(root.attribute("aria-checked").as_deref(), Some("false"));
//! ```

use interop_core::{Element, Node};
use serde::{Deserialize, Serialize};

use crate::DATA_STATE;

/// Form value submitted when checked
pub const DEFAULT_VALUE: &str = "on";

/// Switch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Controlled checked state; `None` keeps the state internally
    pub checked: Option<bool>,
    pub default_checked: bool,
    pub required: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub value: String,
    pub name: Option<String>,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            checked: None,
            default_checked: false,
            required: false,
            disabled: false,
            read_only: false,
            value: DEFAULT_VALUE.to_owned(),
            name: None,
        }
    }
}

impl SwitchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = checked;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

pub struct Switch {
    root: Node,
    thumb: Option<Node>,
    config: SwitchConfig,
    uncontrolled: bool,
    on_checked_change: Option<Box<dyn FnMut(bool)>>,
}

impl Switch {
    /// Create a switch and render its initial attributes
    pub fn new(root: Node, config: SwitchConfig) -> Self {
        let switch = Self {
            root,
            thumb: None,
            uncontrolled: config.default_checked,
            config,
            on_checked_change: None,
        };
        switch.render();
        switch
    }

    pub fn with_thumb(mut self, thumb: Node) -> Self {
        self.thumb = Some(thumb);
        self.render();
        self
    }

    /// Called with the requested state on every toggle, controlled or not
    pub fn on_checked_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        self.on_checked_change = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    pub fn is_checked(&self) -> bool {
        self.config.checked.unwrap_or(self.uncontrolled)
    }

    pub fn is_interactive(&self) -> bool {
        !self.config.disabled && !self.config.read_only
    }

    /// Update the controlled state from the host
    pub fn set_checked_prop(&mut self, checked: Option<bool>) {
        self.config.checked = checked;
        self.render();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        self.render();
    }

    /// Handle a click; returns whether the toggle was accepted
    pub fn toggle(&mut self) -> bool {
        if !self.is_interactive() {
            tracing::trace!("switch toggle ignored");
            return false;
        }
        let next = !self.is_checked();
        if self.config.checked.is_none() {
            self.uncontrolled = next;
        }
        if let Some(handler) = self.on_checked_change.as_mut() {
            handler(next);
        }
        self.render();
        true
    }

    pub fn render(&self) {
        let checked = self.is_checked();
        let state = if checked { "checked" } else { "unchecked" };
        let root = &self.root;

        root.set_attribute("type", "button");
        root.set_attribute("role", "switch");
        root.set_attribute("aria-checked", if checked { "true" } else { "false" });
        root.set_attribute("aria-required", if self.config.required { "true" } else { "false" });
        root.set_attribute(DATA_STATE, state);
        root.toggle_attribute("data-disabled", self.config.disabled);
        root.toggle_attribute("disabled", self.config.disabled);
        root.toggle_attribute("data-readonly", self.config.read_only);
        root.set_attribute("value", &self.config.value);
        match &self.config.name {
            Some(name) => root.set_attribute("name", name),
            None => root.remove_attribute("name"),
        }

        if let Some(thumb) = &self.thumb {
            thumb.set_attribute(DATA_STATE, state);
            thumb.toggle_attribute("data-disabled", self.config.disabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::{Element, HeadlessElement};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_uncontrolled_toggle() {
        let root = HeadlessElement::new().into_rc();
        let mut switch = Switch::new(root.clone(), SwitchConfig::new());
        assert_eq!(root.attribute(DATA_STATE).as_deref(), Some("unchecked"));
        assert!(switch.toggle());
        assert!(switch.is_checked());
        assert_eq!(root.attribute("aria-checked").as_deref(), Some("true"));
        assert_eq!(root.attribute("value").as_deref(), Some("on"));
    }

    #[test]
    fn test_controlled_waits_for_host() {
        let root = HeadlessElement::new().into_rc();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut switch = Switch::new(root.clone(), SwitchConfig::new().checked(false))
            .on_checked_change(move |checked| sink.borrow_mut().push(checked));

        switch.toggle();
        assert!(!switch.is_checked());
        assert_eq!(*seen.borrow(), vec![true]);

        switch.set_checked_prop(Some(true));
        assert_eq!(root.attribute(DATA_STATE).as_deref(), Some("checked"));
    }

    #[test]
    fn test_disabled_and_read_only() {
        let root = HeadlessElement::new().into_rc();
        let thumb = HeadlessElement::new().into_rc();
        let mut switch = Switch::new(root.clone(), SwitchConfig::new().disabled(true))
            .with_thumb(thumb.clone());
        assert!(!switch.toggle());
        assert_eq!(root.attribute("data-disabled").as_deref(), Some(""));
        assert_eq!(thumb.attribute("data-disabled").as_deref(), Some(""));

        let mut read_only = Switch::new(
            HeadlessElement::new().into_rc(),
            SwitchConfig::new().read_only(true),
        );
        assert!(!read_only.toggle());
    }
}
