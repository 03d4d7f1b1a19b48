//! Radio group
//!
//! A single-selection group of `role="radio"` items. Arrow keys move focus
//! and select in one step, skipping disabled items and wrapping at the ends.

use interop_core::{Direction, Element, Node, Orientation};

use crate::error::{PrimitiveError, Result};
use crate::toolbar::NavigationKey;
use crate::{DATA_ORIENTATION, DATA_STATE};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RadioGroupConfig {
    /// Controlled selection; `None` keeps the selection internally
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub orientation: Option<Orientation>,
    pub dir: Direction,
    pub required: bool,
    pub disabled: bool,
    pub name: Option<String>,
}

impl RadioGroupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn dir(mut self, dir: Direction) -> Self {
        self.dir = dir;
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

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

struct RadioItem {
    node: Node,
    indicator: Option<Node>,
    value: String,
    disabled: bool,
}

pub struct RadioGroup {
    root: Node,
    config: RadioGroupConfig,
    items: Vec<RadioItem>,
    uncontrolled: Option<String>,
    on_value_change: Option<Box<dyn FnMut(&str)>>,
}

impl RadioGroup {
    pub fn new(root: Node, config: RadioGroupConfig) -> Self {
        let group = Self {
            root,
            uncontrolled: config.default_value.clone(),
            config,
            items: Vec::new(),
            on_value_change: None,
        };
        group.render();
        group
    }

    pub fn on_value_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_value_change = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &RadioGroupConfig {
        &self.config
    }

    /// Add an item with an optional indicator; returns its index
    pub fn add_item(
        &mut self,
        node: Node,
        indicator: Option<Node>,
        value: impl Into<String>,
        disabled: bool,
    ) -> usize {
        self.items.push(RadioItem {
            node,
            indicator,
            value: value.into(),
            disabled,
        });
        self.render();
        self.items.len() - 1
    }

    pub fn value(&self) -> Option<&str> {
        self.config
            .value
            .as_deref()
            .or(self.uncontrolled.as_deref())
    }

    /// Update the controlled value from the host
    pub fn set_value_prop(&mut self, value: Option<String>) {
        self.config.value = value;
        self.render();
    }

    fn is_enabled(&self, index: usize) -> bool {
        !self.config.disabled && !self.items[index].disabled
    }

    /// Select the item at `index`; returns whether the selection was accepted
    pub fn select(&mut self, index: usize) -> Result<bool> {
        let len = self.items.len();
        if index >= len {
            return Err(PrimitiveError::NoSuchItem { index, len });
        }
        if !self.is_enabled(index) {
            return Ok(false);
        }
        let value = self.items[index].value.clone();
        if self.value() == Some(value.as_str()) {
            return Ok(true);
        }
        tracing::trace!(%value, "radio selected");
        if self.config.value.is_none() {
            self.uncontrolled = Some(value.clone());
        }
        if let Some(handler) = self.on_value_change.as_mut() {
            handler(&value);
        }
        self.render();
        Ok(true)
    }

    /// Handle a navigation key; returns the newly selected item
    pub fn handle_key(&mut self, key: NavigationKey) -> Option<usize> {
        let orientation = self.config.orientation;
        let rtl = self.config.dir.is_rtl();
        let allows = |o: Orientation| orientation.map_or(true, |set| set == o);
        let target = match key {
            NavigationKey::ArrowRight if allows(Orientation::Horizontal) => self.neighbour(!rtl),
            NavigationKey::ArrowLeft if allows(Orientation::Horizontal) => self.neighbour(rtl),
            NavigationKey::ArrowDown if allows(Orientation::Vertical) => self.neighbour(true),
            NavigationKey::ArrowUp if allows(Orientation::Vertical) => self.neighbour(false),
            _ => None,
        }?;
        match self.select(target) {
            Ok(true) => Some(target),
            _ => None,
        }
    }

    fn selected_index(&self) -> Option<usize> {
        let value = self.value()?;
        self.items.iter().position(|item| item.value == value)
    }

    fn neighbour(&self, forward: bool) -> Option<usize> {
        let len = self.items.len();
        let start = match (self.selected_index(), forward) {
            (Some(i), _) => i,
            (None, true) => len.checked_sub(1)?,
            (None, false) => 0,
        };
        (1..=len)
            .map(|step| {
                if forward {
                    (start + step) % len
                } else {
                    (start + len - step % len) % len
                }
            })
            .find(|&i| self.is_enabled(i))
    }

    /// Index holding the tab stop: the selected item, else the first enabled
    fn tab_stop(&self) -> Option<usize> {
        self.selected_index()
            .filter(|&i| self.is_enabled(i))
            .or_else(|| (0..self.items.len()).find(|&i| self.is_enabled(i)))
    }

    pub fn render(&self) {
        let root = &self.root;
        root.set_attribute("role", "radiogroup");
        root.set_attribute("aria-required", if self.config.required { "true" } else { "false" });
        root.set_attribute("dir", self.config.dir.as_str());
        match self.config.orientation {
            Some(orientation) => {
                root.set_attribute("aria-orientation", orientation.as_str());
                root.set_attribute(DATA_ORIENTATION, orientation.as_str());
            }
            None => {
                root.remove_attribute("aria-orientation");
                root.remove_attribute(DATA_ORIENTATION);
            }
        }
        root.toggle_attribute("data-disabled", self.config.disabled);

        let selected = self.value();
        let tab_stop = self.tab_stop();
        for (index, item) in self.items.iter().enumerate() {
            let checked = selected == Some(item.value.as_str());
            let disabled = !self.is_enabled(index);
            let state = if checked { "checked" } else { "unchecked" };
            let node = &item.node;
            node.set_attribute("type", "button");
            node.set_attribute("role", "radio");
            node.set_attribute("aria-checked", if checked { "true" } else { "false" });
            node.set_attribute(DATA_STATE, state);
            node.set_attribute("value", &item.value);
            node.toggle_attribute("disabled", disabled);
            node.toggle_attribute("data-disabled", disabled);
            node.set_attribute("tabindex", if tab_stop == Some(index) { "0" } else { "-1" });
            match &self.config.name {
                Some(name) => node.set_attribute("name", name),
                None => node.remove_attribute("name"),
            }
            if let Some(indicator) = &item.indicator {
                indicator.set_attribute(DATA_STATE, state);
                indicator.toggle_attribute("data-disabled", disabled);
                if checked {
                    indicator.remove_style("display");
                } else {
                    indicator.set_style("display", "none");
                }
            }
        }
    }
}
