//! Toolbar
//!
//! A container of buttons with roving tab focus: exactly one enabled item
//! carries `tabindex="0"` and arrow keys move it along the toolbar axis.
//! Separators inside a toolbar run perpendicular to it.

use interop_core::{Direction, Element, Node, Orientation};

use crate::error::{PrimitiveError, Result};
use crate::separator::Separator;
use crate::DATA_ORIENTATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarConfig {
    pub orientation: Orientation,
    pub dir: Direction,
    /// Wrap focus from the last item to the first and back
    pub loop_focus: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            dir: Direction::Ltr,
            loop_focus: true,
        }
    }
}

impl ToolbarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn dir(mut self, dir: Direction) -> Self {
        self.dir = dir;
        self
    }

    pub fn loop_focus(mut self, loop_focus: bool) -> Self {
        self.loop_focus = loop_focus;
        self
    }
}

/// Keys that move focus within a toolbar or radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

struct ToolbarItem {
    node: Node,
    disabled: bool,
}

pub struct Toolbar {
    root: Node,
    config: ToolbarConfig,
    items: Vec<ToolbarItem>,
    focused: Option<usize>,
}

impl Toolbar {
    pub fn new(root: Node, config: ToolbarConfig) -> Self {
        let toolbar = Self {
            root,
            config,
            items: Vec::new(),
            focused: None,
        };
        toolbar.render();
        toolbar
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    /// Index of the item holding the roving tab stop
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a button; returns its item index
    pub fn add_button(&mut self, node: Node, disabled: bool) -> usize {
        self.items.push(ToolbarItem { node, disabled });
        if self.focused.is_none() && !disabled {
            self.focused = Some(self.items.len() - 1);
        }
        self.render_items();
        self.items.len() - 1
    }

    /// Render a separator perpendicular to the toolbar
    pub fn add_separator(&self, node: &Node) -> Separator {
        let separator = Separator::new().orientation(self.config.orientation.perpendicular());
        separator.apply(&**node);
        separator
    }

    pub fn set_disabled(&mut self, index: usize, disabled: bool) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(PrimitiveError::NoSuchItem { index, len })?;
        item.disabled = disabled;
        if disabled && self.focused == Some(index) {
            self.focused = self.first_enabled();
        } else if self.focused.is_none() && !disabled {
            self.focused = Some(index);
        }
        self.render_items();
        Ok(())
    }

    /// Move the tab stop to an item, e.g. when it receives focus by pointer
    pub fn focus(&mut self, index: usize) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get(index)
            .ok_or(PrimitiveError::NoSuchItem { index, len })?;
        if !item.disabled {
            self.focused = Some(index);
            self.render_items();
        }
        Ok(())
    }

    pub fn focus_first(&mut self) -> Option<usize> {
        self.move_to(self.first_enabled())
    }

    pub fn focus_last(&mut self) -> Option<usize> {
        let last = (0..self.items.len()).rev().find(|&i| !self.items[i].disabled);
        self.move_to(last)
    }

    pub fn focus_next(&mut self) -> Option<usize> {
        self.step(true)
    }

    pub fn focus_prev(&mut self) -> Option<usize> {
        self.step(false)
    }

    /// Handle a navigation key; returns the newly focused item
    pub fn handle_key(&mut self, key: NavigationKey) -> Option<usize> {
        let horizontal = self.config.orientation == Orientation::Horizontal;
        let rtl = self.config.dir.is_rtl();
        match key {
            NavigationKey::Home => self.focus_first(),
            NavigationKey::End => self.focus_last(),
            NavigationKey::ArrowRight if horizontal => self.step(!rtl),
            NavigationKey::ArrowLeft if horizontal => self.step(rtl),
            NavigationKey::ArrowDown if !horizontal => self.focus_next(),
            NavigationKey::ArrowUp if !horizontal => self.focus_prev(),
            _ => None,
        }
    }

    fn first_enabled(&self) -> Option<usize> {
        self.items.iter().position(|item| !item.disabled)
    }

    fn step(&mut self, forward: bool) -> Option<usize> {
        let len = self.items.len();
        let Some(current) = self.focused else {
            return self.focus_first();
        };
        let mut index = current;
        for _ in 1..len {
            index = match (forward, index) {
                (true, i) if i + 1 < len => i + 1,
                (true, _) if self.config.loop_focus => 0,
                (false, 0) if self.config.loop_focus => len - 1,
                (false, i) if i > 0 => i - 1,
                _ => return None,
            };
            if !self.items[index].disabled {
                return self.move_to(Some(index));
            }
        }
        None
    }

    fn move_to(&mut self, index: Option<usize>) -> Option<usize> {
        let index = index?;
        if self.focused != Some(index) {
            tracing::trace!(index, "toolbar focus moved");
            self.focused = Some(index);
            self.render_items();
        }
        Some(index)
    }

    fn render(&self) {
        let orientation = self.config.orientation.as_str();
        self.root.set_attribute("role", "toolbar");
        self.root.set_attribute("aria-orientation", orientation);
        self.root.set_attribute(DATA_ORIENTATION, orientation);
        self.root.set_attribute("dir", self.config.dir.as_str());
    }

    fn render_items(&self) {
        for (index, item) in self.items.iter().enumerate() {
            let node = &item.node;
            node.set_attribute("role", "toolbaritem");
            node.set_attribute(DATA_ORIENTATION, self.config.orientation.as_str());
            node.toggle_attribute("disabled", item.disabled);
            node.toggle_attribute("data-disabled", item.disabled);
            let tabindex = if self.focused == Some(index) { "0" } else { "-1" };
            node.set_attribute("tabindex", tabindex);
        }
    }
}
