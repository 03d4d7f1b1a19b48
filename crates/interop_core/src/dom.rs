//! Element abstraction
//!
//! Components never talk to a concrete document. They read and write through
//! the [`Element`] trait, which covers exactly what the primitives need:
//! box sizes, scroll offsets, inline styles, attributes and pointer capture.
//!
//! [`HeadlessElement`] is an in-memory implementation used by tests and by
//! hosts that lay out elements themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::events::PointerId;
use crate::geometry::{Point, Rect, Size};

/// A platform element
///
/// Methods take `&self`; implementations use interior mutability the same
/// way a document node does.
pub trait Element {
    /// Size of the visible content box
    fn client_size(&self) -> Size;
    /// Size of the full scrollable content
    fn scroll_size(&self) -> Size;
    /// Current scroll offset
    fn scroll_offset(&self) -> Point;
    /// Write the scroll offset; implementations clamp to the scrollable range
    fn set_scroll_offset(&self, offset: Point);
    /// Border box in viewport coordinates
    fn bounding_rect(&self) -> Rect;

    /// Resolved style property
    fn computed_style(&self, property: &str) -> Option<String>;
    /// Inline style property
    fn style(&self, property: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);
    fn remove_style(&self, property: &str);

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    fn set_pointer_capture(&self, pointer_id: PointerId);
    fn release_pointer_capture(&self, pointer_id: PointerId);
    fn has_pointer_capture(&self, pointer_id: PointerId) -> bool;

    /// Set or remove a boolean data attribute
    fn toggle_attribute(&self, name: &str, present: bool) {
        if present {
            self.set_attribute(name, "");
        } else {
            self.remove_attribute(name);
        }
    }
}

/// Shared handle to an element
pub type Node = Rc<dyn Element>;

/// Shared handles are elements themselves, so `&Node` passes as `&dyn Element`
impl<T: Element + ?Sized> Element for Rc<T> {
    fn client_size(&self) -> Size {
        (**self).client_size()
    }

    fn scroll_size(&self) -> Size {
        (**self).scroll_size()
    }

    fn scroll_offset(&self) -> Point {
        (**self).scroll_offset()
    }

    fn set_scroll_offset(&self, offset: Point) {
        (**self).set_scroll_offset(offset)
    }

    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        (**self).computed_style(property)
    }

    fn style(&self, property: &str) -> Option<String> {
        (**self).style(property)
    }

    fn set_style(&self, property: &str, value: &str) {
        (**self).set_style(property, value)
    }

    fn remove_style(&self, property: &str) {
        (**self).remove_style(property)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }

    fn remove_attribute(&self, name: &str) {
        (**self).remove_attribute(name)
    }

    fn set_pointer_capture(&self, pointer_id: PointerId) {
        (**self).set_pointer_capture(pointer_id)
    }

    fn release_pointer_capture(&self, pointer_id: PointerId) {
        (**self).release_pointer_capture(pointer_id)
    }

    fn has_pointer_capture(&self, pointer_id: PointerId) -> bool {
        (**self).has_pointer_capture(pointer_id)
    }

    fn toggle_attribute(&self, name: &str, present: bool) {
        (**self).toggle_attribute(name, present)
    }
}

// ============================================================================
// Headless implementation
// ============================================================================

/// In-memory element
///
/// Layout values are set by the owner; scroll offsets are clamped to
/// `scroll_size - client_size` like a document scroller.
#[derive(Debug, Default)]
pub struct HeadlessElement {
    rect: Cell<Rect>,
    client_size: Cell<Size>,
    scroll_size: Cell<Size>,
    scroll_offset: Cell<Point>,
    scroll_writes: Cell<usize>,
    styles: RefCell<IndexMap<String, String>>,
    computed: RefCell<IndexMap<String, String>>,
    attributes: RefCell<IndexMap<String, String>>,
    captures: RefCell<SmallVec<[PointerId; 2]>>,
}

impl HeadlessElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border box; client and scroll sizes default to its size
    pub fn with_rect(self, rect: Rect) -> Self {
        self.rect.set(rect);
        self.client_size.set(rect.size());
        self.scroll_size.set(rect.size());
        self
    }

    pub fn with_client_size(self, size: Size) -> Self {
        self.client_size.set(size);
        self
    }

    pub fn with_scroll_size(self, size: Size) -> Self {
        self.scroll_size.set(size);
        self
    }

    /// Wrap in a shared handle
    pub fn into_rc(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }

    pub fn set_client_size(&self, size: Size) {
        self.client_size.set(size);
        self.set_scroll_offset(self.scroll_offset.get());
    }

    pub fn set_scroll_size(&self, size: Size) {
        self.scroll_size.set(size);
        self.set_scroll_offset(self.scroll_offset.get());
    }

    /// Override a computed style value that doesn't come from an inline style
    pub fn set_computed_style(&self, property: &str, value: &str) {
        self.computed
            .borrow_mut()
            .insert(property.to_owned(), value.to_owned());
    }

    /// Number of scroll offset writes that changed the offset
    pub fn scroll_writes(&self) -> usize {
        self.scroll_writes.get()
    }

    /// Pointers currently captured by this element
    pub fn captured_pointers(&self) -> Vec<PointerId> {
        self.captures.borrow().to_vec()
    }

    fn max_scroll(&self) -> Point {
        let client = self.client_size.get();
        let scroll = self.scroll_size.get();
        Point::new(
            (scroll.width - client.width).max(0.0),
            (scroll.height - client.height).max(0.0),
        )
    }
}

impl Element for HeadlessElement {
    fn client_size(&self) -> Size {
        self.client_size.get()
    }

    fn scroll_size(&self) -> Size {
        self.scroll_size.get()
    }

    fn scroll_offset(&self) -> Point {
        self.scroll_offset.get()
    }

    fn set_scroll_offset(&self, offset: Point) {
        let max = self.max_scroll();
        let clamped = Point::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y));
        if clamped != self.scroll_offset.get() {
            self.scroll_offset.set(clamped);
            self.scroll_writes.set(self.scroll_writes.get() + 1);
        }
    }

    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        self.styles
            .borrow()
            .get(property)
            .cloned()
            .or_else(|| self.computed.borrow().get(property).cloned())
    }

    fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_owned(), value.to_owned());
    }

    fn remove_style(&self, property: &str) {
        self.styles.borrow_mut().shift_remove(property);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.borrow_mut().shift_remove(name);
    }

    fn set_pointer_capture(&self, pointer_id: PointerId) {
        let mut captures = self.captures.borrow_mut();
        if !captures.contains(&pointer_id) {
            captures.push(pointer_id);
        }
    }

    fn release_pointer_capture(&self, pointer_id: PointerId) {
        self.captures.borrow_mut().retain(|id| *id != pointer_id);
    }

    fn has_pointer_capture(&self, pointer_id: PointerId) -> bool {
        self.captures.borrow().contains(&pointer_id)
    }
}
