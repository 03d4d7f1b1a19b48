//! Interop Primitives
//!
//! Small headless primitives that share the element model of the scroll
//! area. Each one writes ARIA and `data-*` attributes onto host elements:
//!
//! - [`Switch`]: controlled or uncontrolled two-state toggle
//! - [`RadioGroup`]: single selection with arrow-key navigation
//! - [`Separator`]: semantic or decorative divider
//! - [`Toolbar`]: button group with roving tab focus
//! - [`AspectRatio`]: padding-based ratio box

pub mod aspect_ratio;
pub mod error;
pub mod radio_group;
pub mod separator;
pub mod switch;
pub mod toolbar;

pub use aspect_ratio::{AspectRatio, DEFAULT_RATIO};
pub use error::{PrimitiveError, Result};
pub use radio_group::{RadioGroup, RadioGroupConfig};
pub use separator::Separator;
pub use switch::{Switch, SwitchConfig};
pub use toolbar::{NavigationKey, Toolbar, ToolbarConfig};

/// `checked` / `unchecked`
pub const DATA_STATE: &str = "data-state";
pub const DATA_ORIENTATION: &str = "data-orientation";
