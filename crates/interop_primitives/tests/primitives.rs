//! Primitive integration tests
//!
//! Tests verify:
//! - A toolbar of switches keeps one tab stop while switches toggle
//! - Switch configuration loads from JSON with defaults filled in
//! - A controlled radio group only changes when the host updates it
//! - Aspect ratio and separator attributes on shared nodes

use std::cell::Cell;
use std::rc::Rc;

use interop_core::{Direction, Element, HeadlessElement, Node, Orientation};
use interop_primitives::{
    AspectRatio, NavigationKey, PrimitiveError, RadioGroup, RadioGroupConfig, Separator, Switch,
    SwitchConfig, Toolbar, ToolbarConfig, DATA_ORIENTATION, DATA_STATE,
};

#[test]
fn test_toolbar_of_switches() {
    let mut toolbar = Toolbar::new(
        HeadlessElement::new().into_rc(),
        ToolbarConfig::new().dir(Direction::Rtl),
    );
    let bold = HeadlessElement::new().into_rc();
    let italic = HeadlessElement::new().into_rc();
    toolbar.add_button(bold.clone(), false);
    toolbar.add_button(italic.clone(), false);

    let changes = Rc::new(Cell::new(0));
    let counter = changes.clone();
    let mut italic_switch = Switch::new(italic.clone(), SwitchConfig::new())
        .on_checked_change(move |_| counter.set(counter.get() + 1));

    // Left moves forward under RTL
    assert_eq!(toolbar.handle_key(NavigationKey::ArrowLeft), Some(1));
    assert!(italic_switch.toggle());

    assert_eq!(changes.get(), 1);
    assert_eq!(italic.attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(italic.attribute("role").as_deref(), Some("switch"));
    assert_eq!(italic.attribute(DATA_STATE).as_deref(), Some("checked"));
    assert_eq!(bold.attribute("tabindex").as_deref(), Some("-1"));

    assert_eq!(toolbar.handle_key(NavigationKey::End), Some(1));
    assert_eq!(toolbar.handle_key(NavigationKey::ArrowRight), Some(0));
}

#[test]
fn test_switch_config_from_json() {
    let config: SwitchConfig =
        serde_json::from_str(r#"{ "required": true, "name": "notifications" }"#).unwrap();
    assert_eq!(config.value, "on");
    assert!(config.checked.is_none());

    let root = HeadlessElement::new().into_rc();
    let switch = Switch::new(root.clone(), config);
    assert!(!switch.is_checked());
    assert_eq!(root.attribute("aria-required").as_deref(), Some("true"));
    assert_eq!(root.attribute("name").as_deref(), Some("notifications"));
    assert_eq!(root.attribute("data-readonly"), None);
}

#[test]
fn test_aspect_ratio_and_separator() {
    let wrapper = HeadlessElement::new();
    let content = HeadlessElement::new();
    AspectRatio::new(4.0).unwrap().apply(&wrapper, &content);
    assert_eq!(wrapper.style("padding-bottom").as_deref(), Some("25%"));
    assert_eq!(content.style("bottom").as_deref(), Some("0"));

    assert_eq!(
        AspectRatio::new(0.0),
        Err(PrimitiveError::InvalidRatio(0.0))
    );

    let divider: Node = HeadlessElement::new().into_rc();
    Separator::new()
        .orientation(Orientation::Vertical)
        .apply(&*divider);
    assert_eq!(divider.attribute("role").as_deref(), Some("separator"));
    assert_eq!(divider.attribute(DATA_ORIENTATION).as_deref(), Some("vertical"));
}

#[test]
fn test_controlled_radio_group() {
    let requested = Rc::new(std::cell::RefCell::new(Vec::<String>::new()));
    let sink = requested.clone();
    let mut group = RadioGroup::new(
        HeadlessElement::new().into_rc(),
        RadioGroupConfig::new().value("2").name("pet"),
    )
    .on_value_change(move |value| sink.borrow_mut().push(value.to_owned()));
    let nodes: Vec<_> = ["1", "2", "3"]
        .iter()
        .map(|value| {
            let node = HeadlessElement::new().into_rc();
            group.add_item(node.clone(), None, *value, false);
            node
        })
        .collect();

    assert_eq!(group.handle_key(NavigationKey::ArrowDown), Some(2));
    assert_eq!(*requested.borrow(), vec!["3".to_owned()]);
    assert_eq!(group.value(), Some("2"));
    assert_eq!(nodes[1].attribute("aria-checked").as_deref(), Some("true"));

    group.set_value_prop(Some("3".to_owned()));
    assert_eq!(nodes[2].attribute(DATA_STATE).as_deref(), Some("checked"));
    assert_eq!(nodes[2].attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(nodes[0].attribute("name").as_deref(), Some("pet"));
}
