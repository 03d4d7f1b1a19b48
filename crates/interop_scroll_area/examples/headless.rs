//! Headless Scroll Area Demo
//!
//! Drives a scroll area over in-memory elements and prints what a renderer
//! would see:
//! - Thumb geometry after mount
//! - A paging track press held long enough to long-page
//! - Scrollbar visibility resting after scroll activity
//!
//! Run with: cargo run -p interop_scroll_area --example headless

use std::rc::Rc;
use std::time::Duration;

use interop_core::{Axis, Element, HeadlessElement, HeadlessPlatform, Point, PointerEvent, Rect, Size};
use interop_scroll_area::{
    css, Result, ScrollArea, ScrollAreaConfig, ScrollAreaPart, ScrollbarVisibility,
    TrackClickBehavior,
};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("interop_scroll_area=debug")),
        )
        .init();

    let position = HeadlessElement::new()
        .with_rect(Rect::new(0.0, 0.0, 400.0, 400.0))
        .with_scroll_size(Size::new(400.0, 2000.0))
        .into_rc();
    let bar = Rect::new(400.0, 0.0, 12.0, 400.0);
    let scrollbar = HeadlessElement::new().with_rect(bar).into_rc();
    let thumb = HeadlessElement::new().into_rc();

    let config = ScrollAreaConfig::new()
        .track_click_behavior(TrackClickBehavior::Page)
        .scrollbar_visibility(ScrollbarVisibility::Scroll);
    let mut area = ScrollArea::new(HeadlessElement::new().into_rc(), config);
    area.nodes_mut().register_position(position.clone())?;
    area.nodes_mut()
        .register_viewport(HeadlessElement::new().into_rc())?;
    let parts = area.add_scrollbar(Axis::Y, scrollbar.clone())?;
    parts.register_track(HeadlessElement::new().with_rect(bar).into_rc())?;
    parts.register_thumb(thumb.clone())?;

    area.mount(&HeadlessPlatform::new())?;
    report("mounted", &position, &scrollbar, &thumb);

    // Press the track below the thumb and hold it
    let mut now = Duration::ZERO;
    let event = PointerEvent::new(Point::new(406.0, 300.0), now);
    area.handle_pointer_down(ScrollAreaPart::Track(Axis::Y), &event)?;
    while now < Duration::from_millis(1000) {
        now += FRAME;
        area.tick(now)?;
    }
    report("after holding the track", &position, &scrollbar, &thumb);

    area.handle_pointer_up(&PointerEvent::new(Point::new(406.0, 300.0), now))?;
    while area.tick(now)? {
        now += FRAME;
    }
    report("at rest", &position, &scrollbar, &thumb);

    area.unmount();
    Ok(())
}

fn report(
    label: &str,
    position: &Rc<HeadlessElement>,
    scrollbar: &Rc<HeadlessElement>,
    thumb: &Rc<HeadlessElement>,
) {
    println!(
        "{label}: offset={:.1} scrollbar={} thumb height={} top={}",
        position.scroll_offset().y,
        scrollbar.attribute(css::DATA_STATE).unwrap_or_default(),
        thumb.style("height").unwrap_or_default(),
        thumb.style("top").unwrap_or_default(),
    );
}
