//! Page-wide effects outside the estimator widgets: the sticky header's
//! scrolled state and one-shot reveal animations.

use crate::config::*;
use crate::utils::{query_selector, window, WidgetError};
use deduction_widgets::header_is_scrolled;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

fn sync_header(window: &Window, header: &Element) {
    apply_header_state(header, window.scroll_y().unwrap_or(0.0));
}

fn apply_header_state(header: &Element, scroll_y: f64) {
    if let Err(e) = header
        .class_list()
        .toggle_with_force(HEADER_SCROLLED_CLASS, header_is_scrolled(scroll_y))
    {
        warn!("Could not update header class: {:?}", e);
    }
}

/// Toggle the header's `scrolled` class on every window scroll.
pub fn install_header_scroll(document: &Document) -> Result<(), WidgetError> {
    let header = query_selector(document, HEADER_SELECTOR)?;
    let window = window()?;
    sync_header(&window, &header);

    let scroll_window = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || sync_header(&scroll_window, &header));
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    // Lives as long as the page.
    on_scroll.forget();
    Ok(())
}

/// Mark intersecting targets visible and stop watching them.
fn reveal_entries(entries: &js_sys::Array, observer: &IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        if !entry.is_intersecting() {
            continue;
        }
        let target = entry.target();
        if let Err(e) = target
            .class_list()
            .add_2(REVEAL_VISIBLE_CLASS, REVEAL_ANIMATE_CLASS)
        {
            warn!("Could not reveal element: {:?}", e);
        }
        observer.unobserve(&target);
    }
}

/// Reveal animated elements the first time they scroll into view.
///
/// Returns how many elements are being observed.
pub fn observe_reveals(document: &Document) -> Result<u32, WidgetError> {
    let targets = document.query_selector_all(REVEAL_SELECTOR)?;
    if targets.length() == 0 {
        return Ok(0);
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            reveal_entries(&entries, &observer)
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    let mut observed = 0;
    for i in 0..targets.length() {
        if let Some(element) = targets.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
            observed += 1;
        }
    }
    debug!("Observing {} reveal elements", observed);
    Ok(observed)
}
