mod intersection_handle;

use std::time::Duration;

use js_sys::{Array, Object};
use sightline_core::{Rect, VisibilityEntry, WatcherOptions};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DomRectReadOnly, Element, IntersectionObserverEntry};

pub(crate) use self::intersection_handle::IntersectionObserverHandle;
use crate::WebError;

// `IntersectionObserverInit` is filled through these bindings; the `web-sys` setters differ
// between releases.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Object, typescript_type = "IntersectionObserverInit")]
    #[derive(Debug, Clone)]
    type ObserverInit;

    #[wasm_bindgen(method, setter = root)]
    fn set_root(this: &ObserverInit, val: Option<&Element>);

    #[wasm_bindgen(method, setter = rootMargin)]
    fn set_root_margin(this: &ObserverInit, val: &str);

    #[wasm_bindgen(method, setter = threshold)]
    fn set_threshold(this: &ObserverInit, val: &Array);
}

fn observer_init(options: &WatcherOptions<Element>) -> ObserverInit {
    let init: ObserverInit = Object::new().unchecked_into();
    init.set_root(options.root.as_ref());
    init.set_root_margin(&options.root_margin.to_string());
    init.set_threshold(
        &options.thresholds.as_slice().iter().copied().map(JsValue::from_f64).collect(),
    );
    init
}

pub fn document() -> Result<Document, WebError> {
    web_sys::window().and_then(|window| window.document()).ok_or(WebError::NoDocument)
}

/// The first element in the document matching `selector`.
pub fn query_selector(selector: &str) -> Result<Element, WebError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| WebError::TargetNotFound(selector.to_owned()))
}

fn rect(rect: &DomRectReadOnly) -> Rect {
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

pub fn entry(entry: &IntersectionObserverEntry) -> VisibilityEntry<Element> {
    // `DOMHighResTimeStamp` in milliseconds since the time origin.
    let time = Duration::try_from_secs_f64(entry.time().max(0.0) / 1000.0).unwrap_or_default();

    VisibilityEntry {
        time,
        root_bounds: entry.root_bounds().as_ref().map(rect),
        bounding_client_rect: rect(&entry.bounding_client_rect()),
        intersection_rect: rect(&entry.intersection_rect()),
        is_intersecting: entry.is_intersecting(),
        intersection_ratio: entry.intersection_ratio(),
        target: entry.target(),
    }
}

pub fn entries(entries: &Array) -> Vec<VisibilityEntry<Element>> {
    entries
        .iter()
        .map(|value| {
            debug_assert!(value.has_type::<IntersectionObserverEntry>());
            entry(value.unchecked_ref())
        })
        .collect()
}
