// From tests/web: wasm-pack test --firefox --headless

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Promise};
use sightline::web::{query_selector, WebError, WebObserver};
use sightline::{unobserve_revealed, Observe, WatcherOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn place(id: &str, top: &str) -> Element {
    let document = sightline::web::document().unwrap();
    let element: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    element.set_id(id);
    let style = element.style();
    style.set_property("position", "absolute").unwrap();
    style.set_property("top", top).unwrap();
    style.set_property("width", "20px").unwrap();
    style.set_property("height", "20px").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element.into()
}

/// Observes `target` and resolves with `(is_intersecting, ratio, unobserved)` of the first batch.
async fn first_batch(target: &Element) -> (bool, f64, usize) {
    let resolve: Rc<RefCell<Option<Function>>> = Rc::default();
    let promise = Promise::new(&mut |res, _| *resolve.borrow_mut() = Some(res));

    let pending = Rc::clone(&resolve);
    let observer = WebObserver::new(
        move |entries, observer| {
            let unobserved = unobserve_revealed(entries, observer);
            let entry = &entries[0];
            let result = Array::of3(
                &JsValue::from(entry.is_intersecting),
                &JsValue::from(entry.intersection_ratio),
                &JsValue::from(unobserved as u32),
            );
            if let Some(resolve) = pending.borrow_mut().take() {
                resolve.call1(&JsValue::NULL, &result).unwrap();
            }
        },
        &WatcherOptions::default().with_threshold(0.5).unwrap(),
    )
    .unwrap();
    observer.observe(target);

    let result: Array = JsFuture::from(promise).await.unwrap().unchecked_into();
    (
        result.get(0).as_bool().unwrap(),
        result.get(1).as_f64().unwrap(),
        result.get(2).as_f64().unwrap() as usize,
    )
}

#[wasm_bindgen_test]
async fn visible_target_is_revealed_and_unobserved() {
    console_error_panic_hook::set_once();
    let target = place("visible", "0px");

    let (is_intersecting, ratio, unobserved) = first_batch(&target).await;
    assert!(is_intersecting);
    assert_eq!(ratio, 1.0);
    assert_eq!(unobserved, 1);
}

#[wasm_bindgen_test]
async fn hidden_target_stays_observed() {
    let target = place("hidden", "100000px");

    let (is_intersecting, ratio, unobserved) = first_batch(&target).await;
    assert!(!is_intersecting);
    assert_eq!(ratio, 0.0);
    assert_eq!(unobserved, 0);
}

#[wasm_bindgen_test]
fn missing_target_is_reported() {
    assert_eq!(
        query_selector("#does-not-exist").unwrap_err(),
        WebError::TargetNotFound("#does-not-exist".into())
    );
}

#[wasm_bindgen_test]
fn reveal_once_requires_a_target() {
    let err = sightline::reveal_once(".nothing-here", &WatcherOptions::default()).unwrap_err();
    assert!(matches!(err, WebError::TargetNotFound(_)));
}
