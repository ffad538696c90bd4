//! Logs the page's `.btn` once half of it is inside the viewport, then stops watching it.
//!
//! Run with `cargo run --package run-wasm -- --example reveal_once` and scroll down.

#[cfg(web_platform)]
#[path = "util/tracing.rs"]
mod tracing;

#[cfg(web_platform)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use sightline::web::{document, WebError};
    use sightline::WatcherOptions;

    console_error_panic_hook::set_once();
    tracing::init();

    // Push the button below the fold.
    let document = document()?;
    let body = document.body().ok_or(WebError::NoDocument)?;
    let spacer = document.create_element("div").map_err(WebError::from)?;
    spacer.set_attribute("style", "height: 150vh").map_err(WebError::from)?;
    let button = document.create_element("button").map_err(WebError::from)?;
    button.set_class_name("btn");
    button.set_text_content(Some("Hello"));
    body.append_child(&spacer).map_err(WebError::from)?;
    body.append_child(&button).map_err(WebError::from)?;

    let options = WatcherOptions::default()
        // The top-level viewport, unchanged.
        .with_root_margin_str("0px 0px 0px 0px")?
        .with_threshold(0.5)?;
    sightline::reveal_once(".btn", &options)?.forget();

    Ok(())
}

#[cfg(not(web_platform))]
fn main() {
    panic!("This example is supported only on the web, see `headless_scroll` instead.");
}
