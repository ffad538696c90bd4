//! # Web
//!
//! Sightline's browser backend, compiled to WebAssembly with [`wasm-bindgen`][wasm_bindgen].
//!
//! A [`WebObserver`] owns a host [`IntersectionObserver`][mdn] and the closure it calls, so the
//! browser does all of the geometry and scheduling; this crate only converts its entries into
//! [`VisibilityEntry`]s. Callbacks run on the browser's event loop.
//!
//! Dropping a [`WebObserver`] disconnects it. Use [`WebObserver::forget()`] to keep it watching
//! for the lifetime of the page.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
//! [wasm_bindgen]: https://docs.rs/wasm-bindgen

mod error;
pub(crate) mod web_sys;

use std::fmt;
use std::mem;

use ::web_sys::{Element, IntersectionObserver};
use sightline_core::{unobserve_revealed, Observe, VisibilityEntry, WatcherOptions};

pub use self::error::WebError;
pub use self::web_sys::{document, query_selector};
use self::web_sys::IntersectionObserverHandle;

/// A visibility watcher backed by the browser's `IntersectionObserver`.
pub struct WebObserver {
    handle: IntersectionObserverHandle,
}

impl WebObserver {
    /// Creates a watcher. `callback` receives every batch of entries the browser delivers,
    /// together with the watcher so it can stop observing targets.
    pub fn new<F>(callback: F, options: &WatcherOptions<Element>) -> Result<Self, WebError>
    where
        F: 'static + FnMut(&[VisibilityEntry<Element>], &WebObserverRef<'_>),
    {
        Ok(Self { handle: IntersectionObserverHandle::new(options, callback)? })
    }

    /// Starts watching the first element matching `selector` and returns it.
    pub fn observe_selector(&self, selector: &str) -> Result<Element, WebError> {
        let target = query_selector(selector)?;
        self.observe(&target);
        Ok(target)
    }

    /// Drains the entries the browser queued but didn't deliver yet.
    pub fn take_records(&self) -> Vec<VisibilityEntry<Element>> {
        web_sys::entries(&self.handle.observer().take_records())
    }

    pub fn by_ref(&self) -> WebObserverRef<'_> {
        WebObserverRef::new(self.handle.observer())
    }

    /// Keeps the watcher and its callback alive for the lifetime of the page.
    pub fn forget(self) {
        mem::forget(self)
    }
}

impl fmt::Debug for WebObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebObserver").finish_non_exhaustive()
    }
}

impl Observe for WebObserver {
    type Target = Element;

    fn observe(&self, target: &Element) {
        self.by_ref().observe(target)
    }

    fn unobserve(&self, target: &Element) {
        self.by_ref().unobserve(target)
    }

    fn disconnect(&self) {
        self.by_ref().disconnect()
    }
}

/// A borrowed watcher, handed to callbacks.
#[derive(Clone, Copy)]
pub struct WebObserverRef<'a> {
    observer: &'a IntersectionObserver,
}

impl<'a> WebObserverRef<'a> {
    pub(crate) fn new(observer: &'a IntersectionObserver) -> Self {
        Self { observer }
    }
}

impl fmt::Debug for WebObserverRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebObserverRef").finish_non_exhaustive()
    }
}

impl Observe for WebObserverRef<'_> {
    type Target = Element;

    fn observe(&self, target: &Element) {
        tracing::debug!(observed = ?target, "observe");
        self.observer.observe(target)
    }

    fn unobserve(&self, target: &Element) {
        tracing::debug!(observed = ?target, "unobserve");
        self.observer.unobserve(target)
    }

    fn disconnect(&self) {
        tracing::debug!("disconnect");
        self.observer.disconnect()
    }
}

/// Watches the first element matching `selector`, logs it once any part of it becomes visible
/// and then stops watching it.
///
/// The returned watcher must be kept alive, or [forgotten](WebObserver::forget), for the
/// notification to arrive.
pub fn reveal_once(
    selector: &str,
    options: &WatcherOptions<Element>,
) -> Result<WebObserver, WebError> {
    let observer = WebObserver::new(
        |entries, observer| {
            unobserve_revealed(entries, observer);
        },
        options,
    )?;
    observer.observe_selector(selector)?;
    Ok(observer)
}
