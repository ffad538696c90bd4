use js_sys::Array;
use sightline_core::{VisibilityEntry, WatcherOptions};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverInit};

use super::observer_init;
use crate::{WebError, WebObserverRef};

pub(crate) struct IntersectionObserverHandle {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionObserverHandle {
    pub fn new<F>(options: &WatcherOptions<Element>, mut callback: F) -> Result<Self, WebError>
    where
        F: 'static + FnMut(&[VisibilityEntry<Element>], &WebObserverRef<'_>),
    {
        let closure = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = super::entries(&entries);
            tracing::trace!(entries = entries.len(), "intersection observer batch");
            callback(&entries, &WebObserverRef::new(&observer));
        });

        let init = observer_init(options);
        let observer = IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            init.unchecked_ref::<IntersectionObserverInit>(),
        )?;
        tracing::debug!(
            root_margin = %options.root_margin,
            thresholds = ?options.thresholds.as_slice(),
            has_root = options.root.is_some(),
            "created intersection observer"
        );

        Ok(Self { observer, _closure: closure })
    }

    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }
}

impl Drop for IntersectionObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect()
    }
}
