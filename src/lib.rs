//! Sightline watches how much of an element is visible inside a root box, the viewport by
//! default, and calls you back whenever that fraction crosses one of your thresholds.
//!
//! # Building a watcher
//!
//! A watcher is created from a callback and a [`WatcherOptions`]:
//!
//! - `root`: the box targets are intersected with, `None` for the top-level viewport.
//! - `root_margin`: a [`RootMargin`] growing (or, when negative, shrinking) the root box, written
//!   like the CSS `margin` shorthand in `px` or `%`.
//! - `thresholds`: the intersection ratios, in `[0, 1]`, that trigger a notification.
//!
//! Targets are then added with [`Observe::observe()`]. Every notification is a
//! [`VisibilityEntry`]; [`unobserve_revealed()`] is a ready-made callback that logs targets as
//! they become visible and stops watching them.
//!
//! # Backends
//!
//! - On `wasm32-unknown-unknown` the [`web`] module wraps the browser's `IntersectionObserver`.
//! - Everywhere, [`headless::HeadlessObserver`] computes the same notifications from a
//!   [`headless::Layout`] you provide, which is how the crate is tested natively.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use sightline::headless::{HeadlessObserver, Scene};
//! use sightline::{unobserve_revealed, Observe, Rect, VisibilityEntry, WatcherOptions};
//!
//! let options = WatcherOptions::default()
//!     .with_root_margin_str("0px 0px 0px 0px")
//!     .and_then(|options| options.with_threshold(0.5))
//!     .unwrap();
//! let revealed = Rc::new(RefCell::new(0));
//! let observer = HeadlessObserver::new(
//!     {
//!         let revealed = Rc::clone(&revealed);
//!         move |entries: &[VisibilityEntry<&'static str>], observer: &HeadlessObserver<&'static str>| {
//!             *revealed.borrow_mut() += unobserve_revealed(entries, observer);
//!         }
//!     },
//!     options,
//! );
//!
//! let mut scene = Scene::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! scene.place(".btn", Rect::new(0.0, 900.0, 100.0, 40.0));
//! observer.observe(&".btn");
//! observer.update(&scene);
//!
//! scene.scroll_by(0.0, 330.0);
//! observer.update(&scene);
//! assert_eq!(*revealed.borrow(), 1);
//! assert!(!observer.is_observing(&".btn"));
//! ```
//!
//! # Cargo Features
//!
//! - `serde`: Enables serialization/deserialization of the configuration types with
//!   [Serde](https://crates.io/crates/serde).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use sightline_core::{entry, error, geometry, headless, margin, observe, options, threshold};
pub use sightline_core::{
    unobserve_revealed, ConfigError, MarginError, MarginLength, Observe, Rect, RootMargin,
    ThresholdError, Thresholds, VisibilityEntry, WatcherOptions,
};

/// The browser backend.
#[cfg(web_platform)]
pub mod web {
    pub use sightline_web::*;
}

#[cfg(web_platform)]
pub use sightline_web::{reveal_once, WebObserver};
