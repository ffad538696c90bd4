//! Base types for viewport intersection watching.
//!
//! This crate contains the types, traits and basic functions of [`sightline`] that are platform
//! independent: the watcher configuration ([`WatcherOptions`]), the notification record
//! ([`VisibilityEntry`]), the [`Observe`] trait implemented by every backend and the
//! [`unobserve_revealed`] callback policy. It also carries a [`headless`] watcher which computes
//! notifications from caller supplied geometry, for use outside of a browser.
//!
//! [`sightline`]: https://docs.rs/sightline

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

pub mod entry;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod margin;
pub mod observe;
pub mod options;
pub mod threshold;

pub use crate::entry::VisibilityEntry;
pub use crate::error::{ConfigError, MarginError, ThresholdError};
pub use crate::geometry::Rect;
pub use crate::margin::{MarginLength, RootMargin};
pub use crate::observe::{unobserve_revealed, Observe};
pub use crate::options::WatcherOptions;
pub use crate::threshold::Thresholds;
