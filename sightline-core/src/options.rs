//! Watcher configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::margin::RootMargin;
use crate::threshold::Thresholds;

/// The configuration a watcher is created with, the equivalent of `IntersectionObserverInit`.
///
/// `T` is the backend's target type; the root, when set, is one of them.
///
/// ```
/// use sightline_core::WatcherOptions;
///
/// let options = WatcherOptions::<()>::default()
///     .with_root_margin_str("0px 0px 0px 0px")
///     .and_then(|options| options.with_threshold(0.5))
///     .unwrap();
/// assert_eq!(options.thresholds.as_slice(), &[0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatcherOptions<T> {
    /// The box targets are intersected with. `None` is the top-level viewport.
    pub root: Option<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub root_margin: RootMargin,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thresholds: Thresholds,
}

impl<T> Default for WatcherOptions<T> {
    fn default() -> Self {
        Self { root: None, root_margin: RootMargin::default(), thresholds: Thresholds::default() }
    }
}

impl<T> WatcherOptions<T> {
    #[inline]
    pub fn with_root(mut self, root: T) -> Self {
        self.root = Some(root);
        self
    }

    #[inline]
    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Parses and sets the margin from CSS margin shorthand, e.g. `"10px 0px"`.
    pub fn with_root_margin_str(self, root_margin: &str) -> Result<Self, ConfigError> {
        Ok(self.with_root_margin(root_margin.parse()?))
    }

    #[inline]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replaces the thresholds with a single one.
    pub fn with_threshold(self, threshold: f64) -> Result<Self, ConfigError> {
        Ok(self.with_thresholds(Thresholds::single(threshold)?))
    }

    /// Swaps the root for another target type, keeping margin and thresholds.
    pub fn map_root<U, F>(self, f: F) -> WatcherOptions<U>
    where
        F: FnOnce(T) -> U,
    {
        WatcherOptions { root: self.root.map(f), root_margin: self.root_margin, thresholds: self.thresholds }
    }
}
