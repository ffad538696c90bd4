use std::time::Duration;

use crate::geometry::Rect;

/// A single visibility change of an observed target, the equivalent of
/// `IntersectionObserverEntry`.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry<T> {
    /// When the change was computed, relative to the watcher's time origin.
    pub time: Duration,
    /// The margin-adjusted root box, or `None` when the root has no box.
    pub root_bounds: Option<Rect>,
    /// The target's bounding box.
    pub bounding_client_rect: Rect,
    /// The visible part of the target, [`Rect::ZERO`] when not intersecting.
    pub intersection_rect: Rect,
    pub is_intersecting: bool,
    /// Fraction of the target's area that is visible, in `[0, 1]`.
    pub intersection_ratio: f64,
    pub target: T,
}

impl<T> VisibilityEntry<T> {
    /// Whether any part of the target is visible.
    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.intersection_ratio > 0.0
    }
}
