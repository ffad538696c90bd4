//! Rectangles in CSS pixels.

use dpi::{LogicalPosition, LogicalSize};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis aligned rectangle in CSS (logical) pixels, the shape of a `DOMRectReadOnly`.
///
/// The size is never negative: constructing a rectangle with a negative width or height
/// normalizes it so that `origin` is the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub origin: LogicalPosition<f64>,
    pub size: LogicalSize<f64>,
}

impl Rect {
    pub const ZERO: Rect =
        Rect { origin: LogicalPosition::new(0.0, 0.0), size: LogicalSize::new(0.0, 0.0) };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Rect { origin: LogicalPosition::new(x, y), size: LogicalSize::new(width, height) }
    }

    /// Builds a rectangle from its edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn area(&self) -> f64 {
        self.size.width * self.size.height
    }

    /// The overlap of two rectangles.
    ///
    /// Rectangles that only share an edge still intersect, the result then has zero area.
    /// Returns `None` when they are strictly apart.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (left <= right && top <= bottom).then(|| Rect::from_edges(left, top, right, bottom))
    }

    /// Grows every edge outward by the given amount; negative amounts shrink it.
    ///
    /// A rectangle shrunk past itself collapses to zero size at the center of the overlap.
    pub fn outset(&self, top: f64, right: f64, bottom: f64, left: f64) -> Rect {
        let mut l = self.left() - left;
        let mut r = self.right() + right;
        let mut t = self.top() - top;
        let mut b = self.bottom() + bottom;
        if r < l {
            l = (l + r) / 2.0;
            r = l;
        }
        if b < t {
            t = (t + b) / 2.0;
            b = t;
        }
        Rect::from_edges(l, t, r, b)
    }

    /// Moves the rectangle by the given offset.
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect { origin: LogicalPosition::new(self.origin.x + dx, self.origin.y + dy), size: self.size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_are_normalized() {
        let rect = Rect::new(10.0, 10.0, -4.0, -6.0);
        assert_eq!(rect, Rect::new(6.0, 4.0, 4.0, 6.0));
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 80.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 80.0, 50.0, 20.0)));
        assert_eq!(b.intersection(&a), a.intersection(&b));
    }

    #[test]
    fn edge_adjacent_rects_intersect_with_zero_area() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 100.0, 100.0, 50.0);
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap.area(), 0.0);
    }

    #[test]
    fn apart_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.5, 10.0, 10.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn outset_grows_and_collapses() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(rect.outset(5.0, 5.0, 5.0, 5.0), Rect::new(5.0, 5.0, 30.0, 30.0));

        let collapsed = rect.outset(-15.0, -15.0, -15.0, -15.0);
        assert_eq!(collapsed.area(), 0.0);
        assert_eq!(collapsed.origin, LogicalPosition::new(20.0, 20.0));
    }
}
