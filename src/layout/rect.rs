//! Axis-aligned rectangles
//!
//! [`Rect`] is a plain value: every transform returns a new rectangle and
//! leaves the receiver untouched. Anchors are normalized `f64` fractions where
//! `0.0` is the min edge and `1.0` the max edge of an axis.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::group::Element;
use super::point::Point;
use super::scalar::Scalar;

/// A rectangle containing the points with `min.x <= x < max.x` and
/// `min.y <= y < max.y`.
///
/// It is well-formed if `min.x <= max.x` and likewise for y. Methods return
/// well-formed outputs for well-formed inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect<S> {
    pub min: Point<S>,
    pub max: Point<S>,
}

impl<S: Scalar> Rect<S> {
    pub fn new(min: Point<S>, max: Point<S>) -> Self {
        Self { min, max }
    }

    /// Rectangle from two corners, swapping coordinates when needed so the
    /// result is well-formed.
    pub fn xyxy(x0: S, y0: S, x1: S, y1: S) -> Self {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Rectangle from position `(x, y)` and dimensions `(w, h)`.
    pub fn xywh(x: S, y: S, w: S, h: S) -> Self {
        Self {
            min: Point::new(x, y),
            max: Point::new(x + w, y + h),
        }
    }

    /// Rectangle from position and size points.
    pub fn pos_size(pos: Point<S>, size: Point<S>) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Rectangle from a position point and raw dimensions.
    pub fn pos_wh(pos: Point<S>, w: S, h: S) -> Self {
        Self::xywh(pos.x, pos.y, w, h)
    }

    /// Rectangle from raw coordinates and a size point.
    pub fn xy_size(x: S, y: S, size: Point<S>) -> Self {
        Self::xywh(x, y, size.x, size.y)
    }

    /// Rectangle of dimensions `(w, h)` at the origin.
    pub fn wh(w: S, h: S) -> Self {
        Self::xywh(S::zero(), S::zero(), w, h)
    }

    /// Width.
    pub fn dx(&self) -> S {
        self.max.x - self.min.x
    }

    /// Height.
    pub fn dy(&self) -> S {
        self.max.y - self.min.y
    }

    /// Width and height as a point.
    pub fn size(&self) -> Point<S> {
        self.max - self.min
    }

    /// The rectangle translated by `p`.
    pub fn add(self, p: Point<S>) -> Self {
        Self {
            min: self.min + p,
            max: self.max + p,
        }
    }

    /// The rectangle translated by `-p`.
    pub fn sub(self, p: Point<S>) -> Self {
        Self {
            min: self.min - p,
            max: self.max - p,
        }
    }

    /// Shrink by `n` on every side. `n` may be negative.
    pub fn inset(self, n: S) -> Self {
        self.inset_ltrb(n, n, n, n)
    }

    /// Shrink by `x` horizontally and `y` vertically.
    pub fn inset_xy(self, x: S, y: S) -> Self {
        self.inset_ltrb(x, y, x, y)
    }

    /// Shrink by the given amount on each side.
    ///
    /// When the insets on an axis exceed its extent, that axis collapses to a
    /// single coordinate placed proportionally between the two insets
    /// (`left / (left + right)` of the way across).
    pub fn inset_ltrb(self, left: S, top: S, right: S, bottom: S) -> Self {
        let (min_x, max_x) = inset_axis(self.min.x, self.max.x, left, right);
        let (min_y, max_y) = inset_axis(self.min.y, self.max.y, top, bottom);
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Grow by `n` on every side.
    pub fn outset(self, n: S) -> Self {
        self.inset(-n)
    }

    /// Grow by `x` horizontally and `y` vertically.
    pub fn outset_xy(self, x: S, y: S) -> Self {
        self.inset_xy(-x, -y)
    }

    /// Grow by the given amount on each side.
    pub fn outset_ltrb(self, left: S, top: S, right: S, bottom: S) -> Self {
        self.inset_ltrb(-left, -top, -right, -bottom)
    }

    /// Reports whether the rectangle contains no points.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Reports whether both rectangles contain the same set of points. All
    /// empty rectangles are equal.
    pub fn eq_points(&self, other: &Self) -> bool {
        self == other || (self.is_empty() && other.is_empty())
    }

    /// Reports whether the two rectangles have a non-empty intersection.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Reports whether every point of `self` lies in `other`.
    pub fn is_inside(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        // max is exclusive on both sides, so equal max edges still fit
        other.min.x <= self.min.x
            && self.max.x <= other.max.x
            && other.min.y <= self.min.y
            && self.max.y <= other.max.y
    }

    /// The rectangle with min and max swapped where needed to be well-formed.
    pub fn canon(self) -> Self {
        Self::xyxy(self.min.x, self.min.y, self.max.x, self.max.y)
    }

    /// Absolute point at the normalized position `(ax, ay)`.
    pub fn anchor(&self, ax: f64, ay: f64) -> Point<S> {
        Point {
            x: self.min.x + S::from_f64(self.dx().to_f64() * ax),
            y: self.min.y + S::from_f64(self.dy().to_f64() * ay),
        }
    }

    /// Translate so this rectangle's anchor `(ax, ay)` lands on the target's
    /// anchor `(tax, tay)`.
    pub fn align<T>(self, ax: f64, ay: f64, target: &T, tax: f64, tay: f64) -> Self
    where
        T: Element<S> + ?Sized,
    {
        let delta = target.bounds().anchor(tax, tay) - self.anchor(ax, ay);
        self.add(delta)
    }

    /// Center within the target.
    pub fn center_of<T: Element<S> + ?Sized>(self, target: &T) -> Self {
        self.align(0.5, 0.5, target, 0.5, 0.5)
    }

    /// Place inside the target at the same relative position `(ax, ay)`.
    pub fn nest<T: Element<S> + ?Sized>(self, target: &T, ax: f64, ay: f64) -> Self {
        self.align(ax, ay, target, ax, ay)
    }

    /// Place horizontally adjacent to the target at its anchor `(tax, tay)`.
    pub fn stack_x<T: Element<S> + ?Sized>(self, target: &T, tax: f64, tay: f64) -> Self {
        self.align(1.0 - tax, tay, target, tax, tay)
    }

    /// Place vertically adjacent to the target at its anchor `(tax, tay)`.
    pub fn stack_y<T: Element<S> + ?Sized>(self, target: &T, tax: f64, tay: f64) -> Self {
        self.align(tax, 1.0 - tay, target, tax, tay)
    }

    /// Move (never resize) so the rectangle fits inside `bounds`, keeping the
    /// current position on any axis where it already fits. A rectangle larger
    /// than `bounds` is pinned to the min edge.
    pub fn clamp(self, bounds: &Self) -> Self {
        let size = self.size();
        let x = bounds
            .min
            .x
            .max_of((bounds.max.x - size.x).min_of(self.min.x));
        let y = bounds
            .min
            .y
            .max_of((bounds.max.y - size.y).min_of(self.min.y));
        Self::pos_size(Point::new(x, y), size)
    }

    /// Iterate over every integer lattice point inside the rectangle in
    /// row-major order.
    pub fn points(&self) -> Points<S> {
        Points::new(*self)
    }

    /// Convert to another scalar type.
    pub fn cast<T: Scalar>(&self) -> Rect<T> {
        Rect::xyxy(
            self.min.x.cast(),
            self.min.y.cast(),
            self.max.x.cast(),
            self.max.y.cast(),
        )
    }

    /// Pixel rectangle as `(min_x, min_y, max_x, max_y)`.
    pub fn to_image_bounds(&self) -> (i32, i32, i32, i32) {
        let r = self.cast::<i32>();
        (r.min.x, r.min.y, r.max.x, r.max.y)
    }

    /// Pixel rectangle as `(x, y, width, height)`.
    pub fn to_image_xywh(&self) -> (i32, i32, i32, i32) {
        let r = self.cast::<i32>();
        (r.min.x, r.min.y, r.dx(), r.dy())
    }
}

fn inset_axis<S: Scalar>(min: S, max: S, lo: S, hi: S) -> (S, S) {
    // computed in f64 so narrow integer scalars cannot overflow
    let (min, max, lo, hi) = (min.to_f64(), max.to_f64(), lo.to_f64(), hi.to_f64());
    let (from, to) = (min + lo, max - hi);
    if max - min < lo + hi {
        let total = lo + hi;
        let t = if total == 0.0 {
            0.5
        } else {
            (lo / total).clamp(0.0, 1.0)
        };
        let at = S::from_f64(from + t * (to - from));
        (at, at)
    } else {
        (S::from_f64(from), S::from_f64(to))
    }
}

impl<S: Scalar> fmt::Display for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Row-major iterator over the integer points of a rectangle.
///
/// Starts from the ceiling of `min` so only points inside the half-open
/// rectangle are produced. Clone it (or call [`Rect::points`] again) to
/// restart.
#[derive(Debug, Clone)]
pub struct Points<S> {
    start_x: i64,
    x: i64,
    y: i64,
    max_x: f64,
    max_y: f64,
    _scalar: std::marker::PhantomData<S>,
}

impl<S: Scalar> Points<S> {
    fn new(r: Rect<S>) -> Self {
        let start_x = r.min.x.to_f64().ceil() as i64;
        Self {
            start_x,
            x: start_x,
            y: r.min.y.to_f64().ceil() as i64,
            max_x: r.max.x.to_f64(),
            max_y: r.max.y.to_f64(),
            _scalar: std::marker::PhantomData,
        }
    }
}

impl<S: Scalar> Iterator for Points<S> {
    type Item = Point<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if (self.start_x as f64) >= self.max_x {
            return None;
        }
        if (self.x as f64) >= self.max_x {
            self.x = self.start_x;
            self.y += 1;
        }
        if (self.y as f64) >= self.max_y {
            return None;
        }
        let p = Point::new(self.x, self.y);
        self.x += 1;
        Some(p)
    }
}
