//! Cutting, splitting and tiling rectangles

use super::point::Point;
use super::rect::Rect;
use super::scalar::Scalar;

/// Smallest rectangle containing every input rectangle.
///
/// Returns the empty rectangle at the origin for no input.
pub fn union<S, I>(rects: I) -> Rect<S>
where
    S: Scalar,
    I: IntoIterator<Item = Rect<S>>,
{
    rects
        .into_iter()
        .reduce(|acc, r| Rect {
            min: Point::new(acc.min.x.min_of(r.min.x), acc.min.y.min_of(r.min.y)),
            max: Point::new(acc.max.x.max_of(r.max.x), acc.max.y.max_of(r.max.y)),
        })
        .unwrap_or_default()
}

/// Largest rectangle contained by every input rectangle.
///
/// The result may be empty (min past max) when the inputs do not overlap.
/// Returns the empty rectangle at the origin for no input.
pub fn intersect<S, I>(rects: I) -> Rect<S>
where
    S: Scalar,
    I: IntoIterator<Item = Rect<S>>,
{
    rects
        .into_iter()
        .reduce(|acc, r| Rect {
            min: Point::new(acc.min.x.max_of(r.min.x), acc.min.y.max_of(r.min.y)),
            max: Point::new(acc.max.x.min_of(r.max.x), acc.max.y.min_of(r.max.y)),
        })
        .unwrap_or_default()
}

fn clamp_extent<S: Scalar>(v: S, extent: S) -> S {
    S::zero().max_of(v.min_of(extent))
}

impl<S: Scalar> Rect<S> {
    /// Divide into left and right pieces at width `w` from the left edge.
    /// `w` is clamped to `[0, width]`.
    pub fn cut_x(self, w: S) -> (Self, Self) {
        let w = clamp_extent(w, self.dx());
        let at = self.min.x + w;
        (
            Rect::xyxy(self.min.x, self.min.y, at, self.max.y),
            Rect::xyxy(at, self.min.y, self.max.x, self.max.y),
        )
    }

    /// Divide into top and bottom pieces at height `h` from the top edge.
    /// `h` is clamped to `[0, height]`.
    pub fn cut_y(self, h: S) -> (Self, Self) {
        let h = clamp_extent(h, self.dy());
        let at = self.min.y + h;
        (
            Rect::xyxy(self.min.x, self.min.y, self.max.x, at),
            Rect::xyxy(self.min.x, at, self.max.x, self.max.y),
        )
    }

    /// [`Rect::cut_x`] at a fraction `rate` of the width.
    pub fn cut_x_by_rate(self, rate: f64) -> (Self, Self) {
        self.cut_x(S::from_f64(self.dx().to_f64() * rate))
    }

    /// [`Rect::cut_y`] at a fraction `rate` of the height.
    pub fn cut_y_by_rate(self, rate: f64) -> (Self, Self) {
        self.cut_y(S::from_f64(self.dy().to_f64() * rate))
    }

    /// Left strip of width `w` and the remainder.
    pub fn cut_left(self, w: S) -> (Self, Self) {
        self.cut_x(w)
    }

    /// Top strip of height `h` and the remainder.
    pub fn cut_top(self, h: S) -> (Self, Self) {
        self.cut_y(h)
    }

    /// Right strip of width `w` and the remainder.
    pub fn cut_right(self, w: S) -> (Self, Self) {
        let w = clamp_extent(w, self.dx());
        let (rest, right) = self.cut_x(self.dx() - w);
        (right, rest)
    }

    /// Bottom strip of height `h` and the remainder.
    pub fn cut_bottom(self, h: S) -> (Self, Self) {
        let h = clamp_extent(h, self.dy());
        let (rest, bottom) = self.cut_y(self.dy() - h);
        (bottom, rest)
    }

    pub fn cut_left_by_rate(self, rate: f64) -> (Self, Self) {
        self.cut_left(S::from_f64(self.dx().to_f64() * rate))
    }

    pub fn cut_top_by_rate(self, rate: f64) -> (Self, Self) {
        self.cut_top(S::from_f64(self.dy().to_f64() * rate))
    }

    pub fn cut_right_by_rate(self, rate: f64) -> (Self, Self) {
        self.cut_right(S::from_f64(self.dx().to_f64() * rate))
    }

    pub fn cut_bottom_by_rate(self, rate: f64) -> (Self, Self) {
        self.cut_bottom(S::from_f64(self.dy().to_f64() * rate))
    }

    /// Tile into an `xs` by `ys` grid of equal cells separated by fixed gaps,
    /// in row-major order.
    ///
    /// Returns no cells when either count is zero and the rectangle itself
    /// for a 1x1 grid.
    pub fn split(self, xs: usize, ys: usize, x_gap: S, y_gap: S) -> Vec<Self> {
        if xs == 0 || ys == 0 {
            return Vec::new();
        }
        if xs == 1 && ys == 1 {
            return vec![self];
        }
        let nx = S::from_f64(xs as f64);
        let ny = S::from_f64(ys as f64);
        let w = (self.dx() - x_gap * (nx - S::one())) / nx;
        let h = (self.dy() - y_gap * (ny - S::one())) / ny;
        self.tile(xs, ys, Point::new(w, h), Point::new(w + x_gap, h + y_gap))
    }

    /// [`Rect::split`] into a single row of `xs` columns.
    pub fn split_x(self, xs: usize, x_gap: S) -> Vec<Self> {
        self.split(xs, 1, x_gap, S::zero())
    }

    /// [`Rect::split`] into a single column of `ys` rows.
    pub fn split_y(self, ys: usize, y_gap: S) -> Vec<Self> {
        self.split(1, ys, S::zero(), y_gap)
    }

    /// `xs` by `ys` copies of this rectangle, each step advancing by the
    /// rectangle's size plus the gap. Cells are never shrunk.
    pub fn repeat(self, xs: usize, ys: usize, x_gap: S, y_gap: S) -> Vec<Self> {
        if xs == 0 || ys == 0 {
            return Vec::new();
        }
        if xs == 1 && ys == 1 {
            return vec![self];
        }
        let size = self.size();
        self.tile(xs, ys, size, Point::new(size.x + x_gap, size.y + y_gap))
    }

    /// [`Rect::repeat`] along a single row.
    pub fn repeat_x(self, xs: usize, x_gap: S) -> Vec<Self> {
        self.repeat(xs, 1, x_gap, S::zero())
    }

    /// [`Rect::repeat`] along a single column.
    pub fn repeat_y(self, ys: usize, y_gap: S) -> Vec<Self> {
        self.repeat(1, ys, S::zero(), y_gap)
    }

    fn tile(&self, xs: usize, ys: usize, cell: Point<S>, step: Point<S>) -> Vec<Self> {
        let mut cells = Vec::with_capacity(xs * ys);
        for row in 0..ys {
            for col in 0..xs {
                let offset = Point::new(
                    step.x * S::from_f64(col as f64),
                    step.y * S::from_f64(row as f64),
                );
                cells.push(Rect::pos_size(self.min + offset, cell));
            }
        }
        cells
    }
}
