//! Incremental flow placement
//!
//! A [`Wrapper`] places boxes one at a time inside fixed bounds. Each new box
//! is first positioned by the `stack` rule against the previously placed box;
//! if that overflows the bounds it is positioned by the `wrap` rule against the
//! first box of the current line, starting a new line. Placement is greedy:
//! nothing already placed is ever revisited.

use std::fmt;

use super::config::{FlowConfig, FlowDirection};
use super::group::Slice;
use super::point::Point;
use super::rect::Rect;
use super::scalar::Scalar;

/// Placement rule: position the candidate (first argument) relative to a
/// reference box.
pub type Placement<'a, S> = Box<dyn Fn(Rect<S>, &Rect<S>) -> Rect<S> + 'a>;

/// Flow layout engine over a fixed region.
pub struct Wrapper<'a, S: Scalar> {
    bounds: Rect<S>,
    anchor: (f64, f64),
    stack: Placement<'a, S>,
    wrap: Placement<'a, S>,
    rects: Vec<Rect<S>>,
    line_first: Option<Rect<S>>,
}

impl<'a, S: Scalar> Wrapper<'a, S> {
    /// Create a wrapper whose first box is nested in `bounds` at `(ax, ay)`.
    pub fn new<St, Wr>(bounds: Rect<S>, ax: f64, ay: f64, stack: St, wrap: Wr) -> Self
    where
        St: Fn(Rect<S>, &Rect<S>) -> Rect<S> + 'a,
        Wr: Fn(Rect<S>, &Rect<S>) -> Rect<S> + 'a,
    {
        Self {
            bounds,
            anchor: (ax, ay),
            stack: Box::new(stack),
            wrap: Box::new(wrap),
            rects: Vec::new(),
            line_first: None,
        }
    }

    /// Create a wrapper from a flow preset.
    ///
    /// Rows advance rightwards with `gap` between boxes and wrap downwards
    /// with `line_gap` between lines, each line starting under the previous
    /// line's first box. Columns are the transpose.
    pub fn from_config(bounds: Rect<S>, config: &FlowConfig) -> Self {
        let gap = S::from_f64(config.gap);
        let line_gap = S::from_f64(config.line_gap);
        let zero = S::zero();
        match config.direction {
            FlowDirection::Rows => Self::new(
                bounds,
                config.anchor_x,
                config.anchor_y,
                move |r, prev| r.stack_x(prev, 1.0, 0.0).add(Point::new(gap, zero)),
                move |r, first| r.stack_y(first, 0.0, 1.0).add(Point::new(zero, line_gap)),
            ),
            FlowDirection::Columns => Self::new(
                bounds,
                config.anchor_x,
                config.anchor_y,
                move |r, prev| r.stack_y(prev, 0.0, 1.0).add(Point::new(zero, gap)),
                move |r, first| r.stack_x(first, 1.0, 0.0).add(Point::new(line_gap, zero)),
            ),
        }
    }

    /// Place `r`, returning false when it cannot fit even at the start of a
    /// new line. A rejected box leaves the wrapper unchanged.
    pub fn add(&mut self, r: Rect<S>) -> bool {
        let Some(&prev) = self.rects.last() else {
            let (ax, ay) = self.anchor;
            let placed = r.nest(&self.bounds, ax, ay);
            if !placed.is_inside(&self.bounds) {
                return false;
            }
            self.line_first = Some(placed);
            self.rects.push(placed);
            return true;
        };

        let stacked = (self.stack)(r, &prev);
        if stacked.is_inside(&self.bounds) {
            self.rects.push(stacked);
            return true;
        }

        let first = self.line_first.unwrap_or(prev);
        let wrapped = (self.wrap)(stacked, &first);
        if !wrapped.is_inside(&self.bounds) {
            return false;
        }
        self.line_first = Some(wrapped);
        self.rects.push(wrapped);
        true
    }

    /// Place boxes until one does not fit; returns how many were placed.
    pub fn extend<I: IntoIterator<Item = Rect<S>>>(&mut self, rects: I) -> usize {
        let mut placed = 0;
        for r in rects {
            if !self.add(r) {
                break;
            }
            placed += 1;
        }
        placed
    }

    /// Placed boxes in arrival order.
    pub fn rects(&self) -> &[Rect<S>] {
        &self.rects
    }

    /// First box of the current line.
    pub fn line_first(&self) -> Option<Rect<S>> {
        self.line_first
    }

    pub fn bounds(&self) -> Rect<S> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Hand the placed boxes over as a group for further alignment.
    pub fn into_slice(self) -> Slice<Rect<S>> {
        Slice::from(self.rects)
    }
}

impl<'a, S: Scalar> fmt::Debug for Wrapper<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper")
            .field("bounds", &self.bounds)
            .field("anchor", &self.anchor)
            .field("rects", &self.rects)
            .field("line_first", &self.line_first)
            .finish_non_exhaustive()
    }
}
