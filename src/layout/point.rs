//! Two-dimensional vectors

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::scalar::Scalar;

/// An X, Y coordinate pair. The axes increase right and down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point<S> {
    pub x: S,
    pub y: S,
}

/// Shorthand for `Point { x, y }`.
pub fn xy<S: Scalar>(x: S, y: S) -> Point<S> {
    Point { x, y }
}

impl<S: Scalar> Point<S> {
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub fn zero() -> Self {
        Self {
            x: S::zero(),
            y: S::zero(),
        }
    }

    /// Vector scaled by `k`.
    pub fn scale(self, k: S) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
        }
    }

    /// Component-wise product.
    pub fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Component-wise quotient.
    pub fn div(self, other: Self) -> Self {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Reports whether the point lies in `r` (max edges excluded).
    pub fn is_in(self, r: &Rect<S>) -> bool {
        r.min.x <= self.x && self.x < r.max.x && r.min.y <= self.y && self.y < r.max.y
    }

    /// Unpack into a tuple.
    pub fn into_tuple(self) -> (S, S) {
        (self.x, self.y)
    }

    /// Convert to another scalar type.
    pub fn cast<T: Scalar>(self) -> Point<T> {
        Point {
            x: self.x.cast(),
            y: self.y.cast(),
        }
    }
}

impl<S: Scalar> From<(S, S)> for Point<S> {
    fn from((x, y): (S, S)) -> Self {
        Self { x, y }
    }
}

impl<S: Scalar> Add for Point<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<S: Scalar> Sub for Point<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<S: Scalar> Neg for Point<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<S: Scalar> fmt::Display for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
