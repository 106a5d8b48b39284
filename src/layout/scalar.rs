//! Numeric scalar abstraction shared by points, rectangles and nodes

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::{Num, NumCast};

/// A coordinate type usable by every geometry type in this crate.
///
/// Implemented for the signed integers and both float widths. Anchors are
/// always expressed as `f64` fractions, so each scalar must convert to and
/// from `f64`. Conversions follow `as` semantics: truncation toward zero for
/// integers, saturation at the type bounds.
pub trait Scalar:
    Num + NumCast + Copy + PartialOrd + Neg<Output = Self> + Debug + Display + Default + 'static
{
    /// Convert from `f64`, truncating toward zero for integer scalars.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Smaller of two values (the left one on ties or unordered input).
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Larger of two values (the left one on ties or unordered input).
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Convert into another scalar type with `as` semantics.
    fn cast<T: Scalar>(self) -> T {
        T::from_f64(self.to_f64())
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, f32, f64);
