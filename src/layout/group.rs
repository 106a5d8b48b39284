//! Composite groups of movable boxes
//!
//! Everything that can be laid out implements [`Element`]: it reports its
//! bounds and can be translated. [`Slice`] and [`Map`] collect elements and
//! move them as one unit through [`GroupAlign`], computing a single delta from
//! the aggregate bounds so the members keep their relative layout.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use super::grid::union;
use super::node::Node;
use super::point::Point;
use super::rect::Rect;
use super::scalar::Scalar;

/// A box that can report its bounds and be translated.
pub trait Element<S: Scalar> {
    /// Smallest rectangle enclosing the element.
    fn bounds(&self) -> Rect<S>;

    /// Translate the element by `delta`.
    fn shift(&mut self, delta: Point<S>);
}

impl<S: Scalar> Element<S> for Rect<S> {
    fn bounds(&self) -> Rect<S> {
        *self
    }

    fn shift(&mut self, delta: Point<S>) {
        *self = self.add(delta);
    }
}

impl<S: Scalar, E: Element<S> + ?Sized> Element<S> for Box<E> {
    fn bounds(&self) -> Rect<S> {
        (**self).bounds()
    }

    fn shift(&mut self, delta: Point<S>) {
        (**self).shift(delta)
    }
}

/// Alignment operators for composite groups.
///
/// Each operator computes one translation from the group's aggregate bounds
/// and broadcasts it to every member. The inset family works on the aggregate
/// bounds and returns a new rectangle without touching the members.
pub trait GroupAlign<S: Scalar>: Element<S> + Sized {
    /// Translate every member by `delta`.
    fn add(&mut self, delta: Point<S>) -> &mut Self {
        self.shift(delta);
        self
    }

    /// Move the group so its anchor `(ax, ay)` lands on the target's anchor
    /// `(tax, tay)`.
    fn align<T>(&mut self, ax: f64, ay: f64, target: &T, tax: f64, tay: f64) -> &mut Self
    where
        T: Element<S> + ?Sized,
    {
        let delta = target.bounds().anchor(tax, tay) - self.bounds().anchor(ax, ay);
        self.shift(delta);
        self
    }

    fn nest<T: Element<S> + ?Sized>(&mut self, target: &T, ax: f64, ay: f64) -> &mut Self {
        self.align(ax, ay, target, ax, ay)
    }

    fn center_of<T: Element<S> + ?Sized>(&mut self, target: &T) -> &mut Self {
        self.align(0.5, 0.5, target, 0.5, 0.5)
    }

    fn stack_x<T: Element<S> + ?Sized>(&mut self, target: &T, tax: f64, tay: f64) -> &mut Self {
        self.align(1.0 - tax, tay, target, tax, tay)
    }

    fn stack_y<T: Element<S> + ?Sized>(&mut self, target: &T, tax: f64, tay: f64) -> &mut Self {
        self.align(tax, 1.0 - tay, target, tax, tay)
    }

    /// Move the group so its aggregate bounds fit inside the target.
    fn clamp<T: Element<S> + ?Sized>(&mut self, target: &T) -> &mut Self {
        let current = self.bounds();
        let clamped = current.clamp(&target.bounds());
        self.shift(clamped.min - current.min);
        self
    }

    fn inset(&self, n: S) -> Rect<S> {
        self.bounds().inset(n)
    }

    fn inset_xy(&self, x: S, y: S) -> Rect<S> {
        self.bounds().inset_xy(x, y)
    }

    fn inset_ltrb(&self, left: S, top: S, right: S, bottom: S) -> Rect<S> {
        self.bounds().inset_ltrb(left, top, right, bottom)
    }

    fn outset(&self, n: S) -> Rect<S> {
        self.bounds().outset(n)
    }

    fn outset_xy(&self, x: S, y: S) -> Rect<S> {
        self.bounds().outset_xy(x, y)
    }

    fn outset_ltrb(&self, left: S, top: S, right: S, bottom: S) -> Rect<S> {
        self.bounds().outset_ltrb(left, top, right, bottom)
    }
}

/// An ordered list of elements moved together.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<E>(Vec<E>);

impl<E> Slice<E> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&E> {
        self.0.last()
    }

    pub fn into_inner(self) -> Vec<E> {
        self.0
    }
}

impl<E> Default for Slice<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Deref for Slice<E> {
    type Target = Vec<E>;
    fn deref(&self) -> &Vec<E> {
        &self.0
    }
}

impl<E> DerefMut for Slice<E> {
    fn deref_mut(&mut self) -> &mut Vec<E> {
        &mut self.0
    }
}

impl<E> From<Vec<E>> for Slice<E> {
    fn from(items: Vec<E>) -> Self {
        Self(items)
    }
}

impl<E> FromIterator<E> for Slice<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<E> IntoIterator for Slice<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<S: Scalar, E: Element<S>> Element<S> for Slice<E> {
    /// Union of the member bounds; the empty rectangle at the origin when
    /// there are no members.
    fn bounds(&self) -> Rect<S> {
        union(self.0.iter().map(Element::bounds))
    }

    fn shift(&mut self, delta: Point<S>) {
        for item in &mut self.0 {
            item.shift(delta);
        }
    }
}

impl<S: Scalar, E: Element<S>> GroupAlign<S> for Slice<E> {}

/// A collection of named elements moved together.
#[derive(Debug, Clone, PartialEq)]
pub struct Map<E>(HashMap<String, E>);

impl<E> Map<E> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn into_inner(self) -> HashMap<String, E> {
        self.0
    }
}

impl<E> Default for Map<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Deref for Map<E> {
    type Target = HashMap<String, E>;
    fn deref(&self) -> &HashMap<String, E> {
        &self.0
    }
}

impl<E> DerefMut for Map<E> {
    fn deref_mut(&mut self) -> &mut HashMap<String, E> {
        &mut self.0
    }
}

impl<K: Into<String>, E> FromIterator<(K, E)> for Map<E> {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, e)| (k.into(), e)).collect())
    }
}

impl<S: Scalar, E: Element<S>> Element<S> for Map<E> {
    fn bounds(&self) -> Rect<S> {
        union(self.0.values().map(Element::bounds))
    }

    fn shift(&mut self, delta: Point<S>) {
        for item in self.0.values_mut() {
            item.shift(delta);
        }
    }
}

impl<S: Scalar, E: Element<S>> GroupAlign<S> for Map<E> {}

/// Any layout entity: a leaf box or a nested group.
#[derive(Debug, Clone)]
pub enum Item<'a, S: Scalar> {
    Rect(Rect<S>),
    Node(Node<'a, S>),
    Slice(Slice<Item<'a, S>>),
    Map(Map<Item<'a, S>>),
}

impl<'a, S: Scalar> Item<'a, S> {
    /// The rectangle of a leaf `Rect` item.
    pub fn as_rect(&self) -> Option<Rect<S>> {
        match self {
            Item::Rect(r) => Some(*r),
            _ => None,
        }
    }
}

impl<'a, S: Scalar> Element<S> for Item<'a, S> {
    fn bounds(&self) -> Rect<S> {
        match self {
            Item::Rect(r) => r.bounds(),
            Item::Node(n) => n.bounds(),
            Item::Slice(s) => s.bounds(),
            Item::Map(m) => m.bounds(),
        }
    }

    fn shift(&mut self, delta: Point<S>) {
        match self {
            Item::Rect(r) => r.shift(delta),
            Item::Node(n) => n.shift(delta),
            Item::Slice(s) => s.shift(delta),
            Item::Map(m) => m.shift(delta),
        }
    }
}

impl<'a, S: Scalar> GroupAlign<S> for Item<'a, S> {}

impl<'a, S: Scalar> From<Rect<S>> for Item<'a, S> {
    fn from(r: Rect<S>) -> Self {
        Item::Rect(r)
    }
}

impl<'a, S: Scalar> From<Node<'a, S>> for Item<'a, S> {
    fn from(n: Node<'a, S>) -> Self {
        Item::Node(n)
    }
}

impl<'a, S: Scalar> From<Slice<Item<'a, S>>> for Item<'a, S> {
    fn from(s: Slice<Item<'a, S>>) -> Self {
        Item::Slice(s)
    }
}

impl<'a, S: Scalar> From<Map<Item<'a, S>>> for Item<'a, S> {
    fn from(m: Map<Item<'a, S>>) -> Self {
        Item::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::point::xy;

    #[test]
    fn test_empty_slice_bounds() {
        let s: Slice<Rect<i32>> = Slice::new();
        assert_eq!(s.bounds(), Rect::default());
        assert!(s.last().is_none());
    }

    #[test]
    fn test_slice_bounds_and_shift() {
        let mut s = Slice::from(vec![Rect::xywh(0, 0, 10, 10), Rect::xywh(20, 5, 10, 10)]);
        assert_eq!(s.bounds(), Rect::xyxy(0, 0, 30, 15));
        s.shift(xy(5, 5));
        assert_eq!(s[0], Rect::xywh(5, 5, 10, 10));
        assert_eq!(s[1], Rect::xywh(25, 10, 10, 10));
    }

    #[test]
    fn test_slice_nest_preserves_relative_layout() {
        let mut s = Slice::from(vec![Rect::xywh(0, 0, 10, 10), Rect::xywh(20, 0, 10, 10)]);
        s.nest(&Rect::wh(100, 100), 1.0, 1.0);
        assert_eq!(s.bounds(), Rect::xyxy(70, 90, 100, 100));
        assert_eq!(s[1].min - s[0].min, xy(20, 0));
    }

    #[test]
    fn test_map_center_of() {
        let mut m: Map<Rect<i32>> = [("a", Rect::wh(10, 10)), ("b", Rect::xywh(10, 10, 10, 10))]
            .into_iter()
            .collect();
        m.center_of(&Rect::wh(100, 100));
        assert_eq!(m["a"], Rect::xywh(40, 40, 10, 10));
        assert_eq!(m["b"], Rect::xywh(50, 50, 10, 10));
    }

    #[test]
    fn test_clamp_group() {
        let mut s = Slice::from(vec![Rect::xywh(90, 90, 20, 20)]);
        s.clamp(&Rect::wh(100, 100));
        assert_eq!(s[0], Rect::xywh(80, 80, 20, 20));
    }

    #[test]
    fn test_inset_uses_aggregate_bounds() {
        let s = Slice::from(vec![Rect::xywh(0, 0, 10, 10), Rect::xywh(30, 30, 10, 10)]);
        assert_eq!(s.inset(5), Rect::xyxy(5, 5, 35, 35));
        assert_eq!(s.outset(1), Rect::xyxy(-1, -1, 41, 41));
        assert_eq!(s[0], Rect::xywh(0, 0, 10, 10));
    }

    #[test]
    fn test_nested_items() {
        let inner: Slice<Item<'_, i32>> =
            vec![Item::Rect(Rect::wh(5, 5)), Item::Rect(Rect::xywh(5, 5, 5, 5))].into();
        let mut outer: Slice<Item<'_, i32>> =
            vec![Item::Slice(inner), Item::Rect(Rect::xywh(20, 0, 5, 5))].into();
        assert_eq!(outer.bounds(), Rect::xyxy(0, 0, 25, 10));
        outer.add(xy(1, 2));
        match &outer[0] {
            Item::Slice(s) => assert_eq!(s[1].as_rect(), Some(Rect::xywh(6, 7, 5, 5))),
            other => panic!("unexpected item {:?}", other),
        }
    }
}
