//! Linked nodes that move as rigid groups
//!
//! Nodes live in a [`Nodes`] arena and are addressed through copyable
//! [`Node`] handles. Each node carries optional `prev`/`next` indices that
//! chain it into a group: an unordered set of peers that translate together.
//! The indices are plain handles, so linking never creates ownership between
//! nodes; the arena owns all of them.
//!
//! ```
//! use align_layout::layout::{xy, Nodes};
//!
//! let nodes = Nodes::new();
//! let title = nodes.wh(60, 10);
//! let body = nodes.wh(60, 40);
//!
//! // Stacking joins `body` to `title`'s group.
//! body.stack_y(title, 0.0, 1.0);
//! title.move_to(xy(20, 20));
//! assert_eq!(body.pos(), xy(20, 30));
//! ```

use std::cell::RefCell;
use std::fmt;

use log::trace;

use super::group::Element;
use super::point::Point;
use super::rect::Rect;
use super::scalar::Scalar;

/// Index of a node inside its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot<S> {
    pos: Point<S>,
    size: Point<S>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Arena owning every node of a layout session.
///
/// Interior mutability lets many [`Node`] handles share the arena; it is not
/// `Sync`, so concurrent hosts must keep a session on one thread.
#[derive(Debug, Default)]
pub struct Nodes<S> {
    slots: RefCell<Vec<Slot<S>>>,
}

impl<S: Scalar> Nodes<S> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Add an unlinked node covering `rect`.
    pub fn insert(&self, rect: Rect<S>) -> Node<'_, S> {
        let mut slots = self.slots.borrow_mut();
        let id = NodeId(slots.len());
        slots.push(Slot {
            pos: rect.min,
            size: rect.size(),
            prev: None,
            next: None,
        });
        Node { arena: self, id }
    }

    pub fn xyxy(&self, x0: S, y0: S, x1: S, y1: S) -> Node<'_, S> {
        self.insert(Rect::xyxy(x0, y0, x1, y1))
    }

    pub fn xywh(&self, x: S, y: S, w: S, h: S) -> Node<'_, S> {
        self.insert(Rect::xywh(x, y, w, h))
    }

    pub fn pos_size(&self, pos: Point<S>, size: Point<S>) -> Node<'_, S> {
        self.insert(Rect::pos_size(pos, size))
    }

    pub fn pos_wh(&self, pos: Point<S>, w: S, h: S) -> Node<'_, S> {
        self.insert(Rect::pos_wh(pos, w, h))
    }

    /// Node of size `(w, h)` at the origin.
    pub fn wh(&self, w: S, h: S) -> Node<'_, S> {
        self.insert(Rect::wh(w, h))
    }

    /// Handle for `id`, if it belongs to this arena.
    pub fn get(&self, id: NodeId) -> Option<Node<'_, S>> {
        (id.0 < self.len()).then_some(Node { arena: self, id })
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every node in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Node<'_, S>> + '_ {
        (0..self.len()).map(move |i| Node {
            arena: self,
            id: NodeId(i),
        })
    }

    fn slot(&self, id: NodeId) -> Option<Slot<S>> {
        self.slots.borrow().get(id.0).copied()
    }

    fn update(&self, id: NodeId, f: impl FnOnce(&mut Slot<S>)) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(id.0) {
            f(slot);
        }
    }
}

/// Handle to a node in a [`Nodes`] arena.
///
/// Identity is the pair (arena, index): two nodes with identical coordinates
/// are still distinct. A handle from a different arena is treated as absent by
/// the linking and group-alignment operations.
#[derive(Clone, Copy)]
pub struct Node<'a, S> {
    arena: &'a Nodes<S>,
    id: NodeId,
}

impl<'a, S: Scalar> Node<'a, S> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Top-left corner.
    pub fn pos(&self) -> Point<S> {
        self.slot().map(|s| s.pos).unwrap_or_default()
    }

    pub fn size(&self) -> Point<S> {
        self.slot().map(|s| s.size).unwrap_or_default()
    }

    /// Bottom-right corner (exclusive).
    pub fn max(&self) -> Point<S> {
        self.pos() + self.size()
    }

    /// Snapshot of the node's box.
    pub fn rect(&self) -> Rect<S> {
        Rect::pos_size(self.pos(), self.size())
    }

    /// Absolute point at the normalized position `(ax, ay)`.
    pub fn anchor(&self, ax: f64, ay: f64) -> Point<S> {
        self.rect().anchor(ax, ay)
    }

    /// Resize in place, keeping the position. Other members are unaffected.
    pub fn set_size(&self, size: Point<S>) {
        self.arena.update(self.id, |s| s.size = size);
    }

    /// Replace the node's box. Other members are unaffected.
    pub fn set_rect(&self, rect: Rect<S>) {
        self.arena.update(self.id, |s| {
            s.pos = rect.min;
            s.size = rect.size();
        });
    }

    pub fn prev(&self) -> Option<Node<'a, S>> {
        self.slot()?.prev.map(|id| self.handle(id))
    }

    pub fn next(&self) -> Option<Node<'a, S>> {
        self.slot()?.next.map(|id| self.handle(id))
    }

    /// First node of the group.
    pub fn head(&self) -> Node<'a, S> {
        let mut node = *self;
        while let Some(prev) = node.prev() {
            node = prev;
        }
        node
    }

    /// Last node of the group.
    pub fn tail(&self) -> Node<'a, S> {
        let mut node = *self;
        while let Some(next) = node.next() {
            node = next;
        }
        node
    }

    /// Every member of this node's group, head to tail. The order does not
    /// depend on which member is asked.
    pub fn linked(&self) -> Linked<'a, S> {
        Linked {
            arena: self.arena,
            next: Some(self.head().id),
        }
    }

    /// Number of nodes in the group, including this one.
    pub fn group_len(&self) -> usize {
        self.linked().count()
    }

    /// Reports whether `other` is a member of this node's group. A node is
    /// always linked with itself.
    pub fn is_linked_with(&self, other: Node<'_, S>) -> bool {
        self.same_arena(&other) && self.linked().any(|n| n.id == other.id)
    }

    /// Append `other`'s whole group to the tail of this group.
    ///
    /// Returns false without changing anything when `other` belongs to another
    /// arena or is already in this group. Nothing moves.
    pub fn link(&self, other: Node<'_, S>) -> bool {
        if self.is_linked_with(other) || !self.same_arena(&other) {
            return false;
        }
        let tail = self.tail().id;
        let head = self.handle(other.id).head().id;
        self.arena.update(tail, |s| s.next = Some(head));
        self.arena.update(head, |s| s.prev = Some(tail));
        trace!("linked group of {} after {}", head, tail);
        true
    }

    /// Link each node in turn, returning how many groups were merged.
    pub fn link_all<'b, I>(&self, others: I) -> usize
    where
        I: IntoIterator<Item = Node<'b, S>>,
        S: 'b,
    {
        others.into_iter().filter(|&n| self.link(n)).count()
    }

    /// Remove this node from its group, joining its former neighbours.
    pub fn unlink(&self) {
        let Some(slot) = self.slot() else {
            return;
        };
        if slot.prev.is_none() && slot.next.is_none() {
            return;
        }
        if let Some(prev) = slot.prev {
            self.arena.update(prev, |s| s.next = slot.next);
        }
        if let Some(next) = slot.next {
            self.arena.update(next, |s| s.prev = slot.prev);
        }
        self.arena.update(self.id, |s| {
            s.prev = None;
            s.next = None;
        });
        trace!("unlinked {}", self.id);
    }

    /// Translate every member of the group by `delta`.
    pub fn shift_group(&self, delta: Point<S>) {
        for node in self.linked() {
            node.translate(delta);
        }
    }

    /// Move this node to `p`, carrying the rest of its group along.
    pub fn move_to(&self, p: Point<S>) -> Self {
        self.shift_group(p - self.pos());
        *self
    }

    /// Align this node's anchor `(ax, ay)` to the target's anchor `(tax, tay)`.
    ///
    /// When the target is outside the group, the whole group moves and the
    /// target's group is then linked in. When the target is already a member,
    /// only this node moves. A target from another arena is ignored.
    pub fn align(&self, ax: f64, ay: f64, target: Node<'_, S>, tax: f64, tay: f64) -> Self {
        if !self.same_arena(&target) {
            return *self;
        }
        let delta = target.anchor(tax, tay) - self.anchor(ax, ay);
        if self.is_linked_with(target) {
            self.translate(delta);
        } else {
            self.shift_group(delta);
            self.link(target);
        }
        *self
    }

    pub fn nest(&self, target: Node<'_, S>, ax: f64, ay: f64) -> Self {
        self.align(ax, ay, target, ax, ay)
    }

    pub fn center_of(&self, target: Node<'_, S>) -> Self {
        self.align(0.5, 0.5, target, 0.5, 0.5)
    }

    pub fn stack_x(&self, target: Node<'_, S>, tax: f64, tay: f64) -> Self {
        self.align(1.0 - tax, tay, target, tax, tay)
    }

    pub fn stack_y(&self, target: Node<'_, S>, tax: f64, tay: f64) -> Self {
        self.align(tax, 1.0 - tay, target, tax, tay)
    }

    /// Align only this node to any element, without linking or moving the
    /// rest of the group.
    pub fn align_self<T>(&self, ax: f64, ay: f64, target: &T, tax: f64, tay: f64) -> Self
    where
        T: Element<S> + ?Sized,
    {
        let delta = target.bounds().anchor(tax, tay) - self.anchor(ax, ay);
        self.translate(delta);
        *self
    }

    /// Align this node to any element, moving its whole group but linking
    /// nothing. Used to place a group against plain rectangles.
    pub fn align_group<T>(&self, ax: f64, ay: f64, target: &T, tax: f64, tay: f64) -> Self
    where
        T: Element<S> + ?Sized,
    {
        let delta = target.bounds().anchor(tax, tay) - self.anchor(ax, ay);
        self.shift_group(delta);
        *self
    }

    /// Reports whether every point of this node lies inside `other`.
    pub fn is_inside<T: Element<S> + ?Sized>(&self, other: &T) -> bool {
        self.rect().is_inside(&other.bounds())
    }

    fn translate(&self, delta: Point<S>) {
        self.arena.update(self.id, |s| s.pos = s.pos + delta);
    }

    fn slot(&self) -> Option<Slot<S>> {
        self.arena.slot(self.id)
    }

    fn handle(&self, id: NodeId) -> Node<'a, S> {
        Node {
            arena: self.arena,
            id,
        }
    }

    fn same_arena(&self, other: &Node<'_, S>) -> bool {
        std::ptr::eq(self.arena, other.arena)
    }
}

impl<'a, S: Scalar> Element<S> for Node<'a, S> {
    fn bounds(&self) -> Rect<S> {
        self.rect()
    }

    /// Moves this node alone; containers own membership, not the link chain.
    fn shift(&mut self, delta: Point<S>) {
        self.translate(delta);
    }
}

impl<'a, 'b, S: Scalar> PartialEq<Node<'b, S>> for Node<'a, S> {
    fn eq(&self, other: &Node<'b, S>) -> bool {
        self.same_arena(other) && self.id == other.id
    }
}

impl<'a, S: Scalar> fmt::Debug for Node<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("pos", &self.pos())
            .field("size", &self.size())
            .finish()
    }
}

impl<'a, S: Scalar> fmt::Display for Node<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos: {}, Size: {}", self.pos(), self.size())
    }
}

/// Head-to-tail walk over a group. Restart by calling [`Node::linked`] again.
#[derive(Clone)]
pub struct Linked<'a, S> {
    arena: &'a Nodes<S>,
    next: Option<NodeId>,
}

impl<'a, S: Scalar> Iterator for Linked<'a, S> {
    type Item = Node<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.arena.slot(id).and_then(|s| s.next);
        Some(Node {
            arena: self.arena,
            id,
        })
    }
}
