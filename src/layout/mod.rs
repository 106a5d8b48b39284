//! Rectangle geometry, linked groups and flow placement
//!
//! [`Rect`] and [`Point`] are plain values generic over a [`Scalar`]. Boxes
//! that must keep their relative layout while being moved around live in a
//! [`Nodes`] arena and are linked into groups; heterogeneous collections are
//! aligned as a whole through [`Slice`], [`Map`] and [`Item`]. [`Wrapper`]
//! places boxes in rows or columns that wrap at the edge of a region.

pub mod config;
pub mod grid;
pub mod group;
pub mod node;
pub mod point;
pub mod rect;
pub mod scalar;
pub mod wrapper;

pub use config::{FlowConfig, FlowDirection, LayoutConfig};
pub use grid::{intersect, union};
pub use group::{Element, GroupAlign, Item, Map, Slice};
pub use node::{Linked, Node, NodeId, Nodes};
pub use point::{xy, Point};
pub use rect::{Points, Rect};
pub use scalar::Scalar;
pub use wrapper::{Placement, Wrapper};
