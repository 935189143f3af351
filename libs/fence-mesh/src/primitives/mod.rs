//! # Primitives
//!
//! Mesh generation for the boxes a fence is built from.

pub mod cuboid;
pub mod row;

pub use cuboid::{make_box, make_box_from_extents, make_box_with_pivot, Pivot};
pub use row::{make_box_row, make_box_row_along, make_extent_row_along, RowElement};
