//! # Box Rows
//!
//! Evenly spaced runs of identical boxes. A picket row is a run along X;
//! the rails of a section are a run along Y.

use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::primitives::cuboid::{make_box_from_extents, make_box_with_pivot, Pivot};
use crate::transform::{Axis, Transform};

/// One element of a row: a fresh mesh plus its placement inside the row.
pub type RowElement = (Mesh, Transform);

/// Builds `count` boxes along X, each standing on the ground.
///
/// Element `i` is placed at `x = i * (width + spacing)`. The row's origin is
/// element 0's leading edge, so a row spans `[0, count*width +
/// (count-1)*spacing]` along X.
///
/// # Example
///
/// ```rust
/// use fence_mesh::primitives::make_box_row;
///
/// let row = make_box_row(3, 0.4, 4.0, 0.1, 0.5).unwrap();
/// assert_eq!(row.len(), 3);
/// assert_eq!(row[2].1.translation.x, 1.8);
/// assert!(make_box_row(0, 0.4, 4.0, 0.1, 0.5).unwrap().is_empty());
/// ```
pub fn make_box_row(
    count: usize,
    width: f64,
    height: f64,
    depth: f64,
    spacing: f64,
) -> MeshResult<Vec<RowElement>> {
    make_box_row_along(
        Axis::X,
        count,
        DVec3::new(width, height, depth),
        spacing,
        Pivot::BaseLeading,
    )
}

/// Builds `count` boxes laid out along `axis`.
///
/// # Errors
///
/// - [`MeshError::InvalidDimension`] for a non-positive extent
/// - [`MeshError::InvalidSpacing`] for a non-finite spacing
pub fn make_box_row_along(
    axis: Axis,
    count: usize,
    size: DVec3,
    spacing: f64,
    pivot: Pivot,
) -> MeshResult<Vec<RowElement>> {
    build_row(axis, count, size, spacing, || make_box_with_pivot(size, pivot))
}

/// Like [`make_box_row_along`] but accepts zero extents, for rows whose size
/// was measured from other geometry.
pub fn make_extent_row_along(
    axis: Axis,
    count: usize,
    size: DVec3,
    spacing: f64,
    pivot: Pivot,
) -> MeshResult<Vec<RowElement>> {
    build_row(axis, count, size, spacing, || make_box_from_extents(size, pivot))
}

fn build_row<F>(
    axis: Axis,
    count: usize,
    size: DVec3,
    spacing: f64,
    factory: F,
) -> MeshResult<Vec<RowElement>>
where
    F: Fn() -> MeshResult<Mesh>,
{
    if !spacing.is_finite() {
        return Err(MeshError::invalid_spacing(spacing));
    }

    let step = axis.component(size) + spacing;
    (0..count)
        .map(|i| {
            let mesh = factory()?;
            let offset = axis.unit() * (i as f64 * step);
            Ok((mesh, Transform::from_translation(offset)))
        })
        .collect()
}
