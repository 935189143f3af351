//! # Cuboid Primitive
//!
//! Generates axis-aligned rectangular boxes, the only solid a fence is made of.

use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::transform::Axis;

/// Where a box's local origin sits relative to its own extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pivot {
    /// Origin at the box center.
    #[default]
    Center,
    /// Origin at the minimum corner; the box spans `[0, size]`.
    MinCorner,
    /// Origin on the ground at the leading edge: minimum X, minimum Y,
    /// centered Z. Pickets and rails stand on `y = 0` with this pivot.
    BaseLeading,
    /// Origin at an arbitrary point measured from the minimum corner.
    Custom(DVec3),
}

impl Pivot {
    /// Position of the pivot measured from the box's minimum corner.
    pub fn offset(&self, size: DVec3) -> DVec3 {
        match *self {
            Pivot::Center => size * 0.5,
            Pivot::MinCorner => DVec3::ZERO,
            Pivot::BaseLeading => DVec3::new(0.0, 0.0, size.z * 0.5),
            Pivot::Custom(point) => point,
        }
    }
}

/// Creates a `width × height × depth` box centered at the local origin.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use fence_mesh::primitives::make_box;
///
/// let mesh = make_box(0.4, 4.0, 0.1).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert_eq!(mesh.bounding_box().dimensions(), (0.4, 4.0, 0.1));
/// ```
pub fn make_box(width: f64, height: f64, depth: f64) -> MeshResult<Mesh> {
    make_box_with_pivot(DVec3::new(width, height, depth), Pivot::Center)
}

/// Creates a box with an explicit pivot.
///
/// # Errors
///
/// [`MeshError::InvalidDimension`] when any extent is zero, negative or
/// not finite.
pub fn make_box_with_pivot(size: DVec3, pivot: Pivot) -> MeshResult<Mesh> {
    validate_size(size, false)?;
    Ok(cuboid(size, pivot))
}

/// Creates a box whose extents came from a measurement.
///
/// Unlike [`make_box_with_pivot`], zero extents are accepted: a rail sized
/// to an empty picket row is a flat slab rather than an error. Negative and
/// non-finite extents are still rejected.
pub fn make_box_from_extents(size: DVec3, pivot: Pivot) -> MeshResult<Mesh> {
    validate_size(size, true)?;
    Ok(cuboid(size, pivot))
}

/// Checks every extent, reporting the first offending axis.
pub(crate) fn validate_size(size: DVec3, allow_zero: bool) -> MeshResult<()> {
    for axis in Axis::ALL {
        let value = axis.component(size);
        let valid = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
        if !valid {
            return Err(MeshError::invalid_dimension(axis, value));
        }
    }
    Ok(())
}

fn cuboid(size: DVec3, pivot: Pivot) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 12);

    let min = -pivot.offset(size);
    let max = min + size;

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Counter-clockwise winding for outward normals
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts() {
        let mesh = make_box(1.0, 2.0, 3.0).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate());
    }

    #[test]
    fn test_box_centered() {
        let mesh = make_box(2.0, 4.0, 6.0).unwrap();
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bb.max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_box_measured_dimensions_match_input() {
        for (w, h, d) in [(0.4, 4.0, 0.1), (1.0, 5.0, 0.2), (0.15, 0.4, 7.3), (1e-3, 12.5, 0.333)] {
            let mesh = make_box(w, h, d).unwrap();
            assert_eq!(mesh.bounding_box().dimensions(), (w, h, d));
        }
    }

    #[test]
    fn test_min_corner_pivot() {
        let mesh = make_box_with_pivot(DVec3::new(10.0, 20.0, 30.0), Pivot::MinCorner).unwrap();
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::ZERO);
        assert_eq!(bb.max, DVec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_base_leading_pivot_stands_on_ground() {
        let mesh = make_box_with_pivot(DVec3::new(0.4, 4.0, 0.1), Pivot::BaseLeading).unwrap();
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::new(0.0, 0.0, -0.05));
        assert_eq!(bb.max, DVec3::new(0.4, 4.0, 0.05));
    }

    #[test]
    fn test_custom_pivot() {
        let pivot = Pivot::Custom(DVec3::new(2.0, 0.0, 1.0));
        let mesh = make_box_with_pivot(DVec3::splat(2.0), pivot).unwrap();
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::new(-2.0, 0.0, -1.0));
        assert_eq!(bb.max, DVec3::new(0.0, 2.0, 1.0));
    }

    #[test]
    fn test_box_rejects_non_positive() {
        assert_eq!(
            make_box(0.0, 1.0, 1.0).unwrap_err(),
            MeshError::InvalidDimension {
                axis: Axis::X,
                value: 0.0
            }
        );
        assert!(matches!(
            make_box(1.0, -5.0, 1.0),
            Err(MeshError::InvalidDimension { axis: Axis::Y, .. })
        ));
        assert!(matches!(
            make_box(1.0, 1.0, f64::NAN),
            Err(MeshError::InvalidDimension { axis: Axis::Z, .. })
        ));
    }

    #[test]
    fn test_extents_allow_zero_width() {
        let mesh = make_box_from_extents(DVec3::new(0.0, 0.4, 0.15), Pivot::BaseLeading).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.bounding_box().dimensions(), (0.0, 0.4, 0.15));
        assert!(make_box_from_extents(DVec3::new(-0.1, 0.4, 0.15), Pivot::Center).is_err());
    }
}
