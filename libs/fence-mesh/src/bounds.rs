//! # Bounding Boxes
//!
//! Axis-aligned extents derived from vertex data.
//!
//! Boxes are never stored on meshes or nodes. Layout code asks for a fresh
//! one every time it needs a size, which is how it learns the footprint of
//! geometry it did not compute analytically (a deformed picket row, say).

use config::constants::DIMENSION_DECIMALS;
use glam::DVec3;

/// An axis-aligned bounding box.
///
/// # Example
///
/// ```rust
/// use fence_mesh::BoundingBox;
/// use glam::DVec3;
///
/// let bb = BoundingBox::new(DVec3::ZERO, DVec3::new(0.4, 4.0, 0.1));
/// assert_eq!(bb.dimensions(), (0.4, 4.0, 0.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a box from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates a degenerate box at a single point.
    pub fn point(p: DVec3) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bb = Self::point(first);
        for p in points {
            bb.include(p);
        }
        Some(bb)
    }

    /// Grows the box to contain `p`.
    #[inline]
    pub fn include(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Unrounded extent per axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// True when min and max coincide.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns the box shifted by `offset`.
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// True when the interiors intersect. Boxes that only touch on a face do
    /// not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
            && self.min.z < other.max.z
            && other.min.z < self.max.z
    }

    /// `(width, height, depth)` rounded to [`DIMENSION_DECIMALS`] digits.
    ///
    /// The rounding is part of the contract: layout arithmetic built on these
    /// values must not inherit floating-point noise from vertex sums.
    pub fn dimensions(&self) -> (f64, f64, f64) {
        self.dimensions_rounded(DIMENSION_DECIMALS)
    }

    /// `(width, height, depth)` rounded to `decimals` fractional digits.
    pub fn dimensions_rounded(&self, decimals: u32) -> (f64, f64, f64) {
        let size = self.size();
        (
            round_to(size.x, decimals),
            round_to(size.y, decimals),
            round_to(size.z, decimals),
        )
    }
}

/// Rounds `value` to `decimals` fractional digits.
///
/// # Example
///
/// ```rust
/// use fence_mesh::bounds::round_to;
/// assert_eq!(round_to(3.9999999999, 5), 4.0);
/// assert_eq!(round_to(0.123456, 2), 0.12);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // Normalize -0.0 so equality checks on collapsed extents stay simple.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bb = BoundingBox::from_points([
            DVec3::new(1.0, -2.0, 0.0),
            DVec3::new(-1.0, 3.0, 0.5),
            DVec3::new(0.0, 0.0, -0.5),
        ])
        .unwrap();
        assert_eq!(bb.min, DVec3::new(-1.0, -2.0, -0.5));
        assert_eq!(bb.max, DVec3::new(1.0, 3.0, 0.5));
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_dimensions_round_away_jitter() {
        let bb = BoundingBox::new(DVec3::ZERO, DVec3::new(0.1 + 0.2, 4.000000001, 0.1));
        assert_eq!(bb.dimensions(), (0.3, 4.0, 0.1));
    }

    #[test]
    fn test_degenerate_dimensions_are_zero() {
        let bb = BoundingBox::point(DVec3::new(2.0, 0.0, -1.0));
        assert!(bb.is_degenerate());
        assert_eq!(bb.dimensions(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_overlap_excludes_touching() {
        let a = BoundingBox::new(DVec3::ZERO, DVec3::ONE);
        let touching = a.translated(DVec3::X);
        let inside = a.translated(DVec3::splat(0.5));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_union_and_center() {
        let a = BoundingBox::new(DVec3::ZERO, DVec3::ONE);
        let b = BoundingBox::new(DVec3::splat(2.0), DVec3::splat(3.0));
        let u = a.union(&b);
        assert_eq!(u.min, DVec3::ZERO);
        assert_eq!(u.max, DVec3::splat(3.0));
        assert_eq!(u.center(), DVec3::splat(1.5));
    }

    #[test]
    fn test_round_to_negative_zero() {
        assert_eq!(round_to(-0.000001, 5).to_bits(), 0.0f64.to_bits());
    }
}
