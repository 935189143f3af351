//! Translation-only transforms and the axis vocabulary used by layout code.
//!
//! Rotation and scale stay identity throughout the fence pipeline, so a
//! transform is just an offset. Composition is addition and the inverse is
//! negation, which keeps reparenting exact.

use std::fmt;
use std::ops::Mul;

use glam::{DMat4, DVec3};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width direction; fences run along X.
    X,
    /// Height direction.
    Y,
    /// Depth direction.
    Z,
}

impl Axis {
    /// All three axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (0, 1 or 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    #[inline]
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// Reads this axis' component of `v`.
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        v[self.index()]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Local placement of a scene node relative to its parent.
///
/// # Example
///
/// ```rust
/// use fence_mesh::Transform;
/// use glam::DVec3;
///
/// let parent = Transform::from_xyz(10.0, 0.0, 0.0);
/// let child = Transform::from_xyz(0.5, 2.0, 0.0);
/// let world = parent * child;
/// assert_eq!(world.transform_point(DVec3::ZERO), DVec3::new(10.5, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Offset from the parent's origin.
    pub translation: DVec3,
}

impl Transform {
    /// The transform that leaves every point in place.
    pub const IDENTITY: Transform = Transform {
        translation: DVec3::ZERO,
    };

    /// Creates a transform from a translation vector.
    #[inline]
    pub fn from_translation(translation: DVec3) -> Self {
        Self { translation }
    }

    /// Creates a transform from translation components.
    #[inline]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from_translation(DVec3::new(x, y, z))
    }

    /// Returns the transform that undoes this one.
    #[inline]
    pub fn inverse(self) -> Self {
        Self::from_translation(-self.translation)
    }

    /// Maps a point from this transform's local frame to its parent frame.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        point + self.translation
    }

    /// Returns the equivalent 4×4 affine matrix, for hosts that want one.
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_translation(self.translation)
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// `parent * child` gives the child's transform in the parent's parent frame.
    fn mul(self, rhs: Transform) -> Transform {
        Transform::from_translation(self.translation + rhs.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_and_inverse() {
        let a = Transform::from_xyz(1.0, 2.0, 3.0);
        let b = Transform::from_xyz(-4.0, 0.5, 0.0);
        assert_eq!((a * b).translation, DVec3::new(-3.0, 2.5, 3.0));
        assert_eq!(a * a.inverse(), Transform::IDENTITY);
    }

    #[test]
    fn test_matrix_matches_point_transform() {
        let t = Transform::from_xyz(5.0, -1.0, 2.0);
        let p = DVec3::new(1.0, 1.0, 1.0);
        assert_eq!(t.to_matrix().transform_point3(p), t.transform_point(p));
    }

    #[test]
    fn test_axis_helpers() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::Y.component(v), 2.0);
        assert_eq!(Axis::Z.unit(), DVec3::Z);
        assert_eq!(Axis::X.to_string(), "X");
        assert_eq!(Axis::ALL.map(Axis::index), [0, 1, 2]);
    }
}
