//! # Mesh Errors
//!
//! Error types for primitive construction, scene assembly and lattice
//! deformation. Every failure is reported to the caller; nothing is
//! clamped or defaulted behind its back.

use thiserror::Error;

use crate::lattice::LatticeId;
use crate::scene::NodeId;
use crate::transform::Axis;

/// Errors that can occur in the fence geometry kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A size parameter was zero, negative or not finite.
    #[error("Invalid dimension: {axis} extent must be positive, got {value}")]
    InvalidDimension {
        /// Axis the offending extent belongs to.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },

    /// A spacing or offset was not finite.
    #[error("Invalid spacing: {value} (must be finite)")]
    InvalidSpacing {
        /// The rejected value.
        value: f64,
    },

    /// A lattice axis had fewer than the minimum number of control points.
    #[error("Invalid lattice divisions {divisions:?}: every axis needs at least {min} points")]
    InvalidLatticeDivisions {
        /// Requested divisions along X, Y, Z.
        divisions: [usize; 3],
        /// Minimum accepted per axis.
        min: usize,
    },

    /// The mesh is already influenced by another lattice.
    #[error("Node {node} is already bound to lattice {lattice}")]
    AlreadyBound {
        /// The mesh node that was offered for binding.
        node: NodeId,
        /// The lattice that owns the existing binding.
        lattice: LatticeId,
    },

    /// Reparenting would make a node its own ancestor.
    #[error("Reparenting {child} under {parent} would create a cycle")]
    CycleDetected {
        /// Node being moved.
        child: NodeId,
        /// Proposed new parent.
        parent: NodeId,
    },

    /// The id does not belong to this scene.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The operation needs a mesh node but got a group.
    #[error("Node {0} is not a mesh")]
    NotAMesh(NodeId),

    /// A control point index lies outside the lattice.
    #[error("Control point {index:?} is outside lattice divisions {divisions:?}")]
    ControlPointOutOfRange {
        /// Offending `[i, j, k]` index.
        index: [usize; 3],
        /// Lattice divisions along X, Y, Z.
        divisions: [usize; 3],
    },
}

impl MeshError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(axis: Axis, value: f64) -> Self {
        Self::InvalidDimension { axis, value }
    }

    /// Creates an invalid spacing error.
    pub fn invalid_spacing(value: f64) -> Self {
        Self::InvalidSpacing { value }
    }
}

/// Result alias for kernel operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_dimension(Axis::Y, -1.0);
        assert!(err.to_string().contains("Y"));
        assert!(err.to_string().contains("-1"));

        let err = MeshError::InvalidLatticeDivisions {
            divisions: [1, 3, 2],
            min: 2,
        };
        assert!(err.to_string().contains("[1, 3, 2]"));
    }

    /// Errors cross thread boundaries in batch builds.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
