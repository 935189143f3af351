//! # Build Errors
//!
//! Failures of the layout engine. Kernel errors pass through unchanged.

use fence_mesh::MeshError;
use thiserror::Error;

/// Errors raised while laying out a fence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// Primitive, scene or lattice failure.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A spacing or offset parameter was not finite.
    #[error("Invalid spacing: {field} = {value} (must be finite)")]
    InvalidSpacing {
        /// Parameter name as it appears in [`crate::FenceParams`].
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl BuildError {
    /// Creates an invalid spacing error.
    pub fn invalid_spacing(field: &'static str, value: f64) -> Self {
        Self::InvalidSpacing { field, value }
    }
}

/// Result alias for layout operations.
pub type BuildResult<T> = Result<T, BuildError>;
