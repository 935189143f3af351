//! # Fence Builder
//!
//! Layout engine that turns [`FenceParams`] into a tree of meshes.
//!
//! ## Architecture
//!
//! ```text
//! FenceParams → section (pickets → scallop → measure → cross-sections)
//!             → fence (sections placed by measured width)
//! ```
//!
//! Geometry, the scene tree and lattice deformation live in `fence-mesh`;
//! this crate decides what to build and where to put it.
//!
//! ## Usage
//!
//! ```rust
//! use fence_builder::{build_fence, FenceParams};
//! use fence_mesh::Scene;
//!
//! let mut scene = Scene::new();
//! let fence = build_fence(&mut scene, &FenceParams::scalloped_preset()).unwrap();
//! let mesh = scene.flatten(fence.root).unwrap();
//! assert_eq!(mesh.vertex_count(), 3 * (10 + 2) * 8);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod fence;
pub mod names;
pub mod params;
pub mod section;

pub use batch::{build_fences, build_row_of_fences, BuiltFence};
pub use builder::FenceBuilder;
pub use error::{BuildError, BuildResult};
pub use fence::{build_fence, Fence};
pub use params::{BarPlacement, FenceParams, FenceVariant, ScallopParams};
pub use section::{build_fence_section, FenceSection};
