//! # Fence Mesh
//!
//! Geometry kernel for procedural fences.
//!
//! ## Architecture
//!
//! ```text
//! primitives (Mesh) → scene (Scene tree) → lattice (FFD)
//!                          ↓
//!                   bounds (BoundingBox)
//! ```
//!
//! ## Components
//!
//! - **Primitives**: boxes and evenly spaced rows of boxes
//! - **Scene**: arena of mesh and group nodes with translation transforms
//! - **Bounds**: world-space boxes recomputed from vertex data on demand
//! - **Lattice**: trilinear free-form deformation of bound meshes
//!
//! ## Usage
//!
//! ```rust
//! use fence_mesh::{primitives::make_box_row, Scene};
//!
//! let mut scene = Scene::new();
//! let nodes: Vec<_> = make_box_row(3, 0.4, 4.0, 0.1, 0.5)
//!     .unwrap()
//!     .into_iter()
//!     .map(|(mesh, t)| scene.add_mesh("picket", mesh, t))
//!     .collect();
//! let row = scene.group(&nodes, "pickets").unwrap();
//! assert_eq!(scene.dimensions(row).unwrap(), (2.2, 4.0, 0.1));
//! ```

pub mod bounds;
pub mod error;
pub mod lattice;
pub mod mesh;
pub mod primitives;
pub mod scene;
pub mod transform;

pub use bounds::BoundingBox;
pub use error::{MeshError, MeshResult};
pub use lattice::{Lattice, LatticeId, LatticeState};
pub use mesh::Mesh;
pub use scene::{Node, NodeId, NodeKind, Scene};
pub use transform::{Axis, Transform};
