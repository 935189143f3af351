//! # Lattice Deformation
//!
//! Free-form deformation (FFD) of bound meshes by a regular control grid.
//!
//! ## Overview
//!
//! 1. [`Lattice::bind`] spans a grid over the targets' union world bounds
//!    and records every vertex's normalized `(u, v, w)` once
//! 2. [`Lattice::displace_control_points`] moves control points
//! 3. Each bound vertex is re-evaluated as the trilinear blend of the 8
//!    control points of its enclosing cell
//!
//! The lattice lives in the world frame its targets had at bind time.
//! Moving a target afterwards carries the deformation with it.
//!
//! ## Example
//!
//! ```rust
//! use fence_mesh::{primitives::make_box, Lattice, Scene, Transform};
//! use glam::DVec3;
//!
//! let mut scene = Scene::new();
//! let node = scene.add_mesh("box", make_box(2.0, 2.0, 2.0).unwrap(), Transform::IDENTITY);
//!
//! let mut lattice = Lattice::bind(&mut scene, [2, 2, 2], &[node]).unwrap();
//! let top = Lattice::select(0..=1, 1..=1, 0..=1);
//! lattice.displace_control_points(&mut scene, &top, DVec3::new(0.0, 1.0, 0.0)).unwrap();
//!
//! assert_eq!(scene.dimensions(node).unwrap().1, 3.0);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use config::constants::{EPSILON_TOLERANCE, MIN_LATTICE_DIVISIONS};
use glam::DVec3;
use tracing::{debug, trace};

use crate::bounds::BoundingBox;
use crate::error::{MeshError, MeshResult};
use crate::scene::{NodeId, Scene};

/// Identifier of a lattice, unique within the scene that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeId(u32);

impl LatticeId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for LatticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a lattice. An unbound lattice is never materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeState {
    /// Control points sit on the rest grid.
    Bound,
    /// At least one control point has been moved since bind or reset.
    Displaced,
}

#[derive(Debug)]
struct Binding {
    node: NodeId,
    /// World translation of the node at bind time.
    frame: DVec3,
    /// Normalized lattice coordinates, one per vertex.
    params: Vec<DVec3>,
}

/// A control grid bound to a fixed set of mesh nodes.
///
/// Not `Clone`: a copy would drive the same meshes from a second set of
/// control points.
///
/// ```compile_fail
/// fn needs_clone<T: Clone>() {}
/// needs_clone::<fence_mesh::Lattice>();
/// ```
#[derive(Debug)]
pub struct Lattice {
    id: LatticeId,
    divisions: [usize; 3],
    bounds: BoundingBox,
    tolerance: f64,
    rest: Vec<DVec3>,
    points: Vec<DVec3>,
    bindings: Vec<Binding>,
    state: LatticeState,
}

impl Lattice {
    /// Binds a lattice with `divisions` control points per axis to `targets`.
    ///
    /// There is no unbound state: a `Lattice` only exists once bound, and
    /// starts out [`LatticeState::Bound`].
    ///
    /// Duplicate target ids are bound once. An empty target list yields a
    /// lattice around the origin that deforms nothing.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidLatticeDivisions`] when any axis has fewer than
    ///   [`MIN_LATTICE_DIVISIONS`] points
    /// - [`MeshError::UnknownNode`] / [`MeshError::NotAMesh`] for bad targets
    /// - [`MeshError::AlreadyBound`] when a target already has a lattice
    pub fn bind(
        scene: &mut Scene,
        divisions: [usize; 3],
        targets: &[NodeId],
    ) -> MeshResult<Self> {
        Self::bind_with_tolerance(scene, divisions, targets, EPSILON_TOLERANCE)
    }

    /// Like [`Lattice::bind`], treating axes no longer than `tolerance` as
    /// flat. Flat axes map every vertex to the middle of the lattice.
    pub fn bind_with_tolerance(
        scene: &mut Scene,
        divisions: [usize; 3],
        targets: &[NodeId],
        tolerance: f64,
    ) -> MeshResult<Self> {
        if divisions.iter().any(|&n| n < MIN_LATTICE_DIVISIONS) {
            return Err(MeshError::InvalidLatticeDivisions {
                divisions,
                min: MIN_LATTICE_DIVISIONS,
            });
        }

        let mut unique: Vec<NodeId> = Vec::with_capacity(targets.len());
        for &node in targets {
            scene.mesh(node)?;
            if let Some(lattice) = scene.lattice_binding(node)? {
                return Err(MeshError::AlreadyBound { node, lattice });
            }
            if !unique.contains(&node) {
                unique.push(node);
            }
        }

        // Union of world bounds over the targets
        let mut frames = Vec::with_capacity(unique.len());
        let mut bounds: Option<BoundingBox> = None;
        for &node in &unique {
            let frame = scene.world_transform(node)?.translation;
            let local = scene.mesh(node)?.bounding_box().translated(frame);
            bounds = Some(bounds.map_or(local, |bb| bb.union(&local)));
            frames.push(frame);
        }
        let bounds = bounds.unwrap_or_else(|| BoundingBox::point(DVec3::ZERO));

        let rest = rest_grid(&bounds, divisions);
        let id = scene.issue_lattice_id();

        let mut bindings = Vec::with_capacity(unique.len());
        for (&node, frame) in unique.iter().zip(frames) {
            let params = scene
                .mesh(node)?
                .vertices()
                .iter()
                .map(|&v| world_to_lattice(&bounds, v + frame, tolerance))
                .collect();
            scene.set_lattice_binding(node, id)?;
            bindings.push(Binding { node, frame, params });
        }

        debug!(
            lattice = %id,
            ?divisions,
            targets = bindings.len(),
            "bound lattice"
        );

        Ok(Self {
            id,
            divisions,
            bounds,
            tolerance,
            points: rest.clone(),
            rest,
            bindings,
            state: LatticeState::Bound,
        })
    }

    /// Cartesian product of inclusive index ranges, `i` varying fastest.
    pub fn select(
        i: RangeInclusive<usize>,
        j: RangeInclusive<usize>,
        k: RangeInclusive<usize>,
    ) -> Vec<[usize; 3]> {
        let mut out = Vec::new();
        for kk in k {
            for jj in j.clone() {
                for ii in i.clone() {
                    out.push([ii, jj, kk]);
                }
            }
        }
        out
    }

    /// Adds `delta` to every indexed control point, then re-evaluates all
    /// bound vertices.
    ///
    /// Indices are checked up front; on error nothing is mutated.
    pub fn displace_control_points(
        &mut self,
        scene: &mut Scene,
        indices: &[[usize; 3]],
        delta: DVec3,
    ) -> MeshResult<()> {
        let flat = indices
            .iter()
            .map(|&index| self.control_index(index))
            .collect::<MeshResult<Vec<_>>>()?;

        for i in flat {
            self.points[i] += delta;
        }
        self.state = LatticeState::Displaced;

        trace!(lattice = %self.id, moved = indices.len(), ?delta, "displaced control points");
        self.apply(scene)
    }

    /// Returns every control point to the rest grid and re-evaluates.
    pub fn reset(&mut self, scene: &mut Scene) -> MeshResult<()> {
        self.points.clone_from(&self.rest);
        self.state = LatticeState::Bound;
        self.apply(scene)
    }

    fn apply(&self, scene: &mut Scene) -> MeshResult<()> {
        for binding in &self.bindings {
            let mesh = scene.mesh_mut(binding.node)?;
            for (v, &uvw) in mesh.vertices_mut().iter_mut().zip(&binding.params) {
                *v = self.evaluate(uvw) - binding.frame;
            }
        }
        Ok(())
    }

    /// World position for normalized lattice coordinates under the current
    /// control points.
    pub fn evaluate(&self, uvw: DVec3) -> DVec3 {
        let [nx, ny, nz] = self.divisions;
        let (i, tu) = cell(uvw.x, nx);
        let (j, tv) = cell(uvw.y, ny);
        let (k, tw) = cell(uvw.z, nz);

        let weights = Self::trilinear_weights(tu, tv, tw);
        let mut out = DVec3::ZERO;
        for (corner, weight) in weights.iter().enumerate() {
            let (di, dj, dk) = (corner & 1, (corner >> 1) & 1, (corner >> 2) & 1);
            let index = (i + di) + (j + dj) * nx + (k + dk) * nx * ny;
            out += self.points[index] * *weight;
        }
        out
    }

    /// Weights of the 8 cell corners for local cell coordinates.
    ///
    /// Corner `c` is offset `(c & 1, (c >> 1) & 1, (c >> 2) & 1)` from the
    /// cell's minimum corner. The weights sum to 1.
    pub fn trilinear_weights(u: f64, v: f64, w: f64) -> [f64; 8] {
        let mut weights = [0.0; 8];
        for (corner, weight) in weights.iter_mut().enumerate() {
            let wu = if corner & 1 == 0 { 1.0 - u } else { u };
            let wv = if (corner >> 1) & 1 == 0 { 1.0 - v } else { v };
            let ww = if (corner >> 2) & 1 == 0 { 1.0 - w } else { w };
            *weight = wu * wv * ww;
        }
        weights
    }

    fn control_index(&self, [i, j, k]: [usize; 3]) -> MeshResult<usize> {
        let [nx, ny, nz] = self.divisions;
        if i >= nx || j >= ny || k >= nz {
            return Err(MeshError::ControlPointOutOfRange {
                index: [i, j, k],
                divisions: self.divisions,
            });
        }
        Ok(i + j * nx + k * nx * ny)
    }

    /// Current position of a control point.
    pub fn control_point(&self, index: [usize; 3]) -> MeshResult<DVec3> {
        Ok(self.points[self.control_index(index)?])
    }

    /// Rest position of a control point.
    pub fn rest_point(&self, index: [usize; 3]) -> MeshResult<DVec3> {
        Ok(self.rest[self.control_index(index)?])
    }

    /// All control points, `i` varying fastest.
    pub fn control_points(&self) -> &[DVec3] {
        &self.points
    }

    /// Identifier recorded on bound nodes.
    pub fn id(&self) -> LatticeId {
        self.id
    }

    /// Control points per axis.
    pub fn divisions(&self) -> [usize; 3] {
        self.divisions
    }

    /// World bounds the rest grid spans.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Extent below which an axis counted as flat at bind time.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LatticeState {
        self.state
    }

    /// Bound mesh nodes in bind order.
    pub fn bound_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.bindings.iter().map(|b| b.node)
    }
}

fn rest_grid(bounds: &BoundingBox, [nx, ny, nz]: [usize; 3]) -> Vec<DVec3> {
    let size = bounds.size();
    let mut points = Vec::with_capacity(nx * ny * nz);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let t = DVec3::new(
                    i as f64 / (nx - 1) as f64,
                    j as f64 / (ny - 1) as f64,
                    k as f64 / (nz - 1) as f64,
                );
                points.push(bounds.min + size * t);
            }
        }
    }
    points
}

/// Inverts the box mapping per axis, clamped to `[0, 1]`.
fn world_to_lattice(bounds: &BoundingBox, p: DVec3, tolerance: f64) -> DVec3 {
    let size = bounds.size();
    let axis = |value: f64, min: f64, extent: f64| {
        if extent <= tolerance {
            0.5
        } else {
            ((value - min) / extent).clamp(0.0, 1.0)
        }
    };
    DVec3::new(
        axis(p.x, bounds.min.x, size.x),
        axis(p.y, bounds.min.y, size.y),
        axis(p.z, bounds.min.z, size.z),
    )
}

/// Enclosing cell along one axis and the local coordinate inside it.
fn cell(t: f64, n: usize) -> (usize, f64) {
    let scaled = t * (n - 1) as f64;
    let index = (scaled.floor().max(0.0) as usize).min(n - 2);
    (index, scaled - index as f64)
}
