//! # Scene Tree
//!
//! Index-based hierarchy of mesh and group nodes.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. Each
//! node has at most one parent, and reparenting keeps the node's world
//! position, so grouping never visually moves geometry.
//!
//! ## Example
//!
//! ```rust
//! use fence_mesh::{primitives::make_box, Scene, Transform};
//!
//! let mut scene = Scene::new();
//! let mesh = make_box(1.0, 1.0, 1.0).unwrap();
//! let a = scene.add_mesh("a", mesh, Transform::from_xyz(5.0, 0.0, 0.0));
//! let group = scene.group(&[a], "parent").unwrap();
//! scene.translate(group, glam::DVec3::new(1.0, 0.0, 0.0)).unwrap();
//!
//! let bb = scene.bounding_box(a).unwrap();
//! assert_eq!(bb.center().x, 6.0);
//! ```

use std::fmt;

use glam::DVec3;
use tracing::trace;

use crate::bounds::BoundingBox;
use crate::error::{MeshError, MeshResult};
use crate::lattice::LatticeId;
use crate::mesh::Mesh;
use crate::transform::Transform;

/// Handle to a node inside a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the scene arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Leaf geometry, vertices in the node's local frame.
    Mesh(Mesh),
    /// Pure container.
    Group,
}

/// A single entry of the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    transform: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
    lattice: Option<LatticeId>,
}

impl Node {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placement relative to the parent (or the world for roots).
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Owning group, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Mesh or group payload.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The mesh payload, or `None` for groups.
    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            NodeKind::Group => None,
        }
    }

    /// True for group nodes.
    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group)
    }

    /// Lattice this mesh is bound to, if any.
    pub fn lattice(&self) -> Option<LatticeId> {
        self.lattice
    }
}

/// Arena owning every node produced by one generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<Node>,
    lattices_issued: u32,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the scene holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when `id` refers to a node of this scene.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Looks up a node.
    pub fn node(&self, id: NodeId) -> MeshResult<&Node> {
        self.nodes.get(id.index()).ok_or(MeshError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> MeshResult<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or(MeshError::UnknownNode(id))
    }

    fn push(&mut self, name: String, transform: Transform, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name,
            transform,
            parent: None,
            children: Vec::new(),
            kind,
            lattice: None,
        });
        id
    }

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Moves `mesh` into a new root node.
    pub fn add_mesh(
        &mut self,
        name: impl Into<String>,
        mesh: Mesh,
        transform: Transform,
    ) -> NodeId {
        self.push(name.into(), transform, NodeKind::Mesh(mesh))
    }

    /// Creates an empty root group.
    pub fn create_group(&mut self, name: impl Into<String>, transform: Transform) -> NodeId {
        self.push(name.into(), transform, NodeKind::Group)
    }

    /// Creates a group at the world origin and reparents `children` into it,
    /// in order.
    ///
    /// Every child keeps its world position. A child that already had a
    /// parent is removed from it first.
    pub fn group(&mut self, children: &[NodeId], name: impl Into<String>) -> MeshResult<NodeId> {
        for &child in children {
            self.node(child)?;
        }
        let group = self.create_group(name, Transform::IDENTITY);
        for &child in children {
            self.reparent(child, group)?;
        }
        Ok(group)
    }

    /// Makes `child` the last child of `parent`, keeping its world position.
    ///
    /// # Errors
    ///
    /// - [`MeshError::UnknownNode`] for ids outside the scene
    /// - [`MeshError::CycleDetected`] when `child` is `parent` or one of its
    ///   ancestors
    pub fn reparent(&mut self, child: NodeId, parent: NodeId) -> MeshResult<()> {
        self.node(child)?;
        self.node(parent)?;
        if child == parent || self.is_ancestor(child, parent)? {
            return Err(MeshError::CycleDetected { child, parent });
        }
        if self.nodes[child.index()].parent == Some(parent) {
            return Ok(());
        }

        let world = self.world_transform(child)?;
        let parent_world = self.world_transform(parent)?;
        self.detach(child);

        let node = &mut self.nodes[child.index()];
        node.parent = Some(parent);
        node.transform = parent_world.inverse() * world;
        self.nodes[parent.index()].children.push(child);

        trace!(%child, %parent, "reparented node");
        Ok(())
    }

    /// Moves `child` to the root, keeping its world position.
    pub fn unparent(&mut self, child: NodeId) -> MeshResult<()> {
        let world = self.world_transform(child)?;
        self.detach(child);
        self.nodes[child.index()].transform = world;
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.index()].parent.take() {
            self.nodes[parent.index()].children.retain(|&c| c != child);
        }
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// True when `ancestor` appears on the parent chain above `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> MeshResult<bool> {
        let mut current = self.node(node)?.parent;
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.nodes[id.index()].parent;
        }
        Ok(false)
    }

    /// Composed transform from the node's local frame to world space.
    pub fn world_transform(&self, id: NodeId) -> MeshResult<Transform> {
        let node = self.node(id)?;
        let mut world = node.transform;
        let mut current = node.parent;
        while let Some(parent) = current {
            let parent = &self.nodes[parent.index()];
            world = parent.transform * world;
            current = parent.parent;
        }
        Ok(world)
    }

    /// Replaces a node's local transform.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) -> MeshResult<()> {
        self.node_mut(id)?.transform = transform;
        Ok(())
    }

    /// Offsets a node's local transform.
    pub fn translate(&mut self, id: NodeId, offset: DVec3) -> MeshResult<()> {
        self.node_mut(id)?.transform.translation += offset;
        Ok(())
    }

    /// Sets the local transform so the node's origin lands on `position` in
    /// world space.
    pub fn set_world_translation(&mut self, id: NodeId, position: DVec3) -> MeshResult<()> {
        let parent_world = match self.node(id)?.parent {
            Some(parent) => self.world_transform(parent)?,
            None => Transform::IDENTITY,
        };
        self.nodes[id.index()].transform =
            parent_world.inverse() * Transform::from_translation(position);
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Parent of a node.
    pub fn parent(&self, id: NodeId) -> MeshResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Children of a node, in order.
    pub fn children(&self, id: NodeId) -> MeshResult<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Name of a node.
    pub fn name(&self, id: NodeId) -> MeshResult<&str> {
        Ok(&self.node(id)?.name)
    }

    /// Mesh payload of a mesh node.
    pub fn mesh(&self, id: NodeId) -> MeshResult<&Mesh> {
        self.node(id)?.mesh().ok_or(MeshError::NotAMesh(id))
    }

    pub(crate) fn mesh_mut(&mut self, id: NodeId) -> MeshResult<&mut Mesh> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Mesh(mesh) => Ok(mesh),
            NodeKind::Group => Err(MeshError::NotAMesh(id)),
        }
    }

    /// Every node with its id, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// Nodes without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(i, _)| NodeId(i as u32))
    }

    /// First node with the given name, in creation order.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(|i| NodeId(i as u32))
    }

    /// `id` and everything below it, in pre-order.
    pub fn descendants(&self, id: NodeId) -> MeshResult<Vec<NodeId>> {
        self.node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.index()].children.iter().rev());
        }
        Ok(out)
    }

    /// Mesh nodes at or below `id`, in pre-order.
    pub fn descendant_meshes(&self, id: NodeId) -> MeshResult<Vec<NodeId>> {
        Ok(self
            .descendants(id)?
            .into_iter()
            .filter(|&n| !self.nodes[n.index()].is_group())
            .collect())
    }

    /// World-space bounds of every vertex reachable from `id`.
    ///
    /// Recomputed from current vertex data on every call. A subtree without
    /// vertices yields a degenerate box at the node's world origin.
    pub fn bounding_box(&self, id: NodeId) -> MeshResult<BoundingBox> {
        let origin = self.world_transform(id)?;
        let mut bounds: Option<BoundingBox> = None;
        let mut stack = vec![(id, origin)];

        while let Some((current, world)) = stack.pop() {
            let node = &self.nodes[current.index()];
            if let NodeKind::Mesh(mesh) = &node.kind {
                let points = mesh.vertices().iter().map(|&v| world.transform_point(v));
                if let Some(local) = BoundingBox::from_points(points) {
                    bounds = Some(bounds.map_or(local, |bb| bb.union(&local)));
                }
            }
            for &child in &node.children {
                stack.push((child, world * self.nodes[child.index()].transform));
            }
        }

        Ok(bounds.unwrap_or_else(|| BoundingBox::point(origin.translation)))
    }

    /// Rounded `(width, height, depth)` of [`Scene::bounding_box`].
    pub fn dimensions(&self, id: NodeId) -> MeshResult<(f64, f64, f64)> {
        Ok(self.bounding_box(id)?.dimensions())
    }

    /// Merges every mesh below `id` into one world-space mesh.
    pub fn flatten(&self, id: NodeId) -> MeshResult<Mesh> {
        let mut out = Mesh::new();
        for node in self.descendant_meshes(id)? {
            let mut mesh = self.mesh(node)?.clone();
            mesh.translate(self.world_transform(node)?.translation);
            out.merge(&mesh);
        }
        Ok(out)
    }

    /// Compares the subtree at `a` with the subtree at `b` in `other`:
    /// names, kinds, child order, transforms and vertices within `tolerance`.
    pub fn structurally_eq(&self, a: NodeId, other: &Scene, b: NodeId, tolerance: f64) -> bool {
        let (Ok(na), Ok(nb)) = (self.node(a), other.node(b)) else {
            return false;
        };
        let same_payload = match (&na.kind, &nb.kind) {
            (NodeKind::Group, NodeKind::Group) => true,
            (NodeKind::Mesh(ma), NodeKind::Mesh(mb)) => ma.approx_eq(mb, tolerance),
            _ => false,
        };
        same_payload
            && na.name == nb.name
            && na
                .transform
                .translation
                .abs_diff_eq(nb.transform.translation, tolerance)
            && na.children.len() == nb.children.len()
            && na
                .children
                .iter()
                .zip(&nb.children)
                .all(|(&ca, &cb)| self.structurally_eq(ca, other, cb, tolerance))
    }

    // =========================================================================
    // LATTICE BOOKKEEPING
    // =========================================================================

    /// Lattice a mesh node is bound to, if any.
    pub fn lattice_binding(&self, id: NodeId) -> MeshResult<Option<LatticeId>> {
        Ok(self.node(id)?.lattice)
    }

    pub(crate) fn set_lattice_binding(&mut self, id: NodeId, lattice: LatticeId) -> MeshResult<()> {
        self.node_mut(id)?.lattice = Some(lattice);
        Ok(())
    }

    pub(crate) fn issue_lattice_id(&mut self) -> LatticeId {
        let id = LatticeId::new(self.lattices_issued);
        self.lattices_issued += 1;
        id
    }
}
