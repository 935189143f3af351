//! # Fences
//!
//! A fence is a run of sections along X. Each section is placed after the
//! measured width of everything before it, plus the section spacing.

use config::constants::GlobalConfig;
use fence_mesh::{NodeId, Scene, Transform};
use glam::DVec3;
use tracing::{debug, trace};

use crate::error::BuildResult;
use crate::names;
use crate::params::FenceParams;
use crate::section::{self, FenceSection};

/// Handles to a built fence.
#[derive(Debug)]
pub struct Fence {
    /// Fence group, positioned at `(x_offset, 0, 0)`.
    pub root: NodeId,
    /// Sections, left to right.
    pub sections: Vec<FenceSection>,
}

impl Fence {
    /// Every picket of every section, left to right.
    pub fn pickets(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.sections.iter().flat_map(|s| s.pickets.iter().copied())
    }
}

/// Builds a whole fence with the default configuration.
///
/// # Example
///
/// ```rust
/// use fence_builder::{build_fence, FenceParams};
/// use fence_mesh::Scene;
///
/// let mut scene = Scene::new();
/// let fence = build_fence(&mut scene, &FenceParams::default()).unwrap();
/// assert_eq!(fence.sections.len(), 3);
/// assert_eq!(fence.pickets().count(), 30);
/// // 3 sections of 8.5 plus 2 gaps of 0.2
/// assert_eq!(scene.dimensions(fence.root).unwrap().0, 25.9);
/// ```
pub fn build_fence(scene: &mut Scene, params: &FenceParams) -> BuildResult<Fence> {
    crate::FenceBuilder::new().build(scene, params)
}

/// Assembles a fence from already validated parameters.
pub(crate) fn assemble(
    scene: &mut Scene,
    params: &FenceParams,
    config: &GlobalConfig,
) -> BuildResult<Fence> {
    let root = scene.create_group(names::FENCE, Transform::from_xyz(params.x_offset, 0.0, 0.0));

    let mut sections = Vec::with_capacity(params.num_fence_sections);
    let mut cursor = params.x_offset;
    for index in 0..params.num_fence_sections {
        let section = section::assemble(scene, params, config)?;
        scene.set_world_translation(section.root, DVec3::new(cursor, 0.0, 0.0))?;
        scene.reparent(section.root, root)?;

        let (width, _, _) = scene
            .bounding_box(section.root)?
            .dimensions_rounded(config.dimension_decimals);
        trace!(index, x = cursor, width, "placed fence section");

        cursor += width + params.section_spacing;
        sections.push(section);
    }

    debug!(
        fence = %root,
        sections = sections.len(),
        x_offset = params.x_offset,
        "built fence"
    );
    Ok(Fence { root, sections })
}
