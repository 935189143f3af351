//! # Fence Sections
//!
//! One section is a picket row plus the horizontal cross-sections nailed
//! across it. The pickets are built first and measured; the cross-sections
//! are then sized to the measured row, so a deformed row still gets bars
//! that span it exactly.

use config::constants::GlobalConfig;
use fence_mesh::primitives::{make_box_row, make_extent_row_along, Pivot};
use fence_mesh::{Axis, BoundingBox, Lattice, NodeId, Scene, Transform};
use glam::DVec3;
use tracing::debug;

use crate::error::BuildResult;
use crate::names;
use crate::params::{BarPlacement, FenceParams, ScallopParams};

/// Handles to the nodes of one fence section.
#[derive(Debug)]
pub struct FenceSection {
    /// Section group.
    pub root: NodeId,
    /// Group holding the pickets.
    pub picket_row: NodeId,
    /// Group holding the cross-sections.
    pub cross_section_row: NodeId,
    /// Picket meshes, left to right.
    pub pickets: Vec<NodeId>,
    /// Cross-section meshes, bottom to top.
    pub cross_sections: Vec<NodeId>,
    /// Lattice bound to the pickets of a scalloped section.
    pub lattice: Option<Lattice>,
    /// Measured `(width, height, depth)` of the picket row.
    pub picket_row_dimensions: (f64, f64, f64),
}

/// Builds one section with the default configuration. The section group
/// sits at the world origin.
///
/// # Example
///
/// ```rust
/// use fence_builder::{build_fence_section, FenceParams};
/// use fence_mesh::Scene;
///
/// let mut scene = Scene::new();
/// let section = build_fence_section(&mut scene, &FenceParams::default()).unwrap();
/// assert_eq!(section.pickets.len(), 10);
/// assert_eq!(section.cross_sections.len(), 2);
/// assert_eq!(scene.dimensions(section.root).unwrap(), (8.5, 4.0, 0.15));
/// ```
pub fn build_fence_section(scene: &mut Scene, params: &FenceParams) -> BuildResult<FenceSection> {
    crate::FenceBuilder::new().build_section(scene, params)
}

/// Assembles a section from already validated parameters.
pub(crate) fn assemble(
    scene: &mut Scene,
    params: &FenceParams,
    config: &GlobalConfig,
) -> BuildResult<FenceSection> {
    // Picket row
    let row = make_box_row(
        params.num_pickets,
        params.picket_width,
        params.picket_height,
        params.picket_depth,
        params.picket_spacing,
    )?;
    let picket_names = names::numbered(scene, names::PICKET, row.len());
    let pickets: Vec<NodeId> = row
        .into_iter()
        .zip(picket_names)
        .map(|((mesh, transform), name)| scene.add_mesh(name, mesh, transform))
        .collect();
    let picket_row = scene.group(&pickets, names::PICKET_ROW)?;

    let lattice = match params.scallop() {
        Some(scallop) => Some(scallop_pickets(scene, &pickets, scallop, config)?),
        None => None,
    };

    // Measure what was actually built
    let row_bounds = scene.bounding_box(picket_row)?;
    let dimensions = row_bounds.dimensions_rounded(config.dimension_decimals);

    let cross_sections = build_cross_sections(scene, params, &row_bounds, dimensions.0)?;
    let cross_section_row = scene.group(&cross_sections, names::CROSS_SECTION_ROW)?;

    let name = names::next(scene, names::FENCE_SECTION);
    let root = scene.group(&[picket_row, cross_section_row], name)?;

    debug!(
        section = %root,
        pickets = pickets.len(),
        cross_sections = cross_sections.len(),
        width = dimensions.0,
        scalloped = lattice.is_some(),
        "built fence section"
    );

    Ok(FenceSection {
        root,
        picket_row,
        cross_section_row,
        pickets,
        cross_sections,
        lattice,
        picket_row_dimensions: dimensions,
    })
}

fn scallop_pickets(
    scene: &mut Scene,
    pickets: &[NodeId],
    scallop: &ScallopParams,
    config: &GlobalConfig,
) -> BuildResult<Lattice> {
    let mut lattice = Lattice::bind_with_tolerance(
        scene,
        scallop.lattice_divisions,
        pickets,
        config.tolerance,
    )?;
    lattice.displace_control_points(
        scene,
        &scallop.control_points,
        scallop.scallop_control_point_delta,
    )?;
    Ok(lattice)
}

fn build_cross_sections(
    scene: &mut Scene,
    params: &FenceParams,
    row_bounds: &BoundingBox,
    width: f64,
) -> BuildResult<Vec<NodeId>> {
    let size = DVec3::new(width, params.cross_section_height, params.cross_section_depth);
    let bars = make_extent_row_along(
        Axis::Y,
        params.num_cross_sections,
        size,
        params.cross_section_spacing,
        Pivot::BaseLeading,
    )?;

    let z = match params.bar_placement {
        BarPlacement::Centered => row_bounds.center().z,
        BarPlacement::Behind => row_bounds.min.z - params.cross_section_depth * 0.5,
    };
    let base = Transform::from_xyz(
        row_bounds.min.x,
        row_bounds.min.y + params.cross_section_offset,
        z,
    );

    let bar_names = names::numbered(scene, names::CROSS_SECTION, bars.len());
    Ok(bars
        .into_iter()
        .zip(bar_names)
        .map(|((mesh, transform), name)| scene.add_mesh(name, mesh, base * transform))
        .collect())
}
