//! # Fence Parameters
//!
//! Everything a host supplies to build a fence. Deserializes from camelCase
//! JSON; every field is optional and falls back to the classic normal fence.
//!
//! ```rust
//! use fence_builder::{FenceParams, FenceVariant};
//!
//! let json = r#"{ "numPickets": 4, "xOffset": 26.0 }"#;
//! let params: FenceParams = serde_json::from_str(json).unwrap();
//! assert_eq!(params.num_pickets, 4);
//! assert_eq!(params.picket_width, 0.4);
//! assert_eq!(params.fence_variant, FenceVariant::Normal);
//! ```

use config::constants::{
    DEFAULT_CROSS_SECTION_COUNT, DEFAULT_CROSS_SECTION_DEPTH, DEFAULT_CROSS_SECTION_HEIGHT,
    DEFAULT_CROSS_SECTION_OFFSET, DEFAULT_CROSS_SECTION_SPACING, DEFAULT_FENCE_SECTION_COUNT,
    DEFAULT_LATTICE_DIVISIONS, DEFAULT_PICKET_COUNT, DEFAULT_PICKET_DEPTH, DEFAULT_PICKET_HEIGHT,
    DEFAULT_PICKET_SPACING, DEFAULT_PICKET_WIDTH, DEFAULT_SCALLOP_DELTA, DEFAULT_SCALLOP_POINTS,
    DEFAULT_SECTION_SPACING, FENCE_PITCH, MIN_LATTICE_DIVISIONS, SCALLOPED_PICKET_DEPTH,
    SCALLOPED_PICKET_HEIGHT, SCALLOPED_PICKET_SPACING, SCALLOPED_PICKET_WIDTH,
};
use fence_mesh::{Axis, MeshError};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};

/// Depth placement of the cross-sections relative to the pickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarPlacement {
    /// Bars centered on the picket row's depth.
    #[default]
    Centered,
    /// Bars flush against the back face of the picket row.
    Behind,
}

/// Lattice settings of a scalloped section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScallopParams {
    /// Control points per axis.
    pub lattice_divisions: [usize; 3],
    /// `[i, j, k]` control points to move.
    pub control_points: Vec<[usize; 3]>,
    /// Displacement applied to every listed control point.
    pub scallop_control_point_delta: DVec3,
}

impl Default for ScallopParams {
    fn default() -> Self {
        Self {
            lattice_divisions: DEFAULT_LATTICE_DIVISIONS,
            control_points: DEFAULT_SCALLOP_POINTS.to_vec(),
            scallop_control_point_delta: DVec3::from_array(DEFAULT_SCALLOP_DELTA),
        }
    }
}

impl ScallopParams {
    /// Checks the lattice resolution and that every control point lies
    /// inside it.
    pub fn validate(&self) -> BuildResult<()> {
        let divisions = self.lattice_divisions;
        if divisions.iter().any(|&n| n < MIN_LATTICE_DIVISIONS) {
            return Err(MeshError::InvalidLatticeDivisions {
                divisions,
                min: MIN_LATTICE_DIVISIONS,
            }
            .into());
        }
        for &index in &self.control_points {
            if index.iter().zip(&divisions).any(|(i, n)| i >= n) {
                return Err(MeshError::ControlPointOutOfRange { index, divisions }.into());
            }
        }
        Ok(())
    }
}

/// Fence style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum FenceVariant {
    /// Straight pickets.
    #[default]
    Normal,
    /// Picket tops reshaped by a lattice.
    Scalloped(ScallopParams),
}

/// Parameters of one fence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FenceParams {
    /// Picket X extent.
    pub picket_width: f64,
    /// Picket Y extent.
    pub picket_height: f64,
    /// Picket Z extent.
    pub picket_depth: f64,
    /// Gap between neighbouring pickets.
    pub picket_spacing: f64,
    /// Pickets per section.
    pub num_pickets: usize,

    /// Cross-section Y extent.
    pub cross_section_height: f64,
    /// Cross-section Z extent.
    pub cross_section_depth: f64,
    /// Cross-sections per section.
    pub num_cross_sections: usize,
    /// Height of the first cross-section's bottom above the picket base.
    pub cross_section_offset: f64,
    /// Vertical gap between cross-sections.
    pub cross_section_spacing: f64,
    /// Depth placement of the cross-sections.
    pub bar_placement: BarPlacement,

    /// Sections per fence.
    pub num_fence_sections: usize,
    /// Gap between neighbouring sections.
    pub section_spacing: f64,
    /// World X of the fence origin.
    pub x_offset: f64,

    /// Normal or scalloped.
    pub fence_variant: FenceVariant,
}

impl Default for FenceParams {
    fn default() -> Self {
        Self {
            picket_width: DEFAULT_PICKET_WIDTH,
            picket_height: DEFAULT_PICKET_HEIGHT,
            picket_depth: DEFAULT_PICKET_DEPTH,
            picket_spacing: DEFAULT_PICKET_SPACING,
            num_pickets: DEFAULT_PICKET_COUNT,
            cross_section_height: DEFAULT_CROSS_SECTION_HEIGHT,
            cross_section_depth: DEFAULT_CROSS_SECTION_DEPTH,
            num_cross_sections: DEFAULT_CROSS_SECTION_COUNT,
            cross_section_offset: DEFAULT_CROSS_SECTION_OFFSET,
            cross_section_spacing: DEFAULT_CROSS_SECTION_SPACING,
            bar_placement: BarPlacement::default(),
            num_fence_sections: DEFAULT_FENCE_SECTION_COUNT,
            section_spacing: DEFAULT_SECTION_SPACING,
            x_offset: 0.0,
            fence_variant: FenceVariant::Normal,
        }
    }
}

impl FenceParams {
    /// The classic scalloped fence: wide, tall pickets with the middle of
    /// the top raised by the default scallop.
    pub fn scalloped_preset() -> Self {
        Self {
            picket_width: SCALLOPED_PICKET_WIDTH,
            picket_height: SCALLOPED_PICKET_HEIGHT,
            picket_depth: SCALLOPED_PICKET_DEPTH,
            picket_spacing: SCALLOPED_PICKET_SPACING,
            fence_variant: FenceVariant::Scalloped(ScallopParams::default()),
            ..Self::default()
        }
    }

    /// Copy placed as the `n`-th fence of a row, [`FENCE_PITCH`] apart.
    pub fn nth_in_row(&self, n: usize) -> Self {
        Self {
            x_offset: n as f64 * FENCE_PITCH,
            ..self.clone()
        }
    }

    /// Scallop settings, if this is a scalloped fence.
    pub fn scallop(&self) -> Option<&ScallopParams> {
        match &self.fence_variant {
            FenceVariant::Normal => None,
            FenceVariant::Scalloped(scallop) => Some(scallop),
        }
    }

    /// Checks sizes, spacings and scallop indices before anything is built,
    /// so a rejected build leaves the scene untouched.
    pub fn validate(&self) -> BuildResult<()> {
        check_size(DVec3::new(
            self.picket_width,
            self.picket_height,
            self.picket_depth,
        ))?;
        // Cross-section width is measured, so only height and depth are checked.
        check_size(DVec3::new(
            1.0,
            self.cross_section_height,
            self.cross_section_depth,
        ))?;

        check_spacing("picketSpacing", self.picket_spacing)?;
        check_spacing("crossSectionOffset", self.cross_section_offset)?;
        check_spacing("crossSectionSpacing", self.cross_section_spacing)?;
        check_spacing("sectionSpacing", self.section_spacing)?;
        check_spacing("xOffset", self.x_offset)?;
        if let Some(scallop) = self.scallop() {
            scallop.validate()?;
        }
        Ok(())
    }
}

fn check_size(size: DVec3) -> BuildResult<()> {
    for axis in Axis::ALL {
        let value = axis.component(size);
        if !(value.is_finite() && value > 0.0) {
            return Err(MeshError::invalid_dimension(axis, value).into());
        }
    }
    Ok(())
}

fn check_spacing(field: &'static str, value: f64) -> BuildResult<()> {
    if !value.is_finite() {
        return Err(BuildError::invalid_spacing(field, value));
    }
    Ok(())
}
