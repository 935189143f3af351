//! # Fence Builder
//!
//! Entry point that validates parameters and threads a [`GlobalConfig`]
//! through measurement and lattice binding.

use config::constants::GlobalConfig;
use fence_mesh::Scene;

use crate::error::BuildResult;
use crate::fence::{self, Fence};
use crate::params::FenceParams;
use crate::section::{self, FenceSection};

/// Builds fence sections and fences into a caller-owned [`Scene`].
///
/// Parameters are validated before the scene is touched, so a rejected call
/// adds no nodes.
///
/// # Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use fence_builder::{FenceBuilder, FenceParams};
/// use fence_mesh::Scene;
///
/// let builder = FenceBuilder::with_config(GlobalConfig::new(1e-6, 3).unwrap());
/// let mut scene = Scene::new();
/// let fence = builder.build(&mut scene, &FenceParams::scalloped_preset()).unwrap();
/// assert_eq!(fence.sections.len(), 3);
/// assert!(fence.sections.iter().all(|s| s.lattice.is_some()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FenceBuilder {
    config: GlobalConfig,
}

impl FenceBuilder {
    /// Builder with the default tolerance and measurement precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with an explicit configuration.
    pub fn with_config(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Builds one section at the world origin.
    pub fn build_section(
        &self,
        scene: &mut Scene,
        params: &FenceParams,
    ) -> BuildResult<FenceSection> {
        params.validate()?;
        section::assemble(scene, params, &self.config)
    }

    /// Builds a whole fence starting at `params.x_offset`.
    pub fn build(&self, scene: &mut Scene, params: &FenceParams) -> BuildResult<Fence> {
        params.validate()?;
        fence::assemble(scene, params, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;

    #[test]
    fn test_rejected_params_leave_scene_untouched() {
        let mut scene = Scene::new();
        let params = FenceParams {
            picket_spacing: f64::INFINITY,
            ..FenceParams::default()
        };
        let err = FenceBuilder::new().build(&mut scene, &params).unwrap_err();
        assert_eq!(err, BuildError::invalid_spacing("picketSpacing", f64::INFINITY));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_config_precision_applies_to_measurement() {
        let config = GlobalConfig::new(1e-9, 1).unwrap();
        let params = FenceParams {
            picket_width: 0.44,
            num_pickets: 1,
            ..FenceParams::default()
        };
        let mut scene = Scene::new();
        let section = FenceBuilder::with_config(config)
            .build_section(&mut scene, &params)
            .unwrap();
        assert_eq!(section.picket_row_dimensions.0, 0.4);
        assert_eq!(FenceBuilder::with_config(config).config().dimension_decimals, 1);
    }
}
