//! # Batch Builds
//!
//! Builds many fences in parallel. Every fence gets its own [`Scene`], so
//! builds share nothing and results do not depend on thread count or
//! scheduling order.
//!
//! ```rust
//! use fence_builder::{batch, FenceParams};
//!
//! let fences = batch::build_row_of_fences(&FenceParams::default(), 3);
//! let origins: Vec<f64> = fences
//!     .iter()
//!     .map(|built| {
//!         let built = built.as_ref().unwrap();
//!         built.scene.world_transform(built.fence.root).unwrap().translation.x
//!     })
//!     .collect();
//! assert_eq!(origins, vec![0.0, 26.0, 52.0]);
//! ```

use fence_mesh::Scene;
use rayon::iter::{IntoParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::builder::FenceBuilder;
use crate::error::BuildResult;
use crate::fence::Fence;
use crate::params::FenceParams;

/// A fence together with the scene that owns its nodes.
#[derive(Debug)]
pub struct BuiltFence {
    /// Scene holding every node of the fence.
    pub scene: Scene,
    /// Handles into [`BuiltFence::scene`].
    pub fence: Fence,
}

impl FenceBuilder {
    /// Builds one fence into a fresh scene.
    pub fn build_detached(&self, params: &FenceParams) -> BuildResult<BuiltFence> {
        let mut scene = Scene::new();
        let fence = self.build(&mut scene, params)?;
        Ok(BuiltFence { scene, fence })
    }

    /// Builds every parameter set in parallel. Results keep input order.
    pub fn build_batch(&self, params: &[FenceParams]) -> Vec<BuildResult<BuiltFence>> {
        params.par_iter().map(|p| self.build_detached(p)).collect()
    }

    /// Builds `count` copies of `params`, the `n`-th shifted by
    /// [`FenceParams::nth_in_row`].
    pub fn build_row(&self, params: &FenceParams, count: usize) -> Vec<BuildResult<BuiltFence>> {
        (0..count)
            .into_par_iter()
            .map(|n| self.build_detached(&params.nth_in_row(n)))
            .collect()
    }
}

/// [`FenceBuilder::build_batch`] with the default configuration.
pub fn build_fences(params: &[FenceParams]) -> Vec<BuildResult<BuiltFence>> {
    FenceBuilder::new().build_batch(params)
}

/// [`FenceBuilder::build_row`] with the default configuration.
pub fn build_row_of_fences(params: &FenceParams, count: usize) -> Vec<BuildResult<BuiltFence>> {
    FenceBuilder::new().build_row(params, count)
}
