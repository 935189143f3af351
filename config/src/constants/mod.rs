//! Centralized configuration values shared across the fence pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry kernels.
///
/// Extents smaller than this are treated as collapsed when a lattice maps
/// vertices into its parametric space.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Fractional digits kept when a bounding box is turned into dimensions.
///
/// Measured widths feed straight into spacing arithmetic, so they are
/// rounded to keep floating-point jitter out of downstream placement.
///
/// # Examples
/// ```
/// use config::constants::DIMENSION_DECIMALS;
/// let scale = 10f64.powi(DIMENSION_DECIMALS as i32);
/// assert_eq!((0.123456789 * scale).round() / scale, 0.12346);
/// ```
pub const DIMENSION_DECIMALS: u32 = 5;

/// Upper bound accepted for [`GlobalConfig::dimension_decimals`].
///
/// Past this point rounding no longer removes jitter from `f64` values of
/// fence-sized magnitude.
pub const MAX_DIMENSION_DECIMALS: u32 = 12;

/// Minimum number of control points per lattice axis.
///
/// Two points are needed along every axis to span a single cell.
pub const MIN_LATTICE_DIVISIONS: usize = 2;

// =============================================================================
// NORMAL FENCE DEFAULTS
// =============================================================================

/// Default picket width (X extent).
pub const DEFAULT_PICKET_WIDTH: f64 = 0.4;

/// Default picket height (Y extent).
pub const DEFAULT_PICKET_HEIGHT: f64 = 4.0;

/// Default picket depth (Z extent).
pub const DEFAULT_PICKET_DEPTH: f64 = 0.1;

/// Default gap between neighbouring pickets.
pub const DEFAULT_PICKET_SPACING: f64 = 0.5;

/// Default number of pickets per fence section.
pub const DEFAULT_PICKET_COUNT: usize = 10;

/// Default cross-section (rail) height.
pub const DEFAULT_CROSS_SECTION_HEIGHT: f64 = 0.4;

/// Default cross-section (rail) depth.
pub const DEFAULT_CROSS_SECTION_DEPTH: f64 = 0.15;

/// Default number of cross-sections per fence section.
pub const DEFAULT_CROSS_SECTION_COUNT: usize = 2;

/// Height of the first cross-section's bottom face above the ground.
pub const DEFAULT_CROSS_SECTION_OFFSET: f64 = 0.4;

/// Default vertical gap between successive cross-sections.
pub const DEFAULT_CROSS_SECTION_SPACING: f64 = 2.0;

/// Default number of sections in a fence.
pub const DEFAULT_FENCE_SECTION_COUNT: usize = 3;

/// Default gap between neighbouring fence sections.
pub const DEFAULT_SECTION_SPACING: f64 = 0.2;

/// Distance between the origins of successively requested fences.
///
/// # Examples
/// ```
/// use config::constants::FENCE_PITCH;
/// let third_fence_offset = 2.0 * FENCE_PITCH;
/// assert_eq!(third_fence_offset, 52.0);
/// ```
pub const FENCE_PITCH: f64 = 26.0;

// =============================================================================
// SCALLOP DEFAULTS
// =============================================================================

/// Default control lattice resolution for scalloped sections.
pub const DEFAULT_LATTICE_DIVISIONS: [usize; 3] = [3, 3, 2];

/// Control points lifted by the default scallop: the middle column of the
/// top layer, front and back.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_LATTICE_DIVISIONS, DEFAULT_SCALLOP_POINTS};
/// for [i, j, k] in DEFAULT_SCALLOP_POINTS {
///     assert!(i < DEFAULT_LATTICE_DIVISIONS[0]);
///     assert!(j < DEFAULT_LATTICE_DIVISIONS[1]);
///     assert!(k < DEFAULT_LATTICE_DIVISIONS[2]);
/// }
/// ```
pub const DEFAULT_SCALLOP_POINTS: [[usize; 3]; 2] = [[1, 2, 0], [1, 2, 1]];

/// Displacement applied to [`DEFAULT_SCALLOP_POINTS`].
pub const DEFAULT_SCALLOP_DELTA: [f64; 3] = [0.0, 2.0, 0.0];

/// Picket width of the scalloped preset.
pub const SCALLOPED_PICKET_WIDTH: f64 = 1.0;

/// Picket height of the scalloped preset.
pub const SCALLOPED_PICKET_HEIGHT: f64 = 5.0;

/// Picket depth of the scalloped preset.
pub const SCALLOPED_PICKET_DEPTH: f64 = 0.2;

/// Gap between pickets of the scalloped preset.
pub const SCALLOPED_PICKET_SPACING: f64 = 0.2;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.dimension_decimals, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Fractional digits kept when measuring dimensions.
    pub dimension_decimals: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and measurement precision.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 3).expect("valid config");
    /// assert_eq!(cfg.dimension_decimals, 3);
    /// ```
    pub fn new(tolerance: f64, dimension_decimals: u32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if dimension_decimals > MAX_DIMENSION_DECIMALS {
            return Err(ConfigError::InvalidDecimals(dimension_decimals));
        }
        Ok(Self {
            tolerance,
            dimension_decimals,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            dimension_decimals: DIMENSION_DECIMALS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the requested precision exceeds [`MAX_DIMENSION_DECIMALS`].
    InvalidDecimals(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidDecimals(value) => {
                write!(
                    f,
                    "dimension_decimals must be <= {MAX_DIMENSION_DECIMALS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
