//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert_eq!(cfg.dimension_decimals, DIMENSION_DECIMALS);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 5).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 40).unwrap_err(),
        ConfigError::InvalidDecimals(40)
    );
    assert!(matches!(
        GlobalConfig::new(f64::NAN, 5),
        Err(ConfigError::InvalidTolerance(_))
    ));
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidTolerance(-1.0)
        .to_string()
        .contains("tolerance"));
    assert!(ConfigError::InvalidDecimals(13)
        .to_string()
        .contains("dimension_decimals"));
}

#[test]
fn default_fence_sizes_are_positive() {
    for size in [
        DEFAULT_PICKET_WIDTH,
        DEFAULT_PICKET_HEIGHT,
        DEFAULT_PICKET_DEPTH,
        DEFAULT_CROSS_SECTION_HEIGHT,
        DEFAULT_CROSS_SECTION_DEPTH,
        SCALLOPED_PICKET_WIDTH,
        SCALLOPED_PICKET_HEIGHT,
        SCALLOPED_PICKET_DEPTH,
    ] {
        assert!(size > 0.0);
    }
}

#[test]
fn cross_sections_fit_within_default_pickets() {
    let top = DEFAULT_CROSS_SECTION_OFFSET
        + DEFAULT_CROSS_SECTION_COUNT as f64 * DEFAULT_CROSS_SECTION_HEIGHT
        + (DEFAULT_CROSS_SECTION_COUNT - 1) as f64 * DEFAULT_CROSS_SECTION_SPACING;
    assert!(top < DEFAULT_PICKET_HEIGHT);
}

#[test]
fn default_lattice_is_valid() {
    assert!(DEFAULT_LATTICE_DIVISIONS
        .iter()
        .all(|&d| d >= MIN_LATTICE_DIVISIONS));
}
