//! # Config Crate
//!
//! Centralized configuration constants for the fence generation pipeline.
//! Precision values, default fence proportions and the scallop preset all
//! live here so the kernel and the layout engine never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DIMENSION_DECIMALS, DEFAULT_PICKET_WIDTH, DEFAULT_PICKET_SPACING};
//!
//! // Nominal distance between the leading edges of two pickets
//! let pitch = DEFAULT_PICKET_WIDTH + DEFAULT_PICKET_SPACING;
//! assert!((pitch - 0.9).abs() < 1e-12);
//!
//! // Measured sizes are rounded to a fixed number of fractional digits
//! assert_eq!(DIMENSION_DECIMALS, 5);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No values tied to a particular authoring tool
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
