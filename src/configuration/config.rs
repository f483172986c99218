//! Configuration types for runtime settings loaded from YAML.
//!
//! [`SimConfig`] is a thin, `serde`-deserializable representation of the
//! simulation settings: bounds, tick duration, initial force-field
//! magnitudes, the numeric guard epsilon, and the boundary-reflection
//! policy. Every field is defaulted, so an empty mapping (`{}`) or any
//! partial document is a valid configuration. A fully empty document
//! deserializes as YAML null, not as a mapping; the binary treats that
//! case as "use the defaults".
//!
//! # YAML format
//!
//! ```yaml
//! width: 800.0
//! height: 600.0
//! dt: 0.04                 # fixed tick duration (~25 ticks/second)
//! gravity: 7.0             # downward acceleration magnitude
//! viscosity: 0.9           # accumulator damping coefficient
//! wall_repulsion: -0.01    # per-wall inverse-power exponent
//! centroid_exponent: 2.0   # centroid-attraction inverse-power exponent
//! epsilon: 1.0e-9          # degenerate-distance guard
//! bounce: symmetric        # or legacy-right-edge
//! ```
//!
//! The driver maps this configuration into its internal runtime types
//! (`Parameters`, the field registry, `Bounds`).

use serde::Deserialize;

/// Which horizontal boundary test the integrator uses.
///
/// `LegacyRightEdge` reproduces the historical behavior of comparing the
/// right extent against both edges; `Symmetric` tests the left and right
/// extents independently.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BouncePolicy {
    #[serde(rename = "symmetric")]
    Symmetric,

    #[serde(rename = "legacy-right-edge")]
    LegacyRightEdge,
}

/// Top-level runtime settings loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub width: f64, // simulation area width
    pub height: f64, // simulation area height
    pub dt: f64, // fixed tick duration
    pub gravity: f64, // initial gravity magnitude
    pub viscosity: f64, // initial damping coefficient
    pub wall_repulsion: f64, // initial per-wall repulsion exponent
    pub centroid_exponent: f64, // initial centroid-attraction exponent
    pub epsilon: f64, // degenerate-distance guard
    pub bounce: BouncePolicy, // horizontal boundary reflection test
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            dt: 0.04,
            gravity: 7.0,
            viscosity: 0.9,
            wall_repulsion: -0.01,
            centroid_exponent: 2.0,
            epsilon: crate::simulation::params::DEFAULT_EPSILON,
            bounce: BouncePolicy::Symmetric,
        }
    }
}
