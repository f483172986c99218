//! Numerical parameters for the simulation
//!
//! `Parameters` holds the runtime settings shared by every tick:
//! - `epsilon`: the guard threshold below which distance/proximity inputs
//!   to inverse-power force laws are considered degenerate and that
//!   contribution is skipped for the tick,
//! - `bounce`: which horizontal boundary test the integrator uses.

pub use crate::configuration::config::BouncePolicy;

/// Guard threshold used when no configuration overrides it.
pub const DEFAULT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub epsilon: f64, // degenerate-distance guard
    pub bounce: BouncePolicy, // horizontal boundary reflection test
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            bounce: BouncePolicy::Symmetric,
        }
    }
}
