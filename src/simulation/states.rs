//! Core state types for the mass/connector simulation.
//!
//! Defines the point-mass `Entity` (free or anchored), the rectangular
//! simulation `Bounds`, and the crate-wide 2D vector alias `NVec2`.
//!
//! Coordinates are screen-style: the origin is the top-left corner and
//! y grows downward. An entity's `x` is its center; its square extent is
//! `size` wide.

use nalgebra::Vector2;

use crate::simulation::params::{BouncePolicy, Parameters};

pub type NVec2 = Vector2<f64>;

/// Default entity extent, in simulation units.
pub const DEFAULT_ENTITY_SIZE: f64 = 16.0;

/// Rectangular simulation area, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow (or shrink, with a negative delta) both dimensions by `delta`.
    pub fn grown(self, delta: f64) -> Self {
        Self {
            width: self.width + delta,
            height: self.height + delta,
        }
    }
}

/// Whether an entity integrates its position each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Free,
    /// Never moves. Forces may still land in the accumulator but are
    /// never consumed.
    Anchored,
}

/// A simulated point mass.
#[derive(Debug, Clone)]
pub struct Entity {
    pub x: NVec2, // center position
    pub v: NVec2, // velocity
    pub accum: NVec2, // forces collected this tick
    pub m: f64, // mass; m < 0 marks the entity immovable by convention
    pub size: f64, // square extent width
    pub kind: EntityKind,
}

impl Entity {
    /// A free entity at `(x, y)` with the default extent.
    pub fn free(x: f64, y: f64, m: f64) -> Self {
        Self {
            x: NVec2::new(x, y),
            v: NVec2::zeros(),
            accum: NVec2::zeros(),
            m,
            size: DEFAULT_ENTITY_SIZE,
            kind: EntityKind::Free,
        }
    }

    /// An anchored entity at `(x, y)`. Skips integration entirely.
    pub fn anchored(x: f64, y: f64, m: f64) -> Self {
        Self {
            kind: EntityKind::Anchored,
            ..Self::free(x, y, m)
        }
    }

    pub fn left(&self) -> f64 {
        self.x.x - 0.5 * self.size
    }

    pub fn right(&self) -> f64 {
        self.x.x + 0.5 * self.size
    }

    pub fn top(&self) -> f64 {
        self.x.y - 0.5 * self.size
    }

    pub fn bottom(&self) -> f64 {
        self.x.y + 0.5 * self.size
    }

    /// Add `force` into this tick's accumulator.
    ///
    /// Negative mass is the immovability convention (used by the
    /// transient pointer anchor): such entities accumulate nothing.
    pub fn apply_force(&mut self, force: NVec2) {
        if self.m >= 0.0 {
            self.accum += force;
        }
    }

    /// Euclidean distance between centers.
    pub fn distance(&self, other: &Entity) -> f64 {
        (self.x - other.x).norm()
    }

    /// Advance this entity by one tick.
    ///
    /// Anchored entities return immediately; their position is never
    /// touched. Otherwise the boundary reflection runs first, then the
    /// accumulator folds into the velocity and the position advances:
    /// `v += accum; accum = 0; x += v * dt`.
    pub fn integrate(&mut self, dt: f64, bounds: Bounds, params: &Parameters) {
        if self.kind == EntityKind::Anchored {
            return;
        }
        self.bounce(bounds, params.bounce);
        self.v += self.accum;
        self.accum = NVec2::zeros();
        self.x += self.v * dt;
    }

    /// Reflect the velocity off the walls the extent has crossed.
    ///
    /// A vertical crossing negates the direction angle (flips the
    /// y-component); a horizontal crossing maps the direction to
    /// `180 - direction` (flips the x-component). The horizontal test
    /// depends on the configured policy: `LegacyRightEdge` compares the
    /// right extent against both edges, faithful to a long-standing
    /// defect in the behavior this models.
    fn bounce(&mut self, bounds: Bounds, policy: BouncePolicy) {
        if self.bottom() >= bounds.height || self.top() <= 0.0 {
            self.v.y = -self.v.y;
        } else {
            let crossed = match policy {
                BouncePolicy::Symmetric => self.right() >= bounds.width || self.left() <= 0.0,
                BouncePolicy::LegacyRightEdge => {
                    self.right() >= bounds.width || self.right() <= 0.0
                }
            };
            if crossed {
                self.v.x = -self.v.x;
            }
        }
    }
}
