//! Global force fields and their registry
//!
//! Every field implements [`ForceField`] and injects force into one
//! entity per invocation. Fields are process-wide and hold no per-entity
//! state: just their current magnitude, the magnitude saved for toggle
//! round-trips, and an active flag.
//!
//! Toggle semantics are uniform: toggling off saves the current value and
//! zeroes it, toggling back on restores the exact pre-toggle value.
//! Inactive fields contribute nothing at all, so an inverse-power law
//! with a zeroed exponent never degenerates into a constant unit force.
//!
//! All inverse-power laws guard their distance/proximity input against a
//! small epsilon and skip the contribution for the tick instead of
//! propagating infinity or NaN.

use crate::simulation::states::{Bounds, Entity, NVec2};

/// A global, toggleable rule injecting force into entities.
///
/// No default body: every concrete field states its own rule.
pub trait ForceField {
    fn apply(&self, entity: &mut Entity, bounds: Bounds);
}

/// Which toggleable field (or wall sub-field) a command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldToggle {
    Gravity,
    Viscosity,
    Wall(Wall),
    CentroidAttraction,
}

// =========================================================================================
// Directional constant force
// =========================================================================================

/// Constant downward acceleration (screen coordinates: +y is down).
#[derive(Debug, Clone)]
pub struct Gravity {
    magnitude: f64,
    saved: f64,
    active: bool,
}

impl Gravity {
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude,
            saved: magnitude,
            active: true,
        }
    }

    /// Current magnitude; zero while toggled off.
    pub fn magnitude(&self) -> f64 {
        if self.active {
            self.magnitude
        } else {
            0.0
        }
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.saved = self.magnitude;
            self.magnitude = 0.0;
        } else {
            self.magnitude = self.saved;
        }
        self.active = !self.active;
    }
}

impl ForceField for Gravity {
    fn apply(&self, entity: &mut Entity, _bounds: Bounds) {
        if !self.active {
            return;
        }
        entity.apply_force(NVec2::new(0.0, self.magnitude));
    }
}

// =========================================================================================
// Multiplicative damping
// =========================================================================================

/// Scales the entity's pending force accumulator by `1 - coefficient`.
///
/// This is an energy-dissipation step on the forces collected this tick,
/// before they fold into the velocity; it is not a velocity-space drag.
#[derive(Debug, Clone)]
pub struct Viscosity {
    coefficient: f64,
    saved: f64,
    active: bool,
}

impl Viscosity {
    pub fn new(coefficient: f64) -> Self {
        Self {
            coefficient,
            saved: coefficient,
            active: true,
        }
    }

    pub fn coefficient(&self) -> f64 {
        if self.active {
            self.coefficient
        } else {
            0.0
        }
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.saved = self.coefficient;
            self.coefficient = 0.0;
        } else {
            self.coefficient = self.saved;
        }
        self.active = !self.active;
    }
}

impl ForceField for Viscosity {
    fn apply(&self, entity: &mut Entity, _bounds: Bounds) {
        if !self.active {
            return;
        }
        entity.accum *= 1.0 - self.coefficient;
    }
}

// =========================================================================================
// Boundary-proximity repulsion
// =========================================================================================

/// One side of the simulation area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];

    fn index(self) -> usize {
        match self {
            Wall::Top => 0,
            Wall::Bottom => 1,
            Wall::Left => 2,
            Wall::Right => 3,
        }
    }
}

/// Four independently toggleable inverse-power repulsors, one per wall.
///
/// For an entity strictly inside the bounds, each wall pushes it inward
/// with magnitude `1 / proximity^factor`, where proximity is the distance
/// from the entity's near extent to that wall. Entities whose extent lies
/// on or outside the boundary are exempt entirely, which keeps the power
/// law away from its singularity at the wall itself.
#[derive(Debug, Clone)]
pub struct WallRepulsion {
    factors: [f64; 4], // indexed by Wall::index
    active: [bool; 4],
    saved: f64, // one shared restore value for all four walls
    epsilon: f64,
}

impl WallRepulsion {
    pub fn new(factor: f64, epsilon: f64) -> Self {
        Self {
            factors: [factor; 4],
            active: [true; 4],
            saved: factor,
            epsilon,
        }
    }

    pub fn factor(&self, wall: Wall) -> f64 {
        let i = wall.index();
        if self.active[i] {
            self.factors[i]
        } else {
            0.0
        }
    }

    pub fn toggle(&mut self, wall: Wall) {
        let i = wall.index();
        if self.active[i] {
            self.saved = self.factors[i];
            self.factors[i] = 0.0;
        } else {
            self.factors[i] = self.saved;
        }
        self.active[i] = !self.active[i];
    }

    fn strictly_inside(entity: &Entity, bounds: Bounds) -> bool {
        entity.left() > 0.0
            && entity.right() < bounds.width
            && entity.top() > 0.0
            && entity.bottom() < bounds.height
    }

    /// `1 / proximity^factor`, or `None` when the proximity is degenerate.
    fn repulsion(&self, proximity: f64, factor: f64) -> Option<f64> {
        if proximity < self.epsilon {
            return None;
        }
        Some(1.0 / proximity.powf(factor))
    }
}

impl ForceField for WallRepulsion {
    fn apply(&self, entity: &mut Entity, bounds: Bounds) {
        if !Self::strictly_inside(entity, bounds) {
            return;
        }
        for wall in Wall::ALL {
            let i = wall.index();
            if !self.active[i] {
                continue;
            }
            // Proximity of the near extent, and the inward push direction.
            let (proximity, direction) = match wall {
                Wall::Top => (entity.top(), NVec2::new(0.0, 1.0)),
                Wall::Bottom => (bounds.height - entity.bottom(), NVec2::new(0.0, -1.0)),
                Wall::Left => (entity.left(), NVec2::new(1.0, 0.0)),
                Wall::Right => (bounds.width - entity.right(), NVec2::new(-1.0, 0.0)),
            };
            if let Some(magnitude) = self.repulsion(proximity, self.factors[i]) {
                entity.apply_force(direction * magnitude);
            }
        }
    }
}

// =========================================================================================
// Centroid attraction
// =========================================================================================

/// Inverse-power attraction toward a group's mass-weighted centroid.
///
/// Not part of the shared registry: the owning group applies it, since
/// only the group knows its centroid. Same toggle semantics as the
/// global fields, on the exponent.
#[derive(Debug, Clone)]
pub struct CentroidAttraction {
    exponent: f64,
    saved: f64,
    active: bool,
    epsilon: f64,
}

impl CentroidAttraction {
    pub fn new(exponent: f64, epsilon: f64) -> Self {
        Self {
            exponent,
            saved: exponent,
            active: true,
            epsilon,
        }
    }

    pub fn exponent(&self) -> f64 {
        if self.active {
            self.exponent
        } else {
            0.0
        }
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.saved = self.exponent;
            self.exponent = 0.0;
        } else {
            self.exponent = self.saved;
        }
        self.active = !self.active;
    }

    /// Pull `entity` toward `centroid` with magnitude
    /// `1 / distance^exponent`. Degenerate distances are skipped.
    pub fn apply_toward(&self, entity: &mut Entity, centroid: NVec2) {
        if !self.active {
            return;
        }
        let d = centroid - entity.x;
        let dist = d.norm();
        if dist < self.epsilon {
            return;
        }
        let magnitude = 1.0 / dist.powf(self.exponent);
        entity.apply_force(d * (magnitude / dist));
    }
}

// =========================================================================================
// Registry
// =========================================================================================

/// The ordered set of process-wide force fields.
///
/// Application order is fixed: gravity, viscosity, wall repulsion.
/// Centroid attraction runs afterwards, per group.
pub struct FieldRegistry {
    pub gravity: Gravity,
    pub viscosity: Viscosity,
    pub walls: WallRepulsion,
}

impl FieldRegistry {
    pub fn new(gravity: Gravity, viscosity: Viscosity, walls: WallRepulsion) -> Self {
        Self {
            gravity,
            viscosity,
            walls,
        }
    }

    /// Run every field over one entity, in registry order.
    pub fn apply_all(&self, entity: &mut Entity, bounds: Bounds) {
        let fields: [&dyn ForceField; 3] = [&self.gravity, &self.viscosity, &self.walls];
        for field in fields {
            field.apply(entity, bounds);
        }
    }

    /// Route a toggle to the addressed field. `CentroidAttraction` is not
    /// held here; the driver fans it out to each group.
    pub fn toggle(&mut self, which: FieldToggle) {
        match which {
            FieldToggle::Gravity => self.gravity.toggle(),
            FieldToggle::Viscosity => self.viscosity.toggle(),
            FieldToggle::Wall(wall) => self.walls.toggle(wall),
            FieldToggle::CentroidAttraction => {}
        }
    }
}
