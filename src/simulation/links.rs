//! Connectors: spring-like links between two entities
//!
//! A `Connector` joins two entities by index into the owning group's
//! entity list and applies Hooke's law each tick, with strict
//! action-reaction: whatever force the start endpoint receives, the end
//! endpoint receives exactly negated.
//!
//! The `Oscillating` variant models a muscle: it re-derives its rest
//! length from a fixed base length and a sine oscillator driven by the
//! group's accumulated clock before running the shared linear law.

use crate::simulation::states::{Entity, NVec2};

/// Connector behavior variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectorKind {
    /// Plain Hookean spring with a constant rest length.
    Linear,
    /// Rest length modulated as
    /// `base_length * (1 + amplitude * sin(frequency * t + phase_delay))`.
    Oscillating {
        base_length: f64,
        amplitude: f64,
        phase_delay: f64,
        frequency: f64,
    },
}

/// A force-generating link between two entities of one group.
///
/// Endpoints are non-owning indices; a connector may reference the same
/// entity twice (a self-loop contributes zero force when its rest length
/// is zero).
#[derive(Debug, Clone)]
pub struct Connector {
    pub start: usize,
    pub end: usize,
    pub rest_length: f64,
    pub k: f64, // Hooke's constant
    pub kind: ConnectorKind,
}

impl Connector {
    /// A plain spring between two entity indices.
    pub fn linear(start: usize, end: usize, rest_length: f64, k: f64) -> Self {
        Self {
            start,
            end,
            rest_length,
            k,
            kind: ConnectorKind::Linear,
        }
    }

    /// An oscillating connector. The declared rest length doubles as the
    /// base length of the oscillator.
    pub fn oscillating(
        start: usize,
        end: usize,
        base_length: f64,
        k: f64,
        amplitude: f64,
        phase_delay: f64,
        frequency: f64,
    ) -> Self {
        Self {
            start,
            end,
            rest_length: base_length,
            k,
            kind: ConnectorKind::Oscillating {
                base_length,
                amplitude,
                phase_delay,
                frequency,
            },
        }
    }

    /// Advance this connector by one tick at clock time `t`.
    ///
    /// Oscillating connectors first recompute their effective rest
    /// length, then both variants run the shared linear law and apply
    /// equal and opposite forces to the two endpoints.
    pub fn update(&mut self, t: f64, entities: &mut [Entity], epsilon: f64) {
        if let ConnectorKind::Oscillating {
            base_length,
            amplitude,
            phase_delay,
            frequency,
        } = self.kind
        {
            self.rest_length = base_length * (1.0 + amplitude * (frequency * t + phase_delay).sin());
        }

        let d = entities[self.start].x - entities[self.end].x;
        if let Some(force) = spring_force(d, self.rest_length, self.k, epsilon) {
            entities[self.start].apply_force(force);
            entities[self.end].apply_force(-force);
        }
    }

    /// Signed stress for renderers: `current distance - rest length`.
    /// Zero is neutral, negative compressed, positive stretched.
    pub fn stress(&self, entities: &[Entity]) -> f64 {
        entities[self.start].distance(&entities[self.end]) - self.rest_length
    }
}

/// Shared linear force law.
///
/// `d` is the displacement from the end endpoint to the start endpoint;
/// the returned force is the one to apply to the start side (the end side
/// gets its negation). Magnitude is `k * (rest_length - |d|)` along `d`.
///
/// Returns `None` when `|d|` is below `epsilon`: the direction is
/// undefined there, and a degenerate self-loop with zero rest length
/// would otherwise turn `0/0` into NaN. The contribution is simply
/// skipped for the tick.
pub(crate) fn spring_force(d: NVec2, rest_length: f64, k: f64, epsilon: f64) -> Option<NVec2> {
    let dist = d.norm();
    if dist < epsilon {
        return None;
    }
    let magnitude = k * (rest_length - dist);
    Some(d * (magnitude / dist))
}
