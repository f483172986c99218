//! Groups: the unit of simulation state
//!
//! A `Group` owns an ordered set of entities, an ordered set of
//! connectors, a mass-weighted centroid recomputed at the end of every
//! tick, its own centroid-attraction field, and at most one transient
//! pointer-driven link.
//!
//! Per tick, in order: pointer maintenance, connector update, force
//! fields plus centroid attraction (against the previous tick's
//! centroid), integration, centroid recomputation.

use log::debug;

use crate::simulation::forces::{CentroidAttraction, FieldRegistry};
use crate::simulation::links::{spring_force, Connector};
use crate::simulation::params::Parameters;
use crate::simulation::scene::Scene;
use crate::simulation::states::{Bounds, Entity, NVec2};

/// Transient link from an immovable pointer anchor to the nearest
/// entity. Exists only while the pointer is engaged; never persisted
/// across a clear.
#[derive(Debug, Clone)]
struct PointerLink {
    anchor: Entity, // immovable by the m < 0 convention
    target: Option<usize>,
    rest_length: f64,
    k: f64,
}

/// An owned set of entities and connectors sharing one centroid.
pub struct Group {
    entities: Vec<Entity>,
    connectors: Vec<Connector>,
    centroid: Option<NVec2>, // None until the first non-zero-mass recomputation
    attraction: CentroidAttraction,
    t: f64, // accumulated simulation clock
    pointer: Option<PointerLink>,
}

impl Group {
    pub fn new(attraction: CentroidAttraction) -> Self {
        Self {
            entities: Vec::new(),
            connectors: Vec::new(),
            centroid: None,
            attraction,
            t: 0.0,
            pointer: None,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// The centroid from the most recent successful recomputation, if any.
    pub fn centroid(&self) -> Option<NVec2> {
        self.centroid
    }

    pub fn attraction(&self) -> &CentroidAttraction {
        &self.attraction
    }

    pub fn toggle_attraction(&mut self) {
        self.attraction.toggle();
    }

    /// Append one entity; returns its index for connector wiring.
    pub fn add_entity(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Append one connector. Endpoint indices must refer to entities
    /// already in this group.
    pub fn add_connector(&mut self, connector: Connector) {
        self.connectors.push(connector);
    }

    /// Merge a loaded scene into this group's existing sets. Additive:
    /// connector endpoints are rebased past the entities already here.
    pub fn merge(&mut self, scene: Scene) {
        let base = self.entities.len();
        debug!(
            "merging scene: {} entities, {} connectors (rebased by {})",
            scene.entities.len(),
            scene.connectors.len(),
            base
        );
        self.entities.extend(scene.entities);
        for mut c in scene.connectors {
            c.start += base;
            c.end += base;
            self.connectors.push(c);
        }
    }

    /// Empty both sets and drop any pointer link; the group stays alive.
    pub fn clear(&mut self) {
        debug!(
            "clearing group: {} entities, {} connectors",
            self.entities.len(),
            self.connectors.len()
        );
        self.entities.clear();
        self.connectors.clear();
        self.pointer = None;
        self.centroid = None;
    }

    /// Engage the pointer at `pos`, or move an already-engaged pointer.
    /// The nearest entity is (re)selected at the next tick.
    pub fn attach_pointer(&mut self, pos: NVec2) {
        match &mut self.pointer {
            Some(link) => link.anchor.x = pos,
            None => {
                self.pointer = Some(PointerLink {
                    anchor: Entity::anchored(pos.x, pos.y, -1.0),
                    target: None,
                    rest_length: 0.0,
                    k: 1.0,
                });
            }
        }
    }

    pub fn detach_pointer(&mut self) {
        self.pointer = None;
    }

    /// Index of the entity nearest to `pos`; ties break toward the
    /// earliest-inserted entity.
    pub fn nearest_entity(&self, pos: NVec2) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, e) in self.entities.iter().enumerate() {
            let dist = (e.x - pos).norm();
            match best {
                Some((_, d)) if dist >= d => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Advance this group by one tick of duration `dt`.
    pub fn tick(&mut self, dt: f64, bounds: Bounds, fields: &FieldRegistry, params: &Parameters) {
        self.t += dt;

        // 1. Pointer maintenance: retarget to the nearest entity and
        //    refresh the transient connector parameters.
        if let Some(pos) = self.pointer.as_ref().map(|l| l.anchor.x) {
            let nearest = self.nearest_entity(pos);
            let rest = nearest.map(|i| (self.entities[i].x - pos).norm() / 2.0);
            if let Some(link) = &mut self.pointer {
                link.target = nearest;
                link.rest_length = rest.unwrap_or(0.0);
            }
        }

        // 2. Connectors, including the transient pointer link.
        for c in &mut self.connectors {
            c.update(self.t, &mut self.entities, params.epsilon);
        }
        if let Some(link) = &self.pointer {
            if let Some(i) = link.target {
                let d = link.anchor.x - self.entities[i].x;
                if let Some(force) = spring_force(d, link.rest_length, link.k, params.epsilon) {
                    // The anchor side would receive `force`, but the
                    // anchor is immovable; only the reaction matters.
                    self.entities[i].apply_force(-force);
                }
            }
        }

        // 3. Global fields, then centroid attraction against the
        //    previous tick's centroid.
        for e in &mut self.entities {
            fields.apply_all(e, bounds);
            if let Some(c) = self.centroid {
                self.attraction.apply_toward(e, c);
            }
        }

        // 4. Integration.
        for e in &mut self.entities {
            e.integrate(dt, bounds, params);
        }

        // 5. Centroid recomputation; zero total mass retains the
        //    previous value.
        self.recompute_centroid();
    }

    fn recompute_centroid(&mut self) {
        let total_mass: f64 = self.entities.iter().map(|e| e.m).sum();
        if total_mass == 0.0 {
            return;
        }
        let weighted: NVec2 = self
            .entities
            .iter()
            .map(|e| e.x * e.m)
            .sum::<NVec2>();
        self.centroid = Some(weighted / total_mass);
    }
}
