//! The driver: sequences one simulation step across all groups
//!
//! Owns the active groups, the shared force-field registry, the current
//! bounds, and the runtime parameters. `step` is the only operation that
//! mutates entity positions; everything else is structural (add, clear,
//! toggle, resize, pointer engagement) and takes effect on the next step.

use log::debug;

use crate::configuration::config::SimConfig;
use crate::simulation::forces::{
    CentroidAttraction, FieldRegistry, FieldToggle, Gravity, Viscosity, WallRepulsion,
};
use crate::simulation::group::Group;
use crate::simulation::params::Parameters;
use crate::simulation::scene::{self, SceneError};
use crate::simulation::states::{Bounds, NVec2};

pub type GroupId = usize;

pub struct Driver {
    groups: Vec<Group>,
    fields: FieldRegistry,
    bounds: Bounds,
    params: Parameters,
    centroid_exponent: f64, // seed for each new group's attraction field
}

impl Driver {
    /// Build a driver from deserialized settings.
    pub fn from_config(cfg: &SimConfig) -> Self {
        let params = Parameters {
            epsilon: cfg.epsilon,
            bounce: cfg.bounce,
        };
        let fields = FieldRegistry::new(
            Gravity::new(cfg.gravity),
            Viscosity::new(cfg.viscosity),
            WallRepulsion::new(cfg.wall_repulsion, cfg.epsilon),
        );
        Self {
            groups: Vec::new(),
            fields,
            bounds: Bounds::new(cfg.width, cfg.height),
            params,
            centroid_exponent: cfg.centroid_exponent,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id]
    }

    pub fn group_mut(&mut self, id: GroupId) -> &mut Group {
        &mut self.groups[id]
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Create a new, empty group and return its id.
    pub fn add_group(&mut self) -> GroupId {
        let attraction = CentroidAttraction::new(self.centroid_exponent, self.params.epsilon);
        self.groups.push(Group::new(attraction));
        self.groups.len() - 1
    }

    /// Parse `text` and merge the result into group `id`. Additive, and
    /// all-or-nothing: on error the group is untouched.
    pub fn load_scene(&mut self, id: GroupId, text: &str) -> Result<(), SceneError> {
        let scene = scene::parse(text)?;
        self.groups[id].merge(scene);
        Ok(())
    }

    /// Empty a group's entity and connector sets; the group stays alive.
    pub fn clear_group(&mut self, id: GroupId) {
        self.groups[id].clear();
    }

    /// Advance every group by one tick of duration `dt`.
    pub fn step(&mut self, dt: f64) {
        for g in &mut self.groups {
            g.tick(dt, self.bounds, &self.fields, &self.params);
        }
    }

    /// Toggle one force field. Centroid attraction is per-group, so that
    /// toggle fans out to every group.
    pub fn toggle(&mut self, which: FieldToggle) {
        debug!("toggle {which:?}");
        if which == FieldToggle::CentroidAttraction {
            for g in &mut self.groups {
                g.toggle_attraction();
            }
        } else {
            self.fields.toggle(which);
        }
    }

    /// Engage (or move) the pointer; every group maintains its own
    /// transient link to its nearest entity.
    pub fn attach_pointer(&mut self, pos: NVec2) {
        for g in &mut self.groups {
            g.attach_pointer(pos);
        }
    }

    pub fn detach_pointer(&mut self) {
        for g in &mut self.groups {
            g.detach_pointer();
        }
    }

    pub fn resize(&mut self, bounds: Bounds) {
        debug!("resize to {}x{}", bounds.width, bounds.height);
        self.bounds = bounds;
    }

    /// Grow or shrink both dimensions by `delta`.
    pub fn grow(&mut self, delta: f64) {
        self.resize(self.bounds.grown(delta));
    }
}
