pub mod simulation;
pub mod configuration;

pub use simulation::states::{Bounds, Entity, EntityKind, NVec2, DEFAULT_ENTITY_SIZE};
pub use simulation::links::{Connector, ConnectorKind};
pub use simulation::forces::{
    CentroidAttraction, FieldRegistry, FieldToggle, ForceField, Gravity, Viscosity, Wall,
    WallRepulsion,
};
pub use simulation::group::Group;
pub use simulation::scene::{parse, Scene, SceneError};
pub use simulation::driver::{Driver, GroupId};
pub use simulation::params::Parameters;

pub use configuration::config::{BouncePolicy, SimConfig};
