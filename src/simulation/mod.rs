pub mod states;
pub mod params;
pub mod links;
pub mod forces;
pub mod group;
pub mod scene;
pub mod driver;
