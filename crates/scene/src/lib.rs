pub mod camera;
pub mod components;
pub mod world;

pub use camera::*;
pub use components::*;
pub use world::*;
