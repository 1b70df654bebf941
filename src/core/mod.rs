pub mod assets;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod controls;
pub mod frame_loop;
pub mod mesh;
pub mod model;
pub mod scene;
pub mod scroll;
pub mod starfield;

pub use assets::*;
pub use camera::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use controls::*;
pub use frame_loop::*;
pub use mesh::*;
pub use model::*;
pub use scene::*;
pub use scroll::*;
pub use starfield::*;

// Shaders bundled as string constants
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
pub static PLANET_WGSL: &str = include_str!("../../shaders/planet.wgsl");
