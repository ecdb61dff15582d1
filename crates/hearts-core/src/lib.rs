pub mod app;
pub mod audio;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod extrude;
pub mod field;
pub mod heart;
pub mod material;
pub mod orbit;
pub mod sampler;
pub mod scene;
pub mod shape;
pub mod triangulate;

pub use app::*;
pub use audio::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use environment::*;
pub use error::*;
pub use field::*;
pub use scene::*;
