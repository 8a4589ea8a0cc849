pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod geometry;
pub mod lifecycle;
pub mod motion;
pub mod permission;
pub mod scene;
pub mod shape;
pub mod triangulate;

pub use camera::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use font::*;
pub use geometry::*;
pub use lifecycle::*;
pub use motion::*;
pub use permission::*;
pub use scene::*;
pub use shape::*;
pub use triangulate::*;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
