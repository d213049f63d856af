//! An animated solar scene: three planets, an orbiting moon and a random
//! starfield, rendered with wgpu and driven by a fixed-step animation
//! loop plus a scroll-mapped camera.

pub mod animation;
pub mod app;
pub mod assets;
pub mod camera;
pub mod input;
pub mod model;
pub mod orbit;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod starfield;

pub use animation::{apply_scroll, Animator};
pub use app::{run_headless, run_windowed, RunOptions};
pub use camera::CameraPose;
pub use model::SceneModel;
pub use scene::{BodyKind, Light, Scene, SceneObject};
