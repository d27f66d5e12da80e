//! Headless 3D view of the solar system.
//!
//! [`SolarSystem`] keeps a retained scene of the Sun, one sphere per planet and
//! one orbit polyline per planet, rebuilt wholesale on every date change. Frames
//! are rasterized with plotters into an RGB buffer and handed to a
//! [`DisplaySurface`]; [`FrameLoop`] drives the per-frame callback.

pub mod camera;
pub mod controls;
pub mod engine;
pub mod frame_loop;
pub mod raster;
pub mod scene;
pub mod surface;

use thiserror::Error;

pub use camera::PerspectiveCamera;
pub use controls::OrbitControls;
pub use engine::SolarSystem;
pub use frame_loop::{FrameLoop, FrameLoopHandle};
pub use raster::{BitmapRenderer, FrameBuffer};
pub use scene::{Scene, SceneObject};
pub use surface::{DisplaySurface, OffscreenSurface, SurfaceHandle};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render target has been disposed")]
    Disposed,
}
