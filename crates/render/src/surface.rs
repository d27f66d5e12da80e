//! Display surfaces the engine renders into.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::RenderError;
use crate::raster::FrameBuffer;

/// A host-provided surface that reports its size and receives finished frames.
pub trait DisplaySurface {
    /// Current client area in pixels.
    fn client_size(&self) -> (u32, u32);

    /// Hand a finished frame to the surface.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), RenderError>;
}

#[derive(Debug)]
struct SurfaceState {
    size: (u32, u32),
    presented_frames: u64,
    last_frame: Option<FrameBuffer>,
}

/// In-memory surface; its [`SurfaceHandle`] lets the host resize it and read frames back.
#[derive(Debug)]
pub struct OffscreenSurface {
    state: Arc<Mutex<SurfaceState>>,
}

/// Host-side handle to an [`OffscreenSurface`].
#[derive(Debug, Clone)]
pub struct SurfaceHandle {
    state: Arc<Mutex<SurfaceState>>,
}

impl OffscreenSurface {
    pub fn new(width: u32, height: u32) -> (Self, SurfaceHandle) {
        let state = Arc::new(Mutex::new(SurfaceState {
            size: (width, height),
            presented_frames: 0,
            last_frame: None,
        }));
        (
            Self {
                state: Arc::clone(&state),
            },
            SurfaceHandle { state },
        )
    }
}

impl DisplaySurface for OffscreenSurface {
    fn client_size(&self) -> (u32, u32) {
        lock(&self.state).size
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), RenderError> {
        let mut state = lock(&self.state);
        state.presented_frames += 1;
        state.last_frame = Some(frame.clone());
        Ok(())
    }
}

impl SurfaceHandle {
    /// Simulate the host resizing the surface.
    pub fn resize(&self, width: u32, height: u32) {
        lock(&self.state).size = (width, height);
    }

    pub fn presented_frames(&self) -> u64 {
        lock(&self.state).presented_frames
    }

    pub fn last_frame(&self) -> Option<FrameBuffer> {
        lock(&self.state).last_frame.clone()
    }
}

fn lock(state: &Mutex<SurfaceState>) -> MutexGuard<'_, SurfaceState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}
