//! Fixed-rate refresh loop driving [`SolarSystem::animate`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::RenderError;
use crate::engine::SolarSystem;

pub struct FrameLoop {
    interval: Duration,
    max_frames: Option<u64>,
    running: Arc<AtomicBool>,
}

/// Stop hook for a running [`FrameLoop`]; safe to use from another thread.
#[derive(Debug, Clone)]
pub struct FrameLoopHandle {
    running: Arc<AtomicBool>,
}

impl FrameLoopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl FrameLoop {
    /// Loop ticking `frame_rate` times per second. A rate of zero renders back to back.
    pub fn new(frame_rate: u32) -> Self {
        let interval = if frame_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / frame_rate as f64)
        };
        Self {
            interval,
            max_frames: None,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Stop on its own after `frames` frames.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    pub fn handle(&self) -> FrameLoopHandle {
        FrameLoopHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Run frames until stopped, the view is disposed, or the frame limit is hit.
    /// Returns the number of frames rendered by this call.
    ///
    /// A loop runs once: on return it is marked stopped, so later calls render
    /// nothing. Build a new `FrameLoop` to resume animating.
    pub fn run(&self, view: &mut SolarSystem) -> Result<u64, RenderError> {
        let mut frames = 0u64;
        while self.running.load(Ordering::SeqCst) {
            if self.max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            let started = Instant::now();
            if !view.animate()? {
                break;
            }
            frames += 1;
            let elapsed = started.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        self.running.store(false, Ordering::SeqCst);
        Ok(frames)
    }
}
