//! Software rasterizer drawing a [`Scene`] into an RGB frame buffer with plotters.

use std::cmp::Ordering;
use std::path::Path;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use solar_core::vector::Vector3;
use solar_ephemeris::Rgb;

use crate::RenderError;
use crate::camera::{PerspectiveCamera, ScreenPoint};
use crate::scene::{Light, MeshMaterial, Scene};

/// Packed 8-bit RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Count of pixels that are not pure black.
    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .chunks_exact(3)
            .filter(|px| px.iter().any(|c| *c != 0))
            .count()
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(())
    }
}

struct MeshSprite {
    center: ScreenPoint,
    radius_px: f64,
    color: RGBColor,
}

/// Renderer owning the render target; dropping the target releases it.
#[derive(Debug)]
pub struct BitmapRenderer {
    target: Option<FrameBuffer>,
}

impl BitmapRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: Some(FrameBuffer::new(width.max(1), height.max(1))),
        }
    }

    /// Reallocate the render target for a new viewport size.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if self.target.is_some() {
            self.target = Some(FrameBuffer::new(width.max(1), height.max(1)));
        }
    }

    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.target.as_ref()
    }

    pub fn dispose(&mut self) {
        self.target = None;
    }

    /// Draw `scene` as seen from `camera`; orbit lines first, then meshes far to near.
    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Result<&FrameBuffer, RenderError> {
        let target = self.target.as_mut().ok_or(RenderError::Disposed)?;
        let (width, height) = (target.width, target.height);

        let paths: Vec<(Vec<(i32, i32)>, RGBAColor)> = scene
            .lines()
            .flat_map(|line| {
                let color = to_rgb(line.color).mix(line.opacity);
                camera
                    .clip_polyline(&line.points, width, height)
                    .into_iter()
                    .map(move |run| {
                        let points = run
                            .iter()
                            .map(|p| (p.x.round() as i32, p.y.round() as i32))
                            .collect();
                        (points, color)
                    })
            })
            .collect();

        let mut sprites: Vec<MeshSprite> = scene
            .meshes()
            .filter_map(|mesh| {
                let center = camera.project(&mesh.position, width, height)?;
                let color = match mesh.material {
                    MeshMaterial::Basic(color) => to_rgb(color),
                    MeshMaterial::Standard(color) => {
                        let intensity = light_intensity(scene, camera, &mesh.position);
                        shade(color, intensity)
                    }
                };
                Some(MeshSprite {
                    center,
                    radius_px: mesh.radius * camera.pixels_per_unit(center.depth, height),
                    color,
                })
            })
            .collect();
        sprites.sort_by(|a, b| {
            b.center
                .depth
                .partial_cmp(&a.center.depth)
                .unwrap_or(Ordering::Equal)
        });

        {
            let root =
                BitMapBackend::with_buffer(&mut target.pixels, (width, height)).into_drawing_area();
            root.fill(&BLACK).map_err(draw_error)?;
            for (points, color) in paths {
                if points.len() >= 2 {
                    root.draw(&PathElement::new(points, color))
                        .map_err(draw_error)?;
                }
            }
            for sprite in sprites {
                let radius = sprite.radius_px.round().max(1.0) as i32;
                root.draw(&Circle::new(
                    (sprite.center.x.round() as i32, sprite.center.y.round() as i32),
                    radius,
                    sprite.color.filled(),
                ))
                .map_err(draw_error)?;
            }
            root.present().map_err(draw_error)?;
        }

        Ok(target)
    }
}

fn light_intensity(scene: &Scene, camera: &PerspectiveCamera, at: &Vector3) -> f64 {
    let normal = camera.position.sub(at).normalized();
    scene
        .lights()
        .map(|light| match light {
            Light::Ambient { intensity } => *intensity,
            Light::Directional {
                intensity,
                position,
            } => intensity * normal.dot(&position.normalized()).max(0.0),
        })
        .sum::<f64>()
        .min(1.0)
}

fn shade(color: Rgb, intensity: f64) -> RGBColor {
    let scale = |c: u8| (c as f64 * intensity).round().clamp(0.0, 255.0) as u8;
    RGBColor(scale(color.0), scale(color.1), scale(color.2))
}

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}
