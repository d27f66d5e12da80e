//! Perspective camera with a right-handed, y-up view.

use nalgebra as na;
use solar_core::vector::Vector3;

/// A world point projected into pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Distance in front of the camera along the view axis.
    pub depth: f64,
}

#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Vector3,
    pub target: Vector3,
    projection: na::Perspective3<f64>,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f64, aspect: f64, near: f64, far: f64) -> Self {
        let aspect = sanitize_aspect(aspect);
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vector3::new(0.0, 0.0, 1.0),
            target: Vector3::ZERO,
            projection: na::Perspective3::new(aspect, fov_deg.to_radians(), near, far),
        }
    }

    /// Recompute the projection after changing fov, aspect, or clip planes.
    pub fn update_projection_matrix(&mut self) {
        self.aspect = sanitize_aspect(self.aspect);
        self.projection =
            na::Perspective3::new(self.aspect, self.fov_deg.to_radians(), self.near, self.far);
    }

    pub fn projection_matrix(&self) -> na::Matrix4<f64> {
        *self.projection.as_matrix()
    }

    pub fn view(&self) -> na::Isometry3<f64> {
        na::Isometry3::look_at_rh(
            &to_point(&self.position),
            &to_point(&self.target),
            &na::Vector3::y(),
        )
    }

    /// Project a world point into a `width` x `height` pixel viewport.
    ///
    /// Returns `None` for points outside the near/far clip range.
    pub fn project(&self, point: &Vector3, width: u32, height: u32) -> Option<ScreenPoint> {
        let view_point = self.view().transform_point(&to_point(point));
        let depth = -view_point.z;
        if depth <= self.near || depth >= self.far {
            return None;
        }
        Some(self.to_screen(&view_point, width, height))
    }

    /// Project a polyline, clipping each segment to the near/far range.
    ///
    /// Every returned run is a connected stretch of visible line; a new run starts
    /// wherever the polyline leaves the clip range and comes back.
    pub fn clip_polyline(&self, points: &[Vector3], width: u32, height: u32) -> Vec<Vec<ScreenPoint>> {
        let view = self.view();
        let view_points: Vec<na::Point3<f64>> = points
            .iter()
            .map(|p| view.transform_point(&to_point(p)))
            .collect();

        let mut runs = Vec::new();
        let mut current: Vec<ScreenPoint> = Vec::new();
        for pair in view_points.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let Some((t0, t1)) = self.clip_range(-a.z, -b.z) else {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
                continue;
            };
            if t0 > 0.0 && !current.is_empty() {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
            }
            if current.is_empty() {
                current.push(self.to_screen(&a.lerp(b, t0), width, height));
            }
            current.push(self.to_screen(&a.lerp(b, t1), width, height));
            if t1 < 1.0 {
                runs.push(std::mem::take(&mut current));
            }
        }
        if current.len() >= 2 {
            runs.push(current);
        }
        runs
    }

    /// Parameter range of a segment from depth `da` to `db` inside `[near, far]`.
    fn clip_range(&self, da: f64, db: f64) -> Option<(f64, f64)> {
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        // Each bound as `p * t <= q` along the segment.
        for (p, q) in [(da - db, da - self.near), (db - da, self.far - da)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let t = q / p;
                if p < 0.0 {
                    t0 = t0.max(t);
                } else {
                    t1 = t1.min(t);
                }
            }
        }
        (t0 < t1).then_some((t0, t1))
    }

    fn to_screen(&self, view_point: &na::Point3<f64>, width: u32, height: u32) -> ScreenPoint {
        let ndc = self.projection.project_point(view_point);
        ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * width as f64,
            y: (1.0 - ndc.y) * 0.5 * height as f64,
            depth: -view_point.z,
        }
    }

    /// Pixels covered by one world unit at `depth` for a viewport `height` pixels tall.
    pub fn pixels_per_unit(&self, depth: f64, height: u32) -> f64 {
        let half_fov = (self.fov_deg.to_radians() * 0.5).tan();
        height as f64 * 0.5 / (depth * half_fov)
    }
}

fn to_point(v: &Vector3) -> na::Point3<f64> {
    na::Point3::new(v.x, v.y, v.z)
}

fn sanitize_aspect(aspect: f64) -> f64 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
