//! Orbit controls: rotate and dolly the camera around its target, with damping.

use std::f64::consts::PI;

use solar_core::vector::Vector3;

use crate::camera::PerspectiveCamera;

const POLAR_EPSILON: f64 = 1e-6;
const SETTLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub enable_damping: bool,
    pub damping_factor: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    delta_theta: f64,
    delta_phi: f64,
    scale: f64,
    disposed: bool,
}

impl OrbitControls {
    pub fn new(damping_factor: f64) -> Self {
        Self {
            enable_damping: true,
            damping_factor: damping_factor.clamp(0.0, 1.0),
            min_distance: 0.0,
            max_distance: f64::INFINITY,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            disposed: false,
        }
    }

    /// Queue a rotation: azimuth `theta` and polar `phi`, in radians.
    pub fn rotate(&mut self, theta: f64, phi: f64) {
        if self.disposed {
            return;
        }
        self.delta_theta += theta;
        self.delta_phi += phi;
    }

    /// Queue a dolly; factors above one move the camera away from the target.
    pub fn dolly(&mut self, factor: f64) {
        if self.disposed || !(factor.is_finite() && factor > 0.0) {
            return;
        }
        self.scale *= factor;
    }

    /// Apply pending input to `camera`. Returns `true` if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if self.disposed {
            return false;
        }
        let offset = camera.position.sub(&camera.target);
        let mut radius = offset.norm();
        if radius == 0.0 {
            return false;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        if self.enable_damping {
            theta += self.delta_theta * self.damping_factor;
            phi += self.delta_phi * self.damping_factor;
        } else {
            theta += self.delta_theta;
            phi += self.delta_phi;
        }
        phi = phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        let new_offset = Vector3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        let previous = camera.position;
        camera.position = Vector3::new(
            camera.target.x + new_offset.x,
            camera.target.y + new_offset.y,
            camera.target.z + new_offset.z,
        );

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;

        camera.position.sub(&previous).norm() > SETTLE_EPSILON
    }

    /// Drop pending input and ignore further updates.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
