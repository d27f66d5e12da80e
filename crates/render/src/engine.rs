//! The solar-system view: owns the scene, camera, controls, and render target.

use chrono::{DateTime, Utc};
use log::debug;
use solar_config::RenderConfig;
use solar_core::vector::Vector3;
use solar_ephemeris::{Rgb, SUN_COLOR, catalog};
use solar_orbits::solar_system;

use crate::RenderError;
use crate::camera::PerspectiveCamera;
use crate::controls::OrbitControls;
use crate::raster::{BitmapRenderer, FrameBuffer};
use crate::scene::{Light, Line, Mesh, MeshMaterial, ObjectId, Scene, SceneObject};
use crate::surface::DisplaySurface;

const SUN_RADIUS: f64 = 0.5;
const PLANET_RADIUS: f64 = 0.3;
const ORBIT_COLOR: Rgb = Rgb(0xFF, 0xFF, 0xFF);
const ORBIT_OPACITY: f64 = 0.3;
const AMBIENT_INTENSITY: f64 = 0.5;
const DIRECTIONAL_INTENSITY: f64 = 1.0;
const DIRECTIONAL_POSITION: Vector3 = Vector3::new(5.0, 5.0, 5.0);

pub struct SolarSystem {
    scene: Scene,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    renderer: BitmapRenderer,
    surface: Box<dyn DisplaySurface>,
    settings: RenderConfig,
    viewport: (u32, u32),
    planets: Vec<ObjectId>,
    orbits: Vec<ObjectId>,
    current_date: Option<DateTime<Utc>>,
    frames_rendered: u64,
    disposed: bool,
}

impl SolarSystem {
    /// Build the static scene (lights and Sun) sized to `surface`.
    pub fn new(surface: Box<dyn DisplaySurface>, settings: RenderConfig) -> Self {
        let viewport = surface.client_size();

        let mut camera = PerspectiveCamera::new(
            settings.fov_deg,
            aspect(viewport),
            settings.near,
            settings.far,
        );
        camera.position = Vector3::from(settings.camera_position);

        let mut scene = Scene::new();
        scene.add(SceneObject::Light(Light::Ambient {
            intensity: AMBIENT_INTENSITY,
        }));
        scene.add(SceneObject::Light(Light::Directional {
            intensity: DIRECTIONAL_INTENSITY,
            position: DIRECTIONAL_POSITION,
        }));
        scene.add(SceneObject::Mesh(Mesh {
            position: Vector3::ZERO,
            radius: SUN_RADIUS,
            material: MeshMaterial::Basic(SUN_COLOR),
        }));

        Self {
            scene,
            camera,
            controls: OrbitControls::new(settings.damping_factor),
            renderer: BitmapRenderer::new(viewport.0, viewport.1),
            surface,
            settings,
            viewport,
            planets: Vec::new(),
            orbits: Vec::new(),
            current_date: None,
            frames_rendered: 0,
            disposed: false,
        }
    }

    /// Replace every planet mesh and orbit line with ones computed for `date`.
    pub fn update_planets(&mut self, date: DateTime<Utc>) {
        for id in self.planets.drain(..).chain(self.orbits.drain(..)) {
            self.scene.remove(id);
        }

        let scale = self.settings.scale;
        for planet in solar_system(date, self.settings.orbit_points) {
            let descriptor = catalog::entry(planet.planet);
            let mesh = self.scene.add(SceneObject::Mesh(Mesh {
                position: planet.position.scale(scale),
                radius: PLANET_RADIUS,
                material: MeshMaterial::Standard(descriptor.color),
            }));
            self.planets.push(mesh);

            if let Some(points) = planet.orbit_points {
                let orbit = self.scene.add(SceneObject::Line(Line {
                    points: points.iter().map(|p| p.scale(scale)).collect(),
                    color: ORBIT_COLOR,
                    opacity: ORBIT_OPACITY,
                }));
                self.orbits.push(orbit);
            }
        }

        self.current_date = Some(date);
        debug!(
            "scene rebuilt for {date}: {} planets, {} orbits",
            self.planets.len(),
            self.orbits.len()
        );
    }

    /// Render one frame. Returns `Ok(false)` once the view has been disposed.
    pub fn animate(&mut self) -> Result<bool, RenderError> {
        if self.disposed {
            return Ok(false);
        }
        let size = self.surface.client_size();
        if size != self.viewport {
            self.handle_resize(size.0, size.1);
        }
        self.controls.update(&mut self.camera);
        let frame = self.renderer.render(&self.scene, &self.camera)?;
        self.surface.present(frame)?;
        self.frames_rendered += 1;
        Ok(true)
    }

    /// Recompute projection and reallocate the render target for a new viewport.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.aspect = aspect(self.viewport);
        self.camera.update_projection_matrix();
        self.renderer.set_size(width, height);
        debug!("viewport resized to {width}x{height}");
    }

    /// Release the render target and controls. Further frames are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.renderer.dispose();
        self.controls.dispose();
        self.disposed = true;
        debug!("solar system view disposed after {} frames", self.frames_rendered);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn planet_meshes(&self) -> &[ObjectId] {
        &self.planets
    }

    pub fn orbit_lines(&self) -> &[ObjectId] {
        &self.orbits
    }

    pub fn current_date(&self) -> Option<DateTime<Utc>> {
        self.current_date
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// The most recently rendered frame, if the render target is still alive.
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.renderer.frame()
    }
}

fn aspect((width, height): (u32, u32)) -> f64 {
    if height == 0 {
        1.0
    } else {
        width as f64 / height as f64
    }
}
