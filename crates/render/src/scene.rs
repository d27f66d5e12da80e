//! Retained scene graph: meshes, polylines, and lights keyed by object id.

use std::collections::BTreeMap;

use solar_core::vector::Vector3;
use solar_ephemeris::Rgb;

/// Handle to an object inserted into a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);

/// Surface material of a sphere mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshMaterial {
    /// Unlit, flat color.
    Basic(Rgb),
    /// Shaded by the scene lights.
    Standard(Rgb),
}

/// Sphere mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub position: Vector3,
    pub radius: f64,
    pub material: MeshMaterial,
}

/// Open polyline drawn with a translucent color.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub points: Vec<Vector3>,
    pub color: Rgb,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Ambient { intensity: f64 },
    Directional { intensity: f64, position: Vector3 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Mesh(Mesh),
    Line(Line),
    Light(Light),
}

#[derive(Debug, Default)]
pub struct Scene {
    next_id: u64,
    objects: BTreeMap<ObjectId, SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.objects.values().filter_map(|object| match object {
            SceneObject::Mesh(mesh) => Some(mesh),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.objects.values().filter_map(|object| match object {
            SceneObject::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.objects.values().filter_map(|object| match object {
            SceneObject::Light(light) => Some(light),
            _ => None,
        })
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}
